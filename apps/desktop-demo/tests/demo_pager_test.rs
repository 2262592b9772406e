use infinipager_demo::app::PagerApp;
use infinipager_demo::{AppLauncher, AppSettings, DEMO_COLORS};
use infinipager_foundation::PagerConfig;
use infinipager_testing::PagerRobot;
use infinipager_ui_graphics::Color;

#[test]
fn launcher_builder_overrides_defaults() {
    let launcher = AppLauncher::new()
        .with_title("Pager")
        .with_size(320, 240)
        .with_pager_config(PagerConfig::default().with_settle_tolerance(0.01));

    let settings = launcher.settings();
    assert_eq!(settings.window_title, "Pager");
    assert_eq!((settings.initial_width, settings.initial_height), (320, 240));
    assert_eq!(settings.pager.settle_tolerance, 0.01);
}

#[test]
fn app_starts_on_first_demo_color() {
    let app = PagerApp::new(AppSettings::default(), &DEMO_COLORS).expect("demo colors are valid");
    assert_eq!(app.pager().current_page(), 1);
    assert_eq!(app.pager().current_item(), Some(&Color::CYAN));
}

#[test]
fn app_rejects_empty_colors() {
    let err = PagerApp::new(AppSettings::default(), &[])
        .err()
        .expect("empty colors are rejected");
    assert!(err.to_string().contains("at least one color"));
}

#[test]
fn app_rejects_invalid_pager_config() {
    let settings = AppSettings {
        pager: PagerConfig::default().with_settle_tolerance(f32::NAN),
        ..AppSettings::default()
    };
    assert!(PagerApp::new(settings, &DEMO_COLORS).is_err());
}

#[test]
fn demo_colors_loop_in_both_directions() {
    let mut robot = PagerRobot::launch(480, 320, &DEMO_COLORS);

    robot.swipe_left();
    robot.assert_showing(&Color::RED);
    robot.swipe_right();
    robot.swipe_right();
    robot.assert_showing(&Color::GREEN);
    robot.assert_idle_on_page(4);
    robot.click_next();
    robot.assert_showing(&Color::CYAN);
    robot.assert_idle_on_page(1);
}
