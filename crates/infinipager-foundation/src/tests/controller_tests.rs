use super::RecordingHost;
use crate::pager::{
    is_settled_within, ExtendedSequence, InfinitePagerController, PageDirection, PagedHost,
    PagerConfig, PagerEvent, Reconciliation, ScrollLock,
};

const COLORS: [&str; 4] = ["cyan", "red", "blue", "green"];

fn attached(page_count: usize) -> (InfinitePagerController, RecordingHost) {
    let mut controller = InfinitePagerController::from_config(page_count, &PagerConfig::default());
    let mut host = RecordingHost::new(page_count, 0);
    controller.attach(&mut host);
    host.jumps.clear();
    host.scroll_toggles.clear();
    (controller, host)
}

#[test]
fn attach_starts_on_first_real_page() {
    for n in 1..=8usize {
        let mut controller = InfinitePagerController::new(n + 2, 0.05);
        let mut host = RecordingHost::new(n + 2, 0);
        controller.attach(&mut host);
        assert_eq!(host.current_page(), 1);
        assert_eq!(controller.initial_page(), 1);
        assert_eq!(controller.lock(), ScrollLock::Scrollable);
        assert!(host.is_user_scroll_enabled());
    }
}

#[test]
fn page_change_locks_and_disables_user_scroll() {
    let (mut controller, mut host) = attached(6);
    host.land_on(2, -0.4);

    let events = controller.on_frame(&mut host);

    assert_eq!(events.as_slice(), &[PagerEvent::PageChanged { page: 2 }]);
    assert!(controller.is_scroll_locked());
    assert_eq!(host.scroll_toggles, vec![false]);
}

#[test]
fn lock_holds_until_settled() {
    let (mut controller, mut host) = attached(6);
    host.land_on(2, -0.4);
    controller.on_frame(&mut host);

    for fraction in [-0.3, -0.2, -0.1, -0.06] {
        host.offset_fraction = fraction;
        let events = controller.on_frame(&mut host);
        assert!(events.is_empty(), "fraction {fraction} must not reconcile");
        assert!(controller.is_scroll_locked());
        assert!(!host.is_user_scroll_enabled());
    }

    host.offset_fraction = -0.05;
    let events = controller.on_frame(&mut host);
    assert_eq!(
        events.as_slice(),
        &[PagerEvent::Reconciled(Reconciliation::Stayed { page: 2 })]
    );
    assert_eq!(controller.lock(), ScrollLock::Scrollable);
    assert!(host.is_user_scroll_enabled());
    assert!(host.jumps.is_empty());
}

#[test]
fn settling_on_trailing_clone_jumps_to_first_real_page() {
    let items = ExtendedSequence::new(&COLORS).expect("non-empty");
    let (mut controller, mut host) = attached(items.len());
    host.land_on(items.last_index(), 0.0);
    let before = items[host.current_page()];

    let events = controller.on_frame(&mut host);

    assert_eq!(
        events.as_slice(),
        &[
            PagerEvent::PageChanged { page: 5 },
            PagerEvent::Reconciled(Reconciliation::Jumped { from: 5, to: 1 }),
        ]
    );
    assert_eq!(host.jumps, vec![1]);
    assert!(host.animated_requests.is_empty(), "corrective jump must not animate");
    assert_eq!(before, items[host.current_page()]);
    assert_eq!(before, "cyan");
}

#[test]
fn settling_on_leading_clone_jumps_to_last_real_page() {
    let items = ExtendedSequence::new(&COLORS).expect("non-empty");
    let (mut controller, mut host) = attached(items.len());
    host.land_on(0, 0.02);
    let before = items[host.current_page()];

    controller.on_frame(&mut host);

    assert_eq!(host.jumps, vec![items.last_real_page()]);
    assert_eq!(host.current_page(), 4);
    assert_eq!(before, items[host.current_page()]);
    assert_eq!(before, "green");
    assert!(!controller.is_scroll_locked());
}

#[test]
fn real_pages_never_jump() {
    for n in 1..=6usize {
        for page in 1..=n {
            let (mut controller, mut host) = attached(n + 2);
            controller.on_page_changed(page, &mut host);
            host.land_on(page, 0.0);
            assert_eq!(controller.reconcile(&mut host), Reconciliation::Stayed { page });
            assert!(host.jumps.is_empty());
        }
    }
}

#[test]
fn corrective_jump_is_not_a_page_change() {
    let (mut controller, mut host) = attached(6);
    host.land_on(5, 0.0);
    controller.on_frame(&mut host);
    host.scroll_toggles.clear();

    let events = controller.on_frame(&mut host);

    assert!(events.is_empty());
    assert!(host.scroll_toggles.is_empty());
    assert_eq!(controller.lock(), ScrollLock::Scrollable);
}

#[test]
fn single_item_clones_collapse_onto_page_one() {
    let (mut controller, mut host) = attached(3);
    host.land_on(2, 0.0);
    controller.on_frame(&mut host);
    assert_eq!(host.current_page(), 1);

    host.land_on(0, 0.0);
    controller.on_frame(&mut host);
    assert_eq!(host.current_page(), 1);
}

#[test]
fn scroll_to_adjacent_requests_unclamped_neighbour() {
    let (mut controller, mut host) = attached(6);
    controller.scroll_to_adjacent(PageDirection::Next, &mut host);
    controller.scroll_to_adjacent(PageDirection::Previous, &mut host);
    host.land_on(0, 0.0);
    controller.scroll_to_adjacent(PageDirection::Previous, &mut host);
    host.land_on(5, 0.0);
    controller.scroll_to_adjacent(PageDirection::Next, &mut host);

    assert_eq!(host.animated_requests, vec![2, 0, -1, 6]);
}

#[test]
fn settle_tolerance_is_configurable() {
    let strict = PagerConfig::default().with_settle_tolerance(0.01);
    let mut controller = InfinitePagerController::from_config(6, &strict);
    assert!(!controller.is_settled(0.03));
    assert!(controller.is_settled(-0.01));

    controller.set_settle_tolerance(0.2);
    assert!(controller.is_settled(0.15));
    assert_eq!(controller.settle_tolerance(), 0.2);
}

#[test]
fn settle_window_is_symmetric_and_inclusive() {
    assert!(is_settled_within(0.0, 0.05));
    assert!(is_settled_within(0.05, 0.05));
    assert!(is_settled_within(-0.05, 0.05));
    assert!(!is_settled_within(0.0501, 0.05));
    assert!(!is_settled_within(-0.0501, 0.05));
    assert!(!is_settled_within(f32::NAN, 0.05));
}

#[test]
fn reset_clamps_clone_page_into_real_range() {
    let (mut controller, mut host) = attached(6);
    host.land_on(5, 0.0);
    controller.on_page_changed(5, &mut host);

    host.page_count = 4;
    controller.reset(4, &mut host);

    assert_eq!(controller.page_count(), 4);
    assert_eq!(host.current_page(), 2);
    assert_eq!(controller.lock(), ScrollLock::Scrollable);
    assert!(host.is_user_scroll_enabled());
}
