use infinipager_demo::{AppLauncher, DEMO_COLORS};

fn main() -> anyhow::Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    log::info!("drag a page, click the arrows or press Left/Right; the pager wraps around");

    AppLauncher::new()
        .with_title("Infinite Pager")
        .with_size(480, 320)
        .run(&DEMO_COLORS)
}
