//! Application launcher and window settings.

use infinipager_foundation::PagerConfig;
use infinipager_ui_graphics::Color;
use winit::event_loop::{ControlFlow, EventLoop};

use crate::app::PagerApp;

/// Configuration for application settings.
#[derive(Clone, Debug)]
pub struct AppSettings {
    /// Window title
    pub window_title: String,
    /// Initial window width in logical pixels
    pub initial_width: u32,
    /// Initial window height in logical pixels
    pub initial_height: u32,
    /// Settle tolerance, page animation and fling threshold of the pager
    pub pager: PagerConfig,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            window_title: "Infinipager".into(),
            initial_width: 800,
            initial_height: 600,
            pager: PagerConfig::default(),
        }
    }
}

/// Builder that configures and opens the demo window.
///
/// # Example
///
/// ```no_run
/// use infinipager_demo::{AppLauncher, DEMO_COLORS};
///
/// fn main() -> anyhow::Result<()> {
///     AppLauncher::new()
///         .with_title("My Pager")
///         .with_size(1024, 768)
///         .run(&DEMO_COLORS)
/// }
/// ```
#[derive(Clone, Debug, Default)]
pub struct AppLauncher {
    settings: AppSettings,
}

impl AppLauncher {
    /// Create a new application launcher with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.settings.window_title = title.into();
        self
    }

    /// Set the initial window size.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.settings.initial_width = width;
        self.settings.initial_height = height;
        self
    }

    pub fn with_pager_config(mut self, config: PagerConfig) -> Self {
        self.settings.pager = config;
        self
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    /// Open the window and run the event loop until it is closed.
    pub fn run(self, items: &[Color]) -> anyhow::Result<()> {
        let mut app = PagerApp::new(self.settings, items)?;
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Wait);
        event_loop.run_app(&mut app)?;
        app.into_result()
    }
}
