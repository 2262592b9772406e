//! Infinipager desktop demo: four colored pages that loop forever.

pub mod app;
pub mod launcher;

use infinipager_ui_graphics::Color;

pub use launcher::{AppLauncher, AppSettings};

/// Page colors shown by the demo, in order.
pub const DEMO_COLORS: [Color; 4] = [Color::CYAN, Color::RED, Color::BLUE, Color::GREEN];
