//! Desktop event loop for the pager demo.
//!
//! The pager is laid out in logical pixels and rasterized in software into a
//! `pixels` surface sized to the window's physical pixels.

use std::sync::Arc;

use anyhow::Context;
use infinipager_foundation::{PagerEvent, PointerEventKind};
use infinipager_platform_desktop_winit::{page_direction_for_key, DesktopWinitPlatform};
use infinipager_render_pixels::PixelsRenderer;
use infinipager_ui::InfiniteHorizontalPager;
use infinipager_ui_graphics::Color;
use pixels::{Pixels, SurfaceTexture};
use web_time::Instant;
use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalPosition, PhysicalSize};
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowId};

use crate::launcher::AppSettings;

pub struct PagerApp {
    settings: AppSettings,
    pager: InfiniteHorizontalPager<Color>,
    renderer: PixelsRenderer,
    platform: DesktopWinitPlatform,
    window: Option<Arc<Window>>,
    pixels: Option<Pixels<'static>>,
    cursor: PhysicalPosition<f64>,
    started: Instant,
    error: Option<anyhow::Error>,
}

impl PagerApp {
    /// Builds the app state. The window is created once the event loop resumes.
    pub fn new(settings: AppSettings, items: &[Color]) -> anyhow::Result<Self> {
        let pager = InfiniteHorizontalPager::new(items, settings.pager)
            .context("invalid pager configuration")?
            .context("the demo needs at least one color")?;

        Ok(Self {
            settings,
            pager,
            renderer: PixelsRenderer::new(),
            platform: DesktopWinitPlatform::default(),
            window: None,
            pixels: None,
            cursor: PhysicalPosition::new(0.0, 0.0),
            started: Instant::now(),
            error: None,
        })
    }

    pub fn pager(&self) -> &InfiniteHorizontalPager<Color> {
        &self.pager
    }

    /// Consumes the app, returning the error that stopped the event loop, if any.
    pub fn into_result(self) -> anyhow::Result<()> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn uptime_ms(&self) -> i64 {
        self.started.elapsed().as_millis() as i64
    }

    fn frame_time_nanos(&self) -> u64 {
        self.started.elapsed().as_nanos() as u64
    }

    fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()> {
        let attributes = Window::default_attributes()
            .with_title(self.settings.window_title.clone())
            .with_inner_size(LogicalSize::new(
                self.settings.initial_width as f64,
                self.settings.initial_height as f64,
            ));
        let window = Arc::new(
            event_loop
                .create_window(attributes)
                .context("failed to create window")?,
        );

        self.platform.set_scale_factor(window.scale_factor());
        let size = window.inner_size();
        let surface = SurfaceTexture::new(size.width, size.height, window.clone());
        let pixels =
            Pixels::new(size.width, size.height, surface).context("failed to create surface")?;
        self.pager.set_viewport(self.platform.logical_size(size), 1.0);

        log::info!(
            "window {}x{} at scale {}",
            size.width,
            size.height,
            window.scale_factor()
        );
        window.request_redraw();
        self.window = Some(window);
        self.pixels = Some(pixels);
        Ok(())
    }

    fn resize(&mut self, size: PhysicalSize<u32>) -> anyhow::Result<()> {
        if size.width == 0 || size.height == 0 {
            return Ok(());
        }
        if let Some(pixels) = self.pixels.as_mut() {
            pixels.resize_surface(size.width, size.height)?;
            pixels.resize_buffer(size.width, size.height)?;
        }
        self.pager.set_viewport(self.platform.logical_size(size), 1.0);
        self.request_redraw();
        Ok(())
    }

    fn redraw(&mut self) -> anyhow::Result<()> {
        let frame = self.pager.on_frame(self.frame_time_nanos());
        for event in &frame.events {
            if let PagerEvent::Reconciled(outcome) = event {
                log::debug!("reconciled: {outcome:?}");
            }
        }

        let (Some(window), Some(pixels)) = (self.window.as_ref(), self.pixels.as_mut()) else {
            return Ok(());
        };
        let size = window.inner_size();
        if size.width == 0 || size.height == 0 {
            return Ok(());
        }

        self.renderer
            .rebuild_scene(&self.pager, self.platform.scale_factor() as f32, |color| *color);
        self.renderer
            .draw(pixels.frame_mut(), size.width, size.height)?;
        pixels.render().context("failed to present frame")?;

        if frame.needs_next_frame {
            window.request_redraw();
        }
        Ok(())
    }

    fn dispatch_pointer(&mut self, kind: PointerEventKind) {
        let event = self
            .platform
            .pointer_event(kind, self.cursor, self.uptime_ms());
        if self.pager.on_pointer_event(&event) {
            self.request_redraw();
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{err:#}");
        self.error = Some(err);
        event_loop.exit();
    }
}

impl ApplicationHandler for PagerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(err) = self.create_window(event_loop) {
            self.fail(event_loop, err);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Err(err) = self.resize(size) {
                    self.fail(event_loop, err);
                }
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.platform.set_scale_factor(scale_factor);
                if let Some(size) = self.window.as_ref().map(|window| window.inner_size()) {
                    if let Err(err) = self.resize(size) {
                        self.fail(event_loop, err);
                    }
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = position;
                self.dispatch_pointer(PointerEventKind::Move);
            }
            WindowEvent::CursorLeft { .. } => self.dispatch_pointer(PointerEventKind::Cancel),
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => self.dispatch_pointer(PointerEventKind::Down),
                ElementState::Released => self.dispatch_pointer(PointerEventKind::Up),
            },
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed || event.repeat {
                    return;
                }
                if let Some(direction) = page_direction_for_key(event.physical_key) {
                    self.pager.scroll_to_adjacent(direction);
                    self.request_redraw();
                }
            }
            WindowEvent::RedrawRequested => {
                if let Err(err) = self.redraw() {
                    self.fail(event_loop, err);
                }
            }
            _ => {}
        }
    }
}
