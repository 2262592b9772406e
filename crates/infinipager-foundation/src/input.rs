use infinipager_ui_graphics::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// A pointer event in logical coordinates relative to the pager viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub position: Point,
    /// Monotonic event time in milliseconds, used for velocity tracking.
    pub uptime_ms: i64,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point, uptime_ms: i64) -> Self {
        Self {
            kind,
            position,
            uptime_ms,
        }
    }

    pub fn down(x: f32, y: f32, uptime_ms: i64) -> Self {
        Self::new(PointerEventKind::Down, Point::new(x, y), uptime_ms)
    }

    pub fn moved(x: f32, y: f32, uptime_ms: i64) -> Self {
        Self::new(PointerEventKind::Move, Point::new(x, y), uptime_ms)
    }

    pub fn up(x: f32, y: f32, uptime_ms: i64) -> Self {
        Self::new(PointerEventKind::Up, Point::new(x, y), uptime_ms)
    }
}
