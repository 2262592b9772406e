use infinipager_ui_graphics::{Color, Point, Rect};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShapeKind {
    Rect,
    /// Circle inscribed in the shape's rect.
    Circle,
    Triangle([Point; 3]),
}

#[derive(Clone, Debug, PartialEq)]
pub struct DrawShape {
    /// Bounds in physical pixels. For triangles this is the bounding box.
    pub rect: Rect,
    pub kind: ShapeKind,
    pub color: Color,
    pub z_index: usize,
    pub clip: Option<Rect>,
}

impl DrawShape {
    /// Whether the pixel center `(x, y)` lies inside the shape.
    pub fn covers(&self, x: f32, y: f32) -> bool {
        match self.kind {
            ShapeKind::Rect => true,
            ShapeKind::Circle => {
                let radius = self.rect.width.min(self.rect.height) / 2.0;
                Point::new(x, y).distance_to(self.rect.center()) <= radius
            }
            ShapeKind::Triangle([a, b, c]) => {
                let edge = |p: Point, q: Point| (q.x - p.x) * (y - p.y) - (q.y - p.y) * (x - p.x);
                let (d1, d2, d3) = (edge(a, b), edge(b, c), edge(c, a));
                let has_negative = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
                let has_positive = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
                !(has_negative && has_positive)
            }
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub shapes: Vec<DrawShape>,
    next_z: usize,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
        self.next_z = 0;
    }

    pub fn push_rect(&mut self, rect: Rect, color: Color, clip: Option<Rect>) {
        self.push(rect, ShapeKind::Rect, color, clip);
    }

    pub fn push_circle(&mut self, rect: Rect, color: Color, clip: Option<Rect>) {
        self.push(rect, ShapeKind::Circle, color, clip);
    }

    pub fn push_triangle(&mut self, points: [Point; 3], color: Color, clip: Option<Rect>) {
        let min_x = points.iter().map(|p| p.x).fold(f32::INFINITY, f32::min);
        let min_y = points.iter().map(|p| p.y).fold(f32::INFINITY, f32::min);
        let max_x = points.iter().map(|p| p.x).fold(f32::NEG_INFINITY, f32::max);
        let max_y = points.iter().map(|p| p.y).fold(f32::NEG_INFINITY, f32::max);
        let bounds = Rect::new(min_x, min_y, max_x - min_x, max_y - min_y);
        self.push(bounds, ShapeKind::Triangle(points), color, clip);
    }

    fn push(&mut self, rect: Rect, kind: ShapeKind, color: Color, clip: Option<Rect>) {
        let z_index = self.next_z;
        self.next_z += 1;
        self.shapes.push(DrawShape {
            rect,
            kind,
            color,
            z_index,
            clip,
        });
    }
}
