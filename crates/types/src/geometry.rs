//! Logical pixel geometry: points and axis-aligned hitboxes.

/// A point in logical pixel space.
///
/// Positions are immutable values; the `move_*` helpers return a new
/// position and leave `self` untouched.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Return a position shifted by `delta` along the x axis.
    pub fn move_x(&self, delta: f64) -> Self {
        Self::new(self.x + delta, self.y)
    }

    /// Return a position shifted by `delta` along the y axis.
    pub fn move_y(&self, delta: f64) -> Self {
        Self::new(self.x, self.y + delta)
    }

    pub fn horizontal_distance_to(&self, other: Position) -> f64 {
        (self.x - other.x).abs()
    }

    pub fn vertical_distance_to(&self, other: Position) -> f64 {
        (self.y - other.y).abs()
    }
}

/// Axis-aligned rectangle spanned by its upper-left and lower-right corners.
///
/// The rectangle is closed: every edge and corner belongs to it. Two cells
/// sharing an edge therefore both report a hit for points on that edge;
/// callers that dispatch over a whole grid pick the first match.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hitbox {
    left_upper: Position,
    right_lower: Position,
}

impl Hitbox {
    pub fn new(left_upper: Position, right_lower: Position) -> Self {
        debug_assert!(left_upper.x <= right_lower.x && left_upper.y <= right_lower.y);
        Self {
            left_upper,
            right_lower,
        }
    }

    pub fn left_upper(&self) -> Position {
        self.left_upper
    }

    pub fn right_lower(&self) -> Position {
        self.right_lower
    }

    /// Whether `point` lies inside the rectangle, boundary included.
    pub fn is_hit(&self, point: Position) -> bool {
        point.x >= self.left_upper.x
            && point.x <= self.right_lower.x
            && point.y >= self.left_upper.y
            && point.y <= self.right_lower.y
    }

    pub fn width(&self) -> f64 {
        self.left_upper.horizontal_distance_to(self.right_lower)
    }

    pub fn height(&self) -> f64 {
        self.left_upper.vertical_distance_to(self.right_lower)
    }

    pub fn center(&self) -> Position {
        self.left_upper
            .move_x(self.width() / 2.0)
            .move_y(self.height() / 2.0)
    }
}
