pub use kurbo::{Affine, BezPath, Point, Rect, Size, Vec2};

/// A pair of values, one per axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Axes<T> {
    /// Horizontal component.
    pub x: T,
    /// Vertical component.
    pub y: T,
}

impl<T> Axes<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    pub fn splat(v: T) -> Self
    where
        T: Clone,
    {
        Self { x: v.clone(), y: v }
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Axes<U> {
        Axes {
            x: f(self.x),
            y: f(self.y),
        }
    }
}

/// Four values, one per edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Sides<T> {
    pub left: T,
    pub top: T,
    pub right: T,
    pub bottom: T,
}

impl<T> Sides<T> {
    pub fn new(left: T, top: T, right: T, bottom: T) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn splat(v: T) -> Self
    where
        T: Clone,
    {
        Self {
            left: v.clone(),
            top: v.clone(),
            right: v.clone(),
            bottom: v,
        }
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Sides<U> {
        Sides {
            left: f(self.left),
            top: f(self.top),
            right: f(self.right),
            bottom: f(self.bottom),
        }
    }

    /// Edges in drawing order (top, right, bottom, left) with their side tag.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        [
            (Side::Top, &self.top),
            (Side::Right, &self.right),
            (Side::Bottom, &self.bottom),
            (Side::Left, &self.left),
        ]
        .into_iter()
    }

    pub fn get(&self, side: Side) -> &T {
        match side {
            Side::Left => &self.left,
            Side::Top => &self.top,
            Side::Right => &self.right,
            Side::Bottom => &self.bottom,
        }
    }

    /// Whether all four edges hold equal values.
    pub fn is_uniform(&self) -> bool
    where
        T: PartialEq,
    {
        self.left == self.top && self.top == self.right && self.right == self.bottom
    }
}

impl Sides<f64> {
    /// `left + right`.
    pub fn sum_x(&self) -> f64 {
        self.left + self.right
    }

    /// `top + bottom`.
    pub fn sum_y(&self) -> f64 {
        self.top + self.bottom
    }
}

/// One of the four edges of a box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Top,
    Right,
    Bottom,
}

impl Side {
    /// Corner at the start of this edge when walking clockwise.
    pub fn start_corner(self) -> Corner {
        match self {
            Side::Top => Corner::TopLeft,
            Side::Right => Corner::TopRight,
            Side::Bottom => Corner::BottomRight,
            Side::Left => Corner::BottomLeft,
        }
    }

    /// Corner at the end of this edge when walking clockwise.
    pub fn end_corner(self) -> Corner {
        self.start_corner().next()
    }
}

/// Four values, one per corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Corners<T> {
    pub top_left: T,
    pub top_right: T,
    pub bottom_right: T,
    pub bottom_left: T,
}

impl<T> Corners<T> {
    pub fn splat(v: T) -> Self
    where
        T: Clone,
    {
        Self {
            top_left: v.clone(),
            top_right: v.clone(),
            bottom_right: v.clone(),
            bottom_left: v,
        }
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Corners<U> {
        Corners {
            top_left: f(self.top_left),
            top_right: f(self.top_right),
            bottom_right: f(self.bottom_right),
            bottom_left: f(self.bottom_left),
        }
    }

    pub fn get(&self, corner: Corner) -> &T {
        match corner {
            Corner::TopLeft => &self.top_left,
            Corner::TopRight => &self.top_right,
            Corner::BottomRight => &self.bottom_right,
            Corner::BottomLeft => &self.bottom_left,
        }
    }
}

/// One of the four corners of a box, clockwise from the top left.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl Corner {
    pub fn next(self) -> Corner {
        match self {
            Corner::TopLeft => Corner::TopRight,
            Corner::TopRight => Corner::BottomRight,
            Corner::BottomRight => Corner::BottomLeft,
            Corner::BottomLeft => Corner::TopLeft,
        }
    }
}

/// Space a box is laid out into.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Region {
    /// Container width in points; percentages of width resolve against it.
    pub width: f64,
    /// Container height in points, when the container has a fixed one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

impl Region {
    pub fn new(width: f64, height: Option<f64>) -> Self {
        Self { width, height }
    }

    /// Region with no usable space; percentages resolve to zero.
    pub fn unconstrained() -> Self {
        Self {
            width: 0.0,
            height: None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
