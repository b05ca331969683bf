//! Pixel-space primitives for one box-and-whisker glyph

use serde::{Deserialize, Serialize};

/// A point in pixel coordinates
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A straight line segment
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

impl Segment {
    /// Horizontal segment at height `y`
    pub const fn horizontal(x1: f64, x2: f64, y: f64) -> Self {
        Self {
            from: Point::new(x1, y),
            to: Point::new(x2, y),
        }
    }

    /// Vertical segment at `x`
    pub const fn vertical(x: f64, y1: f64, y2: f64) -> Self {
        Self {
            from: Point::new(x, y1),
            to: Point::new(x, y2),
        }
    }

    pub fn length(&self) -> f64 {
        (self.to.x - self.from.x).hypot(self.to.y - self.from.y)
    }
}

/// An axis-aligned rectangle; `(x, y)` is the top-left corner
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Everything needed to draw one category's box plot
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoxGlyph {
    /// Category this glyph belongs to
    pub category: String,
    /// Whisker from min to Q1
    pub whisker_low: Segment,
    /// Whisker from Q3 to max
    pub whisker_high: Segment,
    /// Cap at the min end
    pub cap_low: Segment,
    /// Cap at the max end
    pub cap_high: Segment,
    /// Box from Q1 to Q3
    pub body: Rect,
    /// Median marker spanning the box height
    pub median: Segment,
}

impl BoxGlyph {
    /// Vertical center of the glyph (the whisker line)
    pub fn center_y(&self) -> f64 {
        self.whisker_low.from.y
    }
}
