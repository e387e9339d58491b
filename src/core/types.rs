use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Space reserved around the plot area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Margins {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Margins {
    #[must_use]
    pub const fn new(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// `left + right`, or `None` on overflow.
    #[must_use]
    pub const fn horizontal(self) -> Option<u32> {
        self.left.checked_add(self.right)
    }

    #[must_use]
    pub const fn vertical(self) -> Option<u32> {
        self.top.checked_add(self.bottom)
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::new(30, 40, 80, 50)
    }
}

/// Inner drawing rectangle derived from a viewport and its margins.
///
/// Scales map into plot-area space (`0..width`, `0..height`); `origin_x` and
/// `origin_y` translate plot-area coordinates into canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub origin_x: f64,
    pub origin_y: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    /// Returns `None` when the margins leave no room to draw.
    #[must_use]
    pub fn from_viewport(viewport: Viewport, margins: Margins) -> Option<Self> {
        let width = viewport.width.checked_sub(margins.horizontal()?)?;
        let height = viewport.height.checked_sub(margins.vertical()?)?;
        if width == 0 || height == 0 {
            return None;
        }

        Some(Self {
            origin_x: f64::from(margins.left),
            origin_y: f64::from(margins.top),
            width: f64::from(width),
            height: f64::from(height),
        })
    }

    #[must_use]
    pub fn to_canvas(self, x: f64, y: f64) -> (f64, f64) {
        (self.origin_x + x, self.origin_y + y)
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.origin_x + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.origin_y + self.height
    }
}
