use crate::foundation::error::{StoryframeError, StoryframeResult};

pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Logical page width in page units.
pub const PAGE_WIDTH: f64 = 412.0;
/// Logical page height in page units (safe zone).
pub const PAGE_HEIGHT: f64 = 618.0;
/// Full-bleed page height in page units (9:16 against [`PAGE_WIDTH`]).
pub const FULLBLEED_HEIGHT: f64 = PAGE_WIDTH * 16.0 / 9.0;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Page bounds an element layer renders into, in page units.
pub struct PageCanvas {
    /// Canvas width.
    pub width: f64,
    /// Canvas height.
    pub height: f64,
}

impl PageCanvas {
    /// Construct a canvas with validated dimensions.
    pub fn new(width: f64, height: f64) -> StoryframeResult<Self> {
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Err(StoryframeError::validation(
                "canvas width/height must be finite and > 0",
            ));
        }
        Ok(Self { width, height })
    }

    /// The default story page safe zone.
    pub fn story_page() -> Self {
        Self {
            width: PAGE_WIDTH,
            height: PAGE_HEIGHT,
        }
    }

    /// The default story page extended to full bleed.
    pub fn story_fullbleed() -> Self {
        Self {
            width: PAGE_WIDTH,
            height: FULLBLEED_HEIGHT,
        }
    }
}

impl Default for PageCanvas {
    fn default() -> Self {
        Self::story_page()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Ratio of editor pixels per page unit.
///
/// Element geometry is persisted in page units; the editor renders at an
/// arbitrary zoom, so every resolved box passes through the active scale.
pub struct CoordScale(f64);

impl CoordScale {
    /// Identity scale (1 editor pixel per page unit).
    pub const IDENTITY: Self = Self(1.0);

    /// Construct a validated scale factor.
    pub fn new(px_per_unit: f64) -> StoryframeResult<Self> {
        if !px_per_unit.is_finite() || px_per_unit <= 0.0 {
            return Err(StoryframeError::validation(
                "coordinate scale must be finite and > 0",
            ));
        }
        Ok(Self(px_per_unit))
    }

    /// Convert a page-unit length to editor pixels.
    pub fn to_px(self, units: f64) -> f64 {
        units * self.0
    }

    /// Convert an editor-pixel length back to page units.
    pub fn to_units(self, px: f64) -> f64 {
        px / self.0
    }

    /// Raw pixels-per-unit factor.
    pub fn factor(self) -> f64 {
        self.0
    }
}

impl Default for CoordScale {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Straight (non-premultiplied) RGBA8 color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Fully opaque black.
    pub fn black() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 255,
        }
    }

    /// Whether this color contributes any visible pixels.
    pub fn is_visible(self) -> bool {
        self.a > 0
    }
}
