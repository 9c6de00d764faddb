use anyhow::Context;

use crate::{
    foundation::core::Rgba8,
    foundation::error::{StoryframeError, StoryframeResult},
    mask::catalog::MaskType,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
/// Media kind of a resource.
pub enum ResourceKind {
    /// Still raster image.
    Image,
    /// Video with intrinsic frame dimensions.
    Video,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One alternate-resolution rendition of a resource, ordered smallest first.
pub struct ResourceVariant {
    /// Rendition URL.
    pub url: String,
    /// Rendition width in pixels.
    pub width: u32,
    /// Rendition height in pixels.
    pub height: u32,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Intrinsic media descriptor.
///
/// Immutable once fetched; owned by the media library and referenced (not
/// owned) by elements. Geometry depends only on `width`/`height`, which always
/// reflect the original intrinsic dimensions regardless of which rendition is
/// currently loaded.
pub struct Resource {
    /// Media kind.
    pub kind: ResourceKind,
    /// Canonical full-resolution source URL.
    pub src: String,
    /// Natural width in pixels, always > 0.
    pub width: u32,
    /// Natural height in pixels, always > 0.
    pub height: u32,
    /// Alternate-resolution renditions for responsive selection.
    #[serde(default)]
    pub variants: Vec<ResourceVariant>,
}

impl Resource {
    /// Construct a resource with validated intrinsic dimensions.
    pub fn new(
        kind: ResourceKind,
        src: impl Into<String>,
        width: u32,
        height: u32,
    ) -> StoryframeResult<Self> {
        if width == 0 || height == 0 {
            return Err(StoryframeError::validation(
                "resource width/height must be > 0",
            ));
        }
        Ok(Self {
            kind,
            src: src.into(),
            width,
            height,
            variants: Vec::new(),
        })
    }

    /// Probe encoded image bytes for intrinsic dimensions.
    pub fn from_image_bytes(src: impl Into<String>, bytes: &[u8]) -> StoryframeResult<Self> {
        let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
        let rgba = dyn_img.to_rgba8();
        let (width, height) = rgba.dimensions();
        Self::new(ResourceKind::Image, src, width, height)
    }

    /// Intrinsic width/height ratio.
    pub fn intrinsic_ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }

    /// Whether responsive rendition selection applies to this resource.
    pub fn supports_variants(&self) -> bool {
        self.kind == ResourceKind::Image && !self.variants.is_empty()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Mirroring flags applied to the rendered media.
pub struct Flip {
    /// Mirror across the vertical axis.
    #[serde(default)]
    pub horizontal: bool,
    /// Mirror across the horizontal axis.
    #[serde(default)]
    pub vertical: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Per-side border widths plus color, in page units.
pub struct Border {
    /// Left width.
    #[serde(default)]
    pub left: f64,
    /// Right width.
    #[serde(default)]
    pub right: f64,
    /// Top width.
    #[serde(default)]
    pub top: f64,
    /// Bottom width.
    #[serde(default)]
    pub bottom: f64,
    /// Border color.
    #[serde(default)]
    pub color: Rgba8,
}

impl Border {
    /// Whether any side would paint visible pixels.
    pub fn is_visible(&self) -> bool {
        self.color.is_visible()
            && (self.left > 0.0 || self.right > 0.0 || self.top > 0.0 || self.bottom > 0.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Per-corner border radius in page units.
pub struct BorderRadius {
    /// Top-left radius.
    #[serde(default)]
    pub top_left: f64,
    /// Top-right radius.
    #[serde(default)]
    pub top_right: f64,
    /// Bottom-left radius.
    #[serde(default)]
    pub bottom_left: f64,
    /// Bottom-right radius.
    #[serde(default)]
    pub bottom_right: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A placeable media unit on a story page.
///
/// Placement is persisted in logical page units. `scale` is a zoom percentage
/// on top of cover-fit sizing (100 = exact cover); `focal_x`/`focal_y` anchor
/// which part of the oversized media stays centered in the visible box.
pub struct Element {
    /// Stable element identifier.
    pub id: String,
    /// Left edge in page units.
    pub x: f64,
    /// Top edge in page units.
    pub y: f64,
    /// Width in page units.
    pub width: f64,
    /// Height in page units.
    pub height: f64,
    /// Rotation around the box center, degrees.
    #[serde(default)]
    pub rotation_angle: f64,
    /// Zoom percentage, >= 100.
    #[serde(default = "default_scale")]
    pub scale: f64,
    /// Horizontal focal anchor percentage in `[0, 100]`.
    #[serde(default = "default_focal")]
    pub focal_x: f64,
    /// Vertical focal anchor percentage in `[0, 100]`.
    #[serde(default = "default_focal")]
    pub focal_y: f64,
    /// Mirroring flags.
    #[serde(default)]
    pub flip: Flip,
    /// Clip shape; absent means rectangle (no visible clipping).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mask: Option<MaskType>,
    /// Whether this element is the page background layer.
    #[serde(default)]
    pub is_background: bool,
    /// Whether this element fills the page bounds.
    #[serde(default)]
    pub is_fill: bool,
    /// Optional border.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<Border>,
    /// Optional corner radius.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<BorderRadius>,
}

fn default_scale() -> f64 {
    100.0
}

fn default_focal() -> f64 {
    50.0
}

impl Element {
    /// Minimal element covering a box at exact cover-fit.
    pub fn new(id: impl Into<String>, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            width,
            height,
            rotation_angle: 0.0,
            scale: default_scale(),
            focal_x: default_focal(),
            focal_y: default_focal(),
            flip: Flip::default(),
            mask: None,
            is_background: false,
            is_fill: false,
            border: None,
            border_radius: None,
        }
    }

    /// Stored mask type, with the rectangle default applied.
    pub fn mask_type(&self) -> MaskType {
        self.mask.unwrap_or_default()
    }

    /// Mask type after border suppression.
    ///
    /// Borders are only well-defined on the rectangle mask, so a visible
    /// border forces the no-clip path; the border still participates in
    /// layout.
    pub fn effective_mask(&self) -> MaskType {
        if self.border.is_some_and(|b| b.is_visible()) {
            MaskType::Rectangle
        } else {
            self.mask_type()
        }
    }

    /// Validate persisted fields.
    ///
    /// Sub-100 `scale` is not rejected here; the geometry engine clamps it up
    /// to the floor. Everything that would make box resolution meaningless is.
    pub fn validate(&self) -> StoryframeResult<()> {
        if self.id.trim().is_empty() {
            return Err(StoryframeError::validation("element id must be non-empty"));
        }
        for (name, v) in [
            ("x", self.x),
            ("y", self.y),
            ("width", self.width),
            ("height", self.height),
            ("rotationAngle", self.rotation_angle),
        ] {
            if !v.is_finite() {
                return Err(StoryframeError::validation(format!(
                    "element '{}' has non-finite {name}",
                    self.id
                )));
            }
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(StoryframeError::validation(format!(
                "element '{}' width/height must be > 0",
                self.id
            )));
        }
        for (name, v) in [("focalX", self.focal_x), ("focalY", self.focal_y)] {
            if !v.is_finite() || !(0.0..=100.0).contains(&v) {
                return Err(StoryframeError::validation(format!(
                    "element '{}' {name} must be within [0, 100]",
                    self.id
                )));
            }
        }
        Ok(())
    }
}
