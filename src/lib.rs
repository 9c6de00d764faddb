//! Storyframe is the media geometry and masking engine of a visual story editor.
//!
//! It is the pure-computation core that decides, for every image/video element
//! placed on a page, how the media is scaled and cropped to cover its box, how
//! pan/crop gestures translate pixel deltas into persisted focal point and
//! zoom, and how the element is clipped into a shape mask and re-rendered
//! identically across four output targets.
//!
//! # Pipeline overview
//!
//! 1. **Resolve**: `Element + PageCanvas + CoordScale -> ElementBox` (the
//!    background/fill override lives here)
//! 2. **Compute**: `Resource + ElementBox -> MediaFrame` (cover fit, zoom,
//!    focal anchor; one engine, no per-target arithmetic)
//! 3. **Render**: `MediaFrame -> {interactive clip, display clip, thumbnail
//!    SVG, static percentage markup}` (adapters format, never recompute)
//! 4. **Gesture**: pan/crop sessions read pointer deltas as ephemeral visual
//!    state and commit new element properties through the same engine
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Silent clamping on the hot path**: geometry never throws; scale floors
//!   at 100, focal defaults to 50, degenerate gestures commit as no-ops.
//! - **Unrounded engine**: rounding is a renderer concern; only the static
//!   serializer rounds, to a fixed two-decimal precision.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod foundation;
mod geometry;
mod gesture;
mod layout;
mod mask;
mod output;
mod story;

pub use assets::source::{ResourceCache, SourceState, select_source};
pub use assets::thumbnail::{
    ThumbnailElement, ThumbnailPage, page_thumbnail_svg, rasterize_page_thumbnails,
    rasterize_thumbnail_svg,
};
pub use foundation::core::{
    Affine, BezPath, CoordScale, FULLBLEED_HEIGHT, PAGE_HEIGHT, PAGE_WIDTH, PageCanvas, Point,
    Rect, Rgba8, Vec2,
};
pub use foundation::error::{StoryframeError, StoryframeResult};
pub use geometry::engine::{
    MIN_SCALE, MediaFrame, base_cover_size, compute_media_frame, media_frame_for_element,
};
pub use geometry::focal::{focal_to_offset, offset_to_focal};
pub use gesture::crop::{CropHandle, CropSession, MAX_SCALE};
pub use gesture::pan::PanSession;
pub use gesture::session::{ElementUpdate, GesturePhase};
pub use layout::box_resolver::{ElementBox, resolve_element_box};
pub use mask::catalog::{MASKS, MaskDefinition, MaskType, mask_by_slug, mask_by_type};
pub use mask::clip::{
    ClipMarkup, ClipVariant, DropTargetRegistry, clip_id, pixel_clip_transform, render_clip,
    thumbnail_mask_id, unit_clip_transform,
};
pub use output::serializer::{StaticElement, StaticMediaStyle, serialize_element};
pub use story::model::{
    Border, BorderRadius, Element, Flip, Resource, ResourceKind, ResourceVariant,
};
