//! Resource-side concerns: responsive source selection, the upgrade cache,
//! and thumbnail document assembly/rasterization.

/// Rendition selection and the progressive-upgrade cache.
pub mod source;
/// Thumbnail SVG assembly and rasterization.
pub mod thumbnail;
