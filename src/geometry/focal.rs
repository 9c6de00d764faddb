//! Bidirectional mapping between pixel offsets and focal percentages.
//!
//! [`offset_to_focal`] and [`focal_to_offset`] are exact inverses while the
//! offset stays within `[0, media_side - box_side]`. Callers clamp pixel
//! deltas into that range before converting; out-of-bounds drags saturate at
//! the edge rather than round-tripping.

/// Convert a media offset back into a focal percentage.
pub fn offset_to_focal(box_side: f64, media_side: f64, offset: f64) -> f64 {
    ((offset + box_side / 2.0) / media_side) * 100.0
}

/// Convert a focal percentage into a clamped media offset.
pub fn focal_to_offset(box_side: f64, media_side: f64, focal: f64) -> f64 {
    (media_side * focal / 100.0 - box_side / 2.0).clamp(0.0, media_side - box_side)
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/focal.rs"]
mod tests;
