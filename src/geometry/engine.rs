use crate::{layout::box_resolver::ElementBox, story::model::Element, story::model::Resource};

/// Scale floor: media is never smaller than the box it covers.
pub const MIN_SCALE: f64 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Computed rendering geometry of a resource within a box.
///
/// `width`/`height` are the rendered pixel size of the media, each at least
/// the box's respective dimension; `offset_x`/`offset_y` shift the media's
/// top-left left/up from the box's top-left so the media visually covers the
/// box. Purely derived and unrounded; rounding is a renderer concern.
pub struct MediaFrame {
    /// Rendered media width.
    pub width: f64,
    /// Rendered media height.
    pub height: f64,
    /// Leftward shift of the media relative to the box.
    pub offset_x: f64,
    /// Upward shift of the media relative to the box.
    pub offset_y: f64,
    /// Effective zoom percentage after the floor clamp.
    pub scale: f64,
    /// Effective horizontal focal anchor.
    pub focal_x: f64,
    /// Effective vertical focal anchor.
    pub focal_y: f64,
}

/// Base cover-fit dimensions: the smallest media size that exactly covers the
/// box with no letterboxing, preserving the resource's intrinsic ratio.
pub fn base_cover_size(resource: &Resource, box_width: f64, box_height: f64) -> (f64, f64) {
    let box_ratio = box_width / box_height;
    let res_ratio = resource.intrinsic_ratio();
    if res_ratio <= box_ratio {
        // resource relatively taller: pin width, overflow height
        (box_width, box_width / res_ratio)
    } else {
        (box_height * res_ratio, box_height)
    }
}

/// Compute the media frame for a resource inside a box.
///
/// Cover fit with zoom and focal anchor. `scale` is clamped up to the
/// [`MIN_SCALE`] floor and non-finite focal inputs fall back to the centered
/// default; out-of-range focal values are clamped into `[0, 100]`. No upper
/// scale bound is enforced here; interactive callers constrain it.
///
/// Guarantees for valid inputs: `width >= box_width`, `height >= box_height`,
/// and each offset lies within `[0, media - box]`.
pub fn compute_media_frame(
    resource: &Resource,
    box_width: f64,
    box_height: f64,
    scale: f64,
    focal_x: f64,
    focal_y: f64,
) -> MediaFrame {
    let scale = if scale.is_finite() && scale > 0.0 {
        scale.max(MIN_SCALE)
    } else {
        MIN_SCALE
    };
    let focal_x = effective_focal(focal_x);
    let focal_y = effective_focal(focal_y);

    let (base_w, base_h) = base_cover_size(resource, box_width, box_height);
    let width = base_w * scale / 100.0;
    let height = base_h * scale / 100.0;

    let offset_x = (width * focal_x / 100.0 - box_width / 2.0).clamp(0.0, width - box_width);
    let offset_y = (height * focal_y / 100.0 - box_height / 2.0).clamp(0.0, height - box_height);

    MediaFrame {
        width,
        height,
        offset_x,
        offset_y,
        scale,
        focal_x,
        focal_y,
    }
}

/// Compute the media frame for an element inside its resolved box.
pub fn media_frame_for_element(
    resource: &Resource,
    element: &Element,
    element_box: &ElementBox,
) -> MediaFrame {
    compute_media_frame(
        resource,
        element_box.width,
        element_box.height,
        element.scale,
        element.focal_x,
        element.focal_y,
    )
}

fn effective_focal(focal: f64) -> f64 {
    if focal.is_finite() {
        focal.clamp(0.0, 100.0)
    } else {
        50.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/engine.rs"]
mod tests;
