use crate::{
    foundation::core::{CoordScale, PageCanvas},
    story::model::Element,
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// The resolved on-screen rectangle an element occupies for rendering.
///
/// Recomputed on every render and never persisted. Dimensions are in the
/// target coordinate space (page units scaled by the active [`CoordScale`]).
pub struct ElementBox {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width, always > 0 for valid elements.
    pub width: f64,
    /// Height, always > 0 for valid elements.
    pub height: f64,
    /// Rotation around the box center, degrees.
    pub rotation_angle: f64,
}

impl ElementBox {
    /// Width/height ratio.
    pub fn ratio(&self) -> f64 {
        self.width / self.height
    }
}

/// Resolve the render box for an element.
///
/// Background and fill elements are forced to the full page bounds with zero
/// rotation, overriding the element's own stored geometry; everything else is
/// the stored geometry passed through the active coordinate scale.
pub fn resolve_element_box(
    element: &Element,
    canvas: PageCanvas,
    scale: CoordScale,
) -> ElementBox {
    if element.is_background || element.is_fill {
        return ElementBox {
            x: 0.0,
            y: 0.0,
            width: scale.to_px(canvas.width),
            height: scale.to_px(canvas.height),
            rotation_angle: 0.0,
        };
    }
    ElementBox {
        x: scale.to_px(element.x),
        y: scale.to_px(element.y),
        width: scale.to_px(element.width),
        height: scale.to_px(element.height),
        rotation_angle: element.rotation_angle,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/box_resolver.rs"]
mod tests;
