use crate::{
    foundation::math::round_hundredths,
    geometry::engine::media_frame_for_element,
    layout::box_resolver::ElementBox,
    mask::clip::{ClipVariant, render_clip},
    story::model::{Element, Resource, ResourceKind},
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Page-relative percentage geometry for the media inside its wrapper.
///
/// Values are rounded to two decimals before emission so serialized markup is
/// compact and stable across re-serialization; the live engine stays
/// unrounded.
pub struct StaticMediaStyle {
    /// Left offset as a percentage of the box width (negative or zero).
    pub left_pct: f64,
    /// Top offset as a percentage of the box height (negative or zero).
    pub top_pct: f64,
    /// Media width as a percentage of the box width (>= 100).
    pub width_pct: f64,
    /// Media height as a percentage of the box height (>= 100).
    pub height_pct: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Serialized static representation of one element for playback.
pub struct StaticElement {
    /// Wrapper id consumed by the playback runtime for DOM addressing.
    pub dom_id: String,
    /// Percentage-based media geometry.
    pub style: StaticMediaStyle,
    /// Mask defs fragment, absent for the rectangle default.
    pub mask_defs: Option<String>,
    /// Clip style reference matching `mask_defs`.
    pub mask_reference: Option<String>,
}

/// Serialize an element's computed geometry into percentage-based styles.
///
/// Recomputes the media frame through the engine (never re-derives the
/// arithmetic) and converts pixel geometry to page-relative percentages.
/// Fill and background elements short-circuit to the full box regardless of
/// computed offsets, matching the box override rule.
#[tracing::instrument(skip(resource, element, element_box), fields(element_id = %element.id))]
pub fn serialize_element(
    resource: &Resource,
    element: &Element,
    element_box: &ElementBox,
) -> StaticElement {
    let style = if element.is_background || element.is_fill {
        StaticMediaStyle {
            left_pct: 0.0,
            top_pct: 0.0,
            width_pct: 100.0,
            height_pct: 100.0,
        }
    } else {
        let frame = media_frame_for_element(resource, element, element_box);
        StaticMediaStyle {
            left_pct: round_hundredths(-frame.offset_x / element_box.width * 100.0),
            top_pct: round_hundredths(-frame.offset_y / element_box.height * 100.0),
            width_pct: round_hundredths(frame.width / element_box.width * 100.0),
            height_pct: round_hundredths(frame.height / element_box.height * 100.0),
        }
    };

    let clip = render_clip(element, element_box, ClipVariant::Display);
    let (mask_defs, mask_reference) = match clip {
        Some(c) => (Some(c.defs), Some(c.reference)),
        None => (None, None),
    };

    StaticElement {
        dom_id: format!("el-{}", element.id),
        style,
        mask_defs,
        mask_reference,
    }
}

impl StaticElement {
    /// Emit the static wrapper markup for playback.
    pub fn to_markup(&self, resource: &Resource) -> String {
        let tag = match resource.kind {
            ResourceKind::Image => "img",
            ResourceKind::Video => "video",
        };
        let clip_style = self.mask_reference.as_deref().unwrap_or("");
        let defs = self.mask_defs.as_deref().unwrap_or("");
        format!(
            "<div id=\"{id}\" style=\"position:absolute;overflow:hidden;{clip_style}\">{defs}\
             <{tag} src=\"{src}\" style=\"position:absolute;\
             left:{l}%;top:{t}%;width:{w}%;height:{h}%\"/></div>",
            id = self.dom_id,
            src = resource.src,
            l = self.style.left_pct,
            t = self.style.top_pct,
            w = self.style.width_pct,
            h = self.style.height_pct,
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/output/serializer.rs"]
mod tests;
