use crate::{
    foundation::core::Affine,
    layout::box_resolver::ElementBox,
    mask::catalog::{MaskDefinition, MaskType, mask_by_type},
    story::model::Element,
};

/// DOM-unique clip id for an element instance in the editor.
pub fn clip_id(element_id: &str) -> String {
    format!("mask-{element_id}")
}

/// Page-qualified mask id for thumbnail documents.
///
/// Gallery thumbnails compose multiple masked pages into one SVG document,
/// so ids carry the page to avoid collisions.
pub fn thumbnail_mask_id(page_id: &str, element_id: &str) -> String {
    format!("mask-{page_id}-{element_id}")
}

/// Unit-square clip transform: scales Y by the shape's assumed ratio so the
/// path renders correctly against a non-square box.
pub fn unit_clip_transform(def: &MaskDefinition) -> Affine {
    Affine::scale_non_uniform(1.0, def.ratio)
}

/// Absolute-pixel clip transform for a concrete box.
pub fn pixel_clip_transform(def: &MaskDefinition, element_box: &ElementBox) -> Affine {
    Affine::translate((element_box.x, element_box.y))
        * Affine::scale_non_uniform(element_box.width, element_box.height * def.ratio)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Output form of the clip region.
pub enum ClipVariant<'a> {
    /// Editor clip with per-instance id and optional drop-target affordance.
    Interactive {
        /// Show the translucent outline used while another element is
        /// draggable onto this mask.
        show_drop_target: bool,
    },
    /// Static display clip without interaction affordances.
    Display,
    /// SVG `<mask>` for thumbnail documents, page-qualified ids.
    Thumbnail {
        /// Page the element belongs to.
        page_id: &'a str,
    },
}

#[derive(Clone, Debug, PartialEq)]
/// Rendered clip region for one element.
pub struct ClipMarkup {
    /// Document-unique clip/mask id.
    pub id: String,
    /// Defs fragment to inject into the output document.
    pub defs: String,
    /// Style or attribute reference pointing content at the clip.
    pub reference: String,
    /// Drop-target outline fragment, interactive variant only.
    pub overlay: Option<String>,
}

/// Render the clip region for an element's box.
///
/// Returns `None` for the rectangle mask (including border-suppressed masks):
/// the default shape is rendered without any clip-path machinery.
pub fn render_clip(
    element: &Element,
    element_box: &ElementBox,
    variant: ClipVariant<'_>,
) -> Option<ClipMarkup> {
    let mask_type = element.effective_mask();
    if mask_type == MaskType::Rectangle {
        return None;
    }
    let def = mask_by_type(mask_type);

    match variant {
        ClipVariant::Interactive { show_drop_target } => {
            let mut markup = object_bounding_clip(&element.id, def);
            if show_drop_target {
                markup.overlay = Some(drop_target_overlay(def));
            }
            Some(markup)
        }
        ClipVariant::Display => Some(object_bounding_clip(&element.id, def)),
        ClipVariant::Thumbnail { page_id } => Some(thumbnail_mask(page_id, element, element_box, def)),
    }
}

fn object_bounding_clip(element_id: &str, def: &MaskDefinition) -> ClipMarkup {
    let id = clip_id(element_id);
    let defs = format!(
        "<svg width=\"0\" height=\"0\"><defs>\
         <clipPath id=\"{id}\" clipPathUnits=\"objectBoundingBox\" \
         transform=\"scale(1 {ratio})\"><path d=\"{path}\"/></clipPath>\
         </defs></svg>",
        ratio = def.ratio,
        path = def.path,
    );
    let reference = format!("clip-path: url(#{id});");
    ClipMarkup {
        id,
        defs,
        reference,
        overlay: None,
    }
}

fn drop_target_overlay(def: &MaskDefinition) -> String {
    format!(
        "<svg viewBox=\"0 0 1 {ratio}\" preserveAspectRatio=\"none\">\
         <path d=\"{path}\" fill=\"none\" stroke=\"#1a73e8\" stroke-opacity=\"0.48\" \
         stroke-width=\"0.02\" vector-effect=\"non-scaling-stroke\"/></svg>",
        ratio = def.ratio,
        path = def.path,
    )
}

fn thumbnail_mask(
    page_id: &str,
    element: &Element,
    element_box: &ElementBox,
    def: &MaskDefinition,
) -> ClipMarkup {
    let id = thumbnail_mask_id(page_id, &element.id);
    let [a, b, c, d, e, f] = pixel_clip_transform(def, element_box).as_coeffs();
    let defs = format!(
        "<mask id=\"{id}\" maskUnits=\"userSpaceOnUse\" \
         x=\"{x}\" y=\"{y}\" width=\"{w}\" height=\"{h}\">\
         <path d=\"{path}\" transform=\"matrix({a} {b} {c} {d} {e} {f})\" fill=\"#fff\"/>\
         </mask>",
        x = element_box.x,
        y = element_box.y,
        w = element_box.width,
        h = element_box.height,
        path = def.path,
    );
    let reference = format!("mask=\"url(#{id})\"");
    ClipMarkup {
        id,
        defs,
        reference,
        overlay: None,
    }
}

#[derive(Debug, Default)]
/// Tracks the single mask currently hovered as a drop target.
///
/// Hover highlighting must be mutually exclusive across elements at any
/// instant; registering a new target displaces the previous one.
pub struct DropTargetRegistry {
    active: Option<String>,
}

impl DropTargetRegistry {
    /// Make an element the current drop target.
    pub fn register(&mut self, element_id: &str) {
        self.active = Some(element_id.to_string());
    }

    /// Clear the current target if it matches.
    pub fn unregister(&mut self, element_id: &str) {
        if self.active.as_deref() == Some(element_id) {
            self.active = None;
        }
    }

    /// Currently hovered element, if any.
    pub fn hovered(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Whether the given element is the current target.
    pub fn is_hovered(&self, element_id: &str) -> bool {
        self.active.as_deref() == Some(element_id)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/mask/clip.rs"]
mod tests;
