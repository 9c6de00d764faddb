use crate::foundation::{
    core::BezPath,
    error::{StoryframeError, StoryframeResult},
};

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
/// Named clip shape applied to an element's rendered content.
///
/// [`MaskType::Rectangle`] is the sentinel "no visible clip" default and is
/// rendered without any clip-path machinery.
pub enum MaskType {
    /// Full box, no clipping.
    #[default]
    Rectangle,
    /// Circle inscribed in the box.
    Circle,
    /// Upward-pointing triangle.
    Triangle,
    /// Heart.
    Heart,
    /// Five-pointed star.
    Star,
    /// Regular pentagon.
    Pentagon,
    /// Regular hexagon.
    Hexagon,
    /// Organic blob.
    Blob,
}

impl MaskType {
    /// Stable lowercase identifier used in persisted data and DOM ids.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Rectangle => "rectangle",
            Self::Circle => "circle",
            Self::Triangle => "triangle",
            Self::Heart => "heart",
            Self::Star => "star",
            Self::Pentagon => "pentagon",
            Self::Hexagon => "hexagon",
            Self::Blob => "blob",
        }
    }

    /// Parse a slug; `None` for unknown values (callers fall back to rectangle).
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug.trim().to_ascii_lowercase().as_str() {
            "rectangle" => Some(Self::Rectangle),
            "circle" => Some(Self::Circle),
            "triangle" => Some(Self::Triangle),
            "heart" => Some(Self::Heart),
            "star" => Some(Self::Star),
            "pentagon" => Some(Self::Pentagon),
            "hexagon" => Some(Self::Hexagon),
            "blob" => Some(Self::Blob),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// A catalog entry: unit-square SVG path data plus the aspect ratio the path
/// assumes when rendered into a square box.
pub struct MaskDefinition {
    /// Shape identifier.
    pub mask_type: MaskType,
    /// Human-readable display name.
    pub name: &'static str,
    /// SVG path data expressed in a unit square.
    pub path: &'static str,
    /// Aspect ratio the path assumes; clip transforms scale Y by this factor.
    pub ratio: f64,
}

impl MaskDefinition {
    /// Whether this entry is the no-clip sentinel.
    pub fn is_rectangle(&self) -> bool {
        self.mask_type == MaskType::Rectangle
    }

    /// Parse the unit-square path data into a Bezier path.
    pub fn bez_path(&self) -> StoryframeResult<BezPath> {
        BezPath::from_svg(self.path)
            .map_err(|e| StoryframeError::geometry(format!("bad mask path data: {e}")))
    }
}

/// The full shape registry, rectangle first.
pub static MASKS: &[MaskDefinition] = &[
    MaskDefinition {
        mask_type: MaskType::Rectangle,
        name: "Rectangle",
        path: "M 0,0 L 1,0 L 1,1 L 0,1 Z",
        ratio: 1.0,
    },
    MaskDefinition {
        mask_type: MaskType::Circle,
        name: "Circle",
        path: "M 0.5,0 A 0.5,0.5 0 1 1 0.5,1 A 0.5,0.5 0 1 1 0.5,0 Z",
        ratio: 1.0,
    },
    MaskDefinition {
        mask_type: MaskType::Triangle,
        name: "Triangle",
        path: "M 0.5,0 L 1,1 L 0,1 Z",
        ratio: 0.866,
    },
    MaskDefinition {
        mask_type: MaskType::Heart,
        name: "Heart",
        path: "M 0.5,0.25 C 0.5,0.1 0.374,0 0.25,0 C 0.112,0 0,0.112 0,0.25 \
               C 0,0.496 0.19,0.683 0.5,0.919 C 0.81,0.683 1,0.496 1,0.25 \
               C 1,0.112 0.888,0 0.75,0 C 0.626,0 0.5,0.1 0.5,0.25 Z",
        ratio: 0.919,
    },
    MaskDefinition {
        mask_type: MaskType::Star,
        name: "Star",
        path: "M 0.5,0 L 0.618,0.345 L 1,0.363 L 0.708,0.597 L 0.809,0.951 \
               L 0.5,0.745 L 0.191,0.951 L 0.292,0.597 L 0,0.363 L 0.382,0.345 Z",
        ratio: 0.951,
    },
    MaskDefinition {
        mask_type: MaskType::Pentagon,
        name: "Pentagon",
        path: "M 0.5,0 L 1,0.363 L 0.809,0.951 L 0.191,0.951 L 0,0.363 Z",
        ratio: 0.951,
    },
    MaskDefinition {
        mask_type: MaskType::Hexagon,
        name: "Hexagon",
        path: "M 0.25,0 L 0.75,0 L 1,0.5 L 0.75,1 L 0.25,1 L 0,0.5 Z",
        ratio: 0.866,
    },
    MaskDefinition {
        mask_type: MaskType::Blob,
        name: "Blob",
        path: "M 0.839,0.188 C 0.978,0.394 1.02,0.639 0.902,0.796 \
               C 0.785,0.953 0.51,1.02 0.295,0.945 C 0.08,0.87 -0.07,0.652 0.03,0.452 \
               C 0.13,0.252 0.48,0.07 0.664,0.04 C 0.77,0.025 0.76,0.07 0.839,0.188 Z",
        ratio: 1.0,
    },
];

/// Look up a definition by shape type.
pub fn mask_by_type(mask_type: MaskType) -> &'static MaskDefinition {
    MASKS
        .iter()
        .find(|m| m.mask_type == mask_type)
        .unwrap_or(&MASKS[0])
}

/// Look up a definition by slug, falling back to rectangle for unknown or
/// absent values.
pub fn mask_by_slug(slug: &str) -> &'static MaskDefinition {
    match MaskType::from_slug(slug) {
        Some(t) => mask_by_type(t),
        None => &MASKS[0],
    }
}

#[cfg(test)]
#[path = "../../tests/unit/mask/catalog.rs"]
mod tests;
