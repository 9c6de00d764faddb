use crate::{foundation::core::CoordScale, story::model::Element};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
/// Lifecycle of an interactive gesture.
///
/// Strictly sequential per element: a new gesture may not begin until the
/// previous one reaches a terminal state. `Cancelled` never mutates persisted
/// element state.
pub enum GesturePhase {
    /// Pointer is down, no movement yet.
    #[default]
    Idle,
    /// Pointer deltas are being accumulated as ephemeral visual feedback.
    Dragging,
    /// Gesture ended and produced a commit record.
    Committed,
    /// Gesture was abandoned; pending deltas discarded.
    Cancelled,
}

impl GesturePhase {
    /// Whether the gesture has reached a terminal state.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Committed | Self::Cancelled)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
/// Properties a committed gesture wants persisted.
///
/// Fields are `None` when the gesture leaves them untouched. Placement values
/// are expressed in the coordinate space of the box the gesture was begun
/// with; use [`ElementUpdate::to_units`] before persisting if that box was
/// scaled.
pub struct ElementUpdate {
    /// New left edge.
    pub x: Option<f64>,
    /// New top edge.
    pub y: Option<f64>,
    /// New width.
    pub width: Option<f64>,
    /// New height.
    pub height: Option<f64>,
    /// New zoom percentage.
    pub scale: Option<f64>,
    /// New horizontal focal anchor.
    pub focal_x: Option<f64>,
    /// New vertical focal anchor.
    pub focal_y: Option<f64>,
}

impl ElementUpdate {
    /// Whether this update changes nothing.
    pub fn is_noop(&self) -> bool {
        *self == Self::default()
    }

    /// Convert placement fields from editor pixels back to page units.
    ///
    /// Scale and focal values are percentages and pass through unchanged.
    pub fn to_units(self, scale: CoordScale) -> Self {
        Self {
            x: self.x.map(|v| scale.to_units(v)),
            y: self.y.map(|v| scale.to_units(v)),
            width: self.width.map(|v| scale.to_units(v)),
            height: self.height.map(|v| scale.to_units(v)),
            ..self
        }
    }

    /// Apply the update to an element persisted in the same coordinate space.
    pub fn apply_to(&self, element: &mut Element) {
        if let Some(v) = self.x {
            element.x = v;
        }
        if let Some(v) = self.y {
            element.y = v;
        }
        if let Some(v) = self.width {
            element.width = v;
        }
        if let Some(v) = self.height {
            element.height = v;
        }
        if let Some(v) = self.scale {
            element.scale = v;
        }
        if let Some(v) = self.focal_x {
            element.focal_x = v;
        }
        if let Some(v) = self.focal_y {
            element.focal_y = v;
        }
    }
}
