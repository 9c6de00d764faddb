use crate::{
    geometry::engine::{MediaFrame, base_cover_size, media_frame_for_element},
    geometry::focal::offset_to_focal,
    gesture::session::{ElementUpdate, GesturePhase},
    layout::box_resolver::ElementBox,
    story::model::{Element, Resource},
};

/// Upper zoom bound enforced on crop commits (the editor's display bound).
pub const MAX_SCALE: f64 = 400.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Which crop-box handle is being dragged.
pub enum CropHandle {
    /// Left edge.
    Left,
    /// Right edge.
    Right,
    /// Top edge.
    Top,
    /// Bottom edge.
    Bottom,
    /// Top-left corner.
    TopLeft,
    /// Top-right corner.
    TopRight,
    /// Bottom-left corner.
    BottomLeft,
    /// Bottom-right corner.
    BottomRight,
}

impl CropHandle {
    fn moves_left_edge(self) -> bool {
        matches!(self, Self::Left | Self::TopLeft | Self::BottomLeft)
    }

    fn moves_right_edge(self) -> bool {
        matches!(self, Self::Right | Self::TopRight | Self::BottomRight)
    }

    fn moves_top_edge(self) -> bool {
        matches!(self, Self::Top | Self::TopLeft | Self::TopRight)
    }

    fn moves_bottom_edge(self) -> bool {
        matches!(self, Self::Bottom | Self::BottomLeft | Self::BottomRight)
    }
}

/// Interactive crop-resize: drags a handle of the crop box while the media
/// stays visually fixed, then commits a new box plus the minimum zoom that
/// still lets the media cover it.
#[derive(Clone, Debug)]
pub struct CropSession {
    resource: Resource,
    frame: MediaFrame,
    start_box: ElementBox,
    crop_x: f64,
    crop_y: f64,
    crop_width: f64,
    crop_height: f64,
    phase: GesturePhase,
}

impl CropSession {
    /// Start a crop at pointer-down on a resize handle.
    pub fn begin(resource: &Resource, element: &Element, element_box: &ElementBox) -> Self {
        Self {
            resource: resource.clone(),
            frame: media_frame_for_element(resource, element, element_box),
            start_box: *element_box,
            crop_x: element_box.x,
            crop_y: element_box.y,
            crop_width: element_box.width,
            crop_height: element_box.height,
            phase: GesturePhase::Idle,
        }
    }

    /// Drag a handle by a pointer delta, mutating the live crop box.
    ///
    /// When the box is unrotated the crop box is constrained to the media's
    /// rendered bounds; under rotation bounding is intentionally disabled.
    pub fn resize(&mut self, handle: CropHandle, dx: f64, dy: f64) {
        if self.phase.is_terminal() {
            return;
        }
        self.phase = GesturePhase::Dragging;

        let bounded = self.start_box.rotation_angle == 0.0;
        let media_left = self.start_box.x - self.frame.offset_x;
        let media_top = self.start_box.y - self.frame.offset_y;
        let media_right = media_left + self.frame.width;
        let media_bottom = media_top + self.frame.height;

        if handle.moves_left_edge() {
            let right = self.crop_x + self.crop_width;
            let mut new_x = self.crop_x + dx;
            if bounded {
                new_x = new_x.max(media_left);
            }
            new_x = new_x.min(right);
            self.crop_x = new_x;
            self.crop_width = right - new_x;
        }
        if handle.moves_right_edge() {
            let mut new_right = self.crop_x + self.crop_width + dx;
            if bounded {
                new_right = new_right.min(media_right);
            }
            self.crop_width = (new_right - self.crop_x).max(0.0);
        }
        if handle.moves_top_edge() {
            let bottom = self.crop_y + self.crop_height;
            let mut new_y = self.crop_y + dy;
            if bounded {
                new_y = new_y.max(media_top);
            }
            new_y = new_y.min(bottom);
            self.crop_y = new_y;
            self.crop_height = bottom - new_y;
        }
        if handle.moves_bottom_edge() {
            let mut new_bottom = self.crop_y + self.crop_height + dy;
            if bounded {
                new_bottom = new_bottom.min(media_bottom);
            }
            self.crop_height = (new_bottom - self.crop_y).max(0.0);
        }
    }

    /// Live crop rectangle `(x, y, width, height)` for visual feedback.
    pub fn crop_rect(&self) -> (f64, f64, f64, f64) {
        (self.crop_x, self.crop_y, self.crop_width, self.crop_height)
    }

    /// Current gesture phase.
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// End the gesture at pointer-up.
    ///
    /// The committed scale is the minimum zoom that keeps the media covering
    /// the new crop rectangle, capped at [`MAX_SCALE`]; focal values come from
    /// the resize's residual translation. A zero-sized resize is a no-op
    /// commit that leaves persisted properties untouched.
    #[tracing::instrument(skip(self))]
    pub fn commit(mut self) -> ElementUpdate {
        self.phase = GesturePhase::Committed;

        if self.crop_width <= 0.0 || self.crop_height <= 0.0 {
            return ElementUpdate::default();
        }

        let scale = ((self.frame.width / self.crop_width)
            .min(self.frame.height / self.crop_height)
            * 100.0)
            .clamp(100.0, MAX_SCALE);

        // The media stayed visually fixed while the crop box moved, so the new
        // offsets are the old ones shifted by the box translation.
        let (base_w, base_h) = base_cover_size(&self.resource, self.crop_width, self.crop_height);
        let media_width = base_w * scale / 100.0;
        let media_height = base_h * scale / 100.0;

        let offset_x = (self.frame.offset_x + (self.crop_x - self.start_box.x))
            .clamp(0.0, (media_width - self.crop_width).max(0.0));
        let offset_y = (self.frame.offset_y + (self.crop_y - self.start_box.y))
            .clamp(0.0, (media_height - self.crop_height).max(0.0));

        ElementUpdate {
            x: Some(self.crop_x),
            y: Some(self.crop_y),
            width: Some(self.crop_width),
            height: Some(self.crop_height),
            scale: Some(scale),
            focal_x: Some(
                offset_to_focal(self.crop_width, media_width, offset_x).clamp(0.0, 100.0),
            ),
            focal_y: Some(
                offset_to_focal(self.crop_height, media_height, offset_y).clamp(0.0, 100.0),
            ),
        }
    }

    /// Abandon the gesture, discarding all pending deltas.
    pub fn cancel(mut self) {
        self.phase = GesturePhase::Cancelled;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gesture/crop.rs"]
mod tests;
