use crate::{
    foundation::core::Vec2,
    geometry::engine::{MediaFrame, media_frame_for_element},
    geometry::focal::offset_to_focal,
    gesture::session::{ElementUpdate, GesturePhase},
    layout::box_resolver::ElementBox,
    story::model::{Element, Flip, Resource},
};

/// Interactive pan: drags the cropped media inside its box.
///
/// The media frame is computed once at pointer-down; every pointer-move is a
/// pure visual translation on top of it, so no mask or clip geometry is
/// recomputed per frame. Commit converts the accumulated delta into focal
/// percentages.
#[derive(Clone, Debug)]
pub struct PanSession {
    frame: MediaFrame,
    box_width: f64,
    box_height: f64,
    rotation_angle: f64,
    flip: Flip,
    dx: f64,
    dy: f64,
    phase: GesturePhase,
}

impl PanSession {
    /// Start a pan at pointer-down over the element's media.
    pub fn begin(resource: &Resource, element: &Element, element_box: &ElementBox) -> Self {
        Self {
            frame: media_frame_for_element(resource, element, element_box),
            box_width: element_box.width,
            box_height: element_box.height,
            rotation_angle: element_box.rotation_angle,
            flip: element.flip,
            dx: 0.0,
            dy: 0.0,
            phase: GesturePhase::Idle,
        }
    }

    /// Accumulate a pointer-move delta and return the live visual translation.
    ///
    /// Ignored once the gesture is terminal.
    pub fn update(&mut self, dx: f64, dy: f64) -> Vec2 {
        if self.phase.is_terminal() {
            return self.live_translation();
        }
        self.phase = GesturePhase::Dragging;
        self.dx += dx;
        self.dy += dy;
        self.live_translation()
    }

    /// Current visual translation to apply to the media content.
    ///
    /// When the box is unrotated the translation is clamped so the box stays
    /// fully inside the media's rendered bounds. Under rotation bounding is
    /// intentionally disabled; exact bounds are not computed there.
    pub fn live_translation(&self) -> Vec2 {
        if self.rotation_angle != 0.0 {
            return Vec2::new(self.dx, self.dy);
        }
        Vec2::new(
            clamp_axis_delta(
                self.dx,
                self.frame.offset_x,
                self.frame.width,
                self.box_width,
                self.flip.horizontal,
            ),
            clamp_axis_delta(
                self.dy,
                self.frame.offset_y,
                self.frame.height,
                self.box_height,
                self.flip.vertical,
            ),
        )
    }

    /// Current gesture phase.
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Media frame captured at pointer-down.
    pub fn frame(&self) -> &MediaFrame {
        &self.frame
    }

    /// End the gesture at pointer-up and produce the focal update.
    ///
    /// Flip flags negate the matching delta's sign before conversion. Offsets
    /// saturate at the media edges, so out-of-bounds drags commit the nearest
    /// in-bounds focal point.
    #[tracing::instrument(skip(self))]
    pub fn commit(mut self) -> ElementUpdate {
        self.phase = GesturePhase::Committed;

        let focal_x = commit_axis(
            self.dx,
            self.frame.offset_x,
            self.frame.width,
            self.box_width,
            self.flip.horizontal,
        );
        let focal_y = commit_axis(
            self.dy,
            self.frame.offset_y,
            self.frame.height,
            self.box_height,
            self.flip.vertical,
        );

        ElementUpdate {
            focal_x: Some(focal_x),
            focal_y: Some(focal_y),
            ..ElementUpdate::default()
        }
    }

    /// Abandon the gesture, discarding all pending deltas.
    pub fn cancel(mut self) {
        self.phase = GesturePhase::Cancelled;
    }
}

/// Clamp a raw screen-space delta so the resulting offset stays within
/// `[0, media - box]` on one axis.
fn clamp_axis_delta(raw: f64, offset: f64, media_side: f64, box_side: f64, flipped: bool) -> f64 {
    let range = (media_side - box_side).max(0.0);
    if flipped {
        // offset + raw must stay in [0, range]
        raw.clamp(-offset, range - offset)
    } else {
        // offset - raw must stay in [0, range]
        raw.clamp(offset - range, offset)
    }
}

fn commit_axis(raw: f64, offset: f64, media_side: f64, box_side: f64, flipped: bool) -> f64 {
    let delta = if flipped { -raw } else { raw };
    let new_offset = (offset - delta).clamp(0.0, (media_side - box_side).max(0.0));
    offset_to_focal(box_side, media_side, new_offset).clamp(0.0, 100.0)
}

#[cfg(test)]
#[path = "../../tests/unit/gesture/pan.rs"]
mod tests;
