use super::*;
use crate::{
    geometry::engine::compute_media_frame,
    story::model::{Resource, ResourceKind},
};

#[test]
fn conversion_is_inverse_of_engine_offsets_inside_bounds() {
    let resource = Resource::new(ResourceKind::Image, "a.jpg", 400, 200).unwrap();
    // box 100x100: media 200x100, offset range [0, 100]; interior focals only
    for focal in [30.0, 40.0, 50.0, 60.0, 70.0] {
        let frame = compute_media_frame(&resource, 100.0, 100.0, 100.0, focal, 50.0);
        assert!(frame.offset_x > 0.0 && frame.offset_x < frame.width - 100.0);
        let back = offset_to_focal(100.0, frame.width, frame.offset_x);
        assert!((back - focal).abs() < 1e-9, "focal {focal} came back {back}");
    }
}

#[test]
fn focal_to_offset_saturates_outside_bounds() {
    // focal 5% would put the offset negative; it clamps to the edge instead
    assert_eq!(focal_to_offset(100.0, 200.0, 5.0), 0.0);
    assert_eq!(focal_to_offset(100.0, 200.0, 95.0), 100.0);
}

#[test]
fn saturated_offsets_do_not_round_trip() {
    // the round trip is intentionally lossy once the offset clamps
    let offset = focal_to_offset(100.0, 200.0, 5.0);
    let back = offset_to_focal(100.0, 200.0, offset);
    assert_eq!(back, 25.0);
}

#[test]
fn centered_focal_maps_to_centered_offset() {
    let offset = focal_to_offset(200.0, 400.0, 50.0);
    assert_eq!(offset, 100.0);
    assert_eq!(offset_to_focal(200.0, 400.0, offset), 50.0);
}
