use super::*;
use crate::story::model::ResourceKind;

fn res(width: u32, height: u32) -> Resource {
    Resource::new(ResourceKind::Image, "a.jpg", width, height).unwrap()
}

#[test]
fn wide_resource_in_square_box_pins_height() {
    // resRatio=2 > boxRatio=1: height pinned, width overflows, focal centers
    let frame = compute_media_frame(&res(400, 200), 200.0, 200.0, 100.0, 50.0, 50.0);
    assert_eq!(frame.width, 400.0);
    assert_eq!(frame.height, 200.0);
    assert_eq!(frame.offset_x, 100.0);
    assert_eq!(frame.offset_y, 0.0);
    assert_eq!(frame.scale, 100.0);
}

#[test]
fn tall_resource_in_square_box_pins_width() {
    let frame = compute_media_frame(&res(200, 400), 200.0, 200.0, 100.0, 50.0, 50.0);
    assert_eq!(frame.width, 200.0);
    assert_eq!(frame.height, 400.0);
    assert_eq!(frame.offset_x, 0.0);
    assert_eq!(frame.offset_y, 100.0);
}

#[test]
fn cover_and_offset_invariants_hold_across_inputs() {
    let resources = [res(400, 200), res(200, 400), res(333, 333), res(1, 1000)];
    let boxes = [(200.0, 200.0), (50.0, 618.0), (412.0, 10.0)];
    let scales = [0.0, 100.0, 137.5, 400.0];
    let focals = [0.0, 25.0, 50.0, 100.0];

    for resource in &resources {
        for &(bw, bh) in &boxes {
            for &scale in &scales {
                for &f in &focals {
                    let frame = compute_media_frame(resource, bw, bh, scale, f, 100.0 - f);
                    assert!(frame.width >= bw, "width {} < box {bw}", frame.width);
                    assert!(frame.height >= bh, "height {} < box {bh}", frame.height);
                    assert!(frame.offset_x >= 0.0);
                    assert!(frame.offset_x <= frame.width - bw + 1e-9);
                    assert!(frame.offset_y >= 0.0);
                    assert!(frame.offset_y <= frame.height - bh + 1e-9);
                }
            }
        }
    }
}

#[test]
fn sub_floor_scale_is_clamped_up() {
    for bad in [0.0, -50.0, 37.0, f64::NAN, f64::NEG_INFINITY] {
        let frame = compute_media_frame(&res(400, 200), 200.0, 200.0, bad, 50.0, 50.0);
        assert_eq!(frame.scale, MIN_SCALE);
    }
}

#[test]
fn scale_has_no_upper_engine_bound() {
    let frame = compute_media_frame(&res(400, 200), 200.0, 200.0, 1000.0, 50.0, 50.0);
    assert_eq!(frame.scale, 1000.0);
    assert_eq!(frame.width, 4000.0);
}

#[test]
fn non_finite_focal_defaults_to_center() {
    let frame = compute_media_frame(&res(400, 200), 200.0, 200.0, 100.0, f64::NAN, f64::INFINITY);
    assert_eq!(frame.focal_x, 50.0);
    assert_eq!(frame.focal_y, 50.0);
}

#[test]
fn focal_extremes_saturate_at_media_edges() {
    let resource = res(400, 200);
    let left = compute_media_frame(&resource, 200.0, 200.0, 100.0, 0.0, 50.0);
    assert_eq!(left.offset_x, 0.0);
    let right = compute_media_frame(&resource, 200.0, 200.0, 100.0, 100.0, 50.0);
    assert_eq!(right.offset_x, 200.0);
}

#[test]
fn zoom_scales_both_dimensions() {
    let frame = compute_media_frame(&res(400, 200), 200.0, 200.0, 150.0, 50.0, 50.0);
    assert_eq!(frame.width, 600.0);
    assert_eq!(frame.height, 300.0);
    // focal stays anchored at center
    assert_eq!(frame.offset_x, 200.0);
    assert_eq!(frame.offset_y, 50.0);
}

#[test]
fn element_wrapper_reads_element_properties() {
    let mut el = Element::new("e", 0.0, 0.0, 200.0, 200.0);
    el.scale = 150.0;
    el.focal_x = 0.0;
    let element_box = ElementBox {
        x: 0.0,
        y: 0.0,
        width: 200.0,
        height: 200.0,
        rotation_angle: 0.0,
    };
    let frame = media_frame_for_element(&res(400, 200), &el, &element_box);
    assert_eq!(frame.scale, 150.0);
    assert_eq!(frame.offset_x, 0.0);
}
