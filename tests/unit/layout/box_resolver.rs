use super::*;
use crate::foundation::core::{FULLBLEED_HEIGHT, PAGE_WIDTH};

#[test]
fn background_overrides_any_stored_geometry() {
    let canvas = PageCanvas::story_fullbleed();
    for (x, y, w, h, rot) in [
        (-500.0, 9999.0, 3.0, 7.0, 45.0),
        (0.0, 0.0, 412.0, 618.0, 0.0),
        (1e6, -1e6, 0.1, 0.1, -720.0),
    ] {
        let mut el = Element::new("bg", x, y, w, h);
        el.rotation_angle = rot;
        el.is_background = true;
        let resolved = resolve_element_box(&el, canvas, CoordScale::IDENTITY);
        assert_eq!(
            resolved,
            ElementBox {
                x: 0.0,
                y: 0.0,
                width: PAGE_WIDTH,
                height: FULLBLEED_HEIGHT,
                rotation_angle: 0.0,
            }
        );
    }
}

#[test]
fn fill_gets_the_same_override() {
    let mut el = Element::new("fill", 10.0, 10.0, 50.0, 50.0);
    el.is_fill = true;
    el.rotation_angle = 30.0;
    let resolved = resolve_element_box(&el, PageCanvas::story_page(), CoordScale::IDENTITY);
    assert_eq!(resolved.x, 0.0);
    assert_eq!(resolved.width, 412.0);
    assert_eq!(resolved.height, 618.0);
    assert_eq!(resolved.rotation_angle, 0.0);
}

#[test]
fn regular_elements_pass_through_the_coordinate_scale() {
    let mut el = Element::new("e", 10.0, 20.0, 100.0, 50.0);
    el.rotation_angle = 15.0;
    let scale = CoordScale::new(2.0).unwrap();
    let resolved = resolve_element_box(&el, PageCanvas::story_page(), scale);
    assert_eq!(resolved.x, 20.0);
    assert_eq!(resolved.y, 40.0);
    assert_eq!(resolved.width, 200.0);
    assert_eq!(resolved.height, 100.0);
    // rotation is angular, not a length
    assert_eq!(resolved.rotation_angle, 15.0);
    assert_eq!(resolved.ratio(), 2.0);
}
