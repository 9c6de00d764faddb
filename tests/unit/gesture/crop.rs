use super::*;
use crate::story::model::ResourceKind;

fn fixture() -> (Resource, Element, ElementBox) {
    // media frame at begin: 400x200, offsets (100, 0)
    let resource = Resource::new(ResourceKind::Image, "a.jpg", 400, 200).unwrap();
    let element = Element::new("e1", 0.0, 0.0, 200.0, 200.0);
    let element_box = ElementBox {
        x: 0.0,
        y: 0.0,
        width: 200.0,
        height: 200.0,
        rotation_angle: 0.0,
    };
    (resource, element, element_box)
}

#[test]
fn narrowing_the_crop_commits_minimum_covering_scale() {
    let (resource, element, element_box) = fixture();
    let mut crop = CropSession::begin(&resource, &element, &element_box);
    crop.resize(CropHandle::Right, -100.0, 0.0);
    assert_eq!(crop.crop_rect(), (0.0, 0.0, 100.0, 200.0));

    let update = crop.commit();
    // min(400/100, 200/200) * 100: the height direction still binds
    assert_eq!(update.scale, Some(100.0));
    assert_eq!(update.width, Some(100.0));
    assert_eq!(update.height, Some(200.0));
    // media stayed put: offset 100 against media width 400
    assert_eq!(update.focal_x, Some(37.5));
    assert_eq!(update.focal_y, Some(50.0));
}

#[test]
fn left_handle_moves_the_origin() {
    let (resource, element, element_box) = fixture();
    let mut crop = CropSession::begin(&resource, &element, &element_box);
    crop.resize(CropHandle::Left, 50.0, 0.0);
    assert_eq!(crop.crop_rect(), (50.0, 0.0, 150.0, 200.0));

    let update = crop.commit();
    assert_eq!(update.x, Some(50.0));
    // offset picks up the box translation: 100 + 50 = 150 against width 400
    assert_eq!(update.focal_x, Some(56.25));
}

#[test]
fn zero_sized_resize_is_a_noop_commit() {
    let (resource, element, element_box) = fixture();
    let mut crop = CropSession::begin(&resource, &element, &element_box);
    crop.resize(CropHandle::Right, -200.0, 0.0);
    assert_eq!(crop.crop_rect().2, 0.0);
    let update = crop.commit();
    assert!(update.is_noop());
}

#[test]
fn committed_scale_is_capped_at_the_display_bound() {
    let (resource, element, element_box) = fixture();
    let mut crop = CropSession::begin(&resource, &element, &element_box);
    crop.resize(CropHandle::BottomRight, -160.0, -160.0);
    assert_eq!(crop.crop_rect(), (0.0, 0.0, 40.0, 40.0));

    let update = crop.commit();
    // raw minimum would be 500%
    assert_eq!(update.scale, Some(MAX_SCALE));
}

#[test]
fn unrotated_crop_cannot_leave_the_media_bounds() {
    let (resource, element, element_box) = fixture();
    let mut crop = CropSession::begin(&resource, &element, &element_box);
    // media spans x in [-100, 300]; the right edge stops there
    crop.resize(CropHandle::Right, 500.0, 0.0);
    assert_eq!(crop.crop_rect(), (0.0, 0.0, 300.0, 200.0));
    // and the top edge cannot rise above the media top
    crop.resize(CropHandle::Top, 0.0, -50.0);
    assert_eq!(crop.crop_rect(), (0.0, 0.0, 300.0, 200.0));
}

#[test]
fn rotation_disables_crop_bounding() {
    let (resource, element, mut element_box) = fixture();
    element_box.rotation_angle = 45.0;
    let mut crop = CropSession::begin(&resource, &element, &element_box);
    crop.resize(CropHandle::Right, 500.0, 0.0);
    assert_eq!(crop.crop_rect().2, 700.0);
}

#[test]
fn growing_the_crop_keeps_the_scale_floor() {
    let (resource, element, element_box) = fixture();
    let mut crop = CropSession::begin(&resource, &element, &element_box);
    crop.resize(CropHandle::Right, 100.0, 0.0);
    let update = crop.commit();
    // min(400/300, 200/200) stays above 1, but never below the floor
    assert_eq!(update.scale, Some(100.0));
    assert_eq!(update.focal_x, Some(62.5));
}

#[test]
fn resize_after_terminal_is_ignored() {
    let (resource, element, element_box) = fixture();
    let mut crop = CropSession::begin(&resource, &element, &element_box);
    crop.resize(CropHandle::Right, -50.0, 0.0);
    let mut finished = crop.clone();
    finished.phase = GesturePhase::Committed;
    finished.resize(CropHandle::Right, -50.0, 0.0);
    assert_eq!(finished.crop_rect(), crop.crop_rect());
}
