use super::*;
use crate::{
    mask::catalog::MaskType,
    story::model::ResourceKind,
};

fn page(page_id: &str) -> ThumbnailPage {
    let resource = Resource::new(ResourceKind::Image, "a.jpg", 400, 200).unwrap();
    let element = Element {
        mask: Some(MaskType::Circle),
        ..Element::new("e1", 50.0, 80.0, 200.0, 100.0)
    };
    ThumbnailPage {
        page_id: page_id.to_string(),
        canvas: PageCanvas::story_page(),
        elements: vec![ThumbnailElement { element, resource }],
    }
}

#[test]
fn mask_ids_do_not_collide_across_pages() {
    let a = page_thumbnail_svg(&page("p1"));
    let b = page_thumbnail_svg(&page("p2"));
    assert!(a.contains("mask-p1-e1"));
    assert!(!a.contains("mask-p2-e1"));
    assert!(b.contains("mask-p2-e1"));
}

#[test]
fn document_parses_under_usvg() {
    let svg = page_thumbnail_svg(&page("p1"));
    let opts = usvg::Options::default();
    assert!(usvg::Tree::from_data(svg.as_bytes(), &opts).is_ok());
}

#[test]
fn media_placement_comes_from_the_engine() {
    let svg = page_thumbnail_svg(&page("p1"));
    // 400x200 resource covering a 200x100 box: no zoom, centered focal
    assert!(svg.contains("width=\"200\" height=\"100\""));
    assert!(svg.contains("x=\"-0\" y=\"-0\"") || svg.contains("x=\"0\" y=\"0\""));
}

#[test]
fn background_elements_span_the_page() {
    let mut p = page("p1");
    p.elements[0].element.is_background = true;
    p.elements[0].element.mask = None;
    let svg = page_thumbnail_svg(&p);
    assert!(svg.contains("width=\"412\" height=\"618\""));
}

#[test]
fn rotated_elements_are_wrapped_in_a_rotation_group() {
    let mut p = page("p1");
    p.elements[0].element.rotation_angle = 30.0;
    let svg = page_thumbnail_svg(&p);
    assert!(svg.contains("rotate(30 150 130)"));
}

#[test]
fn rasterizer_rejects_degenerate_sizes() {
    let svg = page_thumbnail_svg(&page("p1"));
    assert!(rasterize_thumbnail_svg(&svg, 0, 100).is_err());
    assert!(rasterize_thumbnail_svg(&svg, 100_000, 100).is_err());
}

#[test]
fn rasterizer_produces_rgba8_pixels() {
    let svg = page_thumbnail_svg(&page("p1"));
    let pixels = rasterize_thumbnail_svg(&svg, 41, 62).unwrap();
    assert_eq!(pixels.len(), 41 * 62 * 4);
}

#[test]
fn batches_preserve_page_order() {
    let pages = vec![page("p1"), page("p2"), page("p3")];
    let thumbs = rasterize_page_thumbnails(&pages, 10, 15).unwrap();
    assert_eq!(thumbs.len(), 3);
    for t in thumbs {
        assert_eq!(t.len(), 10 * 15 * 4);
    }
}
