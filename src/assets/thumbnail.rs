use anyhow::Context;
use rayon::prelude::*;

use crate::{
    foundation::core::{CoordScale, PageCanvas},
    foundation::error::{StoryframeError, StoryframeResult},
    geometry::engine::media_frame_for_element,
    layout::box_resolver::{ElementBox, resolve_element_box},
    mask::clip::{ClipVariant, render_clip},
    story::model::{Element, Resource},
};

/// Largest pixmap dimension the rasterizer will allocate.
const MAX_DIM: u32 = 16_384;

#[derive(Clone, Debug)]
/// One element plus the resource it references, ready for thumbnailing.
pub struct ThumbnailElement {
    /// Persisted element state.
    pub element: Element,
    /// Referenced media resource.
    pub resource: Resource,
}

#[derive(Clone, Debug)]
/// A page to be rendered as a thumbnail.
pub struct ThumbnailPage {
    /// Page identifier, qualifies mask ids within composed documents.
    pub page_id: String,
    /// Page bounds in page units.
    pub canvas: PageCanvas,
    /// Elements in paint order.
    pub elements: Vec<ThumbnailElement>,
}

/// Assemble the thumbnail SVG document for one page.
///
/// Every element is wrapped in a nested `<svg>` viewport sized to its box so
/// cover-fit overflow is cropped; non-rectangle masks additionally apply the
/// page-qualified `<mask>` from the clip renderer. Geometry comes from the
/// same engine as every other target.
pub fn page_thumbnail_svg(page: &ThumbnailPage) -> String {
    let mut defs = String::new();
    let mut body = String::new();

    for item in &page.elements {
        let element_box = resolve_element_box(&item.element, page.canvas, CoordScale::IDENTITY);
        // Mask geometry is expressed in the nested viewport's local space.
        let local_box = ElementBox {
            x: 0.0,
            y: 0.0,
            ..element_box
        };
        let clip = render_clip(
            &item.element,
            &local_box,
            ClipVariant::Thumbnail {
                page_id: &page.page_id,
            },
        );

        let mask_attr = match &clip {
            Some(c) => {
                defs.push_str(&c.defs);
                format!(" {}", c.reference)
            }
            None => String::new(),
        };

        let frame = media_frame_for_element(&item.resource, &item.element, &element_box);
        let mut viewport = format!(
            "<svg x=\"{x}\" y=\"{y}\" width=\"{w}\" height=\"{h}\" \
             viewBox=\"0 0 {w} {h}\"{mask_attr}>\
             <image href=\"{src}\" x=\"{ix}\" y=\"{iy}\" width=\"{iw}\" height=\"{ih}\" \
             preserveAspectRatio=\"none\"/></svg>",
            x = element_box.x,
            y = element_box.y,
            w = element_box.width,
            h = element_box.height,
            src = item.resource.src,
            ix = -frame.offset_x,
            iy = -frame.offset_y,
            iw = frame.width,
            ih = frame.height,
        );
        if element_box.rotation_angle != 0.0 {
            let cx = element_box.x + element_box.width / 2.0;
            let cy = element_box.y + element_box.height / 2.0;
            viewport = format!(
                "<g transform=\"rotate({angle} {cx} {cy})\">{viewport}</g>",
                angle = element_box.rotation_angle,
            );
        }
        body.push_str(&viewport);
    }

    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" \
         width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\
         <defs>{defs}</defs>{body}</svg>",
        w = page.canvas.width,
        h = page.canvas.height,
    )
}

/// Rasterize a thumbnail SVG document into premultiplied RGBA8 pixels.
#[tracing::instrument(skip(svg))]
pub fn rasterize_thumbnail_svg(svg: &str, width: u32, height: u32) -> StoryframeResult<Vec<u8>> {
    if width == 0 || height == 0 {
        return Err(StoryframeError::render("thumbnail size must be > 0"));
    }
    if width > MAX_DIM || height > MAX_DIM {
        return Err(StoryframeError::render(format!(
            "thumbnail size too large: {width}x{height} (max {MAX_DIM}x{MAX_DIM})"
        )));
    }

    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_data(svg.as_bytes(), &opts).context("parse thumbnail svg")?;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| StoryframeError::render("failed to allocate thumbnail pixmap"))?;

    let sx = (width as f32) / tree.size().width();
    let sy = (height as f32) / tree.size().height();
    let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);

    resvg::render(&tree, xform, &mut pixmap.as_mut());
    Ok(pixmap.data().to_vec())
}

/// Rasterize many pages in parallel, preserving input order.
#[tracing::instrument(skip(pages))]
pub fn rasterize_page_thumbnails(
    pages: &[ThumbnailPage],
    width: u32,
    height: u32,
) -> StoryframeResult<Vec<Vec<u8>>> {
    pages
        .par_iter()
        .map(|page| rasterize_thumbnail_svg(&page_thumbnail_svg(page), width, height))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/assets/thumbnail.rs"]
mod tests;
