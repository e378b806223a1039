use crate::geometry::sanitize_length;
use crate::layout::ImagePlacement;
use tracing::trace;

/// Fit an image of `img_width_px` x `img_height_px` below the header.
///
/// The image keeps its aspect ratio and is scaled to the largest size that
/// fits between the margins and above `reserve_for_notes_mm` (this may scale
/// up as well as down). It is centred horizontally and sits flush against
/// the header. An image without pixels, or a page without room, yields a
/// zero-size placement at `(margin_mm, header_height_mm)`.
pub fn plan_image_placement(
    page_width_mm: f64,
    page_height_mm: f64,
    margin_mm: f64,
    header_height_mm: f64,
    img_width_px: f64,
    img_height_px: f64,
    reserve_for_notes_mm: f64,
) -> ImagePlacement {
    let empty = ImagePlacement {
        x: margin_mm,
        y: header_height_mm,
        width: 0.0,
        height: 0.0,
        page_index: 0,
    };

    let img_width = sanitize_length(img_width_px);
    let img_height = sanitize_length(img_height_px);
    if img_width == 0.0 || img_height == 0.0 {
        return empty;
    }

    let available_width = page_width_mm - 2.0 * margin_mm;
    let available_height = page_height_mm - header_height_mm - margin_mm - reserve_for_notes_mm;
    let scale = (available_width / img_width).min(available_height / img_height);
    if !(scale.is_finite() && scale > 0.0) {
        trace!(available_width, available_height, "no room for image");
        return empty;
    }

    let width = img_width * scale;
    let height = img_height * scale;

    ImagePlacement {
        x: margin_mm + (available_width - width) / 2.0,
        y: header_height_mm,
        width,
        height,
        page_index: 0,
    }
}
