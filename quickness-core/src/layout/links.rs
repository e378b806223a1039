use crate::capture::LinkRef;
use crate::layout::{ImagePlacement, LinkOverlay};
use tracing::trace;

/// Map links from source viewport pixels onto a placed image.
///
/// Scaling is linear per axis. Links without area are dropped, and a
/// viewport without area yields no overlays. Order is preserved.
pub fn plan_link_overlays(
    links: &[LinkRef],
    source_viewport_width: f64,
    source_viewport_height: f64,
    image: &ImagePlacement,
) -> Vec<LinkOverlay> {
    if !(source_viewport_width > 0.0 && source_viewport_height > 0.0) {
        return Vec::new();
    }

    let scale_x = image.width / source_viewport_width;
    let scale_y = image.height / source_viewport_height;

    links
        .iter()
        .filter(|link| {
            let keep = !link.is_degenerate();
            if !keep {
                trace!(href = %link.href, "dropping link without area");
            }
            keep
        })
        .map(|link| LinkOverlay {
            x: image.x + link.x * scale_x,
            y: image.y + link.y * scale_y,
            width: link.width * scale_x,
            height: link.height * scale_y,
            href: link.href.clone(),
            page_index: image.page_index,
        })
        .collect()
}
