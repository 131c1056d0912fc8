use crate::surface::RenderSurface;

/// Integer offsets (dx, dy) covered by a filled disc of the given radius.
///
/// Scans the bounding box row by row and keeps offsets with dx^2 + dy^2 <= r^2.
pub fn disc_offsets(radius: i32) -> impl Iterator<Item = (i32, i32)> {
    let r = radius.max(0);
    (-r..=r).flat_map(move |dy| {
        (-r..=r)
            .filter(move |dx| dx * dx + dy * dy <= r * r)
            .map(move |dx| (dx, dy))
    })
}

/// Plot a filled disc centered at (cx, cy) with the current draw color.
pub fn draw_disc<S: RenderSurface>(surface: &mut S, cx: i32, cy: i32, radius: i32) {
    for (dx, dy) in disc_offsets(radius) {
        surface.draw_point(cx.saturating_add(dx), cy.saturating_add(dy));
    }
}
