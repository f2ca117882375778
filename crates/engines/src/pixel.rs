//! Pure-computation pixel buffer rendering of an engine snapshot.
//!
//! This module is always available (no feature gate) so that the `png`
//! snapshot path and any embedding front-end can share the same conversion.
//! It is the render collaborator of the core contract: it only reads the
//! engine's particle and projectile snapshots.

use silhouette_core::projectile::Projectile;
use silhouette_core::Engine;

/// Opaque black, the frame background.
const BACKGROUND: [u8; 4] = [0, 0, 0, 255];

/// Opaque white, the projectile glyph color.
const GLYPH_COLOR: [u8; 4] = [255, 255, 255, 255];

/// The arrow glyph in local coordinates, +x pointing along the velocity:
/// two barbs meeting at the tip and a trailing shaft.
const ARROW_SEGMENTS: [((f64, f64), (f64, f64)); 3] = [
    ((0.0, 0.0), (-30.0, -7.0)),
    ((0.0, 0.0), (-30.0, 7.0)),
    ((-25.0, 0.0), (-60.0, 0.0)),
];

/// Renders one frame of the engine into an RGBA8 buffer.
///
/// Particles are filled discs of their own color and radius; active
/// projectiles are white arrow glyphs rotated to their heading. Entities
/// outside the viewport are clipped pixel-by-pixel. The buffer length is
/// `width * height * 4`.
pub fn scene_to_rgba(engine: &dyn Engine) -> Vec<u8> {
    let width = engine.width();
    let height = engine.height();
    let mut buf = vec![0u8; width * height * 4];
    for pixel in buf.chunks_exact_mut(4) {
        pixel.copy_from_slice(&BACKGROUND);
    }

    for particle in engine.particles() {
        fill_disc(
            &mut buf,
            width,
            height,
            particle.pos.x,
            particle.pos.y,
            particle.size,
            particle.color.to_rgba8(),
        );
    }

    for projectile in engine.projectiles() {
        draw_arrow(&mut buf, width, height, projectile);
    }

    buf
}

/// Writes one pixel if it lies inside the buffer.
fn put_pixel(buf: &mut [u8], width: usize, height: usize, x: i64, y: i64, color: [u8; 4]) {
    if x < 0 || y < 0 || x >= width as i64 || y >= height as i64 {
        return;
    }
    let idx = (y as usize * width + x as usize) * 4;
    buf[idx..idx + 4].copy_from_slice(&color);
}

/// Fills a disc of the given radius centered at `(cx, cy)`.
fn fill_disc(
    buf: &mut [u8],
    width: usize,
    height: usize,
    cx: f64,
    cy: f64,
    radius: f64,
    color: [u8; 4],
) {
    let xc = cx.round() as i64;
    let yc = cy.round() as i64;
    let reach = radius.ceil() as i64;
    for dy in -reach..=reach {
        for dx in -reach..=reach {
            if ((dx * dx + dy * dy) as f64) <= radius * radius {
                put_pixel(buf, width, height, xc + dx, yc + dy, color);
            }
        }
    }
}

/// Draws a line segment by sampling it at sub-pixel steps.
fn draw_segment(
    buf: &mut [u8],
    width: usize,
    height: usize,
    from: (f64, f64),
    to: (f64, f64),
    color: [u8; 4],
) {
    let (dx, dy) = (to.0 - from.0, to.1 - from.1);
    let steps = (dx.hypot(dy) * 2.0).ceil().max(1.0) as usize;
    for i in 0..=steps {
        let t = i as f64 / steps as f64;
        let x = (from.0 + dx * t).round() as i64;
        let y = (from.1 + dy * t).round() as i64;
        put_pixel(buf, width, height, x, y, color);
    }
}

/// Draws the arrow glyph at the projectile's position, rotated to its
/// heading.
fn draw_arrow(buf: &mut [u8], width: usize, height: usize, projectile: &Projectile) {
    let angle = projectile.heading();
    let (sin, cos) = angle.sin_cos();
    let place = |(x, y): (f64, f64)| {
        (
            projectile.pos.x + x * cos - y * sin,
            projectile.pos.y + x * sin + y * cos,
        )
    };
    for (from, to) in ARROW_SEGMENTS {
        draw_segment(buf, width, height, place(from), place(to), GLYPH_COLOR);
    }
}
