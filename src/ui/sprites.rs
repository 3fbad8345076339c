//! Braille-cell drawing primitives. The playfield is rasterized into a
//! 2x4-dot-per-cell map, one layer per sprite color, then written over a
//! character grid. Shapes scale to each entity's bounding rectangle, so
//! the logical sprite sizes live with the game constants.

use std::collections::HashMap;

use ratatui::prelude::*;

pub type DotMap = HashMap<(usize, usize), u8>;

pub fn braille_bit(sub_x: usize, sub_y: usize) -> u8 {
    match (sub_x, sub_y) {
        (0, 0) => 0x01,
        (0, 1) => 0x02,
        (0, 2) => 0x04,
        (0, 3) => 0x40,
        (1, 0) => 0x08,
        (1, 1) => 0x10,
        (1, 2) => 0x20,
        (1, 3) => 0x80,
        _ => 0,
    }
}

pub fn set_dot(map: &mut DotMap, bx: i32, by: i32, bw: i32, bh: i32) {
    if bx < 0 || by < 0 || bx >= bw || by >= bh {
        return;
    }
    let cx = bx as usize / 2;
    let cy = by as usize / 4;
    let sx = bx as usize % 2;
    let sy = by as usize % 4;
    *map.entry((cx, cy)).or_insert(0) |= braille_bit(sx, sy);
}

pub fn write_layer(
    grid: &mut [Vec<(char, Style)>],
    map: &DotMap,
    w: usize,
    h: usize,
    color: Color,
    bg: Color,
    bold: bool,
) {
    for (&(cx, cy), &bits) in map {
        if cx < w && cy < h && bits != 0 {
            let ch = char::from_u32(0x2800 + bits as u32).unwrap_or(' ');
            let mut style = Style::default().fg(color).bg(bg);
            if bold {
                style = style.add_modifier(Modifier::BOLD);
            }
            grid[cy][cx] = (ch, style);
        }
    }
}

/// Scale an RGB color toward black, for fade-out effects.
pub fn dim(color: Color, alpha: f32) -> Color {
    let a = alpha.clamp(0.0, 1.0);
    match color {
        Color::Rgb(r, g, b) => Color::Rgb(
            (r as f32 * a) as u8,
            (g as f32 * a) as u8,
            (b as f32 * a) as u8,
        ),
        other => other,
    }
}

// ── Shape rasterizers ──────────────────────────────────────────────────

/// Upward-pointing ship hull filling the given dot rectangle.
pub fn ship_up(map: &mut DotMap, left: i32, top: i32, right: i32, bottom: i32, bw: i32, bh: i32) {
    let height = (bottom - top).max(1);
    let cx = (left + right) / 2;
    let half_w = (right - left).max(1) / 2;
    for row in 0..=height {
        let y = top + row;
        let half = (half_w as f32 * row as f32 / height as f32).round() as i32;
        for x in (cx - half)..=(cx + half) {
            set_dot(map, x, y, bw, bh);
        }
    }
}

/// Downward-pointing hull, used for descending enemy ships.
pub fn ship_down(map: &mut DotMap, left: i32, top: i32, right: i32, bottom: i32, bw: i32, bh: i32) {
    let height = (bottom - top).max(1);
    let cx = (left + right) / 2;
    let half_w = (right - left).max(1) / 2;
    for row in 0..=height {
        let y = top + row;
        let half = (half_w as f32 * (height - row) as f32 / height as f32).round() as i32;
        for x in (cx - half)..=(cx + half) {
            set_dot(map, x, y, bw, bh);
        }
    }
}

pub fn fill_ellipse(
    map: &mut DotMap,
    left: i32,
    top: i32,
    right: i32,
    bottom: i32,
    bw: i32,
    bh: i32,
) {
    let rx = ((right - left) as f32 / 2.0).max(0.5);
    let ry = ((bottom - top) as f32 / 2.0).max(0.5);
    let cx = (left + right) as f32 / 2.0;
    let cy = (top + bottom) as f32 / 2.0;
    for y in top..=bottom {
        for x in left..=right {
            let dx = (x as f32 - cx) / rx;
            let dy = (y as f32 - cy) / ry;
            if dx * dx + dy * dy <= 1.0 {
                set_dot(map, x, y, bw, bh);
            }
        }
    }
}

/// Flying saucer: flattened hull in the lower band plus a center dome.
pub fn saucer(map: &mut DotMap, left: i32, top: i32, right: i32, bottom: i32, bw: i32, bh: i32) {
    let mid = top + (bottom - top) / 2;
    fill_ellipse(map, left, mid, right, bottom, bw, bh);
    let quarter = (right - left) / 4;
    fill_ellipse(map, left + quarter, top, right - quarter, mid + 1, bw, bh);
}

/// A vertical laser bolt one dot wide.
pub fn bolt(map: &mut DotMap, x: i32, top: i32, bottom: i32, bw: i32, bh: i32) {
    for y in top..=bottom {
        set_dot(map, x, y, bw, bh);
    }
}

/// Eight rays out from the center, for explosions.
pub fn starburst(map: &mut DotMap, cx: i32, cy: i32, radius: i32, bw: i32, bh: i32) {
    let rays: [(i32, i32); 8] = [
        (1, 0),
        (-1, 0),
        (0, 1),
        (0, -1),
        (1, 1),
        (1, -1),
        (-1, 1),
        (-1, -1),
    ];
    for (dx, dy) in rays {
        for step in 0..=radius {
            set_dot(map, cx + dx * step, cy + dy * step, bw, bh);
        }
    }
}
