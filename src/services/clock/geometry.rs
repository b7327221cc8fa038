// Clock face geometry
//
// Angles are measured clockwise from 12 o'clock in screen space (y grows
// downwards) and normalized into [0, TAU).

use std::f32::consts::{FRAC_PI_2, TAU};

use egui::{Pos2, Vec2};

/// Face width assumed before the first measurement arrives.
pub const DEFAULT_FACE_WIDTH: f32 = 230.0;

/// Distance between the face edge and the ring of labels.
pub const LABEL_INSET: f32 = 28.0;

/// Radius of the label ring for a face of the given width.
pub fn radius_for_width(width: f32) -> f32 {
    (width / 2.0 - LABEL_INSET).max(0.0)
}

/// Angle of `point` around `center`, clockwise from 12 o'clock.
pub fn angle_from_twelve(point: Pos2, center: Pos2) -> f32 {
    let delta = point - center;
    let angle = (delta.y.atan2(delta.x) + FRAC_PI_2).rem_euclid(TAU);
    // rem_euclid rounds tiny negative inputs up to TAU itself
    if angle >= TAU {
        0.0
    } else {
        angle
    }
}

/// Index of the nearest of `count` evenly spaced slots, slot 0 at 12 o'clock.
pub fn angle_to_index(point: Pos2, center: Pos2, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    let step = TAU / count as f32;
    let index = (angle_from_twelve(point, center) / step).round() as usize;
    if index >= count {
        0
    } else {
        index
    }
}

/// Option closest to `point` on a ring of `ring` positions.
///
/// Each option sits at position `option % ring`, so hour options
/// `[12, 1, .., 11]` use `ring = 12` and minutes use `ring = 60`. When the
/// options only cover part of the ring the nearest one by arc wins.
pub fn angle_to_value(point: Pos2, center: Pos2, options: &[u32], ring: u32) -> Option<u32> {
    if ring == 0 {
        return None;
    }
    let position = angle_from_twelve(point, center) / TAU * ring as f32;
    options.iter().copied().min_by(|a, b| {
        ring_distance(position, *a, ring).total_cmp(&ring_distance(position, *b, ring))
    })
}

fn ring_distance(position: f32, option: u32, ring: u32) -> f32 {
    let ring = ring as f32;
    let diff = (position - (option as f32 % ring)).rem_euclid(ring);
    diff.min(ring - diff)
}

/// Angle of ring position `position` out of `ring`, clockwise from 12.
pub fn position_angle(position: f32, ring: u32) -> f32 {
    if ring == 0 {
        return 0.0;
    }
    (position / ring as f32 * TAU).rem_euclid(TAU)
}

/// Screen point at `angle` (clockwise from 12) and `radius` from `center`.
pub fn point_at(center: Pos2, radius: f32, angle: f32) -> Pos2 {
    let screen_angle = angle - FRAC_PI_2;
    center + Vec2::new(screen_angle.cos(), screen_angle.sin()) * radius
}
