//! Pure motion math: keyboard axes to a per-frame planar displacement.
//!
//! Everything here advances once per frame, not per second, so response time
//! scales with frame rate.

use bevy::math::Vec3;

pub fn desired_vertical(up: bool, down: bool) -> f32 {
    if up {
        1.0
    } else if down {
        -1.0
    } else {
        0.0
    }
}

pub fn desired_horizontal(left: bool, right: bool) -> f32 {
    if left {
        -1.0
    } else if right {
        1.0
    } else {
        0.0
    }
}

/// One smoothing step toward `desired`. With `release_snap` a zero target is reached immediately.
pub fn smooth_axis(current: f32, desired: f32, lerp: f32, release_snap: bool) -> f32 {
    if desired == 0.0 && release_snap {
        return 0.0;
    }
    let lerp = lerp.clamp(0.0, 1.0);
    (current + (desired - current) * lerp).clamp(-1.0, 1.0)
}

/// Input strength: sum of absolute axes, clamped to [0, 1].
pub fn input_magnitude(vertical: f32, horizontal: f32) -> f32 {
    (vertical.abs() + horizontal.abs()).clamp(0.0, 1.0)
}

/// Camera-relative displacement. `forward`/`right` come from the camera root;
/// their vertical parts are discarded so the result stays on the ground plane.
pub fn planar_displacement(
    vertical: f32,
    horizontal: f32,
    forward: Vec3,
    right: Vec3,
    speed: f32,
) -> Vec3 {
    let mut dir = forward * vertical + right * horizontal;
    dir.y = 0.0;
    dir.normalize_or_zero() * input_magnitude(vertical, horizontal) * speed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposing_keys_prefer_first_binding() {
        assert_eq!(desired_vertical(true, true), 1.0);
        assert_eq!(desired_horizontal(true, true), -1.0);
        assert_eq!(desired_vertical(false, false), 0.0);
    }

    #[test]
    fn release_snap_vs_lerp_back() {
        assert_eq!(smooth_axis(0.75, 0.0, 0.5, true), 0.0);
        assert!((smooth_axis(0.75, 0.0, 0.5, false) - 0.375).abs() < 1e-6);
    }

    #[test]
    fn forward_input_moves_along_root_forward() {
        let d = planar_displacement(1.0, 0.0, Vec3::NEG_Z, Vec3::X, 0.45);
        assert!((d - Vec3::new(0.0, 0.0, -0.45)).length() < 1e-6);
    }

    #[test]
    fn diagonal_is_normalized_not_boosted() {
        let d = planar_displacement(1.0, 1.0, Vec3::NEG_Z, Vec3::X, 0.45);
        assert!((d.length() - 0.45).abs() < 1e-5);
        assert!(d.x > 0.0 && d.z < 0.0);
    }

    #[test]
    fn tilted_forward_stays_planar() {
        let tilted = Vec3::new(0.0, -0.5, -1.0).normalize();
        let d = planar_displacement(0.5, 0.0, tilted, Vec3::X, 0.45);
        assert_eq!(d.y, 0.0);
        assert!((d.length() - 0.225).abs() < 1e-5);
    }
}
