/// Orientation utilities — look-rotation and smoothed rotation steps.
///
/// Conventions (right-handed, matching glam's `look_at_rh` family):
/// - World up is `Vec3::Y`.
/// - A camera with rotation `q` looks along `q * Vec3::NEG_Z`; its up
///   vector is `q * Vec3::Y` and its right vector is `q * Vec3::X`.
///
/// All quaternions produced here are unit length.

use glam::{Mat3, Quat, Vec3};

/// Rejection threshold for degenerate direction input.
///
/// A forward vector is rejected when its length is below this value, or
/// when the sine of its angle to world up is below it (i.e. the vector is
/// within ~0.006 degrees of vertical).
pub const DIRECTION_EPSILON: f32 = 1e-4;

/// Build the rotation whose forward axis is `forward` and whose up axis
/// is as close to world up (`Vec3::Y`) as possible.
///
/// `forward` does not need to be normalized; it is normalized internally.
///
/// Returns `None` when the rotation is undefined:
/// - `forward` contains NaN or infinity
/// - `forward` is shorter than [`DIRECTION_EPSILON`]
/// - `forward` is parallel (or nearly parallel) to world up — the basis
///   collapses and the yaw of the result would be arbitrary
///
/// For a `Some(q)` result, `q * Vec3::NEG_Z` equals the normalized
/// `forward` and `q * Vec3::Y` lies in the plane spanned by `forward`
/// and world up.
pub fn look_rotation(forward: Vec3) -> Option<Quat> {
    if !forward.is_finite() {
        return None;
    }

    let len = forward.length();
    if len < DIRECTION_EPSILON {
        return None;
    }
    let fwd = forward / len;

    // Right vector from forward x up; its length is the sine of the angle
    // between them, so a near-vertical forward is caught here.
    let right = fwd.cross(Vec3::Y);
    let right_len = right.length();
    if right_len < DIRECTION_EPSILON {
        return None;
    }
    let right = right / right_len;

    let up = right.cross(fwd);

    // Column basis (right, up, back) is orthonormal and right-handed.
    let rotation = Quat::from_mat3(&Mat3::from_cols(right, up, -fwd));
    Some(rotation.normalize())
}

/// Spherically interpolate from `from` toward `to` by factor `t`.
///
/// `t` is clamped to `[0, 1]`: a factor of 0 returns `from` unchanged and
/// a factor of 1 (or above) returns `to` exactly. In between, the result
/// moves along the shortest rotational path — `to` is negated when the
/// quaternion dot product is negative, so the step never takes the long
/// way around.
///
/// Both inputs must be unit quaternions; the result is unit length.
/// A non-finite `t` returns `from` unchanged.
pub fn slerp_toward(from: Quat, to: Quat, t: f32) -> Quat {
    if !t.is_finite() {
        return from;
    }
    let t = t.clamp(0.0, 1.0);
    if t == 0.0 {
        return from;
    }
    if t == 1.0 {
        return to;
    }

    // Hemisphere correction for the shortest path.
    let to = if from.dot(to) < 0.0 { -to } else { to };

    from.slerp(to, t).normalize()
}

#[cfg(test)]
#[path = "orientation_tests.rs"]
mod tests;
