//! Orientation math — pure functions over glam types.
//!
//! The rig computes its heading with two small utilities: a look-rotation
//! builder and a clamped shortest-path slerp. Both are side-effect free
//! and document their numeric semantics (normalization requirements and
//! degenerate-input behavior).

mod orientation;

pub use orientation::{look_rotation, slerp_toward, DIRECTION_EPSILON};
