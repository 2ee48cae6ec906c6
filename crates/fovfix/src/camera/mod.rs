//! Camera field of view: where it lives and what it should be.

mod address;
mod geometry;

pub use address::{PointerChain, TargetAddress, resolve_fov_address};
pub use geometry::{
    BASE_FOV, BASE_SCREEN_RATIO, DEFAULT_FOV, MAX_FOV, MIN_FOV, base_view_distance,
    calculate_optimal_fov,
};
