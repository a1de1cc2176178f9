//! Array reductions for SCPN Ocean LES field snapshots.

pub mod axis;
pub mod difference;
pub mod mean;

pub use axis::Axis;
pub use difference::{axis_difference, diff_along, vertical_gradient};
pub use mean::{horizontal_mean, mean_over_others};
