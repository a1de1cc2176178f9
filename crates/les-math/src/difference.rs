//! Forward first differences of 3D fields along one axis.

use les_types::error::{LesError, LesResult};
use ndarray::Array3;

use crate::axis::Axis;

/// Forward difference along a 1-based axis selector.
///
/// `D[.., i, ..] = A[.., i+1, ..] - A[.., i, ..]`. The result is one cell
/// shorter along `dim`; an extent below 2 gives an empty axis rather than an error.
/// Fails with `InvalidArgument` when `dim` is not 1, 2 or 3.
pub fn axis_difference(field: &Array3<f64>, dim: usize) -> LesResult<Array3<f64>> {
    let axis = Axis::from_selector(dim)?;
    Ok(diff_along(field, axis))
}

/// Forward difference along a typed axis.
pub fn diff_along(field: &Array3<f64>, axis: Axis) -> Array3<f64> {
    let (n1, n2, n3) = field.dim();
    let shape = match axis {
        Axis::X => (n1.saturating_sub(1), n2, n3),
        Axis::Y => (n1, n2.saturating_sub(1), n3),
        Axis::Z => (n1, n2, n3.saturating_sub(1)),
    };

    Array3::from_shape_fn(shape, |(i, j, k)| {
        let next = match axis {
            Axis::X => [i + 1, j, k],
            Axis::Y => [i, j + 1, k],
            Axis::Z => [i, j, k + 1],
        };
        field[next] - field[[i, j, k]]
    })
}

/// Vertical gradient dA/dz at interior cell faces: third-axis difference over `dz`.
pub fn vertical_gradient(field: &Array3<f64>, dz: f64) -> LesResult<Array3<f64>> {
    if !dz.is_finite() || dz <= 0.0 {
        return Err(LesError::InvalidArgument(format!(
            "vertical spacing must be finite and > 0, got {dz}"
        )));
    }
    let mut grad = diff_along(field, Axis::Z);
    grad.mapv_inplace(|d| d / dz);
    Ok(grad)
}
