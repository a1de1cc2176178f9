//! Horizontal (two-axis) means of 3D fields.
//!
//! Reducing over an axis with zero extent is an error, never a silent NaN.

use les_types::error::{LesError, LesResult};
use ndarray::{Array1, Array3};

use crate::axis::Axis;

/// Mean over the two axes other than the 1-based selector `axis`.
///
/// Returns one value per index along `axis`. Fails with `InvalidArgument`
/// for a bad selector and `EmptyReduction` when a reduced extent is zero.
pub fn horizontal_mean(field: &Array3<f64>, axis: usize) -> LesResult<Array1<f64>> {
    let axis = Axis::from_selector(axis)?;
    mean_over_others(field, axis)
}

/// Mean over the two axes other than `axis`.
pub fn mean_over_others(field: &Array3<f64>, axis: Axis) -> LesResult<Array1<f64>> {
    let (n1, n2, n3) = field.dim();
    let shape = [n1, n2, n3];
    let count = axis.others().iter().map(|a| shape[a.index()]).product::<usize>();
    if count == 0 {
        return Err(LesError::EmptyReduction {
            axis: axis.selector(),
            shape,
        });
    }

    let n = shape[axis.index()];
    let mut profile = Array1::zeros(n);
    for (i, slab) in field.axis_iter(axis.nd()).enumerate() {
        profile[i] = slab.sum() / count as f64;
    }
    Ok(profile)
}
