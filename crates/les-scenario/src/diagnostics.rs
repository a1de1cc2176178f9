// ─────────────────────────────────────────────────────────────────────
// SCPN Ocean LES — Profile Diagnostics
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Horizontally averaged vertical profiles of a field snapshot.

use les_math::{mean_over_others, vertical_gradient, Axis};
use les_types::error::{LesError, LesResult};
use les_types::state::{FieldSnapshot, Grid3D};
use ndarray::Array1;
use tracing::debug;

/// Horizontal-mean profiles at cell centres, bottom to surface.
#[derive(Debug, Clone)]
pub struct MeanProfiles {
    pub z: Array1<f64>,
    pub u: Array1<f64>,
    pub v: Array1<f64>,
    pub w: Array1<f64>,
    pub t: Array1<f64>,
    pub s: Array1<f64>,
}

/// Mean of every prognostic field over the horizontal axes.
pub fn mean_profiles(snapshot: &FieldSnapshot, grid: &Grid3D) -> LesResult<MeanProfiles> {
    snapshot.validate_shape(grid)?;
    let profiles = MeanProfiles {
        z: grid.z.clone(),
        u: mean_over_others(&snapshot.u, Axis::Z)?,
        v: mean_over_others(&snapshot.v, Axis::Z)?,
        w: mean_over_others(&snapshot.w, Axis::Z)?,
        t: mean_over_others(&snapshot.t, Axis::Z)?,
        s: mean_over_others(&snapshot.s, Axis::Z)?,
    };
    debug!(time = snapshot.time, levels = grid.nz, "computed mean profiles");
    Ok(profiles)
}

/// Horizontal mean of dT/dz at interior faces.
/// Returns (z_face, dTdz), each of length nz - 1.
pub fn temperature_gradient_profile(
    snapshot: &FieldSnapshot,
    grid: &Grid3D,
) -> LesResult<(Array1<f64>, Array1<f64>)> {
    snapshot.validate_shape(grid)?;
    let grad = vertical_gradient(&snapshot.t, grid.dz)?;
    let profile = mean_over_others(&grad, Axis::Z)?;
    Ok((grid.z_faces(), profile))
}

/// Depth below the surface at which the mean temperature first departs
/// from its surface value by more than `threshold`.
///
/// Profiles run bottom to surface. Returns the full depth when the
/// threshold is never exceeded. Non-finite levels are rejected.
pub fn mixed_layer_depth(t: &Array1<f64>, z: &Array1<f64>, threshold: f64) -> LesResult<f64> {
    if t.len() != z.len() {
        return Err(LesError::InvalidArgument(format!(
            "profile length {} does not match coordinate length {}",
            t.len(),
            z.len()
        )));
    }
    if !threshold.is_finite() || threshold <= 0.0 {
        return Err(LesError::InvalidArgument(format!(
            "threshold must be finite and > 0, got {threshold}"
        )));
    }
    let n = t.len();
    if n == 0 {
        return Err(LesError::InvalidArgument(
            "mixed layer depth needs at least one level".to_string(),
        ));
    }

    if let Some(k) = (0..n).find(|&k| !t[k].is_finite() || !z[k].is_finite()) {
        return Err(LesError::InvalidArgument(format!(
            "profile level {k} is not finite (t = {}, z = {})",
            t[k], z[k]
        )));
    }

    let surface = t[n - 1];
    for k in (0..n).rev() {
        if (t[k] - surface).abs() > threshold {
            return Ok(-z[k]);
        }
    }
    Ok(-z[0])
}
