// ─────────────────────────────────────────────────────────────────────
// SCPN Ocean LES — State
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use ndarray::{Array1, Array3};

use crate::error::{LesError, LesResult};

/// Regular 3D grid with cell-centred coordinates.
/// Horizontal axes span (0, L); the vertical axis spans (-Lz, 0) with the
/// last index at the surface.
#[derive(Debug, Clone)]
pub struct Grid3D {
    pub nx: usize,
    pub ny: usize,
    pub nz: usize,
    pub lx: f64,
    pub ly: f64,
    pub lz: f64,
    pub dx: f64,
    pub dy: f64,
    pub dz: f64,
    pub x: Array1<f64>, // [nx] cell centres
    pub y: Array1<f64>, // [ny] cell centres
    pub z: Array1<f64>, // [nz] cell centres, bottom to surface
}

impl Grid3D {
    pub fn new(size: [usize; 3], extent: [f64; 3]) -> Self {
        let [nx, ny, nz] = size;
        let [lx, ly, lz] = extent;
        let dx = lx / nx.max(1) as f64;
        let dy = ly / ny.max(1) as f64;
        let dz = lz / nz.max(1) as f64;

        let x = Array1::from_shape_fn(nx, |i| (i as f64 + 0.5) * dx);
        let y = Array1::from_shape_fn(ny, |j| (j as f64 + 0.5) * dy);
        let z = Array1::from_shape_fn(nz, |k| -lz + (k as f64 + 0.5) * dz);

        Grid3D {
            nx,
            ny,
            nz,
            lx,
            ly,
            lz,
            dx,
            dy,
            dz,
            x,
            y,
            z,
        }
    }

    pub fn shape(&self) -> [usize; 3] {
        [self.nx, self.ny, self.nz]
    }

    /// Vertical positions of the interior cell faces, one per adjacent pair of centres.
    pub fn z_faces(&self) -> Array1<f64> {
        let n = self.nz.saturating_sub(1);
        Array1::from_shape_fn(n, |k| 0.5 * (self.z[k] + self.z[k + 1]))
    }

    /// Smallest grid spacing, used by the CFL estimate.
    pub fn min_spacing(&self) -> f64 {
        self.dx.min(self.dy).min(self.dz)
    }
}

/// Snapshot of the prognostic fields at one output time.
/// Every field has shape [nx, ny, nz].
#[derive(Debug, Clone)]
pub struct FieldSnapshot {
    pub time: f64,
    pub u: Array3<f64>,
    pub v: Array3<f64>,
    pub w: Array3<f64>,
    pub t: Array3<f64>, // temperature [°C]
    pub s: Array3<f64>, // salinity [psu]
}

impl FieldSnapshot {
    pub fn zeros(grid: &Grid3D) -> Self {
        let shape = (grid.nx, grid.ny, grid.nz);
        FieldSnapshot {
            time: 0.0,
            u: Array3::zeros(shape),
            v: Array3::zeros(shape),
            w: Array3::zeros(shape),
            t: Array3::zeros(shape),
            s: Array3::zeros(shape),
        }
    }

    /// Check that every field matches the grid.
    pub fn validate_shape(&self, grid: &Grid3D) -> LesResult<()> {
        let expected = grid.shape();
        for field in [&self.u, &self.v, &self.w, &self.t, &self.s] {
            let (a, b, c) = field.dim();
            let found = [a, b, c];
            if found != expected {
                return Err(LesError::ShapeMismatch { expected, found });
            }
        }
        Ok(())
    }

    /// Largest absolute velocity component over the whole domain.
    pub fn max_speed(&self) -> f64 {
        [&self.u, &self.v, &self.w]
            .iter()
            .flat_map(|f| f.iter())
            .fold(0.0_f64, |acc, &v| acc.max(v.abs()))
    }
}
