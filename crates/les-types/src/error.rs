// ─────────────────────────────────────────────────────────────────────
// SCPN Ocean LES — Error
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LesError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Empty reduction: mean over axes other than {axis} of shape {shape:?} has no elements")]
    EmptyReduction { axis: usize, shape: [usize; 3] },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Shape mismatch: expected {expected:?}, found {found:?}")]
    ShapeMismatch {
        expected: [usize; 3],
        found: [usize; 3],
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type LesResult<T> = Result<T, LesError>;
