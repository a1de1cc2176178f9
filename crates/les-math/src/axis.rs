//! Axis selector for 3D fields.
//!
//! Selectors are 1-based: 1 = x (first axis), 2 = y, 3 = z (vertical).
//! Array indexing inside the crate is always 0-based.

use std::fmt;

use les_types::error::{LesError, LesResult};

/// One of the three axes of a volumetric field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Parse a 1-based selector. Anything outside {1, 2, 3} is rejected.
    pub fn from_selector(dim: usize) -> LesResult<Self> {
        match dim {
            1 => Ok(Axis::X),
            2 => Ok(Axis::Y),
            3 => Ok(Axis::Z),
            other => Err(LesError::InvalidArgument(format!(
                "axis selector must be one of {{1, 2, 3}}, got {other}"
            ))),
        }
    }

    /// 1-based selector for this axis.
    pub fn selector(self) -> usize {
        self.index() + 1
    }

    /// 0-based ndarray axis index.
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// The two remaining axes, in ascending order.
    pub fn others(self) -> [Axis; 2] {
        match self {
            Axis::X => [Axis::Y, Axis::Z],
            Axis::Y => [Axis::X, Axis::Z],
            Axis::Z => [Axis::X, Axis::Y],
        }
    }

    pub(crate) fn nd(self) -> ndarray::Axis {
        ndarray::Axis(self.index())
    }
}

impl TryFrom<usize> for Axis {
    type Error = LesError;

    fn try_from(dim: usize) -> LesResult<Self> {
        Axis::from_selector(dim)
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        write!(f, "{name} (axis {})", self.selector())
    }
}
