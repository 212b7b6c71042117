//! Curvature styles.

use std::fmt;
use std::str::FromStr;

use crate::error::LayoutError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How column rotation is composed with the column radius.
///
/// - `Orthographic` rotates each column about an axis through the row
///   sphere, then corrects the lateral and vertical drift explicitly. Tall
///   grids fan out less.
/// - `Standard` rotates each column about the column-radius cylinder, which
///   fans the outer columns out further.
/// - `Fixed` is accepted as a name but has no schedule; placing a key with
///   it fails with [`LayoutError::UnsupportedStyle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub enum CurvatureStyle {
    /// Column rotation about the row sphere with explicit drift correction.
    Orthographic,
    /// Column rotation about the column-radius cylinder.
    Standard,
    /// Fixed column angles (not implemented).
    Fixed,
}

impl CurvatureStyle {
    /// Rows above which [`CurvatureStyle::for_rows`] picks `Orthographic`.
    pub const ORTHOGRAPHIC_ROW_THRESHOLD: usize = 5;

    /// Default style for a grid with `rows` rows.
    #[must_use]
    pub const fn for_rows(rows: usize) -> Self {
        if rows > Self::ORTHOGRAPHIC_ROW_THRESHOLD {
            Self::Orthographic
        } else {
            Self::Standard
        }
    }

    /// Lowercase name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Orthographic => "orthographic",
            Self::Standard => "standard",
            Self::Fixed => "fixed",
        }
    }
}

impl fmt::Display for CurvatureStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CurvatureStyle {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "orthographic" => Ok(Self::Orthographic),
            "standard" => Ok(Self::Standard),
            "fixed" => Ok(Self::Fixed),
            other => Err(LayoutError::invalid_configuration(format!(
                "unrecognized curvature style '{other}'"
            ))),
        }
    }
}

impl TryFrom<String> for CurvatureStyle {
    type Error = LayoutError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CurvatureStyle> for String {
    fn from(style: CurvatureStyle) -> Self {
        style.as_str().to_owned()
    }
}
