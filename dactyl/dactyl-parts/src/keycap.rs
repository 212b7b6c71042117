//! SA profile keycaps.

use dactyl_layout::SwitchDimensions;
use dactyl_types::{Section, Solid, Vector3};

use crate::error::PartsError;

/// Gap between the plate top and the keycap skirt.
pub const CAP_CLEARANCE: f64 = 5.0;

/// Keycap width in key units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CapSize {
    /// 1u, square.
    #[default]
    One,
    /// 1.5u, wide along X.
    OneAndHalf,
    /// 2u, long along Y.
    Two,
}

impl CapSize {
    /// Width in key units.
    #[must_use]
    pub const fn units(self) -> f64 {
        match self {
            Self::One => 1.0,
            Self::OneAndHalf => 1.5,
            Self::Two => 2.0,
        }
    }

    /// Cross-sections of the cap, bottom to top, relative to the skirt.
    fn sections(self) -> Vec<Section> {
        match self {
            Self::One => vec![
                Section::square(0.05, 18.5 / 2.0),
                Section::square(6.1, 17.0 / 2.0),
                Section::square(12.1, 6.0),
            ],
            Self::OneAndHalf => vec![
                Section::new(0.05, 28.0 / 2.0, 18.25 / 2.0),
                Section::new(12.1, 11.0, 6.0),
            ],
            Self::Two => vec![
                Section::new(0.05, 18.25 / 2.0, 37.5 / 2.0),
                Section::new(12.1, 6.0, 16.0),
            ],
        }
    }
}

impl TryFrom<f64> for CapSize {
    type Error = PartsError;

    fn try_from(units: f64) -> Result<Self, Self::Error> {
        [Self::One, Self::OneAndHalf, Self::Two]
            .into_iter()
            .find(|size| (size.units() - units).abs() < 1e-9)
            .ok_or(PartsError::UnknownCapSize { units })
    }
}

/// An SA profile keycap resting above the plate.
#[must_use]
pub fn sa_cap(size: CapSize, switch: &SwitchDimensions) -> Solid {
    let mut cap = Solid::loft(&size.sections());
    cap.translate(Vector3::new(0.0, 0.0, CAP_CLEARANCE + switch.plate_thickness));
    cap
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn one_unit_cap_sits_above_plate() {
        let cap = sa_cap(CapSize::One, &SwitchDimensions::default());
        let bounds = cap.bounds();

        assert_relative_eq!(bounds.min.z, 9.05, epsilon = 1e-12);
        assert_relative_eq!(bounds.max.z, 21.1, epsilon = 1e-12);
        assert_relative_eq!(bounds.size().x, 18.5, epsilon = 1e-12);
        assert!(cap.signed_volume() > 0.0);
    }

    #[test]
    fn wide_caps_are_oriented() {
        let switch = SwitchDimensions::default();
        let wide = sa_cap(CapSize::OneAndHalf, &switch).bounds().size();
        let long = sa_cap(CapSize::Two, &switch).bounds().size();

        assert!(wide.x > wide.y);
        assert!(long.y > long.x);
        assert_relative_eq!(long.y, 37.5, epsilon = 1e-12);
    }

    #[test]
    fn cap_size_from_units() {
        assert_eq!(CapSize::try_from(1.0), Ok(CapSize::One));
        assert_eq!(CapSize::try_from(1.5), Ok(CapSize::OneAndHalf));
        assert_eq!(CapSize::try_from(2.0), Ok(CapSize::Two));
        assert_eq!(
            CapSize::try_from(1.25),
            Err(PartsError::UnknownCapSize { units: 1.25 })
        );
    }
}
