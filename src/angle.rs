// MIT/Apache2 License

use crate::{util, Error, Result};
use approx::{AbsDiffEq, RelativeEq};
use core::{
    cmp,
    f64::consts::PI,
    hash::{Hash, Hasher},
};
use num_traits::Zero;
use ordered_float::NotNan;

/// An angle, along with its cached sine, cosine and tangent.
///
/// Rotations and skews read the trigonometric values many times over, so they are computed once, whenever the
/// angle changes. Two angles compare equal if their radians are equal; the cache is derived from them.
#[derive(Debug, Copy, Clone)]
pub struct Angle {
    radians: NotNan<f64>,
    sin: f64,
    cos: f64,
    tan: f64,
}

impl Angle {
    /// Create an angle based on the number of radians in the angle. Fails if `radians` is not finite.
    #[inline]
    pub fn from_radians(radians: f64) -> Result<Angle> {
        let mut angle = Angle::default();
        angle.set(radians)?;
        Ok(angle)
    }

    /// Create an angle based on the number of degrees in the angle. Fails if `degrees` is not finite.
    #[inline]
    pub fn from_degrees(degrees: f64) -> Result<Angle> {
        Angle::from_radians(to_radians(util::finite("degrees", degrees)?))
    }

    /// Reset the angle, in radians.
    pub fn set(&mut self, radians: f64) -> Result<&mut Self> {
        let radians = util::finite("radians", radians)?;
        self.radians = NotNan::new(radians).map_err(|_| Error::not_finite("radians", radians))?;
        self.sin = radians.sin();
        self.cos = radians.cos();
        self.tan = radians.tan();
        Ok(self)
    }

    /// Reset the angle, in degrees.
    #[inline]
    pub fn set_degrees(&mut self, degrees: f64) -> Result<&mut Self> {
        self.set(to_radians(util::finite("degrees", degrees)?))
    }

    /// Add to the angle, in radians.
    #[inline]
    pub fn add(&mut self, radians: f64) -> Result<&mut Self> {
        self.set(self.radians() + util::finite("radians", radians)?)
    }

    /// Add to the angle, in degrees.
    #[inline]
    pub fn add_degrees(&mut self, degrees: f64) -> Result<&mut Self> {
        self.add(to_radians(util::finite("degrees", degrees)?))
    }

    /// Get an independent copy of this angle.
    #[inline]
    pub fn copy(&self) -> Angle {
        *self
    }

    /// Get the number of radians in this angle.
    #[inline]
    pub fn radians(&self) -> f64 {
        self.radians.into_inner()
    }

    /// Get the number of degrees in this angle.
    #[inline]
    pub fn degrees(&self) -> f64 {
        self.radians() * 180.0 / PI
    }

    #[inline]
    pub fn sin(&self) -> f64 {
        self.sin
    }

    #[inline]
    pub fn cos(&self) -> f64 {
        self.cos
    }

    /// Tangent of the angle. Near odd multiples of a quarter circle this is very large, but finite.
    #[inline]
    pub fn tan(&self) -> f64 {
        self.tan
    }
}

#[inline]
fn to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

impl Default for Angle {
    #[inline]
    fn default() -> Self {
        Angle {
            radians: NotNan::zero(),
            sin: 0.0,
            cos: 1.0,
            tan: 0.0,
        }
    }
}

impl PartialEq for Angle {
    #[inline]
    fn eq(&self, other: &Angle) -> bool {
        self.radians == other.radians
    }
}

impl Eq for Angle {}

impl PartialOrd for Angle {
    #[inline]
    fn partial_cmp(&self, other: &Angle) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Angle {
    #[inline]
    fn cmp(&self, other: &Angle) -> cmp::Ordering {
        self.radians.cmp(&other.radians)
    }
}

impl Hash for Angle {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.radians.hash(state);
    }
}

impl AbsDiffEq for Angle {
    type Epsilon = f64;

    #[inline]
    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    #[inline]
    fn abs_diff_eq(&self, other: &Angle, epsilon: f64) -> bool {
        self.radians().abs_diff_eq(&other.radians(), epsilon)
    }
}

impl RelativeEq for Angle {
    #[inline]
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    #[inline]
    fn relative_eq(&self, other: &Angle, epsilon: f64, max_relative: f64) -> bool {
        self.radians()
            .relative_eq(&other.radians(), epsilon, max_relative)
    }
}
