// MIT/Apache2 License

use crate::{util, Angle, Result};
use approx::{AbsDiffEq, RelativeEq};

/// A point in two-dimensional space. The X axis represents horizontal space, from left to right. The Y axis
/// represents vertical space, from top to bottom.
///
/// Every transform mutates the point in place and hands back `&mut Self`, so transforms can be chained:
///
/// ```
/// use chalkboard_shapes::{Angle, Point};
///
/// let center = Point::new(10.0, 20.0);
/// let mut tip = center;
/// tip.translate_y(-100.0)
///     .rotate(center, Angle::from_degrees(90.0).unwrap())
///     .scale(center, 0.5);
///
/// assert!((tip.x() - 60.0).abs() < 1e-9);
/// assert!((tip.y() - 20.0).abs() < 1e-9);
/// ```
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }

    /// Create a new point, failing if either coordinate is NaN or infinite.
    #[inline]
    pub fn try_new(x: f64, y: f64) -> Result<Point> {
        Ok(Point::new(util::finite("x", x)?, util::finite("y", y)?))
    }

    /// X coordinate.
    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y coordinate.
    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Rotate this point around `center`. With the Y axis pointing down, positive angles turn clockwise.
    #[inline]
    pub fn rotate(&mut self, center: Point, angle: Angle) -> &mut Self {
        let x = self.x - center.x;
        let y = self.y - center.y;
        self.x = x * angle.cos() - y * angle.sin() + center.x;
        self.y = y * angle.cos() + x * angle.sin() + center.y;
        self
    }

    /// Change the distance from `center` by `factor`.
    #[inline]
    pub fn scale(&mut self, center: Point, factor: f64) -> &mut Self {
        self.scale_x(center, factor).scale_y(center, factor)
    }

    /// Change the distance from `center` along the X axis.
    #[inline]
    pub fn scale_x(&mut self, center: Point, factor: f64) -> &mut Self {
        self.x = (self.x - center.x) * factor + center.x;
        self
    }

    /// Change the distance from `center` along the Y axis.
    #[inline]
    pub fn scale_y(&mut self, center: Point, factor: f64) -> &mut Self {
        self.y = (self.y - center.y) * factor + center.y;
        self
    }

    /// Shear along the X axis, in proportion to the vertical distance from `center`.
    #[inline]
    pub fn skew_x(&mut self, center: Point, angle: Angle) -> &mut Self {
        self.x += (self.y - center.y) * angle.tan();
        self
    }

    /// Shear along the Y axis, in proportion to the horizontal distance from `center`.
    #[inline]
    pub fn skew_y(&mut self, center: Point, angle: Angle) -> &mut Self {
        self.y += (self.x - center.x) * angle.tan();
        self
    }

    #[inline]
    pub fn translate(&mut self, dx: f64, dy: f64) -> &mut Self {
        self.translate_x(dx).translate_y(dy)
    }

    #[inline]
    pub fn translate_x(&mut self, dx: f64) -> &mut Self {
        self.x += dx;
        self
    }

    #[inline]
    pub fn translate_y(&mut self, dy: f64) -> &mut Self {
        self.y += dy;
        self
    }

    /// Get an independent copy of this point.
    #[inline]
    pub fn copy(&self) -> Point {
        *self
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Point {
        Point::new(x, y)
    }
}

impl From<Point> for (f64, f64) {
    #[inline]
    fn from(point: Point) -> (f64, f64) {
        (point.x, point.y)
    }
}

impl AbsDiffEq for Point {
    type Epsilon = f64;

    #[inline]
    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    #[inline]
    fn abs_diff_eq(&self, other: &Point, epsilon: f64) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

impl RelativeEq for Point {
    #[inline]
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    #[inline]
    fn relative_eq(&self, other: &Point, epsilon: f64, max_relative: f64) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
    }
}
