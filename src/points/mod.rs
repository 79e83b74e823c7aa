// MIT/Apache2 License

//! An ordered sequence of points, with whole-set transforms and shape generators.

mod shapes;

use crate::{signed_area, Angle, Point, Winding};
use core::{iter::FromIterator, ops::Index, slice};
use tinyvec::TinyVec;

/// Most generated shapes have at most this many points, so they never leave the stack.
const INLINE_POINTS: usize = 8;

/// What to do with the point order after `scale_x` or `scale_y` mirrors the points.
///
/// A negative factor flips the shape across an axis, which flips its winding as well.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum MirrorPolicy {
    /// Leave the order alone; the mirrored points wind the other way.
    #[default]
    Keep,
    /// Reverse every point after the first, so the mirrored points wind as before.
    ///
    /// This works on the whole set, not on each shape in it. With several shapes in the set, only the very
    /// first point stays put, and the shapes after it come out in reverse order along with their points.
    Correct,
}

/// An ordered set of points.
///
/// Insertion order is the order the outline is traced in. Points are always copied in, so nothing outside of
/// the set can change them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Points {
    points: TinyVec<[Point; INLINE_POINTS]>,
    winding: Winding,
    mirror: MirrorPolicy,
}

impl Points {
    /// Create an empty set that generates clockwise shapes.
    #[inline]
    pub fn new() -> Points {
        Points::default()
    }

    /// Create an empty set that generates shapes with the given winding.
    #[inline]
    pub fn with_winding(winding: Winding) -> Points {
        Points {
            winding,
            ..Points::default()
        }
    }

    /// Generate the following shapes counterclockwise.
    #[inline]
    pub fn ccw(&mut self) -> &mut Self {
        self.winding = Winding::Counterclockwise;
        self
    }

    /// Generate the following shapes clockwise.
    #[inline]
    pub fn cw(&mut self) -> &mut Self {
        self.winding = Winding::Clockwise;
        self
    }

    /// The winding the following shapes are generated with.
    #[inline]
    pub fn winding(&self) -> Winding {
        self.winding
    }

    #[inline]
    pub fn set_mirror_policy(&mut self, policy: MirrorPolicy) -> &mut Self {
        self.mirror = policy;
        self
    }

    #[inline]
    pub fn mirror_policy(&self) -> MirrorPolicy {
        self.mirror
    }

    /// Add a copy of `point`, and return the copy so it can be transformed further.
    #[inline]
    pub fn add_point(&mut self, point: Point) -> &mut Point {
        let index = self.points.len();
        self.points.push(point);
        &mut self.points[index]
    }

    /// Add copies of every point in `other`, in order.
    #[inline]
    pub fn add_points(&mut self, other: &Points) -> &mut Self {
        self.points.extend_from_slice(&other.points);
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Point> {
        self.points.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Point] {
        self.points.as_slice()
    }

    #[inline]
    pub fn first(&self) -> Option<&Point> {
        self.points.first()
    }

    #[inline]
    pub fn last(&self) -> Option<&Point> {
        self.points.last()
    }

    /// Remove every point. The winding and mirror policy are kept.
    #[inline]
    pub fn clear(&mut self) -> &mut Self {
        self.points.clear();
        self
    }

    /// Signed area of the closed polygon these points trace. Positive when it winds clockwise on screen.
    #[inline]
    pub fn signed_area(&self) -> f64 {
        signed_area(&self.points)
    }

    /// Measure the direction these points actually wind in. Returns `None` if they enclose no area.
    #[inline]
    pub fn orientation(&self) -> Option<Winding> {
        Winding::of_signed_area(self.signed_area())
    }

    /// Rotate every point around `center`.
    #[inline]
    pub fn rotate(&mut self, center: Point, angle: Angle) -> &mut Self {
        for point in self.points.iter_mut() {
            point.rotate(center, angle);
        }
        self
    }

    /// Scale every point's distance from `center`.
    #[inline]
    pub fn scale(&mut self, center: Point, factor: f64) -> &mut Self {
        for point in self.points.iter_mut() {
            point.scale(center, factor);
        }
        self
    }

    /// Scale every point's distance from `center` along the X axis.
    #[inline]
    pub fn scale_x(&mut self, center: Point, factor: f64) -> &mut Self {
        for point in self.points.iter_mut() {
            point.scale_x(center, factor);
        }
        self.correct_mirroring(factor)
    }

    /// Scale every point's distance from `center` along the Y axis.
    #[inline]
    pub fn scale_y(&mut self, center: Point, factor: f64) -> &mut Self {
        for point in self.points.iter_mut() {
            point.scale_y(center, factor);
        }
        self.correct_mirroring(factor)
    }

    #[inline]
    pub fn skew_x(&mut self, center: Point, angle: Angle) -> &mut Self {
        for point in self.points.iter_mut() {
            point.skew_x(center, angle);
        }
        self
    }

    #[inline]
    pub fn skew_y(&mut self, center: Point, angle: Angle) -> &mut Self {
        for point in self.points.iter_mut() {
            point.skew_y(center, angle);
        }
        self
    }

    #[inline]
    pub fn translate(&mut self, dx: f64, dy: f64) -> &mut Self {
        for point in self.points.iter_mut() {
            point.translate(dx, dy);
        }
        self
    }

    #[inline]
    pub fn translate_x(&mut self, dx: f64) -> &mut Self {
        for point in self.points.iter_mut() {
            point.translate_x(dx);
        }
        self
    }

    #[inline]
    pub fn translate_y(&mut self, dy: f64) -> &mut Self {
        for point in self.points.iter_mut() {
            point.translate_y(dy);
        }
        self
    }

    fn correct_mirroring(&mut self, factor: f64) -> &mut Self {
        if factor < 0.0 && self.mirror == MirrorPolicy::Correct {
            log::debug!(
                "Reversing {} mirrored points to keep their winding",
                self.points.len()
            );
            if let Some((_, rest)) = self.points.split_first_mut() {
                rest.reverse();
            }
        }
        self
    }
}

impl Index<usize> for Points {
    type Output = Point;

    #[inline]
    fn index(&self, index: usize) -> &Point {
        &self.points[index]
    }
}

impl<'a> IntoIterator for &'a Points {
    type Item = &'a Point;
    type IntoIter = slice::Iter<'a, Point>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Point> for Points {
    #[inline]
    fn from_iter<T: IntoIterator<Item = Point>>(iter: T) -> Self {
        Points {
            points: iter.into_iter().collect(),
            ..Points::default()
        }
    }
}

impl Extend<Point> for Points {
    #[inline]
    fn extend<T: IntoIterator<Item = Point>>(&mut self, iter: T) {
        self.points.extend(iter);
    }
}

impl AsRef<[Point]> for Points {
    #[inline]
    fn as_ref(&self) -> &[Point] {
        self.as_slice()
    }
}
