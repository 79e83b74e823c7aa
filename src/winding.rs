// MIT/Apache2 License

use crate::Point;

/// The direction a sequence of points travels around the shape it outlines.
///
/// Directions are as seen on screen, where the Y axis points down.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Winding {
    #[default]
    Clockwise,
    Counterclockwise,
}

impl Winding {
    #[inline]
    pub fn is_counterclockwise(self) -> bool {
        matches!(self, Winding::Counterclockwise)
    }

    /// The opposite direction.
    #[inline]
    pub fn reverse(self) -> Winding {
        match self {
            Winding::Clockwise => Winding::Counterclockwise,
            Winding::Counterclockwise => Winding::Clockwise,
        }
    }

    /// Classify a signed area as computed by [`signed_area`]. Zero area has no winding.
    ///
    /// Area shrinks with the square of the coordinates, so any nonzero area counts, however small.
    #[inline]
    pub fn of_signed_area(area: f64) -> Option<Winding> {
        if area == 0.0 || area.is_nan() {
            None
        } else if area > 0.0 {
            Some(Winding::Clockwise)
        } else {
            Some(Winding::Counterclockwise)
        }
    }
}

/// Get the signed area enclosed by a closed polygon, using the shoelace formula. The last point connects back
/// to the first.
///
/// The result is positive for polygons that wind clockwise on screen, and negative for counterclockwise ones.
#[inline]
pub fn signed_area(points: &[Point]) -> f64 {
    let (first, last) = match (points.first(), points.last()) {
        (Some(first), Some(last)) if points.len() >= 3 => (first, last),
        _ => return 0.0,
    };

    let closing = last.x() * first.y() - first.x() * last.y();
    let sum = points.windows(2).fold(closing, |sum, pair| {
        sum + pair[0].x() * pair[1].y() - pair[1].x() * pair[0].y()
    });

    sum / 2.0
}
