// MIT/Apache2 License

//! Shape generators.
//!
//! Each generator appends its points in clockwise order and then fixes up the order of the points it just added
//! if the set is generating counterclockwise shapes. Points that anchor a shape, like the center of a sector,
//! stay where they are; how many of them there are depends on the shape.
//!
//! Finite arguments can still combine into coordinates out of `f64` range. A generator that runs into one
//! takes back everything it added and fails, so the set is left as it was.

use super::Points;
use crate::{
    util::{finite, finite_point},
    Angle, Error, Point, Result,
};
use core::f64::consts::PI;

impl Points {
    /// Add the corners of an axis-aligned rectangle, starting at `corner`.
    pub fn rectangle(&mut self, corner: Point, width: f64, height: f64) -> Result<&mut Self> {
        let corner = finite_point("corner", corner)?;
        let width = finite("width", width)?;
        let height = finite("height", height)?;
        finite("width", corner.x() + width)?;
        finite("height", corner.y() + height)?;

        let start = self.len();
        self.add_point(corner);
        self.add_point(corner).translate_x(width);
        self.add_point(corner).translate(width, height);
        self.add_point(corner).translate_y(height);
        self.take_back_if_out_of_range(start, "rectangle")?;

        // the first corner stays put
        if self.winding.is_counterclockwise() {
            self.points[start + 1..].reverse();
        }

        log::trace!("Generated rectangle at {:?} ({:?})", corner, self.winding);
        Ok(self)
    }

    /// Add the corners of a regular polygon with `n` corners, the first one straight above `center`.
    #[inline]
    pub fn polygon(&mut self, center: Point, n: usize, radius: f64) -> Result<&mut Self> {
        self.star(center, n, radius, &[] as &[f64])
    }

    /// Add the points of a star.
    ///
    /// The star is built on a regular polygon with `n` corners. Between two corners, one point is added for each
    /// of the `star_radii`, which are fractions of `radius`. All points are spread evenly around `center`, so
    /// `n * (star_radii.len() + 1)` points are added in total.
    pub fn star<R: AsRef<[f64]>>(
        &mut self,
        center: Point,
        n: usize,
        radius: f64,
        star_radii: R,
    ) -> Result<&mut Self> {
        let center = finite_point("center", center)?;
        let radius = finite("radius", radius)?;
        let star_radii = star_radii.as_ref();
        for &fraction in star_radii {
            finite("star_radii", finite("star_radii", fraction)? * radius)?;
        }

        let count = star_radii.len() + 1;
        let delta = 2.0 * PI / n as f64 / count as f64;
        let radii = || core::iter::once(radius).chain(star_radii.iter().map(|f| f * radius));

        let start = self.len();
        let mut angle = Angle::default();
        for _ in 0..n {
            for r in radii() {
                self.add_point(center).translate_y(-r).rotate(center, angle);
                angle.add(delta)?;
            }
        }
        self.take_back_if_out_of_range(start, "star")?;

        // the first outer corner stays put
        if self.winding.is_counterclockwise() && self.len() > start {
            self.points[start + 1..].reverse();
        }

        log::trace!(
            "Generated {} star points around {:?} ({:?})",
            self.len() - start,
            center,
            self.winding
        );
        Ok(self)
    }

    /// Add the center of a circle and two points on it, at `start` and `stop`. `stop` should be the larger angle.
    pub fn sector(
        &mut self,
        center: Point,
        start: Angle,
        stop: Angle,
        radius: f64,
    ) -> Result<&mut Self> {
        let center = finite_point("center", center)?;
        let radius = finite("radius", radius)?;

        let first = self.len();
        self.add_point(center);
        self.add_point(center)
            .translate_x(radius)
            .rotate(center, start);
        self.add_point(center).translate_x(radius).rotate(center, stop);
        self.take_back_if_out_of_range(first, "sector")?;

        // the center stays put, the two arc ends swap
        if self.winding.is_counterclockwise() {
            self.points[first + 1..first + 3].reverse();
        }

        log::trace!(
            "Generated sector around {:?} from {:?} to {:?} ({:?})",
            center,
            start,
            stop,
            self.winding
        );
        Ok(self)
    }

    /// Add the corners of the region between two arcs around `center`, from `start` to `stop`.
    pub fn ring_sector(
        &mut self,
        center: Point,
        start: Angle,
        stop: Angle,
        radius: f64,
        inner_radius: f64,
    ) -> Result<&mut Self> {
        let center = finite_point("center", center)?;
        let radius = finite("radius", radius)?;
        let inner_radius = finite("inner_radius", inner_radius)?;

        // nothing is anchored here, so trace the arcs the other way round instead of reversing afterwards
        let (start, stop) = if self.winding.is_counterclockwise() {
            (stop, start)
        } else {
            (start, stop)
        };

        let first = self.len();
        self.add_point(center)
            .translate_x(radius)
            .rotate(center, start);
        self.add_point(center).translate_x(radius).rotate(center, stop);
        self.add_point(center)
            .translate_x(inner_radius)
            .rotate(center, stop);
        self.add_point(center)
            .translate_x(inner_radius)
            .rotate(center, start);
        self.take_back_if_out_of_range(first, "ring sector")?;

        log::trace!(
            "Generated ring sector around {:?} ({:?})",
            center,
            self.winding
        );
        Ok(self)
    }

    /// Add `n` copies of `seed`, each turned a further `1/n` of a circle around `center`.
    pub fn rotated(&mut self, center: Point, n: usize, seed: &[Point]) -> Result<&mut Self> {
        let center = finite_point("center", center)?;
        for &point in seed {
            finite_point("seed", point)?;
        }

        let delta = 2.0 * PI / n as f64;

        let start = self.len();
        let mut angle = Angle::default();
        for _ in 0..n {
            for &point in seed {
                self.add_point(point).rotate(center, angle);
            }
            angle.add(delta)?;
        }
        self.take_back_if_out_of_range(start, "rotated points")?;

        if self.winding.is_counterclockwise() {
            self.points[start..].reverse();
        }

        log::trace!(
            "Generated {} rotated points around {:?} ({:?})",
            self.len() - start,
            center,
            self.winding
        );
        Ok(self)
    }

    /// Add the points where the edges of a rectangle with rounded corners meet the corner arcs.
    ///
    /// Starts at the left end of the top edge.
    pub fn rounded_rectangle(
        &mut self,
        corner: Point,
        width: f64,
        height: f64,
        corner_radius: f64,
    ) -> Result<&mut Self> {
        let corner = finite_point("corner", corner)?;
        let width = finite("width", width)?;
        let height = finite("height", height)?;
        let r = finite("corner_radius", corner_radius)?;

        let start = self.len();
        // top
        self.add_point(corner).translate_x(r);
        self.add_point(corner).translate_x(width - r);
        // right
        self.add_point(corner).translate(width, r);
        self.add_point(corner).translate(width, height - r);
        // bottom
        self.add_point(corner).translate(width - r, height);
        self.add_point(corner).translate(r, height);
        // left
        self.add_point(corner).translate_y(height - r);
        self.add_point(corner).translate_y(r);
        self.take_back_if_out_of_range(start, "rounded rectangle")?;

        if self.winding.is_counterclockwise() {
            self.points[start..].reverse();
        }

        log::trace!(
            "Generated rounded rectangle at {:?} ({:?})",
            corner,
            self.winding
        );
        Ok(self)
    }

    /// Remove the points added since `start` if any of them left the range of `f64`.
    fn take_back_if_out_of_range(&mut self, start: usize, shape: &'static str) -> Result {
        let in_range = self.points[start..]
            .iter()
            .all(|point| point.x().is_finite() && point.y().is_finite());
        if in_range {
            Ok(())
        } else {
            log::debug!(
                "Discarding {} points of an out of range {}",
                self.len() - start,
                shape
            );
            self.points.truncate(start);
            Err(Error::overflow(shape))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{util::assert_coordinates, InvalidArgument, Winding};
    use approx::abs_diff_eq;

    fn degrees(degrees: f64) -> Angle {
        Angle::from_degrees(degrees).unwrap()
    }

    /// Does `b` trace the same cycle as `a`, but backwards?
    fn is_reversed_cycle(a: &[Point], b: &[Point]) -> bool {
        if a.len() != b.len() {
            return false;
        }
        let reversed: Vec<Point> = a.iter().rev().copied().collect();
        (0..a.len().max(1)).any(|shift| {
            reversed
                .iter()
                .cycle()
                .skip(shift)
                .zip(b)
                .all(|(p, q)| abs_diff_eq!(*p, *q, epsilon = 1e-9))
        })
    }

    fn both_windings(generate: impl Fn(&mut Points)) -> (Points, Points) {
        crate::util::init_logger();

        let mut cw = Points::new();
        generate(&mut cw);
        let mut ccw = Points::with_winding(Winding::Counterclockwise);
        generate(&mut ccw);
        (cw, ccw)
    }

    #[test]
    fn rectangle() {
        let (cw, ccw) = both_windings(|points| {
            points.rectangle(Point::new(10.0, 20.0), 100.0, 80.0).unwrap();
        });
        assert_coordinates(
            &[(10.0, 20.0), (110.0, 20.0), (110.0, 100.0), (10.0, 100.0)],
            cw.as_slice(),
        );
        assert_coordinates(
            &[(10.0, 20.0), (10.0, 100.0), (110.0, 100.0), (110.0, 20.0)],
            ccw.as_slice(),
        );
        assert_eq!(cw.orientation(), Some(Winding::Clockwise));
        assert_eq!(ccw.orientation(), Some(Winding::Counterclockwise));
    }

    #[test]
    fn polygon() {
        let (cw, ccw) = both_windings(|points| {
            points.polygon(Point::new(10.0, 20.0), 4, 100.0).unwrap();
        });
        assert_coordinates(
            &[(10.0, -80.0), (110.0, 20.0), (10.0, 120.0), (-90.0, 20.0)],
            cw.as_slice(),
        );
        assert_coordinates(
            &[(10.0, -80.0), (-90.0, 20.0), (10.0, 120.0), (110.0, 20.0)],
            ccw.as_slice(),
        );
    }

    #[test]
    fn star() {
        let (cw, ccw) = both_windings(|points| {
            points
                .star(Point::new(10.0, 20.0), 2, 100.0, [0.5])
                .unwrap();
        });
        assert_coordinates(
            &[(10.0, -80.0), (60.0, 20.0), (10.0, 120.0), (-40.0, 20.0)],
            cw.as_slice(),
        );
        assert_coordinates(
            &[(10.0, -80.0), (-40.0, 20.0), (10.0, 120.0), (60.0, 20.0)],
            ccw.as_slice(),
        );
    }

    #[test]
    fn star_with_several_radii() {
        let (cw, ccw) = both_windings(|points| {
            points
                .star(Point::new(10.0, 20.0), 1, 100.0, vec![0.5, 1.0, 0.5])
                .unwrap();
        });
        assert_coordinates(
            &[(10.0, -80.0), (60.0, 20.0), (10.0, 120.0), (-40.0, 20.0)],
            cw.as_slice(),
        );
        assert_coordinates(
            &[(10.0, -80.0), (-40.0, 20.0), (10.0, 120.0), (60.0, 20.0)],
            ccw.as_slice(),
        );
    }

    #[test]
    fn star_point_count() {
        let mut points = Points::new();
        points
            .star(Point::new(0.0, 0.0), 5, 10.0, [0.4, 0.6])
            .unwrap();
        assert_eq!(points.len(), 15);
        assert_eq!(points.orientation(), Some(Winding::Clockwise));
    }

    #[test]
    fn sector() {
        let l = (PI / 4.0).sin() * 100.0;
        let (cw, ccw) = both_windings(|points| {
            points
                .sector(Point::new(10.0, 20.0), degrees(45.0), degrees(135.0), 100.0)
                .unwrap();
        });
        assert_coordinates(
            &[(10.0, 20.0), (10.0 + l, 20.0 + l), (10.0 - l, 20.0 + l)],
            cw.as_slice(),
        );
        assert_coordinates(
            &[(10.0, 20.0), (10.0 - l, 20.0 + l), (10.0 + l, 20.0 + l)],
            ccw.as_slice(),
        );
        assert_eq!(cw.orientation(), Some(Winding::Clockwise));
        assert_eq!(ccw.orientation(), Some(Winding::Counterclockwise));
    }

    #[test]
    fn ring_sector() {
        let l = (PI / 4.0).sin() * 100.0;
        let k = (PI / 4.0).sin() * 50.0;
        let (cw, ccw) = both_windings(|points| {
            points
                .ring_sector(
                    Point::new(10.0, 20.0),
                    degrees(45.0),
                    degrees(135.0),
                    100.0,
                    50.0,
                )
                .unwrap();
        });
        assert_coordinates(
            &[
                (10.0 + l, 20.0 + l),
                (10.0 - l, 20.0 + l),
                (10.0 - k, 20.0 + k),
                (10.0 + k, 20.0 + k),
            ],
            cw.as_slice(),
        );
        assert_coordinates(
            &[
                (10.0 - l, 20.0 + l),
                (10.0 + l, 20.0 + l),
                (10.0 + k, 20.0 + k),
                (10.0 - k, 20.0 + k),
            ],
            ccw.as_slice(),
        );
        assert_eq!(cw.orientation(), Some(Winding::Clockwise));
        assert_eq!(ccw.orientation(), Some(Winding::Counterclockwise));
    }

    #[test]
    fn rotated() {
        let seed = [Point::new(0.0, -10.0), Point::new(5.0, -5.0)];
        let (cw, ccw) = both_windings(|points| {
            points.rotated(Point::new(0.0, 0.0), 4, &seed).unwrap();
        });
        let expected = [
            (0.0, -10.0),
            (5.0, -5.0),
            (10.0, 0.0),
            (5.0, 5.0),
            (0.0, 10.0),
            (-5.0, 5.0),
            (-10.0, 0.0),
            (-5.0, -5.0),
        ];
        assert_coordinates(&expected, cw.as_slice());
        let reversed: Vec<_> = expected.iter().rev().copied().collect();
        assert_coordinates(&reversed, ccw.as_slice());
    }

    #[test]
    fn rounded_rectangle() {
        let (cw, ccw) = both_windings(|points| {
            points
                .rounded_rectangle(Point::new(10.0, 20.0), 100.0, 80.0, 10.0)
                .unwrap();
        });
        let expected = [
            (20.0, 20.0),
            (100.0, 20.0),
            (110.0, 30.0),
            (110.0, 90.0),
            (100.0, 100.0),
            (20.0, 100.0),
            (10.0, 90.0),
            (10.0, 30.0),
        ];
        assert_coordinates(&expected, cw.as_slice());
        let reversed: Vec<_> = expected.iter().rev().copied().collect();
        assert_coordinates(&reversed, ccw.as_slice());
        assert_eq!(cw.orientation(), Some(Winding::Clockwise));
    }

    #[test]
    fn windings_trace_the_same_outline_backwards() {
        let center = Point::new(-3.0, 8.0);
        let generators: Vec<Box<dyn Fn(&mut Points)>> = vec![
            Box::new(move |p: &mut Points| {
                p.rectangle(center, 7.0, 3.0).unwrap();
            }),
            Box::new(move |p: &mut Points| {
                p.polygon(center, 7, 12.0).unwrap();
            }),
            Box::new(move |p: &mut Points| {
                p.star(center, 6, 12.0, [0.3, 0.7]).unwrap();
            }),
            Box::new(move |p: &mut Points| {
                p.sector(center, degrees(10.0), degrees(80.0), 4.0).unwrap();
            }),
            Box::new(move |p: &mut Points| {
                p.ring_sector(center, degrees(-30.0), degrees(200.0), 9.0, 2.0)
                    .unwrap();
            }),
            Box::new(move |p: &mut Points| {
                p.rotated(center, 3, &[Point::new(0.0, 0.0), Point::new(1.0, 2.0)])
                    .unwrap();
            }),
            Box::new(move |p: &mut Points| {
                p.rounded_rectangle(center, 40.0, 20.0, 5.0).unwrap();
            }),
        ];

        for generate in generators.iter() {
            let (cw, ccw) = both_windings(generate);
            assert!(
                is_reversed_cycle(cw.as_slice(), ccw.as_slice()),
                "{:?} is not {:?} reversed",
                ccw,
                cw
            );
        }
    }

    #[test]
    fn generators_append() {
        let mut points = Points::new();
        points
            .rectangle(Point::new(0.0, 0.0), 1.0, 1.0)
            .unwrap()
            .ccw()
            .sector(Point::new(5.0, 5.0), degrees(0.0), degrees(90.0), 2.0)
            .unwrap();
        assert_coordinates(
            &[
                (0.0, 0.0),
                (1.0, 0.0),
                (1.0, 1.0),
                (0.0, 1.0),
                (5.0, 5.0),
                (5.0, 7.0),
                (7.0, 5.0),
            ],
            points.as_slice(),
        );
    }

    #[test]
    fn counterclockwise_after_existing_points() {
        let prefix = Point::new(-1.0, -1.0);

        let mut points = Points::with_winding(Winding::Counterclockwise);
        points.add_point(prefix);
        points
            .star(Point::new(10.0, 20.0), 2, 100.0, [0.5])
            .unwrap();
        assert_coordinates(
            &[
                (-1.0, -1.0),
                (10.0, -80.0),
                (-40.0, 20.0),
                (10.0, 120.0),
                (60.0, 20.0),
            ],
            points.as_slice(),
        );

        let mut points = Points::with_winding(Winding::Counterclockwise);
        points.add_point(prefix);
        points
            .rotated(
                Point::new(0.0, 0.0),
                2,
                &[Point::new(0.0, -10.0), Point::new(5.0, -5.0)],
            )
            .unwrap();
        assert_coordinates(
            &[
                (-1.0, -1.0),
                (-5.0, 5.0),
                (0.0, 10.0),
                (5.0, -5.0),
                (0.0, -10.0),
            ],
            points.as_slice(),
        );

        let mut points = Points::with_winding(Winding::Counterclockwise);
        points.add_point(prefix);
        points
            .rectangle(Point::new(10.0, 20.0), 100.0, 80.0)
            .unwrap();
        assert_coordinates(
            &[
                (-1.0, -1.0),
                (10.0, 20.0),
                (10.0, 100.0),
                (110.0, 100.0),
                (110.0, 20.0),
            ],
            points.as_slice(),
        );

        let mut points = Points::with_winding(Winding::Counterclockwise);
        points.add_point(prefix);
        points
            .rounded_rectangle(Point::new(10.0, 20.0), 100.0, 80.0, 10.0)
            .unwrap();
        assert_coordinates(
            &[
                (-1.0, -1.0),
                (10.0, 30.0),
                (10.0, 90.0),
                (20.0, 100.0),
                (100.0, 100.0),
                (110.0, 90.0),
                (110.0, 30.0),
                (100.0, 20.0),
                (20.0, 20.0),
            ],
            points.as_slice(),
        );
    }

    #[test]
    fn tiny_shapes_keep_their_winding() {
        let (cw, ccw) = both_windings(|points| {
            points.rectangle(Point::new(0.0, 0.0), 1e-8, 1e-8).unwrap();
        });
        assert_eq!(cw.orientation(), Some(Winding::Clockwise));
        assert_eq!(ccw.orientation(), Some(Winding::Counterclockwise));
    }

    #[test]
    fn degenerate_input_is_deterministic() {
        let mut points = Points::new();
        points.polygon(Point::new(1.0, 1.0), 0, 10.0).unwrap();
        assert!(points.is_empty());

        points.ccw().polygon(Point::new(1.0, 1.0), 3, 0.0).unwrap();
        assert_coordinates(&[(1.0, 1.0), (1.0, 1.0), (1.0, 1.0)], points.as_slice());

        let mut points = Points::new();
        points.rotated(Point::new(0.0, 0.0), 0, &[Point::new(1.0, 1.0)]).unwrap();
        assert!(points.is_empty());
    }

    #[test]
    fn rejects_non_finite_arguments() {
        let mut points = Points::new();
        let err = points
            .rectangle(Point::new(0.0, 0.0), f64::NAN, 1.0)
            .unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(points
            .star(Point::new(0.0, 0.0), 3, 1.0, [f64::INFINITY])
            .is_err());
        assert!(points
            .sector(Point::new(f64::NAN, 0.0), degrees(0.0), degrees(1.0), 1.0)
            .is_err());
        assert!(points
            .rounded_rectangle(Point::new(0.0, 0.0), 1.0, 1.0, f64::NEG_INFINITY)
            .is_err());
        // nothing was added by a rejected call
        assert!(points.is_empty());
    }

    #[test]
    fn rejects_arguments_that_overflow() {
        crate::util::init_logger();

        let mut points = Points::new();
        points.rectangle(Point::new(0.0, 0.0), 1.0, 1.0).unwrap();
        let before = points.clone();

        let err = points
            .star(Point::new(0.0, 0.0), 4, 1e300, [1e10])
            .unwrap_err();
        assert_eq!(
            err.invalid_argument(),
            Some(&InvalidArgument::NotFinite {
                name: "star_radii",
                value: f64::INFINITY
            })
        );

        assert!(points
            .rectangle(Point::new(1e308, 0.0), 1e308, 1.0)
            .unwrap_err()
            .is_invalid_argument());

        let err = points
            .rounded_rectangle(Point::new(0.0, 0.0), 1e308, 1.0, -1e308)
            .unwrap_err();
        assert_eq!(
            err.invalid_argument(),
            Some(&InvalidArgument::Overflow {
                shape: "rounded rectangle"
            })
        );

        let err = points
            .ccw()
            .sector(Point::new(1e308, 0.0), degrees(0.0), degrees(0.0), 1e308)
            .unwrap_err();
        assert_eq!(
            err.invalid_argument(),
            Some(&InvalidArgument::Overflow { shape: "sector" })
        );

        // the set is exactly as it was before the failed calls
        assert_eq!(points.as_slice(), before.as_slice());
    }
}
