// MIT/Apache2 License

//! Ordered point sequences for parametric shapes, with a predictable winding.
//!
//! A [`Points`] set generates the outlines of rectangles, regular polygons, stars, sectors, ring sectors and
//! rounded rectangles. Every generated outline winds clockwise unless the set was switched to counterclockwise
//! with [`Points::ccw`], so a path consumer relying on the nonzero fill rule gets the orientation it expects.
//!
//! ```
//! use chalkboard_shapes::{Point, Points, Winding};
//!
//! let mut points = Points::new();
//! points.ccw().rectangle(Point::new(10.0, 20.0), 100.0, 80.0).unwrap();
//!
//! let corners: Vec<(f64, f64)> = points.iter().map(|&p| p.into()).collect();
//! assert_eq!(corners, [(10.0, 20.0), (10.0, 100.0), (110.0, 100.0), (110.0, 20.0)]);
//! assert_eq!(points.orientation(), Some(Winding::Counterclockwise));
//! ```

#![forbid(unsafe_code)]

mod angle;
mod error;
mod point;
mod points;
mod winding;

#[cfg(feature = "path")]
mod path;

pub(crate) mod util;

pub use angle::*;
pub use error::*;
pub use point::*;
pub use points::*;
pub use winding::*;
