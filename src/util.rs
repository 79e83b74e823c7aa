// MIT/Apache2 License

use crate::{Error, Point, Result};
use num_traits::Float;

/// Reject NaN and infinities, naming the parameter they were passed as.
#[inline]
pub(crate) fn finite<Num: Float>(name: &'static str, value: Num) -> Result<Num> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::not_finite(name, value.to_f64().unwrap_or(f64::NAN)))
    }
}

#[inline]
pub(crate) fn finite_point(name: &'static str, point: Point) -> Result<Point> {
    finite(name, point.x())?;
    finite(name, point.y())?;
    Ok(point)
}

#[cfg(test)]
pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Assert that a point sequence matches a list of coordinates, within floating point error.
#[cfg(test)]
pub(crate) fn assert_coordinates(expected: &[(f64, f64)], actual: &[Point]) {
    assert_eq!(
        expected.len(),
        actual.len(),
        "expected {:?}, got {:?}",
        expected,
        actual
    );
    for (&(x, y), point) in expected.iter().zip(actual) {
        approx::assert_abs_diff_eq!(Point::new(x, y), *point, epsilon = 1e-9);
    }
}
