// MIT/Apache2 License

//! Handing point sequences to `lyon_path`.

use crate::{Point, Points};
use lyon_path::{builder::PathBuilder, path::Builder, Path};

impl From<Point> for lyon_geom::Point<f32> {
    #[inline]
    fn from(point: Point) -> Self {
        lyon_geom::point(point.x() as f32, point.y() as f32)
    }
}

impl Points {
    /// Trace these points into `builder`, as one sub-path. Does nothing if there are no points.
    #[inline]
    pub fn build_path<B: PathBuilder>(&self, builder: &mut B, close: bool) {
        let mut points = self.iter().copied().map(lyon_geom::Point::<f32>::from);
        if let Some(begin) = points.next() {
            builder.begin(begin);
            points.for_each(|pt| {
                builder.line_to(pt);
            });
            builder.end(close);
        }
    }

    /// Build a path that visits every point in order. Returns `None` if there are no points.
    #[inline]
    pub fn to_path(&self, close: bool) -> Option<Path> {
        if self.is_empty() {
            return None;
        }

        let mut builder = Builder::with_capacity(self.len(), self.len());
        self.build_path(&mut builder, close);
        Some(builder.build())
    }
}
