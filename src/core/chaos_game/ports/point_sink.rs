use crate::core::data::vector2d::Vector2D;

/// Receives every point the chaos game produces.
pub trait PointSink {
    /// Returns `false` when the point was not recorded, e.g. it fell outside the sink's window.
    fn plot(&mut self, point: Vector2D) -> bool;
}

impl PointSink for Vec<Vector2D> {
    fn plot(&mut self, point: Vector2D) -> bool {
        self.push(point);
        true
    }
}
