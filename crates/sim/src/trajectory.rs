//! Bounded FIFO trajectory history with NaN break markers.

use std::collections::VecDeque;

use catapult_core::Vector2;

/// Default number of retained samples per trajectory.
pub const DEFAULT_MAX_POINTS: usize = 5_000;

/// Bounded FIFO of trajectory sample points.
///
/// Discontinuities (resets that keep prior history) are recorded as break
/// markers: points whose coordinates are both NaN. Consumers rendering or
/// exporting the polyline split it at breaks. A capacity of zero disables
/// the bound entirely.
#[derive(Debug, Clone)]
pub struct TrajectoryBuffer {
    points: VecDeque<Vector2>,
    max_points: usize,
}

impl Default for TrajectoryBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_POINTS)
    }
}

impl TrajectoryBuffer {
    /// Create a buffer retaining at most `max_points` samples (0 = unbounded).
    pub fn new(max_points: usize) -> Self {
        Self {
            points: VecDeque::new(),
            max_points,
        }
    }

    /// Append a sample, evicting the oldest once the bound is exceeded.
    pub fn push(&mut self, point_km: Vector2) {
        self.points.push_back(point_km);
        self.enforce_bound();
    }

    /// Append a break marker separating disconnected segments.
    ///
    /// The marker counts against the bound and is evicted like any sample.
    pub fn push_break(&mut self) {
        self.push(Vector2::new(f64::NAN, f64::NAN));
    }

    /// True when `point` is a break marker (both coordinates NaN).
    ///
    /// A point with a single NaN coordinate is ordinary, if suspect, data.
    pub fn is_break_point(point: Vector2) -> bool {
        point.x.is_nan() && point.y.is_nan()
    }

    /// Drop all samples, keeping the capacity.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Change the retention bound, evicting immediately when shrinking.
    pub fn set_max_points(&mut self, max_points: usize) {
        self.max_points = max_points;
        self.enforce_bound();
    }

    /// Retention bound (0 = unbounded).
    pub fn max_points(&self) -> usize {
        self.max_points
    }

    /// Number of retained samples, break markers included.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when no samples are retained.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Oldest-to-newest iterator over the retained samples.
    pub fn iter(&self) -> impl Iterator<Item = &Vector2> {
        self.points.iter()
    }

    /// Most recent sample, if any.
    pub fn last(&self) -> Option<Vector2> {
        self.points.back().copied()
    }

    fn enforce_bound(&mut self) {
        if self.max_points == 0 {
            return;
        }
        while self.points.len() > self.max_points {
            self.points.pop_front();
        }
    }
}
