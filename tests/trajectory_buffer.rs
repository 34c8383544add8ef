use cosmic_catapult::Vector2;
use cosmic_catapult::sim::TrajectoryBuffer;
use cosmic_catapult::sim::trajectory::DEFAULT_MAX_POINTS;

fn sample(x: f64) -> Vector2 {
    Vector2::new(x, -x)
}

#[test]
fn fifo_bound_keeps_the_most_recent_points_in_order() {
    let mut buffer = TrajectoryBuffer::new(3);
    for i in 0..5 {
        buffer.push(sample(i as f64));
    }

    assert_eq!(buffer.len(), 3);
    let xs: Vec<f64> = buffer.iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![2.0, 3.0, 4.0]);
    assert_eq!(buffer.last(), Some(sample(4.0)));
}

#[test]
fn default_capacity_matches_the_stock_buffers() {
    assert_eq!(TrajectoryBuffer::default().max_points(), DEFAULT_MAX_POINTS);
}

#[test]
fn break_markers_sit_in_sequence_and_evict_like_points() {
    let mut buffer = TrajectoryBuffer::new(4);
    buffer.push(sample(0.0));
    buffer.push(sample(1.0));
    buffer.push_break();
    buffer.push(sample(2.0));

    assert_eq!(buffer.len(), 4);
    let breaks: Vec<bool> = buffer
        .iter()
        .map(|p| TrajectoryBuffer::is_break_point(*p))
        .collect();
    assert_eq!(breaks, vec![false, false, true, false]);

    // The next push evicts the oldest sample; the marker shifts left intact.
    buffer.push(sample(3.0));
    assert_eq!(buffer.len(), 4);
    let breaks: Vec<bool> = buffer
        .iter()
        .map(|p| TrajectoryBuffer::is_break_point(*p))
        .collect();
    assert_eq!(breaks, vec![false, true, false, false]);
}

#[test]
fn break_predicate_requires_both_coordinates_nan() {
    assert!(TrajectoryBuffer::is_break_point(Vector2::new(
        f64::NAN,
        f64::NAN
    )));
    assert!(!TrajectoryBuffer::is_break_point(Vector2::new(
        f64::NAN,
        0.0
    )));
    assert!(!TrajectoryBuffer::is_break_point(Vector2::new(
        0.0,
        f64::NAN
    )));
    assert!(!TrajectoryBuffer::is_break_point(Vector2::new(1.0, 2.0)));
}

#[test]
fn zero_capacity_means_unbounded() {
    let mut buffer = TrajectoryBuffer::new(0);
    for i in 0..10_000 {
        buffer.push(sample(i as f64));
    }
    assert_eq!(buffer.len(), 10_000);
}

#[test]
fn shrinking_the_bound_evicts_immediately() {
    let mut buffer = TrajectoryBuffer::new(10);
    for i in 0..10 {
        buffer.push(sample(i as f64));
    }

    buffer.set_max_points(4);
    assert_eq!(buffer.len(), 4);
    assert_eq!(buffer.iter().next().map(|p| p.x), Some(6.0));
}

#[test]
fn a_break_may_lead_the_buffer() {
    let mut buffer = TrajectoryBuffer::new(3);
    buffer.push(sample(0.0));
    buffer.push(sample(1.0));
    buffer.push(sample(2.0));
    buffer.push_break();
    buffer.push(sample(3.0));
    buffer.push(sample(4.0));

    assert_eq!(buffer.len(), 3);
    let first = buffer.iter().next().copied();
    assert!(first.is_some_and(TrajectoryBuffer::is_break_point));
}
