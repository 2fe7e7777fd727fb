//! Splitting a long point chain into provider-sized windows.

use crate::domain::{Point, RouteError};

/// One outbound request's worth of points.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteWindow {
    /// Between 2 and `max_points_per_request` points, in travel order.
    pub points: Vec<Point>,
    /// Index of `points[0]` in the full route. Only used for diagnostics;
    /// merging relies on window order alone.
    pub global_start_index: usize,
}

impl RouteWindow {
    /// Index of the last point of this window in the full route.
    pub fn global_end_index(&self) -> usize {
        self.global_start_index + self.points.len() - 1
    }
}

/// Partition `points` into windows of at most `max_points_per_request`.
///
/// Consecutive windows share exactly one boundary point: the last point of
/// window `i` is the first point of window `i + 1`. A route that already
/// fits yields a single window holding every point.
///
/// # Examples
///
/// ```
/// use waypoint_router::compose::segment_points;
/// use waypoint_router::domain::Point;
///
/// let points: Vec<Point> = (0..10).map(|i| Point::new(i as f64, 0.0)).collect();
/// let windows = segment_points(&points, 5).unwrap();
///
/// let spans: Vec<_> = windows
///     .iter()
///     .map(|w| (w.global_start_index, w.global_end_index()))
///     .collect();
/// assert_eq!(spans, vec![(0, 4), (4, 8), (8, 9)]);
/// ```
pub fn segment_points(
    points: &[Point],
    max_points_per_request: usize,
) -> Result<Vec<RouteWindow>, RouteError> {
    if points.len() < 2 {
        return Err(RouteError::InvalidRequest(format!(
            "a route needs at least 2 points, got {}",
            points.len()
        )));
    }
    if max_points_per_request < 2 {
        return Err(RouteError::InvalidRequest(format!(
            "max points per request must be at least 2, got {max_points_per_request}"
        )));
    }

    if points.len() <= max_points_per_request {
        return Ok(vec![RouteWindow {
            points: points.to_vec(),
            global_start_index: 0,
        }]);
    }

    let last = points.len() - 1;
    let step = max_points_per_request - 1;
    let mut windows = Vec::with_capacity(last.div_ceil(step));
    let mut start = 0;

    // Each window ends past its start, so the final one always has >= 2 points.
    while start < last {
        let end = (start + step).min(last);
        windows.push(RouteWindow {
            points: points[start..=end].to_vec(),
            global_start_index: start,
        });
        start = end;
    }

    Ok(windows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(n: usize) -> Vec<Point> {
        (0..n).map(|i| Point::new(i as f64 * 0.01, 0.0)).collect()
    }

    fn spans(windows: &[RouteWindow]) -> Vec<(usize, usize)> {
        windows
            .iter()
            .map(|w| (w.global_start_index, w.global_end_index()))
            .collect()
    }

    #[test]
    fn fits_in_one_window() {
        let points = line(5);
        let windows = segment_points(&points, 5).unwrap();
        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].points, points);
        assert_eq!(windows[0].global_start_index, 0);
    }

    #[test]
    fn two_points_single_window() {
        let windows = segment_points(&line(2), 5).unwrap();
        assert_eq!(spans(&windows), vec![(0, 1)]);
    }

    #[test]
    fn six_points_two_windows() {
        let windows = segment_points(&line(6), 5).unwrap();
        assert_eq!(spans(&windows), vec![(0, 4), (4, 5)]);
    }

    #[test]
    fn nine_points_two_windows() {
        let windows = segment_points(&line(9), 5).unwrap();
        assert_eq!(spans(&windows), vec![(0, 4), (4, 8)]);
    }

    #[test]
    fn ten_points_three_windows() {
        let windows = segment_points(&line(10), 5).unwrap();
        assert_eq!(spans(&windows), vec![(0, 4), (4, 8), (8, 9)]);
        assert_eq!(windows[2].points.len(), 2);
    }

    #[test]
    fn minimum_window_size() {
        // Every window holds exactly one leg.
        let windows = segment_points(&line(4), 2).unwrap();
        assert_eq!(spans(&windows), vec![(0, 1), (1, 2), (2, 3)]);
    }

    #[test]
    fn rejects_single_point() {
        let err = segment_points(&line(1), 5).unwrap_err();
        assert!(matches!(err, RouteError::InvalidRequest(_)));
    }

    #[test]
    fn rejects_tiny_limit() {
        assert!(segment_points(&line(3), 1).is_err());
        assert!(segment_points(&line(3), 0).is_err());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn line(n: usize) -> Vec<Point> {
        (0..n).map(|i| Point::new(i as f64 * 0.001, 0.0)).collect()
    }

    proptest! {
        /// Windows are never smaller than 2 nor larger than the limit
        #[test]
        fn window_sizes_in_bounds(n in 2usize..200, max in 2usize..30) {
            let windows = segment_points(&line(n), max).unwrap();
            for w in &windows {
                prop_assert!(w.points.len() >= 2);
                prop_assert!(w.points.len() <= max);
            }
        }

        /// Consecutive windows share exactly one point
        #[test]
        fn consecutive_windows_overlap_once(n in 2usize..200, max in 2usize..30) {
            let windows = segment_points(&line(n), max).unwrap();
            for pair in windows.windows(2) {
                prop_assert_eq!(pair[0].global_end_index(), pair[1].global_start_index);
                prop_assert_eq!(pair[0].points.last(), pair[1].points.first());
            }
        }

        /// Windows cover every index from 0 to N-1
        #[test]
        fn windows_cover_all_points(n in 2usize..200, max in 2usize..30) {
            let points = line(n);
            let windows = segment_points(&points, max).unwrap();

            let mut covered = vec![false; n];
            for w in &windows {
                for (offset, point) in w.points.iter().enumerate() {
                    let idx = w.global_start_index + offset;
                    prop_assert_eq!(*point, points[idx]);
                    covered[idx] = true;
                }
            }
            prop_assert!(covered.iter().all(|c| *c));
            prop_assert_eq!(windows[0].global_start_index, 0);
            prop_assert_eq!(windows.last().unwrap().global_end_index(), n - 1);
        }

        /// Window count is ceil((N-1)/step) when splitting
        #[test]
        fn window_count(n in 2usize..200, max in 2usize..30) {
            let windows = segment_points(&line(n), max).unwrap();
            let expected = if n <= max { 1 } else { (n - 1).div_ceil(max - 1) };
            prop_assert_eq!(windows.len(), expected);
        }
    }
}
