//! Stitching per-window results into one route.

use crate::domain::{Geometry, Point, RouteData, RouteError, SegmentResult};

/// Merge per-window results, in window order, into a single route.
///
/// Totals are summed and instructions concatenated. Geometry keeps every
/// coordinate of the first segment and drops the first coordinate of each
/// later one, which is the boundary point shared with its predecessor.
/// `original_points` are echoed back as `[lat, lng]` pairs.
pub fn aggregate(
    segments: Vec<SegmentResult>,
    original_points: &[Point],
) -> Result<RouteData, RouteError> {
    let mut segments = segments.into_iter();
    let mut merged = segments
        .next()
        .ok_or_else(|| RouteError::InvalidRequest("no segments to aggregate".to_string()))?;

    for segment in segments {
        merged.append(segment);
    }

    Ok(RouteData {
        geometry: Geometry::LineString {
            coordinates: merged.geometry_coords,
        },
        distance: merged.distance_meters,
        duration: merged.duration_seconds,
        instructions: merged.instructions,
        waypoints: original_points.iter().map(|p| p.to_lat_lng()).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Instruction;

    fn instruction(text: &str, sign: i32) -> Instruction {
        Instruction {
            text: text.to_string(),
            distance: 25.0,
            sign,
            time: 18_000,
            street_name: Some("Main Street".to_string()),
        }
    }

    fn segment(coords: &[[f64; 2]], distance: f64, duration: f64, texts: &[&str]) -> SegmentResult {
        SegmentResult {
            geometry_coords: coords.to_vec(),
            distance_meters: distance,
            duration_seconds: duration,
            instructions: texts.iter().map(|t| instruction(t, 0)).collect(),
        }
    }

    #[test]
    fn single_segment_is_identity() {
        let only = SegmentResult {
            geometry_coords: vec![[13.40, 52.52], [13.41, 52.53], [13.42, 52.54]],
            distance_meters: 1234.5,
            duration_seconds: 987.0,
            instructions: vec![instruction("Head north", 0), instruction("Arrive", 4)],
        };
        let points = [Point::new(52.52, 13.40), Point::new(52.54, 13.42)];

        let route = aggregate(vec![only.clone()], &points).unwrap();

        assert_eq!(route.geometry.coordinates(), only.geometry_coords.as_slice());
        assert_eq!(route.distance, only.distance_meters);
        assert_eq!(route.duration, only.duration_seconds);
        assert_eq!(route.instructions, only.instructions);
        assert_eq!(route.waypoints, vec![[52.52, 13.40], [52.54, 13.42]]);
    }

    #[test]
    fn merges_three_segments() {
        let a = segment(&[[0.0, 0.0], [1.0, 0.0]], 100.0, 10.0, &["a1", "a2"]);
        let b = segment(&[[1.0, 0.0], [2.0, 0.0], [3.0, 0.0]], 200.0, 20.0, &["b1"]);
        let c = segment(&[[3.0, 0.0], [4.0, 0.0]], 50.0, 5.0, &["c1", "c2"]);
        let points: Vec<Point> = (0..5).map(|i| Point::new(0.0, i as f64)).collect();

        let route = aggregate(vec![a, b, c], &points).unwrap();

        assert_eq!(
            route.geometry.coordinates(),
            &[[0.0, 0.0], [1.0, 0.0], [2.0, 0.0], [3.0, 0.0], [4.0, 0.0]]
        );
        assert_eq!(route.distance, 350.0);
        assert_eq!(route.duration, 35.0);
        let texts: Vec<_> = route.instructions.iter().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, vec!["a1", "a2", "b1", "c1", "c2"]);
        assert_eq!(route.waypoints.len(), 5);
    }

    #[test]
    fn missing_boundary_point_is_not_papered_over() {
        // Second segment forgot to repeat the boundary; its first real
        // coordinate is dropped, leaving a visible jump.
        let a = segment(&[[0.0, 0.0], [1.0, 0.0]], 1.0, 1.0, &[]);
        let b = segment(&[[2.0, 0.0], [3.0, 0.0]], 1.0, 1.0, &[]);

        let route = aggregate(vec![a, b], &[]).unwrap();

        assert_eq!(route.geometry.coordinates(), &[[0.0, 0.0], [1.0, 0.0], [3.0, 0.0]]);
    }

    #[test]
    fn no_segments_is_an_error() {
        let err = aggregate(Vec::new(), &[Point::new(0.0, 0.0)]).unwrap_err();
        assert!(matches!(err, RouteError::InvalidRequest(_)));
    }

    #[test]
    fn serializes_to_canonical_shape() {
        let a = segment(&[[13.4, 52.5], [13.5, 52.6]], 10.0, 2.0, &["go"]);
        let route = aggregate(vec![a], &[Point::new(52.5, 13.4), Point::new(52.6, 13.5)]).unwrap();

        let json = serde_json::to_value(&route).unwrap();
        assert_eq!(json["geometry"]["type"], "LineString");
        assert_eq!(json["geometry"]["coordinates"][0][0], 13.4);
        assert_eq!(json["distance"], 10.0);
        assert_eq!(json["duration"], 2.0);
        assert_eq!(json["instructions"][0]["text"], "go");
        assert_eq!(json["waypoints"][1][0], 52.6);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Chain of segments that honour the shared-boundary contract: every
    /// segment starts where the previous one ended.
    fn chained_segments() -> impl Strategy<Value = Vec<SegmentResult>> {
        prop::collection::vec(
            (
                prop::collection::vec((-10.0f64..10.0, -10.0f64..10.0), 1..6),
                0.0f64..10_000.0,
                0.0f64..10_000.0,
            ),
            1..8,
        )
        .prop_map(|raw| {
            let mut cursor = [0.0f64, 0.0f64];
            raw.into_iter()
                .map(|(steps, distance, duration)| {
                    let mut coords = vec![cursor];
                    for (dx, dy) in steps {
                        // Strictly positive advance so neighbours never coincide.
                        cursor = [cursor[0] + dx.abs() + 0.001, cursor[1] + dy];
                        coords.push(cursor);
                    }
                    SegmentResult {
                        geometry_coords: coords,
                        distance_meters: distance,
                        duration_seconds: duration,
                        instructions: Vec::new(),
                    }
                })
                .collect()
        })
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-6 * a.abs().max(b.abs()).max(1.0)
    }

    proptest! {
        /// Merging [A, B, C] at once matches merging [A, B] then C
        #[test]
        fn totals_associative(segments in chained_segments()) {
            let all = aggregate(segments.clone(), &[]).unwrap();

            let mut iter = segments.into_iter();
            let mut stepwise = iter.next().unwrap();
            for s in iter {
                let head = aggregate(vec![stepwise], &[]).unwrap();
                stepwise = SegmentResult {
                    geometry_coords: head.geometry.coordinates().to_vec(),
                    distance_meters: head.distance,
                    duration_seconds: head.duration,
                    instructions: head.instructions,
                };
                stepwise.append(s);
            }

            prop_assert!(close(all.distance, stepwise.distance_meters));
            prop_assert!(close(all.duration, stepwise.duration_seconds));
            prop_assert_eq!(all.geometry.coordinates(), stepwise.geometry_coords.as_slice());
        }

        /// Exactly one coordinate is removed per join, and no join repeats a point
        #[test]
        fn no_duplicate_at_boundaries(segments in chained_segments()) {
            let total: usize = segments.iter().map(|s| s.geometry_coords.len()).sum();
            let joins = segments.len() - 1;

            let route = aggregate(segments, &[]).unwrap();
            let coords = route.geometry.coordinates();

            prop_assert_eq!(coords.len(), total - joins);
            for pair in coords.windows(2) {
                prop_assert_ne!(pair[0], pair[1]);
            }
        }
    }
}
