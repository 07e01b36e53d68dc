//! Pairwise collision detection and elastic response
//!
//! Brute-force O(n²) detection producing an index-pair list, then a two-pass
//! resolver: positional de-penetration for every pair first, then the elastic
//! impulse exchange computed from the corrected geometry. The ordering
//! matters: normals for the impulse pass must come from post-correction
//! positions.

use glam::Vec2;

use super::geom::{circle_circle_overlap, distance};
use super::state::Body;

/// Below this center distance a pair has no separable direction and is
/// skipped for the frame rather than dividing by zero.
const MIN_SEPARATION: f32 = 1e-6;

/// Find all overlapping unordered pairs in one exhaustive scan.
///
/// Pairs come out in ascending `(i, j)` lexical order with `i < j`, so
/// resolution order is reproducible. The list is rebuilt every frame;
/// capacity is reserved for the `n(n-1)/2` worst case up front.
pub fn detect_overlaps(bodies: &[Body]) -> Vec<(usize, usize)> {
    let n = bodies.len();
    let mut pairs = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for i in 0..n {
        for j in (i + 1)..n {
            if circle_circle_overlap(&bodies[i], &bodies[j]) {
                pairs.push((i, j));
            }
        }
    }
    pairs
}

/// Resolve every detected pair: de-penetrate all, then exchange impulses.
pub fn resolve(bodies: &mut [Body], pairs: &[(usize, usize)]) {
    for &(i, j) in pairs {
        separate_pair(bodies, i, j);
    }
    for &(i, j) in pairs {
        elastic_impulse(bodies, i, j);
    }
}

/// Push both bodies of an overlapping pair apart along the line of centers,
/// splitting the correction evenly.
fn separate_pair(bodies: &mut [Body], i: usize, j: usize) {
    let (a, b) = pair_mut(bodies, i, j);
    let delta = a.pos - b.pos;
    let dist = delta.length();
    if dist <= MIN_SEPARATION {
        // Coincident centers: no separable direction this frame
        log::debug!("skipping degenerate pair ({i}, {j})");
        return;
    }

    // Negative while overlapping; each body moves half the overlap
    let overlap = 0.5 * (dist - a.radius - b.radius);
    let push = delta / dist * overlap;
    a.pos -= push;
    b.pos += push;
}

/// 1-D elastic collision along the collision normal, mass-weighted;
/// tangential velocity components pass through unchanged.
fn elastic_impulse(bodies: &mut [Body], i: usize, j: usize) {
    let (a, b) = pair_mut(bodies, i, j);
    let dist = distance(a.pos, b.pos);
    if dist <= MIN_SEPARATION {
        return;
    }

    let normal = (b.pos - a.pos) / dist;
    let tangent = Vec2::new(-normal.y, normal.x);

    let tan_a = a.vel.dot(tangent);
    let tan_b = b.vel.dot(tangent);
    let norm_a = a.vel.dot(normal);
    let norm_b = b.vel.dot(normal);

    let total_mass = a.mass + b.mass;
    let exchanged_a = (norm_a * (a.mass - b.mass) + 2.0 * b.mass * norm_b) / total_mass;
    let exchanged_b = (norm_b * (b.mass - a.mass) + 2.0 * a.mass * norm_a) / total_mass;

    a.vel = tangent * tan_a + normal * exchanged_a;
    b.vel = tangent * tan_b + normal * exchanged_b;
}

/// Mutable references to two distinct bodies, `i < j`
fn pair_mut(bodies: &mut [Body], i: usize, j: usize) -> (&mut Body, &mut Body) {
    debug_assert!(i < j && j < bodies.len());
    let (head, tail) = bodies.split_at_mut(j);
    (&mut head[i], &mut tail[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::VisualTag;
    use proptest::prelude::*;

    fn body(x: f32, y: f32, radius: f32, vx: f32, vy: f32) -> Body {
        let mut b = Body::new(Vec2::new(x, y), radius, VisualTag::Red);
        b.vel = Vec2::new(vx, vy);
        b
    }

    fn overlap_depth(a: &Body, b: &Body) -> f32 {
        (a.radius + b.radius - a.pos.distance(b.pos)).max(0.0)
    }

    fn momentum(bodies: &[Body]) -> Vec2 {
        bodies.iter().map(|b| b.vel * b.mass).sum()
    }

    #[test]
    fn test_pair_list_order_and_uniqueness() {
        // A clump where everything overlaps everything
        let bodies: Vec<Body> = (0..4).map(|i| body(i as f32, 0.0, 10.0, 0.0, 0.0)).collect();
        let pairs = detect_overlaps(&bodies);

        assert_eq!(pairs.len(), 6);
        assert!(pairs.windows(2).all(|w| w[0] < w[1]));
        assert!(pairs.iter().all(|&(i, j)| i < j));
    }

    #[test]
    fn test_detect_skips_separated_bodies() {
        let bodies = vec![
            body(0.0, 0.0, 5.0, 0.0, 0.0),
            body(100.0, 0.0, 5.0, 0.0, 0.0),
            body(103.0, 0.0, 5.0, 0.0, 0.0),
        ];
        assert_eq!(detect_overlaps(&bodies), vec![(1, 2)]);
    }

    #[test]
    fn test_depenetration_separates_pair() {
        let mut bodies = vec![
            body(0.0, 0.0, 10.0, 0.0, 0.0),
            body(12.0, 0.0, 10.0, 0.0, 0.0),
        ];
        let before = overlap_depth(&bodies[0], &bodies[1]);
        assert!(before > 0.0);

        let pairs = detect_overlaps(&bodies);
        resolve(&mut bodies, &pairs);

        let after = overlap_depth(&bodies[0], &bodies[1]);
        assert!(after < 1e-3, "overlap {before} not resolved: {after}");
        // Symmetric split: both moved the same amount, opposite directions
        assert!((bodies[0].pos.x - (-4.0)).abs() < 1e-4);
        assert!((bodies[1].pos.x - 16.0).abs() < 1e-4);
    }

    #[test]
    fn test_equal_mass_head_on_swaps_velocities() {
        let mut bodies = vec![
            body(0.0, 50.0, 20.0, 5.0, 0.0),
            body(30.0, 50.0, 20.0, -5.0, 0.0),
        ];
        bodies[0].mass = 10.0;
        bodies[1].mass = 10.0;

        let pairs = detect_overlaps(&bodies);
        assert_eq!(pairs, vec![(0, 1)]);
        resolve(&mut bodies, &pairs);

        assert_eq!(bodies[0].vel, Vec2::new(-5.0, 0.0));
        assert_eq!(bodies[1].vel, Vec2::new(5.0, 0.0));
    }

    #[test]
    fn test_coincident_centers_stay_finite() {
        let mut bodies = vec![
            body(100.0, 100.0, 10.0, 1.0, 2.0),
            body(100.0, 100.0, 10.0, -3.0, 0.5),
        ];
        let pairs = detect_overlaps(&bodies);
        resolve(&mut bodies, &pairs);

        for b in &bodies {
            assert!(b.pos.is_finite());
            assert!(b.vel.is_finite());
        }
        // Pair skipped entirely: velocities untouched
        assert_eq!(bodies[0].vel, Vec2::new(1.0, 2.0));
    }

    #[test]
    fn test_tangential_component_passes_through() {
        // Glancing contact along x, body 0 also moving in y
        let mut bodies = vec![
            body(0.0, 0.0, 10.0, 4.0, 3.0),
            body(18.0, 0.0, 10.0, 0.0, 0.0),
        ];
        bodies[0].mass = 10.0;
        bodies[1].mass = 10.0;

        let pairs = detect_overlaps(&bodies);
        resolve(&mut bodies, &pairs);

        // Normal is along x; the y (tangential) component is unchanged
        assert!((bodies[0].vel.y - 3.0).abs() < 1e-5);
        assert!((bodies[0].vel.x - 0.0).abs() < 1e-5);
        assert!((bodies[1].vel.x - 4.0).abs() < 1e-5);
    }

    proptest! {
        #[test]
        fn prop_momentum_conserved_in_isolated_collision(
            gap in 1.0f32..19.0,
            r1 in 5.0f32..15.0,
            r2 in 5.0f32..15.0,
            v1 in -50.0f32..50.0,
            v2 in -50.0f32..50.0,
            vy1 in -50.0f32..50.0,
            vy2 in -50.0f32..50.0,
        ) {
            // Two overlapping bodies, arbitrary masses/velocities, no drag,
            // no external forces
            let dist = (r1 + r2) * (gap / 20.0);
            let mut bodies = vec![
                body(0.0, 0.0, r1, v1, vy1),
                body(dist, 0.0, r2, v2, vy2),
            ];
            let before = momentum(&bodies);

            let pairs = detect_overlaps(&bodies);
            prop_assert_eq!(pairs.len(), 1);
            resolve(&mut bodies, &pairs);

            let after = momentum(&bodies);
            let total = bodies[0].mass + bodies[1].mass;
            prop_assert!((before - after).length() <= total * 1e-3,
                "momentum drifted: {:?} -> {:?}", before, after);
        }

        #[test]
        fn prop_disjoint_pairs_fully_separated(
            offsets in proptest::collection::vec((2.0f32..15.0, -5.0f32..5.0, 5.0f32..12.0, 5.0f32..12.0), 1..5),
        ) {
            // Overlapping pairs placed in cells far enough apart that pairs
            // never interact across cells; one pass must separate each
            let mut bodies = Vec::new();
            for (cell, &(dx, dy, r1, r2)) in offsets.iter().enumerate() {
                let base = cell as f32 * 500.0;
                bodies.push(body(base, 0.0, r1, 0.0, 0.0));
                bodies.push(body(base + dx, dy, r2, 0.0, 0.0));
            }

            let pairs = detect_overlaps(&bodies);
            resolve(&mut bodies, &pairs);

            for &(i, j) in &pairs {
                prop_assert!(overlap_depth(&bodies[i], &bodies[j]) < 1e-3);
            }
        }
    }

    #[test]
    fn test_overlap_chain_reduced_by_one_pass() {
        // Three heavily interpenetrating bodies in a row; one pass cannot
        // zero every pair but must reduce the total
        let mut bodies = vec![
            body(0.0, 0.0, 20.0, 0.0, 0.0),
            body(1.0, 0.0, 20.0, 0.0, 0.0),
            body(2.0, 0.0, 20.0, 0.0, 0.0),
        ];
        let total = |bs: &[Body]| -> f32 {
            overlap_depth(&bs[0], &bs[1])
                + overlap_depth(&bs[0], &bs[2])
                + overlap_depth(&bs[1], &bs[2])
        };
        let before = total(&bodies);

        let pairs = detect_overlaps(&bodies);
        resolve(&mut bodies, &pairs);

        assert!(total(&bodies) < before);
    }
}
