//! Procedural asteroid outlines
//!
//! Each asteroid gets an irregular polygon sampled once at spawn. The radius at
//! every sample angle is perturbed by up to ±20% so no two rocks look alike,
//! while the shape stays fixed for the asteroid's lifetime.

use glam::Vec2;
use std::f32::consts::TAU;

use super::random::UniformSource;
use crate::consts::OUTLINE_JITTER;

/// Fewest segments a shape may have; keeps silhouettes recognizably round
pub const MIN_SEGMENTS: usize = 20;

/// Jittered radius for one boundary sample
fn sample_radius<R: UniformSource + ?Sized>(radius: f32, rng: &mut R) -> f32 {
    radius * (1.0 + rng.centered(OUTLINE_JITTER))
}

fn boundary_point(i: usize, segments: usize, r: f32) -> Vec2 {
    let angle = i as f32 / segments as f32 * TAU;
    Vec2::from_angle(angle) * r
}

/// Closed line-loop outline: `segments` boundary points, no center vertex.
///
/// `segments` is raised to `min_segments` (never below [`MIN_SEGMENTS`]).
pub fn outline<R: UniformSource + ?Sized>(
    segments: usize,
    min_segments: usize,
    radius: f32,
    rng: &mut R,
) -> Vec<Vec2> {
    let segments = segments.max(min_segments).max(MIN_SEGMENTS);
    (0..segments)
        .map(|i| boundary_point(i, segments, sample_radius(radius, rng)))
        .collect()
}

/// Triangle-fan outline: the origin, then `segments + 1` boundary points.
///
/// The final boundary point repeats the first so the fan closes without a
/// seam. Drawing indices `1..` as a line loop yields the outline.
pub fn filled_fan<R: UniformSource + ?Sized>(
    segments: usize,
    min_segments: usize,
    radius: f32,
    rng: &mut R,
) -> Vec<Vec2> {
    let ring = outline(segments, min_segments, radius, rng);
    let mut vertices = Vec::with_capacity(ring.len() + 2);
    vertices.push(Vec2::ZERO);
    vertices.extend_from_slice(&ring);
    if let Some(&first) = ring.first() {
        vertices.push(first);
    }
    vertices
}
