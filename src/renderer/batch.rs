//! World-space draw batches
//!
//! Turns a [`FrameView`] plus the shape table into ready-to-upload vertex
//! meshes, one per draw call, in back-to-front order.

use glam::Vec2;

use super::shape_table::ShapeTable;
use super::shapes;
use super::vertex::{Vertex, as_bytes, colors};
use super::view::FrameView;

/// How a mesh's vertices are assembled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    TriangleList,
    TriangleFan,
    LineLoop,
}

/// One draw call
#[derive(Debug, Clone)]
pub struct Mesh {
    pub primitive: Primitive,
    pub vertices: Vec<Vertex>,
}

impl Mesh {
    fn new(primitive: Primitive, vertices: Vec<Vertex>) -> Self {
        Self {
            primitive,
            vertices,
        }
    }

    /// Raw vertex bytes for upload
    pub fn bytes(&self) -> &[u8] {
        as_bytes(&self.vertices)
    }
}

/// Everything drawn in one frame
#[derive(Debug, Clone)]
pub struct FrameBatch {
    pub clear_color: [f32; 4],
    pub meshes: Vec<Mesh>,
}

impl FrameBatch {
    /// Build the frame: asteroids, then bullets, then the ship and its flame.
    ///
    /// Asteroids whose shape has not been registered are skipped.
    pub fn build(view: &FrameView, table: &ShapeTable) -> Self {
        let mut meshes = Vec::with_capacity(view.asteroids.len() * 2 + view.bullets.len() + 3);

        for asteroid in &view.asteroids {
            let Some((fill, outline)) = table.vertices(asteroid.shape, asteroid.color.rgb()) else {
                log::warn!("No shape {} for asteroid at {:?}", asteroid.shape, asteroid.position);
                continue;
            };
            let to_world = |v| place(v, asteroid.position, asteroid.rotation, asteroid.scale);
            meshes.push(Mesh::new(Primitive::TriangleFan, to_world(fill)));
            meshes.push(Mesh::new(Primitive::LineLoop, to_world(outline)));
        }

        for bullet in &view.bullets {
            meshes.push(Mesh::new(
                Primitive::TriangleList,
                shapes::bullet(bullet.position, bullet.scale),
            ));
        }

        if view.ship_visible() {
            let ship = &view.ship;
            if view.flame_visible() {
                let flame = place(
                    shapes::thrust_flame(),
                    ship.position,
                    ship.rotation,
                    ship.scale * shapes::THRUST_SCALE,
                );
                meshes.push(Mesh::new(Primitive::TriangleFan, flame));
            }
            let to_world = |v| place(v, ship.position, ship.rotation, ship.scale);
            meshes.push(Mesh::new(Primitive::TriangleFan, to_world(shapes::ship_fill())));
            meshes.push(Mesh::new(Primitive::LineLoop, to_world(shapes::ship_outline())));
        }

        Self {
            clear_color: colors::BACKGROUND,
            meshes,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.meshes.iter().map(|m| m.vertices.len()).sum()
    }

    /// Total upload size in bytes
    pub fn byte_len(&self) -> usize {
        self.meshes.iter().map(|m| m.bytes().len()).sum()
    }
}

/// Scale, rotate, then translate model-space vertices into world space
fn place(vertices: Vec<Vertex>, position: Vec2, rotation: f32, scale: f32) -> Vec<Vertex> {
    let turn = Vec2::from_angle(rotation);
    vertices
        .into_iter()
        .map(|v| {
            let p = turn.rotate(Vec2::from(v.position) * scale) + position;
            Vertex::at(p, v.color)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{AsteroidSize, GameState};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn frame(state: &mut GameState) -> (FrameView, ShapeTable) {
        let mut table = ShapeTable::new();
        table.apply(&state.drain_events());
        (FrameView::capture(state), table)
    }

    #[test]
    fn test_place_rotates_about_origin() {
        let nose = vec![Vertex::new(0.0, 1.0, colors::SHIP_FILL)];
        // Quarter turn left: +Y nose points to -X
        let placed = place(nose, Vec2::new(0.5, 0.5), std::f32::consts::FRAC_PI_2, 0.1);
        assert!((placed[0].position[0] - 0.4).abs() < 1e-6);
        assert!((placed[0].position[1] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_full_frame() {
        let mut state = GameState::default();
        let mut rng = Pcg32::seed_from_u64(8);
        state.spawn_asteroid(AsteroidSize::Large, Vec2::new(0.5, 0.5), Vec2::ZERO, &mut rng);
        crate::sim::control::try_fire(&mut state);
        state.thrusting = true;

        let (view, table) = frame(&mut state);
        let batch = FrameBatch::build(&view, &table);

        // asteroid fill + outline, bullet, flame, ship fill + outline
        assert_eq!(batch.meshes.len(), 6);
        assert_eq!(batch.meshes[0].vertices.len(), 22);
        assert_eq!(batch.meshes[1].vertices.len(), 21);
        assert_eq!(batch.meshes[2].primitive, Primitive::TriangleList);
        assert_eq!(batch.clear_color, colors::BACKGROUND);
        assert_eq!(
            batch.byte_len(),
            batch.vertex_count() * std::mem::size_of::<Vertex>()
        );

        // Fan center sits on the asteroid position
        assert_eq!(batch.meshes[0].vertices[0].position, [0.5, 0.5]);
    }

    #[test]
    fn test_game_over_hides_ship() {
        let mut state = GameState::default();
        state.thrusting = true;
        state.end_game();
        let (view, table) = frame(&mut state);
        assert!(FrameBatch::build(&view, &table).meshes.is_empty());
    }

    #[test]
    fn test_unknown_shape_is_skipped() {
        let mut state = GameState::default();
        let mut rng = Pcg32::seed_from_u64(9);
        state.spawn_asteroid(AsteroidSize::Small, Vec2::ZERO, Vec2::ZERO, &mut rng);
        state.drain_events();
        state.end_game();

        let view = FrameView::capture(&state);
        let batch = FrameBatch::build(&view, &ShapeTable::new());
        assert!(batch.meshes.is_empty());
    }
}
