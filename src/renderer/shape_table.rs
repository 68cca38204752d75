//! Renderer-owned asteroid shapes
//!
//! The simulation only keeps a [`ShapeHandle`](crate::sim::ShapeHandle) per
//! asteroid. Point data arrives through [`GameEvent::ShapeCreated`] and is
//! dropped on [`GameEvent::ShapeReleased`]; this table is the single owner.

use std::collections::HashMap;

use glam::Vec2;

use super::shapes;
use super::vertex::Vertex;
use crate::sim::{GameEvent, ShapeId};

/// Side table from shape id to triangle-fan points
#[derive(Debug, Default)]
pub struct ShapeTable {
    shapes: HashMap<ShapeId, Vec<Vec2>>,
}

impl ShapeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume simulation events, registering and freeing shapes.
    /// Events that do not concern shapes are ignored.
    pub fn apply(&mut self, events: &[GameEvent]) {
        for event in events {
            match event {
                GameEvent::ShapeCreated { shape, vertices } => {
                    if self.shapes.insert(*shape, vertices.clone()).is_some() {
                        log::warn!("Shape {} registered twice", shape);
                    }
                }
                GameEvent::ShapeReleased { shape } => {
                    if self.shapes.remove(shape).is_none() {
                        log::warn!("Released unknown shape {}", shape);
                    }
                }
                _ => {}
            }
        }
    }

    pub fn get(&self, shape: ShapeId) -> Option<&[Vec2]> {
        self.shapes.get(&shape).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Fill and outline vertices for a shape in the given palette color
    pub fn vertices(&self, shape: ShapeId, rgb: [f32; 3]) -> Option<(Vec<Vertex>, Vec<Vertex>)> {
        let fan = self.get(shape)?;
        Some((shapes::asteroid_fill(fan, rgb), shapes::asteroid_outline(fan, rgb)))
    }
}
