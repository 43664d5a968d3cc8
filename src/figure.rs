//! Output geometry produced by the turtle interpreter.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A single vertex: a 2D point plus an opaque decoration attribute.
///
/// The attribute (typically a color) is forwarded verbatim from
/// [`TurtleConfig`](crate::interpreter::TurtleConfig) and is constant across a
/// run; the core never inspects it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vertex<A> {
    pub position: Vec2,
    pub attribute: A,
}

/// An ordered sequence of vertices where each consecutive pair is one drawn
/// line segment.
///
/// The vertex count is always even. Emission order matches the order in which
/// draw symbols were encountered, so a renderer consuming this as independent
/// line primitives reproduces the figure deterministically.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Figure<A> {
    vertices: Vec<Vertex<A>>,
}

impl<A> Default for Figure<A> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }
}

impl<A> Figure<A> {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push_segment(&mut self, from: Vertex<A>, to: Vertex<A>) {
        self.vertices.push(from);
        self.vertices.push(to);
    }

    /// All vertices in emission order. Length is always even.
    pub fn vertices(&self) -> &[Vertex<A>] {
        &self.vertices
    }

    /// Iterates over the drawn segments as `(from, to)` vertex pairs.
    pub fn segments(&self) -> impl Iterator<Item = (&Vertex<A>, &Vertex<A>)> {
        self.vertices.chunks_exact(2).map(|pair| (&pair[0], &pair[1]))
    }

    pub fn segment_count(&self) -> usize {
        self.vertices.len() / 2
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Consumes the figure, yielding the raw vertex buffer for upload or
    /// further processing by the host.
    pub fn into_vertices(self) -> Vec<Vertex<A>> {
        self.vertices
    }
}
