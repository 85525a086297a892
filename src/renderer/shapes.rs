//! Shape generation for 2D primitives

use glam::Vec2;

use super::vertex::{Vertex, colors};
use crate::sim::{Particle, Simulation, box_center, box_corners, box_half_size};

/// Geometry for one frame, split by primitive topology
#[derive(Debug, Clone, Default)]
pub struct FrameVertices {
    /// Box outline as a line list (pairs of endpoints)
    pub outline: Vec<Vertex>,
    /// Particle squares as a triangle list
    pub particles: Vec<Vertex>,
}

impl FrameVertices {
    /// Split into draw calls, each with the pipeline state it needs
    pub fn batches(&self) -> [DrawBatch<'_>; 2] {
        [
            DrawBatch {
                topology: wgpu::PrimitiveTopology::LineList,
                layout: Vertex::desc(),
                vertices: &self.outline,
            },
            DrawBatch {
                topology: wgpu::PrimitiveTopology::TriangleList,
                layout: Vertex::desc(),
                vertices: &self.particles,
            },
        ]
    }
}

/// One draw call: vertices plus the topology and buffer layout to draw them with
#[derive(Debug, Clone)]
pub struct DrawBatch<'a> {
    pub topology: wgpu::PrimitiveTopology,
    pub layout: wgpu::VertexBufferLayout<'static>,
    pub vertices: &'a [Vertex],
}

impl DrawBatch<'_> {
    /// Raw bytes ready for a vertex buffer upload
    pub fn bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.vertices)
    }
}

/// Generate the box outline as a closed loop of line segments
pub fn box_outline(center: Vec2, half: f32, angle: f32, color: [f32; 4]) -> Vec<Vertex> {
    let corners = box_corners(center, half, angle);
    let mut vertices = Vec::with_capacity(corners.len() * 2);

    for i in 0..corners.len() {
        let a = corners[i];
        let b = corners[(i + 1) % corners.len()];
        vertices.push(Vertex::new(a.x, a.y, color));
        vertices.push(Vertex::new(b.x, b.y, color));
    }

    vertices
}

/// Generate a filled axis-aligned square covering a particle's bounds
pub fn particle_square(particle: &Particle, color: [f32; 4]) -> [Vertex; 6] {
    let min = particle.pos - Vec2::splat(particle.radius);
    let max = particle.pos + Vec2::splat(particle.radius);

    [
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

/// Generate all geometry needed to draw the simulation
pub fn frame_vertices(sim: &Simulation) -> FrameVertices {
    let center = box_center(sim.viewport);
    let half = box_half_size(sim.viewport);

    let outline = box_outline(center, half, sim.box_state.angle, colors::BOX_OUTLINE);

    let mut particles = Vec::with_capacity(sim.particles.len() * 6);
    for particle in &sim.particles {
        particles.extend_from_slice(&particle_square(particle, colors::PARTICLE));
    }

    FrameVertices { outline, particles }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_outline_is_closed() {
        let outline = box_outline(Vec2::new(50.0, 50.0), 10.0, 0.3, colors::BOX_OUTLINE);
        assert_eq!(outline.len(), 8);
        assert_eq!(outline[0].position, outline[7].position);
    }

    #[test]
    fn test_outline_quarter_turn_keeps_extent() {
        let outline = box_outline(Vec2::ZERO, 10.0, FRAC_PI_2, colors::BOX_OUTLINE);
        for v in &outline {
            assert!((v.position[0].abs() - 10.0).abs() < 1e-4);
            assert!((v.position[1].abs() - 10.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_particle_square_bounds() {
        let p = Particle::new(Vec2::new(100.0, 40.0), Vec2::ZERO);
        let quad = particle_square(&p, colors::PARTICLE);
        assert_eq!(quad[0].position, [95.0, 35.0]);
        assert_eq!(quad[5].position, [105.0, 45.0]);
    }

    #[test]
    fn test_batches_carry_topology_and_layout() {
        let sim = Simulation::new(5);
        let frame = frame_vertices(&sim);
        let [outline, particles] = frame.batches();

        assert_eq!(outline.topology, wgpu::PrimitiveTopology::LineList);
        assert_eq!(particles.topology, wgpu::PrimitiveTopology::TriangleList);
        // Line lists need pairs, triangle lists need triples
        assert_eq!(outline.vertices.len() % 2, 0);
        assert_eq!(particles.vertices.len() % 3, 0);

        let stride = particles.layout.array_stride as usize;
        assert_eq!(stride, std::mem::size_of::<Vertex>());
        assert_eq!(particles.bytes().len(), particles.vertices.len() * stride);
    }

    #[test]
    fn test_frame_vertices_counts() {
        let sim = Simulation::new(5);
        let frame = frame_vertices(&sim);
        assert_eq!(frame.outline.len(), 8);
        assert_eq!(frame.particles.len(), sim.particles.len() * 6);
    }
}
