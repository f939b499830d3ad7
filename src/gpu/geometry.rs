//! CPU-side geometry assembly for the render passes.
//!
//! The scene is small enough (a hundred billboards, a few hundred line
//! vertices) that everything is rebuilt on the CPU and re-uploaded each
//! frame; there is no GPU-side simulation state.

use bytemuck::{Pod, Zeroable};

use crate::scene::{Backdrop, FrameInput};

/// Per-instance data for a particle billboard.
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct ParticleInstance {
    pub center: [f32; 2],
    pub radius: f32,
    pub opacity: f32,
}

/// One vertex of the line list shared by the grid and the links.
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct LineVertex {
    pub position: [f32; 2],
    pub alpha: f32,
}

/// Per-instance data for the cursor glow quad.
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct GlowInstance {
    pub center: [f32; 2],
}

/// One frame's line list: grid vertices first, then the connection links,
/// so the two ranges can be drawn on either side of the particle pass.
pub struct LineGeometry {
    pub vertices: Vec<LineVertex>,
    /// Number of leading vertices that belong to the grid.
    pub grid_vertices: u32,
}

/// Billboard instances for the current particle pool.
pub fn particle_instances(scene: &Backdrop) -> Vec<ParticleInstance> {
    scene
        .field()
        .particles()
        .iter()
        .map(|p| ParticleInstance {
            center: p.position.to_array(),
            radius: p.radius,
            opacity: p.opacity,
        })
        .collect()
}

/// Line vertices for the current frame.
pub fn line_vertices(scene: &Backdrop, input: &FrameInput) -> LineGeometry {
    let config = &scene.config;
    let viewport = input.viewport;
    let grid = scene.grid().lines(viewport, input.scroll, config);

    let mut vertices = Vec::with_capacity(2 * (grid.verticals.len() + grid.horizontals.len()));

    for &x in &grid.verticals {
        vertices.push(LineVertex {
            position: [x, 0.0],
            alpha: config.grid_alpha,
        });
        vertices.push(LineVertex {
            position: [x, viewport.y],
            alpha: config.grid_alpha,
        });
    }
    for &y in &grid.horizontals {
        vertices.push(LineVertex {
            position: [0.0, y],
            alpha: config.grid_alpha,
        });
        vertices.push(LineVertex {
            position: [viewport.x, y],
            alpha: config.grid_alpha,
        });
    }

    let grid_vertices = vertices.len() as u32;

    for link in scene.field().links(config) {
        vertices.push(LineVertex {
            position: link.a.to_array(),
            alpha: link.alpha,
        });
        vertices.push(LineVertex {
            position: link.b.to_array(),
            alpha: link.alpha,
        });
    }

    LineGeometry {
        vertices,
        grid_vertices,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BackdropConfig;
    use glam::Vec2;

    fn frame_input(viewport: Vec2) -> FrameInput {
        FrameInput {
            pointer: Vec2::ZERO,
            scroll: 0.0,
            viewport,
        }
    }

    #[test]
    fn test_particle_instances_match_pool() {
        let scene = Backdrop::with_seed(BackdropConfig::default(), 11);
        let instances = particle_instances(&scene);

        assert_eq!(instances.len(), scene.field().len());
        for (instance, particle) in instances.iter().zip(scene.field().particles()) {
            assert_eq!(instance.center, particle.position.to_array());
            assert_eq!(instance.opacity, particle.opacity);
        }
    }

    #[test]
    fn test_line_vertices_pair_up() {
        let scene = Backdrop::with_seed(BackdropConfig::default(), 11);
        let input = frame_input(scene.config.viewport);
        let geometry = line_vertices(&scene, &input);

        assert!(geometry.vertices.len() % 2 == 0);
        assert!(geometry.grid_vertices % 2 == 0);
        assert!(geometry.grid_vertices > 0);
    }

    #[test]
    fn test_grid_vertices_precede_links() {
        let scene = Backdrop::with_seed(BackdropConfig::default(), 11);
        let input = frame_input(scene.config.viewport);
        let geometry = line_vertices(&scene, &input);

        for vertex in &geometry.vertices[..geometry.grid_vertices as usize] {
            assert_eq!(vertex.alpha, scene.config.grid_alpha);
        }
        let link_count = scene.field().links(&scene.config).len();
        assert_eq!(
            geometry.vertices.len(),
            geometry.grid_vertices as usize + 2 * link_count
        );
    }
}
