//! Integration tests for the backdrop simulation.
//!
//! These drive the scene through [`Backdrop::tick`] with synthetic inputs,
//! the same entry point the windowed driver uses, and check the invariants
//! the simulation promises: positions stay clamped, velocities stay finite,
//! damping bleeds energy, thresholds gate connections, and the platform
//! panel produces its exact display strings.

use glam::Vec2;

use enzo_backdrop::config::BackdropConfig;
use enzo_backdrop::field::ParticleField;
use enzo_backdrop::particle::Particle;
use enzo_backdrop::platform::{Platform, PlatformPanel};
use enzo_backdrop::scene::{Backdrop, FrameInput};
use enzo_backdrop::shader;

const DT: f32 = 1.0 / 60.0;

fn input(pointer: Vec2, viewport: Vec2) -> FrameInput {
    FrameInput {
        pointer,
        scroll: 0.0,
        viewport,
    }
}

fn still_particle(x: f32, y: f32) -> Particle {
    Particle {
        position: Vec2::new(x, y),
        velocity: Vec2::ZERO,
        radius: 2.0,
        opacity: 0.5,
    }
}

// ============================================================================
// Clamp and NaN Invariants
// ============================================================================

#[test]
fn test_positions_stay_clamped_under_pointer_pressure() {
    let config = BackdropConfig::default();
    let viewport = config.viewport;
    let mut scene = Backdrop::with_seed(config, 42);

    for frame in 0..2_000 {
        // Orbit the pointer so every region of the viewport sees repulsion.
        let angle = frame as f32 * 0.05;
        let pointer = Vec2::new(
            viewport.x * 0.5 + angle.cos() * viewport.x * 0.4,
            viewport.y * 0.5 + angle.sin() * viewport.y * 0.4,
        );
        scene.tick(&input(pointer, viewport), DT);

        for p in scene.field().particles() {
            assert!(p.position.x >= 0.0 && p.position.x <= viewport.x);
            assert!(p.position.y >= 0.0 && p.position.y <= viewport.y);
        }
    }
}

#[test]
fn test_pointer_on_particle_never_produces_nan() {
    let config = BackdropConfig::default();
    let viewport = config.viewport;
    let mut scene = Backdrop::with_seed(config, 7);

    // Park the pointer exactly on each particle in turn; the repulsion
    // normalizes by distance, so this is the degenerate case.
    for i in 0..scene.field().len() {
        let pointer = scene.field().particles()[i].position;
        scene.tick(&input(pointer, viewport), DT);

        for p in scene.field().particles() {
            assert!(p.velocity.is_finite());
            assert!(p.position.is_finite());
        }
    }
}

#[test]
fn test_resize_shrink_recovers_via_clamp() {
    let config = BackdropConfig::default();
    let mut scene = Backdrop::with_seed(config, 13);

    // The viewport shrinks out from under the pool; the next tick clamps
    // every stale position back into the new bounds.
    let small = Vec2::new(320.0, 240.0);
    scene.tick(&input(Vec2::ZERO, small), DT);

    for p in scene.field().particles() {
        assert!(p.position.x >= 0.0 && p.position.x <= small.x);
        assert!(p.position.y >= 0.0 && p.position.y <= small.y);
    }
}

// ============================================================================
// Physics
// ============================================================================

#[test]
fn test_velocity_decays_without_repulsion() {
    let config = BackdropConfig::default();
    let viewport = config.viewport;
    let far_pointer = Vec2::new(-10_000.0, -10_000.0);

    let mut p = Particle {
        position: viewport * 0.5,
        velocity: Vec2::new(0.25, -0.2),
        radius: 2.0,
        opacity: 0.5,
    };

    let mut last = p.velocity.length();
    for _ in 0..200 {
        p.step(far_pointer, viewport, &config);
        let speed = p.velocity.length();
        assert!(speed < last, "speed should strictly decrease while nonzero");
        last = speed;
    }
}

#[test]
fn test_left_wall_bounce_reverses_x_velocity() {
    let config = BackdropConfig::default();
    let viewport = config.viewport;
    let far_pointer = Vec2::new(10_000.0, 10_000.0);

    let mut p = Particle {
        position: Vec2::new(0.3, 300.0),
        velocity: Vec2::new(-1.0, 0.0),
        radius: 2.0,
        opacity: 0.5,
    };

    p.step(far_pointer, viewport, &config);

    assert!(p.velocity.x > 0.0);
    assert!(p.position.x >= 0.0);
}

#[test]
fn test_repulsion_moves_particles_away_from_pointer() {
    let config = BackdropConfig::default();
    let viewport = config.viewport;
    let pointer = viewport * 0.5;

    let mut p = Particle {
        position: pointer + Vec2::new(50.0, 0.0),
        velocity: Vec2::ZERO,
        radius: 2.0,
        opacity: 0.5,
    };

    let before = p.position.distance(pointer);
    for _ in 0..10 {
        p.step(pointer, viewport, &config);
    }
    assert!(p.position.distance(pointer) > before);
}

// ============================================================================
// Connections
// ============================================================================

#[test]
fn test_connection_threshold_is_exclusive_at_120() {
    let config = BackdropConfig::default();

    let at_threshold = ParticleField::from_particles(vec![
        still_particle(100.0, 100.0),
        still_particle(220.0, 100.0),
    ]);
    assert!(at_threshold.links(&config).is_empty());

    let inside = ParticleField::from_particles(vec![
        still_particle(100.0, 100.0),
        still_particle(219.9, 100.0),
    ]);
    assert_eq!(inside.links(&config).len(), 1);
}

#[test]
fn test_connection_alpha_decreases_toward_threshold() {
    let config = BackdropConfig::default();

    let mut last_alpha = f32::INFINITY;
    for gap in [10.0, 40.0, 80.0, 110.0, 119.0] {
        let field = ParticleField::from_particles(vec![
            still_particle(0.0, 0.0),
            still_particle(gap, 0.0),
        ]);
        let links = field.links(&config);
        assert_eq!(links.len(), 1);
        assert!(links[0].alpha < last_alpha);
        assert!(links[0].alpha > 0.0);
        last_alpha = links[0].alpha;
    }
}

// ============================================================================
// Viewport Classes
// ============================================================================

#[test]
fn test_particle_count_boundary_at_mobile_threshold() {
    let compact = BackdropConfig::default().with_viewport(Vec2::new(768.0, 1024.0));
    let scene = Backdrop::with_seed(compact, 1);
    assert_eq!(scene.field().len(), 30);

    let wide = BackdropConfig::default().with_viewport(Vec2::new(769.0, 1024.0));
    let scene = Backdrop::with_seed(wide, 1);
    assert_eq!(scene.field().len(), 100);
}

#[test]
fn test_grid_cell_follows_viewport_class() {
    let compact = BackdropConfig::default().with_viewport(Vec2::new(480.0, 800.0));
    assert_eq!(compact.grid_cell(), 60.0);

    let wide = BackdropConfig::default().with_viewport(Vec2::new(1920.0, 1080.0));
    assert_eq!(wide.grid_cell(), 40.0);
}

// ============================================================================
// Grid and Scroll
// ============================================================================

#[test]
fn test_grid_offset_never_grows_unbounded() {
    let config = BackdropConfig::default();
    let viewport = config.viewport;
    let cell = config.grid_cell();
    let mut scene = Backdrop::with_seed(config, 2);

    // An hour of frames at 60 Hz.
    for _ in 0..216_000 {
        scene.tick(&input(Vec2::ZERO, viewport), DT);
    }
    assert!(scene.grid().offset() >= 0.0 && scene.grid().offset() < cell);
}

#[test]
fn test_scroll_parallax_shifts_horizontal_lines() {
    let config = BackdropConfig::default();
    let viewport = config.viewport;
    let scene = Backdrop::with_seed(config, 2);

    let still = scene.grid().lines(viewport, 0.0, &scene.config);
    let scrolled = scene.grid().lines(viewport, 200.0, &scene.config);

    assert_eq!(still.verticals, scrolled.verticals);
    for (a, b) in still.horizontals.iter().zip(&scrolled.horizontals) {
        assert!((a - b - 200.0 * scene.config.parallax).abs() < 1e-3);
    }
}

// ============================================================================
// Platform Panel
// ============================================================================

#[test]
fn test_android_selection_scenario() {
    let mut panel = PlatformPanel::new();
    panel.select(Platform::Android);

    let info = panel.info();
    assert_eq!(info.name, "ENZO ANDROID");
    assert_eq!(info.version, "N/A");
    assert_eq!(info.status, "NOT RELEASED");
    assert_eq!(info.action, "DOWNLOAD FOR ANDROID");
}

#[test]
fn test_selection_is_sticky() {
    let mut panel = PlatformPanel::new();
    panel.select(Platform::MacOs);
    panel.begin_download();
    assert_eq!(panel.selected(), Platform::MacOs);
    assert_eq!(panel.info().action, "DOWNLOAD FOR MACOS");
}

// ============================================================================
// WGSL Validation
// ============================================================================

/// Validates a shader source with naga, the same front end wgpu uses.
fn validate_wgsl(source: &str) -> Result<(), String> {
    let module = naga::front::wgsl::parse_str(source)
        .map_err(|e| format!("WGSL parse error: {:?}", e))?;

    let mut validator = naga::valid::Validator::new(
        naga::valid::ValidationFlags::all(),
        naga::valid::Capabilities::all(),
    );
    validator
        .validate(&module)
        .map_err(|e| format!("WGSL validation error: {:?}", e))?;

    Ok(())
}

#[test]
fn test_particle_shader_validates() {
    validate_wgsl(shader::PARTICLE_SOURCE).expect("particle shader should be valid");
}

#[test]
fn test_line_shader_validates() {
    validate_wgsl(shader::LINE_SOURCE).expect("line shader should be valid");
}

#[test]
fn test_glow_shader_validates() {
    validate_wgsl(shader::GLOW_SOURCE).expect("glow shader should be valid");
}
