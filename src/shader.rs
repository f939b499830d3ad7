//! WGSL shader sources for the render passes.
//!
//! All passes share one uniform block (viewport resolution plus accent
//! color) and take their geometry in viewport pixel coordinates, converted
//! to clip space in the vertex stage. Shader validity is covered by the
//! naga tests in `tests/backdrop_tests.rs`.

/// Instanced particle billboards: a solid core disc plus a radial glow
/// fading out at three radii.
pub const PARTICLE_SOURCE: &str = r#"
struct Uniforms {
    resolution: vec2<f32>,
    accent: vec3<f32>,
};

@group(0) @binding(0)
var<uniform> uniforms: Uniforms;

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) uv: vec2<f32>,
    @location(1) opacity: f32,
};

@vertex
fn vs_main(
    @builtin(vertex_index) vertex_index: u32,
    @location(0) center: vec2<f32>,
    @location(1) radius: f32,
    @location(2) opacity: f32,
) -> VertexOutput {
    var quad_vertices = array<vec2<f32>, 6>(
        vec2<f32>(-1.0, -1.0),
        vec2<f32>( 1.0, -1.0),
        vec2<f32>(-1.0,  1.0),
        vec2<f32>(-1.0,  1.0),
        vec2<f32>( 1.0, -1.0),
        vec2<f32>( 1.0,  1.0),
    );

    let quad_pos = quad_vertices[vertex_index];
    // The quad covers the glow extent, three radii out from the center.
    let pixel = center + quad_pos * radius * 3.0;
    let ndc = vec2<f32>(
        pixel.x / uniforms.resolution.x * 2.0 - 1.0,
        1.0 - pixel.y / uniforms.resolution.y * 2.0,
    );

    var out: VertexOutput;
    out.clip_position = vec4<f32>(ndc, 0.0, 1.0);
    out.uv = quad_pos;
    out.opacity = opacity;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    // d == 1.0 at three radii; the core disc ends at d == 1/3.
    let d = length(in.uv);
    if d > 1.0 {
        discard;
    }
    let core = in.opacity * (1.0 - smoothstep(0.30, 0.37, d));
    let glow = in.opacity * 0.5 * (1.0 - d);
    let alpha = max(core, glow);
    return vec4<f32>(uniforms.accent, alpha);
}
"#;

/// Line list with per-vertex alpha, used for both the grid overlay and the
/// particle connection links.
pub const LINE_SOURCE: &str = r#"
struct Uniforms {
    resolution: vec2<f32>,
    accent: vec3<f32>,
};

@group(0) @binding(0)
var<uniform> uniforms: Uniforms;

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) alpha: f32,
};

@vertex
fn vs_main(
    @location(0) position: vec2<f32>,
    @location(1) alpha: f32,
) -> VertexOutput {
    let ndc = vec2<f32>(
        position.x / uniforms.resolution.x * 2.0 - 1.0,
        1.0 - position.y / uniforms.resolution.y * 2.0,
    );

    var out: VertexOutput;
    out.clip_position = vec4<f32>(ndc, 0.0, 1.0);
    out.alpha = alpha;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    return vec4<f32>(uniforms.accent, in.alpha);
}
"#;

/// The cursor glow: one quad with a radial fade reaching zero at 70% of
/// its footprint, peaking at a tenth of full alpha.
pub const GLOW_SOURCE: &str = r#"
struct Uniforms {
    resolution: vec2<f32>,
    accent: vec3<f32>,
};

@group(0) @binding(0)
var<uniform> uniforms: Uniforms;

const GLOW_RADIUS: f32 = 150.0;
const GLOW_PEAK: f32 = 0.1;

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) uv: vec2<f32>,
};

@vertex
fn vs_main(
    @builtin(vertex_index) vertex_index: u32,
    @location(0) center: vec2<f32>,
) -> VertexOutput {
    var quad_vertices = array<vec2<f32>, 6>(
        vec2<f32>(-1.0, -1.0),
        vec2<f32>( 1.0, -1.0),
        vec2<f32>(-1.0,  1.0),
        vec2<f32>(-1.0,  1.0),
        vec2<f32>( 1.0, -1.0),
        vec2<f32>( 1.0,  1.0),
    );

    let quad_pos = quad_vertices[vertex_index];
    let pixel = center + quad_pos * GLOW_RADIUS;
    let ndc = vec2<f32>(
        pixel.x / uniforms.resolution.x * 2.0 - 1.0,
        1.0 - pixel.y / uniforms.resolution.y * 2.0,
    );

    var out: VertexOutput;
    out.clip_position = vec4<f32>(ndc, 0.0, 1.0);
    out.uv = quad_pos;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let d = length(in.uv);
    let alpha = GLOW_PEAK * max(0.0, 1.0 - d / 0.7);
    return vec4<f32>(uniforms.accent, alpha);
}
"#;
