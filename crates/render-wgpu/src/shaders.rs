/// WGSL shader shared by the plane and the text mesh.
///
/// The stripe field lives in world space, so both drawables pick up the
/// same pattern regardless of their own geometry. `time` scrolls the
/// stripes, `rotation` turns the stripe direction, `repeat` sets the
/// frequency and `line_width` the filled fraction of each period.
pub const STRIPE_SHADER: &str = r#"
struct Uniforms {
    view_proj: mat4x4<f32>,
    resolution: vec4<f32>,
    time: f32,
    rotation: f32,
    repeat: f32,
    line_width: f32,
};

@group(0) @binding(0)
var<uniform> uniforms: Uniforms;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
};

struct InstanceInput {
    @location(2) model_0: vec4<f32>,
    @location(3) model_1: vec4<f32>,
    @location(4) model_2: vec4<f32>,
    @location(5) model_3: vec4<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) world_pos: vec3<f32>,
    @location(1) world_normal: vec3<f32>,
};

@vertex
fn vs_main(vertex: VertexInput, instance: InstanceInput) -> VertexOutput {
    let model = mat4x4<f32>(
        instance.model_0,
        instance.model_1,
        instance.model_2,
        instance.model_3,
    );
    let world_pos = model * vec4<f32>(vertex.position, 1.0);
    let world_normal = (model * vec4<f32>(vertex.normal, 0.0)).xyz;

    var out: VertexOutput;
    out.clip_position = uniforms.view_proj * world_pos;
    out.world_pos = world_pos.xyz;
    out.world_normal = normalize(world_normal);
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let dir = vec2<f32>(cos(uniforms.rotation), sin(uniforms.rotation));
    let coord = dot(dir, in.world_pos.xy) * uniforms.repeat * 0.5 + uniforms.time;
    let phase = fract(coord);
    let aa = fwidth(coord);
    let stripe = 1.0 - smoothstep(uniforms.line_width - aa, uniforms.line_width + aa, phase);

    let light_dir = normalize(vec3<f32>(0.3, 0.5, 1.0));
    let lighting = 0.75 + 0.25 * max(dot(normalize(in.world_normal), light_dir), 0.0);

    let paper = vec3<f32>(0.93, 0.93, 0.93);
    let ink = vec3<f32>(0.10, 0.10, 0.12);
    let color = mix(paper, ink, stripe) * lighting;
    return vec4<f32>(color, 1.0);
}
"#;
