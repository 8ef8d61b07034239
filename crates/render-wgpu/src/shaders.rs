/// Uniform block shared by every pass. Must match `FrameUniforms` in gpu.rs.
const UNIFORMS: &str = r#"
struct Uniforms {
    view_proj: mat4x4<f32>,
    inv_sky_view_proj: mat4x4<f32>,
    // xyz: eye position, w: cosine of the flashlight outer cutoff
    eye: vec4<f32>,
    // xyz: camera front, w: cosine of the flashlight inner cutoff
    front: vec4<f32>,
    light_pos: vec4<f32>,
    // xyz: light color, w: 1.0 when the flashlight is on
    light_color: vec4<f32>,
};

@group(0) @binding(0)
var<uniform> uniforms: Uniforms;
"#;

/// Phong-lit instanced cubes with a point light and a camera flashlight.
const LIT_BODY: &str = r#"
struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
};

struct InstanceInput {
    @location(2) model_0: vec4<f32>,
    @location(3) model_1: vec4<f32>,
    @location(4) model_2: vec4<f32>,
    @location(5) model_3: vec4<f32>,
    @location(6) color: vec4<f32>,
    @location(7) params: vec4<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) world_pos: vec3<f32>,
    @location(1) world_normal: vec3<f32>,
    @location(2) color: vec4<f32>,
    @location(3) emissive: f32,
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

    var out: VertexOutput;
    out.clip_position = uniforms.view_proj * world_pos;
    out.world_pos = world_pos.xyz;
    out.world_normal = (model * vec4<f32>(vertex.normal, 0.0)).xyz;
    out.color = instance.color;
    out.emissive = instance.params.x;
    return out;
}

fn attenuation(distance: f32) -> f32 {
    return 1.0 / (1.0 + 0.09 * distance + 0.032 * distance * distance);
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    if (in.emissive > 0.5) {
        return vec4<f32>(uniforms.light_color.rgb, 1.0);
    }

    let normal = normalize(in.world_normal);
    let view_dir = normalize(uniforms.eye.xyz - in.world_pos);
    let light_color = uniforms.light_color.rgb;

    // point light
    let light_dir = normalize(uniforms.light_pos.xyz - in.world_pos);
    let ambient = 0.1 * light_color;
    let diffuse = max(dot(normal, light_dir), 0.0) * light_color;
    let reflected = reflect(-light_dir, normal);
    let specular = 0.5 * pow(max(dot(view_dir, reflected), 0.0), 32.0) * light_color;
    var lighting = ambient + diffuse + specular;

    // flashlight along the camera front
    let to_frag = in.world_pos - uniforms.eye.xyz;
    let frag_dir = normalize(to_frag);
    let theta = dot(frag_dir, normalize(uniforms.front.xyz));
    let epsilon = uniforms.front.w - uniforms.eye.w;
    let cone = clamp((theta - uniforms.eye.w) / epsilon, 0.0, 1.0) * uniforms.light_color.w;
    let spot_diffuse = max(dot(normal, -frag_dir), 0.0);
    let spot_specular = pow(max(dot(view_dir, reflect(frag_dir, normal)), 0.0), 32.0);
    lighting += (spot_diffuse + 0.5 * spot_specular) * cone * attenuation(length(to_frag));

    return vec4<f32>(in.color.rgb * lighting, in.color.a);
}
"#;

/// Grid floor lines.
const GRID_BODY: &str = r#"
struct GridVertex {
    @location(0) position: vec3<f32>,
    @location(1) color: vec4<f32>,
};

struct GridOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) color: vec4<f32>,
};

@vertex
fn vs_grid(vertex: GridVertex) -> GridOutput {
    var out: GridOutput;
    out.clip_position = uniforms.view_proj * vec4<f32>(vertex.position, 1.0);
    out.color = vertex.color;
    return out;
}

@fragment
fn fs_grid(in: GridOutput) -> @location(0) vec4<f32> {
    return in.color;
}
"#;

/// Full-screen gradient sky. Unprojects each pixel through the
/// translation-free view so the sky never moves with the eye.
const SKY_BODY: &str = r#"
struct SkyOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) ndc: vec2<f32>,
};

@vertex
fn vs_sky(@builtin(vertex_index) index: u32) -> SkyOutput {
    // one triangle covering the screen
    let uv = vec2<f32>(f32((index << 1u) & 2u), f32(index & 2u));
    let ndc = uv * 2.0 - 1.0;

    var out: SkyOutput;
    out.clip_position = vec4<f32>(ndc, 1.0, 1.0);
    out.ndc = ndc;
    return out;
}

@fragment
fn fs_sky(in: SkyOutput) -> @location(0) vec4<f32> {
    let far = uniforms.inv_sky_view_proj * vec4<f32>(in.ndc, 1.0, 1.0);
    let dir = normalize(far.xyz / far.w);

    let zenith = vec3<f32>(0.18, 0.32, 0.62);
    let horizon = vec3<f32>(0.62, 0.72, 0.85);
    let ground = vec3<f32>(0.16, 0.15, 0.14);

    var color: vec3<f32>;
    if (dir.y >= 0.0) {
        color = mix(horizon, zenith, pow(dir.y, 0.6));
    } else {
        color = mix(horizon, ground, clamp(-dir.y * 4.0, 0.0, 1.0));
    }
    return vec4<f32>(color, 1.0);
}
"#;

pub fn lit_shader() -> String {
    [UNIFORMS, LIT_BODY].concat()
}

pub fn grid_shader() -> String {
    [UNIFORMS, GRID_BODY].concat()
}

pub fn sky_shader() -> String {
    [UNIFORMS, SKY_BODY].concat()
}
