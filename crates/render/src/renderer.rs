use std::fmt::Write;

use eyeline_scene::Scene;

use crate::view::RenderView;

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// The renderer reads the scene and a view snapshot, then produces output.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame of `scene` as seen from `view`.
    fn render(&self, scene: &Scene, view: &RenderView) -> Self::Output;
}

/// Human-readable frame dump, used by the CLI and in tests.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, scene: &Scene, view: &RenderView) -> String {
        let mut out = String::new();
        let vp = view.view_projection();
        let _ = writeln!(out, "=== Frame (objects={}) ===", scene.object_count());
        let _ = writeln!(
            out,
            "Camera: eye=({:.2}, {:.2}, {:.2}) front=({:.3}, {:.3}, {:.3}) fov={:.1} aspect={:.3}",
            view.eye.x,
            view.eye.y,
            view.eye.z,
            view.front.x,
            view.front.y,
            view.front.z,
            view.fov_degrees,
            view.aspect
        );
        let l = scene.light.position;
        let _ = writeln!(out, "Light: pos=({:.2}, {:.2}, {:.2})", l.x, l.y, l.z);

        let mut visible = 0;
        for (i, object) in scene.objects.iter().enumerate() {
            let p = object.transform.position;
            let clip = vp * p.extend(1.0);
            // inside the frustum when x, y in [-w, w] and z in [0, w]
            let in_view = clip.w > 0.0
                && clip.x.abs() <= clip.w
                && clip.y.abs() <= clip.w
                && clip.z >= 0.0
                && clip.z <= clip.w;
            if in_view {
                visible += 1;
            }
            let distance = p.distance(view.eye);
            let _ = writeln!(
                out,
                "  [{i:>2}] pos=({:.2}, {:.2}, {:.2}) dist={distance:.2} {}",
                p.x,
                p.y,
                p.z,
                if in_view { "visible" } else { "culled" }
            );
        }
        let _ = writeln!(out, "Visible: {visible}/{}", scene.object_count());
        tracing::debug!(visible, total = scene.object_count(), "debug frame rendered");
        out
    }
}
