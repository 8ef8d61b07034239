use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use eyeline_camera::{Camera, CameraConfig, CameraMovement, Projection, aspect_ratio};
use eyeline_input::{Action, InputState};
use eyeline_render::RenderView;
use eyeline_render_wgpu::WgpuRenderer;
use eyeline_scene::Scene;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{DeviceEvent, ElementState, KeyEvent, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{CursorGrabMode, Window, WindowId};

/// Longest frame step fed to the camera, so a stall does not teleport it.
const MAX_FRAME_DT: f32 = 0.1;
const TITLE_INTERVAL: Duration = Duration::from_millis(250);
/// Pixel scroll deltas per wheel line.
const PIXELS_PER_LINE: f32 = 20.0;

#[derive(Parser)]
#[command(name = "eyeline-desktop", about = "Fly a first-person camera through a lit scene")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Camera config file (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Initial window width
    #[arg(long, default_value = "800")]
    width: u32,

    /// Initial window height
    #[arg(long, default_value = "600")]
    height: u32,
}

/// Map a key transition to an input action.
fn key_action(key: KeyCode, pressed: bool) -> Action {
    let movement = match key {
        KeyCode::KeyW | KeyCode::ArrowUp => Some(CameraMovement::Forward),
        KeyCode::KeyS | KeyCode::ArrowDown => Some(CameraMovement::Backward),
        KeyCode::KeyA | KeyCode::ArrowLeft => Some(CameraMovement::Left),
        KeyCode::KeyD | KeyCode::ArrowRight => Some(CameraMovement::Right),
        _ => None,
    };
    if let Some(direction) = movement {
        return if pressed {
            Action::StartMove(direction)
        } else {
            Action::StopMove(direction)
        };
    }
    match key {
        KeyCode::ShiftLeft | KeyCode::ShiftRight => Action::Sprint(pressed),
        KeyCode::Tab if pressed => Action::ToggleCapture,
        KeyCode::Escape if pressed => Action::Exit,
        _ => Action::Noop,
    }
}

fn scroll_amount(delta: MouseScrollDelta) -> f32 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => y,
        MouseScrollDelta::PixelDelta(p) => p.y as f32 / PIXELS_PER_LINE,
    }
}

/// Everything the frame loop mutates, owned by the application.
struct AppState {
    camera: Camera,
    projection: Projection,
    input: InputState,
    scene: Scene,
    viewport: PhysicalSize<u32>,
    flashlight: bool,
    last_frame: Instant,
    last_title: Instant,
}

impl AppState {
    fn new(config: &CameraConfig, viewport: PhysicalSize<u32>) -> Self {
        Self {
            camera: config.build_camera(),
            projection: config.projection(),
            input: InputState::new().with_constrain_pitch(config.constrain_pitch),
            scene: Scene::demo(),
            viewport,
            flashlight: true,
            last_frame: Instant::now(),
            last_title: Instant::now(),
        }
    }

    fn update(&mut self, dt: f32) {
        self.input.apply(&mut self.camera, dt);
    }

    fn render_view(&self) -> RenderView {
        let aspect = aspect_ratio(self.viewport.width, self.viewport.height);
        RenderView::capture(&self.camera, &self.projection, aspect)
    }

    fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        if key == KeyCode::KeyF && pressed {
            self.flashlight = !self.flashlight;
            tracing::info!(on = self.flashlight, "flashlight toggled");
            return false;
        }
        self.input.handle(key_action(key, pressed))
    }

    fn title(&self) -> String {
        let p = self.camera.position();
        format!(
            "Eyeline | pos ({:.1}, {:.1}, {:.1})  yaw {:.0}  pitch {:.0}  fov {:.0}",
            p.x,
            p.y,
            p.z,
            self.camera.yaw(),
            self.camera.pitch(),
            self.camera.zoom()
        )
    }
}

struct Gpu {
    window: Arc<Window>,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    renderer: WgpuRenderer,
}

impl Gpu {
    fn new(event_loop: &ActiveEventLoop, size: PhysicalSize<u32>) -> Result<Self> {
        let attrs = Window::default_attributes()
            .with_title("Eyeline")
            .with_inner_size(size);
        let window = Arc::new(event_loop.create_window(attrs).context("create window")?);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });
        let surface = instance
            .create_surface(window.clone())
            .context("create surface")?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .context("no compatible GPU adapter")?;

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("eyeline_device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
            },
            None,
        ))
        .context("create device")?;

        let size = window.inner_size();
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .or_else(|| caps.formats.first())
            .copied()
            .context("surface reports no formats")?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let renderer = WgpuRenderer::new(&device, format, config.width, config.height);

        tracing::info!(
            backend = adapter.get_info().backend.to_str(),
            ?format,
            "GPU initialized"
        );

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            renderer,
        })
    }

    fn resize(&mut self, size: PhysicalSize<u32>) {
        self.config.width = size.width.max(1);
        self.config.height = size.height.max(1);
        self.surface.configure(&self.device, &self.config);
        self.renderer
            .resize(&self.device, self.config.width, self.config.height);
    }

    fn set_capture(&self, captured: bool) {
        let result = if captured {
            self.window
                .set_cursor_grab(CursorGrabMode::Locked)
                .or_else(|_| self.window.set_cursor_grab(CursorGrabMode::Confined))
        } else {
            self.window.set_cursor_grab(CursorGrabMode::None)
        };
        if let Err(e) = result {
            tracing::warn!("cursor grab failed: {e}");
        }
        self.window.set_cursor_visible(!captured);
    }

    fn draw(&mut self, state: &AppState) {
        let output = match self.surface.get_current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.config);
                return;
            }
            Err(e) => {
                tracing::error!("surface error: {e}");
                return;
            }
        };
        let target = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.renderer.render(
            &self.device,
            &self.queue,
            &target,
            &state.scene,
            &state.render_view(),
            state.flashlight,
        );
        output.present();
    }
}

struct App {
    state: AppState,
    initial_size: PhysicalSize<u32>,
    gpu: Option<Gpu>,
    error: Option<anyhow::Error>,
}

impl App {
    fn new(config: &CameraConfig, initial_size: PhysicalSize<u32>) -> Self {
        Self {
            state: AppState::new(config, initial_size),
            initial_size,
            gpu: None,
            error: None,
        }
    }

    fn apply_capture(&self, changed: bool) {
        if let (true, Some(gpu)) = (changed, &self.gpu) {
            gpu.set_capture(self.state.input.is_captured());
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.gpu.is_some() {
            return;
        }
        match Gpu::new(event_loop, self.initial_size) {
            Ok(gpu) => {
                self.state.viewport = gpu.window.inner_size();
                self.gpu = Some(gpu);
            }
            Err(e) => {
                tracing::error!("GPU init failed: {e:#}");
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                self.state.viewport = size;
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(size);
                }
            }
            WindowEvent::Focused(false) => {
                self.state.input.release_all();
                let changed = self.state.input.handle(Action::SetCapture(false));
                self.apply_capture(changed);
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state: key_state,
                        repeat: false,
                        ..
                    },
                ..
            } => {
                let changed = self
                    .state
                    .handle_key(key, key_state == ElementState::Pressed);
                self.apply_capture(changed);
                if self.state.input.exit_requested() {
                    event_loop.exit();
                }
            }
            WindowEvent::MouseInput {
                button: MouseButton::Right,
                state: btn_state,
                ..
            } => {
                let changed = self
                    .state
                    .input
                    .handle(Action::SetCapture(btn_state == ElementState::Pressed));
                self.apply_capture(changed);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                self.state.input.handle(Action::Zoom(scroll_amount(delta)));
            }
            WindowEvent::RedrawRequested => {
                let now = Instant::now();
                let dt = (now - self.state.last_frame)
                    .as_secs_f32()
                    .min(MAX_FRAME_DT);
                self.state.last_frame = now;
                self.state.update(dt);

                let Some(gpu) = &mut self.gpu else {
                    return;
                };
                gpu.draw(&self.state);

                if now - self.state.last_title >= TITLE_INTERVAL {
                    self.state.last_title = now;
                    gpu.window.set_title(&self.state.title());
                }
                gpu.window.request_redraw();
            }
            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: winit::event::DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.state.input.handle(Action::Look {
                dx: delta.0 as f32,
                dy: delta.1 as f32,
            });
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(gpu) = &self.gpu {
            gpu.window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let config = match &cli.config {
        Some(path) => CameraConfig::load(path)
            .with_context(|| format!("load camera config {}", path.display()))?,
        None => CameraConfig::default(),
    };

    tracing::info!("eyeline-desktop starting (WASD move, hold RMB or Tab to look, wheel zoom, F flashlight)");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(&config, PhysicalSize::new(cli.width, cli.height));
    event_loop.run_app(&mut app)?;

    match app.error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
