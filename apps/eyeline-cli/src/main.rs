mod script;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use eyeline_camera::{Camera, CameraConfig};
use eyeline_render::{DebugTextRenderer, RenderView, Renderer};
use eyeline_scene::Scene;
use glam::Mat4;
use tracing_subscriber::EnvFilter;

use crate::script::Script;

#[derive(Parser)]
#[command(name = "eyeline-cli", about = "Headless tooling for the eyeline camera")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print crate versions
    Info,
    /// Print the camera config (default, or loaded and validated) as JSON
    Config {
        /// Camera config file (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Replay scripted input against a camera and print the result
    Run {
        /// Input script (JSON). Runs the built-in demo script when omitted
        #[arg(short, long)]
        script: Option<PathBuf>,
        /// Camera config file (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Viewport aspect ratio used for the projection
        #[arg(long, default_value = "1.3333334")]
        aspect: f32,
        /// Print camera state after every applied frame
        #[arg(long)]
        trace: bool,
    },
}

fn load_config(path: Option<&Path>) -> anyhow::Result<CameraConfig> {
    match path {
        Some(path) => CameraConfig::load(path)
            .with_context(|| format!("load camera config {}", path.display())),
        None => Ok(CameraConfig::default()),
    }
}

fn describe_camera(camera: &Camera) -> String {
    let p = camera.position();
    let f = camera.front();
    format!(
        "position=({:.3}, {:.3}, {:.3}) yaw={:.2} pitch={:.2} zoom={:.2} front=({:.3}, {:.3}, {:.3})",
        p.x,
        p.y,
        p.z,
        camera.yaw(),
        camera.pitch(),
        camera.zoom(),
        f.x,
        f.y,
        f.z
    )
}

fn format_matrix(m: &Mat4) -> String {
    (0..4)
        .map(|r| {
            let row = m.row(r);
            format!(
                "  [{:>8.4} {:>8.4} {:>8.4} {:>8.4}]",
                row.x, row.y, row.z, row.w
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn run(
    script_path: Option<&Path>,
    config_path: Option<&Path>,
    aspect: f32,
    trace: bool,
) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let script = match script_path {
        Some(path) => {
            Script::load(path).with_context(|| format!("load script {}", path.display()))?
        }
        None => Script::demo(),
    };

    let mut camera = config.build_camera();
    println!("Start: {}", describe_camera(&camera));

    let report = script.run_observed(&mut camera, config.constrain_pitch, |i, camera| {
        if trace {
            println!("  frame {i:>4}: {}", describe_camera(camera));
        }
    });

    println!(
        "End:   {} ({} frames, {} idle, {:.3}s{})",
        describe_camera(&camera),
        report.frames_applied,
        report.idle_frames,
        report.elapsed,
        if report.exited_early { ", exited early" } else { "" }
    );
    println!("View matrix:\n{}", format_matrix(&camera.view_matrix()));

    let view = RenderView::capture(&camera, &config.projection(), aspect);
    print!("{}", DebugTextRenderer::new().render(&Scene::demo(), &view));
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("eyeline-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("camera: {}", eyeline_camera::crate_info());
            println!("input: {}", eyeline_input::crate_info());
            println!("scene: {}", eyeline_scene::crate_info());
            println!("render: {}", eyeline_render::crate_info());
        }
        Commands::Config { config } => {
            let config = load_config(config.as_deref())?;
            println!("{}", config.to_json_pretty()?);
        }
        Commands::Run {
            script,
            config,
            aspect,
            trace,
        } => run(script.as_deref(), config.as_deref(), aspect, trace)?,
    }

    Ok(())
}
