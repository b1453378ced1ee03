//! xsetwacom-gui - Map a Wacom tablet's active area to a monitor region.

mod app;
mod area_mapper;
mod canvas;
mod pressure;
mod theme;
mod toast;
mod transform;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use app::{Session, TabletApp};
use xsetwacom_core::{
    config, resolve_startup, DeviceService, DisplayService, HeadlessOutcome, Xrandr, Xsetwacom,
};

/// Configure tablet area, output mapping and pressure curve through xsetwacom.
#[derive(Parser, Debug)]
#[command(name = "xsetwacom-gui")]
#[command(about, long_about = None)]
struct Args {
    /// Apply the saved settings to the first stylus and primary monitor, then exit
    #[arg(long = "no-gui")]
    no_gui: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if args.no_gui {
        run_headless()
    } else {
        run_gui()
    }
}

fn run_headless() -> Result<()> {
    let path = config::device_settings_path();
    info!("Applying settings from {}", path.display());

    let outcome = xsetwacom_core::run_headless(&path, &Xsetwacom::default(), &Xrandr::default())
        .with_context(|| format!("Failed to apply settings from {}", path.display()))?;

    match outcome {
        HeadlessOutcome::Applied { device, monitor } => {
            info!("Mapped {} to {}", device, monitor);
        }
        HeadlessOutcome::Skipped => {
            info!("No stylus or monitor available, nothing applied");
        }
    }
    Ok(())
}

fn run_gui() -> Result<()> {
    let service = Xsetwacom::default();
    let devices = service
        .list_stylus_devices()
        .context("Failed to list tablet devices")?;
    let monitors = Xrandr::default()
        .list_monitors()
        .context("Failed to list monitors")?;
    info!(
        "Found {} stylus device(s) and {} monitor(s)",
        devices.len(),
        monitors.len()
    );

    let settings_path = config::device_settings_path();
    let startup = resolve_startup(&settings_path, &devices, &monitors, &service)
        .context("Failed to read current device properties")?;

    let session = Session {
        devices,
        monitors,
        startup,
        service: Box::new(service),
        settings_path,
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([760.0, 820.0])
            .with_min_inner_size([480.0, 520.0])
            .with_title(config::APPLICATION),
        ..Default::default()
    };

    eframe::run_native(
        config::APPLICATION,
        options,
        Box::new(move |cc| Ok(Box::new(TabletApp::new(cc, session)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run window: {e}"))
}
