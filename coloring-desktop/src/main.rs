//! # Coloring Desktop
//!
//! Opens a gallery page, replays recorded input and saves the result.

use clap::Parser;
use coloring_desktop::{CliArgs, ColoringApp, DesktopConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "coloring_desktop=info,coloring_core=info,coloring_renderer=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = CliArgs::parse();
    let config = DesktopConfig::from(args);

    tracing::info!(
        "Starting {} ({}x{} canvas, raster export {})",
        config.title,
        config.canvas.width,
        config.canvas.height,
        if coloring_renderer::raster_available() {
            "available"
        } else {
            "unavailable"
        }
    );

    let mut app = ColoringApp::new(config.clone());
    for category in app.gallery().categories() {
        tracing::debug!("Gallery category: {category}");
    }
    app.start_coloring(&config.category, config.page_index)?;

    if let Some(ref script) = config.script {
        let events = ColoringApp::load_script(script)?;
        let report = app.run_script(&events)?;
        tracing::info!(
            "Replayed {} events: {} segments, {} redraws, {} rejected",
            report.events,
            report.segments_drawn,
            report.redraws,
            report.rejected
        );
    }

    if let Some(ref output) = config.output {
        let outcome = app.save(output, config.format.as_deref())?;
        println!("{outcome}");
    }

    tracing::info!("Coloring Desktop exited");
    Ok(())
}
