use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use clap::Parser;

use waypath::loader::{discover_dataset_files, load_dataset};
use waypath::view::MapView;

#[derive(Parser, Debug)]
#[command(author, version, about = "Compute waypoint path distances and canvas projections as JSON", long_about = None)]
struct Cli {
    /// Waypoint dataset (.json or .wpb snapshot), or a directory to scan
    #[arg(value_name = "DATASET")]
    dataset: String,

    /// Point ids to toggle into the path, in order (comma separated)
    #[arg(short, long, value_delimiter = ',')]
    select: Vec<u32>,

    /// Canvas width in pixels
    #[arg(long, default_value_t = 800.0)]
    width: f64,

    /// Canvas height in pixels
    #[arg(long, default_value_t = 500.0)]
    height: f64,

    /// Zoom steps to apply (positive zooms in, negative zooms out)
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    zoom_steps: i32,

    /// Open the interactive viewer instead of printing JSON
    #[cfg(feature = "egui")]
    #[arg(long)]
    viewer: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let path = Utf8PathBuf::from(&cli.dataset);

    if path.is_dir() {
        // List datasets found under the directory instead of computing a scene
        for f in discover_dataset_files(&path) {
            println!("{}", f);
        }
        return Ok(());
    }

    let dataset = load_dataset(&path).with_context(|| format!("Failed to load {}", path))?;
    let mut view = MapView::new(dataset, cli.width, cli.height);
    for id in &cli.select {
        view.toggle_point(*id);
    }
    for _ in 0..cli.zoom_steps.max(0) {
        view.zoom_in();
    }
    for _ in 0..(-cli.zoom_steps).max(0) {
        view.zoom_out();
    }

    #[cfg(feature = "egui")]
    if cli.viewer {
        return waypath::egui_app::run_viewer(view);
    }

    let json = serde_json::to_string_pretty(&view.scene())?;
    println!("{}", json);
    Ok(())
}
