//! Main application entry point.

use std::path::Path;

const USAGE: &str = "usage: floorplan <script.json> <out-dir> [config.json] [font.ttf]";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    log::info!("Starting floor-plan editor");

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 2 || args.len() > 4 {
        eprintln!("{}", USAGE);
        std::process::exit(2);
    }
    let config = args.get(2).map(Path::new);
    let font = args.get(3).map(Path::new);

    let summary = floorplan_app::run_files(Path::new(&args[0]), Path::new(&args[1]), config, font)
        .inspect_err(|e| log::error!("Run failed: {}", e))?;

    for notice in &summary.notices {
        println!("notice: {}", notice);
    }
    for path in summary.saved.iter().chain(&summary.exported) {
        println!("wrote {}", path.display());
    }
    Ok(())
}
