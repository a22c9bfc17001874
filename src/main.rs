mod models;
mod raster;
mod render;
mod utils;

use crate::models::{IconDesign, OUTPUT_PATH};
use crate::render::render_icon;
use crate::utils::{log_line, save_png};
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    let result = render_icon(&IconDesign::tracker())
        .and_then(|icon| save_png(&icon, Path::new(OUTPUT_PATH)));

    match result {
        Ok(()) => {
            println!("{}", log_line(&format!("Icon saved to {}", OUTPUT_PATH)));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", log_line(&format!("Error: {}", e)));
            ExitCode::FAILURE
        }
    }
}
