//! # Voxel Mesher Entry Point
//!
//! Builds the scene described by a JSON file, meshes it and optionally writes
//! the result as Wavefront OBJ. All of the work happens in the library's
//! `run()` function.
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run --release -- scene.json
//! ```

use std::process::ExitCode;

use log::error;

fn main() -> ExitCode {
    match voxel_mesher::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("voxel-mesher failed: {}", err);
            ExitCode::FAILURE
        }
    }
}
