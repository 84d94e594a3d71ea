/// VCam - Terminal wireframe viewer
///
/// Usage: vcam <config.json>
///
/// Controls:
///   - W/S: Move forward/backward, A/D: left/right, Q/E: up/down
///   - Arrow Keys: Rotate, Z/X: Roll
///   - C/V or mouse wheel: Zoom, mouse drag: Rotate
///   - ESC: Quit

use std::env;
use std::error::Error;

use vcam_core::{config, transform, Config, Scene};
use vcam_terminal::ViewerApp;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let (scene, viewer_config) = match args.get(1) {
        Some(path) => config::load(path)?,
        None => {
            eprintln!("Usage: {} <config.json>", args[0]);
            eprintln!("\nNo config provided, using a demo cube...");
            // A cube pushed in front of the camera plane.
            let cube = transform::translate(&Scene::cube(100.0), 0.0, 0.0, 200.0);
            (cube, Config::default())
        }
    };

    log::info!("starting viewer");
    let mut app = ViewerApp::new(scene, &viewer_config)?;
    app.run()?;

    Ok(())
}
