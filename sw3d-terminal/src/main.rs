/// sw3d terminal demo - the classic spinning cube
///
/// Controls:
///   - P/W/F: switch between point, wireframe and filled rendering
///   - Q/ESC: quit

use log::info;
use std::io;

use sw3d_core::{Mesh, Scene};
use sw3d_terminal::TerminalApp;

fn main() -> io::Result<()> {
    env_logger::init();

    let mut scene = Scene::new();
    scene.add_mesh(Mesh::unit_cube());
    info!("scene ready: {} triangles", scene.triangle_count());

    let mut app = TerminalApp::new(scene)?;
    app.run()?;

    info!("terminal renderer exited cleanly");
    Ok(())
}
