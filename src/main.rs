use log::{error, info};
use sand_grid::{sand_simulator::App, AppError, SimulationConfig};
use std::time::Instant;

fn run() -> Result<(), AppError> {
    let config = match std::env::args().nth(1) {
        Some(path) => {
            info!("Loading config from {}", path);
            SimulationConfig::load(&path)?
        }
        None => SimulationConfig::default(),
    };

    let mut app = App::new(&config)?;
    let frame = config.frame_duration();
    while app.is_running() {
        let started = Instant::now();
        app.input();
        app.update();
        app.render();
        if let Some(rest) = frame.checked_sub(started.elapsed()) {
            std::thread::sleep(rest);
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}
