//! Falling-sand simulation on a dense 2D grid.
//!
//! [`Grid`] owns the cells; call [`Grid::spawn`] on pointer input, [`Grid::step`] once per
//! frame, and draw from [`Grid::cells_snapshot`]. The SDL2 front end lives in
//! [`sand_simulator`] behind the `gui` feature.

pub mod color;
pub mod config;
pub mod error;
pub mod grid;
pub mod particle;
#[cfg(feature = "gui")]
pub mod sand_simulator;
pub mod snapshot;
pub mod vec;

pub use color::{ColorCursor, Rgb};
pub use config::SimulationConfig;
pub use error::{AppError, ConfigError, GridError};
pub use grid::Grid;
pub use particle::Particle;
pub use snapshot::CellsView;
pub use vec::Vec2;
