//! Error types for the sand grid and its driver.

use std::fmt;

/// Reasons a grid cannot be constructed.
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// Cell size was zero, negative or not a number.
    InvalidCellSize(f32),
    /// Gravity was negative or not finite; particles never move upward.
    InvalidGravity(f32),
    /// The pixel dimensions hold no whole cell along at least one axis.
    EmptyGrid {
        width_px: u32,
        height_px: u32,
        cell_size: f32,
    },
    /// The cell count does not fit in memory.
    TooLarge {
        width_px: u32,
        height_px: u32,
        cell_size: f32,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::InvalidCellSize(size) => {
                write!(f, "Cell size must be a positive number, got {}", size)
            }
            GridError::InvalidGravity(gravity) => {
                write!(f, "Gravity must be finite and non-negative, got {}", gravity)
            }
            GridError::EmptyGrid {
                width_px,
                height_px,
                cell_size,
            } => write!(
                f,
                "A {}x{} px area holds no cells of size {}",
                width_px, height_px, cell_size
            ),
            GridError::TooLarge {
                width_px,
                height_px,
                cell_size,
            } => write!(
                f,
                "A {}x{} px area holds too many cells of size {}",
                width_px, height_px, cell_size
            ),
        }
    }
}

impl std::error::Error for GridError {}

/// Errors while reading or writing a configuration file.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "Failed to access config file: {}", e),
            ConfigError::Parse(e) => write!(f, "Invalid config file: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

/// Errors that stop the interactive simulator.
#[derive(Debug)]
pub enum AppError {
    /// SDL reports its failures as plain strings.
    Sdl(String),
    Config(ConfigError),
    Grid(GridError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Sdl(msg) => write!(f, "SDL error: {}", msg),
            AppError::Config(e) => write!(f, "Configuration error: {}", e),
            AppError::Grid(e) => write!(f, "Grid error: {}", e),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Sdl(_) => None,
            AppError::Config(e) => Some(e),
            AppError::Grid(e) => Some(e),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(e: ConfigError) -> Self {
        AppError::Config(e)
    }
}

impl From<GridError> for AppError {
    fn from(e: GridError) -> Self {
        AppError::Grid(e)
    }
}
