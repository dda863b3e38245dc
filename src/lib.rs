pub mod action_log;
pub mod config;
pub mod dimensions;
pub mod engine;
pub mod error;
pub mod game_state;
pub mod generator;
pub mod grid;
pub mod input_buffer;
pub mod pathfinding;

pub use config::Config;
pub use engine::{Engine, KeyCode, KeyEvent, Snapshot, Step, TickEvent};
pub use error::MazeError;
pub use game_state::{Direction, GameState, StepOutcome};
pub use grid::{CellKind, Grid, Point};
pub use input_buffer::InputBuffer;
