use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

use crate::config::GenerationConfig;
use crate::dimensions::random_dimension;
use crate::error::Result;
use crate::generator::Generator;
use crate::grid::{Grid, Point, MIN_DIMENSION};
use crate::input_buffer::InputBuffer;
use crate::pathfinding::shortest_path;

/// Movement direction on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// (row, col) offset
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// Result of processing one input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Idle,
    Moved,
    Reset,
    Won,
}

/// Maze, player and overlay state for one session
pub struct GameState {
    grid: Grid,
    player: Point,
    exit: Point,
    shortest_path: Vec<Point>,
    /// Membership index over `shortest_path`
    path_cells: HashSet<Point>,
    visibility: bool,
    input_buffer: InputBuffer,
    first_maze: bool,
    validate_first_maze: bool,
    generator: Generator,
    generation: u32,
    moves: u32,
    rng: StdRng,
}

impl GameState {
    /// Create a session with an RNG seeded from `seed`, or from entropy when None
    pub fn new(config: &GenerationConfig, seed: Option<u64>) -> Result<Self> {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }

    /// Create a session drawing all randomness from `rng` and generate the first maze
    pub fn with_rng(config: &GenerationConfig, rng: StdRng) -> Result<Self> {
        let mut state = Self::empty(
            Grid::new(MIN_DIMENSION, MIN_DIMENSION)?,
            Generator::new(config.max_attempts),
            rng,
        );
        state.validate_first_maze = config.validate_first_maze;
        state.reset()?;
        Ok(state)
    }

    /// Start a session on an already carved grid. Later resets generate
    /// fresh mazes and are always validated.
    pub fn from_grid(grid: Grid, rng: StdRng) -> Result<Self> {
        let mut state = Self::empty(grid, Generator::default(), rng);
        state.first_maze = false;
        state.place_player()?;
        state.generation = 1;
        Ok(state)
    }

    fn empty(grid: Grid, generator: Generator, rng: StdRng) -> Self {
        let entrance = grid.entrance();
        let exit = grid.exit();
        GameState {
            grid,
            player: entrance,
            exit,
            shortest_path: Vec::new(),
            path_cells: HashSet::new(),
            visibility: false,
            input_buffer: InputBuffer::new(),
            first_maze: true,
            validate_first_maze: false,
            generator,
            generation: 0,
            moves: 0,
            rng,
        }
    }

    /// Replace the maze with a freshly generated one of random size.
    /// Overlay visibility and the typed-input buffer are kept.
    pub fn reset(&mut self) -> Result<()> {
        let dimension = random_dimension(&mut self.rng);
        let validate = !self.first_maze || self.validate_first_maze;
        let (grid, attempts) = self.generator.generate(dimension, &mut self.rng, validate)?;

        self.grid = grid;
        self.place_player()?;
        self.first_maze = false;
        self.generation += 1;

        info!(
            "New maze size: {}x{} ({} attempt(s), path of {} cells)",
            dimension,
            dimension,
            attempts,
            self.shortest_path.len()
        );
        Ok(())
    }

    /// Put the player on the entrance and cache the entrance-to-exit path
    fn place_player(&mut self) -> Result<()> {
        self.player = self.grid.entrance();
        self.exit = self.grid.exit();
        self.moves = 0;
        self.shortest_path = shortest_path(&self.grid, self.player, self.exit)?;
        self.path_cells = self.shortest_path.iter().copied().collect();
        Ok(())
    }

    /// Feed a typed character; flips overlay visibility when the trigger word completes
    pub fn type_char(&mut self, ch: char) -> bool {
        if self.input_buffer.feed(ch) {
            self.visibility = !self.visibility;
            debug!("Shortest path overlay visible: {}", self.visibility);
            true
        } else {
            false
        }
    }

    /// Try to step the player one cell.
    ///
    /// Walls and the border give `Idle`. Reaching the exit gives `Won`.
    /// Landing on a cell of the cached path gives `Moved`, any other cell
    /// regenerates the maze and gives `Reset`.
    pub fn move_player(&mut self, direction: Direction) -> Result<StepOutcome> {
        let (dr, dc) = direction.delta();
        let target = match self.player.offset(dr, dc) {
            Some(target) if self.grid.in_bounds(target) && self.grid.is_open(target) => target,
            _ => return Ok(StepOutcome::Idle),
        };

        self.player = target;
        self.moves += 1;

        if self.player == self.exit {
            info!("Maze solved in {} moves", self.moves);
            return Ok(StepOutcome::Won);
        }

        if self.path_cells.contains(&self.player) {
            debug!("Player is on the optimal path at {}", self.player);
            Ok(StepOutcome::Moved)
        } else {
            debug!("Player moved off the optimal path at {}", self.player);
            self.reset()?;
            Ok(StepOutcome::Reset)
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn player(&self) -> Point {
        self.player
    }

    pub fn exit(&self) -> Point {
        self.exit
    }

    /// Entrance-to-exit path cached at generation time
    pub fn shortest_path(&self) -> &[Point] {
        &self.shortest_path
    }

    pub fn is_on_path(&self, p: Point) -> bool {
        self.path_cells.contains(&p)
    }

    pub fn is_path_visible(&self) -> bool {
        self.visibility
    }

    pub fn set_path_visible(&mut self, visible: bool) {
        self.visibility = visible;
    }

    pub fn input_buffer(&self) -> &InputBuffer {
        &self.input_buffer
    }

    /// Number of mazes produced so far
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Moves made in the current maze
    pub fn moves(&self) -> u32 {
        self.moves
    }
}
