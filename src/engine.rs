use rand::rngs::StdRng;
use std::fmt;

use crate::action_log::{Action, ActionLog};
use crate::config::Config;
use crate::error::Result;
use crate::game_state::{Direction, GameState, StepOutcome};
use crate::grid::{CellKind, Grid, Point};

/// Abstract key codes delivered by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Up,
    Down,
    Left,
    Right,
    W,
    A,
    S,
    D,
    Other,
}

impl KeyCode {
    pub fn direction(self) -> Option<Direction> {
        match self {
            KeyCode::Up | KeyCode::W => Some(Direction::Up),
            KeyCode::Down | KeyCode::S => Some(Direction::Down),
            KeyCode::Left | KeyCode::A => Some(Direction::Left),
            KeyCode::Right | KeyCode::D => Some(Direction::Right),
            KeyCode::Other => None,
        }
    }

    /// Key code for a typed character: WASD (any case) or Other
    pub fn from_char(ch: char) -> Self {
        match ch.to_ascii_lowercase() {
            'w' => KeyCode::W,
            'a' => KeyCode::A,
            's' => KeyCode::S,
            'd' => KeyCode::D,
            _ => KeyCode::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key_code: KeyCode,
    pub key_char: Option<char>,
}

impl KeyEvent {
    pub fn new(key_code: KeyCode, key_char: Option<char>) -> Self {
        KeyEvent { key_code, key_char }
    }

    /// Non-character key such as an arrow
    pub fn code(key_code: KeyCode) -> Self {
        KeyEvent::new(key_code, None)
    }

    /// Typed character, with the matching WASD key code
    pub fn typed(ch: char) -> Self {
        KeyEvent::new(KeyCode::from_char(ch), Some(ch))
    }
}

/// Periodic host tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickEvent;

/// What one key event did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub outcome: StepOutcome,
    pub needs_repaint: bool,
}

impl Step {
    fn idle() -> Self {
        Step {
            outcome: StepOutcome::Idle,
            needs_repaint: false,
        }
    }

    fn repaint(outcome: StepOutcome) -> Self {
        Step {
            outcome,
            needs_repaint: true,
        }
    }
}

/// Read-only view of the game for rendering
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub rows: usize,
    pub cols: usize,
    /// Row-major cell kinds
    pub cells: &'a [CellKind],
    pub player: Point,
    pub exit: Point,
    /// Shortest path, present only while the overlay is visible
    pub overlay: Option<&'a [Point]>,
}

impl Snapshot<'_> {
    pub fn kind(&self, p: Point) -> CellKind {
        if p.row >= self.rows || p.col >= self.cols {
            return CellKind::Wall;
        }
        self.cells[p.row * self.cols + p.col]
    }

    /// Pixel size of one cell so the longer axis fits in `window`
    pub fn cell_size(&self, window: u32) -> u32 {
        let dim = self.rows.max(self.cols) as u32;
        (window / dim).max(1)
    }

    fn on_overlay(&self, p: Point) -> bool {
        self.overlay.is_some_and(|path| path.contains(&p))
    }
}

impl fmt::Display for Snapshot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let p = Point::new(row, col);
                let symbol = if p == self.player {
                    'P'
                } else if p == self.exit {
                    'E'
                } else if self.on_overlay(p) {
                    '*'
                } else {
                    match self.kind(p) {
                        CellKind::Wall => '■',
                        CellKind::Open => '□',
                    }
                };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Entry point for the presentation layer
pub struct Engine {
    state: GameState,
    log: Option<ActionLog>,
    pending_repaint: bool,
}

impl Engine {
    pub fn new(config: &Config) -> Result<Self> {
        let state = GameState::new(&config.generation, config.game.seed)?;
        Ok(Self::from_state(state, config.logging.enable_action_log))
    }

    pub fn with_rng(config: &Config, rng: StdRng) -> Result<Self> {
        let state = GameState::with_rng(&config.generation, rng)?;
        Ok(Self::from_state(state, config.logging.enable_action_log))
    }

    /// Wrap an existing state; `record` enables the session action log
    pub fn from_state(state: GameState, record: bool) -> Self {
        let mut engine = Engine {
            state,
            log: record.then(ActionLog::new),
            pending_repaint: true,
        };
        engine.record_maze();
        engine
    }

    /// Generate a fresh maze, keeping overlay visibility and typed input
    pub fn reset(&mut self) -> Result<()> {
        self.state.reset()?;
        self.record(Action::Reset {
            size: self.state.grid().dimension(),
        });
        self.record_maze();
        self.pending_repaint = true;
        Ok(())
    }

    /// Process one key event.
    ///
    /// The typed character goes to the trigger buffer first; completing the
    /// trigger toggles the overlay and consumes the event. Otherwise the key
    /// code may move the player.
    pub fn handle_key(&mut self, event: KeyEvent) -> Result<Step> {
        if let Some(ch) = event.key_char {
            if self.state.type_char(ch) {
                self.record(Action::PathVisibility {
                    visible: self.state.is_path_visible(),
                });
                return Ok(self.finish(Step::repaint(StepOutcome::Idle)));
            }
        }

        let Some(direction) = event.key_code.direction() else {
            return Ok(Step::idle());
        };

        let (dr, dc) = direction.delta();
        let target = self.state.player().offset(dr, dc);

        let outcome = self.state.move_player(direction)?;
        let step = match (outcome, target) {
            (StepOutcome::Idle, _) | (_, None) => Step::idle(),
            (StepOutcome::Moved, Some(target)) => {
                self.record_move(target, true);
                Step::repaint(outcome)
            }
            (StepOutcome::Won, Some(target)) => {
                self.record_move(target, true);
                self.record(Action::Won {
                    moves: self.state.moves(),
                });
                Step::repaint(outcome)
            }
            (StepOutcome::Reset, Some(target)) => {
                self.record_move(target, false);
                self.record(Action::Reset {
                    size: self.state.grid().dimension(),
                });
                self.record_maze();
                Step::repaint(outcome)
            }
        };
        Ok(self.finish(step))
    }

    /// Returns whether a repaint is pending since the last tick, and clears it
    pub fn handle_tick(&mut self, _tick: TickEvent) -> bool {
        std::mem::take(&mut self.pending_repaint)
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        let grid: &Grid = self.state.grid();
        Snapshot {
            rows: grid.rows(),
            cols: grid.cols(),
            cells: grid.cells(),
            player: self.state.player(),
            exit: self.state.exit(),
            overlay: self
                .state
                .is_path_visible()
                .then(|| self.state.shortest_path()),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn action_log(&self) -> Option<&ActionLog> {
        self.log.as_ref()
    }

    fn finish(&mut self, step: Step) -> Step {
        self.pending_repaint |= step.needs_repaint;
        step
    }

    fn record(&mut self, action: Action) {
        if let Some(log) = self.log.as_mut() {
            log.log(action);
        }
    }

    fn record_maze(&mut self) {
        self.record(Action::MazeGenerated {
            size: self.state.grid().dimension(),
            path_len: self.state.shortest_path().len(),
        });
    }

    fn record_move(&mut self, to: Point, on_path: bool) {
        self.record(Action::Moved {
            row: to.row,
            col: to.col,
            on_path,
        });
    }
}
