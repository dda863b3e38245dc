use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Session events worth tracing
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// A new maze was generated (side length, cached path length)
    MazeGenerated { size: usize, path_len: usize },
    /// The player stepped to (row, col)
    Moved { row: usize, col: usize, on_path: bool },
    /// An off-path move forced a new maze of the given size
    Reset { size: usize },
    /// The path overlay was toggled
    PathVisibility { visible: bool },
    /// The exit was reached after this many moves
    Won { moves: u32 },
}

/// Logged action with timestamp
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoggedAction {
    /// Milliseconds since start
    pub timestamp_ms: u64,
    pub action: Action,
}

/// In-memory session log
pub struct ActionLog {
    start_time: Instant,
    actions: Vec<LoggedAction>,
}

impl Default for ActionLog {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionLog {
    pub fn new() -> Self {
        ActionLog {
            start_time: Instant::now(),
            actions: Vec::new(),
        }
    }

    /// Log an action with current timestamp
    pub fn log(&mut self, action: Action) {
        let timestamp_ms = self.start_time.elapsed().as_millis() as u64;
        self.actions.push(LoggedAction {
            timestamp_ms,
            action,
        });
    }

    pub fn actions(&self) -> &[LoggedAction] {
        &self.actions
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.actions)
    }

    /// Save log to JSON file
    pub fn save_to_file(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Print log to console
    pub fn print(&self) {
        println!("\n=== Action Log ({} events) ===", self.actions.len());
        for (i, logged) in self.actions.iter().enumerate() {
            println!("[{:6}ms] #{:3} {:?}", logged.timestamp_ms, i + 1, logged.action);
        }
        println!("=== End of Log ===\n");
    }

    /// Get summary statistics
    pub fn summary(&self) -> String {
        let mut mazes = 0;
        let mut moves = 0;
        let mut resets = 0;
        let mut toggles = 0;
        let mut won = false;

        for logged in &self.actions {
            match &logged.action {
                Action::MazeGenerated { .. } => mazes += 1,
                Action::Moved { .. } => moves += 1,
                Action::Reset { .. } => resets += 1,
                Action::PathVisibility { .. } => toggles += 1,
                Action::Won { .. } => won = true,
            }
        }

        let duration = self.actions.last().map_or(0, |last| last.timestamp_ms);

        format!(
            "Session Duration: {}ms\n\
             Total Events: {}\n\
             Mazes: {} generated, {} off-path resets\n\
             Player: {} moves, {} overlay toggles, solved: {}",
            duration,
            self.actions.len(),
            mazes,
            resets,
            moves,
            toggles,
            won
        )
    }
}
