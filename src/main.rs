use arboard::Clipboard;
use log::{error, info, warn};
use macroquad::prelude::*;
use maze_solver::{
    CellKind, Config, Engine, KeyCode as MazeKey, KeyEvent, Point, Snapshot, StepOutcome, TickEvent,
};

const WIN_MESSAGE: &str = "You solved the maze!";

fn window_conf() -> Conf {
    let config = Config::load();
    Conf {
        window_title: config.visual.window_title.clone(),
        window_width: config.visual.window_size as i32,
        window_height: config.visual.window_size as i32,
        window_resizable: false,
        ..Default::default()
    }
}

/// Arrow keys become code-only events; WASD and every other typed key arrive as characters
fn poll_key_events() -> Vec<KeyEvent> {
    let mut events = Vec::new();

    for (key, code) in [
        (KeyCode::Up, MazeKey::Up),
        (KeyCode::Down, MazeKey::Down),
        (KeyCode::Left, MazeKey::Left),
        (KeyCode::Right, MazeKey::Right),
    ] {
        if is_key_pressed(key) {
            events.push(KeyEvent::code(code));
        }
    }

    while let Some(ch) = get_char_pressed() {
        events.push(KeyEvent::typed(ch));
    }

    events
}

/// Window size in pixels for the current maze
fn window_size_for(snapshot: &Snapshot, window: u32) -> (f32, f32) {
    let cell = snapshot.cell_size(window) as f32;
    (snapshot.cols as f32 * cell, snapshot.rows as f32 * cell)
}

fn draw_snapshot(snapshot: &Snapshot, window: u32) {
    clear_background(WHITE);
    let cell = snapshot.cell_size(window) as f32;
    let fill = |p: Point, color: Color| {
        draw_rectangle(p.col as f32 * cell, p.row as f32 * cell, cell, cell, color);
    };

    for row in 0..snapshot.rows {
        for col in 0..snapshot.cols {
            let p = Point::new(row, col);
            let color = match snapshot.kind(p) {
                CellKind::Wall => BLACK,
                CellKind::Open => WHITE,
            };
            fill(p, color);
        }
    }

    if let Some(path) = snapshot.overlay {
        for &p in path {
            fill(p, GREEN);
        }
    }

    fill(snapshot.player, BLUE);
    fill(snapshot.exit, RED);
}

fn draw_banner(text: &str) {
    let size = 28.0;
    let dims = measure_text(text, None, size as u16, 1.0);
    let x = (screen_width() - dims.width) / 2.0;
    let y = screen_height() / 2.0;
    draw_rectangle(x - 12.0, y - dims.height - 12.0, dims.width + 24.0, dims.height + 24.0, Color::from_rgba(30, 30, 30, 230));
    draw_text(text, x, y, size, WHITE);
}

fn copy_to_clipboard(snapshot: &Snapshot) {
    let layout = snapshot.to_string();
    match Clipboard::new() {
        Ok(mut clipboard) => {
            if let Err(e) = clipboard.set_text(layout) {
                warn!("Failed to copy to clipboard: {}", e);
            } else {
                info!("Maze layout copied to clipboard");
                // Keep clipboard alive for a moment to ensure clipboard managers can capture it
                std::thread::sleep(std::time::Duration::from_millis(100));
            }
        }
        Err(e) => {
            warn!("Failed to access clipboard: {}", e);
        }
    }
}

fn save_action_log(engine: &Engine, config: &Config) {
    let Some(log) = engine.action_log() else {
        return;
    };
    info!("{}", log.summary().replace('\n', "; "));
    let path = &config.logging.action_log_path;
    match log.save_to_file(path) {
        Ok(()) => info!("Action log saved to {}", path),
        Err(e) => warn!("Failed to save action log to {}: {}", path, e),
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::load();
    let window = config.visual.window_size;

    let mut engine = match Engine::new(&config) {
        Ok(engine) => engine,
        Err(e) => {
            error!("Failed to create maze: {}", e);
            return;
        }
    };

    let (w, h) = window_size_for(&engine.snapshot(), window);
    request_new_screen_size(w, h);

    let mut solved = false;

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        if solved {
            // Any key dismisses the completion message
            if get_last_key_pressed().is_some() {
                break;
            }
            draw_snapshot(&engine.snapshot(), window);
            draw_banner(WIN_MESSAGE);
            next_frame().await;
            continue;
        }

        if is_key_pressed(KeyCode::F2) {
            copy_to_clipboard(&engine.snapshot());
        }

        for event in poll_key_events() {
            match engine.handle_key(event) {
                Ok(step) => match step.outcome {
                    StepOutcome::Reset => {
                        let (w, h) = window_size_for(&engine.snapshot(), window);
                        request_new_screen_size(w, h);
                    }
                    StepOutcome::Won => {
                        info!("{}", WIN_MESSAGE);
                        solved = true;
                        break;
                    }
                    StepOutcome::Idle | StepOutcome::Moved => {}
                },
                Err(e) => {
                    error!("Maze engine failed: {}", e);
                    save_action_log(&engine, &config);
                    return;
                }
            }
        }

        // macroquad redraws every frame; the tick only drains the repaint flag
        engine.handle_tick(TickEvent);

        let snapshot = engine.snapshot();
        draw_snapshot(&snapshot, window);
        if config.visual.show_help {
            draw_text("Arrows/WASD: move   F2: copy layout   Esc: quit", 6.0, screen_height() - 6.0, 16.0, GRAY);
        }

        next_frame().await;
    }

    save_action_log(&engine, &config);
}
