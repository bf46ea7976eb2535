//! Terminal minesweeper runner (default binary).
//!
//! Uses crossterm for keyboard and mouse input and the framebuffer-based
//! renderer from `tui_mines::term`. Logs go to the file named by
//! `MINES_LOG_PATH`, since the terminal itself belongs to the game.

use std::fs::File;
use std::sync::Mutex;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info};

use tui_mines::core::{GameStatus, Grid, Session};
use tui_mines::input::{handle_key_event, handle_mouse_event, should_quit};
use tui_mines::term::{
    paint, Canvas, Cell, CellStyle, Frame, FrameBuffer, GridRenderer, Rgb, ScreenMapping,
    TerminalRenderer, Viewport,
};
use tui_mines::types::{GameAction, GameConfig};

/// Rows kept free below the grid for the status text.
const STATUS_ROWS: u16 = 2;

fn main() -> Result<()> {
    init_logging()?;
    let config = GameConfig::from_env().context("invalid game configuration")?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_logging() -> Result<()> {
    let Some(path) = std::env::var("MINES_LOG_PATH")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
    else {
        return Ok(());
    };

    let file = File::create(&path).with_context(|| format!("could not create log file {path}"))?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn new_session(config: &GameConfig) -> Result<Session> {
    Ok(Session::new(Grid::generate(config)?))
}

fn run(term: &mut TerminalRenderer, mut config: GameConfig) -> Result<()> {
    let renderer = GridRenderer::new(config.pixel_size);
    let mut session = new_session(&config)?;
    let mut flag_mode = false;
    let mut frame = Frame::new();
    let mut fb = FrameBuffer::new(0, 0);

    info!(
        field_size = config.field_size,
        mines = config.mines,
        seed = config.seed,
        "starting game"
    );

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let mapping =
            ScreenMapping::default().centered(config.pixel_size, Viewport::new(w, h), STATUS_ROWS);

        renderer.render_into(session.grid_mut(), &mut frame)?;
        fb.resize(w, h);
        fb.clear(Cell::default());
        paint(&frame, &mut Canvas::new(&mut fb, mapping));
        draw_status(&mut fb, &session, flag_mode, mapping, config.pixel_size);
        term.draw_swap(&mut fb)?;

        // Input. Nothing changes between events, so block.
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                match handle_key_event(key) {
                    Some(GameAction::ToggleFlagMode) => flag_mode = !flag_mode,
                    Some(GameAction::Restart) => {
                        config.seed = config.seed.wrapping_add(1);
                        session = new_session(&config)?;
                        flag_mode = false;
                    }
                    None => {}
                }
            }
            Event::Mouse(mouse) => {
                if let Some(hit) = handle_mouse_event(mouse, flag_mode) {
                    let point = mapping.to_logical(hit.column, hit.row);
                    let outcome = session.hit(point, hit.flagging);
                    debug!(?outcome, x = point.x, y = point.y, "pointer hit");
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}

fn draw_status(
    fb: &mut FrameBuffer,
    session: &Session,
    flag_mode: bool,
    mapping: ScreenMapping,
    pixel_size: f64,
) {
    let (_, grid_h) = mapping.extent(pixel_size);
    let x = mapping.origin_x;
    let y = mapping.origin_y.saturating_add(grid_h);

    let label = CellStyle {
        fg: Rgb::new(220, 220, 220),
        bg: Rgb::BLACK,
        bold: true,
        dim: false,
    };
    let mode = if flag_mode { "flag" } else { "reveal" };
    fb.put_str(
        x,
        y,
        &format!(
            "MINES {}  FLAGS {}  MODE {}",
            session.mine_count(),
            session.flag_count(),
            mode
        ),
        label,
    );

    let (text, fg) = match session.status() {
        GameStatus::Playing => ("f: mode  r: restart  q: quit", Rgb::new(140, 140, 140)),
        GameStatus::Won => ("CLEARED!  r: restart  q: quit", Rgb::new(100, 220, 120)),
        GameStatus::Lost => ("BOOM!  r: restart  q: quit", Rgb::RED),
    };
    let style = CellStyle {
        fg,
        bold: session.status() != GameStatus::Playing,
        ..label
    };
    fb.put_str(x, y.saturating_add(1), text, style);
}
