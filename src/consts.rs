use ratatui::style::Color;

/// Arena extent in virtual pixels.
pub const SCREEN_WIDTH: u16 = 640;
pub const SCREEN_HEIGHT: u16 = 480;

/// Side of one grid cell, in virtual pixels. Must evenly divide both
/// screen extents so that wrap arithmetic preserves cell alignment.
pub const GRID_SIZE: u16 = 20;

const _: () = assert!(SCREEN_WIDTH % GRID_SIZE == 0 && SCREEN_HEIGHT % GRID_SIZE == 0);

/// Arena extent in cells.
pub const GRID_WIDTH: u16 = SCREEN_WIDTH / GRID_SIZE;
pub const GRID_HEIGHT: u16 = SCREEN_HEIGHT / GRID_SIZE;

/// Ticks per second at the start of a run.
pub const START_SPEED: u16 = 10;

/// Speed gained whenever the stone field grows.
pub const SPEED_STEP: u16 = 2;

/// Stones scattered at session start and restored after a wipeout.
pub const START_COUNT_STONES: usize = ((GRID_WIDTH + GRID_HEIGHT) / 4) as usize;

/// A new stone appears every time the body length reaches a multiple of
/// this many segments.
pub const STONE_MILESTONE: usize = 5;

/// Rejection-sampling budget before the spawner reports `NoFreeCell`.
pub const SPAWN_ATTEMPTS: usize = (GRID_WIDTH as usize) * (GRID_HEIGHT as usize) * 32;

pub const SNEK_COLOR: Color = Color::Green;
pub const SNEK_HEAD_COLOR: Color = Color::Yellow;
pub const MORSEL_COLOR: Color = Color::Red;
pub const STONE_COLOR: Color = Color::Gray;
pub const BORDER_COLOR: Color = Color::Cyan;
pub const BACKGROUND_COLOR: Color = Color::Black;

pub const LOG_FILE: &str = "snekstone.log";
