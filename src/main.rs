mod consts;
mod grid;
mod haus;
mod snek;
mod spawn;

use crate::consts::{
    BACKGROUND_COLOR, BORDER_COLOR, GRID_HEIGHT, GRID_SIZE, GRID_WIDTH, LOG_FILE, MORSEL_COLOR,
    SCREEN_HEIGHT, SCREEN_WIDTH, SNEK_COLOR, SNEK_HEAD_COLOR, START_COUNT_STONES, STONE_COLOR,
};
use crate::grid::{Direction, Pos, Size};
use crate::haus::{SnekHaus, StepResult};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{error, info};
use ratatui::{prelude::*, widgets::*};
use simplelog::{Config, LevelFilter, WriteLogger};
use std::fs::File;
use std::io;
use std::time::Instant;

const ARENA: Size = Size {
    width: SCREEN_WIDTH,
    height: SCREEN_HEIGHT,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set up logging before anything else
    WriteLogger::init(LevelFilter::Info, Config::default(), File::create(LOG_FILE)?)
        .expect("Failed to initialize logger");

    info!("Starting snekstone");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal);

    // Restore the terminal before surfacing any error
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run<B: Backend>(terminal: &mut Terminal<B>) -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = rand::thread_rng();
    let mut haus = SnekHaus::new(ARENA, START_COUNT_STONES, &mut rng)?;
    info!(
        "Arena {}x{} cells, {} stones to dodge",
        GRID_WIDTH, GRID_HEIGHT, START_COUNT_STONES
    );

    let mut last_tick = Instant::now();
    loop {
        terminal.draw(|f| render(f, &haus))?;

        // Drain input while waiting out the tick; the last accepted
        // steering key wins
        let timeout = haus.tick_len().saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_key(key, &mut haus) {
                    info!("Quit requested, final score {}", haus.score());
                    return Ok(());
                }
            }
        }

        if last_tick.elapsed() >= haus.tick_len() {
            match haus.slither_on(&mut rng) {
                Ok(StepResult::Nommed(score)) => info!("Nommed a morsel, score {}", score),
                Ok(StepResult::Smashed) => info!("Smashed! Run reset"),
                Ok(StepResult::Ongoing) => {}
                Err(e) => {
                    error!("Spawner gave up: {}", e);
                    return Err(e.into());
                }
            }
            last_tick = Instant::now();
        }
    }
}

// true means quit
fn handle_key(key: KeyEvent, haus: &mut SnekHaus) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return true,
        KeyCode::Up | KeyCode::Char('w') => haus.steer(Direction::Up),
        KeyCode::Down | KeyCode::Char('s') => haus.steer(Direction::Down),
        KeyCode::Left | KeyCode::Char('a') => haus.steer(Direction::Left),
        KeyCode::Right | KeyCode::Char('d') => haus.steer(Direction::Right),
        _ => {}
    }
    false
}

fn render(frame: &mut Frame, haus: &SnekHaus) {
    let layout = Layout::default()
        .direction(layout::Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title + score line
            Constraint::Min(0),    // Arena
        ])
        .split(frame.area());

    let header = format!(
        "SNEKSTONE    Score: {}    Speed: {}    Stones: {}",
        haus.score(),
        haus.speed(),
        haus.stones().len()
    );
    frame.render_widget(
        Paragraph::new(header)
            .alignment(Alignment::Left)
            .block(Block::default().borders(Borders::ALL)),
        layout[0],
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BORDER_COLOR));
    let inner = block.inner(layout[1]);
    frame.render_widget(block, layout[1]);
    frame.render_widget(haus, inner);
}

// One terminal cell per grid cell, clipped to the visible area
fn paint(buf: &mut Buffer, area: Rect, pos: Pos, symbol: &str, color: Color) {
    let cell_x = pos.x / GRID_SIZE;
    let cell_y = pos.y / GRID_SIZE;
    if cell_x < area.width && cell_y < area.height {
        buf[(area.x + cell_x, area.y + cell_y)]
            .set_symbol(symbol)
            .set_bg(color);
    }
}

impl Widget for &SnekHaus {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Blank the cell the tail vacated this tick
        if let Some(last) = self.snek().last() {
            paint(buf, area, last, " ", BACKGROUND_COLOR);
        }

        paint(buf, area, self.morsel(), " ", MORSEL_COLOR);

        for &stone in self.stones().cells() {
            paint(buf, area, stone, " ", STONE_COLOR);
        }

        for &cell in self.snek().cells().iter().skip(1) {
            paint(buf, area, cell, " ", SNEK_COLOR);
        }

        let glyph = match self.snek().direction() {
            Direction::Up => "^",
            Direction::Down => "v",
            Direction::Left => "<",
            Direction::Right => ">",
        };
        paint(buf, area, self.snek().head(), glyph, SNEK_HEAD_COLOR);
    }
}
