use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::event::Event;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, terminal};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use lightswitch::app::App;
use lightswitch::constants::WINDOW_COUNT;
use lightswitch::drivers::ConsoleInputDriver;
use lightswitch::event_loop::{ControlFlow, EventLoop};
use lightswitch::layout::BuildingLayout;
use lightswitch::{tracing_sub, ui};

fn main() -> io::Result<()> {
    tracing_sub::init_default();

    let mut app = App::new(WINDOW_COUNT);
    let layout = BuildingLayout::with_defaults(WINDOW_COUNT);

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    terminal::enable_raw_mode()?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    let result = run(&mut terminal, &mut app, &layout);

    terminal::disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    layout: &BuildingLayout,
) -> io::Result<()> {
    let driver = ConsoleInputDriver::new();
    let mut event_loop = EventLoop::new(driver, Duration::from_millis(100));
    event_loop.run(|event| match event {
        None => {
            terminal.draw(|frame| ui::draw(frame, app, layout))?;
            Ok(ControlFlow::Continue)
        }
        Some(Event::Key(key)) => Ok(app.handle_key(&key)),
        Some(_) => Ok(ControlFlow::Continue),
    })
}
