//! Terminal entry point and event loop.
//!
//! Owns everything the library deliberately doesn't: the terminal mode, the
//! tokio runtime, the channels between the handler and its workers, and the
//! mapping from raw key presses to application events.

use std::io::{self, Write};
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{
    Event as TermEvent, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{cursor, execute};
use futures_util::StreamExt;
use tokio::sync::mpsc;

use octoseek::app::{handle_event, Action, AppState, Event, InputFocus};
use octoseek::domain::Result;
use octoseek::gateway::GithubGateway;
use octoseek::observability::init_tracing;
use octoseek::worker::{Debouncer, FetchRequest, FetchWorker};
use octoseek::{initialize, ui, Config};

/// RAII guard for terminal state.
///
/// Enters raw mode and the alternate screen on construction; `Drop` restores
/// the terminal even when the event loop exits through an error.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, cursor::Hide)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), cursor::Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

/// Maps a terminal key press to an application event.
///
/// The mapping depends on input focus: with the query focused keystrokes
/// edit the term, with the results focused they navigate. `Ctrl+c` quits
/// from anywhere.
fn map_key(key: &KeyEvent, focus: InputFocus) -> Option<Event> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Event::Quit);
    }

    match focus {
        InputFocus::Query => match key.code {
            KeyCode::Char(c) => Some(Event::Char(c)),
            KeyCode::Backspace => Some(Event::Backspace),
            KeyCode::Enter => Some(Event::Submit),
            KeyCode::Esc => Some(Event::ClearQuery),
            KeyCode::Tab | KeyCode::Down => Some(Event::FocusResults),
            _ => None,
        },
        InputFocus::Results => match key.code {
            KeyCode::Char('j') | KeyCode::Down => Some(Event::CursorDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Event::CursorUp),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Event::ToggleExpand),
            KeyCode::Char('o') => Some(Event::OpenProfile),
            KeyCode::Char('/') => Some(Event::FocusQuery),
            KeyCode::Esc => Some(Event::FocusQuery),
            KeyCode::Char('q') => Some(Event::Quit),
            _ => None,
        },
    }
}

/// Clears the screen and draws the current frame.
fn draw(state: &AppState) -> Result<()> {
    let (cols, rows) = crossterm::terminal::size()?;
    execute!(io::stdout(), Clear(ClearType::All))?;
    ui::render(state, rows as usize, cols as usize);
    io::stdout().flush()?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;
    init_tracing(&config);

    tracing::info!(api_base = %config.api_base, "starting octoseek");

    let gateway = Arc::new(GithubGateway::new(&config)?);

    let (response_tx, mut response_rx) = mpsc::unbounded_channel();
    let worker = FetchWorker::new(gateway, response_tx);

    let (debounce_tx, mut debounce_rx) = mpsc::unbounded_channel();
    let mut debouncer = Debouncer::new(Duration::from_millis(config.debounce_ms), debounce_tx);

    let mut state = initialize(&config);

    let _guard = TerminalGuard::enter()?;
    let mut term_events = EventStream::new();

    draw(&state)?;

    'outer: loop {
        let event = tokio::select! {
            term_event = term_events.next() => {
                match term_event {
                    Some(Ok(TermEvent::Key(key))) => map_key(&key, state.focus),
                    Some(Ok(TermEvent::Resize(_, _))) => {
                        draw(&state)?;
                        None
                    }
                    Some(Ok(_)) => None,
                    Some(Err(e)) => {
                        tracing::error!(error = %e, "terminal event stream failed");
                        break;
                    }
                    None => break,
                }
            }
            fired = debounce_rx.recv() => {
                match fired {
                    Some(fired) if debouncer.accept(&fired) => {
                        Some(Event::DebounceElapsed { query: fired.query })
                    }
                    Some(_) => None,
                    None => break,
                }
            }
            response = response_rx.recv() => {
                match response {
                    Some(response) => Some(Event::from(response)),
                    None => break,
                }
            }
        };

        let Some(event) = event else {
            continue;
        };

        let (should_render, actions) = handle_event(&mut state, &event)?;

        for action in actions {
            match action {
                Action::Exit => break 'outer,
                Action::FetchSearch { seq, query } => {
                    worker.dispatch(FetchRequest::Search { seq, query });
                }
                Action::FetchRepositories { seq, login } => {
                    worker.dispatch(FetchRequest::Repositories { seq, login });
                }
                Action::ScheduleSearch { query } => debouncer.schedule(query),
                Action::CancelScheduledSearch => debouncer.cancel(),
                Action::OpenUrl(url) => {
                    if let Err(e) = open::that(&url) {
                        tracing::warn!(url = %url, error = %e, "failed to open browser");
                    }
                }
            }
        }

        if should_render {
            draw(&state)?;
        }
    }

    tracing::info!("octoseek exiting");
    Ok(())
}
