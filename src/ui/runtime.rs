use crate::config::{Config, PreferencesStore};
use crate::links::SystemLinkOpener;
use crate::settings::SettingsModel;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::screen::{draw, SettingsScreen};
use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Once;
use std::time::Duration;

/// Set while raw mode and the alternate screen are active.
static TERMINAL_TAKEN: AtomicBool = AtomicBool::new(false);

/// Owns the terminal for one run; leaving happens on drop or panic,
/// whichever comes first.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn enter() -> io::Result<Self> {
        install_panic_hook();
        enable_raw_mode()?;
        TERMINAL_TAKEN.store(true, Ordering::SeqCst);

        let mut stdout = io::stdout();
        let entered = execute!(stdout, EnterAlternateScreen, Hide)
            .and_then(|()| Terminal::new(CrosstermBackend::new(stdout)));
        match entered {
            Ok(terminal) => Ok(Self { terminal }),
            Err(err) => {
                leave_terminal();
                Err(err)
            }
        }
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        leave_terminal();
    }
}

/// Restore the terminal if a session holds it. Safe to call repeatedly.
fn leave_terminal() {
    if TERMINAL_TAKEN.swap(false, Ordering::SeqCst) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
    }
}

fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            leave_terminal();
            default_hook(info);
        }));
    });
}

/// Run the settings screen until the user closes it.
pub fn run(config: &Config, store: PreferencesStore) -> io::Result<()> {
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let model = SettingsModel::new(store, config, SystemLinkOpener, env!("CARGO_PKG_VERSION"));
    let mut screen = SettingsScreen::new(model);

    let mut session = TerminalSession::enter()?;
    let events = EventHandler::new(tick_rate);
    tracing::info!("Settings screen started");

    loop {
        let view = screen.listener().view_state();
        screen.sync(&view);
        session
            .terminal
            .draw(|frame| draw(frame, &screen.tree(&view)))?;
        if screen.listener().close_requested() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut screen, &view, key),
            Ok(AppEvent::Resize) | Ok(AppEvent::Tick) => {}
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(session);
    tracing::info!("Settings screen closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaving_without_a_session_is_a_noop() {
        assert!(!TERMINAL_TAKEN.load(Ordering::SeqCst));
        leave_terminal();
        leave_terminal();
        assert!(!TERMINAL_TAKEN.load(Ordering::SeqCst));
    }
}
