use crate::settings::{SettingsListener, SettingsViewState};
use crate::ui::auto_sleep::AutoSleepField;
use crate::ui::screen::{RowTrigger, SettingsScreen};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Route a key press to the topmost surface: simple dialog, then the
/// auto-sleep dialog, then the row list.
pub fn handle_key<L: SettingsListener>(
    screen: &mut SettingsScreen<L>,
    view: &SettingsViewState,
    key: KeyEvent,
) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    screen.sync(view);

    if key.modifiers.contains(KeyModifiers::CONTROL) && matches!(key.code, KeyCode::Char('c')) {
        screen.close();
        return;
    }

    if view.dialog.is_some() {
        handle_amount_key(screen, key);
    } else if screen.auto_sleep_state().is_open() {
        handle_auto_sleep_key(screen, key);
    } else {
        handle_list_key(screen, view, key);
    }
}

fn handle_amount_key<L: SettingsListener>(screen: &mut SettingsScreen<L>, key: KeyEvent) {
    match key.code {
        KeyCode::Left | KeyCode::Char('-') | KeyCode::Char('h') => screen.adjust_amount(-1),
        KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Char('l') => {
            screen.adjust_amount(1)
        }
        KeyCode::PageDown => screen.adjust_amount(-5),
        KeyCode::PageUp => screen.adjust_amount(5),
        KeyCode::Enter => screen.confirm_amount(),
        KeyCode::Esc => screen.dismiss_amount(),
        _ => {}
    }
}

fn handle_auto_sleep_key<L: SettingsListener>(screen: &mut SettingsScreen<L>, key: KeyEvent) {
    let on_text_field = screen
        .auto_sleep_state()
        .focus()
        .is_some_and(|field| field.is_text());

    match key.code {
        KeyCode::Esc => screen.cancel_auto_sleep_dialog(),
        KeyCode::Tab | KeyCode::Down => screen.focus_next_field(),
        KeyCode::BackTab | KeyCode::Up => screen.focus_prev_field(),
        // Enter saves from anywhere except the Cancel button.
        KeyCode::Enter if screen.auto_sleep_state().focus() == Some(AutoSleepField::Cancel) => {
            screen.cancel_auto_sleep_dialog()
        }
        KeyCode::Enter => screen.save_auto_sleep_dialog(),
        KeyCode::Backspace => screen.backspace(),
        KeyCode::Char(ch) if on_text_field => screen.input_char(ch),
        KeyCode::Char(' ') => screen.press_auto_sleep_focus(),
        _ => {}
    }
}

fn handle_list_key<L: SettingsListener>(
    screen: &mut SettingsScreen<L>,
    view: &SettingsViewState,
    key: KeyEvent,
) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => screen.move_focus(view, -1),
        KeyCode::Down | KeyCode::Char('j') => screen.move_focus(view, 1),
        KeyCode::Enter => screen.activate_focused(view, RowTrigger::Primary),
        KeyCode::Char(' ') => screen.activate_focused(view, RowTrigger::Switch),
        KeyCode::Char('e') => screen.activate_focused(view, RowTrigger::SettingsIcon),
        KeyCode::Esc | KeyCode::Char('q') => screen.close(),
        _ => {}
    }
}
