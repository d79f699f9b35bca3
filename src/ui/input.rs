use crate::reply::Tone;
use crate::ui::app::{App, Focus};
use crate::ui::compose::ComposeIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }
    if is_ctrl_char(key, 'g') {
        app.submit();
        return;
    }
    if is_ctrl_char(key, 'y') {
        app.copy_result();
        return;
    }

    match key.code {
        KeyCode::Tab => {
            app.focus_next();
            return;
        }
        KeyCode::BackTab => {
            app.focus_previous();
            return;
        }
        _ => {}
    }

    match app.focus() {
        Focus::Tone => handle_tone_key(app, key),
        Focus::Content => handle_content_key(app, key),
        Focus::Reply => handle_reply_key(app, key),
    }
}

fn handle_tone_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Left | KeyCode::Up => app.dispatch(ComposeIntent::PreviousTone),
        KeyCode::Right | KeyCode::Down => app.dispatch(ComposeIntent::NextTone),
        KeyCode::Char(ch) if ch.is_ascii_digit() => {
            let index = ch.to_digit(10).unwrap_or(0) as usize;
            if let Some(tone) = index.checked_sub(1).and_then(Tone::from_index) {
                app.dispatch(ComposeIntent::SelectTone(tone));
            }
        }
        KeyCode::Enter => app.focus_next(),
        _ => {}
    }
}

fn handle_content_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 'u') {
        app.dispatch(ComposeIntent::ClearContent);
        return;
    }
    match key.code {
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.dispatch(ComposeIntent::InsertChar(ch));
        }
        KeyCode::Enter => app.dispatch(ComposeIntent::InsertChar('\n')),
        KeyCode::Backspace => app.dispatch(ComposeIntent::Backspace),
        _ => {}
    }
}

fn handle_reply_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up => app.scroll_reply(-1),
        KeyCode::Down => app.scroll_reply(1),
        KeyCode::PageUp => app.scroll_reply(-10),
        KeyCode::PageDown => app.scroll_reply(10),
        KeyCode::Enter | KeyCode::Char('c') => app.copy_result(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
