//! Rendering for the compose form.

use ratatui::{
    layout::{Alignment, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use unicode_width::UnicodeWidthStr;

use crate::reply::Tone;
use crate::ui::app::Focus;
use crate::ui::layout::{form_regions, wrap_text};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, FOCUS_BORDER, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR,
    STATUS_OK,
};

use super::state::ComposeState;

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Render the whole form into `area`.
pub fn render_compose_form(
    frame: &mut Frame,
    area: Rect,
    state: &ComposeState,
    focus: Focus,
    reply_scroll: u16,
) {
    let regions = form_regions(area, state.has_error(), state.has_reply());

    render_tone_selector(frame, regions.tone, state.tone, focus == Focus::Tone);
    render_content(frame, regions.content, state, focus == Focus::Content);
    render_button(frame, regions.button, state);

    if let Some(error_area) = regions.error {
        let error = Paragraph::new(Line::from(Span::styled(
            state.error.clone(),
            Style::default().fg(STATUS_ERROR),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(error, error_area);
    }

    if let Some(reply_area) = regions.reply {
        render_reply(frame, reply_area, state, focus == Focus::Reply, reply_scroll);
    }
}

fn bordered(title: &'static str, focused: bool) -> Block<'static> {
    let border = if focused { FOCUS_BORDER } else { GLOBAL_BORDER };
    Block::default()
        .title(Span::styled(title, Style::default().fg(HEADER_TEXT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
}

fn render_tone_selector(frame: &mut Frame, area: Rect, selected: Tone, focused: bool) {
    frame.render_widget(
        Paragraph::new(tone_line(selected)).block(bordered(" Tone ", focused)),
        area,
    );
}

fn tone_line(selected: Tone) -> Line<'static> {
    let mut spans = vec![Span::raw(" ")];
    for (idx, tone) in Tone::ALL.iter().enumerate() {
        let style = if *tone == selected {
            Style::default()
                .fg(HEADER_TEXT)
                .bg(ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(MUTED_TEXT)
        };
        spans.push(Span::styled(
            format!(" {}. {} ", idx + 1, tone.label()),
            style,
        ));
        spans.push(Span::raw("  "));
    }
    Line::from(spans)
}

fn render_content(frame: &mut Frame, area: Rect, state: &ComposeState, focused: bool) {
    let block = bordered(" Paste Email Content Here ", focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let lines = wrap_text(&state.email_content, inner.width);
    // Keep the end of the text (where typing happens) in view.
    let skip = lines.len().saturating_sub(usize::from(inner.height));
    let visible: Vec<Line> = lines[skip..]
        .iter()
        .map(|line| Line::from(Span::styled(line.clone(), Style::default().fg(HEADER_TEXT))))
        .collect();
    frame.render_widget(Paragraph::new(visible), inner);

    if focused {
        let last = lines.last().map(|l| l.width()).unwrap_or(0) as u16;
        let row = (lines.len() - skip).saturating_sub(1) as u16;
        let x = inner.x + last.min(inner.width.saturating_sub(1));
        let y = inner.y + row.min(inner.height.saturating_sub(1));
        frame.set_cursor_position(Position::new(x, y));
    }
}

fn render_button(frame: &mut Frame, area: Rect, state: &ComposeState) {
    frame.render_widget(
        Paragraph::new(button_line(state)).alignment(Alignment::Center),
        area,
    );
}

fn button_line(state: &ComposeState) -> Line<'static> {
    if state.is_loading() {
        let spinner =
            SPINNER_FRAMES[(state.animation_tick() as usize) % SPINNER_FRAMES.len()];
        return Line::from(vec![
            Span::styled(format!("{} ", spinner), Style::default().fg(STATUS_OK)),
            Span::styled("Generating reply...", Style::default().fg(HEADER_TEXT)),
        ]);
    }

    let style = if state.can_submit() {
        Style::default()
            .fg(HEADER_TEXT)
            .bg(ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(MUTED_TEXT)
            .bg(ACTIVE_HIGHLIGHT)
            .add_modifier(Modifier::DIM)
    };
    Line::from(Span::styled("  Generate Reply (Ctrl+G)  ", style))
}

fn render_reply(frame: &mut Frame, area: Rect, state: &ComposeState, focused: bool, scroll: u16) {
    let block = bordered(" Generated Reply ", focused).title_bottom(
        Line::from(Span::styled(
            " Ctrl+Y: Copy to Clipboard ",
            Style::default().fg(MUTED_TEXT),
        ))
        .right_aligned(),
    );
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let lines = wrap_text(&state.generated_reply, inner.width);
    let max_scroll = lines.len().saturating_sub(usize::from(inner.height));
    let skip = usize::from(scroll).min(max_scroll);
    let visible: Vec<Line> = lines[skip..]
        .iter()
        .take(usize::from(inner.height))
        .map(|line| Line::from(line.clone()))
        .collect();
    frame.render_widget(
        Paragraph::new(visible).style(Style::default().fg(HEADER_TEXT)),
        inner,
    );
}
