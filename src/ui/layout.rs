use ratatui::layout::{Constraint, Direction, Layout, Rect};
use unicode_width::UnicodeWidthChar;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(4);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Areas of the compose form inside the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormRegions {
    pub tone: Rect,
    pub content: Rect,
    pub button: Rect,
    pub error: Option<Rect>,
    pub reply: Option<Rect>,
}

pub fn form_regions(body: Rect, show_error: bool, show_reply: bool) -> FormRegions {
    let mut constraints = vec![
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
    ];
    if show_error {
        constraints.push(Constraint::Length(1));
    }
    if show_reply {
        constraints.push(Constraint::Fill(1));
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(body);

    let mut next = 3;
    let error = if show_error {
        next += 1;
        Some(chunks[next - 1])
    } else {
        None
    };
    let reply = if show_reply { Some(chunks[next]) } else { None };

    FormRegions {
        tone: chunks[0],
        content: chunks[1],
        button: chunks[2],
        error,
        reply,
    }
}

/// Split `text` into display lines no wider than `width` terminal columns.
///
/// Explicit line breaks are kept; an empty text yields one empty line.
/// A single character wider than `width` still gets a line of its own.
pub fn wrap_text(text: &str, width: u16) -> Vec<String> {
    let width = usize::from(width.max(1));
    let mut lines = Vec::new();
    for raw in text.split('\n') {
        let mut line = String::new();
        let mut line_width = 0;
        for ch in raw.chars() {
            let ch_width = ch.width().unwrap_or(0);
            if line_width + ch_width > width && !line.is_empty() {
                lines.push(std::mem::take(&mut line));
                line_width = 0;
            }
            line.push(ch);
            line_width += ch_width;
        }
        lines.push(line);
    }
    lines
}
