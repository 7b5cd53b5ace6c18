//! Rendering for the auto-sleep configuration overlay.

use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::ui::auto_sleep::state::AutoSleepField;
use crate::ui::layout::centered_rect_by_size;
use crate::ui::screen::AutoSleepView;
use crate::ui::theme::{Palette, ACCENT};

const DIALOG_WIDTH: u16 = 44;
/// Columns available for a field value inside the dialog.
const VALUE_WIDTH: usize = 16;

/// Border, checkbox, spacer, buttons, hint.
fn dialog_height(view: &AutoSleepView) -> u16 {
    7 + view.text_fields.len() as u16
}

pub fn render_auto_sleep_dialog(frame: &mut Frame, view: &AutoSleepView, palette: &Palette) {
    let area = centered_rect_by_size(DIALOG_WIDTH, dialog_height(view), frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Auto sleep ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.popup_border))
        .style(Style::default().bg(palette.background));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let focused = |field: AutoSleepField| {
        if view.focus == field {
            Style::default()
                .fg(palette.text)
                .bg(palette.highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.text)
        }
    };

    let checkbox = if view.draft.enabled { "[x]" } else { "[ ]" };
    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(
                format!("{checkbox} {}", AutoSleepField::Enabled.label()),
                focused(AutoSleepField::Enabled),
            ),
        ]),
    ];

    for text in &view.text_fields {
        let cursor = if text.focused { "▏" } else { " " };
        lines.push(Line::from(vec![
            Span::styled(
                format!("    {:<20}", text.field.label()),
                Style::default().fg(palette.muted),
            ),
            Span::styled(
                format!(" {}{cursor}", visible_tail(&text.value, VALUE_WIDTH)),
                focused(text.field),
            ),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw("        "),
        Span::styled(
            format!(" {} ", AutoSleepField::Save.label()),
            focused(AutoSleepField::Save).fg(ACCENT),
        ),
        Span::raw("    "),
        Span::styled(
            format!(" {} ", AutoSleepField::Cancel.label()),
            focused(AutoSleepField::Cancel),
        ),
    ]));
    lines.push(
        Line::from(Span::styled(
            "Tab move · Space toggle · Enter save · Esc cancel",
            Style::default().fg(palette.muted),
        ))
        .alignment(Alignment::Center),
    );

    frame.render_widget(Paragraph::new(lines), inner);
}

/// End of `text` that fits in `width` columns, so the typing position
/// stays on screen. The draft itself is never shortened.
fn visible_tail(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        return text.to_string();
    }
    let keep = width.saturating_sub(1);
    let tail: String = text.chars().skip(len - keep).collect();
    format!("…{tail}")
}
