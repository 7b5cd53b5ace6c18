use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::ui::layout::centered_rect_by_size;
use crate::ui::screen::AmountView;
use crate::ui::theme::{Palette, ACCENT};

const DIALOG_WIDTH: u16 = 40;
const DIALOG_HEIGHT: u16 = 7;
const SLIDER_WIDTH: usize = 24;

pub fn render_amount_dialog(frame: &mut Frame, view: &AmountView, palette: &Palette) {
    let area = centered_rect_by_size(DIALOG_WIDTH, DIALOG_HEIGHT, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", view.dialog.title()))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.popup_border))
        .style(Style::default().bg(palette.background));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{} seconds", view.seconds),
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::from(vec![
            Span::styled(format!("{:>3} ", view.range.start()), Style::default().fg(palette.muted)),
            Span::styled(slider(view), Style::default().fg(ACCENT)),
            Span::styled(format!(" {}", view.range.end()), Style::default().fg(palette.muted)),
        ])
        .alignment(Alignment::Center),
        Line::from(""),
        Line::from(Span::styled(
            "←→ adjust · Enter confirm · Esc dismiss",
            Style::default().fg(palette.muted),
        ))
        .alignment(Alignment::Center),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn slider(view: &AmountView) -> String {
    let start = *view.range.start();
    let span = view.range.end().saturating_sub(start).max(1) as usize;
    let filled = (view.seconds.saturating_sub(start) as usize * SLIDER_WIDTH) / span;
    let filled = filled.min(SLIDER_WIDTH);
    format!("{}{}", "━".repeat(filled), "─".repeat(SLIDER_WIDTH - filled))
}
