use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::amount::render_amount_dialog;
use crate::ui::auto_sleep::render_auto_sleep_dialog;
use crate::ui::layout::layout_regions;
use crate::ui::screen::rows::SettingsRow;
use crate::ui::screen::tree::{Overlay, ScreenTree};
use crate::ui::theme::{palette, Palette, ACCENT, STATUS_ERROR, STATUS_OK};

const LIST_HINTS: &str = "↑↓ move · Enter open · Space switch · e configure · Esc close";

pub fn draw(frame: &mut Frame, tree: &ScreenTree) {
    let palette = palette(tree.use_dark_theme);
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        area,
    );

    let (header, body, footer) = layout_regions(area);
    draw_header(frame, header, palette);
    draw_rows(frame, body, tree, palette);
    draw_footer(frame, footer, tree, palette);

    for overlay in &tree.overlays {
        match overlay {
            Overlay::AutoSleep(view) => render_auto_sleep_dialog(frame, view, palette),
            Overlay::Amount(view) => render_amount_dialog(frame, view, palette),
        }
    }
}

fn draw_header(frame: &mut Frame, area: Rect, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(palette.border));
    let title = Line::from(vec![
        Span::styled(" ✕ ", Style::default().fg(ACCENT)),
        Span::styled(
            "Settings",
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(title).block(block), area);
}

fn draw_rows(frame: &mut Frame, area: Rect, tree: &ScreenTree, palette: &Palette) {
    if area.height == 0 {
        return;
    }
    // Keep the focused row on screen.
    let visible = area.height as usize;
    let offset = tree.focused.saturating_sub(visible.saturating_sub(1));

    let lines: Vec<Line> = tree
        .rows
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .map(|(index, row)| row_line(row, index == tree.focused, area.width, palette))
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}

fn row_line(row: &SettingsRow, focused: bool, width: u16, palette: &Palette) -> Line<'static> {
    let base = if focused {
        Style::default().fg(palette.text).bg(palette.highlight)
    } else {
        Style::default().fg(palette.text)
    };

    let mut left = vec![
        Span::styled(format!(" {} ", row.icon()), base.fg(ACCENT)),
        Span::styled(row.title().to_string(), base.add_modifier(Modifier::BOLD)),
    ];
    if let Some(summary) = row.summary() {
        left.push(Span::styled(format!("  {summary}"), base.fg(palette.muted)));
    }

    let mut right = Vec::new();
    if row.has_settings_icon() {
        right.push(Span::styled(" ⚙ ", base.fg(palette.muted)));
    }
    if let Some(on) = row.switch() {
        let (label, color) = if on {
            (" ● on  ", STATUS_OK)
        } else {
            (" ○ off ", palette.muted)
        };
        right.push(Span::styled(label, base.fg(color)));
    }

    let used: usize = left.iter().chain(right.iter()).map(|span| span.width()).sum();
    let pad = (width as usize).saturating_sub(used);
    let mut spans = left;
    spans.push(Span::styled(" ".repeat(pad), base));
    spans.extend(right);
    Line::from(spans)
}

fn draw_footer(frame: &mut Frame, area: Rect, tree: &ScreenTree, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(palette.border));

    let status = match &tree.error {
        Some(error) => Span::styled(format!(" {error}"), Style::default().fg(STATUS_ERROR)),
        None => Span::styled(
            format!(" Version {}", tree.app_version),
            Style::default().fg(palette.muted),
        ),
    };
    let lines = vec![
        Line::from(status),
        Line::from(Span::styled(LIST_HINTS, Style::default().fg(palette.muted)))
            .alignment(Alignment::Right),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{SettingsIntent, SettingsViewState};
    use crate::ui::screen::SettingsScreen;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn draws_rows_and_version() {
        let view = SettingsViewState {
            app_version: "1.2.3".into(),
            seek_time_seconds: 20,
            ..Default::default()
        };
        let screen: SettingsScreen<Vec<SettingsIntent>> = SettingsScreen::new(Vec::new());
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal
            .draw(|frame| draw(frame, &screen.tree(&view)))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Settings"));
        assert!(text.contains("Display mode"));
        assert!(text.contains("Version 1.2.3"));
        assert!(!text.contains("Dark theme"));
    }

    #[test]
    fn error_replaces_version() {
        let view = SettingsViewState {
            app_version: "1.2.3".into(),
            error: Some("Could not save".into()),
            ..Default::default()
        };
        let screen: SettingsScreen<Vec<SettingsIntent>> = SettingsScreen::new(Vec::new());
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal
            .draw(|frame| draw(frame, &screen.tree(&view)))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Could not save"));
        assert!(!text.contains("Version 1.2.3"));
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let view = SettingsViewState::default();
        let mut screen: SettingsScreen<Vec<SettingsIntent>> = SettingsScreen::new(Vec::new());
        screen.open_auto_sleep_dialog(&view);
        let mut terminal = Terminal::new(TestBackend::new(8, 3)).unwrap();
        terminal
            .draw(|frame| draw(frame, &screen.tree(&view)))
            .unwrap();
    }
}
