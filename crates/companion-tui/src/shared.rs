//! Shared utilities for TUI views: layout helpers, the output log view, and popups.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use companion_core::OutputLog;

/// Scroll state for an output log panel. Offset 0 shows the first line.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogView {
    /// Lines scrolled past the top.
    pub scroll: u16,
}

impl LogView {
    /// Scroll towards older lines.
    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    /// Scroll towards the top.
    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    /// Jump back to the top.
    pub fn reset(&mut self) {
        self.scroll = 0;
    }
}

/// Draw an output log in a bordered, wrapping, scrollable box.
pub fn draw_log(frame: &mut Frame, log: &OutputLog, view: LogView, area: Rect, color: Color) {
    let lines: Vec<Line> = if log.is_empty() {
        vec![Line::from(Span::styled(
            "(no output)",
            Style::default().fg(Color::DarkGray).italic(),
        ))]
    } else {
        log.entries()
            .iter()
            .map(|text| Line::from(text.as_str()))
            .collect()
    };

    let visible_height = area.height.saturating_sub(2);
    let max_scroll = u16::try_from(wrapped_rows(&lines, area.width.saturating_sub(2)))
        .unwrap_or(u16::MAX)
        .saturating_sub(visible_height);

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Output ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        )
        .wrap(Wrap { trim: false })
        .scroll((view.scroll.min(max_scroll), 0));

    frame.render_widget(paragraph, area);
}

/// Rows `lines` occupy once wrapped to `width` columns.
fn wrapped_rows(lines: &[Line], width: u16) -> usize {
    let width = usize::from(width);
    lines
        .iter()
        .map(|l| {
            if width == 0 {
                1
            } else {
                l.width().max(1).div_ceil(width)
            }
        })
        .sum()
}

/// A one-line key hint: key in yellow, description in gray.
pub fn hint_line(pairs: &[(&'static str, &'static str)]) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, (key, desc)) in pairs.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(*key, Style::default().fg(Color::Yellow).bold()));
        spans.push(Span::styled(
            format!(" {desc}"),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

/// Create a centered rectangle as a percentage of the given area.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Draw a global help popup overlay.
pub fn draw_help_popup(frame: &mut Frame) {
    let area = centered_rect(64, 80, frame.area());

    let help_text = vec![
        Line::from("Keyboard Shortcuts").style(Style::default().bold()),
        Line::from(""),
        Line::from("Panels:"),
        Line::from("  1-3 / Tab   Switch panel (Themes, Fate)"),
        Line::from("  Ctrl+1..3   Switch panel (any panel)"),
        Line::from("  F1          Toggle this help"),
        Line::from(""),
        Line::from("Themes:"),
        Line::from("  j / k       Select theme"),
        Line::from("  J / K       Move theme down / up"),
        Line::from("  g           Generate themes"),
        Line::from("  r           Reset order"),
        Line::from(""),
        Line::from("Fate & Oracles:"),
        Line::from("  j / k       Select setting"),
        Line::from("  + / -       Adjust selected setting"),
        Line::from("  r / f / n   Roll dice / Roll fate / Generate NPC"),
        Line::from(""),
        Line::from("Characters & Threads:"),
        Line::from("  Enter       Add typed name"),
        Line::from("  Tab         Switch list"),
        Line::from("  Ctrl+D      Delete selected"),
        Line::from("  Ctrl+R      Choose random"),
        Line::from("  Ctrl+L      Clear output"),
        Line::from(""),
        Line::from("  c           Clear output (Themes, Fate)"),
        Line::from("  q / Ctrl+C  Quit"),
    ];

    let popup = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}
