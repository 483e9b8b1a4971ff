//! Themes tab: rank five themes and roll them against their weights.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

use rand::rngs::StdRng;

use companion_core::themes::{THEME_COUNT, weight_for_rank};
use companion_core::{Direction as Move, ThemePanel};

use super::{InputMode, Tab};
use crate::shared::{LogView, draw_log, hint_line};

/// Themes tab state.
pub struct ThemesTab {
    /// Theme order and output log.
    pub panel: ThemePanel,
    /// Highlighted rank.
    pub selected: usize,
    /// Output scroll.
    pub view: LogView,
    rng: StdRng,
}

impl ThemesTab {
    /// Create a themes tab drawing rolls from `rng`.
    pub fn new(rng: StdRng) -> Self {
        Self {
            panel: ThemePanel::new(),
            selected: 0,
            view: LogView::default(),
            rng,
        }
    }

    /// Move the highlighted theme and keep it highlighted.
    pub fn move_selected(&mut self, direction: Move) {
        if self.panel.move_theme(self.selected, direction) {
            self.selected = match direction {
                Move::Up => self.selected - 1,
                Move::Down => self.selected + 1,
            };
        }
    }

    /// Roll every theme.
    pub fn generate(&mut self) {
        self.panel.generate(&mut self.rng);
        self.view.reset();
    }

    fn select_next(&mut self) {
        self.selected = (self.selected + 1).min(THEME_COUNT - 1);
    }

    fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn draw_order(&self, frame: &mut Frame, area: Rect) {
        let order = self.panel.order();
        let items: Vec<ListItem> = order
            .themes()
            .iter()
            .enumerate()
            .map(|(rank, name)| {
                let weight = weight_for_rank(rank).unwrap_or(0);
                let up = if order.can_move(rank, Move::Up) { "\u{2191}" } else { " " };
                let down = if order.can_move(rank, Move::Down) { "\u{2193}" } else { " " };
                let style = if rank == self.selected {
                    Style::default().fg(Color::Black).bg(Color::Yellow).bold()
                } else {
                    Style::default().fg(Color::White)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!(" {}. {name:<10}", rank + 1), style),
                    Span::styled(
                        format!(" {weight:>2}% "),
                        Style::default().fg(Color::Cyan),
                    ),
                    Span::styled(format!("{up}{down}"), Style::default().fg(Color::DarkGray)),
                ]))
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .title(" Theme Order ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Magenta)),
        );
        frame.render_widget(list, area);
    }
}

impl Tab for ThemesTab {
    fn input_mode(&self) -> InputMode {
        InputMode::VimNav
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        let shift = key.modifiers.contains(KeyModifiers::SHIFT);
        match key.code {
            KeyCode::Up if shift => self.move_selected(Move::Up),
            KeyCode::Down if shift => self.move_selected(Move::Down),
            KeyCode::Char('K') => self.move_selected(Move::Up),
            KeyCode::Char('J') => self.move_selected(Move::Down),
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Char('g') | KeyCode::Enter => self.generate(),
            KeyCode::Char('r') => self.panel.reset(),
            KeyCode::Char('c') => {
                self.panel.clear_output();
                self.view.reset();
            }
            KeyCode::PageDown => self.view.scroll_down(),
            KeyCode::PageUp => self.view.scroll_up(),
            _ => {}
        }
        false
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollDown => self.view.scroll_down(),
            MouseEventKind::ScrollUp => self.view.scroll_up(),
            _ => {}
        }
    }

    fn draw(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(THEME_COUNT as u16 + 2), // Order
                Constraint::Length(1),                      // Actions
                Constraint::Min(3),                         // Output
            ])
            .split(area);

        self.draw_order(frame, chunks[0]);

        let actions = if self.panel.order().is_default() {
            hint_line(&[
                ("J/K", "move down/up"),
                ("g", "Generate Themes"),
                ("c", "Clear"),
            ])
        } else {
            hint_line(&[
                ("J/K", "move down/up"),
                ("g", "Generate Themes"),
                ("r", "Reset Order"),
                ("c", "Clear"),
            ])
        };
        frame.render_widget(Paragraph::new(actions), chunks[1]);

        draw_log(frame, self.panel.output(), self.view, chunks[2], Color::Blue);
    }

    fn status_hint(&self) -> &str {
        "j/k:select  J/K:move  g:generate  r:reset order  c:clear  Tab:panel  F1:help  q:quit"
    }

    fn reset(&mut self) {
        self.panel = ThemePanel::new();
        self.selected = 0;
        self.view.reset();
    }
}
