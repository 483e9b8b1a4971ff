//! Characters & Threads tab: two capped lists with text entry and random picks.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use rand::rngs::StdRng;

use companion_core::{ItemKind, TrackerPanel};

use super::{InputMode, Tab};
use crate::shared::{LogView, draw_log, hint_line};

/// Characters tab state.
pub struct CharactersTab {
    /// Lists, pending input and output log.
    pub panel: TrackerPanel,
    /// List receiving typed text and list commands.
    pub focus: ItemKind,
    /// Output scroll.
    pub view: LogView,
    selected: [usize; 2],
    rng: StdRng,
}

fn slot(kind: ItemKind) -> usize {
    match kind {
        ItemKind::Character => 0,
        ItemKind::Thread => 1,
    }
}

impl CharactersTab {
    /// Create a tracker tab drawing random picks from `rng`.
    pub fn new(rng: StdRng) -> Self {
        Self {
            panel: TrackerPanel::new(),
            focus: ItemKind::Character,
            view: LogView::default(),
            selected: [0; 2],
            rng,
        }
    }

    /// Highlighted row in the given list.
    pub fn selected(&self, kind: ItemKind) -> usize {
        self.selected[slot(kind)]
    }

    /// Submit the focused list's pending input.
    pub fn submit(&mut self) -> bool {
        self.panel.add_pending(self.focus)
    }

    /// Delete the highlighted item of the focused list.
    pub fn delete_selected(&mut self) -> Option<String> {
        let kind = self.focus;
        let removed = self.panel.delete(kind, self.selected(kind))?;
        let len = self.panel.list(kind).len();
        self.selected[slot(kind)] = self.selected(kind).min(len.saturating_sub(1));
        Some(removed)
    }

    /// Pick a random item from the focused list.
    pub fn choose_random(&mut self) -> Option<String> {
        let picked = self.panel.choose_random(self.focus, &mut self.rng);
        if picked.is_some() {
            self.view.reset();
        }
        picked
    }

    fn select_next(&mut self) {
        let len = self.panel.list(self.focus).len();
        let sel = &mut self.selected[slot(self.focus)];
        *sel = (*sel + 1).min(len.saturating_sub(1));
    }

    fn select_prev(&mut self) {
        let sel = &mut self.selected[slot(self.focus)];
        *sel = sel.saturating_sub(1);
    }

    fn handle_ctrl(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('d') => {
                self.delete_selected();
            }
            KeyCode::Char('r') => {
                self.choose_random();
            }
            KeyCode::Char('l') => {
                self.panel.clear_output();
                self.view.reset();
            }
            _ => {}
        }
    }

    fn draw_column(&self, frame: &mut Frame, kind: ItemKind, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(3)])
            .split(area);

        let focused = kind == self.focus;
        let border = if focused { Color::Green } else { Color::DarkGray };
        let list = self.panel.list(kind);

        let items: Vec<ListItem> = list
            .items()
            .iter()
            .enumerate()
            .map(|(i, item)| ListItem::new(format!("{:>2}. {item}", i + 1)))
            .collect();
        let title = format!(" {kind} ({}/{}) ", list.len(), list.capacity());
        let widget = List::new(items)
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border)),
            )
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            );
        let mut state = ListState::default();
        if focused && !list.is_empty() {
            state.select(Some(self.selected(kind)));
        }
        frame.render_stateful_widget(widget, chunks[0], &mut state);

        let input_area = chunks[1];
        let input_title = if list.is_full() {
            format!(" {} list full ", kind.noun())
        } else {
            format!(" New {} ", kind.noun())
        };
        let input = Paragraph::new(format!("> {}", self.panel.input(kind))).block(
            Block::default()
                .title(input_title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        );
        frame.render_widget(input, input_area);

        if focused {
            // 1 for the border, 2 for the "> " prefix
            let typed =
                u16::try_from(self.panel.input(kind).chars().count()).unwrap_or(u16::MAX);
            let cursor_x = input_area.x.saturating_add(3).saturating_add(typed);
            let cursor_y = input_area.y.saturating_add(1);
            if cursor_x < input_area.right().saturating_sub(1) {
                frame.set_cursor_position(Position::new(cursor_x, cursor_y));
            }
        }
    }
}

impl Tab for CharactersTab {
    fn input_mode(&self) -> InputMode {
        InputMode::TextInput
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            self.handle_ctrl(key.code);
            return false;
        }
        match key.code {
            KeyCode::Enter => {
                self.submit();
            }
            KeyCode::Esc => self.panel.input_mut(self.focus).clear(),
            KeyCode::Backspace => {
                self.panel.input_mut(self.focus).pop();
            }
            KeyCode::Tab | KeyCode::BackTab => self.focus = self.focus.other(),
            KeyCode::Down => self.select_next(),
            KeyCode::Up => self.select_prev(),
            KeyCode::Delete => {
                self.delete_selected();
            }
            KeyCode::PageDown => self.view.scroll_down(),
            KeyCode::PageUp => self.view.scroll_up(),
            KeyCode::Char(c) => self.panel.input_mut(self.focus).push(c),
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
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(60),
                Constraint::Length(1),
                Constraint::Min(3),
            ])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[0]);

        for (kind, column) in ItemKind::ALL.into_iter().zip(columns.iter()) {
            self.draw_column(frame, kind, *column);
        }

        let actions = if self.panel.can_choose(self.focus) {
            hint_line(&[
                ("Enter", "Add"),
                ("Ctrl+D", "Delete"),
                ("Ctrl+R", "Choose Random"),
                ("Ctrl+L", "Clear"),
            ])
        } else {
            hint_line(&[("Enter", "Add"), ("Ctrl+L", "Clear")])
        };
        frame.render_widget(Paragraph::new(actions), rows[1]);

        draw_log(frame, self.panel.output(), self.view, rows[2], Color::Green);
    }

    fn status_hint(&self) -> &str {
        "type:name  Enter:add  Tab:list  \u{2191}\u{2193}:select  Ctrl+D:delete  Ctrl+R:random  Ctrl+L:clear  F1:help"
    }

    fn reset(&mut self) {
        self.panel = TrackerPanel::new();
        self.focus = ItemKind::Character;
        self.selected = [0; 2];
        self.view.reset();
    }
}
