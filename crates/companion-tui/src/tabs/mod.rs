//! Tab trait and tab bar rendering.

pub mod characters;
pub mod fate;
pub mod themes;

use companion_core::PanelId;
use ratatui::prelude::*;

/// Whether a tab consumes keyboard input or uses vim-like navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Vim-like navigation: hjkl, Tab, number keys. Top-level handles tab switching.
    VimNav,
    /// Text input: the tab has its own input field. Most keys go to the tab.
    TextInput,
}

/// Trait that each tab screen implements.
pub trait Tab {
    /// Return the input mode for event routing.
    fn input_mode(&self) -> InputMode;

    /// Handle a key event. Return `true` if the app should quit.
    fn handle_key(&mut self, key: crossterm::event::KeyEvent) -> bool;

    /// Handle a mouse event.
    fn handle_mouse(&mut self, _mouse: crossterm::event::MouseEvent) {}

    /// Draw the tab content into the given area.
    fn draw(&self, frame: &mut Frame, area: Rect);

    /// Return context-sensitive status bar text.
    fn status_hint(&self) -> &str;

    /// Return the panel to its mount state.
    fn reset(&mut self);
}

/// Tab bar labels in display order.
pub const TAB_TITLES: [&str; 3] = ["[1]Themes", "[2]Fate & Oracles", "[3]Characters & Threads"];

/// Width of the divider drawn between tab titles.
pub const TAB_DIVIDER: &str = " | ";

/// Draw the tab bar.
pub fn draw_tab_bar(frame: &mut Frame, active: PanelId, area: Rect) {
    let active_idx = active.index();
    let mut spans = Vec::new();

    for (i, title) in TAB_TITLES.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(TAB_DIVIDER, Style::default().fg(Color::DarkGray)));
        }

        let style = if i == active_idx {
            Style::default().fg(Color::White).bold()
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(*title, style));
    }

    let line = Line::from(spans);
    let paragraph = ratatui::widgets::Paragraph::new(line);
    frame.render_widget(paragraph, area);
}
