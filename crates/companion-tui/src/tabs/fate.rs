//! Fate & Oracles tab: dice counters, chaos factor and likelihood selectors.

use crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use companion_core::fate::MAX_DICE;
use companion_core::{
    ChaosFactor, CompanionConfig, DiceKind, FatePanel, Likelihood, OracleConfig,
};

use super::{InputMode, Tab};
use crate::shared::{LogView, draw_log, hint_line};

/// The setting that `+`/`-` and the arrow keys act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FateField {
    /// Action dice counter.
    ActionDice,
    /// Danger dice counter.
    DangerDice,
    /// Chaos factor selector.
    Chaos,
    /// Likelihood selector.
    Likelihood,
}

impl FateField {
    const ALL: [FateField; 4] = [
        FateField::ActionDice,
        FateField::DangerDice,
        FateField::Chaos,
        FateField::Likelihood,
    ];

    fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ALL[(self.index() + 1).min(Self::ALL.len() - 1)]
    }

    fn prev(self) -> Self {
        Self::ALL[self.index().saturating_sub(1)]
    }

    fn label(self) -> &'static str {
        match self {
            FateField::ActionDice => "Action Dice",
            FateField::DangerDice => "Danger Dice",
            FateField::Chaos => "Chaos Factor",
            FateField::Likelihood => "Likelihood",
        }
    }
}

/// Fate tab state.
pub struct FateTab {
    /// Dice, oracle selection and output log.
    pub panel: FatePanel,
    /// Focused setting.
    pub focus: FateField,
    /// Output scroll.
    pub view: LogView,
    initial: OracleConfig,
}

impl FateTab {
    /// Create a fate tab mounted with the configured oracle selection.
    pub fn new(config: &CompanionConfig) -> Self {
        Self {
            panel: config.fate_panel(),
            focus: FateField::ActionDice,
            view: LogView::default(),
            initial: config.initial_oracle(),
        }
    }

    /// Step the focused setting by `delta`.
    pub fn adjust_focused(&mut self, delta: i32) {
        match self.focus {
            FateField::ActionDice => {
                self.panel.adjust_dice(DiceKind::Action, delta);
            }
            FateField::DangerDice => {
                self.panel.adjust_dice(DiceKind::Danger, delta);
            }
            FateField::Chaos => self.panel.cycle_chaos(delta),
            FateField::Likelihood => self.panel.cycle_likelihood(delta),
        }
    }

    fn value_text(&self, field: FateField) -> String {
        let dice = self.panel.dice();
        let oracle = self.panel.oracle();
        match field {
            FateField::ActionDice => {
                format!("{} / {MAX_DICE}", dice.count(DiceKind::Action))
            }
            FateField::DangerDice => {
                format!("{} / {MAX_DICE}", dice.count(DiceKind::Danger))
            }
            FateField::Chaos => {
                format!("{} ({}-{})", oracle.chaos, ChaosFactor::MIN, ChaosFactor::MAX)
            }
            FateField::Likelihood => format!(
                "{} ({}/{})",
                oracle.likelihood,
                oracle.likelihood.index() + 1,
                Likelihood::ALL.len()
            ),
        }
    }

    fn draw_settings(&self, frame: &mut Frame, area: Rect) {
        let lines: Vec<Line> = FateField::ALL
            .iter()
            .map(|&field| {
                let focused = field == self.focus;
                let marker = if focused { "> " } else { "  " };
                let label_style = if focused {
                    Style::default().fg(Color::Yellow).bold()
                } else {
                    Style::default().fg(Color::Gray)
                };
                Line::from(vec![
                    Span::styled(format!("{marker}{:<14}", field.label()), label_style),
                    Span::styled(
                        format!("\u{25c2} {} \u{25b8}", self.value_text(field)),
                        Style::default().fg(Color::Cyan),
                    ),
                ])
            })
            .collect();

        let block = Block::default()
            .title(" Dice & Oracle ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red));
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

impl Tab for FateTab {
    fn input_mode(&self) -> InputMode {
        InputMode::VimNav
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.focus = self.focus.next(),
            KeyCode::Up | KeyCode::Char('k') => self.focus = self.focus.prev(),
            KeyCode::Right | KeyCode::Char('l' | '+' | '=') => self.adjust_focused(1),
            KeyCode::Left | KeyCode::Char('h' | '-') => self.adjust_focused(-1),
            KeyCode::Char('r') => {
                self.panel.roll_dice();
                self.view.reset();
            }
            KeyCode::Char('f') => {
                self.panel.roll_fate();
                self.view.reset();
            }
            KeyCode::Char('n') => {
                self.panel.generate_npc();
                self.view.reset();
            }
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
                Constraint::Length(FateField::ALL.len() as u16 + 2),
                Constraint::Length(1),
                Constraint::Min(3),
            ])
            .split(area);

        self.draw_settings(frame, chunks[0]);

        let actions = hint_line(&[
            ("r", "Roll Dice"),
            ("f", "Roll Fate"),
            ("n", "Generate NPC"),
            ("c", "Clear"),
        ]);
        frame.render_widget(Paragraph::new(actions), chunks[1]);

        draw_log(frame, self.panel.output(), self.view, chunks[2], Color::Red);
    }

    fn status_hint(&self) -> &str {
        "j/k:setting  +/-:adjust  r:roll dice  f:roll fate  n:npc  c:clear  Tab:panel  F1:help  q:quit"
    }

    fn reset(&mut self) {
        self.panel = FatePanel::with_oracle(self.initial);
        self.focus = FateField::ActionDice;
        self.view.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_support::render;
    use crossterm::event::KeyModifiers;

    fn tab() -> FateTab {
        FateTab::new(&CompanionConfig::default())
    }

    fn press(tab: &mut FateTab, code: KeyCode) {
        tab.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn focus_moves_without_wrapping() {
        let mut t = tab();
        press(&mut t, KeyCode::Char('k'));
        assert_eq!(t.focus, FateField::ActionDice);
        for _ in 0..6 {
            press(&mut t, KeyCode::Char('j'));
        }
        assert_eq!(t.focus, FateField::Likelihood);
    }

    #[test]
    fn plus_minus_adjust_dice() {
        let mut t = tab();
        for _ in 0..12 {
            press(&mut t, KeyCode::Char('+'));
        }
        assert_eq!(t.panel.dice().count(DiceKind::Action), MAX_DICE);

        press(&mut t, KeyCode::Down);
        press(&mut t, KeyCode::Char('-'));
        assert_eq!(t.panel.dice().count(DiceKind::Danger), 0);
        press(&mut t, KeyCode::Char('='));
        assert_eq!(t.panel.dice().count(DiceKind::Danger), 1);
    }

    #[test]
    fn arrows_step_selectors() {
        let mut t = tab();
        t.focus = FateField::Chaos;
        press(&mut t, KeyCode::Right);
        assert_eq!(t.panel.oracle().chaos.value(), 6);
        for _ in 0..10 {
            press(&mut t, KeyCode::Right);
        }
        assert_eq!(t.panel.oracle().chaos.value(), ChaosFactor::MAX);

        t.focus = FateField::Likelihood;
        press(&mut t, KeyCode::Left);
        assert_eq!(t.panel.oracle().likelihood, Likelihood::Likely);
    }

    #[test]
    fn roll_keys_prepend() {
        let mut t = tab();
        press(&mut t, KeyCode::Char('+'));
        press(&mut t, KeyCode::Char('r'));
        press(&mut t, KeyCode::Char('f'));
        press(&mut t, KeyCode::Char('n'));
        let entries = t.panel.output().entries();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0], "Generating NPC...");
        assert_eq!(
            entries[1],
            "Fate check with Chaos Factor 5 and likelihood 50/50..."
        );
        assert_eq!(entries[2], "Rolling 1 action dice and 0 danger dice...");

        press(&mut t, KeyCode::Char('c'));
        assert!(t.panel.output().is_empty());
    }

    #[test]
    fn reset_restores_configured_oracle() {
        let config = CompanionConfig::default()
            .with_chaos(7)
            .with_likelihood(Likelihood::Unlikely);
        let initial = OracleConfig::new(ChaosFactor::new(7), Likelihood::Unlikely);
        let mut t = FateTab::new(&config);
        press(&mut t, KeyCode::Char('+'));
        t.focus = FateField::Chaos;
        press(&mut t, KeyCode::Left);
        press(&mut t, KeyCode::Char('n'));

        t.reset();
        assert_eq!(*t.panel.oracle(), initial);
        assert_eq!(t.panel.dice().count(DiceKind::Action), 0);
        assert!(t.panel.output().is_empty());
        assert_eq!(t.focus, FateField::ActionDice);
    }

    #[test]
    fn long_session_draws_in_tiny_terminal() {
        let mut t = tab();
        for _ in 0..1_700 {
            press(&mut t, KeyCode::Char('f'));
        }
        for _ in 0..10 {
            press(&mut t, KeyCode::PageDown);
        }
        let backend = ratatui::backend::TestBackend::new(3, 20);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        terminal.draw(|frame| t.draw(frame, frame.area())).unwrap();
    }

    #[test]
    fn draw_shows_settings() {
        let mut t = tab();
        let screen = render(&t);
        assert!(screen.contains("Dice & Oracle"));
        assert!(screen.contains("> Action Dice"));
        assert!(screen.contains("0 / 10"));
        assert!(screen.contains("5 (1-9)"));
        assert!(screen.contains("50/50 (5/9)"));

        press(&mut t, KeyCode::Char('f'));
        let screen = render(&t);
        assert!(screen.contains("Fate check with Chaos Factor 5"));
    }
}
