//! Terminal setup, teardown, and main event loop.

use std::io;

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use companion_core::PanelId;

use crate::app::TuiApp;
use crate::error::TuiError;
use crate::tabs::{self, InputMode, TAB_DIVIDER, TAB_TITLES};

/// Launch the TUI application. The terminal is restored even when the loop fails.
pub fn run(mut app: TuiApp) -> Result<(), TuiError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    tracing::info!(panel = %app.active_tab, "session started");
    let result = run_loop(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .ok();
    terminal.show_cursor().ok();

    match &result {
        Ok(()) => tracing::info!("session ended"),
        Err(e) => tracing::error!(error = %e, "session aborted"),
    }
    result
}

/// Main event loop.
fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut TuiApp,
) -> Result<(), TuiError> {
    loop {
        terminal.draw(|frame| draw(frame, app))?;

        if app.should_quit {
            return Ok(());
        }

        let event = event::read()?;
        handle_event(app, event);
    }
}

/// Handle a crossterm event.
pub fn handle_event(app: &mut TuiApp, event: Event) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Mouse(mouse) => handle_mouse(app, mouse),
        _ => {}
    }
}

/// Handle keyboard input with mode-aware tab switching.
fn handle_key(app: &mut TuiApp, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if ctrl && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    // Ctrl+number switches tabs from any mode
    if let Some(tab) = ctrl.then_some(key.code).and_then(ctrl_number_to_tab) {
        app.switch_tab(tab);
        return;
    }

    if key.code == KeyCode::F(1) {
        app.show_help = !app.show_help;
        return;
    }

    // The help popup covers the tab, so keys do not reach it
    if app.show_help {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
            app.show_help = false;
        }
        return;
    }

    match app.active_input_mode() {
        InputMode::VimNav => {
            match key.code {
                KeyCode::Char('q') => {
                    app.should_quit = true;
                    return;
                }
                KeyCode::Char('?') => {
                    app.show_help = !app.show_help;
                    return;
                }
                KeyCode::Tab => {
                    app.switch_tab(app.active_tab.next());
                    return;
                }
                KeyCode::BackTab => {
                    app.switch_tab(app.active_tab.prev());
                    return;
                }
                _ => {}
            }
            if let Some(tab) = number_to_tab(key.code) {
                app.switch_tab(tab);
                return;
            }
            if app.active_tab_mut().handle_key(key) {
                app.should_quit = true;
            }
        }
        InputMode::TextInput => {
            if app.active_tab_mut().handle_key(key) {
                app.should_quit = true;
            }
        }
    }
}

/// Map a plain digit to a tab.
fn number_to_tab(code: KeyCode) -> Option<PanelId> {
    match code {
        KeyCode::Char(c) => {
            let idx = c.to_digit(10)? as usize;
            PanelId::ALL.get(idx.checked_sub(1)?).copied()
        }
        _ => None,
    }
}

/// Map Ctrl+digit to a tab.
fn ctrl_number_to_tab(code: KeyCode) -> Option<PanelId> {
    match code {
        KeyCode::Char('1') => Some(PanelId::Themes),
        KeyCode::Char('2') => Some(PanelId::Fate),
        KeyCode::Char('3') => Some(PanelId::Characters),
        _ => None,
    }
}

/// Handle mouse events.
fn handle_mouse(app: &mut TuiApp, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            // Tab bar is row 0
            let hit = (mouse.row == 0).then_some(mouse.column).and_then(tab_bar_hit_test);
            if let Some(tab) = hit {
                app.switch_tab(tab);
                return;
            }
            app.active_tab_mut().handle_mouse(mouse);
        }
        MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => {
            app.active_tab_mut().handle_mouse(mouse);
        }
        _ => {}
    }
}

/// Hit-test the tab bar for mouse clicks.
fn tab_bar_hit_test(col: u16) -> Option<PanelId> {
    let divider_len = TAB_DIVIDER.len() as u16;

    let mut x = 0u16;
    for (i, title) in TAB_TITLES.iter().enumerate() {
        let end_x = x + title.len() as u16;
        if col >= x && col < end_x {
            return PanelId::ALL.get(i).copied();
        }
        x = end_x + divider_len;
    }

    None
}

/// Main draw function.
pub fn draw(frame: &mut Frame, app: &TuiApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tab bar
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    tabs::draw_tab_bar(frame, app.active_tab, chunks[0]);

    app.active_tab_ref().draw(frame, chunks[1]);

    let hint = app.active_tab_ref().status_hint();
    let status = Paragraph::new(hint).style(Style::default().fg(Color::Black).bg(Color::White));
    frame.render_widget(status, chunks[2]);

    if app.show_help {
        crate::shared::draw_help_popup(frame);
    }
}
