//! Top-level application state owning the three panels.

use companion_core::{CompanionConfig, PanelId};

use crate::tabs::characters::CharactersTab;
use crate::tabs::fate::FateTab;
use crate::tabs::themes::ThemesTab;
use crate::tabs::{InputMode, Tab};

/// Main application state.
pub struct TuiApp {
    /// Settings from the command line.
    pub config: CompanionConfig,
    /// Currently active panel.
    pub active_tab: PanelId,
    /// Whether to show the global help popup.
    pub show_help: bool,
    /// Whether the app should quit.
    pub should_quit: bool,

    /// Themes panel.
    pub themes: ThemesTab,
    /// Fate & Oracles panel.
    pub fate: FateTab,
    /// Characters & Threads panel.
    pub characters: CharactersTab,
}

impl TuiApp {
    /// Create the app with every panel in its mount state.
    pub fn new(config: CompanionConfig, start_tab: PanelId) -> Self {
        let themes = ThemesTab::new(config.rng_for(PanelId::Themes));
        let fate = FateTab::new(&config);
        let characters = CharactersTab::new(config.rng_for(PanelId::Characters));

        Self {
            config,
            active_tab: start_tab,
            show_help: false,
            should_quit: false,
            themes,
            fate,
            characters,
        }
    }

    /// Get the input mode of the currently active tab.
    pub fn active_input_mode(&self) -> InputMode {
        self.active_tab_ref().input_mode()
    }

    /// Get a reference to the active tab.
    pub fn active_tab_ref(&self) -> &dyn Tab {
        self.tab_ref(self.active_tab)
    }

    /// Get a mutable reference to the active tab.
    pub fn active_tab_mut(&mut self) -> &mut dyn Tab {
        self.tab_mut(self.active_tab)
    }

    /// Get a reference to a tab by ID.
    pub fn tab_ref(&self, id: PanelId) -> &dyn Tab {
        match id {
            PanelId::Themes => &self.themes,
            PanelId::Fate => &self.fate,
            PanelId::Characters => &self.characters,
        }
    }

    fn tab_mut(&mut self, id: PanelId) -> &mut dyn Tab {
        match id {
            PanelId::Themes => &mut self.themes,
            PanelId::Fate => &mut self.fate,
            PanelId::Characters => &mut self.characters,
        }
    }

    /// Switch to a tab by ID.
    ///
    /// The tab being left is unmounted and returns to its mount state,
    /// unless the app was started with `keep_panels`.
    pub fn switch_tab(&mut self, tab: PanelId) {
        let previous = self.active_tab;
        if previous == tab {
            return;
        }
        if !self.config.keep_panels {
            self.tab_mut(previous).reset();
        }
        self.active_tab = tab;
        tracing::debug!(
            from = %previous,
            to = %tab,
            kept = self.config.keep_panels,
            "switched panel"
        );
    }
}
