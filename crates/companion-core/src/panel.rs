//! Panel identifiers.

use std::str::FromStr;

use crate::error::CompanionError;

/// One of the three independent panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelId {
    /// Theme ranking and weighted roll.
    Themes,
    /// Dice counters, chaos factor and likelihood.
    Fate,
    /// Character and thread lists.
    Characters,
}

impl PanelId {
    /// All panels in display order.
    pub const ALL: [PanelId; 3] = [PanelId::Themes, PanelId::Fate, PanelId::Characters];

    /// Human-readable panel title.
    pub fn title(self) -> &'static str {
        match self {
            Self::Themes => "Themes",
            Self::Fate => "Fate & Oracles",
            Self::Characters => "Characters & Threads",
        }
    }

    /// Position in [`PanelId::ALL`].
    pub fn index(self) -> usize {
        match self {
            Self::Themes => 0,
            Self::Fate => 1,
            Self::Characters => 2,
        }
    }

    /// The next panel (wrapping).
    pub fn next(self) -> PanelId {
        PanelId::ALL[(self.index() + 1) % PanelId::ALL.len()]
    }

    /// The previous panel (wrapping).
    pub fn prev(self) -> PanelId {
        let len = PanelId::ALL.len();
        PanelId::ALL[(self.index() + len - 1) % len]
    }

    /// Offset mixed into a configured seed so panels draw independent streams.
    pub(crate) fn seed_offset(self) -> u64 {
        self.index() as u64 + 1
    }
}

impl std::fmt::Display for PanelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for PanelId {
    type Err = CompanionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "themes" | "theme" => Ok(Self::Themes),
            "fate" | "oracle" | "oracles" | "dice" => Ok(Self::Fate),
            "characters" | "character" | "threads" | "thread" => Ok(Self::Characters),
            _ => Err(CompanionError::UnknownPanel(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_names() {
        assert_eq!("themes".parse::<PanelId>(), Ok(PanelId::Themes));
        assert_eq!("Oracle".parse::<PanelId>(), Ok(PanelId::Fate));
        assert_eq!("threads".parse::<PanelId>(), Ok(PanelId::Characters));
        assert_eq!(
            "explorer".parse::<PanelId>(),
            Err(CompanionError::UnknownPanel("explorer".to_string()))
        );
    }

    #[test]
    fn index_matches_all() {
        for (i, panel) in PanelId::ALL.iter().enumerate() {
            assert_eq!(panel.index(), i);
        }
    }

    #[test]
    fn next_and_prev_wrap() {
        assert_eq!(PanelId::Themes.next(), PanelId::Fate);
        assert_eq!(PanelId::Characters.next(), PanelId::Themes);
        assert_eq!(PanelId::Themes.prev(), PanelId::Characters);
        for panel in PanelId::ALL {
            assert_eq!(panel.next().prev(), panel);
        }
    }

    #[test]
    fn titles() {
        assert_eq!(PanelId::Fate.to_string(), "Fate & Oracles");
        assert_eq!(PanelId::Characters.title(), "Characters & Threads");
    }
}
