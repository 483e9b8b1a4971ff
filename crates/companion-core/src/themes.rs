//! Theme ranking and the weighted theme roll.
//!
//! Five themes are ranked by the player. Each rank carries a fixed weight
//! percentage; the weight follows the position, so moving a theme up makes
//! it weigh more. Generating rolls a d100 for every rank and shows it next
//! to the weight. The roll is not compared against the weight.

use rand::Rng;
use rand::rngs::StdRng;

use crate::log::OutputLog;

/// Number of ranked themes.
pub const THEME_COUNT: usize = 5;

/// Starting order of the themes.
pub const DEFAULT_THEMES: [&str; THEME_COUNT] =
    ["Action", "Mystery", "Personal", "Social", "Tension"];

/// Weight percentage for each rank, highest rank first.
pub const THEME_WEIGHTS: [u32; THEME_COUNT] = [40, 30, 20, 8, 2];

/// Direction of a single-step reorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards rank 0 (index - 1).
    Up,
    /// Towards the last rank (index + 1).
    Down,
}

/// Weight for the theme at `rank`, if the rank exists.
pub fn weight_for_rank(rank: usize) -> Option<u32> {
    THEME_WEIGHTS.get(rank).copied()
}

/// The current ranking of the five themes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeOrder {
    themes: [String; THEME_COUNT],
}

impl Default for ThemeOrder {
    fn default() -> Self {
        Self {
            themes: DEFAULT_THEMES.map(String::from),
        }
    }
}

impl ThemeOrder {
    /// The default order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Themes in rank order.
    pub fn themes(&self) -> &[String] {
        &self.themes
    }

    /// The index `index` would move to, if the move stays in bounds.
    fn target(index: usize, direction: Direction) -> Option<usize> {
        let target = match direction {
            Direction::Up => index.checked_sub(1)?,
            Direction::Down => index.checked_add(1)?,
        };
        (index < THEME_COUNT && target < THEME_COUNT).then_some(target)
    }

    /// Whether `index` can move one step in `direction`.
    pub fn can_move(&self, index: usize, direction: Direction) -> bool {
        Self::target(index, direction).is_some()
    }

    /// Swap the theme at `index` with its neighbour in `direction`.
    ///
    /// Moving the first theme up, the last theme down or an index past the
    /// end does nothing. Returns `true` if the order changed.
    pub fn move_theme(&mut self, index: usize, direction: Direction) -> bool {
        let Some(target) = Self::target(index, direction) else {
            tracing::trace!(index, ?direction, "theme move out of bounds");
            return false;
        };
        self.themes.swap(index, target);
        true
    }

    /// Restore the default order.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether the order matches the default.
    pub fn is_default(&self) -> bool {
        self.themes.iter().zip(DEFAULT_THEMES).all(|(a, b)| a == b)
    }
}

/// One line of a theme generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeRoll {
    /// Theme name.
    pub name: String,
    /// Weight of the theme's rank, in percent.
    pub weight: u32,
    /// The d100 roll (1-100).
    pub roll: u32,
}

impl std::fmt::Display for ThemeRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Theme: {}, Weight: {}%, Roll: {}",
            self.name, self.weight, self.roll
        )
    }
}

/// Roll a d100 for every theme in rank order.
pub fn roll_themes(order: &ThemeOrder, rng: &mut StdRng) -> Vec<ThemeRoll> {
    order
        .themes()
        .iter()
        .zip(THEME_WEIGHTS)
        .map(|(name, weight)| ThemeRoll {
            name: name.clone(),
            weight,
            roll: rng.random_range(1..=100),
        })
        .collect()
}

/// State of the themes panel.
#[derive(Debug, Clone, Default)]
pub struct ThemePanel {
    order: ThemeOrder,
    output: OutputLog,
}

impl ThemePanel {
    /// Create a panel with the default order and an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current theme order.
    pub fn order(&self) -> &ThemeOrder {
        &self.order
    }

    /// Move a theme one rank. See [`ThemeOrder::move_theme`].
    pub fn move_theme(&mut self, index: usize, direction: Direction) -> bool {
        let moved = self.order.move_theme(index, direction);
        if moved {
            tracing::debug!(index, ?direction, order = ?self.order.themes(), "theme moved");
        }
        moved
    }

    /// Restore the default order. The output log is kept.
    pub fn reset(&mut self) {
        self.order.reset();
        tracing::debug!("theme order reset");
    }

    /// Roll every theme and replace the output log with the results.
    pub fn generate(&mut self, rng: &mut StdRng) -> Vec<ThemeRoll> {
        let rolls = roll_themes(&self.order, rng);
        self.output.replace(rolls.iter().map(ToString::to_string));
        tracing::debug!(count = rolls.len(), "themes generated");
        rolls
    }

    /// The output log.
    pub fn output(&self) -> &OutputLog {
        &self.output
    }

    /// Empty the output log.
    pub fn clear_output(&mut self) {
        self.output.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn names(order: &ThemeOrder) -> Vec<&str> {
        order.themes().iter().map(String::as_str).collect()
    }

    #[test]
    fn default_order() {
        let order = ThemeOrder::new();
        assert_eq!(names(&order), DEFAULT_THEMES);
        assert!(order.is_default());
    }

    #[test]
    fn move_down_swaps_neighbours() {
        let mut order = ThemeOrder::new();
        assert!(order.move_theme(0, Direction::Down));
        assert_eq!(
            names(&order),
            ["Mystery", "Action", "Personal", "Social", "Tension"]
        );
    }

    #[test]
    fn move_up_swaps_neighbours() {
        let mut order = ThemeOrder::new();
        assert!(order.move_theme(4, Direction::Up));
        assert_eq!(
            names(&order),
            ["Action", "Mystery", "Personal", "Tension", "Social"]
        );
    }

    #[test]
    fn boundary_moves_ignored() {
        let mut order = ThemeOrder::new();
        assert!(!order.can_move(0, Direction::Up));
        assert!(!order.can_move(4, Direction::Down));
        assert!(!order.move_theme(0, Direction::Up));
        assert!(!order.move_theme(4, Direction::Down));
        assert!(!order.move_theme(5, Direction::Up));
        assert!(!order.move_theme(99, Direction::Down));
        assert!(order.is_default());
    }

    #[test]
    fn reset_restores_default() {
        let mut order = ThemeOrder::new();
        order.move_theme(1, Direction::Down);
        order.move_theme(3, Direction::Up);
        assert!(!order.is_default());
        order.reset();
        assert_eq!(names(&order), DEFAULT_THEMES);
    }

    #[test]
    fn weights_follow_rank() {
        assert_eq!(weight_for_rank(0), Some(40));
        assert_eq!(weight_for_rank(4), Some(2));
        assert_eq!(weight_for_rank(5), None);
        assert_eq!(THEME_WEIGHTS.iter().sum::<u32>(), 100);
    }

    #[test]
    fn roll_line_format() {
        let roll = ThemeRoll {
            name: "Mystery".to_string(),
            weight: 30,
            roll: 77,
        };
        assert_eq!(roll.to_string(), "Theme: Mystery, Weight: 30%, Roll: 77");
    }

    #[test]
    fn generate_default_order() {
        let mut panel = ThemePanel::new();
        let mut rng = StdRng::seed_from_u64(42);
        let rolls = panel.generate(&mut rng);

        assert_eq!(rolls.len(), 5);
        let lines = panel.output().entries();
        assert_eq!(lines.len(), 5);
        for (i, (line, roll)) in lines.iter().zip(&rolls).enumerate() {
            assert_eq!(roll.name, DEFAULT_THEMES[i]);
            assert_eq!(roll.weight, THEME_WEIGHTS[i]);
            assert!((1..=100).contains(&roll.roll));
            assert_eq!(
                *line,
                format!(
                    "Theme: {}, Weight: {}%, Roll: {}",
                    DEFAULT_THEMES[i], THEME_WEIGHTS[i], roll.roll
                )
            );
        }
        assert!(lines[0].starts_with("Theme: Action, Weight: 40%, Roll: "));
        assert!(lines[4].starts_with("Theme: Tension, Weight: 2%, Roll: "));
    }

    #[test]
    fn generate_replaces_output() {
        let mut panel = ThemePanel::new();
        let mut rng = StdRng::seed_from_u64(3);
        let first = panel.generate(&mut rng);
        let second = panel.generate(&mut rng);
        assert_eq!(panel.output().len(), 5);
        let expected: Vec<String> = second.iter().map(ToString::to_string).collect();
        assert_eq!(panel.output().entries(), expected.as_slice());
        assert_eq!(first.len(), 5);
    }

    #[test]
    fn weight_moves_with_position() {
        let mut panel = ThemePanel::new();
        panel.move_theme(4, Direction::Up);
        panel.move_theme(3, Direction::Up);
        panel.move_theme(2, Direction::Up);
        panel.move_theme(1, Direction::Up);
        assert_eq!(panel.order().themes()[0], "Tension");

        let mut rng = StdRng::seed_from_u64(9);
        let rolls = panel.generate(&mut rng);
        assert_eq!(rolls[0].name, "Tension");
        assert_eq!(rolls[0].weight, 40);
        assert_eq!(rolls[1].name, "Action");
        assert_eq!(rolls[1].weight, 30);
    }

    #[test]
    fn reset_keeps_output() {
        let mut panel = ThemePanel::new();
        let mut rng = StdRng::seed_from_u64(5);
        panel.generate(&mut rng);
        panel.move_theme(0, Direction::Down);
        panel.reset();
        assert!(panel.order().is_default());
        assert_eq!(panel.output().len(), 5);
        panel.clear_output();
        assert!(panel.output().is_empty());
    }

    #[test]
    fn rolls_cover_full_range() {
        let order = ThemeOrder::new();
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen_low = false;
        let mut seen_high = false;
        for _ in 0..2000 {
            for roll in roll_themes(&order, &mut rng) {
                assert!((1..=100).contains(&roll.roll));
                seen_low |= roll.roll <= 5;
                seen_high |= roll.roll >= 96;
            }
        }
        assert!(seen_low && seen_high);
    }
}
