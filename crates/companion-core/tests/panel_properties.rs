//! Property and statistical checks for panel state.

use companion_core::list::DEFAULT_CAPACITY;
use companion_core::themes::{DEFAULT_THEMES, THEME_COUNT, THEME_WEIGHTS};
use companion_core::{
    DiceKind, Direction, FatePanel, ItemKind, ItemList, ThemeOrder, ThemePanel, TrackerPanel,
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn names(order: &ThemeOrder) -> Vec<String> {
    order.themes().to_vec()
}

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::Up), Just(Direction::Down)]
}

// ---------------------------------------------------------------------------
// random selection
// ---------------------------------------------------------------------------

#[test]
fn selection_is_uniform_over_four_items() {
    let mut list = ItemList::new();
    for name in ["Kael", "Mira", "Toma", "Vess"] {
        list.add(name);
    }
    let mut rng = StdRng::seed_from_u64(2024);
    let trials = 10_000;
    let mut counts = [0u32; 4];
    for _ in 0..trials {
        let picked = list.pick(&mut rng).unwrap();
        let idx = list.items().iter().position(|n| n == picked).unwrap();
        counts[idx] += 1;
    }

    // 25% +/- 2.5 points is more than five standard deviations at n=10000
    for (i, count) in counts.iter().enumerate() {
        let freq = f64::from(*count) / f64::from(trials);
        assert!(
            (0.225..=0.275).contains(&freq),
            "item {i} drawn with frequency {freq}"
        );
    }
}

#[test]
fn selection_log_grows_newest_first() {
    let mut panel = TrackerPanel::new();
    panel.add(ItemKind::Thread, "Find the artifact");
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..3 {
        panel.choose_random(ItemKind::Thread, &mut rng);
    }
    panel.add(ItemKind::Character, "Kael");
    panel.choose_random(ItemKind::Character, &mut rng);

    let entries = panel.output().entries();
    assert_eq!(entries.len(), 4);
    assert_eq!(entries[0], "Selected character: Kael");
    assert!(
        entries[1..]
            .iter()
            .all(|e| e == "Selected thread: Find the artifact")
    );
}

// ---------------------------------------------------------------------------
// theme generation
// ---------------------------------------------------------------------------

#[test]
fn generation_replaces_output_in_rank_order() {
    let mut panel = ThemePanel::new();
    let mut rng = StdRng::seed_from_u64(77);
    for _ in 0..50 {
        panel.generate(&mut rng);
        let lines = panel.output().entries();
        assert_eq!(lines.len(), THEME_COUNT);
        for (rank, line) in lines.iter().enumerate() {
            let prefix = format!(
                "Theme: {}, Weight: {}%, Roll: ",
                DEFAULT_THEMES[rank], THEME_WEIGHTS[rank]
            );
            let roll: u32 = line
                .strip_prefix(&prefix)
                .and_then(|r| r.parse().ok())
                .unwrap_or_else(|| panic!("unexpected line {line:?}"));
            assert!((1..=100).contains(&roll));
        }
    }
}

// ---------------------------------------------------------------------------
// dice
// ---------------------------------------------------------------------------

#[test]
fn action_dice_counting_up() {
    let mut panel = FatePanel::new();
    for _ in 0..9 {
        panel.adjust_dice(DiceKind::Action, 1);
    }
    assert_eq!(panel.dice().count(DiceKind::Action), 9);
    panel.adjust_dice(DiceKind::Action, 1);
    assert_eq!(panel.dice().count(DiceKind::Action), 10);
    panel.adjust_dice(DiceKind::Action, 1);
    assert_eq!(panel.dice().count(DiceKind::Action), 10);
}

// ---------------------------------------------------------------------------
// properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn blank_input_never_changes_list(
        existing in prop::collection::vec("[a-z]{1,8}", 0..10),
        blank in "[ \t\n]{0,6}",
    ) {
        let mut list = ItemList::new();
        for name in &existing {
            list.add(name);
        }
        let before = list.clone();
        prop_assert!(!list.add(&blank));
        prop_assert_eq!(list, before);
    }

    #[test]
    fn full_list_stays_at_capacity(extra in "\\PC{1,20}") {
        let mut list = ItemList::new();
        for i in 0..DEFAULT_CAPACITY {
            list.add(&format!("item {i}"));
        }
        list.add(&extra);
        prop_assert_eq!(list.len(), DEFAULT_CAPACITY);
    }

    #[test]
    fn delete_preserves_relative_order(
        items in prop::collection::vec("[a-z]{1,6}", 1..DEFAULT_CAPACITY),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut list = ItemList::new();
        for name in &items {
            list.add(name);
        }
        let idx = pick.index(items.len());
        let removed = list.delete(idx);

        let mut expected = items.clone();
        let expected_removed = expected.remove(idx);
        prop_assert_eq!(removed, Some(expected_removed));
        prop_assert_eq!(list.len(), items.len() - 1);
        prop_assert_eq!(list.items(), expected.as_slice());
    }

    #[test]
    fn boundary_moves_are_noops(moves in prop::collection::vec((0..THEME_COUNT, direction()), 0..20)) {
        let mut order = ThemeOrder::new();
        for (idx, dir) in moves {
            order.move_theme(idx, dir);
        }
        let before = names(&order);
        prop_assert!(!order.move_theme(0, Direction::Up));
        prop_assert!(!order.move_theme(THEME_COUNT - 1, Direction::Down));
        prop_assert_eq!(names(&order), before);
    }

    #[test]
    fn adjacent_moves_are_self_inverse(
        moves in prop::collection::vec((0..THEME_COUNT, direction()), 0..20),
        i in 0..THEME_COUNT - 1,
    ) {
        let mut order = ThemeOrder::new();
        for (idx, dir) in moves {
            order.move_theme(idx, dir);
        }
        let before = names(&order);
        prop_assert!(order.move_theme(i, Direction::Down));
        prop_assert!(order.move_theme(i + 1, Direction::Up));
        prop_assert_eq!(names(&order), before);
    }

    #[test]
    fn reset_always_restores_default(moves in prop::collection::vec((0..10usize, direction()), 0..40)) {
        let mut order = ThemeOrder::new();
        for (idx, dir) in moves {
            order.move_theme(idx, dir);
        }
        prop_assert_eq!(order.themes().len(), THEME_COUNT);
        order.reset();
        prop_assert_eq!(names(&order), DEFAULT_THEMES.map(String::from).to_vec());
    }

    #[test]
    fn dice_always_within_bounds(deltas in prop::collection::vec(any::<i32>(), 0..30)) {
        let mut panel = FatePanel::new();
        for d in deltas {
            let count = panel.adjust_dice(DiceKind::Danger, d);
            prop_assert!(count <= 10);
        }
    }

    #[test]
    fn clear_always_empties(lines in prop::collection::vec("\\PC{0,30}", 0..20)) {
        let mut panel = FatePanel::new();
        for _ in &lines {
            panel.roll_dice();
        }
        panel.clear_output();
        prop_assert!(panel.output().is_empty());
    }
}
