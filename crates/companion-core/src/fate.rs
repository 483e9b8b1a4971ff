//! Fate & oracle panel: dice counters, chaos factor and likelihood.
//!
//! The roll actions here only describe the current configuration. They do
//! not roll dice, consult a fate chart or build an NPC; each writes a single
//! placeholder line to the panel's log.

use std::str::FromStr;

use crate::error::CompanionError;
use crate::log::OutputLog;

/// Upper bound for either dice counter.
pub const MAX_DICE: u32 = 10;

/// Which dice counter to adjust.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiceKind {
    /// Dice the player rolls for the attempt.
    Action,
    /// Dice that cancel action dice.
    Danger,
}

impl std::fmt::Display for DiceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Action => write!(f, "Action Dice"),
            Self::Danger => write!(f, "Danger Dice"),
        }
    }
}

/// Action and danger dice counts, each held within `0..=MAX_DICE`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiceConfig {
    action: u32,
    danger: u32,
}

impl DiceConfig {
    /// Both counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current count for `kind`.
    pub fn count(&self, kind: DiceKind) -> u32 {
        match kind {
            DiceKind::Action => self.action,
            DiceKind::Danger => self.danger,
        }
    }

    /// Add `delta` to a counter, clamping the result to `0..=MAX_DICE`.
    ///
    /// Returns the new count.
    pub fn adjust(&mut self, kind: DiceKind, delta: i32) -> u32 {
        let slot = match kind {
            DiceKind::Action => &mut self.action,
            DiceKind::Danger => &mut self.danger,
        };
        let next = (i64::from(*slot) + i64::from(delta)).clamp(0, i64::from(MAX_DICE));
        *slot = u32::try_from(next).unwrap_or(MAX_DICE);
        *slot
    }
}

/// The chaos factor, ranging from 1 (orderly) to 9 (chaotic).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChaosFactor {
    value: u32,
}

impl ChaosFactor {
    /// Lowest chaos value.
    pub const MIN: u32 = 1;
    /// Highest chaos value.
    pub const MAX: u32 = 9;

    /// Create a new chaos factor, clamped to 1-9.
    pub fn new(value: u32) -> Self {
        Self {
            value: value.clamp(Self::MIN, Self::MAX),
        }
    }

    /// Get the current chaos value.
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Select a value, clamped to 1-9.
    pub fn set(&mut self, value: u32) {
        *self = Self::new(value);
    }

    /// Move the selection one step up or down, stopping at the ends.
    pub fn step(&mut self, delta: i32) {
        let next = i64::from(self.value) + i64::from(delta.signum());
        self.set(u32::try_from(next).unwrap_or(Self::MIN));
    }
}

impl Default for ChaosFactor {
    fn default() -> Self {
        Self::new(5)
    }
}

impl std::fmt::Display for ChaosFactor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// How likely the player thinks the answer is "Yes".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Likelihood {
    /// Cannot fail.
    Certain,
    /// Almost certainly yes.
    NearlyCertain,
    /// Very likely.
    VeryLikely,
    /// Probably.
    Likely,
    /// Even odds.
    #[default]
    FiftyFifty,
    /// Probably not.
    Unlikely,
    /// Very unlikely.
    VeryUnlikely,
    /// Almost certainly not.
    NearlyImpossible,
    /// Cannot happen.
    Impossible,
}

impl Likelihood {
    /// All likelihoods in selector order, most likely first.
    pub const ALL: [Likelihood; 9] = [
        Self::Certain,
        Self::NearlyCertain,
        Self::VeryLikely,
        Self::Likely,
        Self::FiftyFifty,
        Self::Unlikely,
        Self::VeryUnlikely,
        Self::NearlyImpossible,
        Self::Impossible,
    ];

    /// The label shown in the selector and in log lines.
    pub fn label(self) -> &'static str {
        match self {
            Self::Certain => "Certain",
            Self::NearlyCertain => "Nearly Certain",
            Self::VeryLikely => "Very Likely",
            Self::Likely => "Likely",
            Self::FiftyFifty => "50/50",
            Self::Unlikely => "Unlikely",
            Self::VeryUnlikely => "Very Unlikely",
            Self::NearlyImpossible => "Nearly Impossible",
            Self::Impossible => "Impossible",
        }
    }

    /// Position in [`Likelihood::ALL`].
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|l| *l == self).unwrap_or(4)
    }

    /// The neighbouring option `delta` steps away, stopping at the ends.
    pub fn step(self, delta: i32) -> Self {
        let idx = match delta.signum() {
            -1 => self.index().saturating_sub(1),
            1 => (self.index() + 1).min(Self::ALL.len() - 1),
            _ => self.index(),
        };
        Self::ALL[idx]
    }
}

impl std::fmt::Display for Likelihood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Likelihood {
    type Err = CompanionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_'], " ").trim() {
            "certain" => Ok(Self::Certain),
            "nearly certain" => Ok(Self::NearlyCertain),
            "very likely" => Ok(Self::VeryLikely),
            "likely" => Ok(Self::Likely),
            "50/50" | "5050" | "fifty fifty" | "even" => Ok(Self::FiftyFifty),
            "unlikely" => Ok(Self::Unlikely),
            "very unlikely" => Ok(Self::VeryUnlikely),
            "nearly impossible" => Ok(Self::NearlyImpossible),
            "impossible" => Ok(Self::Impossible),
            _ => Err(CompanionError::InvalidLikelihood(s.to_string())),
        }
    }
}

/// Oracle selection: chaos factor and likelihood, chosen independently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OracleConfig {
    /// Current chaos factor.
    pub chaos: ChaosFactor,
    /// Current likelihood.
    pub likelihood: Likelihood,
}

impl OracleConfig {
    /// Create an oracle selection.
    pub fn new(chaos: ChaosFactor, likelihood: Likelihood) -> Self {
        Self { chaos, likelihood }
    }
}

/// State of the fate & oracles panel.
#[derive(Debug, Clone, Default)]
pub struct FatePanel {
    dice: DiceConfig,
    oracle: OracleConfig,
    output: OutputLog,
}

impl FatePanel {
    /// Create a panel with zeroed dice and the default oracle selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a panel with zeroed dice and the given oracle selection.
    pub fn with_oracle(oracle: OracleConfig) -> Self {
        Self {
            oracle,
            ..Self::default()
        }
    }

    /// Dice counters.
    pub fn dice(&self) -> &DiceConfig {
        &self.dice
    }

    /// Oracle selection.
    pub fn oracle(&self) -> &OracleConfig {
        &self.oracle
    }

    /// Adjust a dice counter. See [`DiceConfig::adjust`].
    pub fn adjust_dice(&mut self, kind: DiceKind, delta: i32) -> u32 {
        let count = self.dice.adjust(kind, delta);
        tracing::debug!(%kind, delta, count, "dice adjusted");
        count
    }

    /// Select a chaos factor (clamped to 1-9).
    pub fn set_chaos(&mut self, value: u32) {
        self.oracle.chaos.set(value);
        tracing::debug!(chaos = self.oracle.chaos.value(), "chaos selected");
    }

    /// Step the chaos selector.
    pub fn cycle_chaos(&mut self, delta: i32) {
        self.oracle.chaos.step(delta);
        tracing::debug!(chaos = self.oracle.chaos.value(), "chaos selected");
    }

    /// Select a likelihood.
    pub fn set_likelihood(&mut self, likelihood: Likelihood) {
        self.oracle.likelihood = likelihood;
        tracing::debug!(%likelihood, "likelihood selected");
    }

    /// Step the likelihood selector.
    pub fn cycle_likelihood(&mut self, delta: i32) {
        let next = self.oracle.likelihood.step(delta);
        self.set_likelihood(next);
    }

    /// Describe a dice roll with the current counters.
    pub fn roll_dice(&mut self) -> String {
        let line = format!(
            "Rolling {} action dice and {} danger dice...",
            self.dice.count(DiceKind::Action),
            self.dice.count(DiceKind::Danger)
        );
        self.output.prepend(line.clone());
        line
    }

    /// Describe a fate check with the current oracle selection.
    pub fn roll_fate(&mut self) -> String {
        let line = format!(
            "Fate check with Chaos Factor {} and likelihood {}...",
            self.oracle.chaos, self.oracle.likelihood
        );
        self.output.prepend(line.clone());
        line
    }

    /// Announce NPC generation.
    pub fn generate_npc(&mut self) -> String {
        let line = String::from("Generating NPC...");
        self.output.prepend(line.clone());
        line
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
