//! Configuration for a companion session.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::fate::{ChaosFactor, FatePanel, Likelihood, OracleConfig};
use crate::panel::PanelId;

/// Configuration for a session.
#[derive(Debug, Clone, Default)]
pub struct CompanionConfig {
    /// RNG seed for reproducible draws. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Chaos factor the fate panel mounts with (1-9).
    pub initial_chaos: ChaosFactor,
    /// Likelihood the fate panel mounts with.
    pub initial_likelihood: Likelihood,
    /// Keep panel state when switching away instead of resetting it.
    pub keep_panels: bool,
}

impl CompanionConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the initial chaos factor (clamped to 1-9).
    pub fn with_chaos(mut self, chaos: u32) -> Self {
        self.initial_chaos = ChaosFactor::new(chaos);
        self
    }

    /// Set the initial likelihood.
    pub fn with_likelihood(mut self, likelihood: Likelihood) -> Self {
        self.initial_likelihood = likelihood;
        self
    }

    /// Keep panel state across panel switches.
    pub fn with_keep_panels(mut self, keep: bool) -> Self {
        self.keep_panels = keep;
        self
    }

    /// The oracle selection a fresh fate panel starts with.
    pub fn initial_oracle(&self) -> OracleConfig {
        OracleConfig::new(self.initial_chaos, self.initial_likelihood)
    }

    /// A fate panel in its mount state.
    pub fn fate_panel(&self) -> FatePanel {
        FatePanel::with_oracle(self.initial_oracle())
    }

    /// Build the random generator for `panel`.
    ///
    /// With a seed, each panel gets its own deterministic stream. Without
    /// one the generator is seeded from the operating system.
    pub fn rng_for(&self, panel: PanelId) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(panel.seed_offset())),
            None => StdRng::from_os_rng(),
        }
    }
}
