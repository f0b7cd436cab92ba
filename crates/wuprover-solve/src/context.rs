//! Resource budgets for triangulation.
//!
//! A [`ProverContext`] is threaded by `&mut` through every reduction. It is
//! armed before a run (which fixes the deadline) and disarmed afterwards.
//! Budgets are polled after each pseudo-reduction step, so a run may overshoot
//! a limit by at most one step.

use std::time::{Duration, Instant};

use tracing::warn;

use crate::error::TriangulationError;

/// Limits applied to a triangulation run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProverConfig {
    /// Maximum number of parameter terms a single polynomial may reach.
    pub max_terms: usize,
    /// Wall-clock limit for one armed run.
    pub time_limit: Duration,
}

impl Default for ProverConfig {
    fn default() -> Self {
        Self {
            max_terms: 10_000,
            time_limit: Duration::from_secs(5),
        }
    }
}

impl ProverConfig {
    /// Sets the term budget.
    #[must_use]
    pub fn with_max_terms(mut self, max_terms: usize) -> Self {
        self.max_terms = max_terms;
        self
    }

    /// Sets the time budget.
    #[must_use]
    pub fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = time_limit;
        self
    }
}

/// Statistics gathered while a context is in use.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ContextStats {
    /// Largest term count seen by a budget check.
    pub max_term_count: usize,
    /// Number of pseudo-reduction steps performed.
    pub reductions: usize,
}

/// Mutable budget state for a prover run.
#[derive(Clone, Debug)]
pub struct ProverContext {
    config: ProverConfig,
    deadline: Option<Instant>,
    stats: ContextStats,
}

impl Default for ProverContext {
    fn default() -> Self {
        Self::new(ProverConfig::default())
    }
}

impl ProverContext {
    /// Creates a disarmed context.
    #[must_use]
    pub fn new(config: ProverConfig) -> Self {
        Self {
            config,
            deadline: None,
            stats: ContextStats::default(),
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &ProverConfig {
        &self.config
    }

    /// Starts the clock. The deadline is `now + time_limit`.
    pub fn arm(&mut self) {
        self.deadline = Some(Instant::now() + self.config.time_limit);
    }

    /// Stops the clock; later checks only enforce the space budget.
    pub fn disarm(&mut self) {
        self.deadline = None;
    }

    /// Returns true while a deadline is set.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Disarms and clears the statistics.
    pub fn reset(&mut self) {
        self.disarm();
        self.stats = ContextStats::default();
    }

    /// Returns the statistics collected so far.
    #[must_use]
    pub fn stats(&self) -> ContextStats {
        self.stats
    }

    /// Records one reduction step producing a polynomial of `terms` terms
    /// and enforces both budgets.
    ///
    /// # Errors
    ///
    /// Returns [`TriangulationError::SpaceLimitExceeded`] if `terms` exceeds
    /// the term budget, or [`TriangulationError::TimeLimitExceeded`] if the
    /// context is armed and its deadline has passed.
    pub fn check(&mut self, terms: usize) -> Result<(), TriangulationError> {
        self.stats.reductions += 1;
        self.stats.max_term_count = self.stats.max_term_count.max(terms);

        if terms > self.config.max_terms {
            warn!(terms, limit = self.config.max_terms, "space limit exceeded");
            return Err(TriangulationError::SpaceLimitExceeded {
                terms,
                limit: self.config.max_terms,
            });
        }
        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                warn!(limit = ?self.config.time_limit, "time limit exceeded");
                return Err(TriangulationError::TimeLimitExceeded {
                    limit: self.config.time_limit,
                });
            }
        }
        Ok(())
    }
}
