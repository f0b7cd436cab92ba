//! Wu's method prover.

use std::fmt;

use tracing::info;
use wuprover_poly::XPolynomial;

use crate::context::{ContextStats, ProverContext};
use crate::error::{ProverStatus, TriangulationError};
use crate::theorem::Theorem;

/// The answer of a proof attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// The final remainder is zero: the statement holds under the NDG
    /// conditions.
    True,
    /// The final remainder is nonzero.
    False,
    /// The method could not decide; the status says why.
    Unknown(ProverStatus),
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::True => write!(f, "true"),
            Self::False => write!(f, "false"),
            Self::Unknown(status) => write!(f, "unknown ({status})"),
        }
    }
}

/// The result of [`WuProver::prove`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProofOutcome {
    /// The verdict.
    pub verdict: Verdict,
    /// The final remainder, when one was computed.
    pub remainder: Option<XPolynomial>,
    /// Budget statistics of the run.
    pub stats: ContextStats,
}

impl ProofOutcome {
    /// Returns the status code of the run.
    #[must_use]
    pub fn status(&self) -> ProverStatus {
        match self.verdict {
            Verdict::Unknown(status) => status,
            Verdict::True | Verdict::False => ProverStatus::Success,
        }
    }
}

/// Proves theorems by triangulation and successive pseudo-division.
#[derive(Clone, Debug)]
pub struct WuProver {
    derive_ndg: bool,
}

impl Default for WuProver {
    fn default() -> Self {
        Self::new()
    }
}

impl WuProver {
    /// Creates a prover that also derives NDG conditions.
    #[must_use]
    pub fn new() -> Self {
        Self { derive_ndg: true }
    }

    /// Enables or disables NDG derivation.
    #[must_use]
    pub fn with_ndg_conditions(mut self, derive_ndg: bool) -> Self {
        self.derive_ndg = derive_ndg;
        self
    }

    /// Attempts to prove `theorem`.
    ///
    /// Resets `ctx` and arms it for the duration of the run, so the returned
    /// statistics cover this attempt only. Errors never escape: they are
    /// reported as [`Verdict::Unknown`] with the matching status.
    pub fn prove(&self, theorem: &mut Theorem, ctx: &mut ProverContext) -> ProofOutcome {
        ctx.reset();
        ctx.arm();
        let result = self.run(theorem, ctx);
        ctx.disarm();

        let outcome = match result {
            Ok(remainder) => ProofOutcome {
                verdict: if remainder.is_zero() {
                    Verdict::True
                } else {
                    Verdict::False
                },
                remainder: Some(remainder),
                stats: ctx.stats(),
            },
            Err(e) => ProofOutcome {
                verdict: Verdict::Unknown(e.status()),
                remainder: None,
                stats: ctx.stats(),
            },
        };
        info!(verdict = %outcome.verdict, reductions = outcome.stats.reductions, "proof finished");
        outcome
    }

    fn run(
        &self,
        theorem: &mut Theorem,
        ctx: &mut ProverContext,
    ) -> Result<XPolynomial, TriangulationError> {
        theorem.triangulate_hypotheses(ctx)?;
        if self.derive_ndg {
            theorem.fill_ndg_conditions()?;
        }
        theorem.final_remainder(ctx)
    }
}
