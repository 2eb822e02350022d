//! C5 — the shadow evaluator: the only place consensus block processing
//! invokes the split engine from. Always reports `appliedInConsensus =
//! false`; it never mutates balances or consensus state.

use crate::engine::{step_split_engine, EngineStepInput, SplitEngineState};
use crate::flags::FeatureFlags;
use crate::policy::{NoSplitReason, SplitDecision, SplitPolicyParams};
use crate::Height;

/// Configuration passed to the shadow evaluator: the feature flags gating
/// it, and an optional policy override (`None` uses the default policy).
#[derive(Clone, Debug, Default)]
pub struct ShadowConfig {
    pub flags: FeatureFlags,
    pub policy: Option<SplitPolicyParams>,
}

/// The inputs the shadow evaluator needs at a given height.
#[derive(Clone, Debug)]
pub struct ShadowInput {
    pub height: Height,
    pub eu_per_the_price: Option<f64>,
    pub prev_engine_state: SplitEngineState,
}

/// The shadow evaluator's report: what the engine would do, and the state
/// it would carry forward, without applying either to consensus.
#[derive(Clone, Debug, PartialEq)]
pub struct ShadowOutput {
    pub next_engine_state: SplitEngineState,
    pub decision: SplitDecision,
    pub applied_in_consensus: bool,
}

/// `evaluateSplitInShadow`.
#[must_use]
pub fn evaluate_split_in_shadow(cfg: &ShadowConfig, input: &ShadowInput) -> ShadowOutput {
    if !cfg.flags.enable_split_shadow_mode() {
        return ShadowOutput {
            next_engine_state: input.prev_engine_state.clone(),
            decision: SplitDecision::NoSplit(NoSplitReason::ShadowDisabled),
            applied_in_consensus: false,
        };
    }
    let step_input = EngineStepInput {
        height: input.height,
        eu_per_the_price: input.eu_per_the_price,
        policy: cfg.policy.as_ref(),
    };
    let out = step_split_engine(&input.prev_engine_state, &step_input);
    ShadowOutput {
        next_engine_state: out.state,
        decision: out.decision,
        applied_in_consensus: false,
    }
}
