//! C4 — the split engine: carries `lastSplitHeight` and `cumulativeFactor`
//! forward across calls to the policy.

use crate::policy::{evaluate_split_decision, SplitDecision, SplitPolicyParams};
use crate::Height;
use the_primitives::Amount;

/// `{ lastSplitHeight, cumulativeFactor }`. `cumulativeFactor` is the
/// product of all declared split factors to date and is never zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplitEngineState {
    pub last_split_height: Option<Height>,
    pub cumulative_factor: Amount,
}

impl SplitEngineState {
    #[must_use]
    pub fn init() -> Self {
        Self {
            last_split_height: None,
            cumulative_factor: Amount::from(1u64),
        }
    }
}

impl Default for SplitEngineState {
    fn default() -> Self {
        Self::init()
    }
}

/// `initSplitEngineState()`.
#[must_use]
pub fn init_split_engine_state() -> SplitEngineState {
    SplitEngineState::init()
}

/// Input to one engine step. `policy` of `None` means "use the default
/// policy".
#[derive(Clone, Copy, Debug)]
pub struct EngineStepInput<'a> {
    pub height: Height,
    pub eu_per_the_price: Option<f64>,
    pub policy: Option<&'a SplitPolicyParams>,
}

/// The result of one engine step: a fresh state (unchanged on `NoSplit`) and
/// the decision that produced it.
#[derive(Clone, Debug, PartialEq)]
pub struct EngineStepOutput {
    pub state: SplitEngineState,
    pub decision: SplitDecision,
}

/// `stepSplitEngine`: never mutates `prev`, always returns fresh values.
#[must_use]
pub fn step_split_engine(prev: &SplitEngineState, input: &EngineStepInput<'_>) -> EngineStepOutput {
    let default_policy;
    let policy = match input.policy {
        Some(p) => p,
        None => {
            default_policy = SplitPolicyParams::default();
            &default_policy
        }
    };
    let decision = evaluate_split_decision(
        input.height,
        input.eu_per_the_price,
        prev.last_split_height,
        policy,
    );
    match decision {
        SplitDecision::NoSplit(_) => EngineStepOutput {
            state: prev.clone(),
            decision,
        },
        SplitDecision::Split(factor) => EngineStepOutput {
            state: SplitEngineState {
                last_split_height: Some(input.height),
                cumulative_factor: prev.cumulative_factor * factor.as_amount(),
            },
            decision,
        },
    }
}
