#![forbid(unsafe_code)]
#![deny(
    warnings,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::result_large_err
)]

//! The split subsystem: policy (C3), engine state (C4), shadow evaluator
//! (C5), event log (C6), and the feature-flag / parameter surface (C9) that
//! configures them. Every function here is pure over its inputs; the only
//! state this crate carries is values the caller owns and threads through.

pub mod engine;
pub mod flags;
pub mod log;
pub mod policy;
pub mod shadow;

pub use engine::{init_split_engine_state, step_split_engine, EngineStepInput, SplitEngineState};
pub use flags::FeatureFlags;
pub use log::{split_event_leaf_hash, SplitEvent, SplitEventLog};
pub use policy::{
    evaluate_split_decision, NoSplitReason, SplitConfigError, SplitDecision, SplitFactor,
    SplitPolicyParams, SplitThreshold,
};
pub use shadow::{evaluate_split_in_shadow, ShadowConfig, ShadowInput, ShadowOutput};

/// Block height. Signed so that an out-of-range negative height can be
/// rejected as `NoSplit(invalid_height)` rather than refused at the type
/// boundary before policy gets a chance to report why.
pub type Height = i64;
