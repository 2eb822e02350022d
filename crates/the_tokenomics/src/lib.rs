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

//! Reward bands (C7) and vault balances (C8) under a declared split: both
//! are integer multiplications by the split factor, preserving
//! EU-denominated value with no rounding.

pub mod reward;
pub mod vault;

pub use reward::{apply_cumulative_split_factor, scale_reward_band_by_split, RewardBand};
pub use vault::{apply_split_to_vault, VaultState};
