//! End-to-end integration tests for the split-policy consensus core.
//!
//! This crate provides comprehensive integration tests that exercise the
//! full consensus-adjacent data flow: shadow evaluation, event log
//! bookkeeping, reward scaling, and vault scaling, wired together the way a
//! consensus layer would use them without this crate implementing consensus
//! itself.

#![forbid(unsafe_code)]
#![deny(warnings)]
