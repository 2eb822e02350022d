#![forbid(unsafe_code)]

//! Domain tags and chain-wide constants shared across the split-policy core.

/// Epoch length in blocks: 28 days at 240s/block, 360 blocks/day.
pub const BLOCK_TIME_SECONDS: u64 = 240;
pub const BLOCKS_PER_DAY: u64 = 360;
pub const EPOCH_LENGTH_DAYS: u64 = 28;
pub const EPOCH_LENGTH_BLOCKS: u64 = 10_080;

pub const TAG_MERKLE_LEAF: &str = "the.merkle.leaf";

pub const TAG_SPLIT_EVENT_LEAF: &str = "the.split.event.leaf";
