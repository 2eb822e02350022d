//! C1 — maps block height to epoch index and epoch boundaries. Pure
//! arithmetic; every input is valid and every call succeeds.

use crate::constants::EPOCH_LENGTH_BLOCKS;

/// The epoch boundaries for a given epoch index, in block heights
/// (inclusive on both ends).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EpochMeta {
    pub start_height: u64,
    pub end_height: u64,
}

/// `epochIndex(h) = floor((h - 1) / 10080)` for `h > 0`, and `0` otherwise.
#[must_use]
pub const fn epoch_index(height: u64) -> u64 {
    if height == 0 {
        0
    } else {
        (height - 1) / EPOCH_LENGTH_BLOCKS
    }
}

/// `startHeight = i*10080 + 1`, `endHeight = (i+1)*10080`.
#[must_use]
pub const fn epoch_meta(index: u64) -> EpochMeta {
    EpochMeta {
        start_height: index * EPOCH_LENGTH_BLOCKS + 1,
        end_height: (index + 1) * EPOCH_LENGTH_BLOCKS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_index_boundaries() {
        assert_eq!(epoch_index(0), 0);
        assert_eq!(epoch_index(1), 0);
        assert_eq!(epoch_index(10_080), 0);
        assert_eq!(epoch_index(10_081), 1);
        assert_eq!(epoch_index(20_160), 1);
        assert_eq!(epoch_index(20_161), 2);
    }

    #[test]
    fn epoch_meta_matches_index() {
        let m0 = epoch_meta(0);
        assert_eq!(m0.start_height, 1);
        assert_eq!(m0.end_height, 10_080);
        assert_eq!(epoch_index(m0.start_height), 0);
        assert_eq!(epoch_index(m0.end_height), 0);

        let m1 = epoch_meta(1);
        assert_eq!(m1.start_height, 10_081);
        assert_eq!(m1.end_height, 20_160);
        assert_eq!(epoch_index(m1.start_height), 1);
    }
}
