//! C7 — the reward scaler. A split *f*-for-1 multiplies supply and rewards
//! by *f*, preserving EU-denominated value when interpreted against an
//! oracle.

use the_primitives::Amount;
use the_split::policy::SplitFactor;
use the_split::Height;

/// `{ heightFrom, heightTo, minerRewardThe, nipRewardThe }`. Invariant:
/// `height_from <= height_to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RewardBand {
    pub height_from: Height,
    pub height_to: Height,
    pub miner_reward_the: Amount,
    pub nip_reward_the: Amount,
}

/// `scaleRewardBandBySplit`: heights are preserved; both reward amounts are
/// multiplied by `factor`.
#[must_use]
pub fn scale_reward_band_by_split(band: &RewardBand, factor: SplitFactor) -> RewardBand {
    apply_cumulative_split_factor(band, factor.as_amount())
}

/// `applyCumulativeSplitFactor`: identical to [`scale_reward_band_by_split`]
/// but takes an already-accumulated multiplier. Callers must not compose
/// both for the same event — doing so double-scales the band.
#[must_use]
pub fn apply_cumulative_split_factor(band: &RewardBand, cumulative: Amount) -> RewardBand {
    RewardBand {
        height_from: band.height_from,
        height_to: band.height_to,
        miner_reward_the: band.miner_reward_the * cumulative,
        nip_reward_the: band.nip_reward_the * cumulative,
    }
}
