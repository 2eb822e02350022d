//! C3 — the stateless split decision function.

use crate::Height;
use the_primitives::Amount;
use thiserror::Error;

/// A split is restricted to the set {2, 3, 5}; no other factor exists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SplitFactor {
    Two = 2,
    Three = 3,
    Five = 5,
}

impl SplitFactor {
    pub const ALL: [Self; 3] = [Self::Two, Self::Three, Self::Five];

    #[must_use]
    pub const fn value(self) -> u64 {
        self as u64
    }

    #[must_use]
    pub fn as_amount(self) -> Amount {
        Amount::from(self.value())
    }
}

impl TryFrom<u64> for SplitFactor {
    type Error = SplitConfigError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            5 => Ok(Self::Five),
            _ => Err(SplitConfigError::UnrepresentableFactor(value)),
        }
    }
}

/// Programmer-error stratum: a malformed policy configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SplitConfigError {
    #[error("split thresholds must be strictly increasing in both factor and trigger price")]
    NonMonotonicThresholds,
    #[error("{0} is not a representable split factor (must be 2, 3, or 5)")]
    UnrepresentableFactor(u64),
}

/// A `(factor, triggerEuPerThe)` pair: the minimum EU-per-THE price at which
/// `factor` becomes eligible.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SplitThreshold {
    pub factor: SplitFactor,
    pub trigger_eu_per_the: f64,
}

impl SplitThreshold {
    #[must_use]
    pub const fn new(factor: SplitFactor, trigger_eu_per_the: f64) -> Self {
        Self {
            factor,
            trigger_eu_per_the,
        }
    }
}

/// An ordered list of thresholds plus the minimum-interval guard. Construction
/// fails if thresholds are not strictly increasing in both factor and
/// trigger price.
#[derive(Clone, Debug, PartialEq)]
pub struct SplitPolicyParams {
    thresholds: Vec<SplitThreshold>,
    pub min_blocks_between_splits: u64,
}

impl SplitPolicyParams {
    /// # Errors
    /// Returns [`SplitConfigError::NonMonotonicThresholds`] unless
    /// `thresholds` is strictly increasing in both `factor` and
    /// `trigger_eu_per_the`.
    pub fn new(
        thresholds: Vec<SplitThreshold>,
        min_blocks_between_splits: u64,
    ) -> Result<Self, SplitConfigError> {
        for pair in thresholds.windows(2) {
            let [a, b] = pair else { unreachable!() };
            if !(a.factor < b.factor && a.trigger_eu_per_the < b.trigger_eu_per_the) {
                return Err(SplitConfigError::NonMonotonicThresholds);
            }
        }
        Ok(Self {
            thresholds,
            min_blocks_between_splits,
        })
    }

    #[must_use]
    pub fn thresholds(&self) -> &[SplitThreshold] {
        &self.thresholds
    }
}

impl Default for SplitPolicyParams {
    /// The default policy (v0): thresholds `[(2, 3.0), (3, 7.0), (5, 15.0)]`,
    /// `min_blocks_between_splits = 10080`.
    fn default() -> Self {
        Self::new(
            vec![
                SplitThreshold::new(SplitFactor::Two, 3.0),
                SplitThreshold::new(SplitFactor::Three, 7.0),
                SplitThreshold::new(SplitFactor::Five, 15.0),
            ],
            10_080,
        )
        .expect("default policy thresholds are monotonic by construction")
    }
}

/// The closed set of reasons a `NoSplit` decision can carry. Emitted verbatim
/// as these snake_case strings at the external interface; the historical
/// alias `shadow-disabled` is accepted by [`NoSplitReason::parse`] (for
/// reading reason strings persisted under the old spelling) but is never
/// produced by [`NoSplitReason::as_str`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NoSplitReason {
    InvalidHeight,
    NoPrice,
    NonPositivePrice,
    MinIntervalNotMet,
    BelowThreshold,
    ShadowDisabled,
}

impl NoSplitReason {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidHeight => "invalid_height",
            Self::NoPrice => "no_price",
            Self::NonPositivePrice => "non_positive_price",
            Self::MinIntervalNotMet => "min_interval_not_met",
            Self::BelowThreshold => "below_threshold",
            Self::ShadowDisabled => "shadow_disabled",
        }
    }

    /// Parse a reason string from the external interface, accepting the
    /// historical `shadow-disabled` spelling alongside the canonical
    /// `shadow_disabled`. Returns `None` for anything outside the closed set
    /// (including `threshold_met`, which names a `Split`, not a `NoSplit`).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "invalid_height" => Some(Self::InvalidHeight),
            "no_price" => Some(Self::NoPrice),
            "non_positive_price" => Some(Self::NonPositivePrice),
            "min_interval_not_met" => Some(Self::MinIntervalNotMet),
            "below_threshold" => Some(Self::BelowThreshold),
            "shadow_disabled" | "shadow-disabled" => Some(Self::ShadowDisabled),
            _ => None,
        }
    }
}

/// The outcome of evaluating the split policy at a height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SplitDecision {
    NoSplit(NoSplitReason),
    Split(SplitFactor),
}

impl SplitDecision {
    /// The reason string for this decision, `"threshold_met"` for a `Split`.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::NoSplit(r) => r.as_str(),
            Self::Split(_) => "threshold_met",
        }
    }
}

/// C3: the pure split decision function. Checks run in the documented order
/// and the first failure wins.
#[must_use]
pub fn evaluate_split_decision(
    height: Height,
    eu_per_the_price: Option<f64>,
    last_split_height: Option<Height>,
    params: &SplitPolicyParams,
) -> SplitDecision {
    if height < 0 {
        return SplitDecision::NoSplit(NoSplitReason::InvalidHeight);
    }
    let Some(price) = eu_per_the_price else {
        return SplitDecision::NoSplit(NoSplitReason::NoPrice);
    };
    if !price.is_finite() {
        return SplitDecision::NoSplit(NoSplitReason::NoPrice);
    }
    if price <= 0.0 {
        return SplitDecision::NoSplit(NoSplitReason::NonPositivePrice);
    }
    if let Some(last) = last_split_height {
        // `last_split_height` is caller-supplied and not restricted to
        // values `step_split_engine` itself would ever produce, so a plain
        // `height - last` can overflow `i64` (e.g. `height = 0`,
        // `last = i64::MIN`). `saturating_sub` keeps this total: an
        // overflowing positive difference saturates to `i64::MAX` (clearly
        // past any interval guard), and an overflowing or merely negative
        // difference saturates toward `i64::MIN` (clearly within it).
        let blocks_since_last = height.saturating_sub(last);
        let min_blocks = i64::try_from(params.min_blocks_between_splits).unwrap_or(i64::MAX);
        if blocks_since_last < min_blocks {
            return SplitDecision::NoSplit(NoSplitReason::MinIntervalNotMet);
        }
    }
    // "Largest factor eligible" and "highest trigger eligible" coincide
    // because thresholds are monotonic in both axes; selecting by factor
    // value makes the result independent of the input list's order.
    let chosen = params
        .thresholds()
        .iter()
        .filter(|t| t.trigger_eu_per_the <= price)
        .max_by_key(|t| t.factor);
    match chosen {
        Some(t) => SplitDecision::Split(t.factor),
        None => SplitDecision::NoSplit(NoSplitReason::BelowThreshold),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_params() -> SplitPolicyParams {
        SplitPolicyParams::default()
    }

    #[test]
    fn rejects_non_monotonic_thresholds() {
        let bad = vec![
            SplitThreshold::new(SplitFactor::Three, 7.0),
            SplitThreshold::new(SplitFactor::Two, 3.0),
        ];
        assert_eq!(
            SplitPolicyParams::new(bad, 10_080),
            Err(SplitConfigError::NonMonotonicThresholds)
        );
    }

    #[test]
    fn negative_height_is_invalid() {
        let d = evaluate_split_decision(-1, Some(100.0), None, &default_params());
        assert_eq!(d, SplitDecision::NoSplit(NoSplitReason::InvalidHeight));
    }

    #[test]
    fn missing_or_nonfinite_price_is_no_price() {
        let params = default_params();
        assert_eq!(
            evaluate_split_decision(10, None, None, &params),
            SplitDecision::NoSplit(NoSplitReason::NoPrice)
        );
        assert_eq!(
            evaluate_split_decision(10, Some(f64::NAN), None, &params),
            SplitDecision::NoSplit(NoSplitReason::NoPrice)
        );
        assert_eq!(
            evaluate_split_decision(10, Some(f64::INFINITY), None, &params),
            SplitDecision::NoSplit(NoSplitReason::NoPrice)
        );
    }

    #[test]
    fn non_positive_price_is_rejected() {
        let d = evaluate_split_decision(10, Some(0.0), None, &default_params());
        assert_eq!(d, SplitDecision::NoSplit(NoSplitReason::NonPositivePrice));
        let d = evaluate_split_decision(10, Some(-5.0), None, &default_params());
        assert_eq!(d, SplitDecision::NoSplit(NoSplitReason::NonPositivePrice));
    }

    #[test]
    fn min_interval_guard_ignores_price() {
        let params = default_params();
        let d = evaluate_split_decision(25_000, Some(50.0), Some(20_000), &params);
        assert_eq!(d, SplitDecision::NoSplit(NoSplitReason::MinIntervalNotMet));
    }

    #[test]
    fn min_interval_guard_does_not_panic_on_an_extreme_last_split_height() {
        // height - last_split_height would overflow i64 here if computed
        // with a plain subtraction; the true interval is enormous, so this
        // must not be treated as within the guard.
        let d = evaluate_split_decision(0, Some(8.0), Some(i64::MIN), &default_params());
        assert_eq!(d, SplitDecision::Split(SplitFactor::Three));
    }

    #[test]
    fn min_interval_guard_treats_a_last_split_height_ahead_of_height_as_within_the_guard() {
        let d = evaluate_split_decision(10, Some(8.0), Some(i64::MAX), &default_params());
        assert_eq!(d, SplitDecision::NoSplit(NoSplitReason::MinIntervalNotMet));
    }

    #[test]
    fn below_all_thresholds() {
        let d = evaluate_split_decision(20_000, Some(2.5), None, &default_params());
        assert_eq!(d, SplitDecision::NoSplit(NoSplitReason::BelowThreshold));
    }

    #[test]
    fn threshold_met_picks_largest_eligible_factor() {
        let d = evaluate_split_decision(20_000, Some(8.0), None, &default_params());
        assert_eq!(d, SplitDecision::Split(SplitFactor::Three));
        assert_eq!(d.reason(), "threshold_met");
    }

    #[test]
    fn parse_round_trips_every_canonical_reason() {
        for reason in [
            NoSplitReason::InvalidHeight,
            NoSplitReason::NoPrice,
            NoSplitReason::NonPositivePrice,
            NoSplitReason::MinIntervalNotMet,
            NoSplitReason::BelowThreshold,
            NoSplitReason::ShadowDisabled,
        ] {
            assert_eq!(NoSplitReason::parse(reason.as_str()), Some(reason));
        }
    }

    #[test]
    fn parse_accepts_the_historical_shadow_disabled_spelling() {
        assert_eq!(
            NoSplitReason::parse("shadow-disabled"),
            Some(NoSplitReason::ShadowDisabled)
        );
    }

    #[test]
    fn parse_rejects_unknown_strings_and_threshold_met() {
        assert_eq!(NoSplitReason::parse("threshold_met"), None);
        assert_eq!(NoSplitReason::parse("bogus"), None);
    }

    #[test]
    fn decision_independent_of_threshold_order() {
        let forward = SplitPolicyParams::default();
        let shuffled = SplitPolicyParams::new(
            vec![
                SplitThreshold::new(SplitFactor::Five, 15.0),
                SplitThreshold::new(SplitFactor::Two, 3.0),
                SplitThreshold::new(SplitFactor::Three, 7.0),
            ],
            10_080,
        );
        // Construction itself rejects this ordering (monotonicity is part of
        // the invariant), confirming order cannot silently change outcomes.
        assert!(shuffled.is_err());
        let d = evaluate_split_decision(1, Some(20.0), None, &forward);
        assert_eq!(d, SplitDecision::Split(SplitFactor::Five));
    }
}
