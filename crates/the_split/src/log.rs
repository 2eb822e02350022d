//! C6 — the bounded, append-only split event log. A recent-window cache,
//! not a source of truth: the authoritative cumulative factor lives in
//! [`crate::engine::SplitEngineState`], not here. Backed by a ring buffer
//! (a `VecDeque` used head/tail) rather than array slicing, per the
//! systems-language preference over the slice-and-copy approach a
//! dynamically-typed source might use.

use crate::policy::SplitFactor;
use crate::Height;
use std::collections::VecDeque;
use the_primitives::Amount;

/// The default bound on the number of events retained in a
/// [`SplitEventLog`].
pub const DEFAULT_MAX_EVENTS: usize = 64;

/// An accepted split, immutable once appended.
#[derive(Clone, Debug, PartialEq)]
pub struct SplitEvent {
    pub height: Height,
    pub factor: SplitFactor,
    pub cumulative_factor: Amount,
    pub eu_per_the_price: f64,
    pub reason: String,
    pub timestamp_ms: Option<u64>,
}

/// The canonical leaf hash of a split event: each field run through the
/// deterministic encoder (C2), concatenated into one list, and domain-tag
/// hashed — the same shape a transaction leaf takes, since a `SplitEvent`
/// is exactly the kind of consensus-visible record that a future header or
/// event-root encoding would need a stable byte image of.
#[must_use]
pub fn split_event_leaf_hash(evt: &SplitEvent) -> the_primitives::Hash256 {
    use the_primitives::constants::TAG_SPLIT_EVENT_LEAF;
    use the_primitives::encoding::{
        encode_big_int, encode_bytes, encode_list, encode_number, encode_string,
    };

    let height_enc =
        encode_number(i128::from(evt.height)).expect("a logged event's height is non-negative");
    let factor_enc = encode_number(i128::from(evt.factor.value()))
        .expect("a split factor is always non-negative");
    let cumulative_enc = encode_big_int(&evt.cumulative_factor);
    let price_enc = encode_bytes(&evt.eu_per_the_price.to_bits().to_be_bytes());
    let reason_enc = encode_string(&evt.reason);
    // Wrapped in a one-item-or-empty list rather than encoded as a bare
    // scalar: `encodeNumber(0)` and "absent" both encode to `[0x80]` as bare
    // scalars, which would make `Some(0)` and `None` collide.
    let timestamp_enc = evt.timestamp_ms.map_or_else(
        || encode_list(&[]),
        |ts| {
            encode_list(&[
                encode_number(i128::from(ts)).expect("a timestamp is always non-negative"),
            ])
        },
    );
    let payload = encode_list(&[
        height_enc,
        factor_enc,
        cumulative_enc,
        price_enc,
        reason_enc,
        timestamp_enc,
    ]);
    the_primitives::h_tag(TAG_SPLIT_EVENT_LEAF, &[&payload])
}

/// A bounded, ordered log of [`SplitEvent`]s. Appending past `max_events`
/// drops the oldest entry; the log is therefore a cache, and lookups beyond
/// its window return `None` even though the split happened.
#[derive(Clone, Debug, PartialEq)]
pub struct SplitEventLog {
    events: VecDeque<SplitEvent>,
    max_events: usize,
}

impl SplitEventLog {
    #[must_use]
    pub fn new(max_events: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(max_events.min(1024)),
            max_events,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    #[must_use]
    pub fn max_events(&self) -> usize {
        self.max_events
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &SplitEvent> {
        self.events.iter()
    }

    /// `appendSplitEvent`: returns a new log with `evt` appended; if the
    /// result would exceed `max_events`, the oldest entries are dropped
    /// until it fits.
    #[must_use]
    pub fn append(&self, evt: SplitEvent) -> Self {
        let mut events = self.events.clone();
        events.push_back(evt);
        while events.len() > self.max_events {
            events.pop_front();
        }
        Self {
            events,
            max_events: self.max_events,
        }
    }

    /// `findLastSplitAtOrBeforeHeight`: the last event with `height <= h`,
    /// or `None` if none is in the window.
    #[must_use]
    pub fn find_last_split_at_or_before_height(&self, h: Height) -> Option<&SplitEvent> {
        self.events.iter().rev().find(|e| e.height <= h)
    }

    /// `cumulativeFactorAtHeight`: the matching event's cumulative factor,
    /// or `1` if the window has no such event.
    #[must_use]
    pub fn cumulative_factor_at_height(&self, h: Height) -> Amount {
        self.find_last_split_at_or_before_height(h)
            .map_or_else(|| Amount::from(1u64), |e| e.cumulative_factor)
    }
}

impl Default for SplitEventLog {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_EVENTS)
    }
}
