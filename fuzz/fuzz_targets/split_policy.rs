#![no_main]

use libfuzzer_sys::fuzz_target;
use the_split::policy::{evaluate_split_decision, SplitPolicyParams};

// Require enough bytes for a height, a price, and a last-split height; short
// inputs are rejected rather than padded, since the policy itself never
// needs to guess at missing data.
fuzz_target!(|data: &[u8]| {
    if data.len() < 25 {
        return;
    }
    let height = i64::from_le_bytes(data[0..8].try_into().unwrap());
    let price_bits = u64::from_le_bytes(data[8..16].try_into().unwrap());
    let price = f64::from_bits(price_bits);
    let has_last_split = data[16] & 1 == 1;
    let last_split_height = if has_last_split {
        Some(i64::from_le_bytes(data[17..25].try_into().unwrap()))
    } else {
        None
    };
    let params = SplitPolicyParams::default();
    // The policy is total: no input, however adversarial, should panic.
    let _ = evaluate_split_decision(height, Some(price), last_split_height, &params);
});
