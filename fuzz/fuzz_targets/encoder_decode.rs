#![no_main]

use libfuzzer_sys::fuzz_target;
use the_primitives::encoding::decode::decode_one;

fuzz_target!(|data: &[u8]| {
    let _ = decode_one(data);
});
