#![no_main]
use libfuzzer_sys::fuzz_target;

use shamir256::{combine, Share};

fuzz_target!(|shares: Vec<Share>| {
    let _secret = combine(&shares);
});
