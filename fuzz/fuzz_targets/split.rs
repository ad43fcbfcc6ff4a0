#![no_main]
use libfuzzer_sys::fuzz_target;

use arbitrary::Arbitrary;
use shamir256::split;

#[derive(Debug, Arbitrary)]
struct Parameters {
    pub secret: Vec<u8>,
    pub n: u8,
    pub k: u8,
}

fuzz_target!(|params: Parameters| {
    let _shares = split(&params.secret, params.n, params.k);
});
