#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Any length, either format — must never panic
    let _ = tpxcfg::decode_bmc(data, enough::Unstoppable);
    let _ = tpxcfg::decode_bpc(data, enough::Unstoppable);
});
