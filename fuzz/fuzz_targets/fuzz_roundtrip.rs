#![no_main]
use libfuzzer_sys::fuzz_target;
use tpxcfg::*;

fuzz_target!(|data: &[u8]| {
    // Stretch the input to a full chip so every run exercises the decode pass
    if data.is_empty() {
        return;
    }
    let file: Vec<u8> = data.iter().copied().cycle().take(65_536).collect();

    // BurdaMan is lossless: bytes out must equal bytes in
    let config = decode(&file, FileFormat::BurdaMan, enough::Unstoppable)
        .expect("full-size buffer must decode");
    let reencoded = encode(&config, FileFormat::BurdaMan, enough::Unstoppable)
        .expect("encode cannot fail without cancellation");
    assert_eq!(reencoded, file, "bmc roundtrip mismatch");

    // Pixet loses bits 6 and 7 once, then is stable
    let config = decode(&file, FileFormat::Pixet, enough::Unstoppable)
        .expect("full-size buffer must decode");
    let reencoded = encode(&config, FileFormat::Pixet, enough::Unstoppable)
        .expect("encode cannot fail without cancellation");
    let decoded2 = decode(&reencoded, FileFormat::Pixet, enough::Unstoppable)
        .expect("re-encoded data failed to decode");
    assert_eq!(config, decoded2, "bpc roundtrip mismatch");
    for (a, b) in reencoded.iter().zip(file.iter()) {
        assert_eq!(*a, *b & 0x3F);
    }
});
