#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // All-zero chip
    fs::write(format!("{dir}/zero.bmc"), vec![0u8; 65_536]).unwrap();

    // Top-left pixel set
    let mut corner = vec![0u8; 65_536];
    corner[0] = 0xff;
    fs::write(format!("{dir}/corner.bmc"), corner).unwrap();

    // Every Pixet-representable value, repeating
    let ramp: Vec<u8> = (0..65_536usize).map(|i| (i % 64) as u8).collect();
    fs::write(format!("{dir}/ramp.bpc"), ramp).unwrap();

    // Off-by-one sizes
    fs::write(format!("{dir}/short.bin"), vec![0u8; 65_535]).unwrap();
    fs::write(format!("{dir}/long.bin"), vec![0u8; 65_537]).unwrap();
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();

    println!("Generated seed corpus in {dir}/");
}
