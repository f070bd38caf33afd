use enough::Unstoppable;
use tpxcfg::*;

fn trim_ramp() -> Vec<u8> {
    // every value Pixet can hold, repeated across the chip
    (0..65_536usize).map(|i| (i % 64) as u8).collect()
}

#[test]
fn bmc_roundtrip_full_byte_range() {
    let data: Vec<u8> = (0..65_536usize).map(|i| (i * 7 + i / 256) as u8).collect();

    let config = decode(&data, FileFormat::BurdaMan, Unstoppable).unwrap();
    let encoded = encode(&config, FileFormat::BurdaMan, Unstoppable).unwrap();
    assert_eq!(encoded, data);
}

#[test]
fn bpc_roundtrip_representable_values() {
    let data = trim_ramp();

    let config = decode(&data, FileFormat::Pixet, Unstoppable).unwrap();
    let encoded = encode(&config, FileFormat::Pixet, Unstoppable).unwrap();
    assert_eq!(encoded, data);
}

#[test]
fn bpc_to_bmc_conversion() {
    let data = trim_ramp();
    let config = decode_bpc(&data, Unstoppable).unwrap();

    let bmc = EncodeRequest::burdaman().encode(&config, Unstoppable).unwrap();
    let reloaded = decode_bmc(&bmc, Unstoppable).unwrap();
    assert_eq!(reloaded, config);

    for (i, (&bpc_byte, &bmc_byte)) in data.iter().zip(bmc.iter()).enumerate() {
        assert_eq!(
            FileFormat::Pixet.decode_byte(bpc_byte),
            bmc_byte,
            "offset {i}"
        );
    }
}

#[test]
fn all_zero_file_decodes_to_zero_grid() {
    let data = vec![0u8; 65_536];
    for format in [FileFormat::BurdaMan, FileFormat::Pixet] {
        let config = decode(&data, format, Unstoppable).unwrap();
        assert!(config.words().iter().all(|&w| w == 0));
        assert!(config.grid().to_vec().iter().all(|&v| v == 0));
    }
}

#[test]
fn single_byte_at_offset_zero() {
    let mut data = vec![0u8; 65_536];
    data[0] = 0xFF;

    let config = decode(&data, FileFormat::BurdaMan, Unstoppable).unwrap();
    let grid = config.grid();
    for (x, y, v) in grid.iter() {
        if (x, y) == (0, 255) {
            assert_eq!(v, 0xFF);
        } else {
            assert_eq!(v, 0, "pixel ({x}, {y})");
        }
    }
}

#[test]
fn known_pixet_byte() {
    let mut data = vec![0u8; 65_536];
    data[0] = 0x1A;
    let config = decode(&data, FileFormat::Pixet, Unstoppable).unwrap();
    assert_eq!(config.get(0, 255), 0x16);
}

#[test]
fn invalid_sizes_rejected() {
    for len in [65_535usize, 65_537] {
        let data = vec![0u8; len];
        match decode(&data, FileFormat::Pixet, Unstoppable).unwrap_err() {
            ConfigError::InvalidSize { expected, actual } => {
                assert_eq!(expected, 65_536);
                assert_eq!(actual, len);
            }
            other => panic!("expected InvalidSize, got {other:?}"),
        }
    }
}

#[test]
fn invalid_size_message() {
    let err = decode(&[0u8; 10], FileFormat::BurdaMan, Unstoppable).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid configuration size: expected 65536 bytes, got 10"
    );
}

#[test]
fn wrong_format_is_silent() {
    let mut data = vec![0u8; 65_536];
    data[100] = 0b0000_0010;
    let as_bmc = decode_bmc(&data, Unstoppable).unwrap();
    let as_bpc = decode_bpc(&data, Unstoppable).unwrap();
    assert_ne!(as_bmc, as_bpc);
    assert_eq!(as_bmc.get(100, 255), 0b0000_0010);
    assert_eq!(as_bpc.get(100, 255), 0b0001_0000);
}

#[test]
fn each_load_is_independent() {
    let mut first = vec![0u8; 65_536];
    first[5] = 0x0F;
    let mut second = vec![0u8; 65_536];
    second[6] = 0xF0;

    let a = decode_bmc(&first, Unstoppable).unwrap();
    let b = decode_bmc(&second, Unstoppable).unwrap();
    assert_eq!(a.get(5, 255), 0x0F);
    assert_eq!(a.get(6, 255), 0);
    assert_eq!(b.get(5, 255), 0);
    assert_eq!(b.get(6, 255), 0xF0);
}

#[test]
fn parallel_loads() {
    let handles: Vec<_> = (0..4u8)
        .map(|n| {
            std::thread::spawn(move || {
                let data = vec![n; 65_536];
                decode_bmc(&data, Unstoppable).unwrap()
            })
        })
        .collect();
    for (n, handle) in handles.into_iter().enumerate() {
        let config = handle.join().unwrap();
        assert!(config.grid().iter().all(|(_, _, v)| v == n as u8));
    }
}

#[cfg(feature = "imgref")]
#[test]
fn grid_to_imgvec() {
    let mut data = vec![0u8; 65_536];
    data[0] = 0x07;
    let config = decode_bmc(&data, Unstoppable).unwrap();
    let img = config.grid().to_imgvec();
    assert_eq!(img.width(), 256);
    assert_eq!(img.height(), 256);
    assert_eq!(img.buf()[255 * 256], 0x07);
}
