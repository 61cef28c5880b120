/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::read;

use calraster_bmp::{write_bmp_with_options, BmpDecoder, BmpEncoder};
use calraster_core::colorspace::ColorSpace;

use crate::{hash, scenarios, scratch_path, Scenario};

fn encode(scenario: &Scenario) -> Vec<u8> {
    let pixels = scenario.compose();
    let mut out = vec![];

    BmpEncoder::new(pixels.as_bytes(), pixels.encoder_options())
        .encode(&mut out)
        .unwrap();
    out
}

fn check(scenario: &Scenario) -> Vec<String> {
    let mut errors = vec![];
    let file = encode(scenario);

    if file.len() != scenario.file_size {
        errors.push(format!(
            "file size {} expected {}",
            file.len(),
            scenario.file_size
        ));
    }
    let declared = u32::from_le_bytes([file[2], file[3], file[4], file[5]]) as usize;
    if declared != file.len() {
        errors.push(format!("header declares {declared} bytes, file has {}", file.len()));
    }

    let mut decoder = BmpDecoder::new(&file);
    let decoded = decoder.decode().unwrap();

    assert_eq!(decoder.colorspace(), Some(ColorSpace::RGB));

    for sample in &scenario.samples {
        let start = (sample.y * scenario.width + sample.x) * 3;
        let found = &decoded[start..start + 3];

        if found != sample.rgb {
            errors.push(format!(
                "pixel ({},{}) is {:?}, expected {:?}",
                sample.x, sample.y, found, sample.rgb
            ));
        }
    }
    // every pixel decodes to the color of the cell it sits in
    let pixels = scenario.compose();
    if decoded != pixels.as_bytes() {
        errors.push("decoded pixels differ from the composed buffer".to_string());
    }

    if hash(&file) != hash(&encode(scenario)) {
        errors.push("two encodes of the same input differ".to_string());
    }
    errors
}

#[test]
fn test_scenarios() {
    let mut failed = Vec::new();

    for scenario in scenarios() {
        let errors = check(&scenario);

        if !errors.is_empty() {
            eprintln!("Scenario {:?} failed\n{:#?}\n", scenario.name, errors);
            failed.push(scenario.name);
        }
    }
    if !failed.is_empty() {
        panic!("Errors found in scenarios\n {:#?}", failed);
    }
}

#[test]
fn disk_matches_memory() {
    for scenario in scenarios() {
        let path = scratch_path(&format!("{}.bmp", scenario.name));
        let pixels = scenario.compose();

        write_bmp_with_options(&path, pixels.as_bytes(), pixels.encoder_options()).unwrap();
        let on_disk = read(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(on_disk.len(), scenario.file_size, "{}", scenario.name);
        assert_eq!(hash(&on_disk), hash(&encode(&scenario)), "{}", scenario.name);
    }
}
