/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::ErrorKind;
use std::path::PathBuf;

use calraster_bmp::{write_bmp, BmpDecoder, BmpEncoder, BmpEncoderErrors};
use calraster_pattern::{compose, Palette, Rgb};

fn temp_file(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("calraster-bmp-{}-{}", std::process::id(), name))
}

fn encode(width: usize, height: usize, colors: &[Rgb]) -> Vec<u8> {
    let pixels = compose(width, height, colors).unwrap();
    let mut out = vec![];
    BmpEncoder::new(pixels.as_bytes(), pixels.encoder_options())
        .encode(&mut out)
        .unwrap();
    out
}

#[test]
fn reference_panel_layout() {
    let colors = Palette::e6_theoretical().calibration_colors();
    let file = encode(800, 480, &colors);

    assert_eq!(file.len(), 1_152_054);
    assert_eq!(&file[..2], b"BM");
    assert_eq!(&file[2..6], &1_152_054_u32.to_le_bytes());

    let mut decoder = BmpDecoder::new(&file);
    let pixels = decoder.decode().unwrap();
    let at = |x: usize, y: usize| {
        let start = (y * 800 + x) * 3;
        Rgb::new(pixels[start], pixels[start + 1], pixels[start + 2])
    };

    assert_eq!(at(0, 0), Rgb::BLACK);
    assert_eq!(at(799, 0), Rgb::YELLOW);
    assert_eq!(at(0, 479), Rgb::RED);
    assert_eq!(at(799, 479), Rgb::GREEN);

    // the first payload bytes are the bottom-left pixel, stored as BGR
    assert_eq!(&file[54..57], &[0, 0, 255]);
}

#[test]
fn measured_palette_round_trips_through_the_decoder() {
    let colors = Palette::e6_measured().calibration_colors();
    let pixels = compose(37, 11, &colors).unwrap();

    let mut out = vec![];
    BmpEncoder::new(pixels.as_bytes(), pixels.encoder_options())
        .encode(&mut out)
        .unwrap();

    let decoded = BmpDecoder::new(&out).decode().unwrap();
    assert_eq!(decoded, pixels.as_bytes());
}

#[test]
fn odd_width_rows_are_padded() {
    let file = encode(79, 3, &[Rgb::BLUE]);
    // 237 color bytes and 3 zero bytes per row
    assert_eq!(file.len(), 54 + 240 * 3);

    for row in file[54..].chunks_exact(240) {
        assert_eq!(&row[237..], &[0, 0, 0]);
        assert!(row[..237].chunks_exact(3).all(|p| p == [255, 0, 0]));
    }
}

#[test]
fn encoding_is_deterministic() {
    let colors = Palette::e6_theoretical().calibration_colors();
    assert_eq!(encode(123, 45, &colors), encode(123, 45, &colors));
}

#[test]
fn write_to_disk() {
    let path = temp_file("disk.bmp");
    let colors = [Rgb::RED, Rgb::GREEN, Rgb::BLUE];
    let pixels = compose(30, 20, &colors).unwrap();

    write_bmp(&path, pixels.as_bytes(), 30, 20).unwrap();

    let contents = std::fs::read(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(contents, encode(30, 20, &colors));
    assert_eq!(contents.len(), 54 + 92 * 20);
}

#[test]
fn missing_directory_keeps_io_error() {
    let path = temp_file("no-such-dir").join("out.bmp");
    let err = write_bmp(&path, &[0; 3], 1, 1).unwrap_err();

    assert!(matches!(err, BmpEncoderErrors::IoErrors(_)));
    assert_eq!(err.io_error().map(|e| e.kind()), Some(ErrorKind::NotFound));
    assert!(!path.exists());
}

#[test]
fn invalid_input_creates_no_file() {
    let path = temp_file("invalid.bmp");
    let err = write_bmp(&path, &[0; 5], 1, 2).unwrap_err();

    assert!(matches!(err, BmpEncoderErrors::WrongInputSize(6, 5)));
    assert!(!path.exists());
}

#[test]
fn existing_file_is_truncated() {
    let path = temp_file("truncate.bmp");
    std::fs::write(&path, vec![0xAA_u8; 4096]).unwrap();

    let colors = [Rgb::BLACK, Rgb::WHITE];
    let pixels = compose(4, 3, &colors).unwrap();
    write_bmp(&path, pixels.as_bytes(), 4, 3).unwrap();

    let contents = std::fs::read(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(contents, encode(4, 3, &colors));
}

#[cfg(target_os = "linux")]
#[test]
fn full_device_keeps_error_and_link() {
    let link = temp_file("full.bmp");
    let _ = std::fs::remove_file(&link);
    std::os::unix::fs::symlink("/dev/full", &link).unwrap();

    let colors = Palette::e6_theoretical().calibration_colors();
    let pixels = compose(800, 480, &colors).unwrap();
    let err = write_bmp(&link, pixels.as_bytes(), 800, 480).unwrap_err();

    let link_still_there = std::fs::symlink_metadata(&link)
        .map(|meta| meta.file_type().is_symlink())
        .unwrap_or(false);
    std::fs::remove_file(&link).unwrap();

    assert!(matches!(err, BmpEncoderErrors::IoErrors(_)));
    assert_eq!(err.io_error().map(|e| e.kind()), Some(ErrorKind::StorageFull));
    assert!(link_still_there);
    assert!(std::path::Path::new("/dev/full").exists());
}
