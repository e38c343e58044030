use bytefy::{ConversionRequest, Converter, ErrorKind};
use std::fs;
use std::path::{Path, PathBuf};

fn encode_png(width: u32, height: u32) -> Vec<u8> {
    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().unwrap();
        let pixels: Vec<u8> = (0..width * height * 4)
            .map(|i| (i * 7 % 256) as u8)
            .collect();
        writer.write_image_data(&pixels).unwrap();
        writer.finish().unwrap();
    }
    out
}

/// Pulls the byte values back out of a generated `[]byte{...}` literal.
fn parse_byte_literal(source: &str, identifier: &str) -> Vec<u8> {
    let header = format!("var {} = []byte{{", identifier);
    let start = source.find(&header).expect("declaration") + header.len();
    let end = start + source[start..].find('}').expect("closing brace");
    source[start..end]
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| u8::from_str_radix(s.trim_start_matches("0x"), 16).unwrap())
        .collect()
}

fn convert_file(input: &Path, output: &Path, identifier: &str) -> bytefy::Result<PathBuf> {
    let request = ConversionRequest::new(input, Some(output.to_path_buf()), "assets", identifier);
    Converter::with_defaults().convert(&request)
}

#[test]
fn png_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("logo.png");
    let image = encode_png(13, 7);
    fs::write(&input, &image).unwrap();

    let output = dir.path().join("internal").join("assets").join("logo.go");
    let written = convert_file(&input, &output, "Logo").unwrap();
    assert_eq!(written, output);

    let source = fs::read_to_string(&output).unwrap();
    assert!(source.contains("\npackage assets\n"));
    assert_eq!(parse_byte_literal(&source, "Logo"), image);
}

#[test]
fn every_byte_value_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("all.bin");
    let bytes: Vec<u8> = (0..=255).rev().collect();
    fs::write(&input, &bytes).unwrap();

    let output = dir.path().join("all.go");
    convert_file(&input, &output, "All").unwrap();

    let source = fs::read_to_string(&output).unwrap();
    assert_eq!(parse_byte_literal(&source, "All"), bytes);
}

#[test]
fn cafebabe_listed_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("img.png");
    fs::write(&input, [0xCA, 0xFE, 0xBA, 0xBE]).unwrap();

    let output = dir.path().join("mypkg").join("output.go");
    let request = ConversionRequest::new(&input, Some(output.clone()), "mypkg", "ImageBytes");
    Converter::with_defaults().convert(&request).unwrap();

    let source = fs::read_to_string(&output).unwrap();
    assert!(source.contains("package mypkg\n"));
    let literal = "var ImageBytes = []byte{\n\t0xca, 0xfe, 0xba, 0xbe,\n}\n";
    assert!(source.contains(literal));
}

#[test]
fn overwrites_existing_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("img.png");
    fs::write(&input, [0x01]).unwrap();
    let output = dir.path().join("out.go");
    let stale = "stale content, longer than the new file";
    fs::write(&output, stale).unwrap();

    convert_file(&input, &output, "Data").unwrap();
    let source = fs::read_to_string(&output).unwrap();
    assert!(!source.contains("stale"));
    assert_eq!(parse_byte_literal(&source, "Data"), vec![0x01]);
}

#[test]
fn missing_input_creates_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("gen").join("out.go");

    let missing = dir.path().join("missing.png");
    let err = convert_file(&missing, &output, "Data").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Open);
    assert!(!dir.path().join("gen").exists());
}

#[test]
fn invalid_identifier_creates_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("img.png");
    fs::write(&input, [0x01]).unwrap();
    let output = dir.path().join("gen").join("out.go");

    let err = convert_file(&input, &output, "123abc").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidIdentifier);
    assert!(!dir.path().join("gen").exists());
}

#[test]
fn output_under_a_file_fails_to_create_directory() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("img.png");
    fs::write(&input, [0x01]).unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "").unwrap();

    let output = blocker.join("out.go");
    let err = convert_file(&input, &output, "Data").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CreateDirectory);
}

#[test]
fn convert_with_string_paths() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("icon.png");
    fs::write(&input, encode_png(2, 2)).unwrap();
    let output = dir.path().join("icons").join("icon.go");

    let written = bytefy::convert(
        input.to_str().unwrap(),
        output.to_str().unwrap(),
        "icons",
        "Icon",
    )
    .unwrap();
    assert_eq!(written, output);
    let source = fs::read_to_string(&output).unwrap();
    assert!(source.contains("var Icon = []byte{"));
}
