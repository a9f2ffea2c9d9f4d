use std::fs;

use shannon_fano::tools::cli::{Mode, ShannonOpts};
use shannon_fano::{compress, decompress, Dictionary, Error};
use tempfile::tempdir;

fn opts_for(dir: &tempfile::TempDir, mode: Mode) -> ShannonOpts {
    ShannonOpts {
        op_mode: mode,
        dictionary: dir.path().join("codes.dict"),
        ..ShannonOpts::default()
    }
}

#[test]
fn compress_then_decompress() {
    let dir = tempdir().unwrap();
    let text = b"It is a truth universally acknowledged, that a single man in possession \
                 of a good fortune, must be in want of a wife.";

    let payload = compress(&opts_for(&dir, Mode::Encode), text).unwrap();
    assert!(payload.len() < text.len());
    assert!(dir.path().join("codes.dict").exists());

    let restored = decompress(&opts_for(&dir, Mode::Decode), &payload).unwrap();
    assert_eq!(restored, text.to_vec());
}

#[test]
fn saved_file_matches_serialized_bytes() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("table.bin");
    let dict = Dictionary::from_data(b"abracadabra");

    dict.save(&path).unwrap();
    assert_eq!(fs::read(&path).unwrap(), dict.to_bytes().unwrap());
    assert_eq!(Dictionary::load(&path).unwrap(), dict);
}

#[test]
fn save_overwrites_previous_dictionary() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("codes.dict");

    Dictionary::from_data(&(0..=255).collect::<Vec<u8>>())
        .save(&path)
        .unwrap();
    let small = Dictionary::from_data(b"ab");
    small.save(&path).unwrap();
    assert_eq!(Dictionary::load(&path).unwrap(), small);
}

#[test]
fn empty_input_round_trip() {
    let dir = tempdir().unwrap();
    let payload = compress(&opts_for(&dir, Mode::Encode), b"").unwrap();
    assert_eq!(payload, vec![0, 0, 0, 0]);
    assert!(decompress(&opts_for(&dir, Mode::Decode), &payload)
        .unwrap()
        .is_empty());
}

#[test]
fn single_symbol_round_trip() {
    let dir = tempdir().unwrap();
    let payload = compress(&opts_for(&dir, Mode::Encode), b"aaaaaa").unwrap();
    assert_eq!(u32::from_le_bytes([payload[0], payload[1], payload[2], payload[3]]), 6);

    let dict = Dictionary::load(dir.path().join("codes.dict")).unwrap();
    assert_eq!(dict.len(), 1);
    assert_eq!(
        decompress(&opts_for(&dir, Mode::Decode), &payload).unwrap(),
        b"aaaaaa".to_vec()
    );
}

#[test]
fn missing_dictionary_is_io_error() {
    let dir = tempdir().unwrap();
    let result = decompress(&opts_for(&dir, Mode::Decode), &[0, 0, 0, 0]);
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn truncated_dictionary_file_is_format_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("codes.dict");
    let bytes = Dictionary::from_data(b"hello world").to_bytes().unwrap();
    fs::write(&path, &bytes[..bytes.len() - 2]).unwrap();
    assert!(matches!(Dictionary::load(&path), Err(Error::Format(_))));
}

#[test]
fn mismatched_dictionary_is_detected() {
    let dir = tempdir().unwrap();
    let payload = compress(&opts_for(&dir, Mode::Encode), b"abababab").unwrap();

    // Replace the table with one that has no code starting with 1.
    Dictionary::from_data(b"aaaaaaab")
        .save(dir.path().join("codes.dict"))
        .unwrap();
    let result = decompress(&opts_for(&dir, Mode::Decode), &payload);
    assert!(matches!(
        result,
        Err(Error::InvalidCode { .. }) | Err(Error::UnexpectedEndOfData { .. })
    ));
}
