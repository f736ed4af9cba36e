//! End-to-end tests for SHR graphic decoding.
//!
//! These tests build raw dumps byte by byte and check the decoded frames
//! against the format's documented behavior: region offsets, per-scanline
//! palette indirection, nibble ordering and exact channel expansion.

use shr_decoder::{
    decode, decode_into, DecodeError, ManagedPixelBuffer, PixelBuffer, PixelFormat,
    BYTES_PER_SCANLINE, FRAME_BYTES, HEIGHT, PIXEL_PLANE_LEN, RAW_LEN, SCANLINE_CONTROL_LEN, WIDTH,
};

fn blank_raw() -> Vec<u8> {
    vec![0u8; RAW_LEN]
}

fn set_palette_word(raw: &mut [u8], palette: usize, entry: usize, word: u16) {
    let offset = PIXEL_PLANE_LEN + SCANLINE_CONTROL_LEN + (palette * 16 + entry) * 2;
    raw[offset..offset + 2].copy_from_slice(&word.to_le_bytes());
}

fn set_scanline_control(raw: &mut [u8], row: usize, value: u8) {
    raw[PIXEL_PLANE_LEN + row] = value;
}

/// Extract one decoded pixel as `[R, G, B, A]`.
fn pixel_at(frame: &ManagedPixelBuffer, x: usize, y: usize) -> [u8; 4] {
    let offset = (y * WIDTH + x) * 4;
    frame.data()[offset..offset + 4].try_into().unwrap()
}

#[test]
fn size_invariant() {
    let frame = decode(&blank_raw()).unwrap();
    assert_eq!(frame.data().len(), FRAME_BYTES);
    assert_eq!(frame.dimensions(), (320, 200));
    assert!(frame.pixel_format().is_rgba8888());
}

#[test]
fn trailing_bytes_are_ignored() {
    let mut raw = blank_raw();
    set_palette_word(&mut raw, 0, 0, 0x0F00);
    let reference = decode(&raw).unwrap();

    raw.extend_from_slice(&[0xDE; 300]);
    let with_trailer = decode(&raw).unwrap();
    assert_eq!(reference.data(), with_trailer.data());
}

#[test]
fn truncated_input_reports_lengths() {
    let raw = vec![0u8; 12_345];
    assert_eq!(
        decode(&raw).unwrap_err(),
        DecodeError::TruncatedInput {
            required: RAW_LEN,
            actual: 12_345,
        }
    );
}

#[test]
fn all_red_frame() {
    // PixelPlane all zero, ScanlineControl all zero, palette 0 entry 0 red:
    // every output pixel must be pure red, fully opaque.
    let mut raw = blank_raw();
    set_palette_word(&mut raw, 0, 0, 0x0F00);

    let frame = decode(&raw).unwrap();
    for pixel in frame.data().chunks_exact(4) {
        assert_eq!(pixel, [255, 0, 0, 255]);
    }
}

#[test]
fn channel_expansion_exactness() {
    // v * 17 maps the 4-bit range onto 0-255 exactly: 0 -> 0, 8 -> 136, 15 -> 255.
    let mut raw = blank_raw();
    set_palette_word(&mut raw, 0, 0, 0x008F);

    let frame = decode(&raw).unwrap();
    assert_eq!(pixel_at(&frame, 0, 0), [0, 136, 255, 255]);
}

#[test]
fn pixel_pairing_order() {
    // A plane byte 0xAB at column c decodes to entry 0xA at output column 2c
    // and entry 0xB at column 2c+1.
    let mut raw = blank_raw();
    set_palette_word(&mut raw, 0, 0xA, 0x0F00);
    set_palette_word(&mut raw, 0, 0xB, 0x00F0);

    let row = 123;
    let col = 42;
    raw[row * BYTES_PER_SCANLINE + col] = 0xAB;

    let frame = decode(&raw).unwrap();
    assert_eq!(pixel_at(&frame, 2 * col, row), [255, 0, 0, 255]);
    assert_eq!(pixel_at(&frame, 2 * col + 1, row), [0, 255, 0, 255]);
    assert_eq!(pixel_at(&frame, 2 * col + 2, row), [0, 0, 0, 255]);
    assert_eq!(pixel_at(&frame, 2 * col - 1, row), [0, 0, 0, 255]);
}

#[test]
fn palette_indirection_is_per_scanline() {
    // Give each palette a distinct entry-0 color, then point one scanline at
    // palette 5. Only that scanline may change, and exactly to palette 5's
    // color.
    let mut raw = blank_raw();
    for palette in 0..16 {
        set_palette_word(&mut raw, palette, 0, palette as u16); // blue = palette index
    }

    let baseline = decode(&raw).unwrap();
    for row in 0..HEIGHT {
        assert_eq!(pixel_at(&baseline, 0, row), [0, 0, 0, 255]);
    }

    set_scanline_control(&mut raw, 57, 0x05);
    let frame = decode(&raw).unwrap();

    for row in 0..HEIGHT {
        let expected = if row == 57 {
            [0, 0, 5 * 17, 255]
        } else {
            [0, 0, 0, 255]
        };
        for x in 0..WIDTH {
            assert_eq!(pixel_at(&frame, x, row), expected, "row {row} col {x}");
        }
    }
}

#[test]
fn scanline_control_high_bits_are_ignored() {
    let mut raw = blank_raw();
    for palette in 0..16 {
        set_palette_word(&mut raw, palette, 0, (palette as u16) << 8);
    }

    set_scanline_control(&mut raw, 10, 0x07);
    let low_nibble_only = decode(&raw).unwrap();

    // Same palette selector with hardware mode flags set in the upper bits.
    set_scanline_control(&mut raw, 10, 0xF7);
    let with_flags = decode(&raw).unwrap();

    assert_eq!(low_nibble_only.data(), with_flags.data());
}

#[test]
fn determinism() {
    let mut raw = blank_raw();
    for (i, byte) in raw.iter_mut().enumerate() {
        *byte = (i % 251) as u8;
    }

    let first = decode(&raw).unwrap();
    let second = decode(&raw).unwrap();
    assert_eq!(first.data(), second.data());
}

#[test]
fn decode_into_external_buffer() {
    let mut raw = blank_raw();
    set_palette_word(&mut raw, 0, 0, 0x0ABC);

    let mut buffer = ManagedPixelBuffer::new(WIDTH as u32, HEIGHT as u32, PixelFormat::rgba8888());
    decode_into(&raw, &mut buffer).unwrap();

    let frame = decode(&raw).unwrap();
    assert_eq!(buffer.data(), frame.data());
}
