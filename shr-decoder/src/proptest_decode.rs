//! Property tests for SHR frame decoding.
//!
//! These tests verify the decoder's contracts over arbitrary byte patterns:
//! any input long enough to contain the three regions is valid and decodes
//! deterministically into a fully opaque frame of fixed size, and any shorter
//! input is rejected with the truncation error.

use proptest::prelude::*;

use crate::{decode, DecodeError, PixelBuffer, FRAME_BYTES, RAW_LEN};

proptest! {
    /// Any sufficiently long input decodes to exactly one frame's worth of
    /// RGBA data with every alpha byte opaque.
    #[test]
    fn decode_accepts_arbitrary_bytes(raw in prop::collection::vec(any::<u8>(), RAW_LEN..RAW_LEN + 64)) {
        let frame = decode(&raw).unwrap();
        prop_assert_eq!(frame.data().len(), FRAME_BYTES);
        prop_assert_eq!(frame.dimensions(), (320, 200));
        for pixel in frame.data().chunks_exact(4) {
            prop_assert_eq!(pixel[3], 255);
        }
    }

    /// Decoding is a pure function: the same bytes produce the same frame.
    #[test]
    fn decode_is_deterministic(raw in prop::collection::vec(any::<u8>(), RAW_LEN..RAW_LEN + 8)) {
        let first = decode(&raw).unwrap();
        let second = decode(&raw).unwrap();
        prop_assert_eq!(first.data(), second.data());
    }

    /// Any input shorter than a full dump is rejected, with the actual
    /// length reported.
    #[test]
    fn decode_rejects_short_input(len in 0usize..RAW_LEN) {
        let raw = vec![0u8; len];
        prop_assert_eq!(
            decode(&raw).unwrap_err(),
            DecodeError::TruncatedInput {
                required: RAW_LEN,
                actual: len,
            }
        );
    }
}
