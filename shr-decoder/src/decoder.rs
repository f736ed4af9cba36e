//! Scanline decoding of raw SHR dumps into RGBA pixel buffers.
//!
//! Decoding is a pure transformation: input bytes in, a freshly allocated
//! frame out. For every one of the 200 scanlines the control byte's low
//! nibble selects the active palette, then each of the 160 pixel plane bytes
//! expands into two RGBA pixels (high nibble first). Every pixel of the
//! 320x200 frame is written; nothing else is touched.
//!
//! Two entry points cover the two calling styles:
//!
//! - [`decode`] allocates and returns a [`ManagedPixelBuffer`]
//! - [`decode_into`] writes into a caller-supplied [`MutablePixelBuffer`]
//!   (which must already be 320x200 RGBA8888)

use anyhow::{bail, Context, Result};
use shr_common::Rect;

use crate::palette::PaletteSet;
use crate::regions::Regions;
use crate::{
    DecodeError, ManagedPixelBuffer, MutablePixelBuffer, PixelFormat,
    BYTES_PER_SCANLINE, FRAME_BYTES, HEIGHT, WIDTH,
};

/// Decode a raw SHR graphic dump into a freshly allocated 320x200 frame.
///
/// `raw` must hold at least [`RAW_LEN`](crate::RAW_LEN) bytes; anything past
/// that is ignored. The call is deterministic, performs no I/O and has no
/// side effects; it may run concurrently with other decodes on independent
/// inputs.
///
/// # Errors
///
/// Returns [`DecodeError::TruncatedInput`] if `raw` is too short to contain
/// all three regions. No partial frame is produced.
///
/// # Example
///
/// ```
/// use shr_decoder::{decode, RAW_LEN};
///
/// let raw = vec![0u8; RAW_LEN];
/// let frame = decode(&raw).unwrap();
/// assert_eq!(frame.data().len(), 320 * 200 * 4);
/// ```
pub fn decode(raw: &[u8]) -> Result<ManagedPixelBuffer, DecodeError> {
    let regions = Regions::split(raw)?;
    let palettes = PaletteSet::parse(regions.palette_table);

    let mut frame = ManagedPixelBuffer::new(WIDTH as u32, HEIGHT as u32, PixelFormat::rgba8888());
    let pixels = expand_frame(&regions, &palettes);
    frame
        .image_rect(full_frame(), &pixels, 0)
        .expect("expanded frame fits the buffer allocated for it");

    tracing::debug!("decoded SHR frame: {}x{} RGBA", WIDTH, HEIGHT);
    Ok(frame)
}

/// Decode a raw SHR graphic dump into a caller-supplied buffer.
///
/// The buffer must be exactly 320x200 with an RGBA8888 pixel format, the way
/// a display layer's framebuffer for this graphic mode would be set up.
///
/// # Errors
///
/// Fails if the buffer has the wrong dimensions or pixel format, or if `raw`
/// is truncated. The buffer contents are untouched on failure.
pub fn decode_into(raw: &[u8], buffer: &mut dyn MutablePixelBuffer) -> Result<()> {
    let (width, height) = buffer.dimensions();
    if (width as usize, height as usize) != (WIDTH, HEIGHT) {
        bail!(
            "SHR frames are {}x{}, buffer is {}x{}",
            WIDTH,
            HEIGHT,
            width,
            height
        );
    }
    if !buffer.pixel_format().is_rgba8888() {
        bail!("SHR decoding requires an RGBA8888 buffer, got {:?}", buffer.pixel_format());
    }

    let regions = Regions::split(raw).context("Failed to slice SHR regions")?;
    let palettes = PaletteSet::parse(regions.palette_table);

    let pixels = expand_frame(&regions, &palettes);
    buffer
        .image_rect(full_frame(), &pixels, 0)
        .context("Failed to write decoded frame to buffer")?;

    tracing::debug!("decoded SHR frame into caller buffer: {}x{} RGBA", WIDTH, HEIGHT);
    Ok(())
}

/// The destination rectangle covering a whole frame.
fn full_frame() -> Rect {
    Rect::new(0, 0, WIDTH as u32, HEIGHT as u32)
}

/// Expand all scanlines into a tightly packed RGBA8888 frame.
///
/// Pixel indices are 4-bit fields, so palette lookups are range-safe by
/// construction and this step cannot fail.
fn expand_frame(regions: &Regions<'_>, palettes: &PaletteSet) -> Vec<u8> {
    let mut pixels = Vec::with_capacity(FRAME_BYTES);

    for row in 0..HEIGHT {
        // Only the low nibble selects a palette; the hardware mode flags in
        // the upper bits are outside this decoder's supported format.
        let palette = &palettes[(regions.scanline_control[row] & 0x0F) as usize];

        let line = &regions.pixel_plane[row * BYTES_PER_SCANLINE..(row + 1) * BYTES_PER_SCANLINE];
        for &pair in line {
            // High nibble is the left pixel of the pair.
            pixels.extend_from_slice(&palette[(pair >> 4) as usize].to_rgba());
            pixels.extend_from_slice(&palette[(pair & 0x0F) as usize].to_rgba());
        }
    }

    pixels
}
