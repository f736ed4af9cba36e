//! Managed pixel buffer implementation.
//!
//! This module provides [`ManagedPixelBuffer`], a concrete implementation of
//! the [`PixelBuffer`] and [`MutablePixelBuffer`] traits that owns its pixel
//! data in a `Vec<u8>`. The Super-Hires decoder allocates one of these for
//! every decoded frame.
//!
//! # Example
//!
//! ```
//! use shr_pixelbuffer::{ManagedPixelBuffer, PixelFormat, PixelBuffer};
//!
//! let buffer = ManagedPixelBuffer::new(320, 200, PixelFormat::rgba8888());
//! assert_eq!(buffer.dimensions(), (320, 200));
//! assert_eq!(buffer.data().len(), 320 * 200 * 4);
//! ```

use crate::{MutablePixelBuffer, PixelBuffer, PixelFormat};
use anyhow::{anyhow, Result};
use shr_common::Rect;

/// A pixel buffer that manages its own memory.
///
/// Stores pixel data in a contiguous `Vec<u8>` in row-major order with no
/// padding between rows, so the stride (in **pixels**) always equals the
/// width. For a buffer of width W, height H, and bytes-per-pixel B:
///
/// ```text
/// Total size = W * H * B bytes
/// Pixel at (x, y) starts at offset: (y * W + x) * B
/// ```
#[derive(Debug, Clone)]
pub struct ManagedPixelBuffer {
    /// Buffer width in pixels
    width: u32,

    /// Buffer height in pixels
    height: u32,

    /// Pixel format describing how pixels are encoded
    format: PixelFormat,

    /// Raw pixel data (row-major, no padding)
    data: Vec<u8>,

    /// Stride in **pixels** (always equals width for this implementation)
    stride: usize,
}

impl ManagedPixelBuffer {
    /// Creates a new pixel buffer with the specified dimensions and format.
    ///
    /// The buffer is initialized with all zeros.
    pub fn new(width: u32, height: u32, format: PixelFormat) -> Self {
        let stride = width as usize;
        let bytes_per_pixel = format.bytes_per_pixel() as usize;
        let data = vec![0u8; stride * height as usize * bytes_per_pixel];

        Self {
            width,
            height,
            format,
            data,
            stride,
        }
    }

    /// Returns the stride in pixels.
    ///
    /// For `ManagedPixelBuffer`, the stride always equals the width.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Returns a reference to the raw pixel data.
    ///
    /// The data is in row-major order with no padding between rows, directly
    /// consumable by raster-image construction APIs.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns the buffer width in pixels.
    pub fn width(&self) -> usize {
        self.width as usize
    }

    /// Returns the buffer height in pixels.
    pub fn height(&self) -> usize {
        self.height as usize
    }

    /// Validates that a rectangle is within buffer bounds.
    fn validate_rect(&self, rect: Rect) -> Result<()> {
        if rect.x < 0
            || rect.y < 0
            || rect.x as u32 + rect.width > self.width
            || rect.y as u32 + rect.height > self.height
        {
            return Err(anyhow!(
                "Rectangle out of bounds: {:?} (buffer size: {}x{})",
                rect,
                self.width,
                self.height
            ));
        }
        Ok(())
    }
}

impl PixelBuffer for ManagedPixelBuffer {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn pixel_format(&self) -> &PixelFormat {
        &self.format
    }

    fn get_buffer(&self, rect: Rect, stride: &mut usize) -> Option<&[u8]> {
        if self.validate_rect(rect).is_err() {
            return None;
        }

        *stride = self.stride;
        let bytes_per_pixel = self.format.bytes_per_pixel() as usize;
        let start = (rect.y as usize * self.stride + rect.x as usize) * bytes_per_pixel;
        let len = rect.height as usize * self.stride * bytes_per_pixel;
        let len = len.min(self.data.len() - start);

        Some(&self.data[start..start + len])
    }
}

impl MutablePixelBuffer for ManagedPixelBuffer {
    fn get_buffer_rw(&mut self, rect: Rect, stride: &mut usize) -> Option<&mut [u8]> {
        if self.validate_rect(rect).is_err() {
            return None;
        }

        *stride = self.stride;
        let bytes_per_pixel = self.format.bytes_per_pixel() as usize;
        let start = (rect.y as usize * self.stride + rect.x as usize) * bytes_per_pixel;
        let len = rect.height as usize * self.stride * bytes_per_pixel;
        let len = len.min(self.data.len() - start);

        Some(&mut self.data[start..start + len])
    }

    fn commit_buffer(&mut self, _rect: Rect) {
        // No-op: get_buffer_rw hands out direct references into `data`.
    }

    fn image_rect(&mut self, dest: Rect, pixels: &[u8], stride: usize) -> Result<()> {
        self.validate_rect(dest)?;

        let bytes_per_pixel = self.format.bytes_per_pixel() as usize;
        let rect_width_bytes = dest.width as usize * bytes_per_pixel;

        // If stride is 0, source is tightly packed
        let actual_src_stride = if stride == 0 {
            dest.width as usize
        } else {
            stride
        };
        let actual_src_stride_bytes = actual_src_stride * bytes_per_pixel;

        // Validate source data size
        let required_src_bytes =
            actual_src_stride_bytes * (dest.height as usize - 1) + rect_width_bytes;
        if pixels.len() < required_src_bytes {
            return Err(anyhow!(
                "Insufficient source data: got {} bytes, need at least {}",
                pixels.len(),
                required_src_bytes
            ));
        }

        for y in 0..dest.height as usize {
            let dst_offset =
                ((dest.y as usize + y) * self.stride + dest.x as usize) * bytes_per_pixel;
            let src_offset = y * actual_src_stride_bytes;

            self.data[dst_offset..dst_offset + rect_width_bytes]
                .copy_from_slice(&pixels[src_offset..src_offset + rect_width_bytes]);
        }

        Ok(())
    }
}
