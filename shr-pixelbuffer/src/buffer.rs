//! Pixel buffer access traits.
//!
//! This module defines traits for accessing and filling pixel buffers:
//!
//! - [`PixelBuffer`]: Read-only access to pixel data
//! - [`MutablePixelBuffer`]: Read-write access for decoders that fill a buffer
//!
//! # Stride is in Pixels, Not Bytes
//!
//! All stride values in this API are measured in **pixels**, not bytes.
//! To calculate byte offsets:
//!
//! ```text
//! byte_offset = (y * stride + x) * bytes_per_pixel
//! byte_length = height * stride * bytes_per_pixel
//! ```
//!
//! # Buffer Access Patterns
//!
//! For read-only access, use [`PixelBuffer::get_buffer()`] and navigate rows
//! with the returned stride. For writing, decoders normally use
//! [`MutablePixelBuffer::image_rect()`] with tightly packed scanline data;
//! direct mutation via [`MutablePixelBuffer::get_buffer_rw()`] must be
//! followed by a matching [`MutablePixelBuffer::commit_buffer()`] call.

use crate::PixelFormat;
use anyhow::Result;
use shr_common::Rect;

/// Read-only pixel buffer access.
///
/// Implementations must guarantee that pixel data remains valid and unchanged
/// during read access.
///
/// # Stride Convention
///
/// All stride values are in **pixels**, not bytes. See module documentation
/// for details.
pub trait PixelBuffer {
    /// Returns the dimensions of the pixel buffer as (width, height).
    fn dimensions(&self) -> (u32, u32);

    /// Returns a reference to the pixel format used by this buffer.
    fn pixel_format(&self) -> &PixelFormat;

    /// Gets read-only access to a rectangular region of pixel data.
    ///
    /// `stride` is an output parameter receiving the stride in **pixels**
    /// (not bytes). Returns `None` if the rectangle is out of bounds.
    ///
    /// The returned slice may contain more data than just the requested
    /// rectangle; use the stride value to correctly navigate through rows.
    fn get_buffer(&self, rect: Rect, stride: &mut usize) -> Option<&[u8]>;
}

/// Mutable pixel buffer a decoder can fill.
///
/// # Usage Pattern
///
/// For direct pixel manipulation:
/// 1. Call [`get_buffer_rw()`](Self::get_buffer_rw) to get mutable access
/// 2. Modify the pixel data
/// 3. Call [`commit_buffer()`](Self::commit_buffer) to finalize changes
///
/// For blitting decoded scanlines, use [`image_rect()`](Self::image_rect).
pub trait MutablePixelBuffer: PixelBuffer {
    /// Gets read-write access to a rectangular region of pixel data.
    ///
    /// `stride` is an output parameter receiving the stride in **pixels**
    /// (not bytes). Returns `None` if the rectangle is out of bounds.
    ///
    /// After modifying the pixel data, you **must** call
    /// [`commit_buffer()`](Self::commit_buffer) with the same rectangle to
    /// finalize the changes.
    fn get_buffer_rw(&mut self, rect: Rect, stride: &mut usize) -> Option<&mut [u8]>;

    /// Commits changes made via [`get_buffer_rw()`](Self::get_buffer_rw).
    ///
    /// Must be called with the same rectangle that was passed to
    /// `get_buffer_rw()`. Implementations that hand out direct references may
    /// treat this as a no-op, but callers cannot rely on that.
    fn commit_buffer(&mut self, rect: Rect);

    /// Copies image data into a rectangle.
    ///
    /// `pixels` must be in this buffer's pixel format. `stride` is the source
    /// stride in **pixels**; 0 means the source is tightly packed (stride
    /// equal to the rectangle width).
    ///
    /// # Errors
    ///
    /// Fails if the rectangle is out of bounds or `pixels` is too short for
    /// the requested rectangle and stride.
    fn image_rect(&mut self, dest: Rect, pixels: &[u8], stride: usize) -> Result<()>;
}
