//! Pixel buffer types for decoded Super-Hires frames.
//!
//! This crate provides the output-side pixel format description and buffer
//! management used by the Super-Hires decoder:
//!
//! - [`PixelFormat`] - describes how decoded pixels are laid out in memory
//! - [`PixelBuffer`] / [`MutablePixelBuffer`] - buffer access traits
//! - [`ManagedPixelBuffer`] - a concrete buffer that owns its pixel data

pub mod buffer;
pub mod format;
pub mod managed;

pub use buffer::{MutablePixelBuffer, PixelBuffer};
pub use format::PixelFormat;
pub use managed::ManagedPixelBuffer;
