//! # Paeth filtering for PNG scanlines
//! This crate implements the Paeth filter type of the PNG specification, both the forward filter
//! used by encoders and the reverse (unfilter) step used by decoders.
//!
//! Everything operates on borrowed rows of bytes and nothing allocates. Choosing a filter type
//! per row, inflating the image data and interpreting color types all happen elsewhere.
//!
//! ## Unfiltering a row
//! ```
//! use png_paeth::{unfilter, BytesPerPixel};
//!
//! // The first row of an image has nothing above it.
//! let previous = [0; 6];
//! let mut current = [10, 20, 30, 5, 5, 5];
//! unfilter(BytesPerPixel::THREE, &previous, &mut current);
//! assert_eq!(current, [10, 20, 30, 15, 25, 35]);
//! ```
//!
//! ## Whole images
//! ```
//! use png_paeth::{filter_rows, unfilter_rows, BytesPerPixel};
//!
//! let bpp = BytesPerPixel::FOUR;
//! let stride = 8; // two RGBA pixels per row
//! let image: Vec<u8> = (0..32).collect();
//!
//! let mut data = vec![0; image.len()];
//! filter_rows(bpp, stride, &image, &mut data);
//! unfilter_rows(bpp, stride, &mut data);
//! assert_eq!(data, image);
//! ```

#![deny(unsafe_code)]

mod common;
mod filter;
mod rows;

#[cfg(feature = "benchmarks")]
pub mod benchable_apis;

pub use crate::common::BytesPerPixel;
pub use crate::filter::{filter, paeth_predictor, unfilter};
pub use crate::rows::{filter_rows, unfilter_rows};
