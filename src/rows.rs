//! Filtering and unfiltering of whole images stored as consecutive scanlines.
//!
//! Rows must be processed from top to bottom: every row is predicted from the fully
//! reconstructed row above it. Nothing here allocates, the row above is borrowed from the same
//! buffer while the current row is mutated.
use crate::common::BytesPerPixel;
use crate::filter::{filter, unfilter};

/// Reverses the Paeth filter on every row of `data`, in place.
///
/// `data` holds `data.len() / stride` scanlines of `stride` bytes each, without filter type
/// bytes. The first row is unfiltered against an implicit row of zeros.
///
/// # Panics
///
/// Panics if `stride` is zero or does not divide `data.len()`.
#[track_caller]
pub fn unfilter_rows(bpp: BytesPerPixel, stride: usize, data: &mut [u8]) {
    assert_rows(stride, data.len());

    let mut prev_start = 0;
    let mut current_start = 0;
    while current_start < data.len() {
        // `split_at_mut` keeps the previous row readable while the current row is written.
        let (done, rest) = data.split_at_mut(current_start);
        let previous = &done[prev_start..];
        let current = &mut rest[..stride];
        unfilter(bpp, previous, current);

        prev_start = current_start;
        current_start += stride;
    }
}

/// Applies the Paeth filter to every row of `data`, writing the filtered rows into `output`.
///
/// # Panics
///
/// Panics if `stride` is zero, does not divide `data.len()`, or if `output` is not the same
/// length as `data`.
#[track_caller]
pub fn filter_rows(bpp: BytesPerPixel, stride: usize, data: &[u8], output: &mut [u8]) {
    assert_rows(stride, data.len());
    assert_eq!(
        data.len(),
        output.len(),
        "output must have the same length as the image data"
    );

    let mut previous: &[u8] = &[];
    for (current, out) in data.chunks_exact(stride).zip(output.chunks_exact_mut(stride)) {
        filter(bpp, previous, current, out);
        previous = current;
    }
}

#[track_caller]
fn assert_rows(stride: usize, len: usize) {
    assert!(stride > 0, "row stride must be at least one byte");
    assert_eq!(
        len % stride,
        0,
        "image data of {} bytes is not a whole number of {} byte rows",
        len,
        stride
    );
}
