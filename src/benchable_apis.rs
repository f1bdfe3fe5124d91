//! Development-time-only helper module for exporting private APIs so that they can be benchmarked.
//! This module is gated behind the "benchmarks" feature.

use crate::common::BytesPerPixel;
use crate::filter::paeth;

/// The dispatching unfilter, taking a plain byte width as benchmark parameters are plain numbers.
pub fn unfilter(bpp: u8, previous: &[u8], current: &mut [u8]) {
    let bpp = BytesPerPixel::from_usize(usize::from(bpp));
    crate::filter::unfilter(bpp, previous, current)
}

/// Always takes the channel-strided path, even for widths with a specialized kernel, so the two
/// can be compared.
pub fn unfilter_generic(bpp: u8, previous: &[u8], current: &mut [u8]) {
    let bpp = BytesPerPixel::from_usize(usize::from(bpp));
    assert_eq!(previous.len(), current.len());
    paeth::unfilter_generic(bpp.into_usize(), previous, current)
}

pub fn filter(bpp: u8, previous: &[u8], current: &[u8], output: &mut [u8]) {
    let bpp = BytesPerPixel::from_usize(usize::from(bpp));
    crate::filter::filter(bpp, previous, current, output)
}
