//! Common types shared between the filter and unfilter paths

use core::num::NonZeroUsize;

/// Number of bytes that make up one pixel of a scanline.
///
/// This is the stride between two samples of the same channel, i.e. the product of the channel
/// count and the bytes per channel. Paeth prediction looks `bpp` bytes to the left, so every
/// channel is predicted independently of the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BytesPerPixel(NonZeroUsize);

impl BytesPerPixel {
    /// Grayscale or indexed, 8 bits.
    pub const ONE: Self = Self::from_const(1);
    /// Grayscale with alpha, 8 bits, or grayscale 16 bits.
    pub const TWO: Self = Self::from_const(2);
    /// RGB, 8 bits.
    pub const THREE: Self = Self::from_const(3);
    /// RGBA, 8 bits, or grayscale with alpha, 16 bits.
    pub const FOUR: Self = Self::from_const(4);
    /// RGB, 16 bits.
    pub const SIX: Self = Self::from_const(6);
    /// RGBA, 16 bits.
    pub const EIGHT: Self = Self::from_const(8);

    const fn from_const(n: usize) -> Self {
        match NonZeroUsize::new(n) {
            Some(n) => BytesPerPixel(n),
            None => panic!("pixel width must be at least one byte"),
        }
    }

    /// usize -> Self. Returns `None` for a width of zero.
    pub fn new(n: usize) -> Option<Self> {
        NonZeroUsize::new(n).map(BytesPerPixel)
    }

    /// usize -> Self, for widths already known to be valid.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    #[track_caller]
    pub fn from_usize(n: usize) -> Self {
        match Self::new(n) {
            Some(bpp) => bpp,
            None => panic!("pixel width must be at least one byte"),
        }
    }

    #[inline(always)]
    pub fn into_usize(self) -> usize {
        self.0.get()
    }
}
