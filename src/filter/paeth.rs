//! The Paeth predictor and the per-width unfilter kernels built on it.
//!
//! Paeth filter pixels:
//!
//! ```text
//! C B
//! A X
//! ```
//!
//! `X` is predicted from its left neighbour `A`, the byte above `B` and the byte above-left `C`,
//! each taken from the same channel.

/// Paeth predictor, exactly as described by the PNG specification.
///
/// Ties are resolved in the order `a`, `b`, `c`.
#[inline(always)]
pub(crate) fn filter_paeth(a: u8, b: u8, c: u8) -> u8 {
    // Writing out `p = a + b - c` and then `|p - a|` etc. is not necessary, the distances reduce
    // to differences against `c` alone. i16 holds every intermediate without overflow.
    let c_i16 = i16::from(c);
    let db = i16::from(b) - c_i16;
    let da = i16::from(a) - c_i16;

    let pa = db.abs();
    let pb = da.abs();
    let pc = (da + db).abs();

    if pa <= pb && pa <= pc {
        a
    } else if pb <= pc {
        b
    } else {
        c
    }
}

/// Same results as [`filter_paeth`], without widening to a signed type.
///
/// `pa` and `pb` are plain byte distances to `c`. When `c` sits between `a` and `b` the two
/// differences have opposite signs and `pc` is the distance between `pa` and `pb`. Otherwise `pc`
/// is their sum, larger than either, so it can never be the minimum and is pinned to `u8::MAX`.
/// Staying in `u8` lets the forward filter loop vectorize.
#[inline(always)]
pub(crate) fn filter_paeth_unsigned(a: u8, b: u8, c: u8) -> u8 {
    let pa = b.abs_diff(c);
    let pb = a.abs_diff(c);
    let c_between = a.min(b) <= c && c <= a.max(b);
    let pc = if c_between { pa.abs_diff(pb) } else { u8::MAX };

    match (pa <= pb && pa <= pc, pb <= pc) {
        (true, _) => a,
        (false, true) => b,
        (false, false) => c,
    }
}

/// Unfilters a row of any pixel width, one channel at a time.
///
/// The row length does not need to be a multiple of `bpp`: each channel simply stops at the last
/// byte it owns.
pub(crate) fn unfilter_generic(bpp: usize, previous: &[u8], current: &mut [u8]) {
    debug_assert!(bpp > 0);
    debug_assert_eq!(previous.len(), current.len());

    for channel in 0..bpp {
        let mut a = 0;
        let mut c = 0;
        for (x, &b) in current
            .iter_mut()
            .zip(previous)
            .skip(channel)
            .step_by(bpp)
        {
            *x = x.wrapping_add(filter_paeth(a, b, c));
            a = *x;
            c = b;
        }
    }
}

/// Unfilters a row of single-byte pixels (grayscale or indexed at 8 bits and below).
pub(crate) fn unfilter_1(previous: &[u8], current: &mut [u8]) {
    debug_assert_eq!(previous.len(), current.len());

    let mut a = 0;
    let mut c = 0;
    for (x, &b) in current.iter_mut().zip(previous) {
        *x = x.wrapping_add(filter_paeth(a, b, c));
        a = *x;
        c = b;
    }
}

/// Unfilters a row of 3-byte pixels (8-bit RGB). `current.len()` must be a multiple of 3.
pub(crate) fn unfilter_3(previous: &[u8], current: &mut [u8]) {
    debug_assert_eq!(previous.len(), current.len());
    debug_assert_eq!(current.len() % 3, 0);

    let (mut a0, mut a1, mut a2) = (0, 0, 0);
    let (mut c0, mut c1, mut c2) = (0, 0, 0);

    let mut previous = previous;
    let mut current = current;

    while let ([x0, x1, x2, c_rest @ ..], [b0, b1, b2, p_rest @ ..]) = (current, previous) {
        current = c_rest;
        previous = p_rest;

        a0 = x0.wrapping_add(filter_paeth(a0, *b0, c0));
        a1 = x1.wrapping_add(filter_paeth(a1, *b1, c1));
        a2 = x2.wrapping_add(filter_paeth(a2, *b2, c2));

        *x0 = a0;
        *x1 = a1;
        *x2 = a2;

        c0 = *b0;
        c1 = *b1;
        c2 = *b2;
    }
}

/// Unfilters a row of 4-byte pixels (8-bit RGBA). `current.len()` must be a multiple of 4.
pub(crate) fn unfilter_4(previous: &[u8], current: &mut [u8]) {
    debug_assert_eq!(previous.len(), current.len());
    debug_assert_eq!(current.len() % 4, 0);

    let (mut a0, mut a1, mut a2, mut a3) = (0, 0, 0, 0);
    let (mut c0, mut c1, mut c2, mut c3) = (0, 0, 0, 0);

    let mut previous = previous;
    let mut current = current;

    while let ([x0, x1, x2, x3, c_rest @ ..], [b0, b1, b2, b3, p_rest @ ..]) =
        (current, previous)
    {
        current = c_rest;
        previous = p_rest;

        a0 = x0.wrapping_add(filter_paeth(a0, *b0, c0));
        a1 = x1.wrapping_add(filter_paeth(a1, *b1, c1));
        a2 = x2.wrapping_add(filter_paeth(a2, *b2, c2));
        a3 = x3.wrapping_add(filter_paeth(a3, *b3, c3));

        *x0 = a0;
        *x1 = a1;
        *x2 = a2;
        *x3 = a3;

        c0 = *b0;
        c1 = *b1;
        c2 = *b2;
        c3 = *b3;
    }
}
