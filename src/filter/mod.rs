use crate::common::BytesPerPixel;

pub(crate) mod paeth;

/// Predicts a byte from its `left`, `above` and `above_left` neighbours in the same channel.
///
/// Always returns one of its three inputs, the one closest to `left + above - above_left`. Ties
/// go to `left` first, then `above`. Neighbours outside the image are passed as 0.
#[inline]
pub fn paeth_predictor(left: u8, above: u8, above_left: u8) -> u8 {
    paeth::filter_paeth(left, above, above_left)
}

/// Reverses the Paeth filter on one scanline, in place.
///
/// `current` holds the filtered bytes of the row on entry and the reconstructed bytes on exit.
/// `previous` is the already reconstructed row above it. For the first row of an image pass
/// either a row of zeros or an empty slice, both are treated the same way.
///
/// # Panics
///
/// Panics if `previous` is neither empty nor of the same length as `current`.
#[track_caller]
pub fn unfilter(bpp: BytesPerPixel, previous: &[u8], current: &mut [u8]) {
    // If the previous row is empty, then treat it as if it were filled with zeros.
    if previous.is_empty() {
        unfilter_first_row(bpp.into_usize(), current);
        return;
    }

    assert_eq!(
        previous.len(),
        current.len(),
        "previous row must have the same length as the current row"
    );

    let len = current.len();
    match bpp.into_usize() {
        1 => paeth::unfilter_1(previous, current),
        3 if len % 3 == 0 => paeth::unfilter_3(previous, current),
        4 if len % 4 == 0 => paeth::unfilter_4(previous, current),
        n => paeth::unfilter_generic(n, previous, current),
    }
}

/// With a zero row above, `b` and `c` are always 0 and the predictor picks `a`.
fn unfilter_first_row(bpp: usize, current: &mut [u8]) {
    for i in bpp..current.len() {
        current[i] = current[i].wrapping_add(current[i - bpp]);
    }
}

/// Applies the Paeth filter to one scanline, writing the filtered bytes into `output`.
///
/// This is the inverse of [`unfilter`]: unfiltering `output` against the same `previous` row
/// yields `current` again. As with [`unfilter`], an empty `previous` stands for a row of zeros.
///
/// # Panics
///
/// Panics if `output` and `current` differ in length, or if `previous` is neither empty nor of
/// the same length as `current`.
#[track_caller]
pub fn filter(bpp: BytesPerPixel, previous: &[u8], current: &[u8], output: &mut [u8]) {
    assert_eq!(
        current.len(),
        output.len(),
        "output row must have the same length as the current row"
    );

    let bpp = bpp.into_usize();
    let head = bpp.min(current.len());

    if previous.is_empty() {
        filter_first_row(bpp, current, output);
        return;
    }

    assert_eq!(
        previous.len(),
        current.len(),
        "previous row must have the same length as the current row"
    );

    // The first pixel has no left neighbour, so the prediction is the byte above.
    for ((out, &x), &b) in output[..head]
        .iter_mut()
        .zip(&current[..head])
        .zip(&previous[..head])
    {
        *out = x.wrapping_sub(b);
    }

    // Past the first pixel, `a` and `c` trail `x` and `b` by exactly one pixel.
    let trailing = current.iter().zip(previous);
    for (((out, &x), &b), (&a, &c)) in output[head..]
        .iter_mut()
        .zip(&current[head..])
        .zip(&previous[head..])
        .zip(trailing)
    {
        *out = x.wrapping_sub(paeth::filter_paeth_unsigned(a, b, c));
    }
}

/// Forward counterpart of [`unfilter_first_row`]: every byte minus its left neighbour.
fn filter_first_row(bpp: usize, current: &[u8], output: &mut [u8]) {
    let head = bpp.min(current.len());
    output[..head].copy_from_slice(&current[..head]);
    for ((out, &x), &a) in output[head..].iter_mut().zip(&current[head..]).zip(current) {
        *out = x.wrapping_sub(a);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::iter;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn widths() -> impl Iterator<Item = BytesPerPixel> {
        [1, 2, 3, 4, 5, 6, 8].into_iter().map(BytesPerPixel::from_usize)
    }

    #[test]
    fn roundtrip() {
        // A multiple of 8, 6, 5, 4, 3, 2, 1
        const LEN: u8 = 240;
        let previous: Vec<_> = iter::repeat(1).take(LEN.into()).collect();
        let current: Vec<_> = (0..LEN).collect();

        for bpp in widths() {
            let mut output = vec![0; LEN.into()];
            filter(bpp, &previous, &current, &mut output);
            unfilter(bpp, &previous, &mut output);
            assert_eq!(output, current, "Paeth with {:?} does not roundtrip", bpp);
        }
    }

    #[test]
    fn roundtrip_ascending_previous_line() {
        const LEN: u8 = 240;
        let previous: Vec<_> = (0..LEN).collect();
        let current: Vec<_> = (0..LEN).rev().collect();

        for bpp in widths() {
            let mut output = vec![0; LEN.into()];
            filter(bpp, &previous, &current, &mut output);
            unfilter(bpp, &previous, &mut output);
            assert_eq!(output, current, "Paeth with {:?} does not roundtrip", bpp);
        }
    }

    #[test]
    fn dispatch_matches_generic_path() {
        let mut rng = StdRng::seed_from_u64(3);
        for width in [1, 2, 3, 4, 5, 8] {
            for pixels in [1, 2, 9, 100] {
                let len = width * pixels;
                let mut previous = vec![0u8; len];
                let mut current = vec![0u8; len];
                rng.fill(previous.as_mut_slice());
                rng.fill(current.as_mut_slice());

                let mut expected = current.clone();
                paeth::unfilter_generic(width, &previous, &mut expected);
                unfilter(BytesPerPixel::from_usize(width), &previous, &mut current);
                assert_eq!(current, expected, "width={width}, pixels={pixels}");
            }
        }
    }

    #[test]
    fn first_row_accumulates_left_deltas() {
        let mut current = [10, 10, 10];
        unfilter(BytesPerPixel::ONE, &[0; 3], &mut current);
        assert_eq!(current, [10, 20, 30]);

        let mut current = [10, 10, 10];
        unfilter(BytesPerPixel::ONE, &[], &mut current);
        assert_eq!(current, [10, 20, 30]);
    }

    #[test]
    fn empty_previous_is_a_zero_row() {
        let current: Vec<u8> = (0..=255).map(|x: u8| x.wrapping_mul(37)).collect();
        let zeros = vec![0; current.len()];

        for bpp in widths() {
            let mut explicit = current.clone();
            unfilter(bpp, &zeros, &mut explicit);
            let mut implicit = current.clone();
            unfilter(bpp, &[], &mut implicit);
            assert_eq!(explicit, implicit, "{:?}", bpp);

            let mut explicit = vec![0; current.len()];
            filter(bpp, &zeros, &current, &mut explicit);
            let mut implicit = vec![0; current.len()];
            filter(bpp, &[], &current, &mut implicit);
            assert_eq!(explicit, implicit, "{:?}", bpp);
        }
    }

    #[test]
    fn filter_predicts_from_one_pixel_back() {
        let bpp = BytesPerPixel::TWO;

        // First pixel subtracts the byte above. Then paeth(5, 3, 1) and paeth(6, 4, 2) pick left.
        let mut output = [0; 4];
        filter(bpp, &[1, 2, 3, 4], &[5, 6, 7, 8], &mut output);
        assert_eq!(output, [4, 4, 2, 2]);

        // paeth(10, 0, 10) and paeth(20, 0, 20) pick above.
        let mut output = [0; 4];
        filter(bpp, &[10, 20, 0, 0], &[10, 20, 30, 30], &mut output);
        assert_eq!(output, [0, 0, 30, 30]);

        let mut output = [0; 4];
        filter(bpp, &[], &[5, 6, 7, 9], &mut output);
        assert_eq!(output, [5, 6, 2, 3]);
    }

    #[test]
    fn wraps_instead_of_saturating() {
        let mut current = [255, 2];
        unfilter(BytesPerPixel::ONE, &[0, 0], &mut current);
        assert_eq!(current, [255, 1]);
    }

    #[test]
    fn width_not_dividing_the_row_uses_generic_path() {
        // Seven bytes of RGB: the last pixel is incomplete.
        let previous = [0u8; 7];
        let mut current = [1, 2, 3, 1, 2, 3, 1];
        unfilter(BytesPerPixel::THREE, &previous, &mut current);
        assert_eq!(current, [1, 2, 3, 2, 4, 6, 3]);
    }

    #[test]
    fn row_shorter_than_a_pixel() {
        let previous = [5u8, 6];
        let current = [7u8, 9];
        let mut output = [0; 2];
        filter(BytesPerPixel::FOUR, &previous, &current, &mut output);
        unfilter(BytesPerPixel::FOUR, &previous, &mut output);
        assert_eq!(output, current);
    }

    #[test]
    #[should_panic(expected = "same length")]
    fn mismatched_lengths_panic() {
        let mut current = [0u8; 4];
        unfilter(BytesPerPixel::ONE, &[0; 3], &mut current);
    }

    #[test]
    #[should_panic(expected = "same length")]
    fn mismatched_output_panics() {
        let mut output = [0u8; 3];
        filter(BytesPerPixel::ONE, &[0; 4], &[0; 4], &mut output);
    }
}
