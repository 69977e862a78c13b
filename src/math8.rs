/// Blend two 8-bit values
#[inline]
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub const fn blend8(a: u8, b: u8, amount_of_b: u8) -> u8 {
    let delta = b as i16 - a as i16;

    let mut partial: u32 = (a as u32) << 16; // a * 65536
    partial = partial.wrapping_add(
        (delta as u32)
            .wrapping_mul(amount_of_b as u32)
            .wrapping_mul(257),
    ); // (b - a) * amount_of_b * 257
    partial = partial.wrapping_add(0x8000); // + 32768 for rounding

    (partial >> 16) as u8
}

/// Map a fraction of a period onto 0-255
///
/// Returns 0 for an empty period.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn fraction8(position: u64, period: u64) -> u8 {
    if period == 0 {
        return 0;
    }
    ((position % period) * 255 / period) as u8
}
