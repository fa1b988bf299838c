use crate::domain::models::identifier::DerivedIdentifier;

/// Seed used when the caller does not pass one
pub const DEFAULT_SEED: i32 = 0;

/// cyrb53: two 32-bit lanes mixed per UTF-16 code unit, folded into 53 bits.
///
/// Every multiply wraps at 32 bits. Stored identifiers depend on the exact
/// output, so the constants and the UTF-16 iteration must not change.
pub fn cyrb53(input: &str, seed: i32) -> u64 {
    let seed = seed as u32;
    let mut h1: u32 = 0xdead_beef ^ seed;
    let mut h2: u32 = 0x41c6_ce57 ^ seed;

    for unit in input.encode_utf16() {
        let unit = u32::from(unit);
        h1 = (h1 ^ unit).wrapping_mul(2_654_435_761);
        h2 = (h2 ^ unit).wrapping_mul(1_597_334_677);
    }

    h1 = (h1 ^ (h1 >> 16)).wrapping_mul(2_246_822_507);
    h1 ^= (h2 ^ (h2 >> 13)).wrapping_mul(3_266_489_909);
    h2 = (h2 ^ (h2 >> 16)).wrapping_mul(2_246_822_507);
    h2 ^= (h1 ^ (h1 >> 13)).wrapping_mul(3_266_489_909);

    (u64::from(h2 & 0x001f_ffff) << 32) | u64::from(h1)
}

/// Derive the `TWOL_` identifier for `input`, seeded with `seed` or [`DEFAULT_SEED`]
pub fn derive_identifier(input: &str, seed: Option<i32>) -> DerivedIdentifier {
    DerivedIdentifier::from_value(cyrb53(input, seed.unwrap_or(DEFAULT_SEED)))
}
