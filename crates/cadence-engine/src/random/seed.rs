use rand::Rng;

/// Digests a seed string into four well-mixed 32-bit words.
///
/// Four accumulators are stirred with multiplicative constants over the
/// seed's UTF-8 bytes, then finalized with an xorshift-style pass. The
/// constants and structure are fixed: changing them changes every sequence
/// ever derived from a stored seed, which is a breaking change.
pub(super) fn digest(seed: &str) -> [u32; 4] {
    let mut h1: u32 = 1779033703;
    let mut h2: u32 = 3144134277;
    let mut h3: u32 = 1013904242;
    let mut h4: u32 = 2773480762;

    for &byte in seed.as_bytes() {
        let k = u32::from(byte);
        h1 = h2 ^ (h1 ^ k).wrapping_mul(597399067);
        h2 = h3 ^ (h2 ^ k).wrapping_mul(2869860233);
        h3 = h4 ^ (h3 ^ k).wrapping_mul(951274213);
        h4 = h1 ^ (h4 ^ k).wrapping_mul(2716044179);
    }

    h1 = (h3 ^ (h1 >> 18)).wrapping_mul(597399067);
    h2 = (h4 ^ (h2 >> 22)).wrapping_mul(2869860233);
    h3 = (h1 ^ (h3 >> 17)).wrapping_mul(951274213);
    h4 = (h2 ^ (h4 >> 19)).wrapping_mul(2716044179);

    [h1 ^ h2 ^ h3 ^ h4, h2 ^ h1, h3 ^ h1, h4 ^ h1]
}

/// Synthesizes a seed string from a non-deterministic source.
///
/// Eight integers in `[89, 121]` concatenated. The value itself carries no
/// meaning; it only needs to vary between runs and survive being printed.
pub(super) fn synthesize() -> String {
    let mut rng = rand::rng();
    (0..8)
        .map(|_| rng.random_range(89..122u32).to_string())
        .collect()
}
