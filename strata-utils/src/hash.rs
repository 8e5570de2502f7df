//! SHA-256-derived hashing used to key the Voronoi jitter.

use sha2::{Digest, Sha256};

/// The first 64 bits of `SHA-256(seed.to_le_bytes())`, with each 32-bit
/// half byte-swapped to little-endian. This is the jitter key the Voronoi
/// upsampler mixes with the legacy LCG to displace each quarter-resolution
/// cell; it depends only on the seed's bytes, never on host endianness.
#[must_use]
pub fn voronoi_sha(seed: i64) -> u64 {
    let mut hasher = Sha256::new();
    hasher.update(seed.to_le_bytes());
    let digest = hasher.finalize();

    let lo = u32::from_le_bytes(digest[0..4].try_into().expect("4-byte slice"));
    let hi = u32::from_le_bytes(digest[4..8].try_into().expect("4-byte slice"));
    (u64::from(hi) << 32) | u64::from(lo)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_deterministic() {
        assert_eq!(voronoi_sha(12345), voronoi_sha(12345));
    }

    #[test]
    fn differs_across_seeds() {
        assert_ne!(voronoi_sha(1), voronoi_sha(2));
    }

    #[test]
    fn depends_only_on_seed_bytes() {
        // Same byte pattern reached via a different path must hash the same.
        let seed: i64 = -8_817_352_314_107_900_000;
        let direct = voronoi_sha(seed);
        let via_bytes = {
            let mut hasher = Sha256::new();
            hasher.update(seed.to_le_bytes());
            let digest = hasher.finalize();
            let lo = u32::from_le_bytes(digest[0..4].try_into().unwrap());
            let hi = u32::from_le_bytes(digest[4..8].try_into().unwrap());
            (u64::from(hi) << 32) | u64::from(lo)
        };
        assert_eq!(direct, via_bytes);
    }
}
