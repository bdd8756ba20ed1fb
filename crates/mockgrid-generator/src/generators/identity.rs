//! Identifier generation.

use rand::Rng;
use uuid::Uuid;

/// Generate a random UUID v4 from the provided RNG.
///
/// Drawing the bytes from the caller's RNG (instead of `Uuid::new_v4`)
/// keeps identifiers reproducible under a fixed seed.
pub fn uuid_v4<R: Rng>(rng: &mut R) -> Uuid {
    let mut bytes = [0u8; 16];
    rng.fill(&mut bytes);

    // Set version (4) and variant (RFC 4122) bits
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;

    Uuid::from_bytes(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_uuid_version_and_uniqueness() {
        let mut rng = StdRng::seed_from_u64(42);

        let first = uuid_v4(&mut rng);
        let second = uuid_v4(&mut rng);

        assert_eq!(first.get_version_num(), 4);
        assert_ne!(first, second);
    }

    #[test]
    fn test_uuid_deterministic() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);

        assert_eq!(uuid_v4(&mut rng1), uuid_v4(&mut rng2));
    }
}
