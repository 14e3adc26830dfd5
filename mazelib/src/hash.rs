/// Folds a chunk coordinate and the world seed into a 31-bit chunk seed.
///
/// Integer-only so the result is identical on every platform; two clients
/// sharing a seed derive the same chunk seed for the same coordinate with
/// no communication.
pub fn chunk_hash(x: i32, z: i32, seed: i32) -> i32 {
    let mut h = seed;
    h = h.wrapping_shl(5).wrapping_sub(h).wrapping_add(x);
    h = h.wrapping_shl(5).wrapping_sub(h).wrapping_add(z);
    h & 0x7fff_ffff
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_deterministic() {
        assert_eq!(chunk_hash(12, -7, 42), chunk_hash(12, -7, 42));
    }

    #[test]
    fn test_hash_is_31_bit() {
        for (x, z, seed) in [
            (0, 0, 0),
            (i32::MAX, i32::MIN, 42),
            (-1, -1, -1),
            (123456, -654321, i32::MIN),
        ] {
            let h = chunk_hash(x, z, seed);
            assert!(h >= 0, "hash must be non-negative, got {}", h);
        }
    }

    #[test]
    fn test_hash_spreads_over_neighbors() {
        let mut seen = std::collections::HashSet::new();
        for x in -4..4 {
            for z in -4..4 {
                seen.insert(chunk_hash(x, z, 42));
            }
        }
        assert_eq!(seen.len(), 64, "neighboring chunks should not collide");
    }

    #[test]
    fn test_seed_changes_hash() {
        assert_ne!(chunk_hash(3, 5, 42), chunk_hash(3, 5, 43));
    }
}
