use std::collections::HashSet;
use std::sync::atomic::Ordering;

use crate::metrics::METRICS;
use crate::schema::TradeLeadRecord;

/// Deduplicates the concatenated adapter output and assigns ids.
///
/// ALGORITHM:
/// - Composite key: `product-volume-event_date-company`
/// - 64-bit FNV-1a over the key
/// - First record seen for a hash wins; later duplicates dropped
/// - The kept record's id is the absolute value of the hash
///   reinterpreted as a signed integer
///
/// PROPERTIES:
/// - Idempotent: running it twice yields the same set and ids
/// - Order preserving: emission follows first-seen order across
///   the concatenated input
/// - Reproducible: FNV-1a is fixed, so ids are stable across runs
///   and platforms (a language-default hasher would not be)
pub fn dedup_and_assign_ids(events: Vec<TradeLeadRecord>) -> Vec<TradeLeadRecord> {
    let mut seen: HashSet<u64> = HashSet::new();
    let mut kept = Vec::with_capacity(events.len());

    for mut event in events {
        let key = format!(
            "{}-{}-{}-{}",
            event.product, event.volume, event.event_date, event.company
        );
        let hash = fnv1a64(&key);

        if seen.insert(hash) {
            event.id = (hash as i64).unsigned_abs();
            kept.push(event);
        } else {
            METRICS.duplicates_dropped.fetch_add(1, Ordering::Relaxed);
        }
    }

    kept
}

/// Fowler–Noll–Vo 1a, 64-bit.
///
/// Written out rather than pulled from a hasher crate so the id
/// derivation is self-contained and documented in one place.
pub fn fnv1a64(input: &str) -> u64 {
    const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;

    let mut hash = OFFSET_BASIS;
    for byte in input.as_bytes() {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(PRIME);
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    // Reference vectors from the FNV specification.
    #[test]
    fn fnv1a64_reference_vectors() {
        assert_eq!(fnv1a64(""), 0xcbf2_9ce4_8422_2325);
        assert_eq!(fnv1a64("a"), 0xaf63_dc4c_8601_ec8c);
        assert_eq!(fnv1a64("foobar"), 0x8594_4171_f739_67e8);
    }

    #[test]
    fn fnv1a64_is_stable_across_calls() {
        let key = "Катанка-Катанка-15.12.2025 14:36-АО Севсталь";
        assert_eq!(fnv1a64(key), fnv1a64(key));
    }
}
