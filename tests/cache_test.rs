use std::sync::Arc;

use chrono::{DateTime, Utc};
use tempeste::cache::TempoCache;
use tempeste::rte::{TempoColor, TempoDay};

fn day(start: &str, end: &str, color: TempoColor) -> TempoDay {
    TempoDay {
        start: DateTime::parse_from_rfc3339(start).unwrap(),
        end: DateTime::parse_from_rfc3339(end).unwrap(),
        color,
        updated: Utc::now(),
    }
}

#[test]
fn replace_swaps_wholesale_across_threads() {
    let cache = Arc::new(TempoCache::new());

    let writer = {
        let cache = cache.clone();
        std::thread::spawn(move || {
            for i in 0..100 {
                let color = if i % 2 == 0 {
                    TempoColor::Red
                } else {
                    TempoColor::Blue
                };
                cache.replace(vec![
                    day(
                        "2026-01-05T00:00:00+01:00",
                        "2026-01-06T00:00:00+01:00",
                        color,
                    ),
                    day(
                        "2026-01-06T00:00:00+01:00",
                        "2026-01-07T00:00:00+01:00",
                        color,
                    ),
                ]);
            }
        })
    };

    // Readers only ever see a complete two-day calendar of a single color,
    // or the initial empty one
    for _ in 0..100 {
        let snap = cache.snapshot();
        assert!(snap.len() == 0 || snap.len() == 2);
        if snap.len() == 2 {
            assert_eq!(snap.days()[0].color, snap.days()[1].color);
        }
    }

    writer.join().unwrap();
    assert_eq!(cache.snapshot().len(), 2);
}

#[test]
fn snapshot_is_a_reference_not_a_copy() {
    let cache = TempoCache::new();
    cache.replace(vec![day(
        "2026-01-05T00:00:00+01:00",
        "2026-01-06T00:00:00+01:00",
        TempoColor::White,
    )]);

    let a = cache.snapshot();
    let b = cache.snapshot();
    assert!(Arc::ptr_eq(&a, &b));

    cache.replace(Vec::new());
    let c = cache.snapshot();
    assert!(!Arc::ptr_eq(&a, &c));
    assert_eq!(a.len(), 1, "old snapshot stays intact after replacement");
}
