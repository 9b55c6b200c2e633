// tests/store.rs
//
// The fight cache against the bundled datasets. Runs from the crate root, so
// the registry paths under data/ resolve.
//
use boxstats::registry;
use boxstats::store::Store;

#[test]
fn every_bundled_dataset_loads() {
    let mut store = Store::new();
    for (ix, entry) in registry::all().iter().enumerate() {
        let fight = store
            .get(ix)
            .unwrap_or_else(|e| panic!("{}: {}", entry.label, e));
        assert_eq!(fight.label, entry.label);
        assert!(fight.records.len() >= 2, "{}", entry.label);

        // Every bundled fight has a resolvable default pair.
        let boxers = fight.boxers();
        let pair = registry::resolve_default_pair(entry, &boxers).unwrap();
        assert_ne!(pair.0, pair.1);
    }
}

#[test]
fn get_memoizes_and_evict_clears() {
    let mut store = Store::new();
    assert!(store.peek(0).is_none());

    store.get(0).unwrap();
    assert!(store.peek(0).is_some());
    assert!(store.peek(1).is_none());

    // Second get reuses the cached copy rather than reloading.
    let rounds = store.get(0).unwrap().rounds();
    assert!(!rounds.is_empty());

    store.evict(0);
    assert!(store.peek(0).is_none());
}

#[test]
fn sample_dataset_carries_the_full_schema() {
    let mut store = Store::new();
    let fight = store.get(0).unwrap();
    assert!(fight.features.ring_control);
    assert!(fight.features.head_body);
    assert!(fight.features.jab_power);

    // Registered default pair is present in the file itself.
    let entry = &registry::all()[0];
    let (a, b) = entry.default_pair.unwrap();
    let boxers = fight.boxers();
    assert!(boxers.iter().any(|x| x == a));
    assert!(boxers.iter().any(|x| x == b));
}
