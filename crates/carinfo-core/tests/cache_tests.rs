use std::sync::Arc;
use std::thread;

use carinfo_core::traits::CarStore;
use carinfo_core::{fallback_record, normalize_key, CarCache};

#[test]
fn normalization_collapses_case_and_outer_whitespace() {
    assert_eq!(normalize_key("Tesla Model S"), "tesla model s");
    assert_eq!(normalize_key(" tesla model s "), "tesla model s");
    assert_eq!(normalize_key("TESLA MODEL S\n"), "tesla model s");
    assert_ne!(normalize_key("tesla  model s"), "tesla model s", "inner whitespace is kept");
}

#[test]
fn lookup_uses_normalized_key() {
    let cache = CarCache::new();
    let record = fallback_record("Tesla Model S");
    cache.insert("Tesla Model S", record.clone());
    assert_eq!(cache.lookup("tesla model s "), Some(record.clone()));
    assert_eq!(cache.lookup("TESLA MODEL S"), Some(record));
    assert_eq!(cache.len(), 1);
}

#[test]
fn lookup_of_unknown_key_is_absent() {
    let cache = CarCache::new();
    assert!(cache.is_empty());
    assert_eq!(cache.lookup("bmw m3"), None);
    cache.insert("audi a4", fallback_record("audi a4"));
    assert_eq!(cache.lookup("bmw m3"), None);
}

#[test]
fn repeated_insert_overwrites() {
    let cache = CarCache::new();
    cache.insert("Mazda MX-5", fallback_record("first"));
    cache.insert(" mazda mx-5", fallback_record("second"));
    assert_eq!(cache.len(), 1);
    let stored = cache.lookup("MAZDA MX-5").expect("entry");
    assert_eq!(stored.name, "second (Demo Data)");
}

#[test]
fn usable_through_store_trait_across_threads() {
    let cache: Arc<dyn CarStore> = Arc::new(CarCache::new());
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                let name = format!("Model {}", i % 4);
                cache.insert(&name, fallback_record(&name));
                cache.lookup(&name.to_uppercase()).is_some()
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().expect("thread"));
    }
    for i in 0..4 {
        assert!(cache.lookup(&format!("model {i}")).is_some());
    }
}
