//! Config serialization under the `serde` feature.

#![cfg(feature = "serde")]

use tabpager_layout::PagerConfig;

#[test]
fn config_round_trips_through_json() {
    let config = PagerConfig::default()
        .prefetch_item_count(2)
        .index_change_threshold(0.7);
    let json = serde_json::to_string(&config).unwrap();
    let back: PagerConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}

#[test]
fn missing_fields_take_defaults() {
    let config: PagerConfig = serde_json::from_str(r#"{"prefetch_item_count": 1}"#).unwrap();
    assert_eq!(config.prefetch_item_count, 1);
    assert_eq!(config.cache_capacity, 16);
    assert!(config.auto_cache);
}
