// Host-side tests for bundled-asset availability tracking.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod asset_check {
    include!("../src/asset_check.rs");
}

use asset_check::*;

#[test]
fn http_status_maps_to_availability() {
    assert_eq!(AssetStatus::from_http_status(200), AssetStatus::Available);
    assert_eq!(AssetStatus::from_http_status(304), AssetStatus::Available);
    assert_eq!(AssetStatus::from_http_status(404), AssetStatus::Missing);
    assert_eq!(AssetStatus::from_http_status(500), AssetStatus::Missing);
}

#[test]
fn missing_track_refuses_load() {
    assert!(AssetStatus::Unknown.allows_load());
    assert!(AssetStatus::Available.allows_load());
    assert!(!AssetStatus::Missing.allows_load());
}

#[test]
fn missing_is_sticky() {
    let s = AssetStatus::Unknown.update(AssetStatus::Missing);
    assert_eq!(s.update(AssetStatus::Available), AssetStatus::Missing);
    assert_eq!(
        AssetStatus::Available.update(AssetStatus::Missing),
        AssetStatus::Missing
    );
    assert_eq!(
        AssetStatus::Available.update(AssetStatus::Unknown),
        AssetStatus::Available
    );
}

#[test]
fn late_404_drops_a_loaded_player_only() {
    assert!(should_drop_player(AssetStatus::Missing, true));
    assert!(!should_drop_player(AssetStatus::Missing, false));
    assert!(!should_drop_player(AssetStatus::Available, true));
    assert!(!should_drop_player(AssetStatus::Unknown, true));
}
