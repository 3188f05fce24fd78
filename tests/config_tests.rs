// Host-side tests for tuning constants, config validation and device policy.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod config {
    include!("../src/core/config.rs");
}
mod device {
    include!("../src/core/device.rs");
}

use config::*;
use constants::*;
use device::*;

const IPHONE_UA: &str =
    "Mozilla/5.0 (iPhone; CPU iPhone OS 17_5 like Mac OS X) AppleWebKit/605.1.15 Mobile/15E148";
const DESKTOP_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 Chrome/126.0";

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_have_logical_relationships() {
    // The mobile profile is the reduced one
    assert!(PLEXUS_MOBILE_NODE_COUNT < PLEXUS_NODE_COUNT);
    assert!(PLEXUS_MOBILE_MAX_DISTANCE <= PLEXUS_MAX_DISTANCE);

    // Pointer boosts may only raise opacity up to the interaction cap
    assert!(PLEXUS_INTERACTION_OPACITY > PLEXUS_BASE_OPACITY);
    assert!(PLEXUS_INTERACTION_OPACITY <= 1.0);

    // Damping below one keeps speeds bounded
    assert!(PLEXUS_DAMPING > 0.0 && PLEXUS_DAMPING < 1.0);
    assert!(PLEXUS_RETURN_FORCE > 0.0 && PLEXUS_RETURN_FORCE < 0.01);

    assert!(PARTICLE_SIZE_MAX >= PARTICLE_SIZE_MIN);
    assert!(LOADER_COMPLETE_DELAY_MS > 0 && LOADER_TICK_MS > 0);
}

#[test]
fn defaults_validate() {
    assert_eq!(PlexusConfig::default().validate(), Ok(()));
    assert_eq!(ParticleConfig::default().validate(), Ok(()));
    assert_eq!(LoaderConfig::default().validate(), Ok(()));
}

#[test]
fn unstable_damping_is_rejected() {
    let config = PlexusConfig {
        damping: 1.0,
        ..PlexusConfig::default()
    };
    assert_eq!(config.validate(), Err(ConfigError::Damping(1.0)));
}

#[test]
fn bad_values_are_reported_by_field() {
    let config = PlexusConfig {
        base_opacity: 1.5,
        ..PlexusConfig::default()
    };
    let err = config.validate().unwrap_err();
    assert_eq!(
        err,
        ConfigError::OpacityOutOfRange {
            field: "base_opacity",
            value: 1.5
        }
    );
    assert!(err.to_string().contains("base_opacity"));

    let config = PlexusConfig {
        max_distance: 0.0,
        ..PlexusConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::NotPositive {
            field: "max_distance",
            ..
        })
    ));

    let config = ParticleConfig {
        size_min: 3.0,
        size_max: 1.0,
        ..ParticleConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn profile_follows_device_class() {
    let config = PlexusConfig::default();
    let desktop = config.profile(DeviceClass::Desktop);
    let mobile = config.profile(DeviceClass::Mobile);
    assert_eq!((desktop.node_count, desktop.max_distance), (100, 120.0));
    assert_eq!((mobile.node_count, mobile.max_distance), (60, 100.0));
}

#[test]
fn particle_count_scales_with_area() {
    let config = ParticleConfig::default();
    // 1920 * 1080 / 1000 = 2073.6; 80 * 2073.6 / 800 = 207.36
    assert_eq!(config.count_for(1920.0, 1080.0), 207);
    assert_eq!(config.count_for(800.0, 1000.0), 80);
    assert_eq!(config.count_for(10.0, 10.0), 1);
    assert_eq!(config.count_for(0.0, 1080.0), 0);

    let fixed = ParticleConfig {
        density_area: None,
        ..ParticleConfig::default()
    };
    assert_eq!(fixed.count_for(1920.0, 1080.0), 80);
}

#[test]
fn narrow_viewports_are_mobile() {
    let policy = MobilePolicy::default();
    assert_eq!(policy.classify(1024.0, DESKTOP_UA), DeviceClass::Desktop);
    assert_eq!(policy.classify(769.0, DESKTOP_UA), DeviceClass::Desktop);
    assert_eq!(policy.classify(768.0, DESKTOP_UA), DeviceClass::Mobile);
    assert_eq!(policy.classify(400.0, DESKTOP_UA), DeviceClass::Mobile);
}

#[test]
fn mobile_user_agents_win_on_wide_viewports() {
    let policy = MobilePolicy::default();
    assert_eq!(policy.classify(1366.0, IPHONE_UA), DeviceClass::Mobile);
    assert_eq!(
        policy.classify(1366.0, "Opera/9.80 (J2ME/MIDP; OPERA MINI/9.80)"),
        DeviceClass::Mobile
    );
    assert_eq!(policy.classify(1366.0, "Mozilla/5.0 (Linux; android 14)"), DeviceClass::Mobile);
}

#[test]
fn policy_can_be_replaced() {
    let policy = MobilePolicy {
        max_width: 0.0,
        user_agent_patterns: vec![String::new()],
    };
    assert_eq!(policy.classify(320.0, IPHONE_UA), DeviceClass::Desktop);
    assert!(!DeviceClass::Desktop.is_mobile());
    assert!(DeviceClass::Mobile.is_mobile());
}
