use super::*;
use std::collections::HashMap;

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn defaults_are_black_background_and_half_second_ticks() {
    let s = HostSettings::default();
    assert_eq!(s.clear_argb, Argb::BLACK);
    assert_eq!(s.min_tick(), Duration::from_millis(500));
    assert!(s.validate().is_ok());
}

#[test]
fn partial_json_fills_defaults() {
    let s: HostSettings = serde_json::from_str(r#"{ "min_tick_ms": 16 }"#).unwrap();
    assert_eq!(s.min_tick_ms, 16);
    assert_eq!(s.clear_argb, Argb::BLACK);
    assert_eq!(s.max_surface_dim, DEFAULT_MAX_SURFACE_DIM);

    let s: HostSettings = serde_json::from_str(r#"{ "clear_argb": 4294967295 }"#).unwrap();
    assert_eq!(s.clear_argb, Argb::WHITE);
}

#[test]
fn env_overrides_accept_hex_and_decimal() {
    let s = HostSettings::default().with_overrides(env(&[
        ("SPRITEHOST_CLEAR_ARGB", "0xFF20_3040"),
        ("SPRITEHOST_MIN_TICK_MS", "33"),
        ("SPRITEHOST_MAX_SURFACE_DIM", "128"),
    ]));
    assert_eq!(s.clear_argb, Argb(0xFF20_3040));
    assert_eq!(s.min_tick_ms, 33);
    assert_eq!(s.max_surface_dim, 128);

    let s = HostSettings::default().with_overrides(env(&[("SPRITEHOST_CLEAR_ARGB", "#00000001")]));
    assert_eq!(s.clear_argb, Argb(1));
}

#[test]
fn invalid_env_values_are_ignored() {
    let s = HostSettings::default().with_overrides(env(&[
        ("SPRITEHOST_CLEAR_ARGB", "purple"),
        ("SPRITEHOST_MIN_TICK_MS", "-4"),
        ("SPRITEHOST_MAX_SURFACE_DIM", "0"),
    ]));
    assert_eq!(s, HostSettings::default());
}

#[test]
fn zero_surface_limit_is_rejected() {
    let s = HostSettings {
        max_surface_dim: 0,
        ..HostSettings::default()
    };
    assert!(matches!(s.validate(), Err(HostError::Validation(_))));
}

#[test]
fn missing_file_is_reported_with_path() {
    let err = HostSettings::from_json_file(Path::new("does/not/exist.json")).unwrap_err();
    assert!(err.to_string().contains("does/not/exist.json"));
}
