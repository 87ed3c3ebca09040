use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        HostError::not_found(ElementKind::Sprite, 7)
            .to_string()
            .contains("not found: sprite 7")
    );
    assert!(
        HostError::invalid_dimensions(0, 10)
            .to_string()
            .contains("invalid dimensions: 0x10")
    );
    assert!(
        HostError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        HostError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn out_of_bounds_names_the_pixel() {
    let err = HostError::OutOfBounds {
        id: 3,
        x: 10,
        y: -1,
        width: 10,
        height: 10,
    };
    let msg = err.to_string();
    assert!(msg.contains("(10, -1)"));
    assert!(msg.contains("10x10 bitmap 3"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = HostError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_map_to_serde() {
    let err: HostError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, HostError::Serde(_)));
    assert!(!err.is_not_found());
}
