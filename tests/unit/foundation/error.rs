use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        VidmarkError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        VidmarkError::playback("x")
            .to_string()
            .contains("playback error:")
    );
    assert!(
        VidmarkError::upload("x")
            .to_string()
            .contains("upload error:")
    );
    assert!(
        VidmarkError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        VidmarkError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = VidmarkError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
