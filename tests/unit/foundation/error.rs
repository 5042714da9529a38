use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        MotionError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        MotionError::layout("x")
            .to_string()
            .contains("layout error:")
    );
    assert!(
        MotionError::timeline("x")
            .to_string()
            .contains("timeline error:")
    );
    assert!(
        MotionError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn json_errors_keep_source_message() {
    let source = serde_json::from_str::<u32>("nope").unwrap_err();
    let msg = source.to_string();
    let err = MotionError::from(source);
    assert_eq!(err.to_string(), format!("serialization error: {msg}"));
}

#[test]
fn json_errors_map_to_serde() {
    let err: MotionError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, MotionError::Serde(_)));
}
