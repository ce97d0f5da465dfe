use bedrock_forms::setup_logging;

#[test]
fn test_logging_setup() {
    // Calling it twice must not panic even though a subscriber is already installed
    let result = std::panic::catch_unwind(|| {
        setup_logging();
        setup_logging();
    });

    assert!(result.is_ok(), "setup_logging function should not panic");
}
