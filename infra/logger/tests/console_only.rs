use insecta_logger::{LevelFilter, Logger};

#[test]
fn init_console_only_keeps_name() {
    let logger = Logger::builder()
        .name("integration-console-only")
        .console(true)
        .level(LevelFilter::INFO)
        .init()
        .expect("logger should initialize");

    assert_eq!(logger.name(), "integration-console-only");
}
