//! Environment overrides (`APP__*`). Kept in its own test binary since it
//! mutates process environment.

use calculator_server::AppConfig;

#[test]
fn env_overrides_file_and_defaults() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    std::io::Write::write_all(&mut file, b"server:\n  port: 9100\n  host: 0.0.0.0\n").unwrap();

    temp_env::with_vars(
        [
            ("APP__SERVER__PORT", Some("9300")),
            ("APP__LOGGING__LEVEL", Some("warn")),
        ],
        || {
            let config = AppConfig::load_or_default(Some(file.path())).unwrap();
            assert_eq!(config.server.port, 9300);
            assert_eq!(config.server.host, "0.0.0.0");
            assert_eq!(config.logging.level, "warn");
        },
    );
}
