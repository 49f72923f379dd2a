//! Configuration loading from files (std only).

use std::fs;
use std::path::Path;

use crate::error::{ConfigError, Error, Result};

use super::SystemConfig;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed, or fails validation.
///
/// # Example
///
/// ```rust,ignore
/// use axis_driver::load_config;
///
/// let config = load_config("axes.toml")?;
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SystemConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        let msg = truncated(&format!("{}: {}", path.display(), e));
        Error::Config(ConfigError::IoError(msg))
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
///
/// # Errors
///
/// Returns an error if the TOML is invalid or fails validation.
pub fn parse_config(content: &str) -> Result<SystemConfig> {
    let config: SystemConfig = toml::from_str(content).map_err(|e| {
        let msg = truncated(e.message());
        Error::Config(ConfigError::ParseError(msg))
    })?;

    super::validation::validate_config(&config)?;

    Ok(config)
}

fn truncated(message: &str) -> heapless::String<128> {
    let mut out = heapless::String::new();
    for c in message.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AxisKind;

    #[test]
    fn test_parse_linear_axis() {
        let toml = r#"
[axes.x]
kind = "linear"
dir_pin = 38
step_pin = 40
sensor_pin = 36
step_size = 0.1
min_step_period = 0.001
max_step_period = 0.005
delta_step_period = 0.001
min_coord = 0.0
max_coord = 500.0
"#;

        let config = parse_config(toml).unwrap();
        let axis = config.axis("x").unwrap();
        assert_eq!(axis.kind, AxisKind::Linear);
        assert_eq!(axis.sensor_pin, Some(36));
        assert!(!axis.invert_direction);
    }

    #[test]
    fn test_parse_short_kind_aliases() {
        let toml = r#"
[axes.turret]
kind = "ROT"
dir_pin = 11
step_pin = 13
step_size = 1.8
min_step_period = 0.001
max_step_period = 0.003
delta_step_period = 0.001
min_coord = 0.0
max_coord = 180.0
"#;

        let config = parse_config(toml).unwrap();
        assert_eq!(config.axis("turret").unwrap().kind, AxisKind::Rotational);
    }

    #[test]
    fn test_parse_rejects_pin_collision() {
        let toml = r#"
[axes.x]
kind = "linear"
dir_pin = 38
step_pin = 40
sensor_pin = 40
step_size = 0.1
min_step_period = 0.001
max_step_period = 0.005
delta_step_period = 0.001
min_coord = 0.0
max_coord = 500.0
"#;

        assert!(matches!(
            parse_config(toml),
            Err(Error::Config(ConfigError::DuplicatePin { pin: 40, .. }))
        ));
    }

    #[test]
    fn test_parse_error_reported() {
        let result = parse_config("[axes.x]\nkind = \"diagonal\"\n");
        assert!(matches!(result, Err(Error::Config(ConfigError::ParseError(_)))));
    }

    #[test]
    fn test_missing_file() {
        let result = load_config("/nonexistent/axes.toml");
        assert!(matches!(result, Err(Error::Config(ConfigError::IoError(_)))));
    }

    #[test]
    fn test_long_io_message_truncated() {
        let long_dir = "d".repeat(200);
        let result = load_config(format!("/nonexistent/{}/axes.toml", long_dir));

        match result {
            Err(Error::Config(ConfigError::IoError(msg))) => {
                assert_eq!(msg.len(), 128);
                assert!(msg.starts_with("/nonexistent/ddd"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
