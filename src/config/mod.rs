//! Configuration management

use anyhow::Result;
use serde::Deserialize;

use crate::app::api::NetworkEntry;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    /// Networks shown in the admin UI. Seeded here, held in memory afterwards.
    #[serde(default)]
    pub networks: Vec<NetworkEntry>,
}

fn default_port() -> u16 {
    3008
}

/// Port variables, highest precedence first
const PORT_ENV_VARS: &[&str] = &["RECONYA_PORT", "PORT"];

/// Application directory name under the platform config root
const APP_DIR_NAME: &str = "reconya";

/// Get config directory (RECONYA_CONFIG_DIR, XDG_CONFIG_HOME or platform default)
pub fn get_config_dir() -> std::path::PathBuf {
    if let Ok(dir) = std::env::var("RECONYA_CONFIG_DIR") {
        return std::path::PathBuf::from(dir);
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(home) = std::env::var("HOME") {
            return std::path::PathBuf::from(home)
                .join("Library/Application Support")
                .join(APP_DIR_NAME);
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            return std::path::PathBuf::from(xdg).join(APP_DIR_NAME);
        }
        if let Ok(home) = std::env::var("HOME") {
            return std::path::PathBuf::from(home)
                .join(".config")
                .join(APP_DIR_NAME);
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return std::path::PathBuf::from(appdata).join(APP_DIR_NAME);
        }
    }

    // Fallback to current directory
    std::path::PathBuf::from(".")
}

pub fn load_config() -> Result<Config> {
    let config_dir = get_config_dir();

    let mut builder = ::config::Config::builder()
        .set_default("port", default_port() as i64)?
        // config.toml / config.json / ... if present
        .add_source(
            ::config::File::with_name(&config_dir.join("config").to_string_lossy()).required(false),
        )
        // RECONYA__PORT, RECONYA__NETWORKS, etc.
        .add_source(
            ::config::Environment::with_prefix("RECONYA")
                .separator("__")
                .try_parsing(true),
        );

    // Port precedence: RECONYA_PORT > PORT > config file > default.
    // A value that doesn't parse is skipped in favour of the next source.
    let port = PORT_ENV_VARS.iter().find_map(|key| {
        let raw = std::env::var(key).ok()?;
        match raw.parse::<u16>() {
            Ok(port) => Some(port),
            Err(_) => {
                tracing::warn!("Ignoring invalid {}={:?}", key, raw);
                None
            }
        }
    });
    if let Some(port) = port {
        builder = builder.set_override("port", port as i64)?;
    }

    let config = builder.build()?;

    Ok(config.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    fn clear_port_vars() {
        env::remove_var("RECONYA_PORT");
        env::remove_var("PORT");
    }

    #[test]
    #[serial]
    fn test_default_port_without_file_or_env() {
        clear_port_vars();
        let temp_dir = tempfile::tempdir().expect("create temp dir");
        env::set_var("RECONYA_CONFIG_DIR", temp_dir.path());

        let config = load_config().expect("config should load");

        env::remove_var("RECONYA_CONFIG_DIR");

        assert_eq!(config.port, 3008);
        assert!(config.networks.is_empty());
    }

    #[test]
    #[serial]
    fn test_port_env_fallback() {
        clear_port_vars();
        env::set_var("RECONYA_CONFIG_DIR", "/tmp/reconya-test-nonexistent");
        env::set_var("PORT", "3000");

        let config = load_config().expect("config should load");

        env::remove_var("PORT");
        env::remove_var("RECONYA_CONFIG_DIR");

        assert_eq!(config.port, 3000, "PORT env var should set config.port");
    }

    #[test]
    #[serial]
    fn test_reconya_port_takes_precedence_over_port() {
        clear_port_vars();
        env::set_var("RECONYA_CONFIG_DIR", "/tmp/reconya-test-nonexistent");
        env::set_var("RECONYA_PORT", "5000");
        env::set_var("PORT", "3000");

        let config = load_config().expect("config should load");

        clear_port_vars();
        env::remove_var("RECONYA_CONFIG_DIR");

        assert_eq!(
            config.port, 5000,
            "RECONYA_PORT should take precedence over PORT"
        );
    }

    #[test]
    #[serial]
    fn test_invalid_port_uses_default() {
        clear_port_vars();
        env::set_var("RECONYA_CONFIG_DIR", "/tmp/reconya-test-nonexistent");
        env::set_var("PORT", "not-a-number");

        let config = load_config().expect("config should load");

        env::remove_var("PORT");
        env::remove_var("RECONYA_CONFIG_DIR");

        assert_eq!(
            config.port, 3008,
            "Invalid PORT should fall back to default"
        );
    }

    #[test]
    #[serial]
    fn test_config_file_port_and_networks() {
        clear_port_vars();
        let temp_dir = tempfile::tempdir().expect("create temp dir");
        std::fs::write(
            temp_dir.path().join("config.toml"),
            r#"
port = 4100

[[networks]]
id = "lan"
name = "Office LAN"
cidr = "192.168.1.0/24"

[[networks]]
id = "lab"
name = "Lab"
"#,
        )
        .expect("write config");
        env::set_var("RECONYA_CONFIG_DIR", temp_dir.path());

        let config = load_config().expect("config should load");

        env::remove_var("RECONYA_CONFIG_DIR");

        assert_eq!(config.port, 4100);
        assert_eq!(config.networks.len(), 2);
        assert_eq!(config.networks[0].name, "Office LAN");
        assert_eq!(config.networks[0].cidr, "192.168.1.0/24");
        assert_eq!(config.networks[1].cidr, "", "cidr is optional");
    }

    #[test]
    #[serial]
    fn test_port_env_overrides_config_file() {
        clear_port_vars();
        let temp_dir = tempfile::tempdir().expect("create temp dir");
        std::fs::write(temp_dir.path().join("config.toml"), "port = 4100\n")
            .expect("write config");
        env::set_var("RECONYA_CONFIG_DIR", temp_dir.path());
        env::set_var("PORT", "4200");

        let config = load_config().expect("config should load");

        env::remove_var("PORT");
        env::remove_var("RECONYA_CONFIG_DIR");

        assert_eq!(config.port, 4200);
    }

    #[test]
    #[serial]
    fn test_invalid_reconya_port_falls_back_to_port() {
        clear_port_vars();
        env::set_var("RECONYA_CONFIG_DIR", "/tmp/reconya-test-nonexistent");
        env::set_var("RECONYA_PORT", "not-a-number");
        env::set_var("PORT", "3000");

        let config = load_config().expect("config should load");

        clear_port_vars();
        env::remove_var("RECONYA_CONFIG_DIR");

        assert_eq!(
            config.port, 3000,
            "PORT should apply when RECONYA_PORT does not parse"
        );
    }

    #[test]
    #[serial]
    fn test_invalid_reconya_port_falls_back_to_config_file() {
        clear_port_vars();
        let temp_dir = tempfile::tempdir().expect("create temp dir");
        std::fs::write(temp_dir.path().join("config.toml"), "port = 4100\n")
            .expect("write config");
        env::set_var("RECONYA_CONFIG_DIR", temp_dir.path());
        env::set_var("RECONYA_PORT", "99999");

        let config = load_config().expect("config should load");

        clear_port_vars();
        env::remove_var("RECONYA_CONFIG_DIR");

        assert_eq!(config.port, 4100);
    }
}
