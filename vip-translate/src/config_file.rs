use std::fs;
use std::path::Path;

use thiserror::Error;
use vip_translate_core::CanonicalConfig;

/// Errors returned when loading a canonical VIP definition from disk.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse JSON config {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
    #[error("failed to parse TOML config {path}: {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("unrecognized config extension for {path}; expected .json or .toml")]
    UnknownExtension { path: String },
}

/// Load a canonical config from a JSON or TOML file, chosen by extension.
pub fn load_canonical(path: &Path) -> Result<CanonicalConfig, ConfigLoadError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => {
            serde_json::from_str(&raw).map_err(|source| ConfigLoadError::Json {
                path: path.display().to_string(),
                source,
            })
        }
        Some(ext) if ext.eq_ignore_ascii_case("toml") => {
            toml::from_str(&raw).map_err(|source| ConfigLoadError::Toml {
                path: path.display().to_string(),
                source,
            })
        }
        _ => Err(ConfigLoadError::UnknownExtension {
            path: path.display().to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;

    use super::{load_canonical, ConfigLoadError};

    const MINIMAL_JSON: &str = r#"{
        "virtual_server": {
            "fqdn": "app1.dev.ladc.example.net",
            "ip_address": "10.0.0.10",
            "port": 80,
            "protocol": "HTTP"
        },
        "pool": {
            "method": "ROUND_ROBIN",
            "members": [
                {"server": "web01", "ip": "192.168.1.1", "port": 8080, "weight": 1, "enabled": true}
            ]
        },
        "environment": "DEV",
        "datacenter": "LADC"
    }"#;

    #[test]
    fn loads_json_config_by_extension() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("vip.json");
        fs::write(&path, MINIMAL_JSON).expect("write config");

        let config = load_canonical(&path).expect("config should parse");
        assert_eq!(config.virtual_server.fqdn, "app1.dev.ladc.example.net");
        assert_eq!(config.pool.members.len(), 1);
        assert!(config.monitor.is_none());
    }

    #[test]
    fn loads_toml_config_by_extension() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("vip.toml");
        fs::write(
            &path,
            r#"
environment = "UAT"
datacenter = "NYDC"

[virtual_server]
fqdn = "app2.uat.nydc.example.net"
ip_address = "10.5.5.5"
port = 443
protocol = "HTTPS"

[pool]
method = "LEAST_CONNECTIONS"

[[pool.members]]
server = "web01"
ip = "192.168.2.1"
port = 8443
weight = 2
enabled = true
"#,
        )
        .expect("write config");

        let config = load_canonical(&path).expect("config should parse");
        assert_eq!(config.datacenter, "NYDC");
        assert_eq!(config.pool.members[0].weight, 2);
    }

    #[test]
    fn rejects_unknown_extension() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("vip.yaml");
        fs::write(&path, "not: supported").expect("write config");

        let err = load_canonical(&path).expect_err("should reject extension");
        assert!(matches!(err, ConfigLoadError::UnknownExtension { .. }));
    }

    #[test]
    fn surfaces_parse_error_with_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").expect("write config");

        let err = load_canonical(&path).expect_err("should fail parse");
        match err {
            ConfigLoadError::Json { path, .. } => assert!(path.ends_with("broken.json")),
            other => panic!("unexpected error variant: {other}"),
        }
    }
}
