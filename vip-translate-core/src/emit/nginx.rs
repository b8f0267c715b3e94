//! NGINX configuration emitter.
//!
//! Produces an `upstream` block named after the pool, an optional health-check
//! `match` block, and a `server` block listening on the virtual server's port.
//! Round-robin emits no balancing directive because it is NGINX's own default;
//! source-ip affinity (either as the pool method or as a persistence policy)
//! becomes `ip_hash;`. Probe strings are rendered with literal `\r\n` escape
//! sequences, never raw control bytes.

use crate::model::{CanonicalConfig, LbMethod, PersistenceType, Protocol};

/// Filesystem convention for certificate material referenced by TLS directives.
/// PEM blobs are never embedded in NGINX output.
const SSL_DIR: &str = "/etc/nginx/ssl";

/// Render the NGINX configuration for one canonical VIP.
pub fn emit(config: &CanonicalConfig) -> String {
    let vs = &config.virtual_server;
    let pool_name = config.pool_name();
    let mut lines = Vec::with_capacity(16 + config.pool.members.len());

    lines.push(format!("upstream {pool_name} {{"));
    if let Some(directive) = balancing_directive(config) {
        lines.push(format!("    {directive}"));
    }
    for member in &config.pool.members {
        let down = if member.enabled { "" } else { " down" };
        lines.push(format!(
            "    server {}:{} weight={}{down};",
            member.ip, member.port, member.weight
        ));
    }
    if let Some(persistence) = &config.persistence {
        if persistence.persistence_type == PersistenceType::Cookie {
            lines.push(format!(
                "    sticky cookie {pool_name}_sticky expires={}s;",
                persistence.timeout_secs
            ));
        }
    }
    lines.push("}".to_string());

    if let Some(monitor) = &config.monitor {
        lines.push(String::new());
        lines.push(format!("match {} {{", config.monitor_name()));
        lines.push(format!("    send \"{}\";", escape_probe(&monitor.send_string)));
        lines.push(format!(
            "    expect ~ \"{}\";",
            escape_probe(&monitor.receive_string)
        ));
        lines.push("}".to_string());
    }

    lines.push(String::new());
    lines.push("server {".to_string());
    let ssl = if vs.protocol == Protocol::Https { " ssl" } else { "" };
    lines.push(format!("    listen {}{ssl};", vs.port));
    lines.push(format!("    server_name {};", vs.fqdn));
    if vs.protocol == Protocol::Https {
        let name = vs.name();
        lines.push(String::new());
        lines.push(format!("    ssl_certificate {SSL_DIR}/{name}.crt;"));
        lines.push(format!("    ssl_certificate_key {SSL_DIR}/{name}.key;"));
    }
    lines.push(String::new());
    lines.push("    location / {".to_string());
    lines.push(format!(
        "        proxy_pass {}://{pool_name};",
        proxy_scheme(vs.protocol)
    ));
    if let Some(monitor) = &config.monitor {
        lines.push(format!(
            "        health_check interval={} match={};",
            monitor.interval_secs,
            config.monitor_name()
        ));
    }
    lines.push("    }".to_string());
    lines.push("}".to_string());

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

/// Balancing directive for the upstream block, if any.
///
/// Source-ip affinity wins over the configured method because NGINX expresses
/// it as the balancing algorithm itself; round robin is the implicit default
/// and emits nothing.
fn balancing_directive(config: &CanonicalConfig) -> Option<&'static str> {
    let source_ip_affinity = config.pool.method == LbMethod::SourceIp
        || config
            .persistence
            .as_ref()
            .is_some_and(|p| p.persistence_type == PersistenceType::SourceIp);
    if source_ip_affinity {
        return Some("ip_hash;");
    }
    match config.pool.method {
        LbMethod::LeastConnections => Some("least_conn;"),
        _ => None,
    }
}

fn proxy_scheme(protocol: Protocol) -> &'static str {
    match protocol {
        Protocol::Https => "https",
        _ => "http",
    }
}

/// Escape a probe string for a double-quoted NGINX parameter.
///
/// CRLF sequences must survive as the two-character escapes `\r` and `\n`;
/// raw control bytes in a config file would corrupt the directive.
fn escape_probe(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\r' => escaped.push_str("\\r"),
            '\n' => escaped.push_str("\\n"),
            other => escaped.push(other),
        }
    }
    escaped
}
