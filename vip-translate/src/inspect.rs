use vip_translate_core::CanonicalConfig;

/// Render a canonical config as an indented summary tree.
///
/// Certificate material is reported by presence only; PEM blobs never reach
/// the terminal.
pub fn render_config(config: &CanonicalConfig) -> String {
    let mut out = Vec::new();

    out.push(format!(
        "vip {} environment={} datacenter={}",
        config.virtual_server.fqdn, config.environment, config.datacenter
    ));
    out.push("virtual_server".to_string());
    out.push(format!("  name: {}", config.virtual_server.name()));
    out.push(format!("  ip_address: {}", config.virtual_server.ip_address));
    out.push(format!("  port: {}", config.virtual_server.port));
    out.push(format!(
        "  protocol: {}",
        config.virtual_server.protocol.token()
    ));

    out.push(format!("pool {}", config.pool_name()));
    out.push(format!("  method: {}", config.pool.method.token()));
    for member in &config.pool.members {
        out.push(format!(
            "  server {} {}:{} weight={} enabled={}",
            member.server, member.ip, member.port, member.weight, member.enabled
        ));
    }

    if let Some(monitor) = &config.monitor {
        out.push(format!("monitor {}", config.monitor_name()));
        out.push(format!("  type: {}", monitor.monitor_type.token()));
        out.push(format!("  interval: {}s", monitor.interval_secs));
        out.push(format!("  timeout: {}s", monitor.timeout_secs));
    }

    if let Some(persistence) = &config.persistence {
        out.push("persistence".to_string());
        out.push(format!("  type: {}", persistence.persistence_type.token()));
        out.push(format!("  timeout: {}s", persistence.timeout_secs));
    }

    out.push(format!(
        "certificate: {}",
        if config.certificate.is_some() {
            "present"
        } else {
            "absent"
        }
    ));

    let mut text = out.join("\n");
    text.push('\n');
    text
}

#[cfg(test)]
mod tests {
    use vip_translate_core::{
        CanonicalConfig, Environment, LbMethod, Pool, PoolMember, Protocol, VirtualServer,
    };

    use super::render_config;

    #[test]
    fn renders_sections_and_presence_flags() {
        let config = CanonicalConfig {
            virtual_server: VirtualServer {
                fqdn: "app1.dev.ladc.example.net".to_string(),
                ip_address: "10.0.0.10".to_string(),
                port: 80,
                protocol: Protocol::Http,
            },
            pool: Pool {
                method: LbMethod::SourceIp,
                members: vec![PoolMember {
                    server: "web01".to_string(),
                    ip: "192.168.1.1".to_string(),
                    port: 8080,
                    weight: 1,
                    enabled: true,
                }],
            },
            monitor: None,
            persistence: None,
            certificate: None,
            environment: Environment::Dev,
            datacenter: "LADC".to_string(),
        };

        let text = render_config(&config);
        assert!(text.contains("vip app1.dev.ladc.example.net environment=dev datacenter=LADC"));
        assert!(text.contains("  method: source-ip"));
        assert!(text.contains("  server web01 192.168.1.1:8080 weight=1 enabled=true"));
        assert!(text.contains("certificate: absent"));
        assert!(!text.contains("monitor"));
    }
}
