//! Translation-readiness checks.
//!
//! A config can be structurally loadable yet not ready to hand to a vendor:
//! promotion placeholders still unfilled, HTTPS without certificate material,
//! or pool/monitor values an operator almost certainly did not intend. The
//! report splits findings into errors (translation would fail) and warnings
//! (translation succeeds but deserves a second look).

use serde::Serialize;
use vip_translate_core::{CanonicalConfig, CanonicalField, Vendor, PLACEHOLDER};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CheckSeverity {
    Error,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckIssue {
    pub severity: CheckSeverity,
    pub code: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub fqdn: String,
    pub environment: String,
    pub vendor: Option<String>,
    pub errors: usize,
    pub warnings: usize,
    pub issues: Vec<CheckIssue>,
}

/// Build a readiness report for one canonical config.
///
/// `vendor` is informational; the checks themselves are vendor-independent
/// because every emitter shares the same preconditions.
pub fn build_check_report(config: &CanonicalConfig, vendor: Option<Vendor>) -> CheckReport {
    let mut issues = Vec::new();

    for field in CanonicalField::PROMOTION_FLAGGABLE {
        if field.value(config) == Some(PLACEHOLDER) {
            issues.push(error(
                "unfilled_placeholder",
                format!("field {} still requires manual input", field.path()),
            ));
        }
    }

    if config.virtual_server.protocol.requires_tls() {
        match &config.certificate {
            None => issues.push(error(
                "missing_certificate",
                "HTTPS virtual server has no certificate".to_string(),
            )),
            Some(certificate) if !certificate.looks_like_pem() => issues.push(error(
                "malformed_certificate",
                "certificate or key is not a PEM block".to_string(),
            )),
            Some(_) => {}
        }
    }

    if config.pool.members.is_empty() {
        issues.push(warning(
            "empty_pool",
            "pool has no members; emitters will produce an empty member list".to_string(),
        ));
    } else if config.pool.members.iter().all(|member| !member.enabled) {
        issues.push(warning(
            "all_members_disabled",
            "every pool member is disabled".to_string(),
        ));
    }

    for member in &config.pool.members {
        if member.weight == 0 {
            issues.push(warning(
                "zero_weight_member",
                format!("member {} has weight 0; expected >= 1", member.server),
            ));
        }
    }

    if let Some(monitor) = &config.monitor {
        if monitor.timeout_secs >= monitor.interval_secs {
            issues.push(warning(
                "monitor_timeout_not_below_interval",
                format!(
                    "monitor timeout {}s is not below interval {}s",
                    monitor.timeout_secs, monitor.interval_secs
                ),
            ));
        }
    }

    let errors = issues
        .iter()
        .filter(|issue| issue.severity == CheckSeverity::Error)
        .count();
    let warnings = issues
        .iter()
        .filter(|issue| issue.severity == CheckSeverity::Warning)
        .count();

    CheckReport {
        fqdn: config.virtual_server.fqdn.clone(),
        environment: config.environment.to_string(),
        vendor: vendor.map(|v| v.to_string()),
        errors,
        warnings,
        issues,
    }
}

fn error(code: &str, message: String) -> CheckIssue {
    CheckIssue {
        severity: CheckSeverity::Error,
        code: code.to_string(),
        message,
    }
}

fn warning(code: &str, message: String) -> CheckIssue {
    CheckIssue {
        severity: CheckSeverity::Warning,
        code: code.to_string(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use vip_translate_core::{
        CanonicalConfig, Environment, HealthMonitor, LbMethod, MonitorType, Pool, PoolMember,
        Protocol, VirtualServer, PLACEHOLDER,
    };

    use super::{build_check_report, CheckSeverity};

    fn config() -> CanonicalConfig {
        CanonicalConfig {
            virtual_server: VirtualServer {
                fqdn: "app1.dev.ladc.example.net".to_string(),
                ip_address: "10.0.0.10".to_string(),
                port: 80,
                protocol: Protocol::Http,
            },
            pool: Pool {
                method: LbMethod::RoundRobin,
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
        }
    }

    #[test]
    fn clean_config_yields_empty_report() {
        let report = build_check_report(&config(), None);
        assert_eq!(report.errors, 0);
        assert_eq!(report.warnings, 0);
        assert!(report.issues.is_empty());
    }

    #[test]
    fn placeholder_ip_is_an_error() {
        let mut cfg = config();
        cfg.virtual_server.ip_address = PLACEHOLDER.to_string();
        let report = build_check_report(&cfg, None);
        assert_eq!(report.errors, 1);
        assert_eq!(report.issues[0].code, "unfilled_placeholder");
    }

    #[test]
    fn https_without_certificate_is_an_error() {
        let mut cfg = config();
        cfg.virtual_server.protocol = Protocol::Https;
        let report = build_check_report(&cfg, None);
        assert!(report
            .issues
            .iter()
            .any(|issue| issue.code == "missing_certificate"
                && issue.severity == CheckSeverity::Error));
    }

    #[test]
    fn empty_pool_and_slow_monitor_are_warnings() {
        let mut cfg = config();
        cfg.pool.members.clear();
        cfg.monitor = Some(HealthMonitor {
            monitor_type: MonitorType::Tcp,
            interval_secs: 5,
            timeout_secs: 10,
            send_string: String::new(),
            receive_string: String::new(),
        });
        let report = build_check_report(&cfg, None);
        assert_eq!(report.errors, 0);
        assert_eq!(report.warnings, 2);
        let codes: Vec<&str> = report.issues.iter().map(|i| i.code.as_str()).collect();
        assert!(codes.contains(&"empty_pool"));
        assert!(codes.contains(&"monitor_timeout_not_below_interval"));
    }

    #[test]
    fn disabled_members_are_flagged() {
        let mut cfg = config();
        cfg.pool.members[0].enabled = false;
        let report = build_check_report(&cfg, None);
        assert!(report
            .issues
            .iter()
            .any(|issue| issue.code == "all_members_disabled"));
    }
}
