use colored::Colorize;
use vip_translate_core::{PromotionPlan, TranslationArtifact};

use crate::check::{CheckReport, CheckSeverity};

/// Render the one-line summary printed after a translation.
pub fn render_artifact_summary(artifact: &TranslationArtifact) -> String {
    format!(
        "translate_summary vendor={} bytes={} digest={}",
        artifact.vendor,
        artifact.text.len(),
        &artifact.digest[..12]
    )
    .cyan()
    .to_string()
}

/// Render a promotion plan for terminal output.
///
/// Carried-over fields are listed plainly; fields requiring manual input are
/// highlighted so an operator cannot miss them.
pub fn render_promotion_plan(plan: &PromotionPlan) -> String {
    let mut out = Vec::new();
    out.push(format!(
        "promotion {} -> {} datacenter={} vendor={}",
        plan.source.environment,
        plan.target_environment,
        plan.target_datacenter,
        plan.target_vendor
    ));

    out.push(String::new());
    out.push("carried over".to_string());
    out.push(format!(
        "- pool: {} member{} ({})",
        plan.draft.pool.members.len(),
        if plan.draft.pool.members.len() == 1 { "" } else { "s" },
        plan.draft.pool.method.token()
    ));
    if let Some(monitor) = &plan.draft.monitor {
        out.push(format!(
            "- monitor: {} interval={}s timeout={}s",
            monitor.monitor_type.token(),
            monitor.interval_secs,
            monitor.timeout_secs
        ));
    }
    if let Some(persistence) = &plan.draft.persistence {
        out.push(format!(
            "- persistence: {} timeout={}s",
            persistence.persistence_type.token(),
            persistence.timeout_secs
        ));
    }
    out.push(format!(
        "- virtual_server.port: {}",
        plan.draft.virtual_server.port
    ));
    out.push(format!(
        "- virtual_server.protocol: {}",
        plan.draft.virtual_server.protocol.token()
    ));
    if !plan.manual_fields.iter().any(|f| f == "virtual_server.name") {
        out.push(format!(
            "- virtual_server.name: {}",
            plan.draft.virtual_server.fqdn
        ));
    }

    out.push(String::new());
    out.push("requires manual input".to_string());
    for field in &plan.manual_fields {
        out.push(format!("- {field}").yellow().to_string());
    }

    out.join("\n")
}

/// Render a readiness report for terminal output.
pub fn render_check(report: &CheckReport) -> String {
    let mut out = Vec::new();
    out.push(format!(
        "check fqdn={} environment={} vendor={} errors={} warnings={}",
        report.fqdn,
        report.environment,
        report.vendor.as_deref().unwrap_or("any"),
        report.errors,
        report.warnings
    ));
    for issue in &report.issues {
        let tag = match issue.severity {
            CheckSeverity::Error => "ERROR".red().to_string(),
            CheckSeverity::Warning => "WARN".yellow().to_string(),
        };
        out.push(format!("{tag} {}: {}", issue.code, issue.message));
    }
    out.join("\n")
}
