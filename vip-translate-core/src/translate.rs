//! Translation orchestration.
//!
//! Dispatches a canonical config to the vendor emitter selected by a
//! [`Vendor`] tag and wraps the emitted text with a SHA-256 content digest.
//! Translation of an unchanged config is byte-identical, so the digest is the
//! artifact's identity for change auditing; the generation timestamp is
//! metadata only and never feeds the digest.

use std::fmt::{self, Display, Formatter, Write as _};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::emit;
use crate::model::{CanonicalConfig, CanonicalField, PLACEHOLDER};

/// Supported target load-balancer platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vendor {
    F5,
    Nginx,
    Avi,
}

impl Vendor {
    /// Every supported vendor, in dispatch order.
    pub const ALL: [Vendor; 3] = [Vendor::F5, Vendor::Nginx, Vendor::Avi];

    /// Resolve a free-form vendor tag. `as3` is accepted as an alias for F5.
    pub fn parse(tag: &str) -> Result<Vendor, TranslateError> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "f5" | "as3" => Ok(Vendor::F5),
            "nginx" => Ok(Vendor::Nginx),
            "avi" => Ok(Vendor::Avi),
            _ => Err(TranslateError::UnsupportedVendor(tag.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Vendor::F5 => "f5",
            Vendor::Nginx => "nginx",
            Vendor::Avi => "avi",
        }
    }
}

impl Display for Vendor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors surfaced by the translation orchestrator.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// Vendor tag is not one of the known platforms.
    #[error("unsupported vendor tag '{0}'; expected f5, nginx, or avi")]
    UnsupportedVendor(String),
    /// A promotion-flagged field still carries the manual-input placeholder.
    #[error("field '{0}' still requires manual input; fill it before translating")]
    UnfilledPlaceholder(String),
    /// HTTPS selected without usable certificate material.
    #[error("certificate problem: {0}")]
    MalformedCertificate(String),
}

/// One emitted vendor artifact plus its reproducible identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslationArtifact {
    pub vendor: Vendor,
    pub text: String,
    /// SHA-256 of `text`, hex-encoded. Identical config + vendor always yields
    /// the same digest.
    pub digest: String,
    pub generated_at: DateTime<Utc>,
}

/// Translate a canonical config into the selected vendor's artifact.
///
/// Fails without emitting anything when the config still carries a promotion
/// placeholder or when HTTPS is selected without PEM-shaped certificate
/// material; an artifact is either complete and valid or absent.
pub fn translate(
    config: &CanonicalConfig,
    vendor: Vendor,
) -> Result<TranslationArtifact, TranslateError> {
    reject_unfilled(config)?;
    ensure_certificate(config)?;

    let text = match vendor {
        Vendor::F5 => emit::f5::emit(config),
        Vendor::Nginx => emit::nginx::emit(config),
        Vendor::Avi => emit::avi::emit(config),
    };

    Ok(TranslationArtifact {
        vendor,
        digest: sha256_hex(&text),
        text,
        generated_at: Utc::now(),
    })
}

/// Translate with a free-form vendor tag, e.g. from a CLI or API boundary.
pub fn translate_tag(
    config: &CanonicalConfig,
    tag: &str,
) -> Result<TranslationArtifact, TranslateError> {
    translate(config, Vendor::parse(tag)?)
}

fn reject_unfilled(config: &CanonicalConfig) -> Result<(), TranslateError> {
    for field in CanonicalField::PROMOTION_FLAGGABLE {
        if field.value(config) == Some(PLACEHOLDER) {
            return Err(TranslateError::UnfilledPlaceholder(field.path().to_string()));
        }
    }
    Ok(())
}

fn ensure_certificate(config: &CanonicalConfig) -> Result<(), TranslateError> {
    if !config.virtual_server.protocol.requires_tls() {
        return Ok(());
    }
    match &config.certificate {
        None => Err(TranslateError::MalformedCertificate(
            "HTTPS virtual server has no certificate".to_string(),
        )),
        Some(certificate) if !certificate.looks_like_pem() => Err(
            TranslateError::MalformedCertificate(
                "certificate or key is not a PEM block".to_string(),
            ),
        ),
        Some(_) => Ok(()),
    }
}

fn sha256_hex(text: &str) -> String {
    let digest = Sha256::digest(text.as_bytes());
    let mut hex = String::with_capacity(digest.len() * 2);
    for byte in digest {
        let _ = write!(hex, "{byte:02x}");
    }
    hex
}
