//! Vendor configuration emitters.
//!
//! One module per target system, each exposing a pure `emit` function over a
//! [`CanonicalConfig`](crate::model::CanonicalConfig). Emitters are total: a
//! pool with zero members or a config with every optional section absent still
//! produces valid, if minimal, output. Missing optional sections are omitted
//! from the artifact entirely rather than rendered as null or empty stand-ins,
//! unless the target syntax demands a structurally complete construct (the
//! NGINX `upstream` block is always emitted, even empty).

pub mod avi;
pub mod f5;
pub mod nginx;
