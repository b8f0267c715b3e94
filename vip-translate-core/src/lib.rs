//! Canonical VIP modelling and multi-vendor load-balancer config emission.
//!
//! One vendor-agnostic [`CanonicalConfig`] describes a VIP (virtual server,
//! pool, health monitor, persistence, certificate); [`translate`] dispatches
//! it to an F5 AS3, NGINX, or AVI emitter and returns a reproducible
//! [`TranslationArtifact`]. [`plan`] derives a draft config for another
//! environment, flagging the fields that must be supplied fresh.
//!
//! Everything here is pure, synchronous computation over immutable values,
//! with no I/O and no shared state, so callers may translate concurrently
//! without coordination, and repeated translation of an unchanged config is
//! byte-identical.

pub mod emit;
pub mod model;
pub mod promote;
pub mod translate;

pub use model::{
    CanonicalConfig, CanonicalField, Certificate, Environment, HealthMonitor, LbMethod,
    MonitorType, Persistence, PersistenceType, Pool, PoolMember, Protocol, VirtualServer,
    PLACEHOLDER,
};
pub use promote::{plan, PromoteError, PromotionPlan};
pub use translate::{translate, translate_tag, TranslateError, TranslationArtifact, Vendor};
