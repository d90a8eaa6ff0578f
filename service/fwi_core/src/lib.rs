//! Core request pipeline for the FWI prediction service.
//!
//! Untrusted JSON goes in one end; a risk-classified prediction comes out
//! the other: validate → encode → standardize + regress → classify.
//! Everything here is pure computation over the immutable artifacts in
//! [`fwi_model`]; there is no I/O and no shared mutable state.

pub mod classify;
pub mod encode;
pub mod pipeline;
pub mod request;
pub mod result;
pub mod validate;

pub use classify::{classify, Confidence, RiskColor, RiskLevel};
pub use encode::encode;
pub use pipeline::predict;
pub use request::PredictionRequest;
pub use result::{evaluate, PredictionResult};
pub use validate::{validate, ValidationError, REQUIRED_FIELDS};
