//! FNOL Domain Layer
//!
//! Core value types for turning a First Notice of Loss document into a routed
//! claim. This crate holds no I/O: only the fixed schema, the typed field
//! record, the routing vocabulary and the trait boundaries that the
//! infrastructure crates implement.
//!
//! ## Key Concepts
//!
//! - **Mandatory field**: one of the 7 schema fields a complete claim carries
//! - **Extracted fields**: the typed, nullable record produced from raw text
//! - **Route**: the handling decision assigned to a claim
//! - **Claim result**: fields, missing list, route and reasoning, assembled once
//!
//! ## Architecture
//!
//! - Only `serde` as an external dependency (the result is a wire contract)
//! - Pure business types only
//! - Trait definitions for the inference service and field extraction

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod claim;
pub mod claim_type;
pub mod fields;
pub mod route;
pub mod schema;
pub mod traits;

// Re-exports for convenience
pub use claim::ClaimResult;
pub use claim_type::ClaimType;
pub use fields::ExtractedFields;
pub use route::RouteDecision;
pub use schema::{MandatoryField, FRAUD_KEYWORDS, MANDATORY_FIELDS};
