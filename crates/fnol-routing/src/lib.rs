//! FNOL Routing
//!
//! Decides how a claim is handled once its fields are known.
//!
//! The engine provides:
//! - Missing mandatory field detection (schema order)
//! - A fixed-priority rule cascade: fraud, completeness, injury, fast-track,
//!   default manual review
//! - Assembly of the final `ClaimResult`
//!
//! # Examples
//!
//! ```
//! use fnol_routing::RoutingEngine;
//! use fnol_domain::{ClaimType, ExtractedFields, RouteDecision};
//!
//! let engine = RoutingEngine::default_config();
//! let fields = ExtractedFields {
//!     description: Some("Staged collision reported by claimant".to_string()),
//!     claim_type: Some(ClaimType::NonInjury),
//!     ..Default::default()
//! };
//!
//! let result = engine.process(fields);
//! assert_eq!(result.recommended_route(), RouteDecision::InvestigationFlag);
//! ```

#![warn(missing_docs)]

mod assembler;
mod config;
mod engine;

pub use assembler::assemble;
pub use config::RoutingConfig;
pub use engine::{determine_route, find_missing_fields, RoutingDecision, RoutingEngine};
