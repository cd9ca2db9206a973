//! Tiered geospatial vendor matching.
//!
//! Given a requester's location, budget, category and free-text query, the
//! engine retrieves candidate vendors from a [`vendora_core::VendorCatalog`],
//! places each in exactly one location tier, annotates budget fit, ranks
//! within tiers and returns a paginated, tier-ordered response.

pub mod assemble;
pub mod budget;
pub mod engine;
pub mod error;
pub mod geo;
pub mod memory;
pub mod normalize;
pub mod rank;
pub mod retrieve;
pub mod tier;
pub mod types;

pub use engine::MatchEngine;
pub use error::MatchError;
pub use memory::InMemoryCatalog;
pub use normalize::{normalize_text, AliasTable, QueryNormalizer, ServiceQuery};
pub use types::{BudgetFit, Candidate, SearchResponse, Tier, TierGroup};
