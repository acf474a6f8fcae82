//! Analysis modules.
//!
//! Normalizes party labels, classifies each member's biography and
//! aggregates the results into ordered per-party buckets.

pub mod aggregator;
pub mod aliases;
pub mod classifier;
pub mod normalizer;
pub mod ordering;

pub use aggregator::aggregate;
pub use aliases::AliasTable;
pub use normalizer::PartyNormalizer;
