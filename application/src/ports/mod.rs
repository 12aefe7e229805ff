//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that presentation and infrastructure
//! adapters implement.

pub mod turn_notifier;
