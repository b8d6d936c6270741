//! Source adapter registry
//!
//! This module provides:
//! - Central registration of both supported sources
//! - The run order the orchestrator iterates
//!
//! All site-specific logic must live in dedicated adapter modules.
//! The rest of the application must interact exclusively through
//! the `SourceAdapter` trait.

pub mod adapter;
pub mod metal_trade;
pub mod metal_info;

use std::sync::Arc;

use adapter::SourceAdapter;

/// Returns all registered source adapters, in run order.
///
/// CONTRACT:
/// - Order is part of the output contract: metal-trade records
///   precede metalinfo records in the concatenated pre-dedup
///   sequence, which makes first-seen-wins deduplication and the
///   final emission order deterministic.
pub fn adapters() -> Vec<Arc<dyn SourceAdapter>> {
    vec![
        Arc::new(metal_trade::MetalTradeAdapter),
        Arc::new(metal_info::MetalInfoAdapter),
    ]
}
