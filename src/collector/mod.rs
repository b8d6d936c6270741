/// Collector module
///
/// This module groups all logic responsible for:
/// - Owning the session lifecycle for a run
/// - Running both source adapters in order
/// - Merging, deduplicating and id-assigning the results
///
/// The collector layer acts as the orchestration layer between:
/// - Source adapters (metal-trade, metalinfo)
/// - The output boundary (cache file + stdout)
///
/// Design notes:
/// - Site-specific logic MUST NOT live here
/// - This module should remain thin and orchestration-focused
pub mod runner;
pub mod dedup;

pub use runner::collect_all;
