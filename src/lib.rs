// ------------------------------------------------------------
// Module declarations
// ------------------------------------------------------------
//
// Each module represents a well-defined responsibility:
//
// - schema:    Strongly typed trade-lead record definitions
// - dates:     Target date window resolution
// - util:      Shared text / timestamp helpers
// - browser:   The page capability (trait, DOM snapshots, HTTP impl)
// - sources:   Source adapters and adapter registry
// - collector: Run orchestration + deduplication
// - cache:     On-disk JSON cache artifact
// - metrics:   Lock-free run counters
// - logging:   Tagged stderr logging setup
//
pub mod schema;
pub mod dates;
pub mod util;
pub mod browser;
pub mod sources;
pub mod collector;
pub mod cache;
pub mod metrics;
pub mod logging;
