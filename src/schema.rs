use serde::{Serialize, Deserialize};

/// Central record type used across the entire collection pipeline.
///
/// This is the unified trade-lead format shared between:
/// - Source adapters (metal-trade.ru, metalinfo.ru)
/// - The deduplication / id-assignment pass
/// - The cache file and the stdout consumer
///
/// DESIGN NOTES:
/// - This struct is intentionally stable; any change here affects
///   every downstream consumer of the emitted JSON.
/// - All free-text fields are kept as extracted (trimmed, NBSP
///   normalized), never re-encoded.
///
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TradeLeadRecord {
    /// Stable dedup-derived identifier.
    ///
    /// CONTRACT:
    /// - Always 0 at extraction time
    /// - Assigned exactly once, after global deduplication
    /// - Derived from a fixed 64-bit FNV-1a hash, so values are
    ///   reproducible across runs and platforms
    pub id: u64,

    /// Item name / title, trimmed, non-breaking spaces normalized
    pub product: String,

    /// Posting party, or [`COMPANY_UNSPECIFIED`] if absent
    pub company: String,

    /// Geographic locality, or [`REGION_UNSPECIFIED`] if absent
    pub region: String,

    /// Quantity / description text.
    ///
    /// Site limitation: metal-trade.ru exposes no separate quantity
    /// field, so its adapter mirrors `product` here. metalinfo.ru
    /// fills it from the bulletin's description row, defaulting to
    /// [`VOLUME_UNSPECIFIED`].
    pub volume: String,

    /// "DD.MM.YYYY HH:MM" — calendar date plus time-of-day, both
    /// taken from source markup. The date part is always a member
    /// of the target window resolved for the run.
    pub event_date: String,

    /// Lead status. Every record leaves this collector as
    /// `potential`; transitions happen downstream.
    pub status: LeadStatus,

    /// Adapter-assigned trust score in 0..=100.
    ///
    /// Fixed per source (70 for the tabular listing, 55 for the
    /// looser bulletin board), not computed per record.
    pub confidence: u8,

    /// Base listing URL of the originating site
    pub source: String,
}

/// Lead status as understood by the downstream dashboard.
///
/// IMPORTANT:
/// - The collector only ever emits `Potential`
/// - `Urgent` / `Confirmed` exist for schema compatibility with
///   the consumer and are never produced here
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LeadStatus {
    Urgent,
    Potential,
    Confirmed,
}

// ------------------------------------------------------------
// Sentinel values
// ------------------------------------------------------------
//
// Missing optional fields are never errors; they resolve to these
// literals. The strings are Russian because the source sites and
// the consumer UI are.
//
pub const COMPANY_UNSPECIFIED: &str = "Не указана";
pub const REGION_UNSPECIFIED: &str = "Не указан";
pub const VOLUME_UNSPECIFIED: &str = "Не указано";
