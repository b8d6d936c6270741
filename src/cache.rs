use std::env;
use std::fs;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::schema::TradeLeadRecord;

/// Default cache artifact name, written to the working directory.
pub const CACHE_FILE: &str = "events_cache.json";

/// Writes the final collection to the on-disk cache.
///
/// FORMAT:
/// - UTF-8, non-ASCII left unescaped
/// - Pretty-printed with 4-space indent (the cache is also read by
///   humans when debugging markup drift)
/// - Overwritten wholesale every run
///
/// A write failure is logged, never propagated: the stdout emission
/// must still happen.
pub fn save_events_to_cache(events: &[TradeLeadRecord], filename: &str) {
    let path = match env::current_dir() {
        Ok(dir) => dir.join(filename),
        Err(e) => {
            log::error!("Ошибка сохранения кэша: {e}");
            return;
        }
    };

    match render_pretty(events) {
        Ok(json) => match fs::write(&path, json) {
            Ok(()) => log::info!(
                "Кэш событий сохранен: {}. Количество: {}",
                path.display(),
                events.len()
            ),
            Err(e) => log::error!("Ошибка сохранения кэша: {e}"),
        },
        Err(e) => log::error!("Ошибка сохранения кэша: {e}"),
    }
}

/// serde_json's default pretty printer indents by 2; the cache
/// contract is 4.
fn render_pretty(events: &[TradeLeadRecord]) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    events.serialize(&mut ser)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::LeadStatus;

    fn sample() -> TradeLeadRecord {
        TradeLeadRecord {
            id: 7,
            product: "Катанка".to_string(),
            company: "АО Металл".to_string(),
            region: "Москва".to_string(),
            volume: "20 т".to_string(),
            event_date: "15.12.2025 14:36".to_string(),
            status: LeadStatus::Potential,
            confidence: 70,
            source: "https://example.invalid/".to_string(),
        }
    }

    #[test]
    fn cache_render_uses_four_space_indent_and_raw_utf8() {
        let out = render_pretty(&[sample()]).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\n    {"));
        assert!(text.contains("\"product\": \"Катанка\""));
        assert!(!text.contains("\\u"));
        assert!(text.contains("\"status\": \"potential\""));
    }
}
