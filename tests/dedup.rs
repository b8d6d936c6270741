use metal_lead_collector::collector::dedup::dedup_and_assign_ids;
use metal_lead_collector::schema::{LeadStatus, TradeLeadRecord};

fn lead(product: &str, volume: &str, date: &str, company: &str) -> TradeLeadRecord {
    TradeLeadRecord {
        id: 0,
        product: product.to_string(),
        company: company.to_string(),
        region: "Москва".to_string(),
        volume: volume.to_string(),
        event_date: date.to_string(),
        status: LeadStatus::Potential,
        confidence: 70,
        source: "https://www.metal-trade.ru/buy/".to_string(),
    }
}

#[test]
fn identical_key_tuples_collapse_to_the_first_record() {
    let mut first = lead("Wire", "Wire", "15.12.2025 14:36", "ACME");
    first.region = "Тверь".to_string();
    let mut second = lead("Wire", "Wire", "15.12.2025 14:36", "ACME");
    second.region = "Казань".to_string();
    second.source = "https://www.metalinfo.ru/ru/board".to_string();

    let kept = dedup_and_assign_ids(vec![first, second]);

    // region/source are not part of the key; first seen wins
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].region, "Тверь");
    assert_eq!(kept[0].source, "https://www.metal-trade.ru/buy/");
    assert!(kept[0].id > 0);
}

#[test]
fn any_differing_key_field_keeps_both_records() {
    let kept = dedup_and_assign_ids(vec![
        lead("Wire", "Wire", "15.12.2025 14:36", "ACME"),
        lead("Wire", "Wire", "15.12.2025 14:36", "Другая"),
        lead("Wire", "Wire", "15.12.2025 15:00", "ACME"),
        lead("Wire", "20 т", "15.12.2025 14:36", "ACME"),
        lead("Rod", "Wire", "15.12.2025 14:36", "ACME"),
    ]);
    assert_eq!(kept.len(), 5);

    let mut ids: Vec<u64> = kept.iter().map(|e| e.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 5, "distinct tuples must get distinct ids");
}

#[test]
fn dedup_is_idempotent() {
    let input = vec![
        lead("Wire", "Wire", "15.12.2025 14:36", "ACME"),
        lead("Wire", "Wire", "15.12.2025 14:36", "ACME"),
        lead("Rod", "Rod", "16.12.2025 09:00", "ООО Сталь"),
    ];

    let once = dedup_and_assign_ids(input);
    let twice = dedup_and_assign_ids(once.clone());

    assert_eq!(once, twice);
}

#[test]
fn ids_are_stable_across_runs() {
    let a = dedup_and_assign_ids(vec![lead("Катанка", "Катанка", "15.12.2025 14:36", "ACME")]);
    let b = dedup_and_assign_ids(vec![lead("Катанка", "Катанка", "15.12.2025 14:36", "ACME")]);
    assert_eq!(a[0].id, b[0].id);
}

#[test]
fn emission_follows_first_seen_order() {
    let kept = dedup_and_assign_ids(vec![
        lead("A", "A", "15.12.2025 10:00", "x"),
        lead("B", "B", "15.12.2025 11:00", "y"),
        lead("A", "A", "15.12.2025 10:00", "x"),
        lead("C", "C", "15.12.2025 12:00", "z"),
    ]);
    let products: Vec<&str> = kept.iter().map(|e| e.product.as_str()).collect();
    assert_eq!(products, vec!["A", "B", "C"]);
}
