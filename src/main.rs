use metal_lead_collector::{cache, collector, logging};

// ------------------------------------------------------------
// Application entry point
// ------------------------------------------------------------
//
// This is the runtime for the trade-lead collector.
//
// Responsibilities:
// - Initialize tagged stderr logging
// - Run one full collection pass
// - Persist the cache artifact
// - Emit the final JSON array on stdout (the consumer contract)
//
// No CLI flags, no environment tunables, no config file: page
// sizes, offsets, confidence scores, timeouts and delays are fixed
// constants in the adapters by design.
//
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();
    log::info!("Сборщик запущен.");

    let events = collector::collect_all().await;

    cache::save_events_to_cache(&events, cache::CACHE_FILE);
    log::info!("Сборщик завершен.");

    // Final act: one compact JSON line on stdout for the consumer.
    // Everything above goes to stderr only.
    println!("{}", serde_json::to_string(&events)?);

    Ok(())
}
