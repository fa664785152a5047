//! Fuzz target for lead ingestion.
//!
//! Arbitrary text after a valid header must never panic, and every lead
//! that comes out must carry an in-range score.

#![no_main]

use leadsift::LeadSift;
use libfuzzer_sys::fuzz_target;

const HEADER: &str = "Company Name,Email,Phone,Industry,Revenue\n";

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs to avoid OOM
    if data.len() > 100_000 {
        return;
    }

    let engine = LeadSift::new();
    let body = String::from_utf8_lossy(data);

    // Raw input may or may not have the required columns
    let _ = engine.ingest(&body);

    if let Ok(report) = engine.ingest(&format!("{}{}", HEADER, body)) {
        for lead in &report.leads {
            assert!(lead.lead_score() <= 100);
        }
    }
});
