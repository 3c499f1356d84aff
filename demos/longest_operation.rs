//! Aggregates a bundled sample of runtime entries and prints the answers.

use exercises::runtime::{
    check_entries, longest_operation, parse_entries, software_totals, EntryError,
};

const SAMPLE: &str = r#"[
    {"software": "prometheus", "operation": "scrape", "length": 1.5},
    {"software": "prometheus", "operation": "compact", "length": 4.0},
    {"software": "grafana", "operation": "render", "length": 3.25},
    {"software": "grafana", "operation": "scrape", "length": 3.0},
    {"software": "loki", "operation": "compact", "length": 0.75}
]"#;

fn main() -> Result<(), EntryError> {
    let entries = parse_entries(SAMPLE)?;
    check_entries(&entries)?;

    if let Some((operation, total)) = longest_operation(&entries) {
        println!("Longest operation: {} ({})", operation, total);
    }

    println!("Softwares by total runtime:");
    for (software, total) in software_totals(&entries) {
        println!("  {} ({})", software, total);
    }

    Ok(())
}
