use std::collections::HashMap;

use exercises::runtime::{
    check_entries, longest_operation, operation_totals_by_software, software_totals, Entry,
};

/// Builds entries from raw tuples, folding the names onto a small set so
/// keys actually collide.
fn entries_from(raw: &[(u8, u8, u16)]) -> Vec<Entry> {
    raw.iter()
        .map(|&(software, operation, length)| Entry {
            software: format!("software-{}", software % 5),
            operation: format!("op-{}", operation % 7),
            // Sixteenths are exact in binary, so recounted sums match bit
            // for bit.
            length: f64::from(length) / 16.0,
        })
        .collect()
}

quickcheck::quickcheck! {
    fn software_totals_match_a_naive_recount(raw: Vec<(u8, u8, u16)>) -> bool {
        let entries = entries_from(&raw);
        let mut recount = HashMap::new();
        for e in &entries {
            *recount.entry(e.software.as_str()).or_insert(0.0) += e.length;
        }

        let ranking = software_totals(&entries);
        ranking.len() == recount.len()
            && ranking.iter().all(|&(name, total)| recount.get(name) == Some(&total))
    }

    fn rankings_are_descending(raw: Vec<(u8, u8, u16)>) -> bool {
        let entries = entries_from(&raw);
        let softwares = software_totals(&entries);
        let pairs = operation_totals_by_software(&entries);
        softwares.windows(2).all(|w| w[0].1 >= w[1].1)
            && pairs.windows(2).all(|w| w[0].2 >= w[1].2)
    }

    fn the_longest_operation_is_the_maximum(raw: Vec<(u8, u8, u16)>) -> bool {
        let entries = entries_from(&raw);
        let mut recount = HashMap::new();
        for e in &entries {
            *recount.entry(e.operation.as_str()).or_insert(0.0) += e.length;
        }

        match longest_operation(&entries) {
            None => entries.is_empty(),
            Some((name, total)) => {
                recount.get(name) == Some(&total)
                    && recount.values().all(|&sum| sum <= total)
            }
        }
    }

    fn generated_entries_pass_the_strict_check(raw: Vec<(u8, u8, u16)>) -> bool {
        // Lengths built above are always finite and non-negative.
        check_entries(&entries_from(&raw)).is_ok()
    }
}
