use crate::models::Entry;
use std::collections::BTreeMap;

/// Summed calories per calendar date, keyed by ISO `YYYY-MM-DD` strings.
/// Lexicographic key order is calendar order for zero-padded dates, so
/// iterating the map already yields days in ascending order.
pub type DailyTotals = BTreeMap<String, u64>;

pub fn aggregate(entries: &[Entry]) -> DailyTotals {
    let mut totals = DailyTotals::new();
    for entry in entries {
        let day = totals.entry(entry.date.clone()).or_insert(0);
        *day = day.saturating_add(entry.total_calories);
    }
    totals
}

pub fn total_for_date(entries: &[Entry], date: &str) -> u64 {
    entries
        .iter()
        .filter(|entry| entry.date == date)
        .fold(0u64, |sum, entry| sum.saturating_add(entry.total_calories))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntryType;

    fn entry(date: &str, total_calories: u64) -> Entry {
        Entry {
            id: format!("{date}-{total_calories}"),
            date: date.to_string(),
            entry_type: EntryType::Meal,
            name: "Test meal".to_string(),
            quantity: 1,
            calories_per_portion: total_calories,
            total_calories,
            image_data_url: "data:image/png;base64,AAAA".to_string(),
            created_at: "2024-01-01T00:00:00+00:00".to_string(),
        }
    }

    #[test]
    fn aggregate_sums_duplicate_dates() {
        let entries = vec![entry("2024-01-01", 550), entry("2024-01-01", 120)];
        let totals = aggregate(&entries);
        assert_eq!(totals.len(), 1);
        assert_eq!(totals.get("2024-01-01"), Some(&670));
    }

    #[test]
    fn aggregate_empty_input_yields_empty_map() {
        assert!(aggregate(&[]).is_empty());
    }

    #[test]
    fn aggregate_preserves_grand_total() {
        let entries = vec![
            entry("2024-01-01", 300),
            entry("2024-01-02", 900),
            entry("2024-01-01", 250),
            entry("2024-02-10", 75),
        ];
        let totals = aggregate(&entries);
        let input_sum: u64 = entries.iter().map(|e| e.total_calories).sum();
        let output_sum: u64 = totals.values().sum();
        assert_eq!(input_sum, output_sum);
    }

    #[test]
    fn aggregate_is_order_independent() {
        let forward = vec![
            entry("2024-01-02", 900),
            entry("2024-01-01", 300),
            entry("2024-01-01", 250),
        ];
        let mut reversed = forward.clone();
        reversed.reverse();
        assert_eq!(aggregate(&forward), aggregate(&reversed));
    }

    #[test]
    fn aggregate_keys_iterate_in_date_order() {
        let entries = vec![
            entry("2024-03-05", 100),
            entry("2024-01-20", 200),
            entry("2024-02-11", 300),
        ];
        let totals = aggregate(&entries);
        let dates: Vec<&String> = totals.keys().collect();
        assert_eq!(dates, ["2024-01-20", "2024-02-11", "2024-03-05"]);
    }

    #[test]
    fn total_for_date_matches_aggregate() {
        let entries = vec![
            entry("2024-01-01", 550),
            entry("2024-01-01", 120),
            entry("2024-01-02", 900),
        ];
        let totals = aggregate(&entries);
        assert_eq!(total_for_date(&entries, "2024-01-01"), totals["2024-01-01"]);
        assert_eq!(total_for_date(&entries, "2024-01-02"), totals["2024-01-02"]);
    }

    #[test]
    fn total_for_unknown_date_is_zero() {
        let entries = vec![entry("2024-01-01", 550)];
        assert_eq!(total_for_date(&entries, "2030-12-31"), 0);
        assert_eq!(total_for_date(&[], "2024-01-01"), 0);
    }
}
