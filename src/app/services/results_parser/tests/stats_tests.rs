//! Tests for parsing statistics

use super::*;
use crate::app::services::results_parser::ParseStats;

#[test]
fn test_stats_for_clean_listing() {
    let result = ResultsParser::new()
        .load_with_stats(&create_mixed_listing())
        .unwrap();

    assert_eq!(result.finishers.len(), 7);
    assert_eq!(result.stats.total_lines, 9);
    assert_eq!(result.stats.blank_lines, 2);
    assert_eq!(result.stats.finishers_parsed, 7);
    assert!(result.stats.is_clean());
    assert_eq!(result.stats.clean_rate(), 100.0);
}

#[test]
fn test_stats_count_raw_fallbacks() {
    let listing = "1 Good, Time   Whitworth   25:00.00   1\n\
                   2 Bad, Time   Whitworth   25:75.00   2\n\
                   99999999999 Bad, Both   Whitworth   26:61.00\n\
                   4 Good, Again   Whitworth   26:10.00   3";
    let result = ResultsParser::new().load_with_stats(listing).unwrap();

    assert_eq!(result.stats.finishers_parsed, 4);
    assert_eq!(result.stats.raw_fields, 3);
    assert_eq!(
        result.stats.fallbacks,
        [
            "Line 2: kept raw text for 1 field(s)",
            "Line 3: kept raw text for 2 field(s)"
        ]
    );
    assert!(!result.stats.is_clean());
    assert_eq!(result.stats.clean_rate(), 50.0);
}

#[test]
fn test_empty_stats() {
    let stats = ParseStats::new();
    assert_eq!(stats.total_lines, 0);
    assert!(stats.is_clean());
    assert_eq!(stats.clean_rate(), 100.0);
}
