//! Output formatting for CLI reports

use crate::analysis::TimingSummary;

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Format a duration in seconds for display
pub fn format_seconds(value: f64) -> String {
    format!("{value:.3} s")
}

/// Print one strategy's game-duration statistics block
pub fn print_summary(summary: &TimingSummary) {
    print_section(&format!(
        "AI vs AI game duration statistics - {}",
        summary.label
    ));
    print_kv("Trials", &summary.trials.to_string());
    print_kv("Games", &summary.games.to_string());
    print_kv("Average duration", &format_seconds(summary.mean));
    print_kv("Minimum duration", &format_seconds(summary.minimum));
    print_kv("Maximum duration", &format_seconds(summary.maximum));
    print_kv("Standard deviation", &format_seconds(summary.std_dev));
}
