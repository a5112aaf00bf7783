// Colored terminal output for topic summaries.
//
// Each topic prints as a header line followed by one bar per term. Bars are
// scaled against the largest weight on screen so raw (unnormalized) weights
// still fit the chart.

use colored::Colorize;

use crate::topics::summary::TopicSummary;

const BAR_WIDTH: usize = 20;
const TERM_COLUMN: usize = 24;

/// Display topic summaries as a bar chart in the terminal.
pub fn display_topics(summaries: &[TopicSummary]) {
    if summaries.is_empty() {
        println!("No topics to display.");
        return;
    }

    let scale = summaries
        .iter()
        .map(TopicSummary::max_weight)
        .fold(0.0_f64, f64::max);

    println!(
        "\n{}",
        format!("=== Top Terms ({} topics) ===", summaries.len()).bold()
    );
    println!();

    for summary in summaries {
        println!(
            "  {} {}",
            format!("Topic {:>2}:", summary.topic).bold(),
            summary.label().dimmed()
        );

        for term in &summary.terms {
            let bar = render_bar(term.weight, scale, BAR_WIDTH);
            let ratio = if scale > 0.0 { term.weight / scale } else { 0.0 };

            // Color the bar based on weight relative to the strongest term
            let colored_bar = if ratio >= 0.66 {
                bar.bright_green()
            } else if ratio >= 0.33 {
                bar.bright_yellow()
            } else {
                bar.bright_blue()
            };

            println!(
                "      {:<width$} {} {:.4}",
                super::truncate_chars(&term.term, TERM_COLUMN),
                colored_bar,
                term.weight,
                width = TERM_COLUMN + 3
            );
        }
        println!();
    }
}

/// Build a fixed-width bar like `[=====     ]` for `weight` out of `scale`.
///
/// Weights outside [0, scale] are clamped to an empty or full bar.
pub fn render_bar(weight: f64, scale: f64, width: usize) -> String {
    let ratio = if scale > 0.0 {
        (weight / scale).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let filled = (ratio * width as f64).round() as usize;
    let empty = width.saturating_sub(filled);
    format!("[{}{}]", "=".repeat(filled), " ".repeat(empty))
}
