//! Terminal rendering for the viewer.
//!
//! Keywords are printed as the last column of every line so CJK display
//! widths never break the alignment of the numeric columns.

use colored::Colorize;
use keylens_application::{ChartBar, ViewerRender};
use keylens_core::catalog::KeywordRecord;
use keylens_core::detail::KeywordDetail;

/// Width of the longest chart bar in terminal cells.
const CHART_WIDTH: u64 = 40;

/// Prints the category list.
pub fn print_categories(categories: &[String]) {
    println!("{}", "Available categories".bright_magenta().bold());
    for category in categories {
        println!("  {category}");
    }
}

/// Prints the full render: table, chart, and detail panel.
pub fn print_render(render: &ViewerRender) {
    println!(
        "{} {}",
        "Category:".bright_magenta().bold(),
        render.category.bold()
    );
    println!();

    print_table(render);
    println!();
    print_chart(&render.chart);
    println!();

    match (render.selection.keyword(), &render.details) {
        (Some(keyword), Some(details)) => print_details(keyword, details),
        (Some(keyword), None) => {
            println!(
                "{}",
                format!("No detail text authored yet for '{keyword}'.").bright_black()
            );
        }
        (None, _) => {
            println!(
                "{}",
                "Select a keyword to see its detail notes.".bright_black()
            );
        }
    }
}

fn print_table(render: &ViewerRender) {
    println!(
        "{}",
        format!("{:>4}  {:3}  {:>6}  {:>6}  keyword", "rank", "sel", "count", "ratio").bright_black()
    );
    for row in &render.rows {
        let checkbox = if row.selected { "[x]" } else { "[ ]" };
        let ratio = match row.ratio {
            Some(ratio) => format!("{:>5.1}%", ratio * 100.0),
            None => "     -".to_string(),
        };
        let line = format!(
            "{:>4}  {}  {:>6}  {}  {}",
            row.rank, checkbox, row.frequency, ratio, row.keyword
        );
        if row.selected {
            println!("{}", line.green());
        } else {
            println!("{line}");
        }
    }
}

fn print_chart(bars: &[ChartBar]) {
    let Some(max) = bars.iter().map(|b| b.frequency).max().filter(|&m| m > 0) else {
        return;
    };

    println!("{}", format!("Top {} keywords", bars.len()).bright_magenta().bold());
    for bar in bars {
        let width = (bar.frequency * CHART_WIDTH / max).max(1) as usize;
        // Pad before coloring; ANSI codes would throw off format widths.
        let padding = " ".repeat(CHART_WIDTH as usize - width);
        println!(
            "  {}{} {:>6}  {}",
            "█".repeat(width).cyan(),
            padding,
            bar.frequency,
            bar.keyword
        );
    }
}

fn print_details(keyword: &str, details: &KeywordDetail) {
    println!("{}", format!("[{keyword}]").bright_magenta().bold());
    for bullet in &details.bullets {
        println!("  {} {}", "•".bright_blue(), bullet.bright_blue());
    }
}

/// Prints the empty-state message for a category without rows.
pub fn print_empty_category(category: &str) {
    println!(
        "{}",
        format!("No keyword data for category '{category}'. Check the catalog contents.").yellow()
    );
}

/// Prints the raw catalog records (the whole-data view).
pub fn print_raw(records: &[KeywordRecord]) {
    println!("{}", "Raw catalog records".bright_magenta().bold());
    println!(
        "{}",
        format!("{:>6}  {:>11}  category / keyword", "count", "total_posts").bright_black()
    );
    for record in records {
        println!(
            "{:>6}  {:>11}  {} / {}",
            record.frequency, record.total_postings, record.category, record.keyword
        );
    }
}
