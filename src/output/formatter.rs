use std::io::IsTerminal;
use owo_colors::OwoColorize;
use terminal_size::{Width, terminal_size};

use crate::data::Record;
use crate::quiz::{generate_named, Answer};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate text to fit available width, counting chars rather than bytes
fn truncate_text(text: &str, max_width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_width {
        text.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Pad to `width` by char count so accented names line up.
fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{}{}", text, " ".repeat(width.saturating_sub(len)))
}

fn column_width<F: Fn(&Record) -> &str>(records: &[Record], field: F) -> usize {
    records
        .iter()
        .map(|r| field(r).chars().count())
        .max()
        .unwrap_or(0)
}

/// Format records as a study table:
/// index, IATA, department, capital, airport city, altitude, airport name.
/// The airport name is truncated to the terminal width when there is one.
pub fn format_record_table(records: &[Record], use_colors: bool) -> String {
    if records.is_empty() {
        return "No records found.".to_string();
    }

    let term_width = get_terminal_width();
    let dept_width = column_width(records, |r| &r.department);
    let capital_width = column_width(records, |r| &r.capital);
    let city_width = column_width(records, |r| &r.airport_city);
    let separator = "  ";

    records
        .iter()
        .enumerate()
        .map(|(idx, record)| {
            let index_str = format!("{:>2}.", idx + 1);
            let iata = pad(&record.iata, 3);
            let department = pad(&record.department, dept_width);
            let capital = pad(&record.capital, capital_width);
            let city = pad(&record.airport_city, city_width);
            let altitude = format!("{:>5} m", record.altitude);

            let fixed_width = 3 + 1 + 3 + dept_width + capital_width + city_width + 7
                + separator.len() * 5;
            let airport = match term_width {
                Some(width) if width > fixed_width + 10 => {
                    truncate_text(&record.airport, width - fixed_width)
                }
                Some(_) => truncate_text(&record.airport, 20),
                None => record.airport.clone(),
            };

            if use_colors {
                format!(
                    "{} {}{}{}{}{}{}{}{}{}{}{}",
                    index_str.dimmed(),
                    iata.bold(),
                    separator,
                    department.cyan(),
                    separator,
                    capital.yellow(),
                    separator,
                    city,
                    separator,
                    altitude.green(),
                    separator,
                    airport.dimmed()
                )
            } else {
                format!(
                    "{} {}{}{}{}{}{}{}{}{}{}{}",
                    index_str,
                    iata,
                    separator,
                    department,
                    separator,
                    capital,
                    separator,
                    city,
                    separator,
                    altitude,
                    separator,
                    airport
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format records as tab-separated values for scripting, with a header row
pub fn format_tsv(records: &[Record]) -> String {
    let mut lines = vec![
        "department\tcapital\tairport\tairport_city\tiata\taltitude\tlatitude\tlongitude".to_string(),
    ];
    lines.extend(records.iter().map(|r| {
        format!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            r.department, r.capital, r.airport, r.airport_city, r.iata, r.altitude, r.latitude,
            r.longitude
        )
    }));
    lines.join("\n")
}

pub fn format_json(records: &[Record]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(records)
}

/// Format one question per record for the named mode, followed by its answer.
/// Records whose question is empty (unknown mode) are skipped.
pub fn format_question_sheet(records: &[Record], mode_name: &str, use_colors: bool) -> String {
    let lines: Vec<String> = records
        .iter()
        .map(|record| generate_named(record, mode_name))
        .filter(|q| !q.prompt.is_empty())
        .enumerate()
        .map(|(idx, question)| {
            let answer = match &question.expected {
                Some(Answer::Text(text)) => text.clone(),
                Some(Answer::Numeric(value)) => format!("{} m", value),
                Some(Answer::Coordinate(p)) => format!("{:.4}, {:.4}", p.lat, p.lon),
                None => String::new(),
            };
            let index_str = format!("{:>2}.", idx + 1);
            let prompt = question.prompt.replace('\n', "; ");
            match (answer.is_empty(), use_colors) {
                (true, true) => format!("{} {}", index_str.dimmed(), prompt),
                (true, false) => format!("{} {}", index_str, prompt),
                (false, true) => format!("{} {}  -> {}", index_str.dimmed(), prompt, answer.green()),
                (false, false) => format!("{} {}  -> {}", index_str, prompt, answer),
            }
        })
        .collect();

    if lines.is_empty() {
        format!("No questions for mode '{}'.", mode_name)
    } else {
        lines.join("\n")
    }
}
