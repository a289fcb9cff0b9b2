use std::io::{self, Write};
use std::time::Duration;

use chrono::Local;
use colored::Colorize;
use serde_json::Value;

use crate::models::{Identifier, LookupResult, KNOWN_FIELDS};

const BANNER: &str = r#"
 ══════════════════════════════════════════════════════════════

  ██╗    ██╗ █████╗ ███████╗██████╗
  ██║    ██║██╔══██╗██╔════╝██╔═══██╗
  ██║ █╗ ██║███████║███████╗██████╔╝
  ██║███╗██║██╔══██║╚════██║██╔═══╝
  ╚███╔███╔╝██║  ██║███████║██║
   ╚══╝╚══╝ ╚═╝  ╚═╝╚══════╝╚═╝

                Wireless Asset Search Protocol v2.1

 ══════════════════════════════════════════════════════════════
"#;

const SCAN_STEPS: [&str; 5] = [
    "Establishing secure connection...",
    "Bypassing carrier security...",
    "Querying cellular database...",
    "Analyzing network patterns...",
    "Compiling intelligence data...",
];

const ERROR_TIPS: [&str; 4] = [
    "Check if the mobile number is valid",
    "Verify your internet connection",
    "The API server might be temporarily unavailable",
    "Try again after some time",
];

pub fn print_banner() {
    println!("{}", BANNER.magenta());
}

/// Prints the fixed scan-progress lines before a fetch. Cosmetic only.
pub async fn show_scan_progress(id: &Identifier) {
    println!(
        "\n{}",
        format!("[WASP] Initializing scan protocol for: {}", id).yellow()
    );
    for (i, step) in SCAN_STEPS.iter().enumerate() {
        println!("{}", format!("[{}/5] {}", i + 1, step).magenta());
        tokio::time::sleep(Duration::from_millis(300)).await;
    }
    println!("{}", "[WASP] Scan complete! Retrieving results...".green());
}

/// Renders one lookup outcome to stdout, flushing before returning so an
/// interrupt between items never leaves a half-written record.
pub fn render(result: &LookupResult, id: &Identifier) {
    let mut stdout = io::stdout();
    // Writing to stdout only fails on a closed pipe; nothing to recover.
    let _ = render_to(&mut stdout, result, id);
    let _ = stdout.flush();
}

/// Core renderer, writer-generic so tests can capture the output.
///
/// Purely presentational: no validation, no mutation of the result.
pub fn render_to<W: Write>(out: &mut W, result: &LookupResult, id: &Identifier) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "{}",
        "╔════════════════════════════════════════════════════════════════╗".cyan()
    )?;
    writeln!(
        out,
        "{}",
        format!("║                 SCAN RESULTS - {:<15}                 ║", id).cyan()
    )?;
    writeln!(
        out,
        "{}",
        "╚════════════════════════════════════════════════════════════════╝".cyan()
    )?;
    writeln!(out)?;

    match result {
        LookupResult::Failure(msg) => write_failure(out, msg),
        LookupResult::Success(fields) if fields.is_empty() => {
            writeln!(
                out,
                "{}",
                format!("⚠️  No data found for mobile number: {}", id).yellow()
            )
        }
        LookupResult::Success(fields) => write_fields(out, fields),
    }
}

fn write_failure<W: Write>(out: &mut W, msg: &str) -> io::Result<()> {
    writeln!(out, "{}", format!("❌ ERROR: {}", msg).red())?;
    writeln!(out, "\n{}", "💡 TIPS:".yellow())?;
    for tip in ERROR_TIPS {
        writeln!(out, "{}", format!("• {}", tip).yellow())?;
    }
    Ok(())
}

fn write_fields<W: Write>(out: &mut W, fields: &serde_json::Map<String, Value>) -> io::Result<()> {
    let rule = "═".repeat(60);
    writeln!(out, "{}", rule.magenta())?;

    if let Some(name) = present(fields, "name") {
        write_labeled(out, "NAME", &display_value(name))?;
    }
    if let Some(fname) = present(fields, "fname") {
        write_labeled(out, "FATHER'S NAME", &display_value(fname))?;
    }

    let mobile = present(fields, "mobile")
        .map(display_value)
        .unwrap_or_else(|| "N/A".to_string());
    write_labeled(out, "PRIMARY MOBILE", &mobile)?;

    if let Some(alt) = present(fields, "alt") {
        let alt = display_value(alt);
        if !alt.is_empty() {
            write_labeled(out, "ALTERNATE MOBILE", &alt)?;
        }
    }

    if let Some(id_field) = present(fields, "id") {
        write_labeled(out, "ID", &display_value(id_field))?;
    }

    if let Some(address) = present(fields, "address") {
        writeln!(out, "{}", "🔹 ADDRESS:".magenta())?;
        for line in display_value(address).split(", ") {
            writeln!(out, "   {}", line.green())?;
        }
        writeln!(out)?;
    }

    if let Some(circle) = present(fields, "circle") {
        write_labeled(out, "SERVICE CIRCLE", &display_value(circle))?;
    }

    // Remaining keys render generically, in the order the server sent them.
    let extras: Vec<(&String, &Value)> = fields
        .iter()
        .filter(|(key, value)| !KNOWN_FIELDS.contains(&key.as_str()) && !value.is_null())
        .collect();

    if !extras.is_empty() {
        writeln!(out, "{}", "🔸 ADDITIONAL INFORMATION:".yellow())?;
        for (key, value) in extras {
            writeln!(
                out,
                "   {} {}",
                format!("{}:", title_case(key)).magenta(),
                display_value(value).green()
            )?;
        }
        writeln!(out)?;
    }

    writeln!(out, "{}", rule.magenta())?;
    writeln!(
        out,
        "{}",
        format!(
            "✅ Scan completed successfully at {}",
            Local::now().format("%H:%M:%S")
        )
        .green()
    )
}

fn write_labeled<W: Write>(out: &mut W, label: &str, value: &str) -> io::Result<()> {
    writeln!(out, "{}", format!("🔹 {}:", label).magenta())?;
    writeln!(out, "   {}", value.green())?;
    writeln!(out)
}

/// A key counts as present only when it exists and is not JSON null.
fn present<'a>(fields: &'a serde_json::Map<String, Value>, key: &str) -> Option<&'a Value> {
    fields.get(key).filter(|value| !value.is_null())
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn title_case(key: &str) -> String {
    key.replace('_', " ")
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
