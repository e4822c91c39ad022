//! Startup banner and endpoint listing.

use colored::Colorize;

const BOX_INNER: usize = 59;
const INDENT: usize = 5;

/// Pads before coloring so escape codes don't count toward the width.
fn boxed_row(text: &str) -> String {
    format!("{:indent$}{:<width$}", "", text, indent = INDENT, width = BOX_INNER - INDENT)
}

pub fn print_banner() {
    let rule = "═".repeat(BOX_INNER);
    let blank = " ".repeat(BOX_INNER);
    println!();
    println!("{}", format!("╔{rule}╗").cyan());
    println!("{}", format!("║{blank}║").cyan());
    println!("{}{}{}", "║".cyan(), boxed_row("log-events v0.1.0").bold().white(), "║".cyan());
    println!(
        "{}{}{}",
        "║".cyan(),
        boxed_row("Append and read recent log entries").dimmed(),
        "║".cyan()
    );
    println!("{}", format!("║{blank}║").cyan());
    println!("{}", format!("╚{rule}╝").cyan());
    println!();
}

pub fn print_startup(addr: &str, table: &str) {
    println!("{} {}", "✓".green().bold(), "Server ready".white().bold());
    println!("  {} {}", "→".dimmed(), format!("http://{}", addr).cyan().underline());
    println!("  {} {}", "table:".dimmed(), table.white());
    println!();
    println!("{}", "Endpoints:".white().bold());
    println!("  {} {}  {}", "POST".yellow(), "/logs/write".white(), "Append a log entry".dimmed());
    println!("  {} {}   {}", "GET ".green(), "/logs/read".white(), "Latest 100 entries".dimmed());
    println!("  {} {}      {}", "GET ".green(), "/metrics".white(), "Telemetry".dimmed());
    println!("  {} {}       {}", "GET ".green(), "/health".white(), "Health check".dimmed());
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_fill_the_box() {
        for text in ["log-events v0.1.0", "Append and read recent log entries", ""] {
            let row = boxed_row(text);
            assert_eq!(row.chars().count(), BOX_INNER);
            assert!(row[INDENT..].starts_with(text));
        }
    }
}
