use std::io::{self, Write};

use chrono::{SecondsFormat, Utc};

fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

pub fn format_line(ts: &str, line: &str) -> String {
    format!("[{}] {}", ts, line)
}

// Diagnostics go to stderr; stdout only carries the status line.
pub fn log_line(line: &str) {
    let _ = writeln!(io::stderr().lock(), "{}", format_line(&timestamp(), line));
}

pub fn log_error(prefix: &str, e: &dyn std::error::Error) {
    log_line(&format!("ERROR: {}: {}", prefix, e));
}
