//! Shared CLI helpers — banner and status marks.

use colored::Colorize;

/// Print the banner shown when a long-running command starts.
pub fn print_banner() {
    let version = env!("CARGO_PKG_VERSION");
    println!();
    println!("{}  v{}", "⚡ Modelgate".cyan().bold(), version.dimmed());
    println!();
}

/// `✓ (key set)` or a dimmed `· not configured`.
pub fn key_status(configured: bool) -> String {
    if configured {
        format!("{} (key set)", "✓".green())
    } else {
        format!("{}", "· not configured".dimmed())
    }
}

/// `✓` or a red `(not found)` for a path on disk.
pub fn exists_mark(exists: bool) -> String {
    if exists {
        "✓".green().to_string()
    } else {
        "(not found)".red().to_string()
    }
}

/// Render a yes/no capability flag.
pub fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_status_text() {
        colored::control::set_override(false);
        assert_eq!(key_status(true), "✓ (key set)");
        assert_eq!(key_status(false), "· not configured");
    }

    #[test]
    fn exists_mark_text() {
        colored::control::set_override(false);
        assert_eq!(exists_mark(true), "✓");
        assert_eq!(exists_mark(false), "(not found)");
    }

    #[test]
    fn yes_no_text() {
        assert_eq!(yes_no(true), "yes");
        assert_eq!(yes_no(false), "no");
    }
}
