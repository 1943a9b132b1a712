//! Shared utility functions used across multiple crates.

// ── Filename Sanitization ───────────────────────────────────────────

/// Convert a character name to a filesystem-safe filename.
///
/// ASCII alphanumerics, `_` and `-` pass through; every other character
/// becomes `_`. Runs of `_` collapse to one and leading/trailing `_` are
/// trimmed, so visually similar names map to the same stable file.
pub fn safe_filename(name: &str) -> String {
    let mut safe = String::with_capacity(name.len());
    let mut last_underscore = false;

    for c in name.chars() {
        if c.is_ascii_alphanumeric() || c == '-' {
            safe.push(c);
            last_underscore = false;
        } else if !last_underscore {
            safe.push('_');
            last_underscore = true;
        }
    }

    let trimmed = safe.trim_matches('_');
    if trimmed.is_empty() {
        "unknown".to_string()
    } else {
        trimmed.to_string()
    }
}

// ── Tests ───────────────────────────────────────────────────────────
