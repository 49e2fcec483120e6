//! Export filename generation and sanitization.
//!
//! Snapshot files are named after the timer (`{name}-timer.txt`), so user
//! input has to be reduced to a filesystem-safe stem first.

use deunicode::deunicode;

/// Windows reserved device names that cannot be used as filenames.
const WINDOWS_RESERVED: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

/// Characters that are invalid in filenames on common filesystems.
const INVALID_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Fallback stem when sanitization produces an empty result.
const FALLBACK_NAME: &str = "timer";

/// Longest stem kept before the `-timer.txt` suffix is appended.
const MAX_STEM_LENGTH: usize = 120;

/// Snapshot filename for a timer name: `{sanitized-name}-timer.txt`.
pub fn export_filename(timer_name: &str) -> String {
    format!("{}-timer.txt", sanitize(timer_name))
}

/// Reduce a timer name to a filesystem-safe stem.
///
/// Transliterates unicode to ASCII, maps whitespace to single hyphens,
/// drops invalid filesystem characters, trims edge punctuation, truncates,
/// prefixes Windows reserved names with `_`, and falls back to `"timer"`
/// when nothing survives.
pub fn sanitize(input: &str) -> String {
    let ascii = deunicode(input);

    let mut result = String::with_capacity(ascii.len());
    let mut last_was_hyphen = false;
    for c in ascii.chars() {
        if c.is_whitespace() || c == '-' {
            if !last_was_hyphen {
                result.push('-');
                last_was_hyphen = true;
            }
        } else if INVALID_CHARS.contains(&c) {
            continue;
        } else if c.is_ascii_alphanumeric() || c == '_' || c == '.' {
            result.push(c);
            last_was_hyphen = false;
        }
        // Everything else that survived deunicode is dropped
    }

    let trimmed = result
        .trim_matches(|c| c == '-' || c == '.' || c == ' ')
        .to_string();
    let truncated: String = trimmed.chars().take(MAX_STEM_LENGTH).collect();
    let named = handle_reserved_name(&truncated);

    if named.is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        named
    }
}

/// Prefix Windows reserved device names with an underscore.
fn handle_reserved_name(name: &str) -> String {
    let stem = name.split('.').next().unwrap_or(name);
    if WINDOWS_RESERVED
        .iter()
        .any(|r| r.eq_ignore_ascii_case(stem))
    {
        format!("_{}", name)
    } else {
        name.to_string()
    }
}
