//! Properties type.
//!
//! Represents a parsed java-properties file with typed access.
//!
//! keyfob implements the conventional subset of the format that
//! key.properties files actually use: one `key=value` pair per line
//! (`:` also accepted as separator), `#` and `!` comment lines, and
//! backslash escapes (`\\`, `\n`, `\r`, `\t`, plus any escaped literal
//! such as `\=` or `\ `). Line continuations and `\uXXXX` escapes are
//! not supported. Duplicate keys keep the last value.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;

/// A parsed properties file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Properties {
    entries: Vec<(String, String)>,
    path: PathBuf,
}

impl Properties {
    /// Parse a properties file from disk
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read. Parsing itself never
    /// fails: every line is a comment, blank, or a key-value pair.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let props = Self::parse(&contents, path);

        debug!(path = %path.display(), entries = props.len(), "properties loaded");

        Ok(props)
    }

    /// Parse properties text
    ///
    /// Skips blank lines and comments (lines whose first non-blank
    /// character is `#` or `!`). A line without a separator becomes a
    /// key with an empty value, as `java.util.Properties` does.
    pub fn parse(contents: &str, path: impl Into<PathBuf>) -> Self {
        let mut entries: Vec<(String, String)> = Vec::new();

        for line in contents.lines() {
            if let Some((key, value)) = parse_line(line) {
                // Duplicate keys keep the last value
                match entries.iter_mut().find(|(k, _)| *k == key) {
                    Some(slot) => slot.1 = value,
                    None => entries.push((key, value)),
                }
            }
        }

        Self {
            entries,
            path: path.into(),
        }
    }

    /// Create from raw key-value pairs
    pub fn from_pairs(pairs: Vec<(String, String)>, path: PathBuf) -> Self {
        Self {
            entries: pairs,
            path,
        }
    }

    /// Write the properties file to disk
    ///
    /// Entries are written in `key=value` form with the minimal escaping
    /// needed to re-parse losslessly. The file holds signing secrets, so
    /// it is created with mode 0600 on Unix.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be written.
    pub fn save(&self) -> Result<()> {
        let content = self.to_properties_string();

        #[cfg(unix)]
        {
            use std::io::Write;
            use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

            let mut file = std::fs::OpenOptions::new()
                .create(true)
                .truncate(true)
                .write(true)
                .mode(0o600)
                .open(&self.path)?;
            file.write_all(content.as_bytes())?;
            file.flush()?;

            // Ensure secure permissions even when overwriting an existing file.
            std::fs::set_permissions(&self.path, std::fs::Permissions::from_mode(0o600))?;
        }

        #[cfg(not(unix))]
        {
            std::fs::write(&self.path, content)?;
        }

        debug!(path = %self.path.display(), entries = self.len(), "properties saved");

        Ok(())
    }

    /// Get a value by key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// All entries as key-value pairs
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// File path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialize to properties format
    fn to_properties_string(&self) -> String {
        let mut output = String::new();

        for (key, value) in &self.entries {
            output.push_str(&format!("{}={}\n", escape_key(key), escape_value(value)));
        }

        output
    }
}

impl std::fmt::Display for Properties {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_properties_string())
    }
}

/// Parse one line into a key-value pair, or None for blanks and comments.
fn parse_line(line: &str) -> Option<(String, String)> {
    let line = line.trim_start();

    if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
        return None;
    }

    match split_at_separator(line) {
        Some((raw_key, raw_value)) => {
            let key = unescape_key(raw_key);
            // Leading whitespace of the value is skipped, trailing kept.
            let value = unescape(raw_value.trim_start_matches(|c| c == ' ' || c == '\t'));
            Some((key, value))
        }
        None => Some((unescape_key(line), String::new())),
    }
}

/// Find the first unescaped `=` or `:` separator.
fn split_at_separator(s: &str) -> Option<(&str, &str)> {
    let mut escaped = false;

    for (i, ch) in s.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' => escaped = true,
            '=' | ':' => return Some((&s[..i], &s[i + 1..])),
            _ => {}
        }
    }

    None
}

/// Decode backslash escapes.
///
/// An unrecognized escape yields the escaped character unchanged, as
/// `java.util.Properties` does. A trailing lone backslash is kept
/// literally (line continuations are not part of the subset).
fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }

        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }

    out
}

/// Decode a key, dropping unescaped trailing whitespace.
///
/// The whitespace between a key and its separator is padding; escaped
/// whitespace (`\ `) is part of the key and survives.
fn unescape_key(raw: &str) -> String {
    let mut decoded: Vec<(char, bool)> = Vec::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            decoded.push((ch, false));
            continue;
        }

        match chars.next() {
            Some('n') => decoded.push(('\n', true)),
            Some('r') => decoded.push(('\r', true)),
            Some('t') => decoded.push(('\t', true)),
            Some(other) => decoded.push((other, true)),
            None => decoded.push(('\\', false)),
        }
    }

    while matches!(decoded.last(), Some((c, false)) if c.is_whitespace()) {
        decoded.pop();
    }

    decoded.into_iter().map(|(c, _)| c).collect()
}

fn escape_key(key: &str) -> String {
    let mut escaped = String::with_capacity(key.len());

    for ch in key.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '=' => escaped.push_str("\\="),
            ':' => escaped.push_str("\\:"),
            '#' => escaped.push_str("\\#"),
            '!' => escaped.push_str("\\!"),
            ' ' => escaped.push_str("\\ "),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            _ => escaped.push(ch),
        }
    }

    escaped
}

fn escape_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());

    for (i, ch) in value.chars().enumerate() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            // Only the first character can be swallowed as padding.
            ' ' if i == 0 => escaped.push_str("\\ "),
            _ => escaped.push(ch),
        }
    }

    escaped
}
