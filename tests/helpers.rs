// Shared test helpers for input files and configs.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::path::{Path, PathBuf};

use scope_export::{Config, InputFormat, LogFormat, LogLevel};

/// A scope page with a structured asset table.
#[allow(dead_code)] // Used by other test files
pub const SCOPE_TABLE_HTML: &str = r#"<!DOCTYPE html>
<html>
<head><title>Acme bug bounty</title><script>var x = "cdn.acme.io";</script></head>
<body>
<h2>In scope</h2>
<table class="scope">
  <thead><tr><th>Asset name</th><th>Type</th><th>Coverage</th></tr></thead>
  <tbody>
    <tr><td>*.acme.com</td><td>Wildcard domain</td><td>In scope</td></tr>
    <tr><td>api.acme.com</td><td>Domain</td><td>In scope</td></tr>
    <tr><td> api.acme.com </td><td>Domain</td><td>In scope</td></tr>
    <tr><td>com.acme.mobile</td><td>Android: Play Store</td><td>In scope</td></tr>
    <tr><td>1234567890</td><td>iOS: App Store</td><td>In scope</td></tr>
    <tr><td>https://github.com/acme/acme-sdk</td><td>GitHub</td><td>In scope</td></tr>
    <tr><td>Acme Desktop</td><td>Downloadable executable</td><td>In scope</td></tr>
  </tbody>
</table>
</body>
</html>"#;

/// A scope page without tables, as copied from a program description.
#[allow(dead_code)] // Used by other test files
pub const SCOPE_TEXT: &str = "Assets\nexample.org\nType: Domain\n\ncom.app.foo\nCategory: Android (Play Store)\n";

/// Writes `content` to `name` inside `dir` and returns the path.
#[allow(dead_code)] // Used by other test files
pub fn write_input(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("Failed to write test input");
    path
}

/// Builds a quiet config reading `file` and writing into `output_dir`.
#[allow(dead_code)] // Used by other test files
pub fn test_config(file: PathBuf, output_dir: PathBuf) -> Config {
    Config {
        file,
        output_dir,
        input_format: InputFormat::Auto,
        json: false,
        log_level: LogLevel::Error,
        log_format: LogFormat::Plain,
    }
}
