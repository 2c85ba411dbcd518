use std::fs;
use std::io::IsTerminal;

/// Create an OSC8 file:// hyperlink for terminal output
pub fn osc8_file_link(path: &str, text: &str) -> String {
    let abs_path = fs::canonicalize(path)
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|_| path.to_string());
    format!("\x1b]8;;file://{}\x1b\\{}\x1b]8;;\x1b\\", abs_path, text)
}

/// Display a path for the console, hyperlinked only when stdout is a terminal
pub fn display_path(path: &str) -> String {
    if std::io::stdout().is_terminal() {
        osc8_file_link(path, path)
    } else {
        path.to_string()
    }
}
