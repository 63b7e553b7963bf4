//! Console status lines for the command-line tool

/// ANSI color codes for terminal output
pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BRIGHT_RED: &str = "\x1b[91m";
    pub const BRIGHT_GREEN: &str = "\x1b[92m";
    pub const BRIGHT_YELLOW: &str = "\x1b[93m";
    pub const BRIGHT_CYAN: &str = "\x1b[96m";
}

/// Status types for colored output
#[derive(Debug, Clone, Copy)]
pub enum StatusType {
    Success,
    Info,
    Warning,
    Error,
}

/// Formats a status line with icon and color. Colors are skipped when the
/// terminal does not advertise support.
pub fn format_status(icon: &str, message: &str, status: StatusType, colored: bool) -> String {
    if !colored {
        return format!("[{}] {}", icon, message);
    }

    let color = match status {
        StatusType::Success => colors::BRIGHT_GREEN,
        StatusType::Info => colors::BRIGHT_CYAN,
        StatusType::Warning => colors::BRIGHT_YELLOW,
        StatusType::Error => colors::BRIGHT_RED,
    };

    format!("{}[{}]{} {}{}{}", color, icon, colors::RESET, color, message, colors::RESET)
}

/// Print status line to stderr, keeping stdout free for results
pub fn print_status(icon: &str, message: &str, status: StatusType) {
    eprintln!("{}", format_status(icon, message, status, supports_colors()));
}

/// Check if terminal supports colors
pub fn supports_colors() -> bool {
    #[cfg(windows)]
    {
        use std::env;
        env::var("TERM").is_ok() || env::var("WT_SESSION").is_ok()
    }

    #[cfg(not(windows))]
    {
        use std::env;
        env::var("TERM").is_ok() && env::var("NO_COLOR").is_err()
    }
}
