//! Message formatting and display.
//!
//! This module provides formatted output for different message types
//! with support for quiet and verbose modes.
//!
//! # Examples
//!
//! ```
//! use pdfopts::output::formatter::OutputFormatter;
//!
//! let formatter = OutputFormatter::new(false, false);
//! formatter.info("Validating selection...");
//! formatter.success("Configuration is valid");
//! formatter.error("Invalid rotation: 45");
//! ```

use std::io;

use super::menu::MenuEntry;

/// Level of output message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    /// Informational message.
    Info,
    /// Success message.
    Success,
    /// Warning message.
    Warning,
    /// Error message.
    Error,
    /// Debug/verbose message.
    Debug,
}

impl MessageLevel {
    /// Prefix and ANSI colour for this level.
    fn style(self) -> (&'static str, &'static str) {
        match self {
            Self::Info => ("", ""),
            Self::Success => ("✓ ", "\x1b[32m"), // Green
            Self::Warning => ("⚠ ", "\x1b[33m"), // Yellow
            Self::Error => ("✗ ", "\x1b[31m"),   // Red
            Self::Debug => ("→ ", "\x1b[36m"),   // Cyan
        }
    }

    /// Whether messages of this level go to stderr.
    fn is_diagnostic(self) -> bool {
        matches!(self, Self::Warning | Self::Error)
    }
}

/// Output formatter with configurable verbosity.
#[derive(Debug, Clone)]
pub struct OutputFormatter {
    /// Whether to suppress non-error output.
    quiet: bool,
    /// Whether to show verbose output.
    verbose: bool,
    /// Whether to use colored output.
    colored: bool,
}

impl OutputFormatter {
    /// Create a new output formatter.
    ///
    /// # Arguments
    ///
    /// * `quiet` - Suppress non-error output
    /// * `verbose` - Show verbose output
    pub fn new(quiet: bool, verbose: bool) -> Self {
        Self {
            quiet,
            verbose,
            colored: Self::should_use_color(),
        }
    }

    /// Create a quiet formatter (only errors).
    pub fn quiet() -> Self {
        Self::new(true, false)
    }

    /// Create a verbose formatter.
    pub fn verbose() -> Self {
        Self::new(false, true)
    }

    /// Detect if colored output should be used.
    ///
    /// Returns true if stdout is a TTY, TERM is set and NO_COLOR is not.
    fn should_use_color() -> bool {
        use std::io::IsTerminal;
        io::stdout().is_terminal()
            && std::env::var("TERM").is_ok()
            && std::env::var_os("NO_COLOR").is_none()
    }

    /// Print an informational message.
    ///
    /// Suppressed in quiet mode.
    pub fn info(&self, message: &str) {
        if !self.quiet {
            self.print_message(MessageLevel::Info, message);
        }
    }

    /// Print a success message.
    ///
    /// Suppressed in quiet mode.
    pub fn success(&self, message: &str) {
        if !self.quiet {
            self.print_message(MessageLevel::Success, message);
        }
    }

    /// Print a warning message.
    ///
    /// Always displayed (even in quiet mode).
    pub fn warning(&self, message: &str) {
        self.print_message(MessageLevel::Warning, message);
    }

    /// Print an error message.
    ///
    /// Always displayed.
    pub fn error(&self, message: &str) {
        self.print_message(MessageLevel::Error, message);
    }

    /// Print a debug/verbose message.
    ///
    /// Only displayed in verbose mode.
    pub fn debug(&self, message: &str) {
        if self.verbose {
            self.print_message(MessageLevel::Debug, message);
        }
    }

    fn print_message(&self, level: MessageLevel, message: &str) {
        let line = self.render(level, message);
        if level.is_diagnostic() {
            eprintln!("{line}");
        } else {
            println!("{line}");
        }
    }

    /// Apply prefix and, when enabled, colour to a message.
    fn render(&self, level: MessageLevel, message: &str) -> String {
        let (prefix, color_code) = level.style();
        let reset = "\x1b[0m";

        if self.colored && !color_code.is_empty() {
            format!("{color_code}{prefix}{message}{reset}")
        } else {
            format!("{prefix}{message}")
        }
    }

    /// Print a section header.
    ///
    /// Suppressed in quiet mode.
    pub fn section(&self, title: &str) {
        if !self.quiet {
            println!("\n{title}");
        }
    }

    /// Print a labelled detail line.
    ///
    /// Only shown in verbose mode.
    pub fn detail(&self, label: &str, value: &str) {
        if self.verbose {
            println!("  {label}: {value}");
        }
    }

    /// Print a list item.
    ///
    /// Suppressed in quiet mode.
    ///
    /// # Arguments
    ///
    /// * `index` - Item index (1-based)
    /// * `message` - Item message
    pub fn list_item(&self, index: usize, message: &str) {
        if !self.quiet {
            println!("  {index}. {message}");
        }
    }

    /// Print a selection menu under a section header.
    ///
    /// In verbose mode each entry also shows its ordinal.
    pub fn menu(&self, title: &str, entries: &[MenuEntry]) {
        if self.quiet {
            return;
        }

        self.section(title);
        for entry in entries {
            self.list_item(entry.position(), &self.menu_line(entry));
        }
    }

    fn menu_line(&self, entry: &MenuEntry) -> String {
        if self.verbose {
            format!("{} - {} (ordinal {})", entry.name, entry.label, entry.ordinal)
        } else {
            format!("{} - {}", entry.name, entry.label)
        }
    }
}

impl Default for OutputFormatter {
    fn default() -> Self {
        Self::new(false, false)
    }
}
