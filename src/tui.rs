//! Terminal output.
//!
//! Themed status lines, a mode header and a spinner for the directory walk.
//! All per-file reporting goes through [`UI`].

use console::{Color, Style, Term};
use indicatif::{ProgressBar, ProgressStyle};
use std::io;

pub enum Mode {
    Rename,
    DryRun,
    Inspect,
}

impl Mode {
    pub fn as_str(&self) -> &str {
        match self {
            Mode::Rename => "RENAME",
            Mode::DryRun => "RENAME (DRY RUN)",
            Mode::Inspect => "INSPECT",
        }
    }
}

/// Colors of one theme: a base terminal color plus 256-color shades for
/// warnings, errors and successes.
struct Palette {
    name: &'static str,
    base: Color,
    warning: u8,
    error: u8,
    success: u8,
}

impl Palette {
    fn for_theme(theme: &str) -> Self {
        let (name, base, warning, error, success) = match theme {
            "cyan" => ("cyan", Color::Cyan, 51, 87, 123),
            "magenta" => ("magenta", Color::Magenta, 201, 126, 213),
            "yellow" => ("yellow", Color::Yellow, 226, 178, 227),
            "green" => ("green", Color::Green, 46, 28, 120),
            "red" => ("red", Color::Red, 196, 124, 210),
            "blue" => ("blue", Color::Blue, 39, 25, 117),
            // "default" and "white"
            _ => ("white", Color::White, 255, 250, 255),
        };
        Self {
            name,
            base,
            warning,
            error,
            success,
        }
    }

    fn accent(&self) -> Style {
        Style::new().fg(self.base)
    }

    /// Color suffix for indicatif templates, e.g. `.cyan`
    fn spinner_color(&self) -> String {
        format!(".{}", self.name)
    }
}

pub struct UI {
    pub term: Term,
    pub color_theme: String,
}

impl UI {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
            color_theme: "default".to_string(),
        }
    }

    pub fn with_color_theme(mut self, theme: String) -> Self {
        self.color_theme = theme;
        self
    }

    fn palette(&self) -> Palette {
        Palette::for_theme(&self.color_theme)
    }

    /// Print the mode header and an optional message below it
    pub fn print_header(&self, mode: &Mode, message: &str) -> io::Result<()> {
        let style = self.palette().accent();
        let white_bold = Style::new().white().bold();

        self.term.write_line(&white_bold.apply_to("=".repeat(70)).to_string())?;
        self.term.write_line(&format!(
            "{} {}",
            style.apply_to("MODE:").bold(),
            white_bold.apply_to(mode.as_str()).italic()
        ))?;
        self.term.write_line(&white_bold.apply_to("=".repeat(70)).to_string())?;

        if !message.is_empty() {
            self.term.write_line("")?;
            self.term.write_line(&white_bold.apply_to(message).to_string())?;
        }

        Ok(())
    }

    /// Print a section line naming the file being processed
    pub fn print_file(&self, name: &str) -> io::Result<()> {
        let style = self.palette().accent();
        self.term.write_line("")?;
        self.term
            .write_line(&format!("{} {}", style.apply_to("---").bold(), name))
    }

    /// Create a spinner for work of unknown length
    pub fn create_spinner(&self, message: &str) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        let spinner_color = self.palette().spinner_color();
        if let Ok(style) = ProgressStyle::default_spinner()
            .template(&format!("{{spinner:{}}} {{msg}}", spinner_color))
        {
            pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
        }
        pb.set_message(message.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }

    /// Print an info message
    pub fn print_info(&self, message: &str) -> io::Result<()> {
        let info_style = self.palette().accent();
        self.status_line(info_style.apply_to("[*]").bold().to_string(), message)
    }

    /// Print an error message
    pub fn print_error(&self, message: &str) -> io::Result<()> {
        let error_style = Style::new().color256(self.palette().error);
        self.status_line(
            error_style.apply_to("[!] ERROR:").bold().to_string(),
            message,
        )
    }

    /// Print a success message
    pub fn print_success(&self, message: &str) -> io::Result<()> {
        let success_style = Style::new().color256(self.palette().success);
        self.status_line(success_style.apply_to("[✓]").bold().to_string(), message)
    }

    /// Print a warning message
    pub fn print_warning(&self, message: &str) -> io::Result<()> {
        let warning_style = Style::new().color256(self.palette().warning);
        self.status_line(
            warning_style.apply_to("[!] WARNING:").bold().to_string(),
            message,
        )
    }

    fn status_line(&self, prefix: String, message: &str) -> io::Result<()> {
        let white_bold = Style::new().white().bold();
        self.term
            .write_line(&format!("  {} {}", prefix, white_bold.apply_to(message)))
    }
}

impl Default for UI {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_labels() {
        assert_eq!(Mode::Rename.as_str(), "RENAME");
        assert_eq!(Mode::DryRun.as_str(), "RENAME (DRY RUN)");
        assert_eq!(Mode::Inspect.as_str(), "INSPECT");
    }

    #[test]
    fn test_with_color_theme() {
        let ui = UI::new().with_color_theme("magenta".to_string());
        assert_eq!(ui.color_theme, "magenta");
        assert_eq!(ui.palette().spinner_color(), ".magenta");
    }

    #[test]
    fn test_palette_shades() {
        let red = Palette::for_theme("red");
        assert_eq!((red.warning, red.error, red.success), (196, 124, 210));

        let default = Palette::for_theme("default");
        assert_eq!(default.name, "white");
        assert_eq!(default.error, 250);
    }

    #[test]
    fn test_unknown_theme_falls_back() {
        let ui = UI::new().with_color_theme("plaid".to_string());
        assert_eq!(ui.palette().spinner_color(), ".white");
    }
}
