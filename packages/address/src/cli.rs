//! Command-line interface for checking addresses.

use clap::{Parser, Subcommand, ValueEnum};
use console::style;

use crate::address::{Address, ParsedAddress};
use crate::config::{is_valid_address, FieldFailurePolicy};
use crate::error::CliError;
use crate::report::TracingReporter;

/// Address book address tool - validate and decompose free-text addresses.
#[derive(Parser)]
#[command(name = "addressbook-address")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse an address and show its parts.
    Check {
        /// Address text, e.g. "10 Ave3 #12-34 120123"
        address: String,

        /// Mark the address as private
        #[arg(short, long)]
        private: bool,

        /// Fail when a part is rejected instead of leaving it unset
        #[arg(short, long)]
        strict: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Check whether an address has the required structure.
    Validate {
        /// Address text
        address: String,
    },
}

/// Output format for `check`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

/// Run the CLI.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            address,
            private,
            strict,
            format,
        } => check_command(&address, private, strict, format),
        Commands::Validate { address } => validate_command(&address),
    }
}

/// Execute the check command.
fn check_command(
    address: &str,
    private: bool,
    strict: bool,
    format: OutputFormat,
) -> Result<(), CliError> {
    let policy = if strict {
        FieldFailurePolicy::Reject
    } else {
        FieldFailurePolicy::Tolerate
    };

    let parsed = Address::parse_with(address, private, policy, &TracingReporter)?;
    print!("{}", render(&parsed, format)?);

    Ok(())
}

/// Execute the validate command.
fn validate_command(address: &str) -> Result<(), CliError> {
    if !is_valid_address(address) {
        return Err(CliError::NotValid(address.to_string()));
    }

    println!("{} {}", style("Valid:").green().bold(), address.trim());
    Ok(())
}

/// Render a parsed address in the requested format.
///
/// # Errors
///
/// Returns a serialization error for the JSON and YAML formats.
pub fn render(parsed: &ParsedAddress, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Text => Ok(render_text(parsed)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(parsed)? + "\n"),
        OutputFormat::Yaml => Ok(serde_yaml_ng::to_string(parsed)?),
    }
}

fn render_text(parsed: &ParsedAddress) -> String {
    let address = parsed.address();
    let part = |value: Option<&str>| match value {
        Some(v) => style(v.to_string()).cyan().to_string(),
        None => style("(unset)".to_string()).dim().to_string(),
    };

    let mut lines = vec![
        format!("{} {}", style("Address:").bold(), address),
        format!("  Block: {}", part(address.block().map(|b| b.value()))),
        format!("  Street: {}", part(address.street().map(|s| s.value()))),
        format!("  Unit: {}", part(address.unit().map(|u| u.value()))),
        format!(
            "  Postal code: {}",
            part(address.postal_code().map(|p| p.value()))
        ),
        format!(
            "  Private: {}",
            if address.is_private() { "yes" } else { "no" }
        ),
    ];

    if !parsed.warnings().is_empty() {
        lines.push(format!(
            "  Warnings: {}",
            style(parsed.warnings().len()).yellow().bold()
        ));
        lines.extend(parsed.warnings().iter().map(|w| format!("    - {w}")));
    }

    lines.join("\n") + "\n"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::SilentReporter;

    fn parse(text: &str) -> ParsedAddress {
        Address::parse_with(text, false, FieldFailurePolicy::Tolerate, &SilentReporter).unwrap()
    }

    #[test]
    fn test_cli_parse_check() {
        let cli = Cli::parse_from(["addressbook-address", "check", "A B C D"]);

        let Commands::Check {
            address,
            private,
            strict,
            format,
        } = cli.command
        else {
            panic!("expected check command");
        };
        assert_eq!(address, "A B C D");
        assert!(!private);
        assert!(!strict);
        assert_eq!(format, OutputFormat::Text);
    }

    #[test]
    fn test_cli_parse_check_with_flags() {
        let cli = Cli::parse_from([
            "addressbook-address",
            "check",
            "A B C D",
            "--private",
            "--strict",
            "--format",
            "json",
        ]);

        let Commands::Check {
            private,
            strict,
            format,
            ..
        } = cli.command
        else {
            panic!("expected check command");
        };
        assert!(private);
        assert!(strict);
        assert_eq!(format, OutputFormat::Json);
    }

    #[test]
    fn test_cli_parse_validate() {
        let cli = Cli::parse_from(["addressbook-address", "validate", "A B"]);
        assert!(matches!(cli.command, Commands::Validate { address } if address == "A B"));
    }

    #[test]
    fn test_render_text_lists_parts() {
        let text = console::strip_ansi_codes(&render_text(&parse("10 Ave3 #12-34 120123")))
            .to_string();

        assert!(text.contains("Address: 10 Ave3 #12-34 120123"));
        assert!(text.contains("  Street: Ave3"));
        assert!(text.contains("  Postal code: 120123"));
        assert!(text.contains("  Private: no"));
        assert!(!text.contains("Warnings"));
    }

    #[test]
    fn test_render_text_shows_warnings() {
        let text = console::strip_ansi_codes(&render_text(&parse("10  #12-34 120123"))).to_string();

        assert!(text.contains("  Street: (unset)"));
        assert!(text.contains("  Warnings: 1"));
        assert!(text.contains("Invalid street '': token is empty"));
    }

    #[test]
    fn test_render_json() {
        let json = render(&parse("A B C D"), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["address"]["value"], "A B C D");
        assert_eq!(value["address"]["postal_code"], "D");
        assert_eq!(value["warnings"], serde_json::json!([]));
    }

    #[test]
    fn test_render_yaml() {
        let yaml = render(&parse("A B C D"), OutputFormat::Yaml).unwrap();
        assert!(yaml.contains("value: A B C D"));
        assert!(yaml.contains("is_private: false"));
    }
}
