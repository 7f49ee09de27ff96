//! Roster - Entry Point

use clap::Parser;
use roster::state::OutOfRangePolicy;
use roster::view::RunOptions;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use tracing::info;

/// Roster - page through and search a student directory in the terminal
#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(version)]
#[command(about = "Paginated, searchable terminal viewer for student directory records")]
pub struct Args {
    /// JSON array or JSON Lines file of records (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Records per page
    #[arg(short, long)]
    pub page_size: Option<NonZeroUsize>,

    /// Start with this filter applied
    #[arg(short, long)]
    pub search: Option<String>,

    /// Quiet period in milliseconds before a typed query is applied
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub debounce_ms: Option<u64>,

    /// What selecting a page past the end does
    #[arg(long, value_parser = ["clamp", "empty"])]
    pub page_policy: Option<String>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let policy_override = args
        .page_policy
        .as_deref()
        .map(str::parse::<OutOfRangePolicy>)
        .transpose()?;

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = roster::config::load_config_with_precedence(args.config.clone())?;
        let merged = roster::config::merge_config(config_file);
        let with_env = roster::config::apply_env_overrides(merged);
        roster::config::apply_cli_overrides(
            with_env,
            args.page_size,
            args.debounce_ms,
            policy_override,
        )
    };

    roster::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let input_source = roster::source::detect_input_source(args.file.clone())?;

    let options = RunOptions {
        initial_search: args.search.clone(),
        no_color: args.no_color,
    };
    roster::view::run_with_source(input_source, &config, options)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_help_does_not_error() {
        let result = Args::try_parse_from(["roster", "--help"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let result = Args::try_parse_from(["roster", "--version"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_no_args_defaults() {
        let args = Args::parse_from(["roster"]);
        assert_eq!(args.file, None);
        assert_eq!(args.page_size, None);
        assert_eq!(args.search, None);
        assert_eq!(args.debounce_ms, None);
        assert_eq!(args.page_policy, None);
        assert!(!args.no_color);
        assert_eq!(args.config, None);
    }

    #[test]
    fn test_file_path_populates_file_field() {
        let args = Args::parse_from(["roster", "students.json"]);
        assert_eq!(args.file, Some(PathBuf::from("students.json")));
    }

    #[test]
    fn test_page_size_short_and_long() {
        let args = Args::parse_from(["roster", "-p", "25"]);
        assert_eq!(args.page_size, NonZeroUsize::new(25));
        let args = Args::parse_from(["roster", "--page-size", "5"]);
        assert_eq!(args.page_size, NonZeroUsize::new(5));
    }

    #[test]
    fn test_page_size_rejects_zero() {
        let err = Args::try_parse_from(["roster", "--page-size", "0"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_page_size_rejects_negative() {
        assert!(Args::try_parse_from(["roster", "--page-size", "-3"]).is_err());
    }

    #[test]
    fn test_search_flag() {
        let args = Args::parse_from(["roster", "-s", "hopper"]);
        assert_eq!(args.search, Some("hopper".to_string()));
    }

    #[test]
    fn test_debounce_ms() {
        let args = Args::parse_from(["roster", "--debounce-ms", "250"]);
        assert_eq!(args.debounce_ms, Some(250));
    }

    #[test]
    fn test_debounce_ms_rejects_zero() {
        let err = Args::try_parse_from(["roster", "--debounce-ms", "0"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_page_policy_values() {
        let args = Args::parse_from(["roster", "--page-policy", "empty"]);
        assert_eq!(args.page_policy.as_deref(), Some("empty"));
        let args = Args::parse_from(["roster", "--page-policy", "clamp"]);
        assert_eq!(args.page_policy.as_deref(), Some("clamp"));
    }

    #[test]
    fn test_page_policy_invalid_rejects() {
        let err = Args::try_parse_from(["roster", "--page-policy", "wrap"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }

    #[test]
    fn test_combined_flags() {
        let args = Args::parse_from([
            "roster",
            "students.jsonl",
            "-p",
            "20",
            "-s",
            "ada",
            "--no-color",
            "--config",
            "/custom/config.toml",
        ]);
        assert_eq!(args.file, Some(PathBuf::from("students.jsonl")));
        assert_eq!(args.page_size, NonZeroUsize::new(20));
        assert_eq!(args.search, Some("ada".to_string()));
        assert!(args.no_color);
        assert_eq!(args.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_page_size_flows_through_config_precedence_chain() {
        use roster::config::{apply_cli_overrides, apply_env_overrides, merge_config, ConfigFile};

        let config_file = ConfigFile {
            page_size: Some(15),
            ..ConfigFile::default()
        };

        let merged = merge_config(Some(config_file));
        assert_eq!(merged.page_size.get(), 15, "Config file should override default");

        // ROSTER_PAGE_SIZE is not set in tests
        let with_env = apply_env_overrides(merged);
        assert_eq!(with_env.page_size.get(), 15);

        let with_cli = apply_cli_overrides(with_env, NonZeroUsize::new(30), None, None);
        assert_eq!(
            with_cli.page_size.get(),
            30,
            "CLI page size should override all other sources"
        );
    }
}
