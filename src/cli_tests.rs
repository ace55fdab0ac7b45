use std::path::PathBuf;

use clap::Parser;

use super::*;

#[test]
fn no_arguments_means_interactive_session() {
    let cli = Cli::parse_from(["bikeshare"]);
    assert!(cli.command.is_none());
    assert_eq!(cli.verbose, 0);
    assert!(!cli.quiet);
    assert!(cli.config.is_none());
    assert_eq!(cli.explore.format, ReportFormat::Text);
    assert!(cli.explore.data_dir.is_none());
}

#[test]
fn session_overrides_at_top_level() {
    let cli = Cli::parse_from([
        "bikeshare",
        "--data-dir",
        "data",
        "--sample-size",
        "3",
        "--seed",
        "99",
        "--sequential",
        "--format",
        "json",
    ]);
    assert_eq!(cli.explore.data_dir, Some(PathBuf::from("data")));
    assert_eq!(cli.explore.sample_size, Some(3));
    assert_eq!(cli.explore.seed, Some(99));
    assert!(cli.explore.sequential);
    assert_eq!(cli.explore.format, ReportFormat::Json);
}

#[test]
fn explore_subcommand_accepts_same_flags() {
    let cli = Cli::parse_from(["bikeshare", "explore", "--data-dir", "trips"]);
    match cli.command {
        Some(Commands::Explore(args)) => {
            assert_eq!(args.data_dir, Some(PathBuf::from("trips")));
        }
        _ => panic!("Expected Explore command"),
    }
}

#[test]
fn global_flags_after_subcommand() {
    let cli = Cli::parse_from(["bikeshare", "config", "show", "-vv", "--config", "my.toml"]);
    assert_eq!(cli.verbose, 2);
    assert_eq!(cli.config, Some(PathBuf::from("my.toml")));
    match cli.command {
        Some(Commands::Config(ConfigArgs {
            action: ConfigAction::Show { format },
        })) => assert_eq!(format, ConfigOutputFormat::Text),
        _ => panic!("Expected config show"),
    }
}

#[test]
fn config_show_json() {
    let cli = Cli::parse_from(["bikeshare", "config", "show", "--format", "json"]);
    assert!(matches!(
        cli.command,
        Some(Commands::Config(ConfigArgs {
            action: ConfigAction::Show {
                format: ConfigOutputFormat::Json
            }
        }))
    ));
}

#[test]
fn init_defaults_to_local_config_name() {
    let cli = Cli::parse_from(["bikeshare", "init"]);
    match cli.command {
        Some(Commands::Init(args)) => {
            assert_eq!(args.output, PathBuf::from(".bikeshare.toml"));
            assert!(!args.force);
        }
        _ => panic!("Expected Init command"),
    }
}

#[test]
fn init_with_output_and_force() {
    let cli = Cli::parse_from(["bikeshare", "init", "-o", "custom.toml", "--force"]);
    match cli.command {
        Some(Commands::Init(args)) => {
            assert_eq!(args.output, PathBuf::from("custom.toml"));
            assert!(args.force);
        }
        _ => panic!("Expected Init command"),
    }
}

#[test]
fn invalid_format_is_rejected() {
    assert!(Cli::try_parse_from(["bikeshare", "--format", "xml"]).is_err());
}

#[test]
fn color_choice_parses() {
    let cli = Cli::parse_from(["bikeshare", "--color", "never"]);
    assert!(matches!(cli.color, ColorChoice::Never));
}
