//! Tests for CLI parsing and default behaviours.

use super::*;
use rstest::rstest;

fn check_args(cli: Cli) -> CheckArgs {
    match cli.command {
        Command::Check(args) => args,
        Command::Rules(_) => panic!("expected Check command"),
    }
}

#[test]
fn check_parses_defaults() {
    let cli = Cli::parse_from(["nomenclator", "check", "--manifest", "assets.toml"]);
    assert_eq!(cli.verbosity, 0);
    assert!(!cli.quiet);

    let args = check_args(cli);
    assert_eq!(args.manifest, Utf8PathBuf::from("assets.toml"));
    assert!(args.config.is_none());
    assert_eq!(args.root, DEFAULT_ROOT);
    assert!(args.asset.is_empty());
    assert!(!args.no_validators);
    assert!(!args.json);
}

#[test]
fn check_requires_a_manifest() {
    let outcome = Cli::try_parse_from(["nomenclator", "check"]);
    assert!(outcome.is_err());
}

#[test]
fn check_parses_repeated_assets() {
    let args = check_args(Cli::parse_from([
        "nomenclator",
        "check",
        "-m",
        "assets.toml",
        "-a",
        "/Game/Props/M_Rock.M_Rock",
        "-a",
        "/Game/Props/T_Rock.T_Rock",
    ]));
    assert_eq!(args.asset.len(), 2);
}

#[test]
fn check_parses_root_and_config() {
    let args = check_args(Cli::parse_from([
        "nomenclator",
        "check",
        "-m",
        "assets.toml",
        "--root",
        "/MyPlugin",
        "--config",
        "nomenclator.toml",
    ]));
    assert_eq!(args.root, "/MyPlugin");
    assert_eq!(args.config, Some(Utf8PathBuf::from("nomenclator.toml")));
}

#[test]
fn rules_parses_json_flag() {
    let cli = Cli::parse_from(["nomenclator", "rules", "--json"]);
    match cli.command {
        Command::Rules(args) => {
            assert!(args.json);
            assert!(args.manifest.is_none());
        }
        Command::Check(_) => panic!("expected Rules command"),
    }
}

#[rstest]
#[case::short_flags(&["nomenclator", "-vv", "rules"], 2)]
#[case::after_subcommand(&["nomenclator", "rules", "-v"], 1)]
#[case::long_flag(&["nomenclator", "--verbose", "rules"], 1)]
fn verbosity_is_global(#[case] argv: &[&str], #[case] expected: u8) {
    let cli = Cli::parse_from(argv);
    assert_eq!(cli.verbosity, expected);
}

#[test]
fn verbose_and_quiet_conflict() {
    let outcome = Cli::try_parse_from(["nomenclator", "-v", "-q", "rules"]);
    assert!(outcome.is_err());
}
