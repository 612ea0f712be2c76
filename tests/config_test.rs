use clap::{Args, Command, FromArgMatches};
use gearforge::config::Config;
use std::io::Write;
use tempfile::NamedTempFile;

fn parse(args: &[&str]) -> (Config, clap::ArgMatches) {
    let cmd = Config::augment_args(Command::new("test"));
    let matches = cmd
        .try_get_matches_from(std::iter::once("test").chain(args.iter().copied()))
        .unwrap();
    let config = Config::from_arg_matches(&matches).unwrap();
    (config, matches)
}

#[test]
fn test_cli_defaults_match_config_default() {
    let (cli, _) = parse(&[]);
    let default = Config::default();
    assert_eq!(cli.constraints, default.constraints);
    assert_eq!(cli.search.max_threads, default.search.max_threads);
    assert_eq!(cli.search.poll_interval_ms, default.search.poll_interval_ms);
    assert_eq!(cli.catalog.catalog, default.catalog.catalog);
    assert_eq!(cli.catalog.slot_count, 12);
}

#[test]
fn test_file_values_survive_unless_overridden() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "constraints": {{ "min_hit": 280, "min_stamina": 1200 }}, "search": {{ "max_threads": 4 }} }}"#
    )
    .unwrap();

    let mut config = Config::load_from_file(file.path()).unwrap();
    let (cli, matches) = parse(&["--min-hit", "310", "--threads", "2"]);
    config.merge_from_cli(&cli, &matches);

    assert_eq!(config.constraints.min_hit, 310, "explicit flag wins");
    assert_eq!(config.constraints.min_stamina, 1200, "file value kept");
    assert_eq!(config.search.max_threads, 4, "default flag does not clobber file");
    assert_eq!(config.search.threads, Some(2));
    assert_eq!(config.constraints.min_expertise, 100);
    assert!(config.validate().is_ok());
}

#[test]
fn test_unreadable_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(Config::load_from_file(dir.path().join("missing.json")).is_err());
}
