use std::path::PathBuf;

use super::*;

#[test]
fn cli_explicit_files() {
    let cli = Cli::parse_from(["format-guard", "src/a.c", "include/b.h"]);
    assert_eq!(
        cli.files,
        vec![PathBuf::from("src/a.c"), PathBuf::from("include/b.h")]
    );
    assert!(!cli.is_full_scan());
    assert!(!cli.check);
    assert!(!cli.staged);
}

#[test]
fn cli_single_dot_is_full_scan() {
    let cli = Cli::parse_from(["format-guard", "."]);
    assert!(cli.is_full_scan());
}

#[test]
fn cli_dot_with_other_files_is_explicit() {
    let cli = Cli::parse_from(["format-guard", ".", "src/a.c"]);
    assert!(!cli.is_full_scan());
}

#[test]
fn cli_dot_slash_is_not_the_sentinel() {
    let cli = Cli::parse_from(["format-guard", "./"]);
    assert!(!cli.is_full_scan());
}

#[test]
fn cli_requires_files() {
    assert!(Cli::try_parse_from(["format-guard"]).is_err());
}

#[test]
fn cli_staged_without_files() {
    let cli = Cli::parse_from(["format-guard", "--staged"]);
    assert!(cli.staged);
    assert!(cli.files.is_empty());
    assert!(!cli.is_full_scan());
}

#[test]
fn cli_staged_conflicts_with_files() {
    assert!(Cli::try_parse_from(["format-guard", "--staged", "a.c"]).is_err());
}

#[test]
fn cli_config_options() {
    let cli = Cli::parse_from([
        "format-guard",
        "--config",
        "ci.toml",
        "--whitelist",
        "tools/whitelist.txt",
        "a.c",
    ]);
    assert_eq!(cli.config, Some(PathBuf::from("ci.toml")));
    assert_eq!(cli.whitelist, Some(PathBuf::from("tools/whitelist.txt")));
}

#[test]
fn cli_no_config_conflicts_with_config() {
    assert!(
        Cli::try_parse_from(["format-guard", "--no-config", "-c", "x.toml", "a.c"]).is_err()
    );
}

#[test]
fn cli_verbosity_and_quiet() {
    let cli = Cli::parse_from(["format-guard", "-vv", "-q", "a.c"]);
    assert_eq!(cli.verbose, 2);
    assert!(cli.quiet);
}

#[test]
fn cli_color_choice() {
    let cli = Cli::parse_from(["format-guard", "--color", "never", "a.c"]);
    assert_eq!(cli.color, ColorChoice::Never);
    assert_eq!(ColorMode::from(cli.color), ColorMode::Never);
}

#[test]
fn cli_check_flag() {
    let cli = Cli::parse_from(["format-guard", "--check", "."]);
    assert!(cli.check);
    assert!(cli.is_full_scan());
}
