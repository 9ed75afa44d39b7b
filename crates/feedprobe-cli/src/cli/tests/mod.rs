//! CLI parse tests.


use super::Cli;
use clap::Parser;
use std::path::Path;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn cli_parse_site_only() {
    let cli = parse(&["feedprobe", "www.example.tumblr.com"]);
    assert_eq!(cli.site, "www.example.tumblr.com");
    assert!(!cli.verbose);
    assert!(cli.output.is_none());
    assert!(cli.config.is_none());
    assert!(!cli.parallel);
}

#[test]
fn cli_parse_verbose_and_output() {
    let cli = parse(&["feedprobe", "-v", "-o", "out/feed.xml", "example.wordpress.com"]);
    assert!(cli.verbose);
    assert_eq!(cli.output.as_deref(), Some(Path::new("out/feed.xml")));
    assert_eq!(cli.site, "example.wordpress.com");
}

#[test]
fn cli_parse_long_flags() {
    let cli = parse(&[
        "feedprobe",
        "--verbose",
        "--output",
        "feed.xml",
        "--config",
        "/tmp/feedprobe.toml",
        "--parallel",
        "noblog.example",
    ]);
    assert!(cli.verbose);
    assert!(cli.parallel);
    assert_eq!(cli.output.as_deref(), Some(Path::new("feed.xml")));
    assert_eq!(cli.config.as_deref(), Some(Path::new("/tmp/feedprobe.toml")));
}

#[test]
fn cli_rejects_missing_site() {
    assert!(Cli::try_parse_from(["feedprobe"]).is_err());
    assert!(Cli::try_parse_from(["feedprobe", "-v"]).is_err());
}

#[test]
fn cli_rejects_extra_positional() {
    assert!(Cli::try_parse_from(["feedprobe", "a.example", "b.example"]).is_err());
}

#[test]
fn cli_rejects_output_without_value() {
    assert!(Cli::try_parse_from(["feedprobe", "example.org", "-o"]).is_err());
}

#[test]
fn cli_usage_error_exit_code() {
    let err = Cli::try_parse_from(["feedprobe", "--bogus", "example.org"]).unwrap_err();
    assert_eq!(err.exit_code(), 2);
}
