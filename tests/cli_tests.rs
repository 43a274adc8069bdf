//! Command line parsing tests

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use meteor_mayhem::cli::{Args, Visibility};
use meteor_mayhem::term::Theme;

fn parse(args: &[&str]) -> Result<Args, clap::Error> {
    Args::try_parse_from(std::iter::once("meteor-mayhem").chain(args.iter().copied()))
}

#[test]
fn test_defaults() {
    let args = parse(&[]).unwrap();
    assert!(!args.nerdfont);
    assert_eq!(args.statistics, Visibility::Visible);
}

#[test]
fn test_nerdfont_flag_selects_theme() {
    for flag in ["-n", "--nerdfont"] {
        let args = parse(&[flag]).unwrap();
        assert_eq!(args.settings().theme, Theme::nerd_font());
    }
}

#[test]
fn test_statistics_values() {
    assert_eq!(parse(&["-s"]).unwrap().statistics, Visibility::Visible);
    assert_eq!(
        parse(&["--statistics"]).unwrap().statistics,
        Visibility::Visible
    );
    assert_eq!(
        parse(&["--statistics=invisible"]).unwrap().statistics,
        Visibility::Invisible
    );
    assert_eq!(
        parse(&["-s=invisible"]).unwrap().statistics,
        Visibility::Invisible
    );
    assert_eq!(
        parse(&["-sinvisible"]).unwrap().statistics,
        Visibility::Invisible
    );
    assert_eq!(parse(&["-svisible"]).unwrap().statistics, Visibility::Visible);
    assert!(!parse(&["--statistics=invisible"])
        .unwrap()
        .settings()
        .show_statistics);
}

#[test]
fn test_bare_statistics_flag_combines_with_nerdfont() {
    let args = parse(&["-ns"]).unwrap();
    assert!(args.nerdfont);
    assert_eq!(args.statistics, Visibility::Visible);
}

#[test]
fn test_help_lists_keys() {
    let help = Args::command().render_help().to_string();
    assert!(help.contains("q quits"));
    assert!(!help.contains("Report bugs"));
}

#[test]
fn test_invalid_statistics_value_is_rejected() {
    let err = parse(&["--statistics=hidden"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidValue);
}

#[test]
fn test_positional_arguments_are_rejected() {
    let err = parse(&["extra"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownArgument);
}

#[test]
fn test_version_and_help_are_informational() {
    assert_eq!(
        parse(&["--version"]).unwrap_err().kind(),
        ErrorKind::DisplayVersion
    );
    assert_eq!(parse(&["--help"]).unwrap_err().kind(), ErrorKind::DisplayHelp);
}
