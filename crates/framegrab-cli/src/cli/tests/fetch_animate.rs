//! Tests for fetch and animate subcommands.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use std::path::Path;

#[test]
fn cli_parse_fetch() {
    match parse(&["framegrab", "fetch", "https://example.com/anim/", "out/anim"]) {
        CliCommand::Fetch {
            base_url,
            destination,
            json,
        } => {
            assert_eq!(base_url, "https://example.com/anim/");
            assert_eq!(destination, Path::new("out/anim"));
            assert!(!json);
        }
        _ => panic!("expected Fetch"),
    }
}

#[test]
fn cli_parse_fetch_json() {
    match parse(&["framegrab", "fetch", "https://x/", "d", "--json"]) {
        CliCommand::Fetch { json, .. } => assert!(json),
        _ => panic!("expected Fetch with --json"),
    }
}

#[test]
fn cli_parse_animate_defaults() {
    match parse(&["framegrab", "animate", "https://example.com/anim", "d"]) {
        CliCommand::Animate {
            base_url,
            destination,
            output,
            framerate,
            hold_last_frame,
        } => {
            assert_eq!(base_url, "https://example.com/anim");
            assert_eq!(destination, Path::new("d"));
            assert_eq!(output, "animation.mp4");
            assert_eq!(framerate, 30);
            assert_eq!(hold_last_frame, 0);
        }
        _ => panic!("expected Animate"),
    }
}

#[test]
fn cli_parse_animate_options() {
    match parse(&[
        "framegrab",
        "animate",
        "https://example.com/anim/",
        "d",
        "-o",
        "aurora.mp4",
        "--framerate",
        "60",
        "--hold-last-frame",
        "3",
    ]) {
        CliCommand::Animate {
            output,
            framerate,
            hold_last_frame,
            ..
        } => {
            assert_eq!(output, "aurora.mp4");
            assert_eq!(framerate, 60);
            assert_eq!(hold_last_frame, 3);
        }
        _ => panic!("expected Animate with options"),
    }
}

#[test]
fn cli_animate_rejects_negative_hold() {
    assert!(Cli::try_parse_from([
        "framegrab",
        "animate",
        "https://x/",
        "d",
        "--hold-last-frame",
        "-1",
    ])
    .is_err());
}

#[test]
fn cli_fetch_requires_destination() {
    assert!(Cli::try_parse_from(["framegrab", "fetch", "https://x/"]).is_err());
}
