//! Tests for delete and remove-owner subcommands.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_delete() {
    match parse(&[
        "lpa",
        "delete",
        "http://localhost:8001/-/live-permissions/users",
        "42",
        "--csrftoken",
        "abc",
    ]) {
        CliCommand::Delete {
            page_url,
            id,
            csrftoken,
            prefix,
        } => {
            assert_eq!(page_url, "http://localhost:8001/-/live-permissions/users");
            assert_eq!(id, "42");
            assert_eq!(csrftoken.as_deref(), Some("abc"));
            assert!(prefix.is_none());
        }
        _ => panic!("expected Delete"),
    }
}

#[test]
fn cli_parse_delete_with_prefix() {
    match parse(&[
        "lpa",
        "delete",
        "http://h/x/-/live-permissions/groups",
        "3",
        "--prefix",
        "/x",
    ]) {
        CliCommand::Delete {
            csrftoken, prefix, ..
        } => {
            assert!(csrftoken.is_none());
            assert_eq!(prefix.as_deref(), Some("/x"));
        }
        _ => panic!("expected Delete with --prefix"),
    }
}

#[test]
fn cli_parse_remove_owner() {
    match parse(&[
        "lpa",
        "remove-owner",
        "http://h/-/live-permissions/db/manage/mydb",
        "9",
        "--csrftoken",
        "t",
    ]) {
        CliCommand::RemoveOwner {
            page_url,
            user_id,
            csrftoken,
            ..
        } => {
            assert_eq!(page_url, "http://h/-/live-permissions/db/manage/mydb");
            assert_eq!(user_id, "9");
            assert_eq!(csrftoken.as_deref(), Some("t"));
        }
        _ => panic!("expected RemoveOwner"),
    }
}

#[test]
fn cli_delete_requires_id() {
    assert!(Cli::try_parse_from(["lpa", "delete", "http://h/-/live-permissions/users"]).is_err());
}
