//! Integration tests for mikrotik-config-tools
//!
//! These tests drive the public API the way the command line does.

use clap::Parser;
use mikrotik_config_tools::cli::{Cli, Command};
use mikrotik_config_tools::dhcp_options::{encode_address, encode_routes};
use mikrotik_config_tools::hosts::OutputType;
use mikrotik_config_tools::{encode, host_commands, run, Error};
use std::path::Path;

#[test]
fn test_encode_unifi_43_from_args() {
    let cli = Cli::parse_from(["mikrotik-config-tools", "encode", "unifi_43", "192.168.0.1"]);
    let Command::Encode(command) = cli.command else {
        panic!("expected encode command");
    };
    assert_eq!(encode(&command).unwrap(), "0x0104C0A80001");
}

#[test]
fn test_encode_classless_routes_from_args() {
    let cli = Cli::parse_from([
        "mikrotik-config-tools",
        "encode",
        "classless_routes",
        "0.0.0.0/0 192.168.0.1",
        "192.168.0.0/24 192.168.0.1",
    ]);
    let Command::Encode(command) = cli.command else {
        panic!("expected encode command");
    };
    assert_eq!(encode(&command).unwrap(), "0x00C0A8000118C0A800C0A80001");
}

#[test]
fn test_encode_errors() {
    assert!(matches!(
        encode_address("999.1.1.1"),
        Err(Error::InvalidAddress(_))
    ));
    assert!(matches!(
        encode_routes(&["bad spec", "10.0.0.0/8 192.168.0.1"]),
        Err(Error::InvalidRouteSpec(_))
    ));
}

#[test]
fn test_route_blocks_sized_by_prefix() {
    let value = encode_routes(&["10.0.0.0/8 192.168.0.1", "192.168.1.0/24 192.168.0.1"])
        .expect("valid routes");
    let payload = value.strip_prefix("0x0").unwrap();

    // "8" + 1 network byte + gateway, then "18" + 3 network bytes + gateway
    let (first, second) = payload.split_at(1 + 2 + 8);
    assert_eq!(first, "80AC0A80001");
    assert_eq!(second, "18C0A801C0A80001");
}

#[test]
fn test_hosts_dns_from_file() {
    let lines = host_commands(
        Path::new("src/tests/test_data/hosts_definition_01.csv"),
        OutputType::Dns,
    )
    .expect("Failed to render hosts");

    assert_eq!(
        lines,
        vec![
            "/ip dns static",
            "add address=192.168.88.1 name=gateway.home.lan",
            "add address=192.168.88.10 name=nas.home.lan",
            "add address=192.168.88.20 name=printer.home.lan",
            "add address=192.168.88.5 name=unifi-controller.home.lan",
        ]
    );
}

#[test]
fn test_hosts_dhcp_from_file() {
    let lines = host_commands(
        Path::new("src/tests/test_data/hosts_definition_01.csv"),
        OutputType::Dhcp,
    )
    .expect("Failed to render hosts");

    assert_eq!(
        lines,
        vec![
            "/ip dhcp-server lease",
            "add address=192.168.88.10 mac-address=00:11:32:AA:BB:CC comment=nas.home.lan",
            "add address=192.168.88.20 mac-address=3C:2A:F4:01:02:03 comment=printer.home.lan",
            "add address=192.168.88.5 mac-address=B8:27:EB:12:34:56 comment=unifi-controller.home.lan",
        ]
    );
}

#[tokio::test]
async fn test_run_fails_on_bad_address() {
    let cli = Cli::parse_from(["mikrotik-config-tools", "encode", "unifi_43", "999.1.1.1"]);
    assert!(matches!(run(cli).await, Err(Error::InvalidAddress(_))));
}

#[tokio::test]
async fn test_run_fails_on_bad_route_batch() {
    let cli = Cli::parse_from([
        "mikrotik-config-tools",
        "encode",
        "classless_routes",
        "0.0.0.0/0 192.168.0.1",
        "bad spec",
    ]);
    assert!(matches!(run(cli).await, Err(Error::InvalidRouteSpec(_))));
}
