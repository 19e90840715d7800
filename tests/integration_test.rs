//! Integration tests for netcalc-bot
//!
//! These tests drive the calculator and the bot through the public API.

use netcalc_bot::bot::{render_report, Reply, Router};
use netcalc_bot::models::{calculate, format_quad, parse_quad, Mask};
use netcalc_bot::roles::RoleStore;
use netcalc_bot::CalcError;

#[test]
fn test_calculate_reference_networks() {
    let info = calculate("192.168.1.10", "255.255.255.0").expect("Failed to calculate /24");
    assert_eq!(format_quad(&info.netmask.dotted), "255.255.255.0");
    assert_eq!(format_quad(&info.wildcard), "0.0.0.255");
    assert_eq!(format_quad(&info.network), "192.168.1.0");
    assert_eq!(format_quad(&info.broadcast), "192.168.1.255");
    assert_eq!(info.hosts_quantity, 254);

    let info = calculate("10.0.0.1", "255.0.0.0").expect("Failed to calculate /8");
    assert_eq!(format_quad(&info.network), "10.0.0.0");
    assert_eq!(format_quad(&info.broadcast), "10.255.255.255");
    assert_eq!(info.hosts_quantity, 16777214);

    let info = calculate("172.16.5.5", "255.255.255.252").expect("Failed to calculate /30");
    assert_eq!(info.host_min, Some([172, 16, 5, 5]));
    assert_eq!(info.host_max, Some([172, 16, 5, 6]));
    assert_eq!(info.hosts_quantity, 2);
}

#[test]
fn test_every_prefix_length() {
    let address = parse_quad("198.51.100.123").unwrap();
    for p in 0..=32u32 {
        let mask = Mask::from_prefix_len(p).unwrap();
        let info = calculate(&format_quad(&address), &mask.to_string())
            .unwrap_or_else(|e| panic!("/{p} failed: {e}"));

        assert_eq!(info.netmask, mask);
        let network = u32::from_be_bytes(info.network);
        let broadcast = u32::from_be_bytes(info.broadcast);
        assert!(network <= u32::from_be_bytes(address));
        assert!(broadcast >= u32::from_be_bytes(address));

        match (info.host_min, info.host_max) {
            (Some(min), Some(max)) => {
                assert_eq!(u32::from_be_bytes(min), network + 1);
                assert_eq!(u32::from_be_bytes(max), broadcast - 1);
                assert_eq!(
                    info.hosts_quantity as u64,
                    (broadcast - network) as u64 - 1,
                    "host count for /{p}"
                );
            }
            (None, None) => {
                assert!(p >= 31);
                assert_eq!(info.hosts_quantity, 0);
            }
            other => panic!("inconsistent host range for /{p}: {other:?}"),
        }
    }
}

#[test]
fn test_malformed_input_is_an_error() {
    assert!(matches!(
        parse_quad("abc.1.2.3"),
        Err(CalcError::MalformedQuad { .. })
    ));
    assert!(calculate("192.168.1.1", "255.255.255.0.0").is_err());
}

#[test]
fn test_bot_session() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("roles.json");
    let roles = RoleStore::open(&path, &[1, 2]).expect("Failed to open roles");
    let router = Router::new(&roles);

    let reply = router.handle(99, "/calc 192.168.1.10/24");
    let expected = render_report(&calculate("192.168.1.10", "255.255.255.0").unwrap());
    assert_eq!(reply, Some(Reply::Text(expected)));

    assert_eq!(
        router.handle(1, "/ban 99"),
        Some(Reply::Text("User 99 is now banned!".to_string()))
    );
    assert!(matches!(router.handle(99, "/help"), Some(Reply::Error(_))));

    // the ban survives a restart
    drop(router);
    drop(roles);
    let roles = RoleStore::open(&path, &[]).expect("Failed to reopen roles");
    assert!(roles.is_banned(99));
    assert_eq!(roles.snapshot().admins, vec![1, 2]);
}
