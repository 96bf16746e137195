//! Signal map integration tests.
//!
//! Covers the public lookup contract: known addresses, per-class
//! uniqueness, round trips, cross-class overlap and lookup misses.

use iomate_common::consts::{AI_COUNT, AO_COUNT, DI_COUNT, DO_COUNT};
use iomate_common::io::board::{user_ai, user_ao, user_di, user_do};
use iomate_common::io::{
    SignalClass, UnknownSignalError, all_signals, list_signals, lookup_address, lookup_name,
    lookup_signal_by_address, resolve,
};
use std::collections::HashSet;

// ─── Known values ───────────────────────────────────────────────────

#[test]
fn test_digital_endpoints() {
    assert_eq!(lookup_address(SignalClass::Di, "U_DI_00").unwrap(), 0x24);
    assert_eq!(lookup_address(SignalClass::Di, "U_DI_17").unwrap(), 0x33);
    assert_eq!(lookup_address(SignalClass::Do, "U_DO_00").unwrap(), 0x20);
    assert_eq!(lookup_address(SignalClass::Do, "U_DO_17").unwrap(), 0x2F);
}

#[test]
fn test_analog_endpoints() {
    assert_eq!(lookup_address(SignalClass::Ai, "VI0").unwrap(), 0x00);
    assert_eq!(lookup_address(SignalClass::Ai, "VI3").unwrap(), 0x03);
    assert_eq!(lookup_address(SignalClass::Ao, "VO0").unwrap(), 0x00);
    assert_eq!(lookup_address(SignalClass::Ao, "VO3").unwrap(), 0x03);
}

#[test]
fn test_named_constants() {
    assert_eq!(user_di::U_DI_13.address, 0x2F);
    assert_eq!(user_do::U_DO_13.address, 0x2B);
    assert_eq!(user_ai::VI1.name, "VI1");
    assert_eq!(user_ao::VO2.class, SignalClass::Ao);
}

// ─── Ordering ───────────────────────────────────────────────────────

#[test]
fn test_di_list_order() {
    let names: Vec<&str> = list_signals(SignalClass::Di).iter().map(|d| d.name).collect();
    assert_eq!(
        names,
        [
            "U_DI_00", "U_DI_01", "U_DI_02", "U_DI_03", "U_DI_04", "U_DI_05", "U_DI_06",
            "U_DI_07", "U_DI_10", "U_DI_11", "U_DI_12", "U_DI_13", "U_DI_14", "U_DI_15",
            "U_DI_16", "U_DI_17",
        ]
    );
}

#[test]
fn test_class_sizes_match_consts() {
    assert_eq!(list_signals(SignalClass::Di).len(), DI_COUNT);
    assert_eq!(list_signals(SignalClass::Do).len(), DO_COUNT);
    assert_eq!(list_signals(SignalClass::Ai).len(), AI_COUNT);
    assert_eq!(list_signals(SignalClass::Ao).len(), AO_COUNT);
}

#[test]
fn test_all_signals_follows_class_order() {
    let classes: Vec<SignalClass> = all_signals().map(|d| d.class).collect();
    let mut sorted = classes.clone();
    sorted.sort();
    assert_eq!(classes, sorted);
    assert_eq!(classes.first(), Some(&SignalClass::Di));
    assert_eq!(classes.last(), Some(&SignalClass::Ao));
}

// ─── Invariants ─────────────────────────────────────────────────────

#[test]
fn test_unique_names_and_addresses_per_class() {
    for class in SignalClass::ALL {
        let defs = list_signals(class);
        let names: HashSet<_> = defs.iter().map(|d| d.name).collect();
        let addrs: HashSet<_> = defs.iter().map(|d| d.address).collect();
        assert_eq!(names.len(), defs.len(), "duplicate name in {class}");
        assert_eq!(addrs.len(), defs.len(), "duplicate address in {class}");
        assert!(defs.iter().all(|d| d.class == class));
    }
}

#[test]
fn test_names_unique_across_board() {
    let names: HashSet<_> = all_signals().map(|d| d.name).collect();
    assert_eq!(names.len(), all_signals().count());
}

#[test]
fn test_roundtrip_name_address_name() {
    for class in SignalClass::ALL {
        for def in list_signals(class) {
            let addr = lookup_address(class, def.name).unwrap();
            let name = lookup_name(class, addr).unwrap();
            assert_eq!(name, def.name);
            assert_eq!(lookup_address(class, name).unwrap(), addr);
        }
    }
}

#[test]
fn test_resolve_finds_every_signal() {
    for def in all_signals() {
        assert_eq!(resolve(def.name).unwrap(), def);
    }
}

#[test]
fn test_cross_class_overlap_preserved() {
    assert_eq!(lookup_name(SignalClass::Di, 0x24).unwrap(), "U_DI_00");
    assert_eq!(lookup_name(SignalClass::Do, 0x24).unwrap(), "U_DO_04");
    assert_eq!(lookup_name(SignalClass::Di, 0x2F).unwrap(), "U_DI_13");
    assert_eq!(lookup_name(SignalClass::Do, 0x2F).unwrap(), "U_DO_17");
    assert_eq!(lookup_name(SignalClass::Ai, 0x01).unwrap(), "VI1");
    assert_eq!(lookup_name(SignalClass::Ao, 0x01).unwrap(), "VO1");
}

// ─── Misses ─────────────────────────────────────────────────────────

#[test]
fn test_unknown_name() {
    let err = lookup_address(SignalClass::Di, "nonexistent").unwrap_err();
    assert!(matches!(
        err,
        UnknownSignalError::Name { class: SignalClass::Di, ref name } if name == "nonexistent"
    ));
    assert_eq!(err.to_string(), "unknown di signal name \"nonexistent\"");
}

#[test]
fn test_unknown_address() {
    // Gap below the DI bank and past the DO bank.
    assert!(matches!(
        lookup_name(SignalClass::Di, 0x20),
        Err(UnknownSignalError::Address { class: SignalClass::Di, address: 0x20 })
    ));
    assert!(lookup_signal_by_address(SignalClass::Do, 0x33).is_err());
    assert!(lookup_name(SignalClass::Ao, 0x04).is_err());
}

#[test]
fn test_concurrent_reads() {
    let handles: Vec<_> = SignalClass::ALL
        .into_iter()
        .map(|class| {
            std::thread::spawn(move || {
                list_signals(class)
                    .iter()
                    .map(|d| lookup_address(class, d.name).unwrap() as u32)
                    .sum::<u32>()
            })
        })
        .collect();
    let sums: Vec<u32> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    // DI 0x24..=0x33, DO 0x20..=0x2F, AI/AO 0..=3.
    assert_eq!(sums, [(0x24..=0x33).sum::<u32>(), (0x20..=0x2F).sum(), 6, 6]);
}
