//! User I/O board map.
//!
//! Channel names and register offsets of the interface board's user
//! connector. Digital channels are numbered in two octal-style banks
//! (00–07, 10–17); analog channels are voltage inputs/outputs 0–3.
//!
//! Address ranges overlap between classes (DI 0x24–0x33 vs DO 0x20–0x2F,
//! AI and AO both 0x00–0x03). Each class is its own register bank, so an
//! address must always travel with its [`SignalClass`].

use static_assertions::const_assert;

use super::class::SignalClass;
use super::signal::SignalDefinition;
use crate::consts::{AI_COUNT, AO_COUNT, DI_COUNT, DO_COUNT};

// ─── Named channels ─────────────────────────────────────────────────

/// User digital inputs, `U_DI_00`..`U_DI_17`.
pub mod user_di {
    use super::*;

    pub const U_DI_00: SignalDefinition = SignalDefinition::new(SignalClass::Di, "U_DI_00", 0x24);
    pub const U_DI_01: SignalDefinition = SignalDefinition::new(SignalClass::Di, "U_DI_01", 0x25);
    pub const U_DI_02: SignalDefinition = SignalDefinition::new(SignalClass::Di, "U_DI_02", 0x26);
    pub const U_DI_03: SignalDefinition = SignalDefinition::new(SignalClass::Di, "U_DI_03", 0x27);
    pub const U_DI_04: SignalDefinition = SignalDefinition::new(SignalClass::Di, "U_DI_04", 0x28);
    pub const U_DI_05: SignalDefinition = SignalDefinition::new(SignalClass::Di, "U_DI_05", 0x29);
    pub const U_DI_06: SignalDefinition = SignalDefinition::new(SignalClass::Di, "U_DI_06", 0x2A);
    pub const U_DI_07: SignalDefinition = SignalDefinition::new(SignalClass::Di, "U_DI_07", 0x2B);
    pub const U_DI_10: SignalDefinition = SignalDefinition::new(SignalClass::Di, "U_DI_10", 0x2C);
    pub const U_DI_11: SignalDefinition = SignalDefinition::new(SignalClass::Di, "U_DI_11", 0x2D);
    pub const U_DI_12: SignalDefinition = SignalDefinition::new(SignalClass::Di, "U_DI_12", 0x2E);
    pub const U_DI_13: SignalDefinition = SignalDefinition::new(SignalClass::Di, "U_DI_13", 0x2F);
    pub const U_DI_14: SignalDefinition = SignalDefinition::new(SignalClass::Di, "U_DI_14", 0x30);
    pub const U_DI_15: SignalDefinition = SignalDefinition::new(SignalClass::Di, "U_DI_15", 0x31);
    pub const U_DI_16: SignalDefinition = SignalDefinition::new(SignalClass::Di, "U_DI_16", 0x32);
    pub const U_DI_17: SignalDefinition = SignalDefinition::new(SignalClass::Di, "U_DI_17", 0x33);
}

/// User digital outputs, `U_DO_00`..`U_DO_17`.
pub mod user_do {
    use super::*;

    pub const U_DO_00: SignalDefinition = SignalDefinition::new(SignalClass::Do, "U_DO_00", 0x20);
    pub const U_DO_01: SignalDefinition = SignalDefinition::new(SignalClass::Do, "U_DO_01", 0x21);
    pub const U_DO_02: SignalDefinition = SignalDefinition::new(SignalClass::Do, "U_DO_02", 0x22);
    pub const U_DO_03: SignalDefinition = SignalDefinition::new(SignalClass::Do, "U_DO_03", 0x23);
    pub const U_DO_04: SignalDefinition = SignalDefinition::new(SignalClass::Do, "U_DO_04", 0x24);
    pub const U_DO_05: SignalDefinition = SignalDefinition::new(SignalClass::Do, "U_DO_05", 0x25);
    pub const U_DO_06: SignalDefinition = SignalDefinition::new(SignalClass::Do, "U_DO_06", 0x26);
    pub const U_DO_07: SignalDefinition = SignalDefinition::new(SignalClass::Do, "U_DO_07", 0x27);
    pub const U_DO_10: SignalDefinition = SignalDefinition::new(SignalClass::Do, "U_DO_10", 0x28);
    pub const U_DO_11: SignalDefinition = SignalDefinition::new(SignalClass::Do, "U_DO_11", 0x29);
    pub const U_DO_12: SignalDefinition = SignalDefinition::new(SignalClass::Do, "U_DO_12", 0x2A);
    pub const U_DO_13: SignalDefinition = SignalDefinition::new(SignalClass::Do, "U_DO_13", 0x2B);
    pub const U_DO_14: SignalDefinition = SignalDefinition::new(SignalClass::Do, "U_DO_14", 0x2C);
    pub const U_DO_15: SignalDefinition = SignalDefinition::new(SignalClass::Do, "U_DO_15", 0x2D);
    pub const U_DO_16: SignalDefinition = SignalDefinition::new(SignalClass::Do, "U_DO_16", 0x2E);
    pub const U_DO_17: SignalDefinition = SignalDefinition::new(SignalClass::Do, "U_DO_17", 0x2F);
}

/// User analog inputs (voltage), `VI0`..`VI3`.
pub mod user_ai {
    use super::*;

    pub const VI0: SignalDefinition = SignalDefinition::new(SignalClass::Ai, "VI0", 0x00);
    pub const VI1: SignalDefinition = SignalDefinition::new(SignalClass::Ai, "VI1", 0x01);
    pub const VI2: SignalDefinition = SignalDefinition::new(SignalClass::Ai, "VI2", 0x02);
    pub const VI3: SignalDefinition = SignalDefinition::new(SignalClass::Ai, "VI3", 0x03);
}

/// User analog outputs (voltage), `VO0`..`VO3`.
pub mod user_ao {
    use super::*;

    pub const VO0: SignalDefinition = SignalDefinition::new(SignalClass::Ao, "VO0", 0x00);
    pub const VO1: SignalDefinition = SignalDefinition::new(SignalClass::Ao, "VO1", 0x01);
    pub const VO2: SignalDefinition = SignalDefinition::new(SignalClass::Ao, "VO2", 0x02);
    pub const VO3: SignalDefinition = SignalDefinition::new(SignalClass::Ao, "VO3", 0x03);
}

// ─── Class tables (physical channel order) ──────────────────────────

const DI_TABLE: [SignalDefinition; DI_COUNT] = [
    user_di::U_DI_00,
    user_di::U_DI_01,
    user_di::U_DI_02,
    user_di::U_DI_03,
    user_di::U_DI_04,
    user_di::U_DI_05,
    user_di::U_DI_06,
    user_di::U_DI_07,
    user_di::U_DI_10,
    user_di::U_DI_11,
    user_di::U_DI_12,
    user_di::U_DI_13,
    user_di::U_DI_14,
    user_di::U_DI_15,
    user_di::U_DI_16,
    user_di::U_DI_17,
];

const DO_TABLE: [SignalDefinition; DO_COUNT] = [
    user_do::U_DO_00,
    user_do::U_DO_01,
    user_do::U_DO_02,
    user_do::U_DO_03,
    user_do::U_DO_04,
    user_do::U_DO_05,
    user_do::U_DO_06,
    user_do::U_DO_07,
    user_do::U_DO_10,
    user_do::U_DO_11,
    user_do::U_DO_12,
    user_do::U_DO_13,
    user_do::U_DO_14,
    user_do::U_DO_15,
    user_do::U_DO_16,
    user_do::U_DO_17,
];

const AI_TABLE: [SignalDefinition; AI_COUNT] = [
    user_ai::VI0,
    user_ai::VI1,
    user_ai::VI2,
    user_ai::VI3,
];

const AO_TABLE: [SignalDefinition; AO_COUNT] = [
    user_ao::VO0,
    user_ao::VO1,
    user_ao::VO2,
    user_ao::VO3,
];

pub static USER_DI: [SignalDefinition; DI_COUNT] = DI_TABLE;
pub static USER_DO: [SignalDefinition; DO_COUNT] = DO_TABLE;
pub static USER_AI: [SignalDefinition; AI_COUNT] = AI_TABLE;
pub static USER_AO: [SignalDefinition; AO_COUNT] = AO_TABLE;

// ─── Build-time checks ──────────────────────────────────────────────

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// Every entry carries `class`, and no two entries share a name or address.
const fn well_formed(table: &[SignalDefinition], class: SignalClass) -> bool {
    let mut i = 0;
    while i < table.len() {
        if table[i].class as u8 != class as u8 {
            return false;
        }
        let mut j = i + 1;
        while j < table.len() {
            if table[i].address == table[j].address || str_eq(table[i].name, table[j].name) {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

const fn names_disjoint(a: &[SignalDefinition], b: &[SignalDefinition]) -> bool {
    let mut i = 0;
    while i < a.len() {
        let mut j = 0;
        while j < b.len() {
            if str_eq(a[i].name, b[j].name) {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

const_assert!(well_formed(&DI_TABLE, SignalClass::Di));
const_assert!(well_formed(&DO_TABLE, SignalClass::Do));
const_assert!(well_formed(&AI_TABLE, SignalClass::Ai));
const_assert!(well_formed(&AO_TABLE, SignalClass::Ao));

// Unqualified `resolve()` relies on names being unique across the board.
const_assert!(names_disjoint(&DI_TABLE, &DO_TABLE));
const_assert!(names_disjoint(&DI_TABLE, &AI_TABLE));
const_assert!(names_disjoint(&DI_TABLE, &AO_TABLE));
const_assert!(names_disjoint(&DO_TABLE, &AI_TABLE));
const_assert!(names_disjoint(&DO_TABLE, &AO_TABLE));
const_assert!(names_disjoint(&AI_TABLE, &AO_TABLE));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_constants_match_table_entries() {
        assert_eq!(USER_DI[0], user_di::U_DI_00);
        assert_eq!(USER_DI[8], user_di::U_DI_10);
        assert_eq!(USER_DI[15], user_di::U_DI_17);
        assert_eq!(USER_DO[7], user_do::U_DO_07);
        assert_eq!(USER_DO[15], user_do::U_DO_17);
        assert_eq!(USER_AI[2], user_ai::VI2);
        assert_eq!(USER_AO[3], user_ao::VO3);
    }

    #[test]
    fn digital_banks_are_contiguous() {
        for (i, def) in USER_DI.iter().enumerate() {
            assert_eq!(def.address, 0x24 + i as u16, "{def}");
        }
        for (i, def) in USER_DO.iter().enumerate() {
            assert_eq!(def.address, 0x20 + i as u16, "{def}");
        }
    }

    #[test]
    fn analog_banks_start_at_zero() {
        for (i, def) in USER_AI.iter().chain(USER_AO.iter()).enumerate() {
            assert_eq!(def.address, (i % 4) as u16, "{def}");
        }
    }

    #[test]
    fn const_helpers() {
        assert!(str_eq("VI0", "VI0"));
        assert!(!str_eq("VI0", "VO0"));
        assert!(!str_eq("VI0", "VI00"));

        let dup = [user_ai::VI0, user_ai::VI0];
        assert!(!well_formed(&dup, SignalClass::Ai));
        assert!(!well_formed(&USER_AI, SignalClass::Ao));
        assert!(!names_disjoint(&USER_AI, &USER_AI));
    }
}
