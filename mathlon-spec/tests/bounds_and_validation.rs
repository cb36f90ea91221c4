//! Register, constant and address bounds for every shape class

use mathlon_spec::{
    is_valid, validate, validate_word, Config, ConfigError, Fields, Opcode, RegisterRole,
    ValidationError, MAX_BLOCK_WORDS,
};

fn fields(opcode: Opcode, reg1: u32, reg2: u32, reg3: u32, addr: u32) -> Fields {
    Fields::new(opcode.to_u8() as u32, reg1, reg2, reg3, addr)
}

// ============================================================================
// Register Bounds
// ============================================================================

#[test]
fn test_destination_opcodes_reject_reserved_registers() {
    let destinations = [
        Opcode::Add,
        Opcode::Sub,
        Opcode::Mul,
        Opcode::Div,
        Opcode::Rem,
        Opcode::And,
        Opcode::Or,
        Opcode::Inv,
        Opcode::Not,
        Opcode::Mv,
        Opcode::Li,
        Opcode::Load,
    ];

    for opcode in destinations {
        assert_eq!(opcode.shape().register_role(0), Some(RegisterRole::Destination));
        assert!(!is_valid(&fields(opcode, 0, 0, 0, 0)), "{opcode} R0");
        assert!(!is_valid(&fields(opcode, 1, 0, 0, 0)), "{opcode} R1");
        assert!(is_valid(&fields(opcode, 2, 0, 0, 0)), "{opcode} R2");
        assert!(is_valid(&fields(opcode, 19, 0, 0, 0)), "{opcode} R19");
        assert!(!is_valid(&fields(opcode, 20, 0, 0, 0)), "{opcode} R20");
    }
}

#[test]
fn test_source_reg1_opcodes_accept_reserved_registers() {
    for opcode in [Opcode::Cmp, Opcode::Store] {
        assert!(is_valid(&fields(opcode, 0, 0, 0, 0)));
        assert!(is_valid(&fields(opcode, 1, 0, 0, 0)));
        assert!(!is_valid(&fields(opcode, 20, 0, 0, 0)));
    }
}

#[test]
fn test_source_registers_upper_bound() {
    for reg in 0..32 {
        let expect = reg < 20;
        assert_eq!(is_valid(&fields(Opcode::And, 2, reg, 0, 0)), expect);
        assert_eq!(is_valid(&fields(Opcode::And, 2, 0, reg, 0)), expect);
        assert_eq!(is_valid(&fields(Opcode::Cmp, 0, 0, reg, 0)), expect);
    }
}

#[test]
fn test_unused_registers_unconstrained() {
    for reg in 0..32 {
        assert!(is_valid(&fields(Opcode::Inv, 2, 0, reg, 0)));
        assert!(is_valid(&fields(Opcode::Li, 2, reg, reg, 0)));
        assert!(is_valid(&fields(Opcode::Store, 0, reg, reg, 0)));
        assert!(is_valid(&fields(Opcode::Halt, reg, reg, reg, 0)));
    }
}

// ============================================================================
// Operand Bounds
// ============================================================================

#[test]
fn test_cmp_address_boundaries() {
    assert!(is_valid(&fields(Opcode::Cmp, 0, 0, 0, 2044)));
    assert!(!is_valid(&fields(Opcode::Cmp, 0, 0, 0, 2046)));
}

#[test]
fn test_unused_operand_unconstrained() {
    for value in [0, 1, 2046, 8191] {
        assert!(is_valid(&fields(Opcode::Div, 2, 3, 4, value)));
        assert!(is_valid(&fields(Opcode::Mv, 2, 3, 0, value)));
    }
}

#[test]
fn test_validate_word_reports_opcode() {
    assert_eq!(validate_word(0xC280_0064), Ok(Opcode::Li));
    assert_eq!(validate_word(0xF000_0000), Err(ValidationError::InvalidOpcode(15)));
}

#[test]
fn test_error_carries_slot_and_bounds() {
    let err = validate(&fields(Opcode::Mv, 2, 25, 0, 0)).unwrap_err();
    assert_eq!(
        err,
        ValidationError::RegisterOutOfRange {
            opcode: Opcode::Mv,
            slot: 2,
            value: 25,
            min: 0,
            max: 19,
        }
    );
    assert_eq!(err.to_string(), "Register field 2 of mv is R25, expected R0-R19");
}

#[test]
fn test_address_error_messages() {
    let err = validate(&fields(Opcode::Load, 2, 0, 0, 6)).unwrap_err();
    assert_eq!(err.to_string(), "Address 6 for load is not aligned to 4 bytes");

    let err = validate(&fields(Opcode::Store, 2, 0, 0, 4000)).unwrap_err();
    assert_eq!(err.to_string(), "Address 4000 out of range [0, 2047] for store");
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_config_limits_follow_memory_size() {
    assert_eq!(MAX_BLOCK_WORDS, 512);
    assert_eq!(Config::default().max_block_words, MAX_BLOCK_WORDS);
    assert_eq!(Config::new(0), Err(ConfigError::ZeroBlockWords));
    assert!(Config::new(MAX_BLOCK_WORDS + 1).is_err());
}
