//! Encoding tests across the whole opcode table

use mathlon_spec::encoding::*;
use mathlon_spec::{encode, Fields, Opcode, ShapeClass, ValidationError};

fn op(opcode: Opcode) -> u32 {
    opcode.to_u8() as u32
}

// ============================================================================
// Documented Words
// ============================================================================

#[test]
fn test_add_word() {
    let word = encode(op(Opcode::Add), 2, 3, 4, 0).unwrap();
    assert_eq!(word, 0x110C_8000);
    assert_eq!(Fields::from_word(word), Fields::new(1, 2, 3, 4, 0));
}

#[test]
fn test_li_word() {
    assert_eq!(encode(op(Opcode::Li), 5, 0, 0, 100).unwrap(), 0xC280_0064);
}

#[test]
fn test_store_word() {
    // store R0 -> 2044
    assert_eq!(encode(op(Opcode::Store), 0, 0, 0, 2044).unwrap(), 0xE000_07FC);
}

// ============================================================================
// Roundtrip Encoding Tests (exhaustive register coverage)
// ============================================================================

#[test]
fn test_r3_roundtrip_all_registers() {
    for reg1 in 2..20 {
        for reg2 in 0..20 {
            for reg3 in 0..20 {
                let word = encode(op(Opcode::Rem), reg1, reg2, reg3, 0).unwrap();
                assert_eq!(extract_opcode(word), op(Opcode::Rem));
                assert_eq!(extract_reg1(word), reg1);
                assert_eq!(extract_reg2(word), reg2);
                assert_eq!(extract_reg3(word), reg3);
                assert_eq!(extract_addr_or_const(word), 0);
            }
        }
    }
}

#[test]
fn test_li_roundtrip_all_constants() {
    for constant in 0..=8191 {
        let word = encode(op(Opcode::Li), 19, 0, 0, constant).unwrap();
        assert_eq!(extract_reg1(word), 19);
        assert_eq!(extract_addr_or_const(word), constant);
    }
}

#[test]
fn test_mem_roundtrip_all_addresses() {
    for address in (0..2048).step_by(4) {
        for opcode in [Opcode::Load, Opcode::Store, Opcode::Cmp] {
            let word = encode(op(opcode), 2, 0, 0, address).unwrap();
            assert_eq!(Opcode::from_word(word), Some(opcode));
            assert_eq!(extract_addr_or_const(word), address);
        }
    }
}

#[test]
fn test_every_opcode_encodes_its_number() {
    for opcode in Opcode::ALL {
        // reg1 = 2 and address 0 are legal for every shape
        let word = encode(op(opcode), 2, 0, 0, 0).unwrap();
        assert_eq!(word >> 28, op(opcode));
    }
}

// ============================================================================
// Rejection
// ============================================================================

#[test]
fn test_undefined_opcodes_rejected() {
    for opcode in 15..64 {
        assert_eq!(
            encode(opcode, 2, 0, 0, 0),
            Err(ValidationError::InvalidOpcode(opcode))
        );
    }
}

#[test]
fn test_misaligned_addresses_rejected() {
    for address in [1, 2, 3, 2045, 2046, 2047] {
        for opcode in [Opcode::Cmp, Opcode::Load, Opcode::Store] {
            assert!(encode(op(opcode), 2, 0, 0, address).is_err());
        }
    }
}

#[test]
fn test_addresses_past_memory_rejected() {
    for opcode in Opcode::ALL {
        if opcode.shape().operand.is_none() || opcode.class() == ShapeClass::RI {
            continue;
        }
        assert!(encode(op(opcode), 2, 0, 0, 2048).is_err());
        assert!(encode(op(opcode), 2, 0, 0, 4096).is_err());
    }
}

// ============================================================================
// Constants Verification
// ============================================================================

#[test]
fn test_encoding_constants() {
    assert_eq!(OPCODE_SHIFT, 28);
    assert_eq!(REG1_SHIFT, 23);
    assert_eq!(REG2_SHIFT, 18);
    assert_eq!(REG3_SHIFT, 13);
    assert_eq!(ADDR_SHIFT, 0);

    assert_eq!(OPCODE_MASK, 0xF);
    assert_eq!(REGISTER_MASK, 0x1F);
    assert_eq!(ADDR_MASK, 0x1FFF);
}

#[test]
fn test_fields_cover_word_without_overlap() {
    let masks = [
        OPCODE_MASK << OPCODE_SHIFT,
        REGISTER_MASK << REG1_SHIFT,
        REGISTER_MASK << REG2_SHIFT,
        REGISTER_MASK << REG3_SHIFT,
        ADDR_MASK << ADDR_SHIFT,
    ];
    let mut seen = 0u32;
    for mask in masks {
        assert_eq!(seen & mask, 0);
        seen |= mask;
    }
    assert_eq!(seen, u32::MAX);
}
