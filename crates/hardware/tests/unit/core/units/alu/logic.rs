//! # ALU Logic Tests
//!
//! Bitwise operations and the signed/unsigned set-less-than pair.

use rv32sim_core::core::units::alu::Alu;
use rv32sim_core::isa::instruction::AluOp;

#[test]
fn bitwise_ops() {
    assert_eq!(
        Alu::execute(AluOp::And, 0xF0F0_F0F0, 0xFF00_FF00),
        0xF000_F000
    );
    assert_eq!(
        Alu::execute(AluOp::Or, 0xF0F0_F0F0, 0x0F0F_0F0F),
        0xFFFF_FFFF
    );
    assert_eq!(
        Alu::execute(AluOp::Xor, 0xFFFF_FFFF, 0x0000_FFFF),
        0xFFFF_0000
    );
}

#[test]
fn xori_minus_one_is_bitwise_not() {
    assert_eq!(
        Alu::execute(AluOp::Xor, 0x1234_5678, -1i32 as u32),
        !0x1234_5678
    );
}

#[test]
fn slt_and_sltu_disagree_on_sign_bit() {
    assert_eq!(Alu::execute(AluOp::Slt, 0xFFFF_FFFF, 1), 1);
    assert_eq!(Alu::execute(AluOp::Sltu, 0xFFFF_FFFF, 1), 0);
    assert_eq!(Alu::execute(AluOp::Slt, 1, 0xFFFF_FFFF), 0);
    assert_eq!(Alu::execute(AluOp::Sltu, 1, 0xFFFF_FFFF), 1);
}

#[test]
fn slt_equal_operands_is_zero() {
    assert_eq!(Alu::execute(AluOp::Slt, 42, 42), 0);
    assert_eq!(Alu::execute(AluOp::Sltu, 42, 42), 0);
}

#[test]
fn sltiu_one_tests_for_zero() {
    // SLTIU rd, rs, 1 is the SEQZ idiom.
    assert_eq!(Alu::execute(AluOp::Sltu, 0, 1), 1);
    assert_eq!(Alu::execute(AluOp::Sltu, 7, 1), 0);
}
