//! # CPU Execution Tests
//!
//! Executes single instructions and short sequences through `Cpu::step` and
//! checks registers, memory and the PC afterwards.

use pretty_assertions::assert_eq;
use rv32sim_core::core::cpu::Flow;
use rv32sim_core::isa::abi;
use rv32sim_core::isa::instruction::Instruction;

use crate::common::{InstructionBuilder, TestContext};

fn ib() -> InstructionBuilder {
    InstructionBuilder::new()
}

fn ctx(program: &[u32]) -> TestContext {
    TestContext::new().load_program(0, program)
}

// ──────────────────────────────────────────────────────────
// Arithmetic
// ──────────────────────────────────────────────────────────

#[test]
fn add_and_addi() {
    let mut t = ctx(&[
        ib().addi(1, 0, 5).build(),
        ib().addi(2, 1, -7).build(),
        ib().add(3, 1, 2).build(),
    ]);
    t.run(3);
    assert_eq!(t.get_reg(1), 5);
    assert_eq!(t.get_reg(2), (-2i32) as u32);
    assert_eq!(t.get_reg(3), 3);
    assert_eq!(t.cpu().pc, 12);
}

#[test]
fn add_wraps() {
    let mut t = ctx(&[ib().add(3, 1, 2).build(), ib().addi(4, 1, 1).build()]);
    t.set_reg(1, 0xFFFF_FFFF);
    t.set_reg(2, 2);
    t.run(2);
    assert_eq!(t.get_reg(3), 1);
    assert_eq!(t.get_reg(4), 0);
}

#[test]
fn slt_vs_sltu_on_register_operands() {
    let mut t = ctx(&[ib().slt(3, 1, 2).build(), ib().sltu(4, 1, 2).build()]);
    t.set_reg(1, 0xFFFF_FFFF);
    t.set_reg(2, 1);
    t.run(2);
    assert_eq!(t.get_reg(3), 1);
    assert_eq!(t.get_reg(4), 0);
}

#[test]
fn sltiu_compares_sign_extended_immediate_unsigned() {
    // -1 sign-extends to 0xFFFF_FFFF, which every other value is below.
    let mut t = ctx(&[ib().sltiu(3, 1, -1).build(), ib().slti(4, 1, -1).build()]);
    t.set_reg(1, 5);
    t.run(2);
    assert_eq!(t.get_reg(3), 1);
    assert_eq!(t.get_reg(4), 0);
}

#[test]
fn shifts_on_negative_operand() {
    let mut t = ctx(&[
        ib().srai(2, 1, 4).build(),
        ib().srli(3, 1, 4).build(),
        ib().sra(4, 1, 5).build(),
        ib().srl(6, 1, 5).build(),
        ib().slli(7, 1, 1).build(),
    ]);
    t.set_reg(1, 0x8000_0000);
    t.set_reg(5, 36);
    t.run(5);
    assert_eq!(t.get_reg(2), 0xF800_0000);
    assert_eq!(t.get_reg(3), 0x0800_0000);
    assert_eq!(t.get_reg(4), 0xF800_0000);
    assert_eq!(t.get_reg(6), 0x0800_0000);
    assert_eq!(t.get_reg(7), 0);
}

#[test]
fn writes_to_x0_are_discarded() {
    let mut t = ctx(&[ib().addi(0, 0, 123).build(), ib().lui(0, 0x7000).build()]);
    t.run(2);
    assert_eq!(t.get_reg(0), 0);
}

// ──────────────────────────────────────────────────────────
// Upper immediates
// ──────────────────────────────────────────────────────────

#[test]
fn lui_and_auipc() {
    let mut t = ctx(&[
        ib().nop().build(),
        ib().lui(1, 0x1234_5000).build(),
        ib().auipc(2, 0x1000).build(),
    ]);
    t.run(3);
    assert_eq!(t.get_reg(1), 0x1234_5000);
    assert_eq!(t.get_reg(2), 0x1000 + 8);
}

#[test]
fn lui_addi_builds_full_constant() {
    // 0xDEADBEEF = 0xDEADC000 + (-0x111)
    let mut t = ctx(&[
        ib().lui(1, 0xDEAD_C000_u32 as i32).build(),
        ib().addi(1, 1, -0x111).build(),
    ]);
    t.run(2);
    assert_eq!(t.get_reg(1), 0xDEAD_BEEF);
}

// ──────────────────────────────────────────────────────────
// Memory
// ──────────────────────────────────────────────────────────

#[test]
fn store_load_round_trip_all_widths() {
    let mut t = ctx(&[
        ib().sw(1, 2, 0).build(),
        ib().lw(3, 1, 0).build(),
        ib().sh(1, 2, 6).build(),
        ib().lh(4, 1, 6).build(),
        ib().lhu(5, 1, 6).build(),
        ib().sb(1, 2, 9).build(),
        ib().lb(6, 1, 9).build(),
        ib().lbu(7, 1, 9).build(),
    ]);
    t.set_reg(1, 0x100);
    t.set_reg(2, 0x1234_F6F7);
    t.run(8);
    assert_eq!(t.get_reg(3), 0x1234_F6F7);
    assert_eq!(t.get_reg(4), 0xFFFF_F6F7);
    assert_eq!(t.get_reg(5), 0x0000_F6F7);
    assert_eq!(t.get_reg(6), 0xFFFF_FFF7);
    assert_eq!(t.get_reg(7), 0x0000_00F7);
}

#[test]
fn unaligned_word_access_in_bounds() {
    let mut t = ctx(&[ib().sw(1, 2, 3).build(), ib().lw(3, 1, 3).build()]);
    t.set_reg(1, 0x200);
    t.set_reg(2, 0xCAFE_BABE);
    t.run(2);
    assert_eq!(t.get_reg(3), 0xCAFE_BABE);
    assert_eq!(t.cpu().bus.load8(0x203), 0xBE);
}

#[test]
fn negative_offset_addressing() {
    let mut t = ctx(&[ib().sw(1, 2, -4).build(), ib().lw(3, 1, -4).build()]);
    t.set_reg(1, 0x104);
    t.set_reg(2, 77);
    t.run(2);
    assert_eq!(t.cpu().bus.load32(0x100), 77);
    assert_eq!(t.get_reg(3), 77);
}

#[test]
fn out_of_range_load_yields_zero() {
    let mut t = ctx(&[ib().lw(3, 1, 0).build()]);
    t.set_reg(1, 0xFFFF_FFFE);
    t.set_reg(3, 0x55);
    t.run(1);
    assert_eq!(t.get_reg(3), 0);
}

fn memory_size() -> u32 {
    TestContext::new().cpu().bus.len() as u32
}

#[test]
fn store_over_the_top_has_no_effect() {
    let size = memory_size();
    let mut t = ctx(&[ib().sw(1, 2, 0).build()]);
    t.set_reg(1, size - 2);
    t.set_reg(2, 0xFFFF_FFFF);
    t.run(1);
    assert_eq!(t.cpu().bus.load16(size - 2), 0);
    assert_eq!(t.cpu().pc, 4);
}

// ──────────────────────────────────────────────────────────
// Control flow
// ──────────────────────────────────────────────────────────

#[test]
fn jal_zero_offset_self_loops_and_links() {
    let program = [ib().nop().build(), ib().jal(abi::REG_RA as u32, 0).build()];
    let mut t = ctx(&program);
    t.run(1);
    assert_eq!(t.cpu().pc, 4);
    t.run(3);
    assert_eq!(t.cpu().pc, 4);
    assert_eq!(t.get_reg(abi::REG_RA), 8);
}

#[test]
fn jal_forward_and_backward() {
    let mut t = ctx(&[
        ib().jal(1, 12).build(),
        ib().nop().build(),
        ib().nop().build(),
        ib().jal(2, -8).build(),
    ]);
    t.run(1);
    assert_eq!(t.cpu().pc, 12);
    assert_eq!(t.get_reg(1), 4);
    t.run(1);
    assert_eq!(t.cpu().pc, 4);
    assert_eq!(t.get_reg(2), 16);
}

#[test]
fn jalr_clears_bit_zero() {
    let mut t = ctx(&[ib().jalr(1, 2, 1).build()]);
    t.set_reg(2, 0x40);
    t.run(1);
    assert_eq!(t.cpu().pc, 0x40);
    assert_eq!(t.get_reg(1), 4);
}

#[test]
fn jalr_with_rd_equal_rs1_uses_old_value() {
    let mut t = TestContext::new().load_program(0x20, &[ib().jalr(5, 5, 8).build()]);
    t.set_reg(5, 0x100);
    t.run(1);
    assert_eq!(t.cpu().pc, 0x108);
    assert_eq!(t.get_reg(5), 0x24);
}

#[test]
fn taken_branch_lands_exactly_on_target() {
    let mut t = ctx(&[
        ib().beq(1, 2, 8).build(),
        ib().addi(3, 0, 1).build(),
        ib().addi(4, 0, 1).build(),
    ]);
    t.run(2);
    assert_eq!(t.get_reg(3), 0);
    assert_eq!(t.get_reg(4), 1);
    assert_eq!(t.cpu().pc, 12);
}

#[test]
fn not_taken_branch_falls_through() {
    let mut t = ctx(&[ib().bne(1, 2, 64).build()]);
    t.run(1);
    assert_eq!(t.cpu().pc, 4);
}

#[test]
fn backward_branch_loop_counts_down() {
    // x1 = 3; loop: x1 -= 1; x2 += 1; bne x1, x0, loop
    let mut t = ctx(&[
        ib().addi(1, 0, 3).build(),
        ib().addi(1, 1, -1).build(),
        ib().addi(2, 2, 1).build(),
        ib().bne(1, 0, -8).build(),
    ]);
    t.run(1 + 3 * 3);
    assert_eq!(t.get_reg(1), 0);
    assert_eq!(t.get_reg(2), 3);
    assert_eq!(t.cpu().pc, 16);
}

#[test]
fn signed_and_unsigned_branches_disagree() {
    let mut t = ctx(&[
        ib().blt(1, 2, 8).build(),
        ib().nop().build(),
        ib().bltu(1, 2, 8).build(),
    ]);
    t.set_reg(1, 0xFFFF_FFFF);
    t.set_reg(2, 1);
    t.run(1);
    assert_eq!(t.cpu().pc, 8);
    t.run(1);
    assert_eq!(t.cpu().pc, 12);
}

// ──────────────────────────────────────────────────────────
// No-op classes
// ──────────────────────────────────────────────────────────

#[test]
fn all_zero_word_only_advances_pc() {
    let mut t = ctx(&[0]);
    t.set_reg(1, 11);
    let regs_before = t.cpu().regs.clone();
    let mem_before = t.cpu().bus.as_slice().to_vec();

    t.step().unwrap();

    assert_eq!(t.cpu().pc, 4);
    assert_eq!(t.cpu().regs, regs_before);
    assert!(t.cpu().bus.as_slice() == mem_before.as_slice());
    assert_eq!(t.cpu().stats.inst_unknown, 1);
}

#[test]
fn system_and_fence_are_no_ops() {
    let mut t = ctx(&[
        ib().ecall().build(),
        ib().ebreak().build(),
        ib().fence().build(),
    ]);
    t.set_reg(abi::REG_A7, 93);
    let regs_before = t.cpu().regs.clone();
    t.run(3);
    assert_eq!(t.cpu().regs, regs_before);
    assert_eq!(t.cpu().pc, 12);
    assert_eq!(t.cpu().stats.inst_system, 3);
}

#[test]
fn illegal_encoding_is_skipped() {
    // MUL x3, x1, x2 is outside the base ISA.
    let mut t = ctx(&[0x0220_81B3, ib().addi(4, 0, 1).build()]);
    t.set_reg(1, 6);
    t.set_reg(2, 7);
    t.run(2);
    assert_eq!(t.get_reg(3), 0);
    assert_eq!(t.get_reg(4), 1);
}

// ──────────────────────────────────────────────────────────
// Flow values
// ──────────────────────────────────────────────────────────

#[test]
fn execute_reports_flow_without_touching_pc() {
    let mut t = TestContext::new();
    t.cpu_mut().pc = 0x80;

    let flow = t.cpu_mut().execute(Instruction::Jal { rd: 1, offset: -16 });
    assert_eq!(flow, Flow::Jump(0x70));
    assert_eq!(t.cpu().pc, 0x80);

    let flow = t.cpu_mut().execute(Instruction::Fence);
    assert_eq!(flow, Flow::Next);
}
