//! Simulation statistics collection and reporting.
//!
//! This module tracks execution metrics for the interpreter. It provides:
//! 1. **Cycle and IPC:** Total cycles, retired instructions, and derived rates.
//! 2. **Instruction mix:** Counts by category (ALU, load, store, branch, jump, system).
//! 3. **Control flow:** How many conditional branches were taken.
//!
//! Every cycle retires exactly one instruction, so `cycles` and
//! `instructions_retired` only diverge when a step fails at fetch.

use std::time::Instant;

use serde::Serialize;

use crate::isa::instruction::Instruction;

/// Simulation statistics structure.
#[derive(Clone, Debug, Serialize)]
pub struct SimStats {
    #[serde(skip)]
    start_time: Instant,
    /// Total simulator cycles elapsed.
    pub cycles: u64,
    /// Number of instructions executed to completion.
    pub instructions_retired: u64,

    /// Count of register and immediate ALU instructions, including LUI and AUIPC.
    pub inst_alu: u64,
    /// Count of load instructions retired.
    pub inst_load: u64,
    /// Count of store instructions retired.
    pub inst_store: u64,
    /// Count of conditional branch instructions retired.
    pub inst_branch: u64,
    /// Count of JAL and JALR instructions retired.
    pub inst_jump: u64,
    /// Count of ECALL, EBREAK and FENCE instructions retired.
    pub inst_system: u64,
    /// Count of illegal or unknown encodings skipped.
    pub inst_unknown: u64,

    /// Number of conditional branches that redirected the PC.
    pub branches_taken: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions_retired: 0,
            inst_alu: 0,
            inst_load: 0,
            inst_store: 0,
            inst_branch: 0,
            inst_jump: 0,
            inst_system: 0,
            inst_unknown: 0,
            branches_taken: 0,
        }
    }
}

impl SimStats {
    /// Records one retired instruction.
    ///
    /// # Arguments
    ///
    /// * `inst` - The instruction that was executed.
    /// * `redirected` - Whether execution returned a jump target instead of falling through.
    pub const fn record(&mut self, inst: &Instruction, redirected: bool) {
        self.instructions_retired += 1;
        match inst {
            Instruction::Op { .. }
            | Instruction::OpImm { .. }
            | Instruction::Lui { .. }
            | Instruction::Auipc { .. } => self.inst_alu += 1,
            Instruction::Load { .. } => self.inst_load += 1,
            Instruction::Store { .. } => self.inst_store += 1,
            Instruction::Branch { .. } => {
                self.inst_branch += 1;
                if redirected {
                    self.branches_taken += 1;
                }
            }
            Instruction::Jal { .. } | Instruction::Jalr { .. } => self.inst_jump += 1,
            Instruction::Fence | Instruction::Ecall | Instruction::Ebreak => {
                self.inst_system += 1;
            }
            Instruction::Illegal(_) | Instruction::Unknown { .. } => self.inst_unknown += 1,
        }
    }

    /// Prints all statistics to stdout.
    pub fn print(&self) {
        let seconds = self.start_time.elapsed().as_secs_f64();
        let cyc = self.cycles.max(1);
        let instr = self.instructions_retired.max(1) as f64;
        let ipc = self.instructions_retired as f64 / cyc as f64;
        let khz = if seconds > 0.0 {
            (self.cycles as f64 / seconds) / 1000.0
        } else {
            0.0
        };

        println!("\n==========================================================");
        println!("RV32I INTERPRETER STATISTICS");
        println!("==========================================================");
        println!("host_seconds             {seconds:.4} s");
        println!("sim_cycles               {}", self.cycles);
        println!("sim_freq                 {khz:.2} kHz");
        println!("sim_insts                {}", self.instructions_retired);
        println!("sim_ipc                  {ipc:.4}");
        println!("----------------------------------------------------------");
        println!("INSTRUCTION MIX");
        let mix = [
            ("op.alu", self.inst_alu),
            ("op.load", self.inst_load),
            ("op.store", self.inst_store),
            ("op.branch", self.inst_branch),
            ("op.jump", self.inst_jump),
            ("op.system", self.inst_system),
            ("op.unknown", self.inst_unknown),
        ];
        for (name, count) in mix {
            println!(
                "  {name:<22} {count} ({:.2}%)",
                (count as f64 / instr) * 100.0
            );
        }
        println!("----------------------------------------------------------");
        let taken_rate = if self.inst_branch > 0 {
            (self.branches_taken as f64 / self.inst_branch as f64) * 100.0
        } else {
            0.0
        };
        println!("CONTROL FLOW");
        println!("  branch.taken           {}", self.branches_taken);
        println!("  branch.taken_rate      {taken_rate:.2}%");
        println!("==========================================================");
    }
}
