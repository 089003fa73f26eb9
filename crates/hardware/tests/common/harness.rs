use rv32sim_core::Simulator;
use rv32sim_core::common::Result;
use rv32sim_core::config::Config;
use rv32sim_core::core::Cpu;
use rv32sim_core::soc::devices::BufferConsole;
use tracing_subscriber::EnvFilter;

/// Simulator with captured UART output and helpers for placing code.
pub struct TestContext {
    pub sim: Simulator,
    pub console: BufferConsole,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Routes library events to the test output; `RUST_LOG` picks the level.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    pub fn with_config(config: &Config) -> Self {
        init_tracing();
        let console = BufferConsole::new();
        let sim = Simulator::with_console(&[], config, Box::new(console.clone()))
            .expect("empty image always fits");
        Self { sim, console }
    }

    /// Convenience accessor for the CPU.
    pub fn cpu(&self) -> &Cpu {
        &self.sim.cpu
    }

    /// Mutable convenience accessor for the CPU.
    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.sim.cpu
    }

    /// Load a sequence of 32-bit instructions into memory at `addr` and set the PC.
    pub fn load_program(mut self, addr: u32, instructions: &[u32]) -> Self {
        for (i, inst) in instructions.iter().enumerate() {
            let offset = addr + (i as u32) * 4;
            self.sim.cpu.bus.store32(offset, *inst);
        }
        self.sim.cpu.pc = addr;
        self
    }

    /// Set a general-purpose register value.
    pub fn set_reg(&mut self, reg: usize, val: u32) {
        self.sim.cpu.regs.write(reg, val);
    }

    /// Read a general-purpose register value.
    pub fn get_reg(&self, reg: usize) -> u32 {
        self.sim.cpu.regs.read(reg)
    }

    /// Execute one instruction.
    pub fn step(&mut self) -> Result<()> {
        self.sim.tick()
    }

    /// Run the CPU for a specific number of cycles, stopping at the first error.
    pub fn run(&mut self, cycles: u64) {
        for _ in 0..cycles {
            if let Err(e) = self.sim.tick() {
                eprintln!("CPU tick error: {e}");
                break;
            }
        }
    }

    /// Everything written to the UART so far.
    pub fn output(&self) -> String {
        self.console.contents_string()
    }
}
