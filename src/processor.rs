use crate::{
    alu, constants, decode, register_index, Decoded, Flags, InsnType, NextPc, RegisterId, Storage,
    Word,
};
use log::trace;

/// Control FSM states; the processor advances one state per clock
/// tick.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum State {
    Idle,
    Wait,
    Ifetch,
    Execute,
    WaitMem,
    WaitAlu,
    Writeback,
}

/// The Tangle reference model: register file, flags, decode, ALU and
/// the multi-cycle control FSM, driven one clock tick at a time
/// against a word-addressed [`Storage`](trait.Storage.html).
///
/// The model never faults. Unassigned opcodes retire as no-ops,
/// addresses are masked to the configured program counter width, and
/// execution continues until the caller stops ticking.
pub struct Processor {
    registers: [Word; constants::REGISTER_COUNT],
    flags: Flags,
    pc: Word,
    pc_mask: Word,
    state: State,
    insn: Word,
    next_insn: Word,
    mem_addr: Word,
    decoded: Decoded,
    alu_value: Word,
    alu_cycles: u32,
}

impl Processor {
    pub fn new(pc_width: u32) -> Processor {
        assert!(pc_width >= 1 && pc_width <= constants::MAX_PC_WIDTH);
        Processor {
            registers: [0; constants::REGISTER_COUNT],
            flags: Flags::default(),
            pc: 0,
            pc_mask: (((1u32 << pc_width) - 1) & 0xFFFF) as Word,
            state: State::Idle,
            insn: 0,
            next_insn: 0,
            mem_addr: 0,
            decoded: Decoded::default(),
            alu_value: 0,
            alu_cycles: 0,
        }
    }

    pub fn registers(&self) -> &[Word] {
        &self.registers[..]
    }

    pub fn register(&self, id: RegisterId) -> Word {
        self.registers[register_index(id)]
    }

    pub fn register_mut(&mut self, id: RegisterId) -> &mut Word {
        &mut self.registers[register_index(id)]
    }

    pub fn flags(&self) -> Flags {
        self.flags
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn program_counter(&self) -> Word {
        self.pc
    }

    /// Advances the FSM by one clock tick.
    pub fn tick(&mut self, storage: &mut dyn Storage) {
        trace!(
            target: "cpu",
            "{:?} pc={:#06x} insn={:#06x}",
            self.state, self.pc, self.insn
        );

        match self.state {
            State::Idle => {
                self.state = State::Wait;
            }

            State::Wait => {
                self.insn = self.fetch(storage, self.pc);
                self.mem_addr = self.mask(self.pc.wrapping_add(1));
                self.state = State::Ifetch;
            }

            State::Ifetch => {
                self.decoded = decode(self.insn, self.flags);
                match self.decoded.nextpc {
                    NextPc::Imm => {
                        self.mem_addr = self.mask(self.pc.wrapping_add(self.decoded.imm));
                    }
                    NextPc::Reg => {
                        self.mem_addr = self.mask(self.registers[self.decoded.regsrc]);
                    }
                    NextPc::Inc => {}
                }
                self.state = State::Execute;
            }

            State::Execute => self.execute(storage),

            State::WaitMem => {
                self.next_insn = self.fetch(storage, self.mem_addr);
                self.state = State::Writeback;
            }

            State::WaitAlu => {
                self.alu_cycles -= 1;
                if self.alu_cycles == 0 {
                    if self.decoded.regwe {
                        self.write_register(self.decoded.regdst, self.alu_value);
                    }
                    self.pc = self.mask(self.pc.wrapping_add(1));
                    self.state = State::Writeback;
                }
            }

            State::Writeback => self.writeback(storage),
        }
    }

    fn execute(&mut self, storage: &mut dyn Storage) {
        let d = self.decoded;

        if d.nextpc != NextPc::Inc {
            // Taken branch: mem_addr holds the target since IFETCH.
            // The lookahead refills from there in WAIT_MEM.
            if d.insntype == InsnType::BraJal {
                let link = self.mask(self.pc.wrapping_add(1));
                self.write_register(d.regdst, link);
            }
            self.pc = self.mem_addr;
            self.state = State::WaitMem;
            return;
        }

        match d.insntype {
            InsnType::MemLw | InsnType::MemSw => {
                let base = self.registers[d.regsrc];
                let addr = self.mask(base.wrapping_add(d.imm));
                self.mem_addr = addr;
                if d.insntype == InsnType::MemLw {
                    self.state = State::WaitMem;
                } else {
                    // Store-to-self hazard: the prefetched slot is the
                    // one being overwritten, forward the stored value.
                    let next_pc = self.mask(self.pc.wrapping_add(1));
                    self.next_insn = if addr == next_pc {
                        self.registers[d.regdst]
                    } else {
                        self.fetch(storage, next_pc)
                    };
                    self.state = State::Writeback;
                }
            }

            _ => {
                // AMI, no-ops and not-taken branches. mem_addr still
                // holds PC + 1, so the lookahead latches here.
                self.next_insn = self.fetch(storage, self.mem_addr);

                if d.aluen {
                    let a = self.registers[d.regdst];
                    let b = match d.insntype {
                        InsnType::AmiRegReg => self.registers[d.regsrc],
                        _ => d.imm,
                    };
                    let out = alu::execute(d.aluop, a, b, self.flags);
                    self.flags = out.flags;

                    if out.cycles > 0 {
                        self.alu_value = out.value;
                        self.alu_cycles = out.cycles;
                        self.state = State::WaitAlu;
                        return;
                    }
                    if d.regwe {
                        self.write_register(d.regdst, out.value);
                    }
                }

                self.pc = self.mask(self.pc.wrapping_add(1));
                self.state = State::Writeback;
            }
        }
    }

    fn writeback(&mut self, storage: &mut dyn Storage) {
        let d = self.decoded;

        match d.insntype {
            InsnType::MemLw => {
                // The loaded word arrived through the lookahead latch.
                if d.regwe {
                    self.write_register(d.regdst, self.next_insn);
                }
                self.pc = self.mask(self.pc.wrapping_add(1));
                // The data access occupied the fetch port, so the next
                // instruction is refetched instead of forwarded.
                self.insn = self.fetch(storage, self.pc);
            }

            InsnType::MemSw => {
                if d.memwe {
                    let _ = storage.write_word(self.mem_addr, self.registers[d.regdst]);
                }
                self.pc = self.mask(self.pc.wrapping_add(1));
                self.insn = self.next_insn;
            }

            _ => {
                self.insn = self.next_insn;
            }
        }

        self.mem_addr = self.mask(self.pc.wrapping_add(1));
        self.state = State::Ifetch;
    }

    fn write_register(&mut self, id: usize, value: Word) {
        if id != 0 {
            self.registers[id] = value;
        }
    }

    fn fetch(&self, storage: &dyn Storage, address: Word) -> Word {
        // An undersized backing store reads as zero; the model never
        // faults.
        storage.read_word(self.mask(address)).unwrap_or(0)
    }

    fn mask(&self, value: Word) -> Word {
        value & self.pc_mask
    }
}

impl Default for Processor {
    fn default() -> Processor {
        Processor::new(constants::DEFAULT_PC_WIDTH)
    }
}
