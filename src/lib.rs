pub mod constants;

mod alu;
mod decode;
mod instructions;
mod memory;
mod processor;


pub use crate::alu::{execute as alu_execute, AluOutput, Flags};
pub use crate::decode::{decode, sign_extend_imm5, sign_extend_imm8, Decoded, InsnType, NextPc};
pub use crate::instructions::*;
pub use crate::memory::{Memory, Storage};
pub use crate::processor::{Processor, State};
pub use util::Endian;

/// One memory slot; instructions and data share this unit.
pub type Word = u16;
