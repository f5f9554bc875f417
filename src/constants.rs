use crate::Word;
use std::mem;

pub const WORD_BYTES: u32 = mem::size_of::<Word>() as u32;
pub const WORD_WIDTH: u32 = WORD_BYTES * 8;

pub const OPCODE_WIDTH: u32 = 5;
pub const REG_ID_WIDTH: u32 = 3;

pub const OPCODE_MASK: Word = 0b1111_1000_0000_0000;
pub const RD_MASK: Word = 0b0000_0111_0000_0000;
pub const RS_MASK: Word = 0b0000_0000_1110_0000;
pub const IMM5_MASK: Word = 0b0000_0000_0001_1111;
pub const IMM8_MASK: Word = 0b0000_0000_1111_1111;

pub const IMM5_SIGN_MASK: Word = 0b0000_0000_0001_0000;
pub const IMM8_SIGN_MASK: Word = 0b0000_0000_1000_0000;
pub const WORD_SIGN_MASK: Word = 0b1000_0000_0000_0000;

/// The ALU function is the low four bits of the opcode field.
pub const ALU_FUNCT_MASK: Word = 0b0000_1111;

pub const OPCODE_OFFSET: u32 = 11;
pub const RD_OFFSET: u32 = 8;
pub const RS_OFFSET: u32 = 5;
pub const IMM5_OFFSET: u32 = 0;
pub const IMM8_OFFSET: u32 = 0;

pub const REGISTER_COUNT: usize = 8;

/// The shifter consumes the low four bits of its second operand.
pub const SHIFT_AMOUNT_MASK: Word = 0b0000_1111;

pub const DEFAULT_PC_WIDTH: u32 = 6;
pub const MAX_PC_WIDTH: u32 = WORD_WIDTH;

// Authoritative encoder ranges.
pub const MIN_IMM_AMI: i64 = -16;
pub const MAX_IMM_AMI: i64 = 31;
pub const MIN_IMM_MOV: i64 = -128;
pub const MAX_IMM_MOV: i64 = 255;
pub const MIN_DISP_BRANCH: i64 = -128;
pub const MAX_DISP_BRANCH: i64 = 127;
pub const MIN_DISP_MEM: i64 = -16;
pub const MAX_DISP_MEM: i64 = 15;
