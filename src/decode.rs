use crate::{constants, register_index, AluOp, Flags, Opcode, Word, LINK_REGISTER};
use log::debug;
use num::FromPrimitive;

/// Source of the next program counter value.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NextPc {
    /// Taken branch, immediate form: PC plus the sign-extended IMM8.
    Imm,
    /// Taken branch, register form: the absolute register value.
    Reg,
    /// Fall through to PC + 1.
    Inc,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum InsnType {
    AmiRegReg,
    AmiRegImm,
    BraJal,
    MemLw,
    MemSw,
    None,
}

/// Control signals produced by the decode unit for one instruction
/// word. Conditional branches are resolved here, which is why decoding
/// takes the current flags.
#[derive(Clone, Copy, Debug)]
pub struct Decoded {
    /// Destination register index; doubles as the port-1 read address
    /// for stores.
    pub regdst: usize,
    /// Source register index. Branches read their register-form target
    /// through this port.
    pub regsrc: usize,
    pub nextpc: NextPc,
    pub insntype: InsnType,
    pub aluop: AluOp,
    /// Zero- or sign-extended immediate, per instruction class.
    pub imm: Word,
    pub regwe: bool,
    pub memwe: bool,
    pub aluen: bool,
}

impl Default for Decoded {
    fn default() -> Decoded {
        Decoded {
            regdst: 0,
            regsrc: 0,
            nextpc: NextPc::Inc,
            insntype: InsnType::None,
            aluop: AluOp::OR,
            imm: 0,
            regwe: false,
            memwe: false,
            aluen: false,
        }
    }
}

pub fn sign_extend_imm5(word: Word) -> Word {
    let imm = word & constants::IMM5_MASK;
    if imm & constants::IMM5_SIGN_MASK != 0 {
        imm | !constants::IMM5_MASK
    } else {
        imm
    }
}

pub fn sign_extend_imm8(word: Word) -> Word {
    let imm = word & constants::IMM8_MASK;
    if imm & constants::IMM8_SIGN_MASK != 0 {
        imm | !constants::IMM8_MASK
    } else {
        imm
    }
}

fn branch_taken(oc: Opcode, f: Flags) -> bool {
    match oc {
        Opcode::JE => f.zf,
        Opcode::JNE => !f.zf,
        Opcode::JGS => !f.zf && f.sf == f.of,
        Opcode::JGU => !f.cf && !f.zf,
        Opcode::JGES => f.sf == f.of,
        Opcode::JGEU => !f.cf,
        Opcode::JLS => f.sf != f.of,
        Opcode::JLU => f.cf,
        Opcode::JLES => f.zf || f.sf != f.of,
        Opcode::JLEU => f.cf || f.zf,
        Opcode::J | Opcode::JAL => true,
        _ => false,
    }
}

/// Decodes one instruction word against the current flags.
///
/// Unassigned opcode encodings decode to the do-nothing shape: no
/// writes, PC falls through. The model never faults on them.
pub fn decode(word: Word, flags: Flags) -> Decoded {
    let rd = ((word & constants::RD_MASK) >> constants::RD_OFFSET) as usize;
    let rs = ((word & constants::RS_MASK) >> constants::RS_OFFSET) as usize;

    let mut d = Decoded {
        regdst: rd,
        regsrc: rs,
        ..Decoded::default()
    };

    let opcode_value = (word & constants::OPCODE_MASK) >> constants::OPCODE_OFFSET;
    let opcode = match Opcode::from_u16(opcode_value) {
        Some(oc) => oc,
        None => {
            debug!(target: "cpu", "unassigned opcode {} in {:#06x}", opcode_value, word);
            return d;
        }
    };

    match opcode {
        Opcode::MOVHI | Opcode::MOVLO => {
            d.insntype = InsnType::AmiRegImm;
            d.aluen = true;
            d.aluop = alu_funct(word);
            d.imm = word & constants::IMM8_MASK;
            d.regwe = true;
        }

        Opcode::OR
        | Opcode::AND
        | Opcode::XOR
        | Opcode::SLL
        | Opcode::SLR
        | Opcode::NOT
        | Opcode::NEG
        | Opcode::ADD
        | Opcode::SUB
        | Opcode::MOV
        | Opcode::CMP => {
            d.insntype = if rs != 0 {
                InsnType::AmiRegReg
            } else {
                InsnType::AmiRegImm
            };
            d.aluen = true;
            d.aluop = alu_funct(word);
            d.imm = word & constants::IMM5_MASK;
            d.regwe = opcode != Opcode::CMP;
        }

        Opcode::JE
        | Opcode::JNE
        | Opcode::JGS
        | Opcode::JGU
        | Opcode::JLS
        | Opcode::JLU
        | Opcode::JGES
        | Opcode::JGEU
        | Opcode::JLES
        | Opcode::JLEU
        | Opcode::J
        | Opcode::JAL => {
            // The register-form target reads through port 1.
            d.regsrc = rd;
            d.imm = sign_extend_imm8(word);
            if branch_taken(opcode, flags) {
                d.nextpc = if rd == 0 { NextPc::Imm } else { NextPc::Reg };
            }
            if opcode == Opcode::JAL {
                d.insntype = InsnType::BraJal;
                d.regwe = true;
                d.regdst = register_index(LINK_REGISTER);
            }
        }

        Opcode::LW => {
            d.insntype = InsnType::MemLw;
            d.aluen = true;
            d.aluop = AluOp::ADD;
            d.imm = sign_extend_imm5(word);
            d.regwe = true;
        }

        Opcode::SW => {
            d.insntype = InsnType::MemSw;
            d.aluen = true;
            d.aluop = AluOp::ADD;
            d.imm = sign_extend_imm5(word);
            d.memwe = true;
        }
    }

    d
}

/// The ALU function slice of the opcode field (`insn[14:11]`); only
/// meaningful for AMI opcodes, where the slice always names a
/// function.
fn alu_funct(word: Word) -> AluOp {
    let value = (word & constants::OPCODE_MASK) >> constants::OPCODE_OFFSET;
    AluOp::from_u16(value & constants::ALU_FUNCT_MASK).unwrap_or(AluOp::OR)
}
