use crate::error::Diagnostic;
use crate::int_util::parse_int;
use crate::labels::{self, LabelMap};
use crate::parser::Rule;
use crate::span_line;
use matches::debug_assert_matches;
use pest::iterators::Pair;
use pest::Span;
use tangle::*;

/// Instruction class, as recorded on every emitted word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InsnClass {
    Ami,
    Bra,
    Mem,
}

/// One instruction produced by pass 1.
///
/// A record born with a forward label reference keeps the label span
/// (and a zero immediate) until relocation patches it.
#[derive(Clone, Debug, PartialEq)]
pub struct InstructionRecord<'i> {
    pub word: Word,
    pub class: InsnClass,
    /// Program-word index of this instruction.
    pub pc: u32,
    pub pending: Option<Span<'i>>,
    /// Source line, for pass-2 diagnostics.
    pub line: usize,
}

enum OperandGrammar {
    Single,
    Double,
    Memory,
}

fn insn_class(opcode: Opcode) -> InsnClass {
    match opcode {
        Opcode::LW | Opcode::SW => InsnClass::Mem,
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
        | Opcode::JAL => InsnClass::Bra,
        _ => InsnClass::Ami,
    }
}

fn operand_grammar(opcode: Opcode) -> OperandGrammar {
    match insn_class(opcode) {
        InsnClass::Mem => OperandGrammar::Memory,
        InsnClass::Bra => OperandGrammar::Single,
        InsnClass::Ami => match opcode {
            Opcode::NOT | Opcode::NEG => OperandGrammar::Single,
            _ => OperandGrammar::Double,
        },
    }
}

/// Pass 1 over the parsed program: builds the record list and the
/// symbol table, reporting diagnostics in source-line order.
pub fn process_program<'i>(
    program: Pair<'i, Rule>,
    diagnostics: &mut Vec<Diagnostic>,
) -> (Vec<InstructionRecord<'i>>, LabelMap<'i>) {
    debug_assert_matches!(program.as_rule(), Rule::program);

    let mut records = Vec::new();
    let mut labels = LabelMap::new();

    for line in program.into_inner() {
        if line.as_rule() == Rule::line {
            process_line(line, &mut records, &mut labels, diagnostics);
        }
    }

    (records, labels)
}

fn process_line<'i>(
    line: Pair<'i, Rule>,
    records: &mut Vec<InstructionRecord<'i>>,
    labels: &mut LabelMap<'i>,
    diagnostics: &mut Vec<Diagnostic>,
) {
    let mut mnemonic: Option<String> = None;

    for part in line.into_inner() {
        match part.as_rule() {
            Rule::label_def => {
                let name = part.into_inner().next().unwrap();
                labels::define(labels, name.as_span(), records.len() as u32, diagnostics);
            }
            Rule::instruction => {
                mnemonic = Some(process_instruction(part, records, labels, diagnostics));
            }
            Rule::garbage => {
                let line_no = span_line(&part.as_span());
                match &mnemonic {
                    // trailing junk after an instruction is an operand
                    // error attributed to its mnemonic
                    Some(name) => diagnostics.push(Diagnostic::operand(line_no, name)),
                    None => diagnostics.push(Diagnostic::lex(line_no, part.as_str())),
                }
            }
            _ => unreachable!(),
        }
    }
}

fn process_instruction<'i>(
    pair: Pair<'i, Rule>,
    records: &mut Vec<InstructionRecord<'i>>,
    labels: &LabelMap<'i>,
    diagnostics: &mut Vec<Diagnostic>,
) -> String {
    debug_assert_matches!(pair.as_rule(), Rule::instruction);

    let line = span_line(&pair.as_span());
    let pc = records.len() as u32;
    let mut pairs = pair.into_inner();
    let mnemonic = pairs.next().unwrap().as_str().to_owned();

    let operands: Vec<Pair<'i, Rule>> = match pairs.next() {
        Some(list) => list.into_inner().collect(),
        None => Vec::new(),
    };

    let upper = mnemonic.to_uppercase();

    if upper == "NOP" {
        if operands.is_empty() {
            records.push(record(make_nop(), InsnClass::Ami, pc, line));
        } else {
            diagnostics.push(Diagnostic::operand(line, &mnemonic));
        }
        return mnemonic;
    }

    let opcode: Opcode = match upper.parse() {
        Ok(opcode) => opcode,
        Err(_) => {
            diagnostics.push(Diagnostic::unknown_mnemonic(line, &mnemonic));
            return mnemonic;
        }
    };

    let new_record = match operand_grammar(opcode) {
        OperandGrammar::Single => {
            process_single(opcode, &mnemonic, &operands, pc, labels, line, diagnostics)
        }
        OperandGrammar::Double => {
            process_double(opcode, &mnemonic, &operands, pc, labels, line, diagnostics)
        }
        OperandGrammar::Memory => process_memory(opcode, &mnemonic, &operands, pc, line, diagnostics),
    };

    if let Some(new_record) = new_record {
        records.push(new_record);
    }
    mnemonic
}

fn record<'i>(word: Word, class: InsnClass, pc: u32, line: usize) -> InstructionRecord<'i> {
    InstructionRecord {
        word,
        class,
        pc,
        pending: None,
        line,
    }
}

fn process_single<'i>(
    opcode: Opcode,
    mnemonic: &str,
    operands: &[Pair<'i, Rule>],
    pc: u32,
    labels: &LabelMap<'i>,
    line: usize,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<InstructionRecord<'i>> {
    let class = insn_class(opcode);

    if operands.len() != 1 {
        diagnostics.push(Diagnostic::operand(line, mnemonic));
        return None;
    }
    let inner = operands[0].clone().into_inner().next().unwrap();

    match inner.as_rule() {
        Rule::register => {
            let rd = process_register(&inner, mnemonic, line, diagnostics)?;
            if class == InsnClass::Bra {
                if rd == RegisterId::R0 {
                    // r0 marks the immediate branch form
                    diagnostics.push(Diagnostic::operand(line, mnemonic));
                    return None;
                }
                Some(record(make_branch_reg(opcode, rd), class, pc, line))
            } else {
                Some(record(make_ami_ri(opcode, rd, 0), class, pc, line))
            }
        }
        Rule::immediate if class == InsnClass::Bra => {
            let disp = process_immediate(&inner, line, diagnostics)?;
            branch_record(opcode, disp, pc, line, diagnostics)
        }
        Rule::identifier if class == InsnClass::Bra => match labels.get(inner.as_str()) {
            Some(&off) => branch_record(
                opcode,
                i64::from(off) - i64::from(pc),
                pc,
                line,
                diagnostics,
            ),
            None => Some(InstructionRecord {
                word: make_branch_imm(opcode, 0),
                class,
                pc,
                pending: Some(inner.as_span()),
                line,
            }),
        },
        _ => {
            diagnostics.push(Diagnostic::operand(line, mnemonic));
            None
        }
    }
}

fn branch_record<'i>(
    opcode: Opcode,
    disp: i64,
    pc: u32,
    line: usize,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<InstructionRecord<'i>> {
    if disp < constants::MIN_DISP_BRANCH || disp > constants::MAX_DISP_BRANCH {
        diagnostics.push(Diagnostic::branch_range(line));
        return None;
    }
    Some(record(
        make_branch_imm(opcode, disp as i8),
        InsnClass::Bra,
        pc,
        line,
    ))
}

fn process_double<'i>(
    opcode: Opcode,
    mnemonic: &str,
    operands: &[Pair<'i, Rule>],
    pc: u32,
    labels: &LabelMap<'i>,
    line: usize,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<InstructionRecord<'i>> {
    if operands.len() != 2 {
        diagnostics.push(Diagnostic::operand(line, mnemonic));
        return None;
    }

    let rd_pair = operands[0].clone().into_inner().next().unwrap();
    if rd_pair.as_rule() != Rule::register {
        diagnostics.push(Diagnostic::operand(line, mnemonic));
        return None;
    }
    let rd = process_register(&rd_pair, mnemonic, line, diagnostics)?;

    let mov_imm8 = opcode == Opcode::MOVHI || opcode == Opcode::MOVLO;
    let inner = operands[1].clone().into_inner().next().unwrap();

    match inner.as_rule() {
        Rule::register if !mov_imm8 => {
            let rs = process_register(&inner, mnemonic, line, diagnostics)?;
            Some(record(make_ami_rr(opcode, rd, rs), InsnClass::Ami, pc, line))
        }
        Rule::immediate => {
            let value = process_immediate(&inner, line, diagnostics)?;
            if mov_imm8 {
                if value < constants::MIN_IMM_MOV || value > constants::MAX_IMM_MOV {
                    diagnostics.push(Diagnostic::immediate_range(line, mnemonic));
                    return None;
                }
                Some(record(
                    make_mov_imm(opcode, rd, value as u8),
                    InsnClass::Ami,
                    pc,
                    line,
                ))
            } else {
                if value < constants::MIN_IMM_AMI || value > constants::MAX_IMM_AMI {
                    diagnostics.push(Diagnostic::immediate_range(line, mnemonic));
                    return None;
                }
                // stored as unsigned five bits, sign ignored
                Some(record(
                    make_ami_ri(opcode, rd, value as u8),
                    InsnClass::Ami,
                    pc,
                    line,
                ))
            }
        }
        Rule::identifier if !mov_imm8 => match labels.get(inner.as_str()) {
            Some(&off) => {
                if i64::from(off) > constants::MAX_IMM_AMI {
                    diagnostics.push(Diagnostic::label_range(line, inner.as_str()));
                    return None;
                }
                Some(record(
                    make_ami_ri(opcode, rd, off as u8),
                    InsnClass::Ami,
                    pc,
                    line,
                ))
            }
            None => Some(InstructionRecord {
                word: make_ami_ri(opcode, rd, 0),
                class: InsnClass::Ami,
                pc,
                pending: Some(inner.as_span()),
                line,
            }),
        },
        _ => {
            diagnostics.push(Diagnostic::operand(line, mnemonic));
            None
        }
    }
}

fn process_memory<'i>(
    opcode: Opcode,
    mnemonic: &str,
    operands: &[Pair<'i, Rule>],
    pc: u32,
    line: usize,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<InstructionRecord<'i>> {
    if operands.len() != 2 {
        diagnostics.push(Diagnostic::operand(line, mnemonic));
        return None;
    }

    let rd_pair = operands[0].clone().into_inner().next().unwrap();
    let mem_pair = operands[1].clone().into_inner().next().unwrap();
    if rd_pair.as_rule() != Rule::register || mem_pair.as_rule() != Rule::mem_operand {
        diagnostics.push(Diagnostic::operand(line, mnemonic));
        return None;
    }

    let rd = process_register(&rd_pair, mnemonic, line, diagnostics)?;

    let mut inner = mem_pair.into_inner();
    let imm_pair = inner.next().unwrap();
    let rs_pair = inner.next().unwrap();

    let value = process_immediate(&imm_pair, line, diagnostics)?;
    if value < constants::MIN_DISP_MEM || value > constants::MAX_DISP_MEM {
        diagnostics.push(Diagnostic::immediate_range(line, mnemonic));
        return None;
    }
    let rs = process_register(&rs_pair, mnemonic, line, diagnostics)?;

    Some(record(
        make_mem(opcode, rd, rs, value as i8),
        InsnClass::Mem,
        pc,
        line,
    ))
}

fn process_register(
    pair: &Pair<Rule>,
    mnemonic: &str,
    line: usize,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<RegisterId> {
    debug_assert_matches!(pair.as_rule(), Rule::register);

    let name = pair.as_str()[1..].to_uppercase();
    match name.parse() {
        Ok(id) => Some(id),
        Err(_) => {
            diagnostics.push(Diagnostic::operand(line, mnemonic));
            None
        }
    }
}

fn process_immediate(
    pair: &Pair<Rule>,
    line: usize,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<i64> {
    debug_assert_matches!(pair.as_rule(), Rule::immediate);

    let number = pair.clone().into_inner().next().unwrap();
    match parse_int(number.as_str()) {
        Ok(value) => Some(value),
        Err(_) => {
            diagnostics.push(Diagnostic::invalid_number(line, number.as_str()));
            None
        }
    }
}
