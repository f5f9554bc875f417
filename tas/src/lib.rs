//! Two-pass symbolic assembler for the [tangle](../tangle/index.html)
//! processor.
//!
//! The main entry point is [`assemble`](fn.assemble.html), which takes
//! Tangle assembly source and returns the encoded instruction words in
//! program order, or every [`Diagnostic`](struct.Diagnostic.html) the
//! two passes collected. The `tas` binary writes the words out as a
//! hex image through the [thex](../thex/index.html) crate.
//!
//! Parsing is implemented with [pest]; the grammar lives in
//! `tas.pest`.
//!
//! # Assembly language
//!
//! The source is line-oriented ASCII. Each line is one of: empty,
//! comment, directive, label definition, or instruction (optionally
//! preceded by labels and followed by a comment). `#` and `;` start a
//! comment running to the end of the line, and `.` does the same, so
//! directive lines are ignored wholesale.
//!
//! Registers are written `%r0`..`%r7` (case-insensitive). `%r0` always
//! reads zero; `%r7` doubles as the link register of `jal`. Immediates
//! are written `$n` with the customary bases: `$0x1F`, `$017`, `$-4`.
//! Labels are defined with `name:` and match `[A-Za-z0-9_+-]+`;
//! label names are case-sensitive.
//!
//! Quick reference for all mnemonics:
//!
//! Mnemonic | Short Description                  | Syntax
//! ---------|------------------------------------|----------------------
//! `nop`    | No-op                              | `nop`
//! `or`     | Bitwise or                         | `or rd, (rs \| $imm \| label)`
//! `and`    | Bitwise and                        | `and rd, (rs \| $imm \| label)`
//! `xor`    | Bitwise exclusive-or               | `xor rd, (rs \| $imm \| label)`
//! `sll`    | Shift left logical                 | `sll rd, (rs \| $imm)`
//! `slr`    | Shift right logical                | `slr rd, (rs \| $imm)`
//! `not`    | Bitwise complement                 | `not rd`
//! `neg`    | Two's complement negation          | `neg rd`
//! `add`    | Addition                           | `add rd, (rs \| $imm \| label)`
//! `sub`    | Subtraction                        | `sub rd, (rs \| $imm \| label)`
//! `mov`    | Move                               | `mov rd, (rs \| $imm \| label)`
//! `movhi`  | Load high byte                     | `movhi rd, $imm`
//! `movlo`  | Or low byte in                     | `movlo rd, $imm`
//! `cmp`    | Compare (flags only)               | `cmp rd, (rs \| $imm \| label)`
//! `je`     | Jump if equal                      | `je (rd \| $disp \| label)`
//! `jne`    | Jump if not equal                  | `jne (rd \| $disp \| label)`
//! `jgs`    | Jump if greater, signed            | `jgs (rd \| $disp \| label)`
//! `jgu`    | Jump if greater, unsigned          | `jgu (rd \| $disp \| label)`
//! `jls`    | Jump if less, signed               | `jls (rd \| $disp \| label)`
//! `jlu`    | Jump if less, unsigned             | `jlu (rd \| $disp \| label)`
//! `jges`   | Jump if greater or equal, signed   | `jges (rd \| $disp \| label)`
//! `jgeu`   | Jump if greater or equal, unsigned | `jgeu (rd \| $disp \| label)`
//! `jles`   | Jump if less or equal, signed      | `jles (rd \| $disp \| label)`
//! `jleu`   | Jump if less or equal, unsigned    | `jleu (rd \| $disp \| label)`
//! `j`      | Jump                               | `j (rd \| $disp \| label)`
//! `jal`    | Jump and link through r7           | `jal (rd \| $disp \| label)`
//! `lw`     | Load word                          | `lw rd, $disp(rs)`
//! `sw`     | Store word                         | `sw rd, $disp(rs)`
//!
//! Branches take either a register (the absolute target; `%r0` is
//! reserved to mark the immediate form) or a displacement in
//! instruction words, as `$n` or as a label. AMI immediates live in
//! −16..=31 and are stored unsigned; `movhi`/`movlo` immediates live
//! in −128..=255; memory displacements are signed −16..=15; branch
//! displacements are signed −128..=127.
//!
//! Every diagnostic is fatal: the assembler keeps going to report as
//! much as it can, but produces no output once anything fired.
//!
//! [pest]: https://docs.rs/pest/

mod error;
mod instructions;
mod int_util;
mod labels;
mod parser;


use log::debug;
use parser::{Rule, TasParser};
use pest::iterators::Pair;
use pest::{Parser, Span};

pub use crate::error::{Diagnostic, DiagnosticKind};
pub use crate::instructions::{InsnClass, InstructionRecord};
pub use crate::labels::LabelMap;

use tangle::Word;

/// One full 16-bit program counter space.
const MAX_PROGRAM_WORDS: usize = 1 << 16;

pub(crate) fn span_line(span: &Span) -> usize {
    span.start_pos().line_col().0
}

/// Assembles a complete source file into instruction words in program
/// order.
///
/// # Errors
/// Returns all collected diagnostics, pass-1 ones in source-line
/// order followed by pass-2 ones in program-word order.
pub fn assemble(input: &str) -> Result<Vec<Word>, Vec<Diagnostic>> {
    let mut diagnostics = Vec::new();

    let (mut records, labels) = match parse(input) {
        Ok(program) => instructions::process_program(program, &mut diagnostics),
        Err(err) => {
            diagnostics.push(Diagnostic::from_pest(&err));
            (Vec::new(), LabelMap::new())
        }
    };

    if records.len() > MAX_PROGRAM_WORDS {
        diagnostics.push(Diagnostic::program_too_large(records.len()));
    }

    debug!(
        target: "tas",
        "pass 1: {} instructions, {} labels, {} diagnostics",
        records.len(),
        labels.len(),
        diagnostics.len()
    );

    labels::relocate(&mut records[..], &labels, &mut diagnostics);

    debug!(target: "tas", "pass 2 done, {} diagnostics total", diagnostics.len());

    if diagnostics.is_empty() {
        Ok(records.into_iter().map(|record| record.word).collect())
    } else {
        Err(diagnostics)
    }
}

fn parse(input: &str) -> Result<Pair<Rule>, pest::error::Error<Rule>> {
    Ok(TasParser::parse(Rule::program, input)?.next().unwrap())
}
