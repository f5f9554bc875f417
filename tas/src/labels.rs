use crate::error::Diagnostic;
use crate::instructions::{InsnClass, InstructionRecord};
use crate::span_line;
use pest::Span;
use std::collections::HashMap;
use tangle::{constants, Word};

/// Symbol table built during pass 1: label name to program-word
/// offset. Keys borrow from the source text.
pub type LabelMap<'i> = HashMap<&'i str, u32>;

pub fn define<'i>(
    labels: &mut LabelMap<'i>,
    name: Span<'i>,
    off: u32,
    diagnostics: &mut Vec<Diagnostic>,
) {
    let text = name.as_str();
    if labels.insert(text, off).is_some() {
        diagnostics.push(Diagnostic::duplicate_label(span_line(&name), text));
    }
}

/// Pass 2: patches every record that still carries a label. Branches
/// get the displacement `off - pc`, AMI immediates get `off` directly;
/// the range checks run again before the immediate is ORed in.
pub fn relocate<'i>(
    records: &mut [InstructionRecord<'i>],
    labels: &LabelMap<'i>,
    diagnostics: &mut Vec<Diagnostic>,
) {
    for record in records.iter_mut() {
        let pending = match record.pending.take() {
            Some(span) => span,
            None => continue,
        };
        let name = pending.as_str();

        let off = match labels.get(name) {
            Some(&off) => off,
            None => {
                diagnostics.push(Diagnostic::undefined_label(record.line, name));
                continue;
            }
        };

        match record.class {
            InsnClass::Bra => {
                let disp = i64::from(off) - i64::from(record.pc);
                if disp < constants::MIN_DISP_BRANCH || disp > constants::MAX_DISP_BRANCH {
                    diagnostics.push(Diagnostic::branch_range(record.line));
                    continue;
                }
                record.word |= Word::from(disp as i8 as u8) & constants::IMM8_MASK;
            }
            InsnClass::Ami => {
                if i64::from(off) > constants::MAX_IMM_AMI {
                    diagnostics.push(Diagnostic::label_range(record.line, name));
                    continue;
                }
                record.word |= (off as Word) & constants::IMM5_MASK;
            }
            // memory operands have no label form
            InsnClass::Mem => unreachable!(),
        }
    }
}
