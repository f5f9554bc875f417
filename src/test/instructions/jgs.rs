use super::*;

#[test]
fn taken_when_strictly_greater_signed() {
    cpu_execute! {
        [
            instr_ri!(CMP, R1, 1),
            instr_bi!(JGS, 2),
            instr_ri!(MOV, R2, 1),
            nop!(),
        ],
        [R1 = 2] => [],
        9,
        3
    };
}

#[test]
fn not_taken_on_equality() {
    cpu_execute! {
        [
            instr_ri!(CMP, R0, 0),
            instr_bi!(JGS, 2),
            instr_ri!(MOV, R2, 1),
        ],
        [] => [R2 = 1],
        11,
        3
    };
}

#[test]
fn not_taken_on_signed_overflow() {
    // -32768 - 1 overflows, SF != OF, so "greater" is false
    cpu_execute! {
        [
            instr_ri!(CMP, R1, 1),
            instr_bi!(JGS, 2),
            instr_ri!(MOV, R2, 1),
        ],
        [R1 = 0x8000] => [R2 = 1],
        11,
        3
    };
}
