use super::*;

#[test]
fn taken_on_equality() {
    cpu_execute! {
        [
            instr_ri!(CMP, R0, 0),
            instr_bi!(JLES, 2),
            instr_ri!(MOV, R2, 1),
            nop!(),
        ],
        [] => [],
        9,
        3
    };
}

#[test]
fn taken_when_less_signed() {
    cpu_execute! {
        [
            instr_ri!(CMP, R1, 2),
            instr_bi!(JLES, 2),
            instr_ri!(MOV, R2, 1),
            nop!(),
        ],
        [R1 = 1] => [],
        9,
        3
    };
}

#[test]
fn not_taken_when_greater() {
    cpu_execute! {
        [
            instr_ri!(CMP, R1, 1),
            instr_bi!(JLES, 2),
            instr_ri!(MOV, R2, 1),
        ],
        [R1 = 2] => [R2 = 1],
        11,
        3
    };
}
