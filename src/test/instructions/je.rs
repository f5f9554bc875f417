use super::*;

#[test]
fn taken_on_zero() {
    cpu_execute! {
        [
            instr_ri!(CMP, R0, 0),
            instr_bi!(JE, 2),
            instr_ri!(MOV, R1, 1),
            nop!(),
        ],
        [] => [],
        9,
        3
    };
}

#[test]
fn not_taken_falls_through() {
    cpu_execute! {
        [
            instr_ri!(CMP, R0, 1),
            instr_bi!(JE, 2),
            instr_ri!(MOV, R1, 1),
        ],
        [] => [R1 = 1],
        11,
        3
    };
}
