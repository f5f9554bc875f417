use super::*;

#[test]
fn taken_on_nonzero() {
    cpu_execute! {
        [
            instr_ri!(CMP, R0, 1),
            instr_bi!(JNE, 2),
            instr_ri!(MOV, R1, 1),
            nop!(),
        ],
        [] => [],
        9,
        3
    };
}

#[test]
fn not_taken_on_zero() {
    cpu_execute! {
        [
            instr_ri!(CMP, R0, 0),
            instr_bi!(JNE, 2),
            instr_ri!(MOV, R1, 1),
        ],
        [] => [R1 = 1],
        11,
        3
    };
}

#[test]
fn register_form_jumps_to_the_absolute_target() {
    cpu_execute! {
        [
            instr_ri!(CMP, R0, 1),
            instr_br!(JNE, R1),
        ],
        [R1 = 5] => [],
        9,
        5
    };
}
