use super::*;

#[test]
fn taken_when_strictly_greater_unsigned() {
    cpu_execute! {
        [
            instr_ri!(CMP, R1, 1),
            instr_bi!(JGU, 2),
            instr_ri!(MOV, R2, 1),
            nop!(),
        ],
        [R1 = 2] => [],
        9,
        3
    };
}

#[test]
fn not_taken_on_borrow() {
    cpu_execute! {
        [
            instr_ri!(CMP, R1, 2),
            instr_bi!(JGU, 2),
            instr_ri!(MOV, R2, 1),
        ],
        [R1 = 1] => [R2 = 1],
        11,
        3
    };
}
