use super::*;

#[test]
fn forward_displacement() {
    cpu_execute! {
        [
            instr_bi!(J, 3),
            instr_ri!(MOV, R1, 1),
            instr_ri!(MOV, R1, 2),
            nop!(),
        ],
        [] => [],
        6,
        3
    };
}

#[test]
fn backward_displacement_wraps() {
    // jumping -2 from address 0 lands at 62 in the 64-word space
    cpu_execute! {
        [instr_bi!(J, -2)],
        [] => [],
        6,
        62
    };
}

#[test]
fn jump_to_self_spins() {
    cpu_execute! {
        [instr_bi!(J, 0)],
        [] => [],
        2 + 4 * 5,
        0
    };
}

#[test]
fn register_form_is_absolute() {
    cpu_execute! {
        [instr_br!(J, R1)],
        [R1 = 9] => [],
        6,
        9
    };
}
