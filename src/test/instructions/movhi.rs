use super::*;

#[test]
fn loads_the_high_byte() {
    cpu_execute! {
        [instr_mov!(MOVHI, R1, 0xAB)],
        [] => [R1 = 0xAB00],
        5,
        1
    };
}

#[test]
fn replaces_the_whole_register() {
    cpu_execute! {
        [instr_mov!(MOVHI, R1, 0x12)],
        [R1 = 0xFFFF] => [R1 = 0x1200],
        5,
        1
    };
}

#[test]
fn leaves_flags_alone() {
    let (processor, _) = cpu_run! {
        [
            instr_ri!(CMP, R0, 1), // CF
            instr_mov!(MOVHI, R1, 0xAB),
        ],
        [] => [R1 = 0xAB00],
        8,
        2
    };
    assert!(processor.flags().cf);
}
