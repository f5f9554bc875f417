use super::*;

#[test]
fn ors_the_low_byte_in() {
    cpu_execute! {
        [instr_mov!(MOVLO, R1, 0xCD)],
        [R1 = 0xAB00] => [R1 = 0xABCD],
        5,
        1
    };
}

#[test]
fn does_not_clear_existing_low_bits() {
    cpu_execute! {
        [instr_mov!(MOVLO, R1, 0x0F)],
        [R1 = 0x00F0] => [R1 = 0x00FF],
        5,
        1
    };
}

#[test]
fn leaves_flags_alone() {
    let (processor, _) = cpu_run! {
        [
            instr_ri!(CMP, R0, 0), // ZF
            instr_mov!(MOVLO, R1, 0xCD),
        ],
        [] => [R1 = 0xCD],
        8,
        2
    };
    assert!(processor.flags().zf);
}
