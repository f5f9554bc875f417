use super::*;

#[test]
fn reg_imm() {
    cpu_execute! {
        [instr_ri!(OR, R1, 5)],
        [R1 = 0x0100] => [R1 = 0x0105],
        5,
        1
    };
}

#[test]
fn reg_reg() {
    cpu_execute! {
        [instr_rr!(OR, R1, R2)],
        [R1 = 0x00F0, R2 = 0x000F] => [R1 = 0x00FF],
        5,
        1
    };
}

#[test]
fn sets_zero_and_sign_and_clears_the_rest() {
    let (processor, _) = cpu_run! {
        [
            instr_ri!(CMP, R0, 1), // dirties CF and SF
            instr_ri!(OR, R1, 0),
        ],
        [] => [],
        8,
        2
    };
    assert_eq!(
        processor.flags(),
        Flags {
            zf: true,
            sf: false,
            cf: false,
            of: false
        }
    );

    let (processor, _) = cpu_run! {
        [instr_ri!(OR, R1, 1)],
        [R1 = 0x8000] => [R1 = 0x8001],
        5,
        1
    };
    assert!(processor.flags().sf);
}
