use super::*;

#[test]
fn advances_pc_and_nothing_else() {
    cpu_execute! {
        [nop!(), nop!()],
        [R1 = 7] => [],
        8,
        2
    };
}

#[test]
fn is_neg_on_the_zero_register() {
    assert_eq!(nop!(), make_ami_ri(Opcode::NEG, RegisterId::R0, 0));
    assert_eq!(nop!(), 0x3000);
}

#[test]
fn leaves_flags_alone() {
    let (processor, _) = cpu_run! {
        [
            instr_ri!(CMP, R0, 0), // ZF
            nop!(),
        ],
        [] => [],
        8,
        2
    };
    assert!(processor.flags().zf);
}
