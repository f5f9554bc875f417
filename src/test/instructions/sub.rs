use super::*;

#[test]
fn reg_imm() {
    cpu_execute! {
        [instr_ri!(SUB, R1, 4)],
        [R1 = 16] => [R1 = 12],
        5,
        1
    };
}

#[test]
fn reg_reg() {
    cpu_execute! {
        [instr_rr!(SUB, R1, R2)],
        [R1 = 10, R2 = 3] => [R1 = 7],
        5,
        1
    };
}

#[test]
fn borrow() {
    let (processor, _) = cpu_run! {
        [instr_rr!(SUB, R1, R2)],
        [R1 = 1, R2 = 2] => [R1 = 0xFFFF],
        5,
        1
    };
    assert!(processor.flags().cf);
    assert!(processor.flags().sf);
    assert!(!processor.flags().of);
}

#[test]
fn signed_overflow() {
    let (processor, _) = cpu_run! {
        [instr_ri!(SUB, R1, 1)],
        [R1 = 0x8000] => [R1 = 0x7FFF],
        5,
        1
    };
    assert!(processor.flags().of);
    assert!(!processor.flags().sf);
}
