use super::*;

#[test]
fn reg_imm() {
    cpu_execute! {
        [instr_ri!(ADD, R1, 31)],
        [R1 = 11] => [R1 = 42],
        5,
        1
    };
}

#[test]
fn reg_reg() {
    cpu_execute! {
        [instr_rr!(ADD, R2, R3)],
        [R2 = 42, R3 = 64] => [R2 = 106],
        5,
        1
    };
}

#[test]
fn imm_is_zero_extended() {
    // 0x1F is 31, never -1
    cpu_execute! {
        [instr_ri!(ADD, R1, 0x1F)],
        [R1 = 1] => [R1 = 32],
        5,
        1
    };
}

#[test]
fn carry_out() {
    let (processor, _) = cpu_run! {
        [instr_rr!(ADD, R1, R2)],
        [R1 = 0xFFFF, R2 = 1] => [R1 = 0],
        5,
        1
    };
    assert!(processor.flags().cf);
    assert!(processor.flags().zf);
    assert!(!processor.flags().of);
}

#[test]
fn signed_overflow() {
    let (processor, _) = cpu_run! {
        [instr_rr!(ADD, R1, R2)],
        [R1 = 0x7FFF, R2 = 1] => [R1 = 0x8000],
        5,
        1
    };
    assert!(processor.flags().of);
    assert!(processor.flags().sf);
    assert!(!processor.flags().cf);
}
