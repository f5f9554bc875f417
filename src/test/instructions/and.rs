use super::*;

#[test]
fn reg_imm() {
    cpu_execute! {
        [instr_ri!(AND, R1, 3)],
        [R1 = 6] => [R1 = 2],
        5,
        1
    };
}

#[test]
fn reg_reg() {
    cpu_execute! {
        [instr_rr!(AND, R1, R2)],
        [R1 = 0xFF00, R2 = 0x0FF0] => [R1 = 0x0F00],
        5,
        1
    };
}

#[test]
fn zero_result_sets_zf() {
    let (processor, _) = cpu_run! {
        [instr_ri!(AND, R1, 0)],
        [R1 = 0xFFFF] => [R1 = 0],
        5,
        1
    };
    assert!(processor.flags().zf);
    assert!(!processor.flags().cf);
}
