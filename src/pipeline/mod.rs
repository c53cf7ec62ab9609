pub mod stage1_rank;
pub mod stage2_compare;
pub mod stage3_report;
