pub mod a001_category;
pub mod a002_vip_number;
pub mod a003_number_pack;
pub mod a004_payment;
pub mod a005_refund;
