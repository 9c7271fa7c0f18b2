pub mod a001_account;
pub mod a002_role;
pub mod a003_policy;
pub mod a004_base_policy;
pub mod a005_partner;
pub mod a006_data_source;
pub mod a007_claim;
pub mod a008_payment;
