//! ユースケース層

pub mod analyze;
