//! ユースケース層

pub mod redesign;
