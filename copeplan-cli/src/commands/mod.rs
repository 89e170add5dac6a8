//! CLI Commands

pub mod backup;
pub mod init;
pub mod plan;
