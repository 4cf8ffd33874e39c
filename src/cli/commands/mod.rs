pub mod announce;
pub mod init;
pub mod member;
pub mod poll;
pub mod remind;
pub mod report;
pub mod setup;
pub mod team;
