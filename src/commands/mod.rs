pub mod catalog;
pub mod init;
pub mod interests;
pub mod recommend;
