pub mod check;
pub mod convert;
pub mod helper;
pub mod init;
