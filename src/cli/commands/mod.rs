mod command_result;
pub mod init;
pub mod run;
pub mod scan;

pub use command_result::*;
