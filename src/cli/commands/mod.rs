pub mod check;
mod command_result;
pub mod context;
pub mod export;
pub mod helper;
pub mod init;
pub mod normalize;
pub mod resolve;
pub mod stats;

pub use command_result::*;
