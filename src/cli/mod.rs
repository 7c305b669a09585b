pub mod input;
pub mod logger;
pub mod output;
