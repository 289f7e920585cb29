pub mod constants;
pub mod demo;
pub mod logic;
