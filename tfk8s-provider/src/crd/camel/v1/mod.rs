pub mod common;
pub mod integration;
pub mod kamelet;
