pub mod adapter;
pub mod app;
pub mod client;
