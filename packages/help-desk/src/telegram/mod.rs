pub mod bot_worker;
pub mod client;
