pub mod contact;
pub mod gui;
pub mod home;
pub mod logger;
pub mod modal;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
