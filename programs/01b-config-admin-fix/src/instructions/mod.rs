pub mod initialize_config;
pub mod transfer_admin;
pub mod update_config;

pub use initialize_config::*;
pub use transfer_admin::*;
pub use update_config::*;
