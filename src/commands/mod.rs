pub mod add;
pub mod config;
pub mod copy;
pub mod edit;
pub mod export;
pub mod login;
pub mod logout;
pub mod profile;
pub mod rm;
pub mod slots;
pub mod users;
pub mod whoami;
