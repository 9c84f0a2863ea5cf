pub mod classify;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod menu;
pub mod models;
pub mod notify;
pub mod request;
pub mod response;
pub mod transport;
