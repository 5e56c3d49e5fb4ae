pub mod cli;
pub mod error;
pub mod form;
pub mod github;
pub mod health;
pub mod models;
pub mod pool;
pub mod server;
pub mod showcase;
pub mod store;
pub mod types;
