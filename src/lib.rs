pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod gateways;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{lambda::LambdaConfig, CatalogSource, ServerSettings};
pub use core::OrderServer;
pub use domain::{allocate, Order, OrderError, OrderRow, OrderService, Pack};
pub use utils::error::{AppError, Result};
