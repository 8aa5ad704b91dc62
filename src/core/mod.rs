pub mod server;

pub use server::{shutdown_signal, OrderServer};
