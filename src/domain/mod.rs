// Domain layer: pack/order model, the allocation algorithm and the ports it talks through.
// No transport or storage concerns here.

pub mod allocator;
pub mod error;
pub mod model;
pub mod ports;
pub mod service;

pub use allocator::allocate;
pub use error::{CatalogError, OrderError};
pub use model::{Order, OrderRow, Pack};
pub use ports::{OrderCreator, PackRepository};
pub use service::OrderService;
