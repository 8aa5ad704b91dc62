// Adapters layer: concrete implementations of the domain ports.

pub mod pack_repository;

pub use pack_repository::StaticPackRepository;
