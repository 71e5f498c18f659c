pub mod decision;
pub mod error;
pub mod reader;
pub mod repository;
#[cfg(feature = "storage-rocksdb")]
pub mod rocksdb;
pub mod station;
pub mod store;
pub mod writer;
