//! Database access: connection pooling and MySQL repository
//! implementations.

pub mod connection;
pub mod mysql;
