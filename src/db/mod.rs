// src/db/mod.rs
//
// Database module
//
// Provides:
// - Connection pooling
// - Schema initialization
// - Timestamp adapter for stored documents

pub mod connection;
pub mod migrations;
pub mod timestamp;

pub use connection::{
    create_connection_pool, create_connection_pool_at, create_test_connection, get_connection,
    get_database_path, ConnectionPool, PooledConn,
};

pub use migrations::{
    get_database_stats, initialize_database, verify_database_integrity, DatabaseStats,
};
