//! # CSV Storage Module
//!
//! File-based storage for the client table. The whole table lives in a
//! single `clients.csv` under the data directory, rewritten atomically on
//! every mutation.
//!
//! ## File Format
//!
//! ```csv
//! id,company,address,locality,created_at,updated_at
//! client::1754500000000,"Acme S.A.","Av. Siempre Viva 742",Rosario,2026-08-07T12:00:00+00:00,2026-08-07T12:00:00+00:00
//! ```

pub mod client_repository;
pub mod connection;

pub use client_repository::ClientRepository;
pub use connection::CsvConnection;
