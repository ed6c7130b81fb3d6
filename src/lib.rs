//! # Internet.bs SDK for Rust
//!
//! A Rust client for the Internet.bs registrar API: domain availability,
//! registration and updates, name server (host) management and DNS records.
//!
//! ## Quick Start
//!
//! ```no_run
//! use internetbs_sdk_rs::InternetBsClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // No credentials: talks to the sandbox with its public test account
//!     let client = InternetBsClient::new(None, None)?;
//!
//!     // Check a domain
//!     let available = client.domain_check("example-for-sale.com").await?;
//!     println!("Available: {}", available);
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod contact;
pub mod dns;
pub mod error;
pub mod models;

// Re-exports
pub use client::{DEFAULT_TIMEOUT, InternetBsClient};
pub use contact::{ContactDataGenerator, make_fake_contact_data_with_email};
pub use dns::DnsRecordType;
pub use error::{RegistrarError, RegistrarResult};
pub use models::{Credentials, Environment, Params};
