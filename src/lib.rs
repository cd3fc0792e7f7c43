//! # netform - Network Identifier Validation & Port Safety
//!
//! netform is the client-side validation engine for a DNS-filtering
//! control panel: it classifies user-supplied text as a URL, hostname,
//! IPv4/IPv6 address, or MAC address, and flags network ports that are
//! unsafe for browser-initiated connections or that match well-known
//! protocol ports.
//!
//! ## Features
//!
//! - **Anchored Grammars**: whole-string pattern definitions for each
//!   identifier form, compiled once into process-lifetime statics
//! - **Stateless Validation**: pure predicates with no retained match
//!   state, safe for concurrent callers without locking
//! - **Port Safety**: O(1) membership test against the browser-blocked
//!   port set, plus DNS/HTTP/HTTPS well-known flagging
//! - **Static Catalogs**: blockable services, UI languages, status
//!   colors, and form timing constants
//! - **Multiple Output Formats**: plain text and JSON
//!
//! ## Example Usage
//!
//! ```rust
//! use netform::validator::{classify, is_valid_ipv4, IdentifierKind};
//! use netform::ports::{is_unsafe_port, standard_port_name, StandardPort};
//!
//! assert!(is_valid_ipv4("192.168.1.1"));
//! assert!(classify("192.168.1.1").contains(&IdentifierKind::Ipv4));
//!
//! // 53 is simultaneously browser-blocked and well-known DNS.
//! assert!(is_unsafe_port(53));
//! assert_eq!(standard_port_name(53), Some(StandardPort::Dns));
//! ```
//!
//! ## Architecture
//!
//! - [`grammar`] - Anchored pattern definitions, composed from shared
//!   sub-rules
//! - [`validator`] - Identifier kinds and validation/classification
//!   predicates
//! - [`ports`] - Port domain type and the safety classifier
//! - [`catalog`] - Static configuration tables
//! - [`config`] - Persisted CLI settings
//! - [`error`] - Typed errors for the parsing and CLI boundaries
//! - [`output`] - Report structs and formatting utilities

mod grammar;

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod ports;
pub mod validator;

// Re-export commonly used types
pub use error::{CliError, ConfigError, PortError};
pub use ports::{is_unsafe_port, standard_port_name, Port, StandardPort};
pub use validator::{classify, validate, IdentifierKind, ValidationOutcome};
