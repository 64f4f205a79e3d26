//! # Printer Transport Layer
//!
//! Byte sinks the printer session can write to.
//!
//! The session is generic over [`std::io::Write`], so anything ordered
//! and blocking works: [`serial::SerialTransport`] in production, a
//! `Vec<u8>` in tests. Flushing and closing are the caller's
//! responsibility; the encoder core never does either.

pub mod serial;

pub use serial::SerialTransport;
