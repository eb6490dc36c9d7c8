//! Reader gateway
//!
//! Integration with the physical badge reader. The reader bridge speaks
//! newline-terminated ASCII frames (`"Auth:<hex>"`) and expects a single
//! ack byte back (`y`/`n`), see [`shared::frame`].
//!
//! The gateway owns exactly one link at a time; on any read/write fault
//! the link is dropped and a fresh connection is attempted after a fixed
//! backoff, indefinitely — this is an unattended daemon that self-heals.

pub mod gateway;
pub mod link;

pub use gateway::ReaderGateway;
pub use link::{ReaderLink, TcpReaderLink};
