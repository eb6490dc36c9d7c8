//! Reader link transport
//!
//! The badge reader is wired through an RS-232↔TCP bridge, so the link
//! is a plain TCP stream: buffered line reads in, single ack bytes out.
//! [`ReaderLink`] keeps the gateway loop testable against any transport.

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};

use crate::utils::{AppError, AppResult};

/// One connection to the badge reader
///
/// Methods take `&mut self`: the link is an owned resource of a single
/// gateway session, not a shared handle.
#[async_trait]
pub trait ReaderLink: Send {
    /// Read one newline-terminated frame (returned without the newline)
    async fn read_frame(&mut self) -> AppResult<String>;

    /// Write a single ack byte, no terminator
    async fn write_ack(&mut self, ack: u8) -> AppResult<()>;

    /// Peer address, for log lines
    fn peer_addr(&self) -> Option<String>;
}

/// TCP implementation of [`ReaderLink`]
#[derive(Debug)]
pub struct TcpReaderLink {
    reader: BufReader<OwnedReadHalf>,
    writer: OwnedWriteHalf,
    addr: Option<String>,
}

impl TcpReaderLink {
    /// Connect to the reader bridge
    pub async fn connect(addr: &str) -> AppResult<Self> {
        let stream = TcpStream::connect(addr)
            .await
            .map_err(|e| AppError::internal(format!("Reader connect failed: {e}")))?;
        Ok(Self::from_stream(stream))
    }

    /// Wrap an already-established stream
    pub fn from_stream(stream: TcpStream) -> Self {
        let addr = stream.peer_addr().ok().map(|a| a.to_string());
        let (reader, writer) = stream.into_split();
        Self {
            reader: BufReader::new(reader),
            writer,
            addr,
        }
    }
}

#[async_trait]
impl ReaderLink for TcpReaderLink {
    async fn read_frame(&mut self) -> AppResult<String> {
        let mut line = String::new();
        let n = self
            .reader
            .read_line(&mut line)
            .await
            .map_err(|e| AppError::internal(format!("Reader read failed: {e}")))?;
        if n == 0 {
            return Err(AppError::ReaderDisconnected);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    async fn write_ack(&mut self, ack: u8) -> AppResult<()> {
        self.writer
            .write_all(&[ack])
            .await
            .map_err(|e| AppError::internal(format!("Reader write failed: {e}")))?;
        self.writer
            .flush()
            .await
            .map_err(|e| AppError::internal(format!("Reader flush failed: {e}")))?;
        Ok(())
    }

    fn peer_addr(&self) -> Option<String> {
        self.addr.clone()
    }
}
