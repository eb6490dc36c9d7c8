//! Reader gateway loop
//!
//! Connect → read frames → authorize → ack, one scan at a time, strictly
//! in arrival order. Any link fault tears the connection down and the
//! gateway retries on a fixed backoff until shutdown.

use std::time::Duration;

use shared::frame::{ReaderCommand, ScanFrame};
use tokio_util::sync::CancellationToken;

use super::link::{ReaderLink, TcpReaderLink};
use crate::authz::ScanService;
use crate::core::Config;
use crate::utils::AppError;

pub struct ReaderGateway {
    addr: String,
    retry: Duration,
    scans: ScanService,
    shutdown: CancellationToken,
}

impl ReaderGateway {
    pub fn new(config: &Config, scans: ScanService, shutdown: CancellationToken) -> Self {
        Self {
            addr: config.reader_addr.clone(),
            retry: Duration::from_millis(config.reader_retry_ms),
            scans,
            shutdown,
        }
    }

    /// Run until the shutdown token fires
    pub async fn run(self) {
        tracing::info!("Reader gateway starting (reader at {})", self.addr);

        loop {
            if self.shutdown.is_cancelled() {
                break;
            }

            match TcpReaderLink::connect(&self.addr).await {
                Ok(mut link) => {
                    tracing::info!(peer = ?link.peer_addr(), "Reader connected");
                    let fault = self.session(&mut link).await;
                    if self.shutdown.is_cancelled() {
                        break;
                    }
                    tracing::warn!(error = %fault, "Reader link fault, reconnecting");
                }
                Err(e) => {
                    tracing::debug!(error = %e, "Reader connect failed");
                }
            }

            // Fixed backoff before the next attempt
            tokio::select! {
                _ = self.shutdown.cancelled() => break,
                _ = tokio::time::sleep(self.retry) => {}
            }
        }

        tracing::info!("Reader gateway stopped");
    }

    /// Drive one connection until it faults; returns the ending error
    async fn session(&self, link: &mut impl ReaderLink) -> AppError {
        loop {
            let line = tokio::select! {
                _ = self.shutdown.cancelled() => return AppError::ReaderDisconnected,
                read = link.read_frame() => match read {
                    Ok(line) => line,
                    Err(e) => return e,
                },
            };

            // Parse first, dispatch after
            let frame: ScanFrame = match line.parse() {
                Ok(frame) => frame,
                Err(e) => {
                    // Unrecognized frames are dropped without a reply
                    tracing::warn!(line = %line, error = %e, "Unknown reader frame");
                    continue;
                }
            };

            // Total match over the known commands; both spellings authorize
            match frame.command {
                ReaderCommand::Auth | ReaderCommand::NAuth => {}
            }

            let decision = match self.scans.evaluate(&frame.badge_hex).await {
                Ok(decision) => decision,
                Err(e) => {
                    // Fail closed: no ack, no event, keep the link
                    tracing::error!(badge = %frame.badge_hex, error = %e, "Authorization aborted, policy lookup failed");
                    continue;
                }
            };

            if let Err(e) = link.write_ack(decision.ack()).await {
                return e;
            }

            // Audit write happens after the ack has been delivered
            self.scans.record(&frame.badge_hex, decision.granted).await;
        }
    }
}
