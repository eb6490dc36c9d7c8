//! Reader frame protocol
//!
//! Wire format between the gate server and the badge reader bridge:
//! newline-terminated ASCII frames inbound (`"<cmd>:<badge_hexcode>"`),
//! a single ack byte outbound (`y` granted / `n` denied, no terminator).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ack byte sent back to the reader when access is granted
pub const ACK_GRANTED: u8 = b'y';

/// Ack byte sent back to the reader when access is denied
pub const ACK_DENIED: u8 = b'n';

/// Commands the reader firmware emits
///
/// `nAuth` is accepted and routed identically to `Auth`; readers in the
/// field emit both spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReaderCommand {
    Auth,
    NAuth,
}

impl ReaderCommand {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReaderCommand::Auth => "Auth",
            ReaderCommand::NAuth => "nAuth",
        }
    }
}

impl fmt::Display for ReaderCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReaderCommand {
    type Err = FrameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Auth" => Ok(ReaderCommand::Auth),
            "nAuth" => Ok(ReaderCommand::NAuth),
            other => Err(FrameError::UnknownCommand(other.to_string())),
        }
    }
}

/// Frame parse errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrameError {
    #[error("Unknown reader command: '{0}'")]
    UnknownCommand(String),

    #[error("Malformed frame: '{0}'")]
    Malformed(String),
}

/// One decoded scan frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanFrame {
    pub command: ReaderCommand,
    /// Badge hex-code, normalized to uppercase
    pub badge_hex: String,
}

impl ScanFrame {
    pub fn new(command: ReaderCommand, badge_hex: impl Into<String>) -> Self {
        Self {
            command,
            badge_hex: normalize_hex(&badge_hex.into()),
        }
    }
}

impl FromStr for ScanFrame {
    type Err = FrameError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (cmd, badge) = line
            .split_once(':')
            .ok_or_else(|| FrameError::Malformed(line.to_string()))?;
        let command = cmd.parse::<ReaderCommand>()?;
        let badge = badge.trim();
        if badge.is_empty() {
            return Err(FrameError::Malformed(line.to_string()));
        }
        Ok(Self {
            command,
            badge_hex: normalize_hex(badge),
        })
    }
}

impl fmt::Display for ScanFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.command, self.badge_hex)
    }
}

/// Normalize a badge hex-code for matching (trim + uppercase)
pub fn normalize_hex(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_auth_frame() {
        let frame: ScanFrame = "Auth:1A2B".parse().unwrap();
        assert_eq!(frame.command, ReaderCommand::Auth);
        assert_eq!(frame.badge_hex, "1A2B");
    }

    #[test]
    fn test_parse_nauth_frame() {
        // nAuth decodes like Auth, only the command tag differs
        let frame: ScanFrame = "nAuth:FFEE".parse().unwrap();
        assert_eq!(frame.command, ReaderCommand::NAuth);
        assert_eq!(frame.badge_hex, "FFEE");
    }

    #[test]
    fn test_parse_normalizes_badge_case() {
        let frame: ScanFrame = "Auth:ab9f".parse().unwrap();
        assert_eq!(frame.badge_hex, "AB9F");
    }

    #[test]
    fn test_parse_trims_line_ending() {
        let frame: ScanFrame = "Auth:1A2B\r\n".parse().unwrap();
        assert_eq!(frame.badge_hex, "1A2B");
    }

    #[test]
    fn test_unknown_command_rejected() {
        let err = "Bogus:XYZ".parse::<ScanFrame>().unwrap_err();
        assert_eq!(err, FrameError::UnknownCommand("Bogus".to_string()));
    }

    #[test]
    fn test_frame_without_separator_rejected() {
        let err = "Auth1A2B".parse::<ScanFrame>().unwrap_err();
        assert!(matches!(err, FrameError::Malformed(_)));
    }

    #[test]
    fn test_empty_badge_rejected() {
        let err = "Auth:".parse::<ScanFrame>().unwrap_err();
        assert!(matches!(err, FrameError::Malformed(_)));
    }

    #[test]
    fn test_ack_bytes() {
        assert_eq!(ACK_GRANTED, b'y');
        assert_eq!(ACK_DENIED, b'n');
    }
}
