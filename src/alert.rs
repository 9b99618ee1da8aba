use crate::error::{Error, Result};
use crate::record::{self, ContentType};
use crate::version::ProtocolVersion;
use crate::wire;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    Warning = 1,
    Fatal = 2,
}

/// Alert descriptions defined for SSL 3.0 through TLS 1.2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertDescription {
    CloseNotify = 0,
    UnexpectedMessage = 10,
    BadRecordMac = 20,
    DecryptionFailed = 21,
    RecordOverflow = 22,
    DecompressionFailure = 30,
    HandshakeFailure = 40,
    NoCertificate = 41,
    BadCertificate = 42,
    UnsupportedCertificate = 43,
    CertificateRevoked = 44,
    CertificateExpired = 45,
    CertificateUnknown = 46,
    IllegalParameter = 47,
    UnknownCa = 48,
    AccessDenied = 49,
    DecodeError = 50,
    DecryptError = 51,
    ExportRestriction = 60,
    ProtocolVersion = 70,
    InsufficientSecurity = 71,
    InternalError = 80,
    UserCancelled = 90,
    NoRenegotiation = 100,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alert {
    pub level: AlertLevel,
    pub description: AlertDescription,
}

impl Alert {
    pub fn new(level: AlertLevel, description: AlertDescription) -> Self {
        Self { level, description }
    }

    /// The fatal handshake_failure alert a caller sends when no offered
    /// cipher suite is acceptable.
    pub fn handshake_failure() -> Self {
        Self::new(AlertLevel::Fatal, AlertDescription::HandshakeFailure)
    }

    pub fn parse(data: &[u8], pos: &mut usize) -> Result<Self> {
        let level_byte = wire::read_u8(data, pos)?;
        let level = match level_byte {
            1 => AlertLevel::Warning,
            2 => AlertLevel::Fatal,
            _ => return Err(Error::ParseError(format!("Invalid alert level: {}", level_byte))),
        };

        let description_byte = wire::read_u8(data, pos)?;
        let description = match description_byte {
            0 => AlertDescription::CloseNotify,
            10 => AlertDescription::UnexpectedMessage,
            20 => AlertDescription::BadRecordMac,
            21 => AlertDescription::DecryptionFailed,
            22 => AlertDescription::RecordOverflow,
            30 => AlertDescription::DecompressionFailure,
            40 => AlertDescription::HandshakeFailure,
            41 => AlertDescription::NoCertificate,
            42 => AlertDescription::BadCertificate,
            43 => AlertDescription::UnsupportedCertificate,
            44 => AlertDescription::CertificateRevoked,
            45 => AlertDescription::CertificateExpired,
            46 => AlertDescription::CertificateUnknown,
            47 => AlertDescription::IllegalParameter,
            48 => AlertDescription::UnknownCa,
            49 => AlertDescription::AccessDenied,
            50 => AlertDescription::DecodeError,
            51 => AlertDescription::DecryptError,
            60 => AlertDescription::ExportRestriction,
            70 => AlertDescription::ProtocolVersion,
            71 => AlertDescription::InsufficientSecurity,
            80 => AlertDescription::InternalError,
            90 => AlertDescription::UserCancelled,
            100 => AlertDescription::NoRenegotiation,
            _ => return Err(Error::ParseError(format!(
                "Invalid alert description: {}",
                description_byte
            ))),
        };

        Ok(Self { level, description })
    }

    pub fn serialize(&self) -> Vec<u8> {
        vec![self.level as u8, self.description as u8]
    }

    pub fn is_fatal(&self) -> bool {
        self.level == AlertLevel::Fatal
    }

    /// Frame this alert as a standalone record ready to write to the peer.
    pub fn to_record(&self, version: ProtocolVersion) -> Vec<u8> {
        record::frame(ContentType::Alert, version, &self.serialize())
    }
}
