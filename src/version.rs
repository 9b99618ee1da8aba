use crate::error::{Error, Result};

/// Protocol versions the record layer can advertise, SSL 3.0 through TLS 1.2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtocolVersion {
    Ssl30,
    Tls10,
    Tls11,
    Tls12,
}

impl ProtocolVersion {
    /// Resolve an abstract version selector (30, 10, 11, 12) to a version.
    /// Any unrecognized selector falls back to SSL 3.0.
    pub fn from_selector(selector: u16) -> Self {
        match selector {
            10 => ProtocolVersion::Tls10,
            11 => ProtocolVersion::Tls11,
            12 => ProtocolVersion::Tls12,
            30 => ProtocolVersion::Ssl30,
            _ => ProtocolVersion::Ssl30,
        }
    }

    /// The two-byte big-endian value put on the wire.
    pub fn wire(self) -> u16 {
        match self {
            ProtocolVersion::Ssl30 => 0x0300,
            ProtocolVersion::Tls10 => 0x0301,
            ProtocolVersion::Tls11 => 0x0302,
            ProtocolVersion::Tls12 => 0x0303,
        }
    }
}

impl TryFrom<u16> for ProtocolVersion {
    type Error = Error;

    fn try_from(value: u16) -> Result<Self> {
        match value {
            0x0300 => Ok(ProtocolVersion::Ssl30),
            0x0301 => Ok(ProtocolVersion::Tls10),
            0x0302 => Ok(ProtocolVersion::Tls11),
            0x0303 => Ok(ProtocolVersion::Tls12),
            _ => Err(Error::ParseError(format!(
                "Invalid ProtocolVersion value: {:#06x}",
                value
            ))),
        }
    }
}
