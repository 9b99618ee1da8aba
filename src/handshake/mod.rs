use crate::error::{Error, Result};
use crate::wire;

pub mod certificate;
pub mod client_hello;
pub mod finished;
pub mod server_hello;
pub mod server_hello_done;

pub use finished::{FinishedProtection, NullProtection, PreMasterSecret};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandshakeType {
    HelloRequest = 0,
    ClientHello = 1,
    ServerHello = 2,
    Certificate = 11,
    ServerKeyExchange = 12,
    CertificateRequest = 13,
    ServerHelloDone = 14,
    CertificateVerify = 15,
    ClientKeyExchange = 16,
    Finished = 20,
}

impl TryFrom<u8> for HandshakeType {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(HandshakeType::HelloRequest),
            1 => Ok(HandshakeType::ClientHello),
            2 => Ok(HandshakeType::ServerHello),
            11 => Ok(HandshakeType::Certificate),
            12 => Ok(HandshakeType::ServerKeyExchange),
            13 => Ok(HandshakeType::CertificateRequest),
            14 => Ok(HandshakeType::ServerHelloDone),
            15 => Ok(HandshakeType::CertificateVerify),
            16 => Ok(HandshakeType::ClientKeyExchange),
            20 => Ok(HandshakeType::Finished),
            _ => Err(Error::ParseError(format!(
                "Invalid HandshakeType value: {}",
                value
            ))),
        }
    }
}

/// The four-byte handshake message header: one type byte, three length bytes.
#[derive(Debug)]
pub struct HandshakeHeader {
    pub msg_type: HandshakeType,
    pub length: u32,
}

impl HandshakeHeader {
    pub fn new(msg_type: HandshakeType, length: u32) -> Self {
        Self { msg_type, length }
    }

    pub fn parse(data: &[u8], pos: &mut usize) -> Result<Self> {
        let msg_type = HandshakeType::try_from(wire::read_u8(data, pos)?)?;
        let length = wire::read_u24(data, pos)?;

        Ok(Self { msg_type, length })
    }

    pub fn serialize(&self) -> Vec<u8> {
        let mut result = Vec::with_capacity(4);
        wire::write_u8(&mut result, self.msg_type as u8);
        wire::write_u24(&mut result, self.length);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_parsing() {
        let data = [
            0x01, // ClientHello
            0x00, 0x00, 0x03, // Length 3
            0xAA, 0xBB, 0xCC,
        ];

        let mut pos = 0;
        let header = HandshakeHeader::parse(&data, &mut pos).unwrap();

        assert_eq!(header.msg_type, HandshakeType::ClientHello);
        assert_eq!(header.length, 3);
        assert_eq!(pos, 4);
    }

    #[test]
    fn test_header_serialization() {
        let header = HandshakeHeader::new(HandshakeType::ServerHelloDone, 0);
        assert_eq!(header.serialize(), [0x0e, 0x00, 0x00, 0x00]);
    }

    #[test]
    fn test_invalid_handshake_type() {
        let data = [0x30, 0x00, 0x00, 0x00];
        let mut pos = 0;
        assert!(HandshakeHeader::parse(&data, &mut pos).is_err());
    }

    #[test]
    fn test_truncated_header() {
        let data = [0x01, 0x00];
        let mut pos = 0;
        assert!(HandshakeHeader::parse(&data, &mut pos).is_err());
    }
}
