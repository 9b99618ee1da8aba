use crate::error::{Error, Result};
use crate::version::ProtocolVersion;
use crate::wire;

/// Largest fragment a single record may carry (RFC 5246 section 6.2.1).
pub const MAX_FRAGMENT_LENGTH: usize = 16384;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    ChangeCipherSpec = 20,
    Alert = 21,
    Handshake = 22,
    ApplicationData = 23,
}

impl TryFrom<u8> for ContentType {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            20 => Ok(ContentType::ChangeCipherSpec),
            21 => Ok(ContentType::Alert),
            22 => Ok(ContentType::Handshake),
            23 => Ok(ContentType::ApplicationData),
            _ => Err(Error::ParseError(format!("Invalid ContentType value: {}", value))),
        }
    }
}

/// A borrowed view over one record; the fragment aliases the input buffer.
#[derive(Debug, Clone)]
pub struct TlsRecord<'a> {
    pub content_type: ContentType,
    pub version: u16,
    pub fragment: &'a [u8],
}

/// Parse one record off the front of `data`, returning it and the number of
/// bytes consumed. Fails closed if the declared length overruns the buffer.
pub fn parse_record(data: &[u8]) -> Result<(TlsRecord<'_>, usize)> {
    let mut pos = 0;

    if data.len() < 5 {
        return Err(Error::ParseError("Record too short".to_string()));
    }

    let content_type = ContentType::try_from(wire::read_u8(data, &mut pos)?)?;
    let version = wire::read_u16(data, &mut pos)?;
    let length = wire::read_u16(data, &mut pos)? as usize;

    if length > MAX_FRAGMENT_LENGTH {
        return Err(Error::ProtocolError(format!(
            "Record fragment length {} exceeds maximum allowed {}",
            length, MAX_FRAGMENT_LENGTH
        )));
    }

    let fragment = wire::read_bytes(data, &mut pos, length)?;

    Ok((
        TlsRecord {
            content_type,
            version,
            fragment,
        },
        pos,
    ))
}

/// Frame `body` as one record: type, version, two-byte length, body.
pub fn frame(content_type: ContentType, version: ProtocolVersion, body: &[u8]) -> Vec<u8> {
    debug_assert!(body.len() <= MAX_FRAGMENT_LENGTH);

    let mut result = Vec::with_capacity(5 + body.len());
    wire::write_u8(&mut result, content_type as u8);
    wire::write_u16(&mut result, version.wire());
    wire::write_u16(&mut result, body.len() as u16);
    result.extend_from_slice(body);
    result
}

/// The fixed six-byte ChangeCipherSpec record: a single payload byte of 1.
pub fn change_cipher_spec(version: ProtocolVersion) -> Vec<u8> {
    frame(ContentType::ChangeCipherSpec, version, &[1])
}
