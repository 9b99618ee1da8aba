use crate::error::{Error, Result};
use crate::handshake::HandshakeType;
use crate::record::ContentType;
use crate::wire;

/// Minimum buffer length for a ClientHello to carry a cipher suite list.
const MIN_EXTRACTABLE_LEN: usize = 38;

/// Structural sniff: does `buf` begin a handshake record whose first message
/// is a ClientHello? Checks the two type bytes only, not the length fields.
pub fn is_client_hello(buf: &[u8]) -> bool {
    buf.len() >= 6
        && buf[0] == ContentType::Handshake as u8
        && buf[5] == HandshakeType::ClientHello as u8
}

/// Extract the cipher suites offered by a ClientHello, in offer order, as
/// raw two-byte wire values.
///
/// Returns an empty list when `buf` is not a ClientHello at all; a buffer
/// that is a ClientHello but is truncated mid-field fails closed with a
/// parse error rather than reading out of range.
pub fn offered_cipher_suites(buf: &[u8]) -> Result<Vec<u16>> {
    if !is_client_hello(buf) || buf.len() < MIN_EXTRACTABLE_LEN {
        return Ok(Vec::new());
    }

    let mut pos = 1; // record type, checked by the sniff
    let _record_version = wire::read_u16(buf, &mut pos)?;
    let record_len = wire::read_u16(buf, &mut pos)? as usize;

    // Never walk past the declared record length.
    let record = &buf[..buf.len().min(pos + record_len)];

    let _msg_type = wire::read_u8(record, &mut pos)?; // ClientHello, checked
    let body_len = wire::read_u24(record, &mut pos)? as usize;
    let body = &record[..record.len().min(pos + body_len)];

    let _client_version = wire::read_u16(body, &mut pos)?;
    let _random = wire::read_bytes(body, &mut pos, 32)?;
    let _session_id = wire::read_vector_u8(body, &mut pos)?;

    let suite_bytes = wire::read_vector_u16(body, &mut pos)?;
    if suite_bytes.len() % 2 != 0 {
        return Err(Error::ParseError(
            "Cipher suite list length must be even".to_string(),
        ));
    }

    let mut suites = Vec::with_capacity(suite_bytes.len() / 2);
    for pair in suite_bytes.chunks_exact(2) {
        suites.push(u16::from_be_bytes([pair[0], pair[1]]));
    }

    Ok(suites)
}
