use crate::handshake::HandshakeType;
use crate::record::ContentType;
use crate::version::ProtocolVersion;
use crate::wire;

/// Build the Certificate record carrying one opaque DER certificate.
///
/// The certificate bytes are not inspected; chains are not supported. The
/// nested lengths are record = 7 + certLen, handshake body = 3 + certLen,
/// certificate list = certLen, giving a total of 12 + certLen bytes.
pub fn build(version: ProtocolVersion, cert_der: &[u8]) -> Vec<u8> {
    let cert_len = cert_der.len() as u32;

    let mut buf = Vec::with_capacity(12 + cert_der.len());
    wire::write_u8(&mut buf, ContentType::Handshake as u8);
    wire::write_u16(&mut buf, version.wire());
    wire::write_u16(&mut buf, (7 + cert_len) as u16);
    wire::write_u8(&mut buf, HandshakeType::Certificate as u8);
    wire::write_u24(&mut buf, cert_len + 3);
    wire::write_u24(&mut buf, cert_len);
    buf.extend_from_slice(cert_der);
    buf
}
