use crate::handshake::{HandshakeHeader, HandshakeType};
use crate::record::{self, ContentType};
use crate::version::ProtocolVersion;

/// Build the nine-byte ServerHelloDone record: a handshake record wrapping
/// a zero-length ServerHelloDone message.
pub fn build(version: ProtocolVersion) -> Vec<u8> {
    let header = HandshakeHeader::new(HandshakeType::ServerHelloDone, 0);
    record::frame(ContentType::Handshake, version, &header.serialize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout() {
        let done = build(ProtocolVersion::Tls10);
        assert_eq!(done, [0x16, 0x03, 0x01, 0x00, 0x04, 0x0e, 0x00, 0x00, 0x00]);
        assert_eq!(done.len(), 9);
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(build(ProtocolVersion::Tls12), build(ProtocolVersion::Tls12));
        assert_eq!(build(ProtocolVersion::Ssl30)[1..3], [0x03, 0x00]);
    }
}
