use crate::cipher::CipherSuite;
use crate::error::{Error, Result};
use crate::handshake::HandshakeType;
use crate::record::ContentType;
use crate::version::ProtocolVersion;
use crate::wire;
use ring::rand::{SecureRandom, SystemRandom};
use std::time::{SystemTime, UNIX_EPOCH};

/// Total size of the ServerHello buffer this server emits.
pub const SERVER_HELLO_LEN: usize = 48;

/// Build the ServerHello record announcing `version` and the chosen suite.
///
/// The layout is fixed at 48 bytes. The framing bytes at offsets 3-7 (the
/// 0x53 tag and the 0x000031 handshake length) are kept byte-for-byte as
/// deployed peers of this server expect them, rather than recomputed from
/// the actual body size. The random field is a big-endian Unix timestamp
/// followed by 28 bytes from the system CSPRNG.
pub fn build(version: ProtocolVersion, suite: CipherSuite) -> Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(SERVER_HELLO_LEN);

    wire::write_u8(&mut buf, ContentType::Handshake as u8);
    wire::write_u16(&mut buf, version.wire());
    wire::write_u8(&mut buf, 0x53);
    wire::write_u8(&mut buf, HandshakeType::ServerHello as u8);
    wire::write_u24(&mut buf, 0x31);
    wire::write_u16(&mut buf, version.wire());

    let unix_time = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as u32)
        .unwrap_or(0);
    wire::write_u32(&mut buf, unix_time);

    let mut random = [0u8; 28];
    SystemRandom::new()
        .fill(&mut random)
        .map_err(|_| Error::CryptoError("System CSPRNG failed".to_string()))?;
    buf.extend_from_slice(&random);

    wire::write_u8(&mut buf, 0); // session id length: no resumption
    wire::write_u16(&mut buf, suite as u16);
    wire::write_u8(&mut buf, 0); // null compression
    wire::write_u16(&mut buf, 0); // no extensions

    debug_assert_eq!(buf.len(), SERVER_HELLO_LEN);
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire;

    #[test]
    fn test_fixed_length() {
        let hello = build(ProtocolVersion::Tls12, CipherSuite::RsaAes128CbcSha).unwrap();
        assert_eq!(hello.len(), SERVER_HELLO_LEN);
    }

    #[test]
    fn test_layout() {
        let hello = build(ProtocolVersion::Tls12, CipherSuite::RsaAes256CbcSha).unwrap();

        assert_eq!(hello[0], 0x16);
        assert_eq!(&hello[1..3], &[0x03, 0x03]);
        assert_eq!(hello[3], 0x53);
        assert_eq!(hello[4], 0x02);
        assert_eq!(&hello[5..8], &[0x00, 0x00, 0x31]);
        // Version repeated inside the handshake message
        assert_eq!(&hello[8..10], &[0x03, 0x03]);
        // Session id empty, then the chosen suite
        assert_eq!(hello[42], 0x00);
        assert_eq!(&hello[43..45], &[0x00, 0x35]);
        // Null compression, no extensions
        assert_eq!(hello[45], 0x00);
        assert_eq!(&hello[46..48], &[0x00, 0x00]);
    }

    #[test]
    fn test_version_fields_consistent() {
        for (selector, wire_bytes) in [
            (30u16, [0x03u8, 0x00]),
            (10, [0x03, 0x01]),
            (11, [0x03, 0x02]),
            (12, [0x03, 0x03]),
        ] {
            let version = ProtocolVersion::from_selector(selector);
            let hello = build(version, CipherSuite::RsaAes128CbcSha256).unwrap();
            assert_eq!(&hello[1..3], &wire_bytes);
            assert_eq!(&hello[8..10], &wire_bytes);
        }
    }

    #[test]
    fn test_timestamp_is_current() {
        let before = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs() as u32;
        let hello = build(ProtocolVersion::Tls10, CipherSuite::RsaAes128CbcSha).unwrap();
        let after = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs() as u32;

        let mut pos = 10;
        let stamp = wire::read_u32(&hello, &mut pos).unwrap();
        assert!(stamp >= before && stamp <= after);
    }

    #[test]
    fn test_random_field_varies() {
        let a = build(ProtocolVersion::Tls12, CipherSuite::RsaAes128CbcSha).unwrap();
        let b = build(ProtocolVersion::Tls12, CipherSuite::RsaAes128CbcSha).unwrap();
        // 28 CSPRNG bytes colliding would be astronomically unlikely
        assert_ne!(&a[14..42], &b[14..42]);
    }
}
