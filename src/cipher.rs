use crate::error::{Error, Result};

/// The RSA key-exchange AES-CBC suites this server negotiates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherSuite {
    RsaAes128CbcSha = 0x002f,
    RsaAes256CbcSha = 0x0035,
    RsaAes128CbcSha256 = 0x003c,
    RsaAes256CbcSha256 = 0x003d,
}

impl CipherSuite {
    /// The PRF hash a suite commits the handshake transcript under.
    pub fn prf_hash(self) -> PrfHash {
        match self {
            CipherSuite::RsaAes128CbcSha | CipherSuite::RsaAes256CbcSha => PrfHash::Sha1,
            CipherSuite::RsaAes128CbcSha256 | CipherSuite::RsaAes256CbcSha256 => PrfHash::Sha256,
        }
    }
}

impl TryFrom<u16> for CipherSuite {
    type Error = Error;

    fn try_from(value: u16) -> Result<Self> {
        match value {
            0x002f => Ok(CipherSuite::RsaAes128CbcSha),
            0x0035 => Ok(CipherSuite::RsaAes256CbcSha),
            0x003c => Ok(CipherSuite::RsaAes128CbcSha256),
            0x003d => Ok(CipherSuite::RsaAes256CbcSha256),
            _ => Err(Error::UnsupportedCipherSuite(value)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrfHash {
    Sha1,
    Sha256,
}

impl PrfHash {
    pub fn digest_len(self) -> usize {
        match self {
            PrfHash::Sha1 => 20,
            PrfHash::Sha256 => 32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_wire_values() {
        assert_eq!(CipherSuite::try_from(0x002f).unwrap(), CipherSuite::RsaAes128CbcSha);
        assert_eq!(CipherSuite::try_from(0x0035).unwrap(), CipherSuite::RsaAes256CbcSha);
        assert_eq!(CipherSuite::try_from(0x003c).unwrap(), CipherSuite::RsaAes128CbcSha256);
        assert_eq!(CipherSuite::try_from(0x003d).unwrap(), CipherSuite::RsaAes256CbcSha256);
    }

    #[test]
    fn test_unsupported_suites_rejected() {
        // Includes well-known suites we deliberately do not negotiate
        for value in [0x0000u16, 0x0005, 0x000a, 0x1301, 0xc02f, 0xffff] {
            match CipherSuite::try_from(value) {
                Err(Error::UnsupportedCipherSuite(v)) => assert_eq!(v, value),
                other => panic!("expected UnsupportedCipherSuite, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_prf_hash_mapping() {
        assert_eq!(CipherSuite::RsaAes128CbcSha.prf_hash(), PrfHash::Sha1);
        assert_eq!(CipherSuite::RsaAes256CbcSha.prf_hash(), PrfHash::Sha1);
        assert_eq!(CipherSuite::RsaAes128CbcSha256.prf_hash(), PrfHash::Sha256);
        assert_eq!(CipherSuite::RsaAes256CbcSha256.prf_hash(), PrfHash::Sha256);

        assert_eq!(PrfHash::Sha1.digest_len(), 20);
        assert_eq!(PrfHash::Sha256.digest_len(), 32);
    }
}
