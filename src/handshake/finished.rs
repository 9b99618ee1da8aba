use crate::cipher::CipherSuite;
use crate::error::Result;
use crate::record::{self, ContentType};
use crate::transcript::Transcript;
use crate::version::ProtocolVersion;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// The pre-master key material the client key exchange produced. Wiped on
/// drop; never logged or cloned by this crate.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct PreMasterSecret(Vec<u8>);

impl PreMasterSecret {
    pub fn new(material: Vec<u8>) -> Self {
        Self(material)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// Key derivation and record protection for the Finished message.
///
/// TLS requires the transcript digest to be run through the PRF keyed by the
/// master secret (derived from the pre-master material) and the resulting
/// verify_data to be encrypted under the negotiated record-layer cipher.
/// That machinery lives behind this trait; the builder only frames whatever
/// record body an implementation returns.
pub trait FinishedProtection {
    fn protect(
        &self,
        version: ProtocolVersion,
        suite: CipherSuite,
        pre_master: &PreMasterSecret,
        transcript_digest: &[u8],
    ) -> Result<Vec<u8>>;
}

/// Protection stub that yields an empty record body.
///
/// Useful for exercising the handshake plumbing; the record it produces is
/// not a wire-valid Finished message and no peer will accept it.
pub struct NullProtection;

impl FinishedProtection for NullProtection {
    fn protect(
        &self,
        _version: ProtocolVersion,
        _suite: CipherSuite,
        _pre_master: &PreMasterSecret,
        _transcript_digest: &[u8],
    ) -> Result<Vec<u8>> {
        Ok(Vec::new())
    }
}

/// Hash the transcript with the PRF hash the negotiated suite implies:
/// SHA-1 (20 bytes) for the SHA suites, SHA-256 (32 bytes) for the SHA256
/// suites. Deterministic for a given suite and transcript.
pub fn verify_digest(suite: CipherSuite, transcript: &Transcript) -> Vec<u8> {
    transcript.digest(suite.prf_hash())
}

/// Build the Finished record: digest the transcript, hand the digest and
/// pre-master material to `protection`, and frame the returned body.
pub fn build(
    version: ProtocolVersion,
    suite: CipherSuite,
    pre_master: &PreMasterSecret,
    transcript: &Transcript,
    protection: &dyn FinishedProtection,
) -> Result<Vec<u8>> {
    let digest = verify_digest(suite, transcript);
    let body = protection.protect(version, suite, pre_master, &digest)?;
    Ok(record::frame(ContentType::Handshake, version, &body))
}
