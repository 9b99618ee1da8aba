use crate::alert::Alert;
use crate::cipher::CipherSuite;
use crate::error::{Error, Result};
use crate::handshake::{
    certificate, client_hello, finished, server_hello, server_hello_done, FinishedProtection,
    PreMasterSecret,
};
use crate::record;
use crate::transcript::Transcript;
use crate::version::ProtocolVersion;
use log::{debug, warn};

/// Server-side handshake progress. Each `Sent*` state is entered by the
/// corresponding step method; the caller writes the returned bytes and owns
/// the socket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandshakeState {
    Start,
    SentServerHello,
    SentCertificate,
    SentServerHelloDone,
    AwaitingClientKeyExchange,
    SentChangeCipherSpec,
    SentFinished,
    Established,
}

/// Drives the fixed server handshake order over the pure builders, keeping
/// the transcript and negotiated parameters for one connection.
///
/// Using the driver is optional; every builder underneath stays independently
/// callable for callers that manage their own state.
pub struct ServerHandshake {
    version: ProtocolVersion,
    cert_der: Vec<u8>,
    state: HandshakeState,
    suite: Option<CipherSuite>,
    transcript: Transcript,
}

impl ServerHandshake {
    /// `version_selector` is the abstract selector (30, 10, 11, 12);
    /// unrecognized values fall back to SSL 3.0.
    pub fn new(version_selector: u16, cert_der: Vec<u8>) -> Self {
        Self {
            version: ProtocolVersion::from_selector(version_selector),
            cert_der,
            state: HandshakeState::Start,
            suite: None,
            transcript: Transcript::new(),
        }
    }

    pub fn state(&self) -> HandshakeState {
        self.state
    }

    pub fn negotiated_suite(&self) -> Option<CipherSuite> {
        self.suite
    }

    pub fn version(&self) -> ProtocolVersion {
        self.version
    }

    pub fn is_established(&self) -> bool {
        self.state == HandshakeState::Established
    }

    /// Sniff and parse the client's opening bytes, pick the first offered
    /// suite this server supports, and record the raw message in the
    /// transcript. Must be called exactly once, before `server_hello`.
    pub fn process_client_hello(&mut self, buf: &[u8]) -> Result<CipherSuite> {
        self.expect(HandshakeState::Start, "process_client_hello")?;
        if self.suite.is_some() {
            return Err(Error::ProtocolError(
                "ClientHello already processed".to_string(),
            ));
        }

        let offered = client_hello::offered_cipher_suites(buf)?;
        if offered.is_empty() {
            return Err(Error::ProtocolError(
                "Buffer does not begin a ClientHello".to_string(),
            ));
        }

        let suite = offered
            .iter()
            .find_map(|&value| CipherSuite::try_from(value).ok())
            .ok_or_else(|| {
                warn!("No supported cipher suite among offer {:04x?}", offered);
                Error::UnsupportedCipherSuite(offered[0])
            })?;

        debug!("Negotiated cipher suite {:?} from {} offered", suite, offered.len());
        self.suite = Some(suite);
        self.transcript.append(buf.to_vec());
        Ok(suite)
    }

    pub fn server_hello(&mut self) -> Result<Vec<u8>> {
        self.expect(HandshakeState::Start, "server_hello")?;
        let suite = self.negotiated()?;

        let message = server_hello::build(self.version, suite)?;
        self.transcript.append(message.clone());
        self.state = HandshakeState::SentServerHello;
        Ok(message)
    }

    pub fn certificate(&mut self) -> Result<Vec<u8>> {
        self.expect(HandshakeState::SentServerHello, "certificate")?;

        let message = certificate::build(self.version, &self.cert_der);
        self.transcript.append(message.clone());
        self.state = HandshakeState::SentCertificate;
        Ok(message)
    }

    pub fn server_hello_done(&mut self) -> Result<Vec<u8>> {
        self.expect(HandshakeState::SentCertificate, "server_hello_done")?;

        let message = server_hello_done::build(self.version);
        self.transcript.append(message.clone());
        self.state = HandshakeState::SentServerHelloDone;
        Ok(message)
    }

    /// Record a raw client handshake message (ClientKeyExchange and friends)
    /// in the transcript after ServerHelloDone has been written.
    pub fn record_client_message(&mut self, buf: &[u8]) -> Result<()> {
        match self.state {
            HandshakeState::SentServerHelloDone | HandshakeState::AwaitingClientKeyExchange => {
                self.transcript.append(buf.to_vec());
                self.state = HandshakeState::AwaitingClientKeyExchange;
                Ok(())
            }
            state => Err(Error::ProtocolError(format!(
                "record_client_message called in state {:?}",
                state
            ))),
        }
    }

    pub fn change_cipher_spec(&mut self) -> Result<Vec<u8>> {
        self.expect(
            HandshakeState::AwaitingClientKeyExchange,
            "change_cipher_spec",
        )?;

        // Not a handshake message; never enters the transcript.
        let message = record::change_cipher_spec(self.version);
        self.state = HandshakeState::SentChangeCipherSpec;
        Ok(message)
    }

    pub fn finished(
        &mut self,
        pre_master: &PreMasterSecret,
        protection: &dyn FinishedProtection,
    ) -> Result<Vec<u8>> {
        self.expect(HandshakeState::SentChangeCipherSpec, "finished")?;
        let suite = self.negotiated()?;

        let message = finished::build(self.version, suite, pre_master, &self.transcript, protection)?;
        self.state = HandshakeState::SentFinished;
        Ok(message)
    }

    /// Mark the handshake complete once the caller has accepted the client's
    /// ChangeCipherSpec and Finished.
    pub fn complete(&mut self) -> Result<()> {
        self.expect(HandshakeState::SentFinished, "complete")?;
        self.state = HandshakeState::Established;
        debug!("Handshake established, version {:?}", self.version);
        Ok(())
    }

    /// The fatal alert record to send before tearing a failed handshake down.
    pub fn abort_alert(&self) -> Vec<u8> {
        Alert::handshake_failure().to_record(self.version)
    }

    fn negotiated(&self) -> Result<CipherSuite> {
        self.suite.ok_or_else(|| {
            Error::ProtocolError("No cipher suite negotiated yet".to_string())
        })
    }

    fn expect(&self, state: HandshakeState, operation: &str) -> Result<()> {
        if self.state != state {
            return Err(Error::ProtocolError(format!(
                "{} called in state {:?}",
                operation, self.state
            )));
        }
        Ok(())
    }
}
