//! Server-side TLS 1.0-1.2 handshake codec for fronting a plain-text
//! service with a TLS record layer.
//!
//! The crate recognizes a ClientHello, extracts the offered cipher suites,
//! and emits the server's handshake messages (ServerHello, Certificate,
//! ServerHelloDone, ChangeCipherSpec, Finished) as framed records. Builders
//! are pure functions; [`session::ServerHandshake`] optionally sequences
//! them for one connection. Record-layer encryption and key derivation sit
//! behind [`handshake::FinishedProtection`] and are not implemented here.

pub mod alert;
pub mod cipher;
pub mod error;
pub mod handshake;
pub mod record;
pub mod session;
pub mod transcript;
pub mod version;
pub mod wire;

pub use cipher::{CipherSuite, PrfHash};
pub use error::{Error, Result};
pub use handshake::{FinishedProtection, NullProtection, PreMasterSecret};
pub use record::ContentType;
pub use session::{HandshakeState, ServerHandshake};
pub use transcript::Transcript;
pub use version::ProtocolVersion;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn init_logging() {
    let _ = env_logger::builder().try_init();
}
