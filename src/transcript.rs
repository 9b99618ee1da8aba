use crate::cipher::PrfHash;
use bytes::Bytes;
use ring::digest::{Context, SHA1_FOR_LEGACY_USE_ONLY, SHA256};

/// The ordered sequence of raw handshake message buffers exchanged so far.
///
/// The caller owns the transcript and appends each message (both sent and
/// received) in chronological order; nothing in this crate retains or
/// mutates it. Entries are `Bytes`, so appending an already-built message
/// does not copy it.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<Bytes>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, message: impl Into<Bytes>) {
        self.messages.push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Hash the in-order concatenation of every recorded message.
    pub fn digest(&self, hash: PrfHash) -> Vec<u8> {
        let mut context = match hash {
            PrfHash::Sha1 => Context::new(&SHA1_FOR_LEGACY_USE_ONLY),
            PrfHash::Sha256 => Context::new(&SHA256),
        };

        for message in &self.messages {
            context.update(message);
        }

        context.finish().as_ref().to_vec()
    }
}
