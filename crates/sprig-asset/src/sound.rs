//! Undecoded audio clips

/// Raw bytes of an audio file. Decoding and mixing belong to the audio
/// collaborator; the runtime only owns loading and lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sound {
    pub name: String,
    bytes: Vec<u8>,
}

impl Sound {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}
