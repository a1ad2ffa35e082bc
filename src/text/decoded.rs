use std::borrow::Cow;

/// Text decoded from raw bytes.
///
/// Valid UTF-8 is borrowed as is. Anything else is decoded lossily: every maximal invalid byte
/// sequence is replaced with a single [`char::REPLACEMENT_CHARACTER`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded<'a> {
    text: Cow<'a, str>,
    replaced: usize,
}

impl<'a> Decoded<'a> {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The number of placeholders that were inserted by the decoder.
    ///
    /// Replacement characters that were already present in the input are not counted.
    pub fn replaced(&self) -> usize {
        self.replaced
    }

    pub fn is_lossy(&self) -> bool {
        self.replaced != 0
    }

    pub fn into_inner(self) -> Cow<'a, str> {
        self.text
    }
}

pub fn decode(bytes: &[u8]) -> Decoded<'_> {
    if let Ok(text) = std::str::from_utf8(bytes) {
        return Decoded {
            text: Cow::Borrowed(text),
            replaced: 0,
        };
    }
    let mut text = String::with_capacity(bytes.len() + 16);
    let mut replaced = 0;
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
        if !chunk.invalid().is_empty() {
            text.push(char::REPLACEMENT_CHARACTER);
            replaced += 1;
        }
    }
    Decoded {
        text: Cow::Owned(text),
        replaced,
    }
}
