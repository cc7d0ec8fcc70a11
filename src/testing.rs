// In-memory RIFF/WAVE fixtures for unit tests

/// Payload of a `fmt ` chunk, field by field.
pub(crate) fn fmt_payload(
    audio_format: u16,
    channels: u16,
    sample_rate: u32,
    byte_rate: u32,
    block_align: u16,
    bits_per_sample: u16,
) -> Vec<u8> {
    let mut payload = Vec::with_capacity(16);
    payload.extend_from_slice(&audio_format.to_le_bytes());
    payload.extend_from_slice(&channels.to_le_bytes());
    payload.extend_from_slice(&sample_rate.to_le_bytes());
    payload.extend_from_slice(&byte_rate.to_le_bytes());
    payload.extend_from_slice(&block_align.to_le_bytes());
    payload.extend_from_slice(&bits_per_sample.to_le_bytes());
    payload
}

/// 16-bit stereo 44.1 kHz PCM.
pub(crate) fn cd_fmt_payload() -> Vec<u8> {
    fmt_payload(1, 2, 44100, 176400, 4, 16)
}

/// Header and payload of one chunk, with a pad byte when `padded` and the
/// payload length is odd.
pub(crate) fn chunk_bytes(id: &[u8; 4], payload: &[u8], padded: bool) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(8 + payload.len() + 1);
    bytes.extend_from_slice(id);
    bytes.extend_from_slice(&(payload.len() as u32).to_le_bytes());
    bytes.extend_from_slice(payload);
    if padded && payload.len() % 2 == 1 {
        bytes.push(0);
    }
    bytes
}

/// Payload of a `LIST` chunk: the list type followed by padded subchunks.
pub(crate) fn list_payload(list_type: &[u8; 4], subchunks: &[(&[u8; 4], &[u8])]) -> Vec<u8> {
    let mut payload = list_type.to_vec();
    for (id, data) in subchunks {
        payload.extend(chunk_bytes(id, data, true));
    }
    payload
}

/// Builds a complete `RIFF....WAVE` stream.
pub(crate) struct WaveBuilder {
    body: Vec<u8>,
    declared_len: Option<u32>,
}

impl WaveBuilder {
    pub(crate) fn new() -> Self {
        WaveBuilder {
            body: b"WAVE".to_vec(),
            declared_len: None,
        }
    }

    /// Start from a form type other than `WAVE`.
    pub(crate) fn with_form(form: &[u8; 4]) -> Self {
        WaveBuilder {
            body: form.to_vec(),
            declared_len: None,
        }
    }

    pub(crate) fn chunk(mut self, id: &[u8; 4], payload: &[u8]) -> Self {
        self.body.extend(chunk_bytes(id, payload, true));
        self
    }

    /// Append a chunk without its pad byte, even if the payload is odd.
    pub(crate) fn unpadded_chunk(mut self, id: &[u8; 4], payload: &[u8]) -> Self {
        self.body.extend(chunk_bytes(id, payload, false));
        self
    }

    pub(crate) fn fmt(self) -> Self {
        self.chunk(b"fmt ", &cd_fmt_payload())
    }

    pub(crate) fn raw(mut self, bytes: &[u8]) -> Self {
        self.body.extend_from_slice(bytes);
        self
    }

    /// Override the outer RIFF length instead of computing it.
    pub(crate) fn declared_len(mut self, len: u32) -> Self {
        self.declared_len = Some(len);
        self
    }

    pub(crate) fn build(self) -> Vec<u8> {
        let len = self.declared_len.unwrap_or(self.body.len() as u32);
        let mut bytes = b"RIFF".to_vec();
        bytes.extend_from_slice(&len.to_le_bytes());
        bytes.extend(self.body);
        bytes
    }

    /// The stream with the 4-byte `RIFF` magic already consumed, as the
    /// walker sees it.
    pub(crate) fn build_after_magic(self) -> Vec<u8> {
        self.build().split_off(4)
    }
}
