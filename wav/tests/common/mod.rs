#![allow(dead_code)]

/// Builds WAVE files in memory.
pub struct WavBuilder {
    encoding: u16,
    channels: u16,
    sample_rate: u32,
    bits: u16,
    block_align: Option<u16>,
    extension: Vec<u8>,
    chunks_before_data: Vec<u8>,
    declared_data_size: Option<u32>,
}

pub const SUBTYPE_TAIL: [u8; 14] = [
    0x00, 0x00, 0x00, 0x00, 0x10, 0x00, 0x80, 0x00, 0x00, 0xaa, 0x00, 0x38, 0x9b, 0x71,
];

impl WavBuilder {
    pub fn pcm(channels: u16, sample_rate: u32, bits: u16) -> Self {
        Self {
            encoding: 1,
            channels,
            sample_rate,
            bits,
            block_align: None,
            extension: Vec::new(),
            chunks_before_data: Vec::new(),
            declared_data_size: None,
        }
    }

    pub fn float(channels: u16, sample_rate: u32) -> Self {
        Self {
            encoding: 3,
            extension: 0u16.to_le_bytes().to_vec(),
            ..Self::pcm(channels, sample_rate, 32)
        }
    }

    pub fn extensible(channels: u16, sample_rate: u32, bits: u16, sub_format: u16) -> Self {
        let mut extension = Vec::new();
        extension.extend_from_slice(&22u16.to_le_bytes());
        extension.extend_from_slice(&bits.to_le_bytes());
        extension.extend_from_slice(&((1u32 << channels) - 1).to_le_bytes());
        extension.extend_from_slice(&sub_format.to_le_bytes());
        extension.extend_from_slice(&SUBTYPE_TAIL);
        Self {
            encoding: 0xfffe,
            extension,
            ..Self::pcm(channels, sample_rate, bits)
        }
    }

    pub fn encoding(mut self, encoding: u16) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn block_align(mut self, block_align: u16) -> Self {
        self.block_align = Some(block_align);
        self
    }

    pub fn chunk(mut self, id: &[u8; 4], payload: &[u8]) -> Self {
        self.chunks_before_data.extend_from_slice(id);
        self.chunks_before_data
            .extend_from_slice(&(payload.len() as u32).to_le_bytes());
        self.chunks_before_data.extend_from_slice(payload);
        if payload.len() % 2 == 1 {
            self.chunks_before_data.push(0);
        }
        self
    }

    pub fn declared_data_size(mut self, size: u32) -> Self {
        self.declared_data_size = Some(size);
        self
    }

    pub fn build(&self, samples: &[u8]) -> Vec<u8> {
        let block_align = self
            .block_align
            .unwrap_or(self.channels * ((self.bits + 7) / 8));

        let mut fmt = Vec::new();
        fmt.extend_from_slice(&self.encoding.to_le_bytes());
        fmt.extend_from_slice(&self.channels.to_le_bytes());
        fmt.extend_from_slice(&self.sample_rate.to_le_bytes());
        fmt.extend_from_slice(&(self.sample_rate * block_align as u32).to_le_bytes());
        fmt.extend_from_slice(&block_align.to_le_bytes());
        fmt.extend_from_slice(&self.bits.to_le_bytes());
        fmt.extend_from_slice(&self.extension);

        let mut body = b"WAVE".to_vec();
        body.extend_from_slice(b"fmt ");
        body.extend_from_slice(&(fmt.len() as u32).to_le_bytes());
        body.extend(fmt);
        body.extend_from_slice(&self.chunks_before_data);
        body.extend_from_slice(b"data");
        let size = self.declared_data_size.unwrap_or(samples.len() as u32);
        body.extend_from_slice(&size.to_le_bytes());
        body.extend_from_slice(samples);

        let mut out = b"RIFF".to_vec();
        out.extend_from_slice(&(body.len() as u32).to_le_bytes());
        out.extend(body);
        out
    }
}

pub fn i16_bytes(samples: &[i16]) -> Vec<u8> {
    samples.iter().flat_map(|s| s.to_le_bytes().to_vec()).collect()
}
