//! Decoded sound effects
//!
//! Sounds are read from RIFF/WAVE files into interleaved `f32` samples in
//! `[-1.0, 1.0]`. Playback belongs to the game's mixer; this module only
//! owns decoding and the per-sound volume.

/// WAVE format tags
const FORMAT_PCM: u16 = 0x0001;
const FORMAT_IEEE_FLOAT: u16 = 0x0003;
const FORMAT_EXTENSIBLE: u16 = 0xFFFE;

/// A decoded, playable sound
#[derive(Debug, Clone, PartialEq)]
pub struct Sound {
    sample_rate: u32,
    channels: u16,
    /// Interleaved samples, `frames * channels` long
    samples: Vec<f32>,
    volume: f32,
}

/// Parsed `fmt ` chunk
#[derive(Debug, Clone, Copy)]
struct WavFormat {
    format_tag: u16,
    channels: u16,
    sample_rate: u32,
    block_align: u16,
    bits_per_sample: u16,
}

impl Sound {
    /// Build a sound from already-decoded interleaved samples
    pub fn from_samples(sample_rate: u32, channels: u16, samples: Vec<f32>) -> Self {
        Self {
            sample_rate,
            channels,
            samples,
            volume: 1.0,
        }
    }

    /// Decode a RIFF/WAVE byte buffer
    pub fn from_wav_bytes(bytes: &[u8]) -> Result<Self, String> {
        if bytes.len() < 12 {
            return Err("file too short for a RIFF header".to_string());
        }
        if &bytes[0..4] != b"RIFF" || &bytes[8..12] != b"WAVE" {
            return Err("not a RIFF/WAVE file".to_string());
        }

        let mut format = None;
        let mut data = None;
        let mut offset = 12;

        while offset + 8 <= bytes.len() {
            let id = &bytes[offset..offset + 4];
            let size = read_u32(bytes, offset + 4) as usize;
            let start = offset + 8;
            let end = start
                .checked_add(size)
                .filter(|&end| end <= bytes.len())
                .ok_or_else(|| {
                    format!(
                        "chunk '{}' is truncated ({} bytes declared, {} available)",
                        String::from_utf8_lossy(id),
                        size,
                        bytes.len() - start
                    )
                })?;
            let body = &bytes[start..end];

            match id {
                b"fmt " => format = Some(parse_format(body)?),
                b"data" => data = Some(body),
                _ => {}
            }

            // Chunks are word-aligned
            offset = end + (size & 1);
        }

        let format = format.ok_or("missing 'fmt ' chunk")?;
        let data = data.ok_or("missing 'data' chunk")?;

        if data.len() % format.block_align as usize != 0 {
            return Err(format!(
                "data length {} is not a multiple of block size {}",
                data.len(),
                format.block_align
            ));
        }

        let samples = decode_samples(&format, data)?;
        log::trace!(
            "decoded wav: {} Hz, {} ch, {}-bit, {} samples",
            format.sample_rate,
            format.channels,
            format.bits_per_sample,
            samples.len()
        );

        Ok(Self::from_samples(format.sample_rate, format.channels, samples))
    }

    #[inline]
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    #[inline]
    pub fn channels(&self) -> u16 {
        self.channels
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Number of sample frames (one sample per channel)
    pub fn frames(&self) -> usize {
        if self.channels == 0 {
            0
        } else {
            self.samples.len() / self.channels as usize
        }
    }

    /// Playback length in seconds
    pub fn duration(&self) -> f32 {
        if self.sample_rate == 0 {
            0.0
        } else {
            self.frames() as f32 / self.sample_rate as f32
        }
    }

    /// Set playback volume (0.0 - 1.0)
    pub fn set_volume(&mut self, vol: f32) {
        self.volume = vol.clamp(0.0, 1.0);
    }

    pub fn get_volume(&self) -> f32 {
        self.volume
    }
}

#[inline]
fn read_u16(bytes: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([bytes[at], bytes[at + 1]])
}

#[inline]
fn read_u32(bytes: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}

fn parse_format(body: &[u8]) -> Result<WavFormat, String> {
    if body.len() < 16 {
        return Err(format!("'fmt ' chunk too short ({} bytes)", body.len()));
    }

    let mut format_tag = read_u16(body, 0);
    let channels = read_u16(body, 2);
    let sample_rate = read_u32(body, 4);
    let block_align = read_u16(body, 12);
    let bits_per_sample = read_u16(body, 14);

    // WAVE_FORMAT_EXTENSIBLE carries the real tag in the sub-format GUID
    if format_tag == FORMAT_EXTENSIBLE {
        if body.len() < 26 {
            return Err("extensible 'fmt ' chunk too short".to_string());
        }
        format_tag = read_u16(body, 24);
    }

    if channels == 0 {
        return Err("channel count is zero".to_string());
    }
    if sample_rate == 0 {
        return Err("sample rate is zero".to_string());
    }

    let supported = matches!(
        (format_tag, bits_per_sample),
        (FORMAT_PCM, 8 | 16 | 24 | 32) | (FORMAT_IEEE_FLOAT, 32)
    );
    if !supported {
        return Err(format!(
            "unsupported encoding (format tag {:#06x}, {} bits)",
            format_tag, bits_per_sample
        ));
    }

    let expected_align = channels as usize * (bits_per_sample as usize / 8);
    if block_align as usize != expected_align {
        return Err(format!(
            "block align {} does not match {} channels of {} bits",
            block_align, channels, bits_per_sample
        ));
    }

    Ok(WavFormat {
        format_tag,
        channels,
        sample_rate,
        block_align,
        bits_per_sample,
    })
}

fn decode_samples(format: &WavFormat, data: &[u8]) -> Result<Vec<f32>, String> {
    let width = format.bits_per_sample as usize / 8;
    let samples = data.chunks_exact(width);

    let decoded = match (format.format_tag, format.bits_per_sample) {
        (FORMAT_PCM, 8) => samples.map(|s| (s[0] as f32 - 128.0) / 128.0).collect(),
        (FORMAT_PCM, 16) => samples
            .map(|s| i16::from_le_bytes([s[0], s[1]]) as f32 / 32768.0)
            .collect(),
        (FORMAT_PCM, 24) => samples
            .map(|s| {
                // Sign-extend through the top byte of an i32
                let v = i32::from_le_bytes([0, s[0], s[1], s[2]]) >> 8;
                v as f32 / 8_388_608.0
            })
            .collect(),
        (FORMAT_PCM, 32) => samples
            .map(|s| i32::from_le_bytes([s[0], s[1], s[2], s[3]]) as f32 / 2_147_483_648.0)
            .collect(),
        (FORMAT_IEEE_FLOAT, 32) => samples
            .map(|s| f32::from_le_bytes([s[0], s[1], s[2], s[3]]).clamp(-1.0, 1.0))
            .collect(),
        (tag, bits) => {
            return Err(format!(
                "unsupported encoding (format tag {:#06x}, {} bits)",
                tag, bits
            ));
        }
    };

    Ok(decoded)
}
