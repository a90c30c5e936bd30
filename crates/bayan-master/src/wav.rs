//! WAV encoding for 16-bit stereo PCM.

use bayan_engine::Frame;
use std::io::Write;

/// Canonical 44-byte header: RIFF + fmt + data chunk headers.
const HEADER_LEN: u32 = 36;

/// Layout of the PCM stream the header describes.
struct PcmFormat {
    channels: u16,
    sample_rate: u32,
    bits_per_sample: u16,
}

impl PcmFormat {
    const STEREO_16: PcmFormat = PcmFormat {
        channels: 2,
        sample_rate: 0,
        bits_per_sample: 16,
    };

    fn block_align(&self) -> u16 {
        self.channels * (self.bits_per_sample / 8)
    }

    fn byte_rate(&self) -> u32 {
        self.sample_rate * self.block_align() as u32
    }

    fn write_header(&self, w: &mut impl Write, data_size: u32) -> std::io::Result<()> {
        w.write_all(b"RIFF")?;
        w.write_all(&(HEADER_LEN + data_size).to_le_bytes())?;
        w.write_all(b"WAVE")?;

        w.write_all(b"fmt ")?;
        w.write_all(&16u32.to_le_bytes())?;
        w.write_all(&1u16.to_le_bytes())?; // PCM
        w.write_all(&self.channels.to_le_bytes())?;
        w.write_all(&self.sample_rate.to_le_bytes())?;
        w.write_all(&self.byte_rate().to_le_bytes())?;
        w.write_all(&self.block_align().to_le_bytes())?;
        w.write_all(&self.bits_per_sample.to_le_bytes())?;

        w.write_all(b"data")?;
        w.write_all(&data_size.to_le_bytes())
    }
}

/// Write `frames` as a complete WAV file, converting to 16-bit PCM.
pub fn write_wav(w: &mut impl Write, frames: &[Frame], sample_rate: u32) -> std::io::Result<()> {
    let format = PcmFormat {
        sample_rate,
        ..PcmFormat::STEREO_16
    };
    let data_size = frames.len() as u32 * format.block_align() as u32;
    format.write_header(w, data_size)?;

    for (left, right) in frames.iter().map(|frame| frame.to_i16()) {
        w.write_all(&left.to_le_bytes())?;
        w.write_all(&right.to_le_bytes())?;
    }
    Ok(())
}

pub fn frames_to_wav(frames: &[Frame], sample_rate: u32) -> Vec<u8> {
    let mut buf = Vec::with_capacity(HEADER_LEN as usize + 8 + frames.len() * 4);
    write_wav(&mut buf, frames, sample_rate).expect("Vec<u8> write cannot fail");
    buf
}
