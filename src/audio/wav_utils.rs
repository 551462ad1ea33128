use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use hound::{SampleFormat, WavSpec, WavWriter};
use std::io::Cursor;
use std::path::Path;

use crate::error::Result;

/// MIME type of every audio payload produced by the server
pub const WAV_MIME_TYPE: &str = "audio/wav";

fn pcm16_spec(sample_rate: u32) -> WavSpec {
    WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    }
}

/// Convert a float sample in [-1.0, 1.0] to 16-bit PCM, clipping outliers
fn to_pcm16(sample: f32) -> i16 {
    if sample.is_nan() {
        return 0;
    }
    (sample.clamp(-1.0, 1.0) * i16::MAX as f32) as i16
}

fn write_samples<W>(writer: &mut WavWriter<W>, samples: &[f32]) -> Result<()>
where
    W: std::io::Write + std::io::Seek,
{
    for &sample in samples {
        writer.write_sample(to_pcm16(sample))?;
    }
    Ok(())
}

/// Encode mono float samples as an in-memory 16-bit PCM WAV file
pub fn encode_wav(samples: &[f32], sample_rate: u32) -> Result<Vec<u8>> {
    let mut output = Cursor::new(Vec::new());
    {
        let mut writer = WavWriter::new(&mut output, pcm16_spec(sample_rate))?;
        write_samples(&mut writer, samples)?;
        writer.finalize()?;
    }

    Ok(output.into_inner())
}

/// Write mono float samples to a 16-bit PCM WAV file on disk
///
/// `sample_rate` only sets the header; samples are not resampled.
pub fn write_wav_file(path: &Path, samples: &[f32], sample_rate: u32) -> Result<()> {
    let mut writer = WavWriter::create(path, pcm16_spec(sample_rate))?;
    write_samples(&mut writer, samples)?;
    writer.finalize()?;
    Ok(())
}

/// Embed WAV bytes in a `data:` URI for inline playback
pub fn to_data_uri(wav_bytes: &[u8]) -> String {
    format!("data:{};base64,{}", WAV_MIME_TYPE, STANDARD.encode(wav_bytes))
}

/// Playback duration in milliseconds of `sample_count` mono samples
pub fn duration_ms(sample_count: usize, sample_rate: u32) -> f64 {
    if sample_rate == 0 {
        return 0.0;
    }
    sample_count as f64 / sample_rate as f64 * 1000.0
}
