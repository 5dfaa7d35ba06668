//! Audio file loading and saving.
//!
//! The analysis core only ever sees [`RawSamples`]. Decoding and encoding sit
//! behind the [`AudioCodec`] trait; [`WavCodec`] implements it for 16-bit
//! integer PCM WAV files using `hound`.

use std::path::Path;

use crate::repr::{RAW_SAMPLE_BITS, RawSamples};
use crate::{AudioAnalysisError, AudioAnalysisResult};

/// Decodes files into raw samples and encodes raw samples back to files.
pub trait AudioCodec {
    /// Decodes `path`.
    ///
    /// # Errors
    /// Returns [`AudioAnalysisError::Load`] if the file cannot be decoded.
    fn load(&self, path: &Path) -> AudioAnalysisResult<RawSamples>;

    /// Encodes `samples` into `path`, replacing any existing file.
    ///
    /// # Errors
    /// Returns [`AudioAnalysisError::Save`] if the file cannot be written.
    fn save(&self, samples: &RawSamples, path: &Path) -> AudioAnalysisResult<()>;
}

/// 16-bit PCM WAV codec.
#[derive(Debug, Clone, Copy, Default)]
pub struct WavCodec;

impl AudioCodec for WavCodec {
    fn load(&self, path: &Path) -> AudioAnalysisResult<RawSamples> {
        let reader = hound::WavReader::open(path).map_err(|e| AudioAnalysisError::load(path, e))?;
        let spec = reader.spec();

        if spec.sample_format != hound::SampleFormat::Int
            || u32::from(spec.bits_per_sample) != RAW_SAMPLE_BITS
        {
            return Err(AudioAnalysisError::load(
                path,
                format!(
                    "unsupported sample format {:?} with {} bits, expected 16-bit integer PCM",
                    spec.sample_format, spec.bits_per_sample
                ),
            ));
        }

        let data = reader
            .into_samples::<i16>()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| AudioAnalysisError::load(path, e))?;

        tracing::debug!(
            path = %path.display(),
            samples = data.len(),
            sample_rate = spec.sample_rate,
            channels = spec.channels,
            "decoded WAV file"
        );

        Ok(RawSamples::new(data, spec.sample_rate, spec.channels))
    }

    fn save(&self, samples: &RawSamples, path: &Path) -> AudioAnalysisResult<()> {
        let spec = hound::WavSpec {
            channels: samples.channels(),
            sample_rate: samples.sample_rate(),
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };

        let mut writer =
            hound::WavWriter::create(path, spec).map_err(|e| AudioAnalysisError::save(path, e))?;
        for &sample in samples.as_slice() {
            writer
                .write_sample(sample)
                .map_err(|e| AudioAnalysisError::save(path, e))?;
        }
        writer
            .finalize()
            .map_err(|e| AudioAnalysisError::save(path, e))?;

        tracing::debug!(path = %path.display(), samples = samples.len(), "wrote WAV file");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wav_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("round_trip.wav");
        let samples = RawSamples::new(vec![0, 1, -1, i16::MAX, i16::MIN, 1234], 22050, 2);

        WavCodec.save(&samples, &path).unwrap();
        let loaded = WavCodec.load(&path).unwrap();
        assert_eq!(loaded, samples);
    }

    #[test]
    fn test_missing_file_is_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = WavCodec.load(&dir.path().join("missing.wav"));
        assert!(matches!(result, Err(AudioAnalysisError::Load { .. })));
    }

    #[test]
    fn test_float_wav_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("float.wav");
        let spec = hound::WavSpec {
            channels: 2,
            sample_rate: 8000,
            bits_per_sample: 32,
            sample_format: hound::SampleFormat::Float,
        };
        let mut writer = hound::WavWriter::create(&path, spec).unwrap();
        writer.write_sample(0.5f32).unwrap();
        writer.write_sample(-0.5f32).unwrap();
        writer.finalize().unwrap();

        assert!(matches!(
            WavCodec.load(&path),
            Err(AudioAnalysisError::Load { .. })
        ));
    }

    #[test]
    fn test_unwritable_path_is_save_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("out.wav");
        let samples = RawSamples::new(vec![0, 0], 8000, 2);
        assert!(matches!(
            WavCodec.save(&samples, &path),
            Err(AudioAnalysisError::Save { .. })
        ));
    }
}
