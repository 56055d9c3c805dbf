/// Sound engine: procedural 8-bit style sound effects via rodio.
///
/// Both effects are generated as in-memory WAV buffers at init time.
/// Playback is fire-and-forget (non-blocking) via rodio's Sink.
///
/// Compile without the "sound" feature to disable audio entirely
/// (SoundEngine::new() then reports no engine).

#[cfg(feature = "sound")]
mod inner {
    use std::io::Cursor;
    use std::sync::Arc;

    use rodio::{OutputStream, OutputStreamHandle, Sink};

    const SAMPLE_RATE: u32 = 22050;

    /// Pre-generated WAV buffers for each sound effect.
    pub struct SoundEngine {
        _stream: OutputStream,
        handle: OutputStreamHandle,
        sfx_found: Arc<Vec<u8>>,
        sfx_victory: Arc<Vec<u8>>,
    }

    impl SoundEngine {
        pub fn new() -> Option<Self> {
            let (stream, handle) = OutputStream::try_default().ok()?;

            let sfx_found = Arc::new(make_wav(&gen_found()));
            let sfx_victory = Arc::new(make_wav(&gen_victory()));

            Some(SoundEngine {
                _stream: stream,
                handle,
                sfx_found,
                sfx_victory,
            })
        }

        fn play(&self, buf: &Arc<Vec<u8>>) {
            if let Ok(sink) = Sink::try_new(&self.handle) {
                let cursor = Cursor::new(buf.as_ref().clone());
                if let Ok(src) = rodio::Decoder::new(cursor) {
                    sink.append(src);
                    sink.detach(); // fire-and-forget
                }
            }
        }

        /// Two quick rising blips when a word is found.
        pub fn play_found(&self) {
            self.play(&self.sfx_found);
        }

        /// Short ascending fanfare on completing the round.
        pub fn play_victory(&self) {
            self.play(&self.sfx_victory);
        }
    }

    // ── Waveform generators ──

    /// Square wave with a linear decay envelope.
    fn square(freq: f32, secs: f32, amp: f32) -> Vec<i16> {
        let n = (SAMPLE_RATE as f32 * secs) as usize;
        (0..n)
            .map(|t| {
                let phase = (t as f32 * freq / SAMPLE_RATE as f32).fract();
                let wave = if phase < 0.5 { 1.0 } else { -1.0 };
                let env = 1.0 - t as f32 / n as f32 * 0.7;
                (wave * amp * env * i16::MAX as f32) as i16
            })
            .collect()
    }

    fn gen_found() -> Vec<i16> {
        let mut s = square(660.0, 0.07, 0.28);
        s.extend(square(990.0, 0.09, 0.28));
        s
    }

    fn gen_victory() -> Vec<i16> {
        let mut s = Vec::new();
        for &freq in &[523.25f32, 659.25, 783.99, 1046.5] {
            s.extend(square(freq, 0.11, 0.3));
        }
        s.extend(square(1046.5, 0.22, 0.3));
        s
    }

    /// Wrap PCM samples in a 16-bit mono RIFF/WAV container.
    fn make_wav(samples: &[i16]) -> Vec<u8> {
        let data_len = (samples.len() * 2) as u32;
        let byte_rate = SAMPLE_RATE * 2;

        let mut wav = Vec::with_capacity(44 + data_len as usize);
        wav.extend_from_slice(b"RIFF");
        wav.extend_from_slice(&(36 + data_len).to_le_bytes());
        wav.extend_from_slice(b"WAVE");
        wav.extend_from_slice(b"fmt ");
        wav.extend_from_slice(&16u32.to_le_bytes());
        wav.extend_from_slice(&1u16.to_le_bytes()); // PCM
        wav.extend_from_slice(&1u16.to_le_bytes()); // mono
        wav.extend_from_slice(&SAMPLE_RATE.to_le_bytes());
        wav.extend_from_slice(&byte_rate.to_le_bytes());
        wav.extend_from_slice(&2u16.to_le_bytes()); // block align
        wav.extend_from_slice(&16u16.to_le_bytes()); // bits per sample
        wav.extend_from_slice(b"data");
        wav.extend_from_slice(&data_len.to_le_bytes());
        for s in samples {
            wav.extend_from_slice(&s.to_le_bytes());
        }
        wav
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn wav_header_is_consistent() {
            let wav = make_wav(&gen_found());
            assert_eq!(&wav[0..4], b"RIFF");
            assert_eq!(&wav[8..12], b"WAVE");
            let riff_len = u32::from_le_bytes(wav[4..8].try_into().unwrap());
            assert_eq!(riff_len as usize + 8, wav.len());
        }

        #[test]
        fn generators_produce_audio() {
            assert!(!gen_found().is_empty());
            assert!(gen_victory().len() > gen_found().len());
        }
    }
}

#[cfg(not(feature = "sound"))]
mod inner {
    /// Stub engine used when audio is compiled out.
    pub struct SoundEngine;

    impl SoundEngine {
        pub fn new() -> Option<Self> {
            None
        }
        pub fn play_found(&self) {}
        pub fn play_victory(&self) {}
    }
}

pub use inner::SoundEngine;
