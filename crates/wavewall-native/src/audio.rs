// ---------------- Native audio (symphonia + cpal) ----------------
//
// The bundled track is decoded up front into interleaved f32 frames and
// streamed in a loop through the default output device. Play/pause only
// flips a flag shared with the audio callback and starts/stops the stream.

use crate::assets::AssetDir;
use anyhow::{anyhow, Context};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{FromSample, SizedSample};
use std::fs::File;
use std::path::Path;
use std::sync::{Arc, Mutex};
use wavewall_core::{AudioError, AudioLoader, PlaybackHandle};

/// Decoded PCM: interleaved samples at `sample_rate` with `channels` per frame.
#[derive(Clone, Debug, Default)]
pub struct DecodedTrack {
    pub samples: Vec<f32>,
    pub sample_rate: u32,
    pub channels: usize,
}

impl DecodedTrack {
    pub fn frames(&self) -> usize {
        if self.channels == 0 {
            0
        } else {
            self.samples.len() / self.channels
        }
    }
}

/// Endless reader over a decoded track, converting rate and channel count
/// for the output device.
pub struct LoopingTrack {
    track: DecodedTrack,
    position: f64,
    step: f64,
    playing: bool,
}

impl LoopingTrack {
    pub fn new(track: DecodedTrack, output_rate: u32) -> Self {
        let step = track.sample_rate as f64 / output_rate.max(1) as f64;
        Self {
            track,
            position: 0.0,
            step,
            playing: false,
        }
    }

    pub fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
    }

    /// Fill one output frame. Silence while paused or empty.
    pub fn next_frame(&mut self, out: &mut [f32]) {
        let frames = self.track.frames();
        if !self.playing || frames == 0 {
            out.iter_mut().for_each(|s| *s = 0.0);
            return;
        }
        let channels = self.track.channels;
        let i0 = self.position.floor() as usize % frames;
        let i1 = (i0 + 1) % frames;
        let frac = (self.position - self.position.floor()) as f32;
        for (c, o) in out.iter_mut().enumerate() {
            let src = c.min(channels - 1);
            let a = self.track.samples[i0 * channels + src];
            let b = self.track.samples[i1 * channels + src];
            *o = a + (b - a) * frac;
        }
        self.position += self.step;
        if self.position >= frames as f64 {
            self.position -= frames as f64;
        }
    }
}

/// Decode a whole file to interleaved f32 samples.
pub fn decode_file(path: &Path) -> anyhow::Result<DecodedTrack> {
    use symphonia::core::audio::SampleBuffer;
    use symphonia::core::codecs::{DecoderOptions, CODEC_TYPE_NULL};
    use symphonia::core::errors::Error as SymphoniaError;
    use symphonia::core::formats::FormatOptions;
    use symphonia::core::io::MediaSourceStream;
    use symphonia::core::meta::MetadataOptions;
    use symphonia::core::probe::Hint;

    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let mss = MediaSourceStream::new(Box::new(file), Default::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    let probed = symphonia::default::get_probe()
        .format(&hint, mss, &FormatOptions::default(), &MetadataOptions::default())
        .context("probing audio format")?;
    let mut format = probed.format;

    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or_else(|| anyhow!("no audio track in {}", path.display()))?;
    let track_id = track.id;
    let sample_rate = track
        .codec_params
        .sample_rate
        .ok_or_else(|| anyhow!("unknown sample rate"))?;
    let mut channels = track.codec_params.channels.map(|c| c.count()).unwrap_or(2);

    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())
        .context("creating decoder")?;

    let mut samples: Vec<f32> = Vec::new();
    let mut sample_buf: Option<SampleBuffer<f32>> = None;
    loop {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            Err(SymphoniaError::IoError(e)) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
                break;
            }
            Err(e) => {
                log::warn!("error reading packet: {e}");
                break;
            }
        };
        if packet.track_id() != track_id {
            continue;
        }
        let decoded = match decoder.decode(&packet) {
            Ok(decoded) => decoded,
            Err(SymphoniaError::DecodeError(e)) => {
                log::warn!("skipping undecodable packet: {e}");
                continue;
            }
            Err(e) => return Err(e).context("decoding audio"),
        };
        if sample_buf.is_none() {
            let spec = *decoded.spec();
            channels = spec.channels.count();
            sample_buf = Some(SampleBuffer::new(decoded.capacity() as u64, spec));
        }
        if let Some(buf) = sample_buf.as_mut() {
            buf.copy_interleaved_ref(decoded);
            samples.extend_from_slice(buf.samples());
        }
    }

    if samples.is_empty() {
        return Err(anyhow!("{} decoded to no audio", path.display()));
    }
    Ok(DecodedTrack {
        samples,
        sample_rate,
        channels,
    })
}

/// Opens bundled tracks on the default output device.
pub struct NativeLoader {
    assets: AssetDir,
}

impl NativeLoader {
    pub fn new(assets: AssetDir) -> Self {
        Self { assets }
    }
}

impl AudioLoader for NativeLoader {
    type Handle = NativePlayer;

    fn load_looping(&mut self, name: &str) -> Result<NativePlayer, AudioError> {
        let path = self
            .assets
            .resolve(name)
            .ok_or_else(|| AudioError::AssetUnavailable {
                name: name.to_string(),
            })?;
        let track = decode_file(&path).map_err(|e| AudioError::Engine(format!("{e:#}")))?;
        log::info!(
            "[audio] decoded {}: {} frames @ {} Hz, {} ch",
            path.display(),
            track.frames(),
            track.sample_rate,
            track.channels
        );
        NativePlayer::open(track).map_err(|e| AudioError::Engine(format!("{e:#}")))
    }
}

/// Output stream looping one decoded track.
pub struct NativePlayer {
    stream: cpal::Stream,
    track: Arc<Mutex<LoopingTrack>>,
}

impl NativePlayer {
    fn open(decoded: DecodedTrack) -> anyhow::Result<Self> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| anyhow!("no default output device"))?;
        let supported = device
            .default_output_config()
            .context("querying output config")?;
        let sample_format = supported.sample_format();
        let config: cpal::StreamConfig = supported.into();

        let track = Arc::new(Mutex::new(LoopingTrack::new(decoded, config.sample_rate.0)));
        let stream = match sample_format {
            cpal::SampleFormat::F32 => build_stream::<f32>(&device, &config, Arc::clone(&track)),
            cpal::SampleFormat::I16 => build_stream::<i16>(&device, &config, Arc::clone(&track)),
            cpal::SampleFormat::U16 => build_stream::<u16>(&device, &config, Arc::clone(&track)),
            other => return Err(anyhow!("unsupported sample format {other:?}")),
        }
        .context("building output stream")?;
        // some hosts start streams eagerly; the handle begins paused
        if let Err(e) = stream.pause() {
            log::debug!("[audio] initial pause not supported: {e}");
        }
        Ok(Self { stream, track })
    }

    fn set_playing(&self, playing: bool) {
        match self.track.lock() {
            Ok(mut t) => t.set_playing(playing),
            Err(poisoned) => poisoned.into_inner().set_playing(playing),
        }
    }
}

impl PlaybackHandle for NativePlayer {
    fn play(&mut self) -> Result<(), AudioError> {
        self.set_playing(true);
        self.stream
            .play()
            .map_err(|e| AudioError::Engine(e.to_string()))
    }

    fn pause(&mut self) {
        self.set_playing(false);
        if let Err(e) = self.stream.pause() {
            log::warn!("[audio] pause failed: {e}");
        }
    }
}

fn build_stream<T>(
    device: &cpal::Device,
    config: &cpal::StreamConfig,
    track: Arc<Mutex<LoopingTrack>>,
) -> Result<cpal::Stream, cpal::BuildStreamError>
where
    T: SizedSample + FromSample<f32>,
{
    let channels = config.channels as usize;
    let mut frame = vec![0.0f32; channels];
    device.build_output_stream(
        config,
        move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
            let mut guard = match track.lock() {
                Ok(g) => g,
                Err(poisoned) => poisoned.into_inner(),
            };
            for out in data.chunks_mut(channels) {
                guard.next_frame(&mut frame);
                for (o, s) in out.iter_mut().zip(frame.iter()) {
                    *o = T::from_sample(*s);
                }
            }
        },
        |err| log::error!("audio stream error: {err}"),
        None,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(frames: usize, channels: usize, rate: u32) -> DecodedTrack {
        let mut samples = Vec::with_capacity(frames * channels);
        for f in 0..frames {
            for c in 0..channels {
                samples.push(f as f32 + c as f32 * 100.0);
            }
        }
        DecodedTrack {
            samples,
            sample_rate: rate,
            channels,
        }
    }

    #[test]
    fn paused_track_outputs_silence() {
        let mut t = LoopingTrack::new(ramp(4, 2, 48_000), 48_000);
        let mut out = [1.0f32; 2];
        t.next_frame(&mut out);
        assert_eq!(out, [0.0, 0.0]);
    }

    #[test]
    fn playing_track_loops_back_to_start() {
        let mut t = LoopingTrack::new(ramp(3, 1, 44_100), 44_100);
        t.set_playing(true);
        let mut out = [0.0f32; 1];
        let mut seen = Vec::new();
        for _ in 0..7 {
            t.next_frame(&mut out);
            seen.push(out[0]);
        }
        assert_eq!(seen, vec![0.0, 1.0, 2.0, 0.0, 1.0, 2.0, 0.0]);
    }

    #[test]
    fn mono_source_fills_every_output_channel() {
        let mut t = LoopingTrack::new(ramp(2, 1, 48_000), 48_000);
        t.set_playing(true);
        let mut out = [9.0f32; 2];
        t.next_frame(&mut out);
        t.next_frame(&mut out);
        assert_eq!(out, [1.0, 1.0]);
    }

    #[test]
    fn rate_conversion_interpolates() {
        // 24 kHz source on a 48 kHz device advances half a frame per output
        let mut t = LoopingTrack::new(ramp(4, 1, 24_000), 48_000);
        t.set_playing(true);
        let mut out = [0.0f32; 1];
        let mut seen = Vec::new();
        for _ in 0..4 {
            t.next_frame(&mut out);
            seen.push(out[0]);
        }
        assert_eq!(seen, vec![0.0, 0.5, 1.0, 1.5]);
    }

    #[test]
    fn decoding_missing_file_fails() {
        assert!(decode_file(Path::new("/nonexistent/music.mp3")).is_err());
    }
}
