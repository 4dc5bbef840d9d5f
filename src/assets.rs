//! Presentation resources: the food texture and the eat/crash sounds.
//!
//! Everything is generated at startup so the binary needs no asset files on
//! disk. The sounds are short synthesized WAV tones; the texture is a drawn
//! apple. Decode failures are fatal and reported before the window loop
//! starts. Resources are dropped with the struct on process exit.

use anyhow::{anyhow, Result};
use macroquad::audio::{load_sound_from_bytes, Sound};
use macroquad::color::Color;
use macroquad::texture::{FilterMode, Image, Texture2D};

use crate::types::CELL_SIZE;

const APPLE_RED: Color = Color::new(0.85, 0.16, 0.12, 1.0);
const STEM_BROWN: Color = Color::new(0.35, 0.22, 0.08, 1.0);
const CLEAR: Color = Color::new(0.0, 0.0, 0.0, 0.0);

const SAMPLE_RATE: u32 = 44_100;

pub struct Assets {
    pub food: Texture2D,
    pub eat: Sound,
    pub crash: Sound,
}

impl Assets {
    pub async fn load() -> Result<Self> {
        let food = food_texture();

        let eat = load_sound_from_bytes(&tone_wav(880.0, 0.08, 0.5))
            .await
            .map_err(|err| anyhow!("failed to decode eat sound: {err:?}"))?;
        let crash = load_sound_from_bytes(&tone_wav(110.0, 0.25, 0.6))
            .await
            .map_err(|err| anyhow!("failed to decode crash sound: {err:?}"))?;

        Ok(Self { food, eat, crash })
    }
}

/// One cell-sized apple: a filled circle with a short stem.
fn food_texture() -> Texture2D {
    let size = CELL_SIZE as u16;
    let mut image = Image::gen_image_color(size, size, CLEAR);

    let center = (CELL_SIZE as f32 - 1.0) / 2.0;
    let radius = CELL_SIZE as f32 * 0.42;

    for y in 0..size as u32 {
        for x in 0..size as u32 {
            let dx = x as f32 - center;
            let dy = y as f32 - (center + 1.5);
            if dx * dx + dy * dy <= radius * radius {
                image.set_pixel(x, y, APPLE_RED);
            }
        }
    }

    let stem_x = CELL_SIZE as u32 / 2;
    for y in 1..4 {
        image.set_pixel(stem_x, y, STEM_BROWN);
    }

    let texture = Texture2D::from_image(&image);
    texture.set_filter(FilterMode::Nearest);
    texture
}

/// A mono 16-bit PCM WAV holding a sine tone with a linear fade-out.
fn tone_wav(freq_hz: f32, duration_secs: f32, volume: f32) -> Vec<u8> {
    let sample_count = (duration_secs * SAMPLE_RATE as f32) as u32;
    let data_len = sample_count * 2;
    let mut wav = Vec::with_capacity(44 + data_len as usize);

    // RIFF / fmt / data chunks for PCM16 mono.
    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&(36 + data_len).to_le_bytes());
    wav.extend_from_slice(b"WAVE");
    wav.extend_from_slice(b"fmt ");
    wav.extend_from_slice(&16u32.to_le_bytes());
    wav.extend_from_slice(&1u16.to_le_bytes());
    wav.extend_from_slice(&1u16.to_le_bytes());
    wav.extend_from_slice(&SAMPLE_RATE.to_le_bytes());
    wav.extend_from_slice(&(SAMPLE_RATE * 2).to_le_bytes());
    wav.extend_from_slice(&2u16.to_le_bytes());
    wav.extend_from_slice(&16u16.to_le_bytes());
    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&data_len.to_le_bytes());

    let amplitude = volume.clamp(0.0, 1.0) * 0.7;
    for n in 0..sample_count {
        let t = n as f32 / SAMPLE_RATE as f32;
        let fade = 1.0 - n as f32 / sample_count as f32;
        let value = (std::f32::consts::TAU * freq_hz * t).sin() * amplitude * fade;
        let sample = (value * i16::MAX as f32) as i16;
        wav.extend_from_slice(&sample.to_le_bytes());
    }

    wav
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_wav_has_riff_header_and_expected_length() {
        let wav = tone_wav(440.0, 0.1, 0.5);
        let samples = (0.1 * SAMPLE_RATE as f32) as usize;

        assert_eq!(&wav[0..4], b"RIFF");
        assert_eq!(&wav[8..12], b"WAVE");
        assert_eq!(wav.len(), 44 + samples * 2);
    }

    #[test]
    fn test_tone_wav_fades_to_silence() {
        let wav = tone_wav(440.0, 0.05, 1.0);
        let last = i16::from_le_bytes([wav[wav.len() - 2], wav[wav.len() - 1]]);
        assert!(last.abs() < 1000, "tail sample {last} is not near silence");
    }
}
