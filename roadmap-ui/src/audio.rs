#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsValue;
use web_sys::{console, AudioContext};

/// Loại âm báo cho từng tương tác.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Year,
    Feature,
    Milestone,
    Industry,
    Navigate,
}

impl Cue {
    fn frequency(self) -> f32 {
        match self {
            Cue::Year => 523.25,
            Cue::Feature => 659.25,
            Cue::Milestone => 783.99,
            Cue::Industry => 440.0,
            Cue::Navigate => 392.0,
        }
    }
}

/// Khả năng phát âm thanh của môi trường, kiểm tra đúng một lần khi mount.
pub enum AudioSupport {
    /// Trình duyệt có Web Audio.
    Available(AudioContext),
    /// Không có Web Audio; mọi âm báo là no-op có chủ đích.
    Unavailable,
}

impl AudioSupport {
    /// Thăm dò Web Audio; thất bại nghĩa là môi trường không hỗ trợ.
    pub fn probe() -> Self {
        match AudioContext::new() {
            Ok(context) => AudioSupport::Available(context),
            Err(_) => AudioSupport::Unavailable,
        }
    }

    /// Phát một âm báo ngắn. Lỗi phát được ghi ra console thay vì nuốt im.
    pub fn play(&self, cue: Cue) {
        match self {
            AudioSupport::Available(context) => {
                if let Err(err) = play_tone(context, cue.frequency()) {
                    console::warn_1(&err);
                }
            }
            AudioSupport::Unavailable => {}
        }
    }
}

fn play_tone(context: &AudioContext, frequency: f32) -> Result<(), JsValue> {
    let oscillator = context.create_oscillator()?;
    let gain = context.create_gain()?;

    oscillator.frequency().set_value(frequency);
    gain.gain().set_value(0.04);

    oscillator.connect_with_audio_node(&gain)?;
    gain.connect_with_audio_node(&context.destination())?;

    let now = context.current_time();
    oscillator.start()?;
    oscillator.stop_with_when(now + 0.12)?;

    Ok(())
}
