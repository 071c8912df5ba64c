//! Hover tone description.
//!
//! The card asks for a short sine blip whenever the pointer enters it. The
//! tone is fire-and-forget: the shell plays it through the webview's audio
//! API and keeps no handle.

/// Oscillator waveform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Triangle,
}

impl Waveform {
    fn as_web_audio(&self) -> &'static str {
        match self {
            Waveform::Sine => "sine",
            Waveform::Square => "square",
            Waveform::Triangle => "triangle",
        }
    }
}

/// Parameters of the hover tone
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverTone {
    pub frequency_hz: f64,
    pub gain: f64,
    /// Gain the ramp ends at (exponential ramps cannot reach zero)
    pub floor_gain: f64,
    pub duration_secs: f64,
    pub waveform: Waveform,
}

impl Default for HoverTone {
    fn default() -> Self {
        Self {
            frequency_hz: 400.0,
            gain: 0.1,
            floor_gain: 0.00001,
            duration_secs: 0.1,
            waveform: Waveform::Sine,
        }
    }
}

impl HoverTone {
    /// Web Audio snippet that plays the tone once.
    pub fn script(&self) -> String {
        format!(
            r#"(() => {{
  const Ctx = window.AudioContext || window.webkitAudioContext;
  if (!Ctx) return;
  const ctx = new Ctx();
  const osc = ctx.createOscillator();
  const gain = ctx.createGain();
  osc.connect(gain);
  gain.connect(ctx.destination);
  gain.gain.value = {gain};
  osc.frequency.value = {freq};
  osc.type = "{wave}";
  osc.start();
  gain.gain.exponentialRampToValueAtTime({floor}, ctx.currentTime + {dur});
  osc.stop(ctx.currentTime + {dur});
}})();"#,
            gain = self.gain,
            freq = self.frequency_hz,
            wave = self.waveform.as_web_audio(),
            floor = self.floor_gain,
            dur = self.duration_secs,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tone_script() {
        let script = HoverTone::default().script();
        assert!(script.contains("osc.frequency.value = 400;"));
        assert!(script.contains("gain.gain.value = 0.1;"));
        assert!(script.contains(r#"osc.type = "sine";"#));
        assert!(script.contains("exponentialRampToValueAtTime(0.00001, ctx.currentTime + 0.1)"));
    }
}
