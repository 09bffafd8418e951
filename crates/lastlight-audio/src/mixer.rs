//! Layer mixing, normalization, and clipping.
//!
//! Composers build assets as a stack of [`Layer`]s mixed into one buffer of
//! a fixed length, then normalize the sum to a headroom target before
//! export. Layers shorter than the output are padded with silence; layers
//! longer than the output are truncated.

/// A single audio layer to be mixed.
#[derive(Debug, Clone)]
pub struct Layer {
    /// Sample data.
    pub samples: Vec<f64>,
    /// Mix volume applied to every sample.
    pub volume: f64,
    /// Offset into the output buffer where this layer starts.
    pub delay_samples: usize,
}

impl Layer {
    /// Creates a layer starting at sample zero.
    pub fn new(samples: Vec<f64>, volume: f64) -> Self {
        Self {
            samples,
            volume,
            delay_samples: 0,
        }
    }

    /// Creates a layer offset into the output buffer.
    pub fn with_delay(samples: Vec<f64>, volume: f64, delay_samples: usize) -> Self {
        Self {
            samples,
            volume,
            delay_samples,
        }
    }
}

/// Accumulates layers into a mono buffer of fixed length.
#[derive(Debug)]
pub struct Mixer {
    output_samples: usize,
    layers: Vec<Layer>,
}

impl Mixer {
    /// Creates a mixer producing `output_samples` samples.
    pub fn new(output_samples: usize) -> Self {
        Self {
            output_samples,
            layers: Vec::new(),
        }
    }

    /// Adds a layer to the mix.
    pub fn add(&mut self, layer: Layer) -> &mut Self {
        self.layers.push(layer);
        self
    }

    /// Mixes all layers into a mono buffer.
    ///
    /// The output length is fixed regardless of layer lengths or delays.
    pub fn mix_mono(&self) -> Vec<f64> {
        let mut out = vec![0.0; self.output_samples];
        for layer in &self.layers {
            for (i, &s) in layer.samples.iter().enumerate() {
                let idx = layer.delay_samples + i;
                if idx >= self.output_samples {
                    break;
                }
                out[idx] += s * layer.volume;
            }
        }
        out
    }
}

/// A stereo pair of sample buffers with equal lengths.
#[derive(Debug, Clone, PartialEq)]
pub struct StereoOutput {
    /// Left channel.
    pub left: Vec<f64>,
    /// Right channel.
    pub right: Vec<f64>,
}

impl StereoOutput {
    /// Duplicates a mono buffer into both channels.
    pub fn from_mono(samples: Vec<f64>) -> Self {
        Self {
            left: samples.clone(),
            right: samples,
        }
    }

    /// Number of samples per channel.
    pub fn len(&self) -> usize {
        self.left.len()
    }

    /// True when both channels are empty.
    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }
}

/// A finished asset buffer, mono or stereo.
#[derive(Debug, Clone)]
pub enum MixerOutput {
    /// Single-channel output.
    Mono(Vec<f64>),
    /// Two-channel output.
    Stereo(StereoOutput),
}

impl MixerOutput {
    /// Number of samples per channel.
    pub fn num_samples(&self) -> usize {
        match self {
            MixerOutput::Mono(samples) => samples.len(),
            MixerOutput::Stereo(stereo) => stereo.len(),
        }
    }

    /// True for the stereo variant.
    pub fn is_stereo(&self) -> bool {
        matches!(self, MixerOutput::Stereo(_))
    }
}

/// Minimum peak considered non-silent during normalization.
const PEAK_FLOOR: f64 = 1e-6;

/// Scales the buffer so its peak sits at `headroom`.
///
/// The observed peak is floored at a small epsilon so silent buffers pass
/// through unchanged instead of dividing by zero.
pub fn normalize(samples: &mut [f64], headroom: f64) {
    let peak = samples.iter().fold(0.0f64, |m, s| m.max(s.abs()));
    let peak = peak.max(PEAK_FLOOR);
    let gain = headroom / peak;
    for s in samples.iter_mut() {
        *s *= gain;
    }
}

/// Normalizes both channels of a stereo buffer by their shared peak.
///
/// Using a single gain for both channels preserves the stereo image.
pub fn normalize_stereo(stereo: &mut StereoOutput, headroom: f64) {
    let peak = stereo
        .left
        .iter()
        .chain(stereo.right.iter())
        .fold(0.0f64, |m, s| m.max(s.abs()));
    let peak = peak.max(PEAK_FLOOR);
    let gain = headroom / peak;
    for s in stereo.left.iter_mut().chain(stereo.right.iter_mut()) {
        *s *= gain;
    }
}

/// Hard-clamps every sample to [-1, 1].
pub fn clip(samples: &mut [f64]) {
    for s in samples.iter_mut() {
        *s = s.clamp(-1.0, 1.0);
    }
}
