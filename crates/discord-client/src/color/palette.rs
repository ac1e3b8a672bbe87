//! Median-cut palette quantization.
//!
//! Input is read as packed RGBA quads; alpha is ignored. Output is ranked
//! by how many samples each palette entry represents.

use serde::Serialize;
use tracing::debug;

/// One palette color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaletteEntry {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl PaletteEntry {
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

/// Reduces pixel bytes to at most `count` colors, most prevalent first.
pub trait PaletteQuantizer: Send + Sync {
    fn quantize(&self, pixels: &[u8], count: usize) -> Vec<PaletteEntry>;
}

/// Median-cut quantizer: repeatedly splits the most populated box along its
/// widest channel until `count` boxes exist, then averages each box.
#[derive(Debug, Default, Clone, Copy)]
pub struct MedianCut;

impl PaletteQuantizer for MedianCut {
    fn quantize(&self, pixels: &[u8], count: usize) -> Vec<PaletteEntry> {
        let samples: Vec<[u8; 3]> = pixels
            .chunks_exact(4)
            .map(|px| [px[0], px[1], px[2]])
            .collect();

        if count == 0 || samples.is_empty() {
            return Vec::new();
        }

        let mut boxes = vec![ColorBox { samples }];
        while boxes.len() < count {
            let next = boxes
                .iter()
                .enumerate()
                .filter(|(_, b)| b.can_split())
                .max_by_key(|(_, b)| b.samples.len())
                .map(|(i, _)| i);
            let Some(idx) = next else {
                break;
            };

            let (lower, upper) = boxes.swap_remove(idx).split();
            boxes.push(lower);
            boxes.push(upper);
        }

        boxes.sort_by(|a, b| b.samples.len().cmp(&a.samples.len()));
        debug!(
            samples = pixels.len() / 4,
            colors = boxes.len(),
            "Quantized palette"
        );

        boxes.iter().map(ColorBox::average).collect()
    }
}

struct ColorBox {
    samples: Vec<[u8; 3]>,
}

impl ColorBox {
    fn range(&self, channel: usize) -> u8 {
        let (min, max) = self
            .samples
            .iter()
            .fold((u8::MAX, u8::MIN), |(lo, hi), s| {
                (lo.min(s[channel]), hi.max(s[channel]))
            });
        max.saturating_sub(min)
    }

    fn widest_channel(&self) -> usize {
        (0..3).max_by_key(|&ch| self.range(ch)).unwrap_or(0)
    }

    fn can_split(&self) -> bool {
        self.samples.len() > 1 && self.range(self.widest_channel()) > 0
    }

    fn split(mut self) -> (ColorBox, ColorBox) {
        let channel = self.widest_channel();
        self.samples.sort_unstable_by_key(|s| s[channel]);

        // Cut at the median value, never through a run of equal values.
        let pivot = self.samples[self.samples.len() / 2][channel];
        let mut at = self.samples.partition_point(|s| s[channel] < pivot);
        if at == 0 {
            at = self.samples.partition_point(|s| s[channel] <= pivot);
        }

        let upper = self.samples.split_off(at);
        (self, ColorBox { samples: upper })
    }

    fn average(&self) -> PaletteEntry {
        let n = self.samples.len().max(1) as u64;
        let mut sum = [0u64; 3];
        for s in &self.samples {
            for ch in 0..3 {
                sum[ch] += u64::from(s[ch]);
            }
        }
        let avg = |ch: usize| ((sum[ch] + n / 2) / n) as u8;

        PaletteEntry {
            red: avg(0),
            green: avg(1),
            blue: avg(2),
        }
    }
}
