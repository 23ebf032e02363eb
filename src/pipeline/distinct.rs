use crate::color::Color;

/// Acceptable brightness range for palette colors. Colors whose channel sum
/// is too close to pure black or pure white are dropped before distinctness
/// is ever considered.
#[derive(Debug, Clone, Copy)]
pub struct BrightnessBand {
    pub min: u8,
    pub max: u8,
}

impl BrightnessBand {
    pub fn new(min: u8, max: u8) -> Self {
        Self { min, max }
    }

    /// Whether a color falls inside the band.
    ///
    /// Reuses the palette distance function against the black and white
    /// anchors: a per-channel brightness bound of `b` corresponds to a
    /// channel-sum distance of `3 * b`.
    pub fn admits(&self, color: Color) -> bool {
        if color.distance(Color::BLACK) < u16::from(self.min) * 3 {
            return false;
        }
        if color.distance(Color::WHITE) < u16::from(255 - self.max) * 3 {
            return false;
        }
        true
    }
}

/// Greedily build the set of mutually-distinct colors for one threshold.
///
/// Samples are visited in order; a color is accepted only if the band admits
/// it and its distance to every already-accepted color is at least
/// `threshold`. First-seen colors win ties, and no re-clustering happens
/// afterwards. O(n * k) for n samples and k accepted colors.
pub fn distinct_colors(samples: &[Color], threshold: u8, band: BrightnessBand) -> Vec<Color> {
    let mut distinct: Vec<Color> = Vec::new();
    for &color in samples {
        if !band.admits(color) {
            continue;
        }
        let too_similar = distinct
            .iter()
            .any(|&accepted| color.distance(accepted) < u16::from(threshold));
        if !too_similar {
            distinct.push(color);
        }
    }
    distinct
}
