use anyhow::{bail, Result};

use crate::color::Color;
use crate::palette::{Palette, PALETTE_SIZE};
use crate::pipeline::distinct::{distinct_colors, BrightnessBand};

/// A completed palette plus how many relaxation rounds were needed to fill
/// it. Zero rounds means the initial threshold already yielded sixteen
/// distinct colors.
#[derive(Debug, Clone)]
pub struct Selection {
    pub palette: Palette,
    pub rounds: u8,
}

/// Select exactly sixteen colors from the sample sequence.
///
/// Runs the distinct-set builder at the initial threshold, then keeps
/// re-running it at `threshold - round`, appending each round's full result,
/// until the accumulator holds at least sixteen entries. Each round restarts
/// from the complete sample sequence, so colors accepted earlier are not
/// removed from later candidate pools and near-duplicates can accumulate
/// across rounds. That matches the historical output; pass `dedup_rounds` to
/// instead require each round's colors to clear the relaxed threshold
/// against everything accumulated so far.
///
/// The round budget equals the initial threshold. Exhausting it fails with
/// an insufficient-distinct-colors error; no partial palette is returned.
pub fn select_palette(
    samples: &[Color],
    threshold: u8,
    band: BrightnessBand,
    dedup_rounds: bool,
) -> Result<Selection> {
    let mut accepted = distinct_colors(samples, threshold, band);
    let mut rounds: u8 = 0;

    while accepted.len() < PALETTE_SIZE {
        if rounds == threshold {
            bail!(
                "insufficient distinct colors: found {} of {} after {} relaxation rounds; \
                 lower the threshold or widen the brightness range",
                accepted.len(),
                PALETTE_SIZE,
                rounds
            );
        }
        rounds += 1;
        let relaxed = threshold - rounds;
        let batch = distinct_colors(samples, relaxed, band);
        if dedup_rounds {
            for color in batch {
                let distinct_from_accumulated = accepted
                    .iter()
                    .all(|&earlier| color.distance(earlier) >= u16::from(relaxed));
                if distinct_from_accumulated {
                    accepted.push(color);
                }
            }
        } else {
            accepted.extend(batch);
        }
    }

    accepted.truncate(PALETTE_SIZE);
    let colors: [Color; PALETTE_SIZE] = accepted
        .try_into()
        .expect("accumulator holds exactly PALETTE_SIZE entries after truncation");
    Ok(Selection {
        palette: Palette::new(colors),
        rounds,
    })
}
