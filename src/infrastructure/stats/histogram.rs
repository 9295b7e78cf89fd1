// ============================================================
// AMOUNT HISTOGRAM
// ============================================================
// Equal-width bins with fraud/legit counts for the amount-vs-fraud view

use crate::domain::metrics::{AmountBin, AmountHistogram, AmountSample};

/// Bin the amount samples into `bin_count` equal-width bins over
/// [min, max]. Non-finite amounts are skipped; a constant amount series
/// collapses to a single bin; no samples at all reports `None`.
pub fn build_amount_histogram(
    samples: &[AmountSample],
    bin_count: usize,
) -> Option<AmountHistogram> {
    if bin_count == 0 {
        return None;
    }
    let amounts: Vec<f64> = samples
        .iter()
        .map(|sample| sample.transaction_amount)
        .filter(|amount| amount.is_finite())
        .collect();
    if amounts.is_empty() {
        return None;
    }

    let min = amounts.iter().copied().fold(f64::INFINITY, f64::min);
    let max = amounts.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if min == max {
        let mut bin = AmountBin {
            lower: min,
            upper: max,
            fraud: 0,
            legit: 0,
        };
        for sample in samples {
            if !sample.transaction_amount.is_finite() {
                continue;
            }
            if sample.is_fraud == 1 {
                bin.fraud += 1;
            } else {
                bin.legit += 1;
            }
        }
        return Some(AmountHistogram { bins: vec![bin] });
    }

    let width = (max - min) / bin_count as f64;
    let mut bins: Vec<AmountBin> = (0..bin_count)
        .map(|index| AmountBin {
            lower: min + index as f64 * width,
            upper: min + (index + 1) as f64 * width,
            fraud: 0,
            legit: 0,
        })
        .collect();

    for sample in samples {
        let amount = sample.transaction_amount;
        if !amount.is_finite() {
            continue;
        }
        // The maximum lands in the last bin instead of opening a new one
        let mut index = ((amount - min) / (max - min) * bin_count as f64).floor() as usize;
        if index >= bin_count {
            index = bin_count - 1;
        }
        if sample.is_fraud == 1 {
            bins[index].fraud += 1;
        } else {
            bins[index].legit += 1;
        }
    }

    Some(AmountHistogram { bins })
}
