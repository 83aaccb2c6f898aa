//! Dispersion and central tendency over already-extracted data

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use statrs::statistics::Statistics;

use crate::types::Mode;

/// Population variance: `(1/n) * sum((x - mean)^2)`, `None` when empty
pub fn variance(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    Some(Statistics::population_variance(data))
}

pub fn standard_deviation(data: &[f64]) -> Option<f64> {
    variance(data).map(f64::sqrt)
}

/// Middle value, or the mean of the two middle values for even lengths.
///
/// `data` is sorted in place unless `already_sorted` is set.
pub fn median(data: &mut [f64], already_sorted: bool) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    if !already_sorted {
        data.sort_by(f64::total_cmp);
    }

    let mid = data.len() / 2;
    if data.len() % 2 == 0 {
        Some((data[mid - 1] + data[mid]) / 2.0)
    } else {
        Some(data[mid])
    }
}

/// Most frequent value(s).
///
/// Only values seen more than once qualify, so data without repeats has no
/// mode. Ties resolve to the value that occurred first.
pub fn mode(data: &[f64], find_all: bool) -> Option<Mode> {
    // (value, count) in order of first occurrence
    let mut histogram: Vec<(f64, usize)> = Vec::new();
    let mut slots: HashMap<u64, usize> = HashMap::new();

    for &x in data {
        // -0.0 and 0.0 count as the same value
        let x = x + 0.0;
        match slots.entry(x.to_bits()) {
            Entry::Occupied(slot) => histogram[*slot.get()].1 += 1,
            Entry::Vacant(slot) => {
                slot.insert(histogram.len());
                histogram.push((x, 1));
            }
        }
    }

    let best = histogram.iter().map(|&(_, count)| count).max()?;
    if best <= 1 {
        return None;
    }

    let mut winners = histogram
        .iter()
        .filter(|&&(_, count)| count == best)
        .map(|&(value, _)| value);

    if find_all {
        Some(Mode::All(winners.collect()))
    } else {
        winners.next().map(Mode::Single)
    }
}
