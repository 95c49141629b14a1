use ndarray::{Array1, Array2, Axis};
use std::collections::HashMap;

use crate::error::{InformError, Result};

/// Relabel symbols with compact codes `0..unique`, in order of first occurrence.
///
/// Returns the codes and the number of distinct symbols. Uses a dense lookup
/// table when the symbol range is small, otherwise falls back to a HashMap.
pub fn compact_codes(data: &[u64]) -> (Vec<u64>, usize) {
    let mut codes = Vec::with_capacity(data.len());
    let Some(&max_v) = data.iter().max() else {
        return (codes, 0);
    };

    // Largest symbol served by the dense lookup table
    const MAX_DENSE_RANGE: u64 = 4096;
    let mut next_id: u64 = 0;
    if max_v <= MAX_DENSE_RANGE {
        let mut dense: Vec<Option<u64>> = vec![None; max_v as usize + 1];
        for &v in data {
            let id = *dense[v as usize].get_or_insert_with(|| {
                next_id += 1;
                next_id - 1
            });
            codes.push(id);
        }
    } else {
        let mut map: HashMap<u64, u64> = HashMap::new();
        for &v in data {
            let id = *map.entry(v).or_insert_with(|| {
                next_id += 1;
                next_id - 1
            });
            codes.push(id);
        }
    }
    (codes, next_id as usize)
}

/// Number of events needed to hold every state of `exponent` base-`base` symbols.
pub fn support_size(base: u64, exponent: usize) -> Result<usize> {
    let overflow = InformError::SupportOverflow { base, exponent };
    let exp = u32::try_from(exponent).map_err(|_| overflow.clone())?;
    base.checked_pow(exp)
        .and_then(|s| usize::try_from(s).ok())
        .ok_or(overflow)
}

/// Split a 2D array into a Vec of owned 1D rows for batch processing.
pub fn rows_as_vec(data: Array2<u64>) -> Vec<Array1<u64>> {
    data.axis_iter(Axis(0)).map(|row| row.to_owned()).collect()
}
