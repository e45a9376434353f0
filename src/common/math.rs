//! Rolling-window math over close series.
//!
//! Every series helper returns one entry per input value; entries without
//! enough history are `None`.

/// Smoothing factor for an EMA of the given period.
pub fn ema_alpha(period: usize) -> f64 {
    2.0 / (period as f64 + 1.0)
}

/// Next EMA value from the previous one.
pub fn ema_from_previous(value: f64, previous: f64, period: usize) -> f64 {
    let alpha = ema_alpha(period);
    alpha * value + (1.0 - alpha) * previous
}

/// Simple mean of a slice, `None` when empty.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population standard deviation of a slice.
pub fn population_std_dev(values: &[f64]) -> Option<f64> {
    let avg = mean(values)?;
    let variance = values.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / values.len() as f64;
    Some(variance.sqrt())
}

/// Simple moving average series.
pub fn sma_series(values: &[f64], period: usize) -> Vec<Option<f64>> {
    if period == 0 {
        return vec![None; values.len()];
    }
    (0..values.len())
        .map(|i| {
            if i + 1 < period {
                None
            } else {
                mean(&values[i + 1 - period..=i])
            }
        })
        .collect()
}

/// Rolling population standard deviation series.
pub fn std_dev_series(values: &[f64], period: usize) -> Vec<Option<f64>> {
    if period == 0 {
        return vec![None; values.len()];
    }
    (0..values.len())
        .map(|i| {
            if i + 1 < period {
                None
            } else {
                population_std_dev(&values[i + 1 - period..=i])
            }
        })
        .collect()
}

/// EMA series seeded with the SMA of the first `period` values.
///
/// The first defined entry is at index `period - 1`.
pub fn ema_series(values: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if period == 0 || values.len() < period {
        return out;
    }

    let mut previous = match mean(&values[..period]) {
        Some(seed) => seed,
        None => return out,
    };
    out[period - 1] = Some(previous);

    for (i, &value) in values.iter().enumerate().skip(period) {
        previous = ema_from_previous(value, previous, period);
        out[i] = Some(previous);
    }
    out
}

/// EMA over a series with undefined leading entries (e.g. the MACD line).
///
/// Starts at the first defined entry and stops at the next gap.
pub fn ema_series_partial(values: &[Option<f64>], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    let Some(start) = values.iter().position(Option::is_some) else {
        return out;
    };

    let defined: Vec<f64> = values[start..].iter().map_while(|v| *v).collect();
    for (offset, value) in ema_series(&defined, period).into_iter().enumerate() {
        out[start + offset] = value;
    }
    out
}
