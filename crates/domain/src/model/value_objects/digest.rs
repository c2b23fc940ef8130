use serde::{Deserialize, Serialize};

/// Distributional summary of one metric at one grouping level.
///
/// - `mean` is rounded to the nearest integer, halves away from zero.
/// - `median` is the lower middle value when the number of observations is even.
///
/// A digest always covers at least one observation, so
/// `min <= median <= max` and `min <= mean <= max` hold for every instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Digest {
    pub max: usize,
    pub min: usize,
    pub mean: usize,
    pub median: usize,
}

impl Digest {
    /// Summarise `observations`. Returns `None` when there is nothing to summarise.
    pub fn from_observations<I>(observations: I) -> Option<Self>
    where
        I: IntoIterator<Item = usize>,
    {
        let mut values: Vec<usize> = observations.into_iter().collect();
        if values.is_empty() {
            return None;
        }
        values.sort_unstable();

        let n = values.len();
        let sum: u128 = values.iter().map(|&v| v as u128).sum();

        Some(Self {
            max: values[n - 1],
            min: values[0],
            mean: rounded_mean(sum, n),
            median: values[(n - 1) / 2],
        })
    }

    /// Digest of a single observation.
    pub const fn single(value: usize) -> Self {
        Self { max: value, min: value, mean: value, median: value }
    }
}

// (2*sum + n) / (2*n) == floor(sum/n + 1/2) for non-negative inputs.
fn rounded_mean(sum: u128, n: usize) -> usize {
    let n = n as u128;
    let mean = (2 * sum + n) / (2 * n);
    usize::try_from(mean).unwrap_or(usize::MAX)
}
