//! Trailing moving averages over a player's game log.

use super::stats::{stat_value, StatKey, StatRow};
use crate::error::{Result, StatsError};
use crate::StatMode;
use std::iter::FusedIterator;

#[cfg(test)]
mod tests;

pub const DEFAULT_ROLLING_WINDOW: usize = 5;

/// One output point: the source entry and the average ending at it.
#[derive(Debug, PartialEq)]
pub struct RollingPoint<'a, R> {
    pub entry: &'a R,
    pub value: f64,
}

impl<R> Clone for RollingPoint<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for RollingPoint<'_, R> {}

/// Lazy rolling-average sequence over a borrowed series.
///
/// The first `window - 1` points average everything seen so far; after that
/// each point averages exactly the trailing `window` entries. No state outlives
/// the iterator; a clone yields the same remaining points as the original.
#[derive(Debug)]
pub struct RollingAverage<'a, R> {
    series: &'a [R],
    stat: StatKey,
    mode: StatMode,
    window: usize,
    index: usize,
}

impl<R> Clone for RollingAverage<'_, R> {
    fn clone(&self) -> Self {
        Self {
            series: self.series,
            stat: self.stat,
            mode: self.mode,
            window: self.window,
            index: self.index,
        }
    }
}

impl<'a, R: StatRow> RollingAverage<'a, R> {
    pub fn window(&self) -> usize {
        self.window
    }

    fn average_ending_at(&self, index: usize) -> f64 {
        let start = (index + 1).saturating_sub(self.window);
        let slice = &self.series[start..=index];
        let sum: f64 = slice
            .iter()
            .map(|entry| stat_value(entry, self.stat, self.mode))
            .sum();
        sum / slice.len() as f64
    }
}

impl<'a, R: StatRow> Iterator for RollingAverage<'a, R> {
    type Item = RollingPoint<'a, R>;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.series.get(self.index)?;
        let value = self.average_ending_at(self.index);
        self.index += 1;
        Some(RollingPoint { entry, value })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.series.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<R: StatRow> ExactSizeIterator for RollingAverage<'_, R> {}

impl<R: StatRow> FusedIterator for RollingAverage<'_, R> {}

/// Rolling average of `stat` over `series`, in input order.
///
/// Fails with `InvalidParameter` when `window` is zero.
///
/// # Examples
///
/// ```rust
/// use hoops_stats::{engine::{rolling::rolling_average, stats::StatKey}, GameLogEntry, StatMode};
///
/// let games: Vec<GameLogEntry> = [10.0, 20.0, 30.0, 40.0, 50.0]
///     .iter()
///     .enumerate()
///     .map(|(i, pts)| GameLogEntry { points: *pts, ..GameLogEntry::new("P1", i as u32 + 1) })
///     .collect();
///
/// let values: Vec<f64> = rolling_average(&games, StatKey::Points, StatMode::PerGame, 3)?
///     .map(|p| p.value)
///     .collect();
/// assert_eq!(values, vec![10.0, 15.0, 20.0, 30.0, 40.0]);
/// # Ok::<(), hoops_stats::StatsError>(())
/// ```
pub fn rolling_average<R: StatRow>(
    series: &[R],
    stat: StatKey,
    mode: StatMode,
    window: usize,
) -> Result<RollingAverage<'_, R>> {
    if window == 0 {
        return Err(StatsError::invalid("rolling window must be a positive integer"));
    }
    Ok(RollingAverage {
        series,
        stat,
        mode,
        window,
        index: 0,
    })
}
