//----------------------------------------
// Histogram binning
//----------------------------------------
use crate::error::HyplabErr;
use crate::params::error::InvalidParameterError;

pub const MAX_BINS: usize = 1000;

/// Fixed x-axis binning: `[start, start + size), ...` up to `end`. The last
/// bin is closed on the right so a value equal to `end` is still counted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramBins {
    pub start: f64,
    pub end: f64,
    pub size: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

impl HistogramBins {
    pub fn new(start: f64, end: f64, size: f64) -> Result<Self, HyplabErr> {
        let bins = HistogramBins { start, end, size };
        bins.check()?;
        Ok(bins)
    }

    // Fields are public, so every entry point re-checks them
    fn check(&self) -> Result<(), HyplabErr> {
        let valid = self.start.is_finite()
            && self.end.is_finite()
            && self.size.is_finite()
            && self.size > 0.
            && self.end > self.start;
        if !valid {
            return Err(InvalidParameterError::BadHistogramBins {
                start: self.start,
                end: self.end,
                size: self.size,
            }
            .into());
        }
        Ok(())
    }

    pub fn n_bins(&self) -> Result<usize, HyplabErr> {
        self.check()?;
        let n_bins = ((self.end - self.start) / self.size).ceil();
        if !(n_bins <= MAX_BINS as f64) {
            return Err(InvalidParameterError::TooManyBins(n_bins, MAX_BINS).into());
        }
        Ok(n_bins as usize)
    }

    /// Values outside `[start, end]` are dropped, as the chart axis does.
    /// Non-finite values are never counted.
    pub fn counts(&self, values: &[f64]) -> Result<Vec<Bin>, HyplabErr> {
        let n_bins = self.n_bins()?;
        let mut bins: Vec<Bin> = (0..n_bins)
            .map(|i| {
                let lower = self.start + i as f64 * self.size;
                Bin {
                    lower,
                    upper: (lower + self.size).min(self.end),
                    count: 0,
                }
            })
            .collect();

        for &x in values {
            if !x.is_finite() || x < self.start || x > self.end {
                continue;
            }
            let i = (((x - self.start) / self.size).floor() as usize).min(n_bins - 1);
            bins[i].count += 1;
        }
        Ok(bins)
    }
}
