//! Uses the sieve as a reference workload to express running times relative
//! to the speed of the current machine.

use std::hint::black_box;
use std::time::{Duration, Instant};

use log::debug;

use crate::{nth_prime, Error};

/// Indices sieved by a default calibration run.
pub const DEFAULT_CALIBRATORS: [u64; 2] = [100_000, 100_000];

/// One timed run of [`nth_prime`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sample {
    pub index: u64,
    pub prime: u64,
    pub elapsed: Duration,
}

#[derive(Clone, Debug, Default)]
pub struct Calibration {
    samples: Vec<Sample>,
}

impl Calibration {
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Mean time of the samples, zero if there are none.
    pub fn mean(&self) -> Duration {
        if self.samples.is_empty() {
            return Duration::ZERO;
        }
        let total = self
            .samples
            .iter()
            .map(|s| s.elapsed.as_nanos())
            .sum::<u128>();
        let mean = total / self.samples.len() as u128;
        Duration::from_nanos(u64::try_from(mean).unwrap_or(u64::MAX))
    }

    /// `elapsed` in units of the mean sample time.
    ///
    /// NaN or infinite if the mean is zero.
    pub fn relative(&self, elapsed: Duration) -> f64 {
        elapsed.as_secs_f64() / self.mean().as_secs_f64()
    }
}

/// Times [`nth_prime`] for each of `indices`, in order.
pub fn calibrate(indices: &[u64]) -> Result<Calibration, Error> {
    let samples = indices
        .iter()
        .map(|&index| {
            let start = Instant::now();
            let prime = black_box(nth_prime(black_box(index))?);
            let elapsed = start.elapsed();
            debug!("Calibrated with prime no {index} = {prime} in {elapsed:?}");
            Ok(Sample {
                index,
                prime,
                elapsed,
            })
        })
        .collect::<Result<Vec<_>, Error>>()?;
    Ok(Calibration { samples })
}
