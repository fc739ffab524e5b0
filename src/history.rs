//! Momentum and energy time series for charting.

use crate::body::Body;
use crate::float::Float;
use crate::physics;
use alloc::vec::Vec as AllocVec;

/// One row of the chart: both bodies' momentum and energy plus totals.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HistorySample<F: Float> {
    /// Seconds since the last reset.
    pub time: F,
    pub momentum_a: F,
    pub momentum_b: F,
    pub total_momentum: F,
    pub kinetic_energy_a: F,
    pub kinetic_energy_b: F,
    pub total_kinetic_energy: F,
}

impl<F: Float> HistorySample<F> {
    pub fn capture(time: F, a: &Body<F>, b: &Body<F>) -> Self {
        let pa = physics::sample(a);
        let pb = physics::sample(b);
        HistorySample {
            time,
            momentum_a: pa.momentum,
            momentum_b: pb.momentum,
            total_momentum: pa.momentum + pb.momentum,
            kinetic_energy_a: pa.kinetic_energy,
            kinetic_energy_b: pb.kinetic_energy,
            total_kinetic_energy: pa.kinetic_energy + pb.kinetic_energy,
        }
    }

    /// Row as `[time, pA, pB, pTotal, keA, keB, keTotal]`.
    pub fn to_array(&self) -> [F; 7] {
        [
            self.time,
            self.momentum_a,
            self.momentum_b,
            self.total_momentum,
            self.kinetic_energy_a,
            self.kinetic_energy_b,
            self.total_kinetic_energy,
        ]
    }
}

/// Append-only sample sequence recorded at a fixed frame cadence.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct History<F: Float> {
    samples: AllocVec<HistorySample<F>>,
    interval: usize,
    frame_rate: F,
}

impl<F: Float> History<F> {
    /// Starts with a single zero-time sample of the given bodies.
    pub fn new(interval: usize, frame_rate: F, a: &Body<F>, b: &Body<F>) -> Self {
        let mut history = History {
            samples: AllocVec::new(),
            interval: interval.max(1),
            frame_rate,
        };
        history.reset(a, b);
        history
    }

    /// Drop everything and restart at time zero.
    pub fn reset(&mut self, a: &Body<F>, b: &Body<F>) {
        self.samples.clear();
        self.samples.push(HistorySample::capture(F::zero(), a, b));
    }

    /// Seconds represented by a frame count.
    pub fn time_at(&self, frame: usize) -> F {
        F::from_usize(frame) / self.frame_rate
    }

    /// Record a sample if `frame` falls on the cadence.
    pub fn observe(&mut self, frame: usize, a: &Body<F>, b: &Body<F>) -> Option<HistorySample<F>> {
        if frame == 0 || frame % self.interval != 0 {
            return None;
        }
        let sample = HistorySample::capture(self.time_at(frame), a, b);
        self.samples.push(sample);
        Some(sample)
    }

    pub fn samples(&self) -> &[HistorySample<F>] {
        &self.samples
    }

    pub fn latest(&self) -> Option<&HistorySample<F>> {
        self.samples.last()
    }

    pub fn interval(&self) -> usize {
        self.interval
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, HistorySample<F>> {
        self.samples.iter()
    }
}

impl<'a, F: Float> IntoIterator for &'a History<F> {
    type Item = &'a HistorySample<F>;
    type IntoIter = core::slice::Iter<'a, HistorySample<F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
