use std::collections::BTreeSet;

use crate::core::actions::run_sweep::ports::orbit_engine::OrbitEngine;
use crate::core::data::complex::Complex;
use crate::core::data::orbit_outcome::OrbitOutcome;
use crate::core::data::sink_key::{SinkKey, SinkPrecision};
use crate::core::oracles::mandelbrot::MandelbrotOracle;
use crate::core::transforms::hc::apply_hc;

/// Statistics for one `(beta, scale)` cell of a sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepAggregate {
    pub beta_label: String,
    pub beta: Complex,
    pub scale: f64,
    pub sample_size: u64,
    pub matches: u64,
    pub escaped: u64,
    pub unique_sinks: BTreeSet<SinkKey>,
}

impl SweepAggregate {
    #[must_use]
    pub fn empty(beta_label: impl Into<String>, beta: Complex, scale: f64) -> Self {
        Self {
            beta_label: beta_label.into(),
            beta,
            scale,
            sample_size: 0,
            matches: 0,
            escaped: 0,
            unique_sinks: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn record(mut self, outcome: OrbitOutcome, in_mandelbrot: bool, precision: SinkPrecision) -> Self {
        self.sample_size += 1;
        self.matches += u64::from(in_mandelbrot);
        self.escaped += u64::from(outcome.is_escaped());
        self.unique_sinks
            .insert(SinkKey::new(outcome.resting_point(), precision));
        self
    }

    /// Share of samples whose resting point is in the scaled Mandelbrot set, in percent.
    #[must_use]
    pub fn residency_rate_percent(&self) -> f64 {
        if self.sample_size == 0 {
            return 0.0;
        }
        self.matches as f64 / self.sample_size as f64 * 100.0
    }

    #[must_use]
    pub fn unique_sink_count(&self) -> usize {
        self.unique_sinks.len()
    }
}

/// Folds every sample of one cell into its aggregate.
pub fn aggregate_cell<E: OrbitEngine + ?Sized>(
    engine: &E,
    oracle: &MandelbrotOracle,
    beta_label: &str,
    beta: Complex,
    scale: f64,
    samples: &[Complex],
    precision: SinkPrecision,
) -> SweepAggregate {
    samples.iter().fold(
        SweepAggregate::empty(beta_label, beta, scale),
        |aggregate, &start| {
            let outcome = engine.run(start);
            let in_mandelbrot = oracle.is_in_mandelbrot(outcome.resting_point(), scale);
            aggregate.record(outcome, in_mandelbrot, precision)
        },
    )
}

/// Parameters of the optional HC lens applied to every resting point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HcLens {
    pub c_const: f64,
    pub epsilon: f64,
}

/// One raw per-sample row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleRecord {
    pub input: Complex,
    pub outcome: OrbitOutcome,
    pub in_mandelbrot: bool,
    pub hc: Option<Complex>,
}

pub fn scan_samples<E: OrbitEngine + ?Sized>(
    engine: &E,
    oracle: &MandelbrotOracle,
    scale: f64,
    samples: &[Complex],
    hc_lens: Option<HcLens>,
) -> Vec<SampleRecord> {
    samples
        .iter()
        .map(|&input| {
            let outcome = engine.run(input);
            let resting_point = outcome.resting_point();

            SampleRecord {
                input,
                outcome,
                in_mandelbrot: oracle.is_in_mandelbrot(resting_point, scale),
                hc: hc_lens.map(|lens| apply_hc(resting_point, lens.c_const, lens.epsilon)),
            }
        })
        .collect()
}

/// Folds rows produced by [`scan_samples`] into the aggregate of their cell.
#[must_use]
pub fn aggregate_records(
    beta_label: &str,
    beta: Complex,
    scale: f64,
    records: &[SampleRecord],
    precision: SinkPrecision,
) -> SweepAggregate {
    records.iter().fold(
        SweepAggregate::empty(beta_label, beta, scale),
        |aggregate, record| aggregate.record(record.outcome, record.in_mandelbrot, precision),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine::gaussian_collatz::GaussianCollatz;
    use crate::core::transforms::hc::DEFAULT_HC_CONSTANT;

    struct CollapsingEngine {}

    impl OrbitEngine for CollapsingEngine {
        fn run(&self, _: Complex) -> OrbitOutcome {
            OrbitOutcome::Bounded(Complex::ZERO)
        }
    }

    struct EscapingEngine {}

    impl OrbitEngine for EscapingEngine {
        fn run(&self, start: Complex) -> OrbitOutcome {
            OrbitOutcome::Escaped {
                point: start.scale(1e6),
                at_iteration: 1,
            }
        }
    }

    fn integer_samples(n: i64) -> Vec<Complex> {
        (1..=n).map(Complex::from_integer).collect()
    }

    #[test]
    fn empty_aggregate_has_zero_rate() {
        let aggregate = SweepAggregate::empty("1", Complex::new(1.0, 0.0), 0.001);

        assert_eq!(aggregate.residency_rate_percent(), 0.0);
        assert_eq!(aggregate.unique_sink_count(), 0);
    }

    #[test]
    fn collapsing_orbits_are_one_sink() {
        let aggregate = aggregate_cell(
            &CollapsingEngine {},
            &MandelbrotOracle::default(),
            "stub",
            Complex::ZERO,
            0.001,
            &integer_samples(50),
            SinkPrecision::default(),
        );

        assert_eq!(aggregate.sample_size, 50);
        assert_eq!(aggregate.matches, 50);
        assert_eq!(aggregate.escaped, 0);
        assert_eq!(aggregate.unique_sink_count(), 1);
        assert_eq!(aggregate.residency_rate_percent(), 100.0);
    }

    #[test]
    fn escaping_orbits_are_counted_and_not_members() {
        let aggregate = aggregate_cell(
            &EscapingEngine {},
            &MandelbrotOracle::default(),
            "stub",
            Complex::ZERO,
            0.001,
            &integer_samples(20),
            SinkPrecision::default(),
        );

        assert_eq!(aggregate.escaped, 20);
        assert_eq!(aggregate.matches, 0);
        assert_eq!(aggregate.unique_sink_count(), 20);
        assert_eq!(aggregate.residency_rate_percent(), 0.0);
    }

    #[test]
    fn single_sample_is_well_formed() {
        let engine = GaussianCollatz::with_defaults(Complex::new(3.0, 0.0), Complex::new(1.0, 0.0));
        let aggregate = aggregate_cell(
            &engine,
            &MandelbrotOracle::default(),
            "1",
            Complex::new(1.0, 0.0),
            0.0001,
            &integer_samples(1),
            SinkPrecision::default(),
        );

        assert_eq!(aggregate.sample_size, 1);
        assert!(aggregate.unique_sink_count() <= 1);
        assert!((0.0..=100.0).contains(&aggregate.residency_rate_percent()));
    }

    #[test]
    fn reference_cell_matches_recorded_run() {
        let engine = GaussianCollatz::with_defaults(Complex::new(3.0, 0.0), Complex::new(1.0, 0.0));
        let aggregate = aggregate_cell(
            &engine,
            &MandelbrotOracle::default(),
            "1",
            Complex::new(1.0, 0.0),
            0.0001,
            &integer_samples(1000),
            SinkPrecision::default(),
        );

        assert_eq!(aggregate.matches, 918);
        assert_eq!(aggregate.unique_sink_count(), 688);
        assert!((aggregate.residency_rate_percent() - 91.8).abs() < 1e-9);
    }

    #[test]
    fn scan_and_fold_agree() {
        let engine = GaussianCollatz::with_defaults(Complex::new(3.0, 0.0), Complex::new(1.0, 1.0));
        let oracle = MandelbrotOracle::default();
        let samples = integer_samples(200);

        let records = scan_samples(&engine, &oracle, 0.001, &samples, None);
        let from_records = aggregate_records(
            "1+1i",
            Complex::new(1.0, 1.0),
            0.001,
            &records,
            SinkPrecision::default(),
        );
        let folded = aggregate_cell(
            &engine,
            &oracle,
            "1+1i",
            Complex::new(1.0, 1.0),
            0.001,
            &samples,
            SinkPrecision::default(),
        );

        assert_eq!(records.len(), 200);
        assert!(records.iter().all(|record| record.hc.is_none()));
        assert_eq!(from_records, folded);
    }

    #[test]
    fn scan_applies_hc_lens() {
        let records = scan_samples(
            &CollapsingEngine {},
            &MandelbrotOracle::default(),
            0.001,
            &integer_samples(3),
            Some(HcLens {
                c_const: DEFAULT_HC_CONSTANT,
                epsilon: 1e-6,
            }),
        );

        for record in records {
            let hc = record.hc.unwrap();
            assert!(hc.is_finite());
        }
    }
}
