use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::info;

use crate::controllers::cli::sweep::experiment_config::ExperimentConfig;
use crate::controllers::ports::sweep_presenter::SweepPresenterPort;
use crate::core::actions::parameter_study::parameter_study::{
    ParameterStudyReport, run_parameter_study,
};
use crate::core::actions::run_sweep::aggregate::SweepAggregate;
use crate::core::actions::run_sweep::galaxy_scan::{GalaxyScan, run_galaxy_scan};
use crate::core::actions::run_sweep::run_sweep_rayon::run_sweep_rayon;
use crate::storage::unique_path::unique_path;

pub struct CliSweepController<P: SweepPresenterPort> {
    presenter: P,
    config: ExperimentConfig,
    aggregates: Option<Vec<SweepAggregate>>,
    galaxy_scan: Option<GalaxyScan>,
    parameter_study: Option<ParameterStudyReport>,
}

impl<P: SweepPresenterPort> CliSweepController<P> {
    pub fn new(presenter: P, config: ExperimentConfig) -> Self {
        Self {
            presenter,
            config,
            aggregates: None,
            galaxy_scan: None,
            parameter_study: None,
        }
    }

    pub fn config(&self) -> &ExperimentConfig {
        &self.config
    }

    pub fn aggregates(&self) -> Option<&[SweepAggregate]> {
        self.aggregates.as_deref()
    }

    pub fn generate(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let plan = &self.config.sweep;

        println!("Running Gaussian Collatz sweep...");
        println!("Alpha:       {}", plan.alpha);
        println!("Parity rule: {}", plan.parity);
        println!("Samples:     1..={}", plan.sample_size);
        println!("Cells:       {}", plan.cell_count());

        let start = Instant::now();
        let aggregates = run_sweep_rayon(plan)?;
        println!("Duration:    {:?}", start.elapsed());
        println!();
        println!("{:<10} {:>10} {:>12} {:>8} {:>8}", "beta", "scale", "residency", "sinks", "escaped");
        for row in &aggregates {
            println!(
                "{:<10} {:>10} {:>11.2}% {:>8} {:>8}",
                row.beta_label,
                row.scale,
                row.residency_rate_percent(),
                row.unique_sink_count(),
                row.escaped
            );
        }
        self.aggregates = Some(aggregates);

        if let Some(scan) = &self.config.galaxy_scan {
            println!();
            println!("Galaxy scan: beta {} at scale {}", scan.beta.label, scan.scale);

            let result = run_galaxy_scan(plan, scan)?;
            println!(
                "Residency:   {:.2}%  Unique sinks: {}",
                result.aggregate.residency_rate_percent(),
                result.aggregate.unique_sink_count()
            );
            self.galaxy_scan = Some(result);
        }

        if let Some(study) = &self.config.parameter_study {
            println!();
            println!(
                "Parameter study: {} rules, starts 1..{}",
                study.samples, study.start_count
            );

            let start = Instant::now();
            let report = run_parameter_study(study, &plan.config)?;
            println!("Duration:    {:?}", start.elapsed());
            for correlation in &report.correlations {
                match correlation.r {
                    Some(r) => println!("{:<12} r = {:+.4}", correlation.mapping, r),
                    None => println!("{:<12} r undefined", correlation.mapping),
                }
            }
            self.parameter_study = Some(report);
        }

        Ok(())
    }

    /// Writes every generated table into `dir`, never overwriting earlier runs.
    pub fn write(&self, dir: impl AsRef<Path>) -> std::io::Result<Vec<PathBuf>> {
        let dir = dir.as_ref();
        let mut written = Vec::new();

        if let Some(aggregates) = &self.aggregates {
            let path = unique_path(dir, "sweep_aggregates", "csv")?;
            self.presenter.present_aggregates(aggregates, &path)?;
            written.push(path);
        }

        if let Some(scan) = &self.galaxy_scan {
            let path = unique_path(dir, "galaxy_scan", "csv")?;
            self.presenter.present_samples(&scan.records, &path)?;
            written.push(path);
        }

        if let Some(report) = &self.parameter_study {
            let path = unique_path(dir, "parameter_study", "csv")?;
            self.presenter.present_parameter_study(report, &path)?;
            written.push(path);
        }

        info!(files = written.len(), dir = %dir.display(), "results written");

        Ok(written)
    }
}
