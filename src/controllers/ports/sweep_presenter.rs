use std::path::Path;

use crate::core::actions::parameter_study::parameter_study::ParameterStudyReport;
use crate::core::actions::run_sweep::aggregate::{SampleRecord, SweepAggregate};

pub trait SweepPresenterPort {
    fn present_aggregates(
        &self,
        rows: &[SweepAggregate],
        filepath: impl AsRef<Path>,
    ) -> std::io::Result<()>;

    fn present_samples(
        &self,
        records: &[SampleRecord],
        filepath: impl AsRef<Path>,
    ) -> std::io::Result<()>;

    fn present_parameter_study(
        &self,
        report: &ParameterStudyReport,
        filepath: impl AsRef<Path>,
    ) -> std::io::Result<()>;
}
