use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::controllers::ports::sweep_presenter::SweepPresenterPort;
use crate::core::actions::parameter_study::parameter_study::ParameterStudyReport;
use crate::core::actions::run_sweep::aggregate::{SampleRecord, SweepAggregate};
use crate::core::data::complex::Complex;
use crate::core::transforms::parameter_mapping::ParameterMapping;

pub const AGGREGATE_HEADER: &str =
    "beta_label,beta_re,beta_im,scale,residency_rate_percent,unique_sink_count,escaped";
pub const SAMPLE_HEADER: &str = "Input,Final_RE,Final_IM,Escaped,Mandelbrot_Match";
pub const SAMPLE_HC_HEADER: &str = ",HCv2_RE,HCv2_IM";
pub const PARAMETER_STUDY_HEADER: &str = "a_divisor,b_multiplier,c_adder,collatz_conv_rate,avg_steps";

pub struct CsvFilePresenter {}

impl SweepPresenterPort for CsvFilePresenter {
    fn present_aggregates(
        &self,
        rows: &[SweepAggregate],
        filepath: impl AsRef<Path>,
    ) -> std::io::Result<()> {
        let mut file = BufWriter::new(File::create(filepath)?);

        writeln!(file, "{}", AGGREGATE_HEADER)?;
        for row in rows {
            writeln!(
                file,
                "{},{},{},{},{:.2},{},{}",
                quote(&row.beta_label),
                row.beta.real,
                row.beta.imag,
                row.scale,
                row.residency_rate_percent(),
                row.unique_sink_count(),
                row.escaped
            )?;
        }

        file.flush()
    }

    fn present_samples(
        &self,
        records: &[SampleRecord],
        filepath: impl AsRef<Path>,
    ) -> std::io::Result<()> {
        let mut file = BufWriter::new(File::create(filepath)?);
        let with_hc = records.iter().any(|record| record.hc.is_some());

        write!(file, "{}", SAMPLE_HEADER)?;
        if with_hc {
            write!(file, "{}", SAMPLE_HC_HEADER)?;
        }
        writeln!(file)?;

        for record in records {
            let resting_point = record.outcome.resting_point();
            write!(
                file,
                "{},{},{},{},{}",
                input_field(record.input),
                resting_point.real,
                resting_point.imag,
                record.outcome.is_escaped(),
                record.in_mandelbrot
            )?;
            if with_hc {
                match record.hc {
                    Some(hc) => write!(file, ",{},{}", hc.real, hc.imag)?,
                    None => write!(file, ",,")?,
                }
            }
            writeln!(file)?;
        }

        file.flush()
    }

    fn present_parameter_study(
        &self,
        report: &ParameterStudyReport,
        filepath: impl AsRef<Path>,
    ) -> std::io::Result<()> {
        let mut file = BufWriter::new(File::create(filepath)?);

        write!(file, "{}", PARAMETER_STUDY_HEADER)?;
        for mapping in ParameterMapping::ALL {
            write!(file, ",et_{}", mapping.display_name())?;
        }
        writeln!(file)?;

        for row in &report.rows {
            write!(
                file,
                "{},{},{},{},{}",
                row.divisor,
                row.multiplier,
                row.adder,
                row.metrics.convergence_rate,
                row.metrics.avg_steps_to_one
            )?;
            // undefined mappings leave an empty cell
            for escape_time in &row.escape_times {
                match escape_time {
                    Some(time) => write!(file, ",{}", time)?,
                    None => write!(file, ",")?,
                }
            }
            writeln!(file)?;
        }

        file.flush()
    }
}

// real starting values are written as plain numbers
fn input_field(input: Complex) -> String {
    if input.imag == 0.0 {
        input.real.to_string()
    } else {
        quote(&input.to_string())
    }
}

fn quote(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

impl Default for CsvFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}
