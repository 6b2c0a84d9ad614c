use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    collatz_explorer::init_tracing()?;

    run(std::env::args_os().nth(1).map(PathBuf::from))
}

fn run(config_path: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let config = match config_path {
        Some(path) => collatz_explorer::ExperimentConfig::load(path)?,
        None => collatz_explorer::ExperimentConfig::default(),
    };
    let output_dir = config.output_dir.clone();

    let presenter = collatz_explorer::CsvFilePresenter::new();
    let mut controller = collatz_explorer::CliSweepController::new(presenter, config);

    controller.generate()?;
    for path in controller.write(&output_dir)? {
        println!("Wrote {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_returns_ok() {
        let dir = std::env::temp_dir().join(format!("collatz_explorer_main_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let config_path = dir.join("experiment.json");
        let output_dir = dir.join("output");
        std::fs::write(
            &config_path,
            format!(
                r#"{{ "output_dir": {:?}, "sweep": {{ "sample_size": 25 }} }}"#,
                output_dir.to_string_lossy()
            ),
        )
        .unwrap();

        let result = run(Some(config_path));

        assert!(result.is_ok());
        assert!(output_dir.join("sweep_aggregates.csv").exists());
    }
}
