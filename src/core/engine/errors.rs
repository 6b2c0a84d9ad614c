use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum EngineConfigError {
    #[error("Mandelbrot iteration budget must be greater than zero")]
    ZeroMandelbrotIterations,

    #[error("bailout magnitude squared must be positive and finite, got {0}")]
    InvalidBailout(f64),

    #[error("Mandelbrot escape radius squared must be positive and finite, got {0}")]
    InvalidEscapeRadius(f64),

    #[error("epsilon must be positive and finite, got {0}")]
    InvalidEpsilon(f64),

    #[error("sink precision allows at most {max} decimals, got {got}")]
    SinkDecimalsTooLarge { got: u32, max: u32 },
}
