use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IndicatorError {
    /// Not enough history to define the indicator at the latest candle.
    #[error("{indicator} is undefined (insufficient history)")]
    Undefined { indicator: &'static str },
}
