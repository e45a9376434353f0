//! Candles in, verdict out: IndicatorEngine followed by SignalClassifier.

use crate::indicators::IndicatorEngine;
use crate::models::indicators::{Candle, IndicatorSnapshot};
use crate::models::signal::SignalVerdict;
use crate::signals::classifier::SignalClassifier;

pub use crate::indicators::MIN_CANDLES;

#[derive(Debug, Clone, Default)]
pub struct SignalEngine {
    classifier: SignalClassifier,
}

impl SignalEngine {
    pub fn new(classifier: SignalClassifier) -> Self {
        Self { classifier }
    }

    /// Evaluate the latest candle. Empty input yields `None`.
    pub fn evaluate(&self, candles: &[Candle]) -> Option<SignalVerdict> {
        self.evaluate_with_indicators(candles)
            .map(|(verdict, _)| verdict)
    }

    /// Evaluate and also return the indicator row that produced the verdict.
    pub fn evaluate_with_indicators(
        &self,
        candles: &[Candle],
    ) -> Option<(SignalVerdict, IndicatorSnapshot)> {
        let snapshot = IndicatorEngine::compute(candles).latest()?;
        Some((self.classifier.classify(&snapshot), snapshot))
    }
}
