//! Averaging strategies for multi-class metrics

use serde::{Deserialize, Serialize};
use std::fmt;

/// Averaging strategy for multi-class metrics
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Average {
    /// Unweighted mean of the per-label values
    Macro,
    /// Pool TP, FP and FN over all labels, then compute the metric once
    Micro,
    /// Mean of the per-label values weighted by support
    Weighted,
}

impl Average {
    /// Row label used in classification reports
    pub fn name(&self) -> &'static str {
        match self {
            Average::Macro => "macro avg",
            Average::Micro => "micro avg",
            Average::Weighted => "weighted avg",
        }
    }
}

impl fmt::Display for Average {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
