use serde::{Deserialize, Serialize};
use tracing::warn;

use super::features::EngineeredFeatures;

/// Column sequence the scaler and classifier were fitted on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureOrder(Vec<String>);

impl FeatureOrder {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(columns.into_iter().map(Into::into).collect())
    }

    pub fn columns(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Classifier input aligned to a [`FeatureOrder`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureVector {
    pub values: Vec<f64>,
    /// Columns the order asked for that no feature supplied; their value is 0.
    pub defaulted: Vec<String>,
}

impl FeatureVector {
    pub fn width(&self) -> usize {
        self.values.len()
    }
}

/// Lay `features` out in `order`, filling columns nothing supplies with 0.
pub fn prepare(features: &EngineeredFeatures, order: &FeatureOrder) -> FeatureVector {
    let mut values = Vec::with_capacity(order.len());
    let mut defaulted = Vec::new();

    for column in order.columns() {
        match features.value(column) {
            Some(value) => values.push(value),
            None => {
                warn!(%column, "classifier column not supplied by the form, defaulting to 0");
                values.push(0.0);
                defaulted.push(column.clone());
            }
        }
    }

    FeatureVector { values, defaulted }
}
