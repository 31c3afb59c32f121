//! Score a CSV export of direct-form submissions in one pass.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Serialize;

use crate::scoring::{Classifier, InferenceError, LoanAssessment, LoanScorer, Scaler};
use crate::simulation::{FormError, QuickForm};

#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("failed to open batch file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid batch CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Result for a single CSV row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RowOutcome {
    Assessed { assessment: LoanAssessment },
    Invalid { error: String },
    Failed { error: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchRow {
    /// 1-based data row, header excluded.
    pub row: usize,
    pub outcome: RowOutcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub accepted: usize,
    pub rejected: usize,
    pub invalid: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn from_rows(rows: &[BatchRow]) -> Self {
        rows.iter().fold(Self::default(), |mut summary, row| {
            summary.total += 1;
            match &row.outcome {
                RowOutcome::Assessed { assessment } if assessment.verdict.is_accepted() => {
                    summary.accepted += 1
                }
                RowOutcome::Assessed { .. } => summary.rejected += 1,
                RowOutcome::Invalid { .. } => summary.invalid += 1,
                RowOutcome::Failed { .. } => summary.failed += 1,
            }
            summary
        })
    }
}

fn outcome(result: Result<LoanAssessment, RowError>) -> RowOutcome {
    match result {
        Ok(assessment) => RowOutcome::Assessed { assessment },
        Err(RowError::Form(err)) => RowOutcome::Invalid {
            error: err.to_string(),
        },
        Err(RowError::Inference(err)) => RowOutcome::Failed {
            error: err.to_string(),
        },
    }
}

enum RowError {
    Form(FormError),
    Inference(InferenceError),
}

/// Score every row of `reader`. Rows with invalid codes are reported, not fatal; a CSV that
/// cannot be parsed aborts the batch.
pub fn score_csv<R, S, C>(
    reader: R,
    scorer: &LoanScorer<S, C>,
) -> Result<Vec<BatchRow>, BatchError>
where
    R: Read,
    S: Scaler,
    C: Classifier,
{
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (index, form) in csv_reader.deserialize::<QuickForm>().enumerate() {
        let form = form?;
        let result = form
            .into_record()
            .map_err(RowError::Form)
            .and_then(|record| scorer.assess(&record).map_err(RowError::Inference));
        rows.push(BatchRow {
            row: index + 1,
            outcome: outcome(result),
        });
    }

    Ok(rows)
}

pub fn score_csv_path<S, C>(
    path: impl AsRef<Path>,
    scorer: &LoanScorer<S, C>,
) -> Result<Vec<BatchRow>, BatchError>
where
    S: Scaler,
    C: Classifier,
{
    let file = File::open(path)?;
    score_csv(file, scorer)
}
