use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;

use super::guided::{GuidedDecisionView, GuidedForm, PageView, SimulationPage};
use super::quick::{self, QuickDecisionView, QuickForm};
use super::FormCatalogue;
use crate::error::AppError;
use crate::scoring::{Classifier, LoanScorer, Scaler, ScorerCache};

/// Router exposing both front ends over the shared scorer.
pub fn simulation_router<S, C>(cache: Arc<ScorerCache<S, C>>) -> Router
where
    S: Scaler + 'static,
    C: Classifier + 'static,
{
    Router::new()
        .route("/api/v1/quick/form", get(quick_form_handler))
        .route("/api/v1/quick/predict", post(quick_predict_handler::<S, C>))
        .route("/api/v1/guided/pages/:page", get(guided_page_handler))
        .route(
            "/api/v1/guided/simulate",
            post(guided_simulate_handler::<S, C>),
        )
        .with_state(cache)
}

fn scorer<S, C>(cache: &ScorerCache<S, C>) -> Result<Arc<LoanScorer<S, C>>, AppError>
where
    S: Scaler,
    C: Classifier,
{
    cache.get().map_err(AppError::artifacts_unavailable)
}

pub(crate) async fn quick_form_handler() -> Json<FormCatalogue> {
    Json(quick::catalogue())
}

pub(crate) async fn quick_predict_handler<S, C>(
    State(cache): State<Arc<ScorerCache<S, C>>>,
    Json(form): Json<QuickForm>,
) -> Result<Json<QuickDecisionView>, AppError>
where
    S: Scaler + 'static,
    C: Classifier + 'static,
{
    let scorer = scorer(&cache)?;
    let record = form.into_record()?;
    let assessment = scorer.assess(&record)?;
    Ok(Json(QuickDecisionView::from_assessment(
        assessment,
        Utc::now(),
    )))
}

pub(crate) async fn guided_page_handler(Path(page): Path<SimulationPage>) -> Json<PageView> {
    Json(PageView::for_page(page))
}

pub(crate) async fn guided_simulate_handler<S, C>(
    State(cache): State<Arc<ScorerCache<S, C>>>,
    Json(form): Json<GuidedForm>,
) -> Result<Json<GuidedDecisionView>, AppError>
where
    S: Scaler + 'static,
    C: Classifier + 'static,
{
    let scorer = scorer(&cache)?;
    let loan_term_months = form.loan_term_months()?;
    let record = form.into_record()?;
    let assessment = scorer.assess(&record)?;
    Ok(Json(GuidedDecisionView::from_assessment(
        assessment,
        loan_term_months,
        Utc::now(),
    )))
}
