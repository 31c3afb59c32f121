use crate::cli::ArtifactArgs;
use crate::infra::{load_config, parse_choice, require_scorer};
use chrono::Utc;
use clap::Args;
use loan_scoring::batch::{score_csv_path, BatchRow, BatchSummary, RowOutcome};
use loan_scoring::error::AppError;
use loan_scoring::scoring::{DependentsCategory, PropertyArea};
use loan_scoring::simulation::guided::{
    CreditHistoryChoice, EducationChoice, EmploymentChoice, GenderChoice, MaritalStatus,
};
use loan_scoring::simulation::{GuidedDecisionView, GuidedForm, QuickDecisionView, QuickForm};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct PredictArgs {
    /// Applicant monthly income (capped)
    #[arg(long)]
    pub(crate) applicant_income: f64,
    /// Co-applicant monthly income (capped)
    #[arg(long, default_value_t = 0.0)]
    pub(crate) coapplicant_income: f64,
    #[arg(long)]
    pub(crate) loan_amount: f64,
    /// Loan term in months: 90, 180 or 360
    #[arg(long, default_value_t = 360)]
    pub(crate) loan_term_months: u16,
    #[arg(long, default_value_t = 0)]
    pub(crate) credit_history: u8,
    #[arg(long, default_value_t = 0)]
    pub(crate) gender_male: u8,
    #[arg(long, default_value_t = 0)]
    pub(crate) married: u8,
    #[arg(long, default_value_t = 0)]
    pub(crate) education_not_graduate: u8,
    #[arg(long, default_value_t = 0)]
    pub(crate) self_employed: u8,
    #[arg(long, default_value_t = 0)]
    pub(crate) property_area_semiurban: u8,
    #[arg(long, default_value_t = 0)]
    pub(crate) property_area_urban: u8,
    #[arg(long, default_value_t = 0)]
    pub(crate) dependents_1: u8,
    #[arg(long, default_value_t = 0)]
    pub(crate) dependents_2: u8,
    #[arg(long, default_value_t = 0)]
    pub(crate) dependents_3: u8,
    #[arg(long, default_value_t = 0)]
    pub(crate) dependents_3_plus: u8,
    #[command(flatten)]
    pub(crate) artifacts: ArtifactArgs,
}

impl PredictArgs {
    fn form(&self) -> QuickForm {
        QuickForm {
            applicant_income: self.applicant_income,
            coapplicant_income: self.coapplicant_income,
            loan_amount: self.loan_amount,
            loan_term_months: self.loan_term_months,
            credit_history: self.credit_history,
            gender_male: self.gender_male,
            married: self.married,
            education_not_graduate: self.education_not_graduate,
            self_employed: self.self_employed,
            property_area_semiurban: self.property_area_semiurban,
            property_area_urban: self.property_area_urban,
            dependents_1: self.dependents_1,
            dependents_2: self.dependents_2,
            dependents_3: self.dependents_3,
            dependents_3_plus: self.dependents_3_plus,
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct SimulateArgs {
    /// Applicant net monthly income
    #[arg(long)]
    pub(crate) applicant_income: f64,
    /// Co-applicant net monthly income, if applicable
    #[arg(long, default_value_t = 0.0)]
    pub(crate) coapplicant_income: f64,
    /// Total amount to borrow
    #[arg(long)]
    pub(crate) loan_amount: f64,
    /// Repayment duration in years: 7, 10, 15, 20, 25 or 30
    #[arg(long, default_value_t = 7)]
    pub(crate) loan_term_years: u16,
    /// good | problems
    #[arg(long, value_parser = parse_choice::<CreditHistoryChoice>, default_value = "good")]
    pub(crate) credit_history: CreditHistoryChoice,
    /// female | male
    #[arg(long, value_parser = parse_choice::<GenderChoice>, default_value = "female")]
    pub(crate) gender: GenderChoice,
    /// single | married
    #[arg(long, value_parser = parse_choice::<MaritalStatus>, default_value = "single")]
    pub(crate) marital_status: MaritalStatus,
    /// graduate | not-graduate
    #[arg(long, value_parser = parse_choice::<EducationChoice>, default_value = "graduate")]
    pub(crate) education: EducationChoice,
    /// salaried | self-employed
    #[arg(long, value_parser = parse_choice::<EmploymentChoice>, default_value = "salaried")]
    pub(crate) employment: EmploymentChoice,
    /// rural | semiurban | urban
    #[arg(long, value_parser = parse_choice::<PropertyArea>, default_value = "rural")]
    pub(crate) property_area: PropertyArea,
    /// none | one | two | three | three-plus
    #[arg(long, value_parser = parse_choice::<DependentsCategory>, default_value = "none")]
    pub(crate) dependents: DependentsCategory,
    #[command(flatten)]
    pub(crate) artifacts: ArtifactArgs,
}

impl SimulateArgs {
    fn form(&self) -> GuidedForm {
        GuidedForm {
            applicant_income: self.applicant_income,
            coapplicant_income: self.coapplicant_income,
            loan_amount: self.loan_amount,
            loan_term_years: self.loan_term_years,
            credit_history: self.credit_history,
            gender: self.gender,
            marital_status: self.marital_status,
            education: self.education,
            employment: self.employment,
            property_area: self.property_area,
            dependents: self.dependents,
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV file whose header matches the direct-form field names
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Print the per-row results as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
    #[command(flatten)]
    pub(crate) artifacts: ArtifactArgs,
}

pub(crate) fn run_predict(args: PredictArgs) -> Result<(), AppError> {
    let config = load_config(&args.artifacts)?;
    let record = args.form().into_record()?;
    let scorer = require_scorer(&config)?;

    let assessment = scorer.assess(&record)?;
    let view = QuickDecisionView::from_assessment(assessment, Utc::now());
    render_quick_decision(&view);
    Ok(())
}

pub(crate) fn run_simulate(args: SimulateArgs) -> Result<(), AppError> {
    let config = load_config(&args.artifacts)?;
    let form = args.form();
    let loan_term_months = form.loan_term_months()?;
    let record = form.into_record()?;
    let scorer = require_scorer(&config)?;

    let assessment = scorer.assess(&record)?;
    let view = GuidedDecisionView::from_assessment(assessment, loan_term_months, Utc::now());
    render_guided_decision(&view);
    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let config = load_config(&args.artifacts)?;
    let scorer = require_scorer(&config)?;

    let rows = score_csv_path(&args.input, &*scorer)?;
    if args.json {
        match serde_json::to_string_pretty(&rows) {
            Ok(json) => println!("{json}"),
            Err(err) => println!("Batch results unavailable as JSON: {err}"),
        }
        return Ok(());
    }

    render_batch(&args.input, &rows);
    Ok(())
}

fn progress_bar(progress: u8) -> String {
    let filled = usize::from(progress / 5);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(20 - filled))
}

fn render_quick_decision(view: &QuickDecisionView) {
    println!("Loan prediction");
    println!("Decision: {}", view.label);
    println!("Probability of acceptance");
    println!(
        "{} {}",
        progress_bar(view.progress),
        view.probability_display
    );
    render_defaulted(&view.defaulted_columns);
}

fn render_guided_decision(view: &GuidedDecisionView) {
    println!("Home loan simulation");
    println!("Repayment term: {} months", view.loan_term_months);
    println!("\n{}", view.headline);
    println!("{}", view.explanation);
    println!("\nProbability of acceptance");
    println!(
        "{} {} chance of obtaining the loan",
        progress_bar(view.progress),
        view.probability_display
    );

    if !view.recommendations.is_empty() {
        println!("\nTo improve your chances:");
        for recommendation in &view.recommendations {
            println!("- {recommendation}");
        }
    }

    println!("\n{}", view.advisor_note);
    render_defaulted(&view.defaulted_columns);
}

fn render_defaulted(columns: &[String]) {
    if !columns.is_empty() {
        println!(
            "\nWarning: the model expects columns the form does not collect; scored as 0: {}",
            columns.join(", ")
        );
    }
}

fn render_batch(input: &std::path::Path, rows: &[BatchRow]) {
    println!("Batch scoring of {}", input.display());
    for row in rows {
        match &row.outcome {
            RowOutcome::Assessed { assessment } => println!(
                "- row {}: {} ({})",
                row.row,
                assessment.verdict.label(),
                assessment.probability_display()
            ),
            RowOutcome::Invalid { error } => println!("- row {}: invalid form, {}", row.row, error),
            RowOutcome::Failed { error } => {
                println!("- row {}: scoring failed, {}", row.row, error)
            }
        }
    }

    let summary = BatchSummary::from_rows(rows);
    println!(
        "\n{} rows: {} accepted, {} rejected, {} invalid, {} failed",
        summary.total, summary.accepted, summary.rejected, summary.invalid, summary.failed
    );
}
