use super::common::*;
use crate::scoring::{DependentsCategory, PropertyArea};
use crate::simulation::guided::{self, CreditHistoryChoice, EducationChoice, GenderChoice};
use crate::simulation::{quick, FieldKind, FormError, PageView, SimulationPage};

#[test]
fn quick_form_builds_record() {
    let mut form = quick_form();
    form.dependents_3_plus = 1;
    form.property_area_urban = 1;
    form.self_employed = 1;

    let record = form.into_record().expect("form is valid");

    assert_eq!(record.applicant_income, 5000.0);
    assert_eq!(record.loan_term_months, 360.0);
    assert!(record.credit_history_good);
    assert!(record.self_employed);
    assert_eq!(record.property_area, PropertyArea::Urban);
    assert_eq!(record.dependents, DependentsCategory::ThreePlus);
}

#[test]
fn quick_form_rejects_terms_outside_the_offer() {
    let mut form = quick_form();
    form.loan_term_months = 240;

    let err = form.into_record().expect_err("240 months is not offered");

    assert_eq!(
        err,
        FormError::UnsupportedTerm {
            value: 240,
            allowed: &quick::LOAN_TERMS_MONTHS,
        }
    );
}

#[test]
fn quick_form_rejects_codes_other_than_zero_or_one() {
    let mut form = quick_form();
    form.married = 2;

    let err = form.into_record().expect_err("2 is not a flag");

    assert_eq!(
        err,
        FormError::InvalidIndicator {
            field: "married",
            value: 2
        }
    );
}

#[test]
fn quick_form_rejects_several_dependents_categories() {
    let mut form = quick_form();
    form.dependents_1 = 1;
    form.dependents_3 = 1;

    assert_eq!(
        form.into_record().expect_err("two categories selected"),
        FormError::ConflictingDependents
    );
}

#[test]
fn quick_form_rejects_both_area_flags() {
    let mut form = quick_form();
    form.property_area_semiurban = 1;
    form.property_area_urban = 1;

    assert_eq!(
        form.into_record().expect_err("two areas selected"),
        FormError::ConflictingPropertyArea
    );
}

#[test]
fn quick_form_rejects_negative_or_non_finite_amounts() {
    let mut negative = quick_form();
    negative.loan_amount = -1.0;
    assert!(matches!(
        negative.into_record(),
        Err(FormError::InvalidAmount {
            field: "loan_amount",
            ..
        })
    ));

    let mut infinite = quick_form();
    infinite.coapplicant_income = f64::INFINITY;
    assert!(matches!(
        infinite.into_record(),
        Err(FormError::InvalidAmount {
            field: "coapplicant_income",
            ..
        })
    ));
}

#[test]
fn guided_form_converts_years_to_months() {
    let form = guided_form();
    assert_eq!(form.loan_term_months(), Ok(300));

    let record = form.into_record().expect("form is valid");

    assert_eq!(record.loan_term_months, 300.0);
    assert!(record.gender_male);
    assert!(record.married);
    assert!(!record.not_graduate);
    assert!(!record.self_employed);
    assert_eq!(record.property_area, PropertyArea::Semiurban);
    assert_eq!(record.dependents, DependentsCategory::Two);
}

#[test]
fn guided_form_maps_labelled_choices_to_codes() {
    let mut form = guided_form();
    form.credit_history = CreditHistoryChoice::Problems;
    form.gender = GenderChoice::Female;
    form.education = EducationChoice::NotGraduate;

    let record = form.into_record().expect("form is valid");

    assert!(!record.credit_history_good);
    assert!(!record.gender_male);
    assert!(record.not_graduate);
}

#[test]
fn guided_form_rejects_unlisted_durations() {
    let mut form = guided_form();
    form.loan_term_years = 12;

    assert_eq!(
        form.into_record().expect_err("12 years is not offered"),
        FormError::UnsupportedTerm {
            value: 12,
            allowed: &guided::LOAN_TERMS_YEARS,
        }
    );
}

#[test]
fn guided_form_defaults_match_first_options() {
    let form: crate::simulation::GuidedForm = serde_json::from_value(serde_json::json!({
        "applicant_income": 2500.0,
        "coapplicant_income": 0.0,
        "loan_amount": 80000.0,
        "loan_term_years": 7
    }))
    .expect("defaults fill the choices");

    let record = form.into_record().expect("form is valid");

    assert!(record.credit_history_good);
    assert!(!record.gender_male);
    assert_eq!(record.loan_term_months, 84.0);
    assert_eq!(record.property_area, PropertyArea::Rural);
    assert_eq!(record.dependents, DependentsCategory::None);
}

#[test]
fn page_flag_moves_between_home_and_simulation() {
    let page = SimulationPage::default();
    assert_eq!(page, SimulationPage::Home);
    assert_eq!(page.start(), SimulationPage::Simulation);
    assert_eq!(page.start().back(), SimulationPage::Home);
}

#[test]
fn home_page_lists_required_information() {
    match PageView::for_page(SimulationPage::Home) {
        PageView::Home {
            required_information,
            next,
            ..
        } => {
            assert_eq!(required_information.len(), 5);
            assert_eq!(next, SimulationPage::Simulation);
        }
        other => panic!("expected home page, got {other:?}"),
    }
}

#[test]
fn guided_catalogue_offers_enumerated_choices() {
    let catalogue = guided::catalogue();

    let dependents = catalogue.field("dependents").expect("dependents field");
    match &dependents.kind {
        FieldKind::Choice { options } => {
            let labels: Vec<_> = options.iter().map(|option| option.label).collect();
            let codes: Vec<_> = options.iter().map(|option| option.code).collect();
            assert_eq!(labels, vec!["None", "1", "2", "3", "3+"]);
            assert_eq!(codes, vec![0, 1, 2, 3, 4]);
        }
        other => panic!("expected choice field, got {other:?}"),
    }

    let term = catalogue.field("loan_term_years").expect("term field");
    assert_eq!(
        term.kind,
        FieldKind::Term {
            unit: "years",
            options: vec![7, 10, 15, 20, 25, 30],
        }
    );
}

#[test]
fn quick_catalogue_covers_every_input() {
    let catalogue = quick::catalogue();
    assert_eq!(catalogue.fields.len(), 15);
    assert!(catalogue.field("dependents_3_plus").is_some());
}
