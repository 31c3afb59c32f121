use serde::Serialize;

use crate::scoring::{DependentsCategory, PropertyArea};

/// Enumerated selection offered to the applicant.
pub trait Choice: Copy + 'static {
    fn ordered() -> &'static [Self];
    fn label(self) -> &'static str;
    /// Code the selection stands for in the classifier's encoding.
    fn code(self) -> u8;

    fn options() -> Vec<ChoiceOption> {
        Self::ordered()
            .iter()
            .map(|choice| ChoiceOption {
                label: choice.label(),
                code: choice.code(),
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChoiceOption {
    pub label: &'static str,
    pub code: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldKind {
    Amount { min: f64, step: f64 },
    Choice { options: Vec<ChoiceOption> },
    Term { unit: &'static str, options: Vec<u16> },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<&'static str>,
    #[serde(flatten)]
    pub kind: FieldKind,
}

impl FieldSpec {
    pub(crate) fn amount(name: &'static str, label: &'static str, step: f64) -> Self {
        Self {
            name,
            label,
            help: None,
            kind: FieldKind::Amount { min: 0.0, step },
        }
    }

    pub(crate) fn choice<T: Choice>(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            help: None,
            kind: FieldKind::Choice {
                options: T::options(),
            },
        }
    }

    pub(crate) fn term(
        name: &'static str,
        label: &'static str,
        unit: &'static str,
        options: &[u16],
    ) -> Self {
        Self {
            name,
            label,
            help: None,
            kind: FieldKind::Term {
                unit,
                options: options.to_vec(),
            },
        }
    }

    pub(crate) fn with_help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }
}

/// Field layout of a form, in display order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormCatalogue {
    pub fields: Vec<FieldSpec>,
}

impl FormCatalogue {
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.name == name)
    }
}

impl Choice for PropertyArea {
    fn ordered() -> &'static [Self] {
        static ORDERED: [PropertyArea; 3] = PropertyArea::ordered();
        &ORDERED
    }

    fn label(self) -> &'static str {
        PropertyArea::label(self)
    }

    fn code(self) -> u8 {
        match self {
            Self::Rural => 0,
            Self::Semiurban => 1,
            Self::Urban => 2,
        }
    }
}

impl Choice for DependentsCategory {
    fn ordered() -> &'static [Self] {
        static ORDERED: [DependentsCategory; 5] = DependentsCategory::ordered();
        &ORDERED
    }

    fn label(self) -> &'static str {
        DependentsCategory::label(self)
    }

    fn code(self) -> u8 {
        self.count()
    }
}
