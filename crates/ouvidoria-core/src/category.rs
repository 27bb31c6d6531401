//! Complaint categories offered by the intake form

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::IntakeError;

/// The fixed list of complaint categories.
///
/// The label is what the user picks in the select and what is stored in the
/// draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComplaintCategory {
    CreditCard,
    CheckingAccount,
    Financing,
    PoorService,
    UndueCharge,
    DigitalBanking,
    Insurance,
    Investments,
    Other,
}

impl ComplaintCategory {
    /// All categories, in the order they are offered.
    pub const ALL: [ComplaintCategory; 9] = [
        ComplaintCategory::CreditCard,
        ComplaintCategory::CheckingAccount,
        ComplaintCategory::Financing,
        ComplaintCategory::PoorService,
        ComplaintCategory::UndueCharge,
        ComplaintCategory::DigitalBanking,
        ComplaintCategory::Insurance,
        ComplaintCategory::Investments,
        ComplaintCategory::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ComplaintCategory::CreditCard => "Problemas com cartão de crédito",
            ComplaintCategory::CheckingAccount => "Problemas com conta corrente",
            ComplaintCategory::Financing => "Problemas com financiamentos",
            ComplaintCategory::PoorService => "Atendimento inadequado",
            ComplaintCategory::UndueCharge => "Cobrança indevida",
            ComplaintCategory::DigitalBanking => "Problemas no app/internet banking",
            ComplaintCategory::Insurance => "Seguros",
            ComplaintCategory::Investments => "Investimentos",
            ComplaintCategory::Other => "Outros",
        }
    }

    /// Labels of every category, for populating a select.
    pub fn labels() -> impl Iterator<Item = &'static str> {
        Self::ALL.iter().map(|c| c.label())
    }
}

impl fmt::Display for ComplaintCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ComplaintCategory {
    type Err = IntakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.label() == s)
            .ok_or_else(|| IntakeError::UnknownCategory(s.to_string()))
    }
}
