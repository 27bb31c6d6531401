//! Form fields and the steps that group them.
//!
//! The field-to-step mapping is a static table; validation and the wizard
//! both read it instead of branching per step.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::IntakeError;

/// One input of the complaint form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Field {
    Name,
    TaxId,
    Email,
    Phone,
    AgencyCode,
    AccountCode,
    ComplaintCategory,
    Description,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::Name,
        Field::TaxId,
        Field::Email,
        Field::Phone,
        Field::AgencyCode,
        Field::AccountCode,
        Field::ComplaintCategory,
        Field::Description,
    ];

    /// Stable key, also used as the DOM id of the input.
    pub fn key(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::TaxId => "cpf",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::AgencyCode => "agency",
            Field::AccountCode => "account",
            Field::ComplaintCategory => "complaintType",
            Field::Description => "description",
        }
    }

    /// Label shown above the input
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Nome Completo",
            Field::TaxId => "CPF",
            Field::Email => "E-mail",
            Field::Phone => "Telefone",
            Field::AgencyCode => "Agência",
            Field::AccountCode => "Conta",
            Field::ComplaintCategory => "Tipo de Reclamação",
            Field::Description => "Descrição Detalhada",
        }
    }

    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            Field::TaxId => Some("000.000.000-00"),
            Field::Phone => Some("(11) 99999-9999"),
            Field::AgencyCode => Some("0000"),
            Field::AccountCode => Some("000000-0"),
            Field::ComplaintCategory => Some("Selecione o tipo de reclamação"),
            Field::Description => Some(
                "Descreva sua reclamação de forma detalhada. Inclua datas, valores e qualquer informação relevante...",
            ),
            Field::Name | Field::Email => None,
        }
    }

    pub fn step(&self) -> Step {
        Step::ALL
            .into_iter()
            .find(|step| step.fields().contains(self))
            .unwrap_or(Step::Description)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Field {
    type Err = IntakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.key() == s)
            .ok_or_else(|| IntakeError::UnknownField(s.to_string()))
    }
}

/// One page of the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Step {
    #[default]
    PersonalData,
    BankInfo,
    Description,
}

const PERSONAL_DATA_FIELDS: &[Field] = &[Field::Name, Field::TaxId, Field::Email, Field::Phone];
const BANK_INFO_FIELDS: &[Field] = &[
    Field::AgencyCode,
    Field::AccountCode,
    Field::ComplaintCategory,
];
const DESCRIPTION_FIELDS: &[Field] = &[Field::Description];

impl Step {
    pub const ALL: [Step; 3] = [Step::PersonalData, Step::BankInfo, Step::Description];

    /// Number of steps in the wizard
    pub const COUNT: u8 = 3;

    /// 1-based position
    pub fn number(&self) -> u8 {
        match self {
            Step::PersonalData => 1,
            Step::BankInfo => 2,
            Step::Description => 3,
        }
    }

    pub fn from_number(number: u8) -> Option<Step> {
        Self::ALL.into_iter().find(|s| s.number() == number)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Step::PersonalData => "Dados Pessoais",
            Step::BankInfo => "Informações Bancárias",
            Step::Description => "Detalhes da Reclamação",
        }
    }

    /// Fields validated when leaving this step
    pub fn fields(&self) -> &'static [Field] {
        match self {
            Step::PersonalData => PERSONAL_DATA_FIELDS,
            Step::BankInfo => BANK_INFO_FIELDS,
            Step::Description => DESCRIPTION_FIELDS,
        }
    }

    pub fn next(&self) -> Option<Step> {
        Self::from_number(self.number() + 1)
    }

    pub fn prev(&self) -> Option<Step> {
        self.number().checked_sub(1).and_then(Self::from_number)
    }

    pub fn is_first(&self) -> bool {
        self.prev().is_none()
    }

    pub fn is_last(&self) -> bool {
        self.next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_field_belongs_to_exactly_one_step() {
        for field in Field::ALL {
            let owners = Step::ALL
                .iter()
                .filter(|s| s.fields().contains(&field))
                .count();
            assert_eq!(owners, 1, "{field} should belong to one step");
        }
    }

    #[test]
    fn field_steps() {
        assert_eq!(Field::Phone.step(), Step::PersonalData);
        assert_eq!(Field::ComplaintCategory.step(), Step::BankInfo);
        assert_eq!(Field::Description.step(), Step::Description);
    }

    #[test]
    fn keys_round_trip() {
        for field in Field::ALL {
            assert_eq!(field.key().parse::<Field>().unwrap(), field);
        }
        assert!(matches!(
            "taxId".parse::<Field>(),
            Err(IntakeError::UnknownField(_))
        ));
    }

    #[test]
    fn step_navigation() {
        assert_eq!(Step::default(), Step::PersonalData);
        assert_eq!(Step::PersonalData.next(), Some(Step::BankInfo));
        assert_eq!(Step::Description.next(), None);
        assert_eq!(Step::BankInfo.prev(), Some(Step::PersonalData));
        assert_eq!(Step::PersonalData.prev(), None);
        assert!(Step::PersonalData.is_first());
        assert!(Step::Description.is_last());
    }

    #[test]
    fn step_numbers() {
        assert_eq!(Step::from_number(0), None);
        assert_eq!(Step::from_number(2), Some(Step::BankInfo));
        assert_eq!(Step::from_number(4), None);
        assert_eq!(Step::Description.number(), Step::COUNT);
    }
}
