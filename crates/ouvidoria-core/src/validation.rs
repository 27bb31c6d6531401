//! Field validators and the per-field error map.
//!
//! Each validator is a pure function of the current value. The lookup goes
//! through [`VALIDATORS`], one entry per [`Field`].

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::category::ComplaintCategory;
use crate::draft::ComplaintDraft;
use crate::field::Field;
use crate::format::digits;

/// A validator returns the error message for a bad value, `None` otherwise.
pub type Validator = fn(&str) -> Option<&'static str>;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Validator table, ordered like [`Field::ALL`].
pub static VALIDATORS: [(Field, Validator); 8] = [
    (Field::Name, validate_name),
    (Field::TaxId, validate_tax_id),
    (Field::Email, validate_email),
    (Field::Phone, validate_phone),
    (Field::AgencyCode, validate_agency_code),
    (Field::AccountCode, validate_account_code),
    (Field::ComplaintCategory, validate_complaint_category),
    (Field::Description, validate_description),
];

/// Minimum description length
pub const DESCRIPTION_MIN_LEN: usize = 10;

fn char_len(value: &str) -> usize {
    value.chars().count()
}

fn validate_name(value: &str) -> Option<&'static str> {
    (char_len(value) < 2).then_some("Nome deve ter pelo menos 2 caracteres")
}

fn validate_tax_id(value: &str) -> Option<&'static str> {
    (digits(value).len() != 11).then_some("CPF inválido")
}

fn validate_email(value: &str) -> Option<&'static str> {
    (!EMAIL_RE.is_match(value)).then_some("E-mail inválido")
}

fn validate_phone(value: &str) -> Option<&'static str> {
    let count = digits(value).len();
    (!(10..=11).contains(&count)).then_some("Telefone inválido")
}

fn validate_agency_code(value: &str) -> Option<&'static str> {
    (char_len(value) < 3).then_some("Agência deve ter pelo menos 3 dígitos")
}

fn validate_account_code(value: &str) -> Option<&'static str> {
    (char_len(value) < 4).then_some("Conta deve ter pelo menos 4 dígitos")
}

fn validate_complaint_category(value: &str) -> Option<&'static str> {
    value
        .parse::<ComplaintCategory>()
        .is_err()
        .then_some("Selecione o tipo de reclamação")
}

fn validate_description(value: &str) -> Option<&'static str> {
    (char_len(value) < DESCRIPTION_MIN_LEN)
        .then_some("Descrição deve ter pelo menos 10 caracteres")
}

/// Look up the validator for `field`.
pub fn validator_for(field: Field) -> Option<Validator> {
    VALIDATORS
        .iter()
        .find(|(f, _)| *f == field)
        .map(|(_, v)| *v)
}

/// Validate a single value.
pub fn validate_field(field: Field, value: &str) -> Option<&'static str> {
    validator_for(field).and_then(|validate| validate(value))
}

/// Validate `fields` of `draft`, returning only the failures.
pub fn validate_fields(draft: &ComplaintDraft, fields: &[Field]) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for &field in fields {
        if let Some(message) = validate_field(field, draft.get(field)) {
            errors.set(field, message);
        }
    }
    errors
}

/// Error messages keyed by field.
///
/// A field is present iff its last validation failed and it has not been
/// edited since.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn set(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// Remove the error for `field`; returns whether one was present.
    pub fn clear(&mut self, field: Field) -> bool {
        self.0.remove(&field).is_some()
    }

    /// Record the outcome of a validation run: set on failure, clear on pass.
    pub fn record(&mut self, field: Field, outcome: Option<&str>) {
        match outcome {
            Some(message) => self.set(field, message),
            None => {
                self.clear(field);
            }
        }
    }

    pub fn clear_all(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Step;

    #[test]
    fn table_covers_every_field() {
        let fields: Vec<_> = VALIDATORS.iter().map(|(f, _)| *f).collect();
        assert_eq!(fields, Field::ALL.to_vec());
    }

    #[test]
    fn empty_values_fail_everywhere() {
        for field in Field::ALL {
            assert!(
                validate_field(field, "").is_some(),
                "{field} should reject an empty value"
            );
        }
    }

    #[test]
    fn name_rule() {
        assert_eq!(
            validate_field(Field::Name, "A"),
            Some("Nome deve ter pelo menos 2 caracteres")
        );
        assert_eq!(validate_field(Field::Name, "Al"), None);
        assert_eq!(validate_field(Field::Name, "Zé"), None);
    }

    #[test]
    fn tax_id_rule() {
        assert_eq!(validate_field(Field::TaxId, "123.456.789-09"), None);
        assert_eq!(validate_field(Field::TaxId, "12345678909"), None);
        assert_eq!(validate_field(Field::TaxId, "1234567890"), Some("CPF inválido"));
        assert_eq!(validate_field(Field::TaxId, "123456789091"), Some("CPF inválido"));
    }

    #[test]
    fn email_rule() {
        assert_eq!(validate_field(Field::Email, "ana@ex.com"), None);
        assert_eq!(validate_field(Field::Email, "a.b@c.d.e"), None);
        for bad in ["ana", "ana@ex", "@ex.com", "ana@.com ", "ana silva@ex.com", "a@@b.c"] {
            assert_eq!(validate_field(Field::Email, bad), Some("E-mail inválido"), "{bad}");
        }
    }

    #[test]
    fn phone_rule() {
        assert_eq!(validate_field(Field::Phone, "(11) 9123-4567"), None);
        assert_eq!(validate_field(Field::Phone, "(11) 91234-5678"), None);
        assert_eq!(validate_field(Field::Phone, "119123456"), Some("Telefone inválido"));
        assert_eq!(validate_field(Field::Phone, "119123456789"), Some("Telefone inválido"));
    }

    #[test]
    fn bank_rules() {
        assert!(validate_field(Field::AgencyCode, "01").is_some());
        assert_eq!(validate_field(Field::AgencyCode, "001"), None);
        assert!(validate_field(Field::AccountCode, "123").is_some());
        assert_eq!(validate_field(Field::AccountCode, "1234"), None);
    }

    #[test]
    fn category_rule() {
        assert_eq!(validate_field(Field::ComplaintCategory, "Cobrança indevida"), None);
        assert_eq!(
            validate_field(Field::ComplaintCategory, "Poupança"),
            Some("Selecione o tipo de reclamação")
        );
    }

    #[test]
    fn description_rule() {
        assert!(validate_field(Field::Description, "curto").is_some());
        assert_eq!(validate_field(Field::Description, "0123456789"), None);
        assert_eq!(validate_field(Field::Description, "ção ção çã"), None);
    }

    #[test]
    fn validate_fields_reports_only_failures() {
        let mut draft = ComplaintDraft::new();
        draft.set(Field::Name, "Ana Silva");
        draft.set(Field::Email, "nope");

        let errors = validate_fields(&draft, Step::PersonalData.fields());
        let failed: Vec<_> = errors.fields().collect();
        assert_eq!(failed, vec![Field::TaxId, Field::Email, Field::Phone]);
    }

    #[test]
    fn record_sets_and_clears() {
        let mut errors = FieldErrors::new();
        errors.record(Field::Email, Some("E-mail inválido"));
        assert_eq!(errors.get(Field::Email), Some("E-mail inválido"));

        errors.record(Field::Email, None);
        assert!(!errors.contains(Field::Email));
        assert!(!errors.clear(Field::Email));
    }
}
