//! The in-progress complaint record

use serde::{Deserialize, Serialize};

use crate::category::ComplaintCategory;
use crate::field::Field;

/// Complaint being filled in by one form session.
///
/// Values are stored exactly as displayed (masks included). Nothing here is
/// persisted; the draft is dropped or reset after submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintDraft {
    pub name: String,
    #[serde(rename = "cpf")]
    pub tax_id: String,
    pub email: String,
    pub phone: String,
    #[serde(rename = "agency")]
    pub agency_code: String,
    #[serde(rename = "account")]
    pub account_code: String,
    #[serde(rename = "complaintType")]
    pub complaint_category: String,
    pub description: String,
}

impl ComplaintDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::TaxId => &self.tax_id,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::AgencyCode => &self.agency_code,
            Field::AccountCode => &self.account_code,
            Field::ComplaintCategory => &self.complaint_category,
            Field::Description => &self.description,
        }
    }

    /// Overwrite a field. No masking or validation happens here.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::TaxId => &mut self.tax_id,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::AgencyCode => &mut self.agency_code,
            Field::AccountCode => &mut self.account_code,
            Field::ComplaintCategory => &mut self.complaint_category,
            Field::Description => &mut self.description,
        };
        *slot = value.into();
    }

    /// The selected category, if the stored label is a known one
    pub fn category(&self) -> Option<ComplaintCategory> {
        self.complaint_category.parse().ok()
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_draft_is_empty() {
        let draft = ComplaintDraft::new();
        assert!(draft.is_empty());
        assert_eq!(draft.category(), None);
    }

    #[test]
    fn set_and_get_every_field() {
        let mut draft = ComplaintDraft::new();
        for field in Field::ALL {
            draft.set(field, field.key());
        }
        for field in Field::ALL {
            assert_eq!(draft.get(field), field.key());
        }
        assert!(!draft.is_empty());
    }

    #[test]
    fn category_parses_label() {
        let mut draft = ComplaintDraft::new();
        draft.set(Field::ComplaintCategory, "Seguros");
        assert_eq!(draft.category(), Some(ComplaintCategory::Insurance));

        draft.set(Field::ComplaintCategory, "Poupança");
        assert_eq!(draft.category(), None);
    }

    #[test]
    fn serializes_with_form_keys() {
        let mut draft = ComplaintDraft::new();
        draft.set(Field::TaxId, "123.456.789-09");
        draft.set(Field::ComplaintCategory, "Outros");

        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["cpf"], "123.456.789-09");
        assert_eq!(json["complaintType"], "Outros");
        assert!(json.get("taxId").is_none());
    }
}
