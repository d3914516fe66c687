//! Creation-form validation.
//!
//! All seven entry fields are mandatory; a draft that fails validation is
//! rejected wholesale and nothing is stored. Messages mirror the form's
//! pt-PT wording.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A record draft as submitted by the creation form.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewRecord {
    #[validate(length(min = 1, message = "Título é obrigatório"))]
    pub title: String,

    #[validate(length(min = 1, message = "Descrição é obrigatória"))]
    pub description: String,

    #[validate(length(min = 1, message = "Área é obrigatória"))]
    pub area: String,

    #[validate(length(min = 1, message = "Concelho é obrigatório"))]
    pub concelho: String,

    #[validate(length(min = 1, message = "Freguesia é obrigatória"))]
    pub freguesia: String,

    #[validate(length(min = 1, message = "Secretaria é obrigatória"))]
    pub secretaria: String,

    #[validate(length(min = 1, message = "Nome do assessor é obrigatório"))]
    pub assessor: String,
}

impl NewRecord {
    /// Trim surrounding whitespace on every field, so a blank-only entry
    /// fails the length check like an empty one.
    pub(crate) fn normalized(mut self) -> Self {
        for field in [
            &mut self.title,
            &mut self.description,
            &mut self.area,
            &mut self.concelho,
            &mut self.freguesia,
            &mut self.secretaria,
            &mut self.assessor,
        ] {
            *field = field.trim().to_string();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> NewRecord {
        NewRecord {
            title: "Construção de nova creche".into(),
            description: "Construção de uma creche na zona alta da freguesia.".into(),
            area: "Infraestruturas".into(),
            concelho: "Santana".into(),
            freguesia: "Faial".into(),
            secretaria: "Secretaria Regional das Infraestruturas".into(),
            assessor: "Eng. Paula Vieira".into(),
        }
    }

    #[test]
    fn test_complete_draft_validates() {
        assert!(draft().normalized().validate().is_ok());
    }

    #[test]
    fn test_blank_only_fields_fail() {
        let mut d = draft();
        d.title = "   ".into();
        d.assessor = "\t".into();
        let errors = d.normalized().validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("title"));
        assert!(fields.contains_key("assessor"));
        assert_eq!(fields.len(), 2);
    }

    #[test]
    fn test_messages_are_portuguese() {
        let mut d = draft();
        d.description = String::new();
        let errors = d.normalized().validate().unwrap_err();
        let messages: Vec<String> = errors.field_errors()["description"]
            .iter()
            .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .collect();
        assert_eq!(messages, vec!["Descrição é obrigatória".to_string()]);
    }
}
