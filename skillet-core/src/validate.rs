//! Field-level validation shared by the form views and the client's
//! response shape check.

use crate::types::RecipeDraft;
use std::fmt;

/// Violations keyed by wire field name, in field declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<(&'static str, String)>,
}

impl ValidationErrors {
    fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push((field, message.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Message for a single field, if it failed.
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, m)| m.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.errors.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.errors {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}

/// Non-empty check for a text field, reusable as a per-field prompt hook.
pub fn check_required(value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err("is required".to_string())
    } else {
        Ok(())
    }
}

/// Minimum-serving check for `num_pessoas`.
pub fn check_num_pessoas(n: u32) -> Result<(), String> {
    if n < 1 {
        Err("must be at least 1".to_string())
    } else {
        Ok(())
    }
}

/// Check every field of a draft independently. No cross-field rules.
pub fn validate(draft: &RecipeDraft) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let text_fields: [(&'static str, &str); 5] = [
        ("titulo", &draft.titulo),
        ("tipo", &draft.tipo),
        ("nivel_dificuldade", &draft.nivel_dificuldade),
        ("lista_ingredientes", &draft.lista_ingredientes),
        ("preparacao", &draft.preparacao),
    ];
    for (field, value) in text_fields {
        if let Err(message) = check_required(value) {
            errors.push(field, message);
        }
    }

    if let Err(message) = check_num_pessoas(draft.num_pessoas) {
        errors.push("num_pessoas", message);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_draft() -> RecipeDraft {
        RecipeDraft {
            titulo: "Bolo".to_string(),
            tipo: "snack".to_string(),
            num_pessoas: 4,
            nivel_dificuldade: "easy".to_string(),
            lista_ingredientes: "flour\neggs\nsugar".to_string(),
            preparacao: "mix everything, bake for 40 minutes".to_string(),
        }
    }

    #[test]
    fn test_full_draft_passes() {
        assert!(validate(&full_draft()).is_ok());
    }

    #[test]
    fn test_empty_draft_fails_every_text_field() {
        let draft = RecipeDraft {
            num_pessoas: 1,
            ..RecipeDraft::default()
        };
        let errors = validate(&draft).unwrap_err();
        assert_eq!(errors.len(), 5);
        assert!(errors.message_for("titulo").is_some());
        assert!(errors.message_for("num_pessoas").is_none());
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        let mut draft = full_draft();
        draft.titulo = "   ".to_string();
        let errors = validate(&draft).unwrap_err();
        assert!(errors.message_for("titulo").is_some());
    }

    #[test]
    fn test_num_pessoas_boundary() {
        let mut draft = full_draft();
        draft.num_pessoas = 0;
        let errors = validate(&draft).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.message_for("num_pessoas").is_some());

        draft.num_pessoas = 1;
        assert!(validate(&draft).is_ok());
    }

    #[test]
    fn test_errors_keep_field_declaration_order() {
        let errors = validate(&RecipeDraft {
            num_pessoas: 0,
            ..RecipeDraft::default()
        })
        .unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|(f, _)| f).collect();
        assert_eq!(
            fields,
            vec![
                "titulo",
                "tipo",
                "nivel_dificuldade",
                "lista_ingredientes",
                "preparacao",
                "num_pessoas",
            ]
        );
    }
}
