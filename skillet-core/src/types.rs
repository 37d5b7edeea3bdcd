use serde::{Deserialize, Serialize};
use std::fmt;

/// One recipe as stored by the collection service.
///
/// Field names are the wire format and are kept verbatim. The id is
/// opaque, assigned by the store on create, and never produced here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub titulo: String,
    pub tipo: String,
    pub num_pessoas: u32,
    pub nivel_dificuldade: String,
    pub lista_ingredientes: String,
    pub preparacao: String,
}

impl Recipe {
    /// Attach a store-assigned id to a draft.
    pub fn from_draft(id: impl Into<String>, draft: RecipeDraft) -> Self {
        Self {
            id: id.into(),
            titulo: draft.titulo,
            tipo: draft.tipo,
            num_pessoas: draft.num_pessoas,
            nivel_dificuldade: draft.nivel_dificuldade,
            lista_ingredientes: draft.lista_ingredientes,
            preparacao: draft.preparacao,
        }
    }

    /// Copy the editable fields into a draft, dropping the id.
    pub fn to_draft(&self) -> RecipeDraft {
        RecipeDraft {
            titulo: self.titulo.clone(),
            tipo: self.tipo.clone(),
            num_pessoas: self.num_pessoas,
            nivel_dificuldade: self.nivel_dificuldade.clone(),
            lista_ingredientes: self.lista_ingredientes.clone(),
            preparacao: self.preparacao.clone(),
        }
    }
}

/// A form's in-progress copy of a recipe's editable fields.
///
/// This is also the body of a create request - the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeDraft {
    pub titulo: String,
    pub tipo: String,
    pub num_pessoas: u32,
    pub nivel_dificuldade: String,
    pub lista_ingredientes: String,
    pub preparacao: String,
}

impl Default for RecipeDraft {
    /// Initial form values: empty text fields, one person served.
    fn default() -> Self {
        Self {
            titulo: String::new(),
            tipo: String::new(),
            num_pessoas: 1,
            nivel_dificuldade: String::new(),
            lista_ingredientes: String::new(),
            preparacao: String::new(),
        }
    }
}

/// Canonical difficulty values offered by the forms.
///
/// The stored field is free text (the validator only requires it to be
/// non-empty), so unknown values read back from the store still render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All difficulties in form display order
    pub const ALL: &'static [Difficulty] =
        &[Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Meal type options offered by the creation form. The edit form accepts
/// free text for this field.
pub const MEAL_TYPES: &[&str] = &["breakfast", "lunch", "dinner", "snack"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_round_trip_keeps_fields() {
        let draft = RecipeDraft {
            titulo: "Bolo".to_string(),
            tipo: "snack".to_string(),
            num_pessoas: 8,
            nivel_dificuldade: "easy".to_string(),
            lista_ingredientes: "flour\neggs".to_string(),
            preparacao: "mix and bake".to_string(),
        };

        let recipe = Recipe::from_draft("42", draft.clone());
        assert_eq!(recipe.id, "42");
        assert_eq!(recipe.to_draft(), draft);
    }

    #[test]
    fn test_difficulty_string_round_trip() {
        for d in Difficulty::ALL {
            assert_eq!(Difficulty::from_str(d.as_str()), Some(*d));
        }
        assert_eq!(Difficulty::from_str("impossible"), None);
    }

    #[test]
    fn test_draft_serializes_without_id() {
        let json = serde_json::to_value(RecipeDraft::default()).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json.get("num_pessoas").and_then(|v| v.as_u64()), Some(1));
    }
}
