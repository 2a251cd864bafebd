use serde::{Deserialize, Serialize};

use crate::model::item::{ItemId, ListItem};

/// A single film guide entry.
///
/// Serialized camelCase (`isBest`) to stay compatible with values written by
/// earlier versions of the guide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Film {
    pub id: ItemId,
    pub title: String,
    pub description: String,
    pub is_best: bool,
}

/// Editable fields of a film.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilmFields {
    pub title: String,
    pub description: String,
}

impl FilmFields {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> FilmFields {
        FilmFields {
            title: title.into(),
            description: description.into(),
        }
    }
}

impl Film {
    /// Create a film from raw input. Both fields are trimmed and must be
    /// non-empty, otherwise `None`.
    pub fn new(id: ItemId, title: &str, description: &str) -> Option<Film> {
        let title = title.trim();
        let description = description.trim();
        if title.is_empty() || description.is_empty() {
            return None;
        }
        Some(Film {
            id,
            title: title.to_string(),
            description: description.to_string(),
            is_best: false,
        })
    }
}

impl ListItem for Film {
    type Fields = FilmFields;

    const STORE_KEY: &'static str = "films";

    fn id(&self) -> ItemId {
        self.id
    }

    fn create(id: ItemId, fields: &FilmFields) -> Option<Film> {
        Film::new(id, &fields.title, &fields.description)
    }

    fn with_fields(&self, fields: &FilmFields) -> Option<Film> {
        let title = fields.title.trim();
        let description = fields.description.trim();
        if title.is_empty() || description.is_empty() {
            return None;
        }
        Some(Film {
            title: title.to_string(),
            description: description.to_string(),
            ..self.clone()
        })
    }

    fn fields(&self) -> FilmFields {
        FilmFields::new(&self.title, &self.description)
    }

    /// The boilerplate guide a fresh store starts with.
    fn seed() -> Vec<Film> {
        vec![
            Film {
                id: 1,
                title: "Seven Samurai".to_string(),
                description: "A poor village hires seven ronin to hold off a bandit raid."
                    .to_string(),
                is_best: true,
            },
            Film {
                id: 2,
                title: "Spirited Away".to_string(),
                description: "A girl works in a bathhouse for spirits to free her parents."
                    .to_string(),
                is_best: true,
            },
            Film {
                id: 3,
                title: "Rashomon".to_string(),
                description: "Four witnesses give four incompatible accounts of one crime."
                    .to_string(),
                is_best: false,
            },
            Film {
                id: 4,
                title: "Your Name".to_string(),
                description: "Two strangers find themselves swapping bodies across time."
                    .to_string(),
                is_best: false,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_is_best_as_camel_case() {
        let film = Film::seed().remove(0);
        let json = serde_json::to_string(&film).unwrap();
        assert!(json.contains("\"isBest\":true"));
        assert!(!json.contains("is_best"));

        let back: Film = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Film::seed()[0]);
    }

    #[test]
    fn seed_has_documented_best_flags() {
        let seed = Film::seed();
        assert_eq!(seed.len(), 4);
        let by_title: Vec<(&str, bool)> = seed
            .iter()
            .map(|f| (f.title.as_str(), f.is_best))
            .collect();
        assert_eq!(
            by_title,
            vec![
                ("Seven Samurai", true),
                ("Spirited Away", true),
                ("Rashomon", false),
                ("Your Name", false),
            ]
        );
    }

    #[test]
    fn new_requires_both_fields() {
        assert!(Film::new(9, "Ikiru", "").is_none());
        assert!(Film::new(9, "  ", "a bureaucrat learns to live").is_none());
        let film = Film::new(9, " Ikiru ", " A bureaucrat learns to live. ").unwrap();
        assert_eq!(film.title, "Ikiru");
        assert_eq!(film.description, "A bureaucrat learns to live.");
        assert!(!film.is_best);
    }
}
