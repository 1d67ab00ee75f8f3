//! Business rules applied by the use cases after input validation.

use crate::error::MoviesServiceError;

/// The closed set of genres a movie may carry. Matching is exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Genre {
    Terror,
    Accion,
    Romantica,
    Suspenso,
    Musical,
}

impl Genre {
    pub const ALL: [Genre; 5] = [
        Genre::Terror,
        Genre::Accion,
        Genre::Romantica,
        Genre::Suspenso,
        Genre::Musical,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Terror => "Terror",
            Self::Accion => "Accion",
            Self::Romantica => "Romantica",
            Self::Suspenso => "Suspenso",
            Self::Musical => "Musical",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.as_str() == value)
    }
}

pub const MIN_GRADE: f32 = 1.0;
pub const MAX_GRADE: f32 = 10.0;

const FORBIDDEN_WORDS: [&str; 5] = ["mierda", "puta", "cabron", "joder", "coño"];

pub fn ensure_genre(genre: &str) -> Result<Genre, MoviesServiceError> {
    Genre::parse(genre).ok_or(MoviesServiceError::InvalidGenre)
}

pub fn ensure_grade(grade: f32) -> Result<(), MoviesServiceError> {
    if (MIN_GRADE..=MAX_GRADE).contains(&grade) {
        Ok(())
    } else {
        Err(MoviesServiceError::GradeOutOfRange)
    }
}

/// Case-insensitive substring search for any forbidden word.
pub fn contains_forbidden_words(text: &str) -> bool {
    if text.trim().is_empty() {
        return false;
    }
    let lowered = text.to_lowercase();
    FORBIDDEN_WORDS.iter().any(|word| lowered.contains(word))
}

pub fn ensure_clean_text(text: Option<&str>) -> Result<(), MoviesServiceError> {
    match text {
        Some(text) if contains_forbidden_words(text) => Err(MoviesServiceError::ForbiddenWords),
        _ => Ok(()),
    }
}
