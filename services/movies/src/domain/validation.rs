//! Request body validation.
//!
//! Every input struct deserializes leniently (all fields optional) so that a
//! missing field surfaces as a field error in the 400 body rather than as a
//! JSON rejection. `validate()` either yields the typed draft or the complete
//! list of field errors.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::Deserialize;

use marquee_core::serde::parse_dmy;
use marquee_domain::role::Role;

use crate::domain::types::{ActorDraft, CommentDraft, MovieDraft, ReviewDraft, UserDraft};
use crate::error::{FieldError, MoviesServiceError};

static LENGTH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2})h(?:\s?(\d{1,2})m)?$").expect("valid length pattern"));
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9]\d{1,14}$").expect("valid phone pattern"));
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email pattern"));

const MIN_DATE: (i32, u32, u32) = (1900, 1, 1);
const MAX_DATE: (i32, u32, u32) = (2100, 12, 31);

/// Accumulates field errors across one input.
#[derive(Default)]
struct Checks {
    errors: Vec<FieldError>,
}

impl Checks {
    fn fail(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError::new(field, message));
    }

    fn required(&mut self, field: &'static str, value: Option<String>, max: usize) -> String {
        let value = value.unwrap_or_default();
        if value.trim().is_empty() {
            self.fail(field, format!("{field} is required"));
        } else if value.chars().count() > max {
            self.fail(field, format!("{field} must be at most {max} characters"));
        }
        value
    }

    fn length_between(&mut self, field: &'static str, value: &str, min: usize, max: usize) {
        let len = value.chars().count();
        if len < min || len > max {
            self.fail(
                field,
                format!("{field} must be between {min} and {max} characters"),
            );
        }
    }

    fn date(&mut self, field: &'static str, value: Option<&str>) -> NaiveDate {
        let Some(raw) = value.filter(|v| !v.trim().is_empty()) else {
            self.fail(field, format!("{field} is required"));
            return NaiveDate::default();
        };
        match parse_dmy(raw) {
            Some(date) if in_date_range(date) => date,
            Some(_) => {
                self.fail(field, format!("{field} must be between 01-01-1900 and 31-12-2100"));
                NaiveDate::default()
            }
            None => {
                self.fail(field, format!("{field} must use the dd-MM-yyyy format"));
                NaiveDate::default()
            }
        }
    }

    fn email(&mut self, value: Option<String>) -> String {
        let value = self.required("email", value, 255);
        if !value.trim().is_empty() && !EMAIL_RE.is_match(&value) {
            self.fail("email", "email is not a valid address");
        }
        value
    }

    fn id(&mut self, field: &'static str, value: Option<i32>) -> i32 {
        match value {
            Some(id) if id > 0 => id,
            Some(_) => {
                self.fail(field, format!("{field} must be greater than 0"));
                0
            }
            None => {
                self.fail(field, format!("{field} is required"));
                0
            }
        }
    }

    fn finish<T>(self, value: T) -> Result<T, MoviesServiceError> {
        if self.errors.is_empty() {
            Ok(value)
        } else {
            Err(MoviesServiceError::Validation(self.errors))
        }
    }
}

fn in_date_range(date: NaiveDate) -> bool {
    let bound = |(y, m, d): (i32, u32, u32)| NaiveDate::from_ymd_opt(y, m, d);
    match (bound(MIN_DATE), bound(MAX_DATE)) {
        (Some(min), Some(max)) => (min..=max).contains(&date),
        _ => false,
    }
}

/// Total minutes for a runtime like `2h 15m`, or `None` when it does not parse.
pub fn runtime_minutes(length: &str) -> Option<u32> {
    let caps = LENGTH_RE.captures(length.trim())?;
    let hours: u32 = caps.get(1)?.as_str().parse().ok()?;
    let minutes: u32 = match caps.get(2) {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };
    Some(hours * 60 + minutes)
}

// ── Movie ────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct MovieInput {
    pub id: Option<i32>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub release_date: Option<String>,
    pub length: Option<String>,
    pub genre: Option<String>,
}

impl MovieInput {
    pub fn validate(self) -> Result<MovieDraft, MoviesServiceError> {
        let mut checks = Checks::default();
        let title = checks.required("title", self.title, 200);
        let description = self.description.unwrap_or_default();
        checks.length_between("description", &description, 10, 500);
        let release_date = checks.date("release_date", self.release_date.as_deref());
        let length = self.length.unwrap_or_default();
        match runtime_minutes(&length) {
            Some(total) if (60..=240).contains(&total) => {}
            Some(_) => checks.fail("length", "length must total between 60 and 240 minutes"),
            None => checks.fail("length", "length must look like 2h or 2h 15m"),
        }
        let genre = checks.required("genre", self.genre, 100);
        checks.finish(MovieDraft {
            title,
            description,
            release_date,
            length,
            genre,
        })
    }
}

// ── Actor ────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ActorInput {
    pub id: Option<i32>,
    pub movie_id: Option<i32>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub date_of_birth: Option<String>,
    pub is_active: Option<bool>,
}

impl ActorInput {
    pub fn validate(self) -> Result<ActorDraft, MoviesServiceError> {
        let mut checks = Checks::default();
        let movie_id = checks.id("movie_id", self.movie_id);
        let first_name = checks.required("first_name", self.first_name, 100);
        let last_name = checks.required("last_name", self.last_name, 100);
        let email = checks.email(self.email);
        let date_of_birth = checks.date("date_of_birth", self.date_of_birth.as_deref());
        checks.finish(ActorDraft {
            movie_id,
            first_name,
            last_name,
            email,
            date_of_birth,
            is_active: self.is_active.unwrap_or(true),
        })
    }
}

// ── User ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UserInput {
    pub id: Option<i32>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub date_of_birth: Option<String>,
    pub telephone: Option<String>,
    pub is_active: Option<bool>,
}

impl UserInput {
    pub fn validate(self) -> Result<UserDraft, MoviesServiceError> {
        let mut checks = Checks::default();
        let first_name = checks.required("first_name", self.first_name, 100);
        let last_name = checks.required("last_name", self.last_name, 100);
        let email = checks.email(self.email);
        let date_of_birth = checks.date("date_of_birth", self.date_of_birth.as_deref());
        let telephone = self.telephone.filter(|t| !t.trim().is_empty());
        if let Some(ref phone) = telephone {
            if phone.chars().count() > 15 {
                checks.fail("telephone", "telephone must be at most 15 characters");
            } else if !PHONE_RE.is_match(phone) {
                checks.fail("telephone", "telephone must be an international number");
            }
        }
        checks.finish(UserDraft {
            first_name,
            last_name,
            email,
            date_of_birth,
            telephone,
            is_active: self.is_active.unwrap_or(true),
        })
    }
}

// ── Review ───────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ReviewInput {
    pub id: Option<i32>,
    pub user_id: Option<i32>,
    pub movie_id: Option<i32>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub grade: Option<f32>,
}

impl ReviewInput {
    /// Grade bounds are a business rule and are checked by the use case.
    pub fn validate(self) -> Result<ReviewDraft, MoviesServiceError> {
        let mut checks = Checks::default();
        let user_id = checks.id("user_id", self.user_id);
        let movie_id = checks.id("movie_id", self.movie_id);
        let description = self.description.filter(|d| !d.trim().is_empty());
        if let Some(ref d) = description {
            checks.length_between("description", d, 1, 500);
        }
        let date = checks.date("date", self.date.as_deref());
        let grade = self.grade.unwrap_or_else(|| {
            checks.fail("grade", "grade is required");
            0.0
        });
        checks.finish(ReviewDraft {
            user_id,
            movie_id,
            description,
            date,
            grade,
        })
    }
}

// ── Comment ──────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CommentInput {
    pub id: Option<i32>,
    pub review_id: Option<i32>,
    pub user_id: Option<i32>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub is_active: Option<bool>,
}

impl CommentInput {
    pub fn validate(self) -> Result<CommentDraft, MoviesServiceError> {
        let mut checks = Checks::default();
        let review_id = checks.id("review_id", self.review_id);
        let user_id = checks.id("user_id", self.user_id);
        let description = self.description.unwrap_or_default();
        checks.length_between("description", &description, 10, 500);
        let date = checks.date("date", self.date.as_deref());
        checks.finish(CommentDraft {
            review_id,
            user_id,
            description,
            date,
            is_active: self.is_active,
        })
    }
}

// ── Security ─────────────────────────────────────────────────────────────────

/// Credentials to register, password still in clear text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub user_id: i32,
    pub login: String,
    pub password: String,
    pub name: String,
    pub role: Role,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RegistrationInput {
    pub user_id: Option<i32>,
    pub login: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
    pub role: Option<String>,
}

impl RegistrationInput {
    pub fn validate(self) -> Result<Registration, MoviesServiceError> {
        let mut checks = Checks::default();
        let user_id = checks.id("user_id", self.user_id);
        let login = checks.required("login", self.login, 50);
        let password = self.password.unwrap_or_default();
        if password.chars().count() < 6 {
            checks.fail("password", "password must be at least 6 characters");
        }
        let name = checks.required("name", self.name, 200);
        let role = match self.role.as_deref().map(str::parse::<Role>) {
            Some(Ok(role)) => role,
            Some(Err(_)) => {
                checks.fail("role", "role must be Administrator, Provider or User");
                Role::User
            }
            None => {
                checks.fail("role", "role is required");
                Role::User
            }
        };
        checks.finish(Registration {
            user_id,
            login,
            password,
            name,
            role,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginInput {
    pub login: Option<String>,
    pub password: Option<String>,
}

impl LoginInput {
    /// Returns `(login, password)`.
    pub fn validate(self) -> Result<(String, String), MoviesServiceError> {
        let mut checks = Checks::default();
        let login = checks.required("login", self.login, 50);
        let password = checks.required("password", self.password, 200);
        checks.finish((login, password))
    }
}
