//! Pure field validation for the registration form. Synchronous, no I/O;
//! failing fields are reported one entry per field so each renders and
//! asserts independently.

use std::collections::BTreeMap;

use shared::{domain::FileRef, protocol::RegisterRequest};

pub const PASSWORD_MIN_CHARS: usize = 8;
pub const USER_NAME_MIN_CHARS: usize = 2;
pub const USER_NAME_MAX_CHARS: usize = 30;
pub const FULL_NAME_MIN_CHARS: usize = 2;
pub const FULL_NAME_MAX_CHARS: usize = 50;

/// Ephemeral field buffers for the registration form. Created on first
/// keystroke, mutated per change, destroyed on successful submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationDraft {
    pub email: String,
    pub password: String,
    pub user_name: String,
    pub full_name: String,
    pub avatar: Option<FileRef>,
    pub cover_image: Option<FileRef>,
}

/// Field name to human-readable message, in stable iteration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }
}

/// Checks the draft against the registration schema and, when every field
/// passes, produces the normalized submission payload.
pub fn validate_registration(draft: &RegistrationDraft) -> Result<RegisterRequest, FieldErrors> {
    let mut errors = FieldErrors::default();

    if !is_valid_email(&draft.email) {
        errors.insert("email", "Enter a valid email address");
    }

    if draft.password.chars().count() < PASSWORD_MIN_CHARS {
        errors.insert(
            "password",
            format!("Password must be at least {PASSWORD_MIN_CHARS} characters"),
        );
    }

    let user_name_chars = draft.user_name.chars().count();
    if !(USER_NAME_MIN_CHARS..=USER_NAME_MAX_CHARS).contains(&user_name_chars) {
        errors.insert(
            "userName",
            format!("Username must be {USER_NAME_MIN_CHARS}-{USER_NAME_MAX_CHARS} characters"),
        );
    }

    let full_name_chars = draft.full_name.chars().count();
    if !(FULL_NAME_MIN_CHARS..=FULL_NAME_MAX_CHARS).contains(&full_name_chars) {
        errors.insert(
            "fullName",
            format!("Full name must be {FULL_NAME_MIN_CHARS}-{FULL_NAME_MAX_CHARS} characters"),
        );
    }

    let avatar = match &draft.avatar {
        Some(file) if file.is_file() => Some(file.clone()),
        _ => {
            errors.insert("avatar", "Expected a file");
            None
        }
    };

    if let Some(cover) = &draft.cover_image {
        if !cover.is_file() {
            errors.insert("coverImage", "Expected a file");
        }
    }

    match avatar {
        Some(avatar) if errors.is_empty() => Ok(RegisterRequest {
            email: draft.email.clone(),
            password: draft.password.clone(),
            user_name: draft.user_name.clone(),
            full_name: draft.full_name.clone(),
            avatar,
            cover_image: draft.cover_image.clone(),
        }),
        _ => Err(errors),
    }
}

/// Structural email check: one `@`, non-empty local part, dotted domain,
/// no whitespace. Deliverability is the server's problem.
fn is_valid_email(raw: &str) -> bool {
    if raw.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}
