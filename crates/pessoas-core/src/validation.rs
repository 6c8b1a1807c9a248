//! Local form validation.
//!
//! Validation runs before any request is built; a failing form never reaches
//! the network. All failing fields are collected so they can be shown inline.

use crate::{
    Address, BirthDate, CEP_DIGITS, CPF_DIGITS, Credentials, MIN_PASSWORD_LENGTH, Registration,
    strip_non_digits,
};

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Regex for a plausible e-mail address: `something@host.tld`.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("Invalid regex"));

/// A single failing form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Every failing field of one form submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// Message for a field, if that field failed.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }

    /// Record an error when `value` is blank.
    pub fn require(&mut self, field: &'static str, value: &str, message: &str) {
        if value.trim().is_empty() {
            self.push(field, message);
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

pub fn is_complete_cpf(value: &str) -> bool {
    strip_non_digits(value).len() == CPF_DIGITS
}

pub fn is_complete_cep(value: &str) -> bool {
    strip_non_digits(value).len() == CEP_DIGITS
}

/// Login form: username present, password long enough.
pub fn validate_credentials(credentials: &Credentials) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    errors.require("username", &credentials.username, "Username is required");
    if credentials.password.chars().count() < MIN_PASSWORD_LENGTH {
        errors.push(
            "password",
            format!("Password must have at least {MIN_PASSWORD_LENGTH} characters"),
        );
    }
    errors.into_result()
}

/// Registration form, including the password confirmation field.
pub fn validate_registration(
    registration: &Registration,
    confirm_password: &str,
) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    errors.require("username", &registration.username, "Username is required");
    if !is_valid_email(&registration.email) {
        errors.push("email", "Enter a valid e-mail address");
    }
    if registration.password.chars().count() < MIN_PASSWORD_LENGTH {
        errors.push(
            "password",
            format!("Password must have at least {MIN_PASSWORD_LENGTH} characters"),
        );
    }
    if confirm_password.is_empty() || confirm_password != registration.password {
        errors.push("confirmPassword", "Passwords do not match");
    }
    errors.into_result()
}

/// Person fields shared by both schema versions, as typed into a form.
pub struct PersonFields<'a> {
    pub nome: &'a str,
    pub cpf: &'a str,
    pub email: &'a str,
    pub data_nascimento: &'a str,
}

pub fn validate_person_fields(fields: &PersonFields<'_>, errors: &mut ValidationErrors) {
    errors.require("nome", fields.nome, "Name is required");

    if !is_complete_cpf(fields.cpf) {
        errors.push("cpf", format!("CPF must have {CPF_DIGITS} digits"));
    }

    if fields.data_nascimento.trim().is_empty() {
        errors.push("dataNascimento", "Birth date is required");
    } else if fields.data_nascimento.parse::<BirthDate>().is_err() {
        errors.push("dataNascimento", "Birth date must be a valid date (YYYY-MM-DD)");
    }

    let email = fields.email.trim();
    if !email.is_empty() && !is_valid_email(email) {
        errors.push("email", "Enter a valid e-mail address");
    }
}

pub fn validate_address(address: &Address, errors: &mut ValidationErrors) {
    errors.require("endereco.rua", &address.rua, "Street is required");
    errors.require("endereco.numero", &address.numero, "Number is required");
    errors.require("endereco.cidade", &address.cidade, "City is required");
    errors.require("endereco.estado", &address.estado, "State is required");
    if !is_complete_cep(&address.cep) {
        errors.push("endereco.cep", format!("CEP must have {CEP_DIGITS} digits"));
    }
}
