use serde::{Deserialize, Serialize};

use crate::utils::error::FolioError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Email,
}

/// One input of the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    pub name: String,
    pub kind: FieldKind,
    pub required: bool,
    #[serde(default)]
    pub value: String,
}

impl FormField {
    pub fn new(name: impl Into<String>, kind: FieldKind, required: bool) -> Self {
        Self {
            name: name.into(),
            kind,
            required,
            value: String::new(),
        }
    }

    pub fn is_valid(&self) -> bool {
        let value = self.value.trim();
        if value.is_empty() {
            return !self.required;
        }
        match self.kind {
            FieldKind::Text => true,
            FieldKind::Email => looks_like_email(value),
        }
    }
}

/// `local@domain.tld` with no whitespace.
fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Contact form whose submit button is enabled only while every field is valid.
#[derive(Debug, Clone)]
pub struct ContactForm {
    fields: Vec<FormField>,
    submit_enabled: bool,
}

impl ContactForm {
    pub fn new(fields: Vec<FormField>) -> Self {
        let mut form = Self {
            fields,
            submit_enabled: false,
        };
        form.submit_enabled = form.check_validity();
        form
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn is_submit_enabled(&self) -> bool {
        self.submit_enabled
    }

    pub fn check_validity(&self) -> bool {
        self.fields.iter().all(FormField::is_valid)
    }

    /// Handles typing into field `name`. Returns whether submit is now enabled.
    pub fn input(&mut self, name: &str, value: impl Into<String>) -> Result<bool, FolioError> {
        let field = self
            .fields
            .iter_mut()
            .find(|f| f.name == name)
            .ok_or_else(|| FolioError::UnknownField(name.to_string()))?;
        field.value = value.into();
        self.submit_enabled = self.check_validity();
        Ok(self.submit_enabled)
    }
}
