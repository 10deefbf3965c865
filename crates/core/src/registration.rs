//! Business registration request and presence validation.
//!
//! [`BusinessRegistration`] is the wire shape of `POST /api/register`. Every
//! field is optional at the serde level so that an incomplete body reaches
//! [`BusinessRegistration::validate`] and is rejected with a domain error
//! instead of a deserialization failure.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Message returned when any required registration field is missing.
pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields.";

/// Incoming registration body, camelCase on the wire.
#[derive(Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BusinessRegistration {
    #[serde(default)]
    pub business_name: Option<String>,
    #[serde(default)]
    pub business_address: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub mobile: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

impl std::fmt::Debug for BusinessRegistration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BusinessRegistration")
            .field("business_name", &self.business_name)
            .field("business_address", &self.business_address)
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("mobile", &self.mobile)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("website", &self.website)
            .finish()
    }
}

/// A registration that passed presence checks.
///
/// Required fields are guaranteed non-blank. Optional fields that were sent
/// as blank strings are normalized to `None`.
#[derive(Clone, PartialEq, Eq)]
pub struct ValidRegistration {
    pub business_name: String,
    pub business_address: Option<String>,
    pub owner_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub password: String,
    pub website: Option<String>,
}

impl std::fmt::Debug for ValidRegistration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidRegistration")
            .field("business_name", &self.business_name)
            .field("owner_name", &self.owner_name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl BusinessRegistration {
    /// Check that `businessName`, `fullName`, `email` and `password` are present.
    ///
    /// A field counts as missing when it is absent, `null`, empty, or only
    /// whitespace. Values are passed through untrimmed.
    pub fn validate(self) -> Result<ValidRegistration, CoreError> {
        let missing = || CoreError::Validation(MISSING_FIELDS_MESSAGE.to_string());

        let business_name = required(self.business_name).ok_or_else(missing)?;
        let owner_name = required(self.full_name).ok_or_else(missing)?;
        let email = required(self.email).ok_or_else(missing)?;
        let password = required(self.password).ok_or_else(missing)?;

        Ok(ValidRegistration {
            business_name,
            business_address: required(self.business_address),
            owner_name,
            email,
            phone: required(self.mobile),
            password,
            website: required(self.website),
        })
    }
}

fn required(value: Option<String>) -> Option<String> {
    value.filter(|v| !is_blank(v))
}

/// Empty or whitespace-only values count as missing wherever a field is required.
pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
