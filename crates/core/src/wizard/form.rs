//! Account creation form and its field-local validation.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::registration::is_blank;

/// Minimum password length, counted in characters.
pub const MIN_PASSWORD_LENGTH: usize = 8;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("valid regex"));

/// Raw values of the account creation form as entered by the user.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountForm {
    pub business_name: String,
    pub business_address: String,
    pub full_name: String,
    pub email: String,
    pub mobile: String,
    pub password: String,
    pub website: String,
    pub is_owner: bool,
}

impl fmt::Debug for AccountForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountForm")
            .field("business_name", &self.business_name)
            .field("business_address", &self.business_address)
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("mobile", &self.mobile)
            .field("password", &"<redacted>")
            .field("website", &self.website)
            .field("is_owner", &self.is_owner)
            .finish()
    }
}

/// Form fields that can carry a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AccountField {
    BusinessName,
    BusinessAddress,
    FullName,
    Email,
    Mobile,
    Password,
    IsOwner,
}

/// Named validation errors collected from one form submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors(BTreeMap<AccountField, &'static str>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Message for `field`, if it failed validation.
    pub fn get(&self, field: AccountField) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn contains(&self, field: AccountField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (AccountField, &'static str)> + '_ {
        self.0.iter().map(|(field, msg)| (*field, *msg))
    }

    fn insert(&mut self, field: AccountField, message: &'static str) {
        self.0.insert(field, message);
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<_> = self.0.values().copied().collect();
        f.write_str(&messages.join(" "))
    }
}

impl AccountForm {
    /// Run every field check independently and collect the failures.
    ///
    /// Business name and address are only required in the new-business flow.
    /// Whitespace-only values count as missing, the same rule the registration
    /// endpoint applies.
    pub fn validate(&self, new_business: bool) -> FieldErrors {
        let mut errors = FieldErrors::default();

        if new_business && is_blank(&self.business_name) {
            errors.insert(AccountField::BusinessName, "Business name is required.");
        }
        if new_business && is_blank(&self.business_address) {
            errors.insert(AccountField::BusinessAddress, "Business address is required.");
        }
        if is_blank(&self.full_name) {
            errors.insert(AccountField::FullName, "Full name is required.");
        }
        if !EMAIL_RE.is_match(&self.email) {
            errors.insert(AccountField::Email, "Email is invalid.");
        }
        if is_blank(&self.mobile) {
            errors.insert(AccountField::Mobile, "Mobile number is required.");
        }
        if is_blank(&self.password) || self.password.chars().count() < MIN_PASSWORD_LENGTH {
            errors.insert(AccountField::Password, "Password must be at least 8 characters.");
        }
        if !self.is_owner {
            errors.insert(
                AccountField::IsOwner,
                "You must confirm you are the owner or representative.",
            );
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> AccountForm {
        AccountForm {
            business_name: String::new(),
            business_address: String::new(),
            full_name: "Mike Ross".into(),
            email: "mike@autorepair.test".into(),
            mobile: "555-987-6543".into(),
            password: "12345678".into(),
            website: String::new(),
            is_owner: true,
        }
    }

    #[test]
    fn valid_existing_business_form_has_no_errors() {
        assert!(valid_form().validate(false).is_empty());
    }

    #[test]
    fn business_fields_required_only_for_new_business() {
        let errors = valid_form().validate(true);
        assert_eq!(errors.len(), 2);
        assert!(errors.contains(AccountField::BusinessName));
        assert!(errors.contains(AccountField::BusinessAddress));
    }

    #[test]
    fn password_boundary() {
        let mut form = valid_form();
        form.password = "1234567".into();
        assert_eq!(
            form.validate(false).get(AccountField::Password),
            Some("Password must be at least 8 characters.")
        );

        form.password = "12345678".into();
        assert!(!form.validate(false).contains(AccountField::Password));
    }

    #[test]
    fn password_length_counts_characters() {
        let mut form = valid_form();
        // Eight characters, more than eight bytes.
        form.password = "pässwörd".into();
        assert!(!form.validate(false).contains(AccountField::Password));
    }

    #[test]
    fn email_pattern() {
        let mut form = valid_form();
        for bad in ["", "mike", "mike@autorepair", "@.", "mike @x.y"] {
            form.email = bad.into();
            assert!(
                form.validate(false).contains(AccountField::Email),
                "{bad:?} should be rejected"
            );
        }
        form.email = "a@b.c".into();
        assert!(form.validate(false).is_empty());
    }

    #[test]
    fn unchecked_ownership_is_an_error() {
        let mut form = valid_form();
        form.is_owner = false;
        let errors = form.validate(false);
        assert_eq!(errors.len(), 1);
        assert!(errors.contains(AccountField::IsOwner));
    }

    #[test]
    fn whitespace_only_fields_count_as_missing() {
        let form = AccountForm {
            business_name: "  ".into(),
            business_address: "\t".into(),
            full_name: "   ".into(),
            mobile: " ".into(),
            password: "        ".into(),
            ..valid_form()
        };
        let errors = form.validate(true);
        for field in [
            AccountField::BusinessName,
            AccountField::BusinessAddress,
            AccountField::FullName,
            AccountField::Mobile,
            AccountField::Password,
        ] {
            assert!(errors.contains(field), "{field:?} should be rejected");
        }
        assert!(!errors.contains(AccountField::Email));
    }

    #[test]
    fn errors_accumulate_across_fields() {
        let errors = AccountForm::default().validate(true);
        assert_eq!(errors.len(), 7);
    }

    #[test]
    fn debug_output_redacts_password() {
        assert!(!format!("{:?}", valid_form()).contains("12345678"));
    }
}
