use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

/// Loose email shape: something@something.something, no whitespace and no
/// second `@` in any part. U+FEFF counts as whitespace, as it does in browsers.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$")
        .expect("email pattern is a valid regex")
});

/// The three inputs of the client access form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Email,
    BusinessName,
    ReferralCode,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Email, Field::BusinessName, Field::ReferralCode];

    pub fn id(self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::BusinessName => "businessName",
            Field::ReferralCode => "referral",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Email => "Email",
            Field::BusinessName => "Business Name",
            Field::ReferralCode => "Referral Code",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Email => "your@email.com",
            Field::BusinessName => "Company name",
            Field::ReferralCode => "Enter code",
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            Field::Email => "email",
            _ => "text",
        }
    }

    pub fn autocomplete(self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::BusinessName => "organization",
            Field::ReferralCode => "off",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub email: String,
    pub business_name: String,
    pub referral_code: String,
}

impl FormState {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Email => &self.email,
            Field::BusinessName => &self.business_name,
            Field::ReferralCode => &self.referral_code,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Email => self.email = value,
            Field::BusinessName => self.business_name = value,
            Field::ReferralCode => self.referral_code = value,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldError {
    Required,
    InvalidFormat,
}

impl FieldError {
    /// Message shown under the input.
    pub fn message(self, field: Field) -> &'static str {
        match (field, self) {
            (Field::Email, FieldError::Required) => "Email address is required",
            (Field::Email, FieldError::InvalidFormat) => "Please enter a valid email address",
            (Field::BusinessName, _) => "Business name is required",
            (Field::ReferralCode, _) => "Referral code is required",
        }
    }
}

/// Per-field errors from the last submit attempt.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<Field, FieldError>);

impl ValidationErrors {
    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    /// Drops the entry for `field`, leaving every other field untouched.
    pub fn clear(&mut self, field: Field) {
        self.0.remove(&field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl FromIterator<(Field, FieldError)> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = (Field, FieldError)>>(iter: I) -> Self {
        ValidationErrors(iter.into_iter().collect())
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Whitespace as browsers trim it: Unicode whitespace plus the byte-order mark.
fn is_js_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

fn check_required(value: &str) -> Option<FieldError> {
    value
        .trim_matches(is_js_space)
        .is_empty()
        .then_some(FieldError::Required)
}

fn check_email(value: &str) -> Option<FieldError> {
    // The shape check runs on the raw value, so padded input is rejected as
    // malformed rather than silently trimmed.
    check_required(value)
        .or_else(|| (!is_valid_email(value)).then_some(FieldError::InvalidFormat))
}

/// Checks every field; never stops at the first failure.
pub fn validate(form: &FormState) -> ValidationErrors {
    Field::ALL
        .into_iter()
        .filter_map(|field| {
            let value = form.value(field);
            let error = match field {
                Field::Email => check_email(value),
                Field::BusinessName | Field::ReferralCode => check_required(value),
            };
            error.map(|error| (field, error))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn form(email: &str, business_name: &str, referral_code: &str) -> FormState {
        FormState {
            email: email.to_string(),
            business_name: business_name.to_string(),
            referral_code: referral_code.to_string(),
        }
    }

    #[test]
    fn valid_form_has_no_errors() {
        assert!(validate(&form("a@b.com", "Acme", "X1")).is_empty());
    }

    #[test]
    fn empty_email_is_the_only_error() {
        let errors = validate(&form("", "Acme", "X1"));
        assert_eq!(
            errors,
            [(Field::Email, FieldError::Required)]
                .into_iter()
                .collect::<ValidationErrors>()
        );
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let errors = validate(&form("   ", " \t", "\n"));
        assert_eq!(
            errors,
            [
                (Field::Email, FieldError::Required),
                (Field::BusinessName, FieldError::Required),
                (Field::ReferralCode, FieldError::Required),
            ]
            .into_iter()
            .collect::<ValidationErrors>()
        );
    }

    #[test]
    fn malformed_email_is_invalid_format() {
        let errors = validate(&form("not-an-email", "Acme", "X1"));
        assert_eq!(errors.get(Field::Email), Some(FieldError::InvalidFormat));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn all_fields_checked_together() {
        let errors = validate(&form("nope", "", ""));
        assert_eq!(errors.get(Field::Email), Some(FieldError::InvalidFormat));
        assert_eq!(errors.get(Field::BusinessName), Some(FieldError::Required));
        assert_eq!(errors.get(Field::ReferralCode), Some(FieldError::Required));
    }

    #[test]
    fn email_shapes() {
        for ok in [
            "a@b.com",
            "first.last@sub.example.org",
            "x@y.z",
            "a@b.c.d",
            "ÜBER@bücher.de",
        ] {
            assert!(is_valid_email(ok), "{ok} should pass");
        }
        for bad in [
            "plain",
            "@b.com",
            "a@.com",
            "a@b.",
            "a@b",
            "a b@c.com",
            "a@@b.com",
            "a@b@c.com",
            " a@b.com",
            "a@b.com ",
        ] {
            assert!(!is_valid_email(bad), "{bad} should fail");
        }
    }

    #[test]
    fn byte_order_mark_counts_as_whitespace() {
        let errors = validate(&form("a\u{FEFF}b@c.com", "\u{FEFF}", " \u{FEFF} "));
        assert_eq!(
            errors,
            [
                (Field::Email, FieldError::InvalidFormat),
                (Field::BusinessName, FieldError::Required),
                (Field::ReferralCode, FieldError::Required),
            ]
            .into_iter()
            .collect::<ValidationErrors>()
        );
        assert_eq!(
            validate(&form("\u{FEFF}", "Acme", "X1")).get(Field::Email),
            Some(FieldError::Required)
        );
        assert!(!is_valid_email("a@b.com\u{FEFF}"));
    }

    #[test]
    fn padded_email_fails_shape_not_required() {
        let errors = validate(&form(" a@b.com ", "Acme", "X1"));
        assert_eq!(errors.get(Field::Email), Some(FieldError::InvalidFormat));
    }

    #[test]
    fn clearing_one_field_keeps_the_others() {
        let mut errors = validate(&form("", "", ""));
        errors.clear(Field::BusinessName);
        assert_eq!(errors.get(Field::BusinessName), None);
        assert_eq!(errors.get(Field::Email), Some(FieldError::Required));
        assert_eq!(errors.get(Field::ReferralCode), Some(FieldError::Required));
    }

    #[test]
    fn messages_are_field_specific() {
        assert_eq!(FieldError::Required.message(Field::Email), "Email address is required");
        assert_eq!(
            FieldError::InvalidFormat.message(Field::Email),
            "Please enter a valid email address"
        );
        assert_eq!(FieldError::Required.message(Field::ReferralCode), "Referral code is required");
    }
}
