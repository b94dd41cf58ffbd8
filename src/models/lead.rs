use serde::{Deserialize, Serialize};

/// In-progress lead record, as the form holds it and as it goes over the wire
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LeadDraft {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub income_range: String,
    pub message: String,
    pub consent: bool,
}

impl LeadDraft {
    pub fn apply(&mut self, edit: FieldEdit) {
        match edit {
            FieldEdit::FullName(v) => self.full_name = v,
            FieldEdit::Email(v) => self.email = v,
            FieldEdit::Phone(v) => self.phone = v,
            FieldEdit::IncomeRange(v) => self.income_range = v,
            FieldEdit::Message(v) => self.message = v,
            FieldEdit::Consent(v) => self.consent = v,
        }
    }

    /// Selected income bracket, `None` when left empty or unrecognised
    pub fn income_bracket(&self) -> Option<IncomeRange> {
        IncomeRange::from_value(&self.income_range)
    }
}

/// A new value for exactly one draft field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    FullName(String),
    Email(String),
    Phone(String),
    IncomeRange(String),
    Message(String),
    Consent(bool),
}

/// Annual income brackets offered by the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncomeRange {
    Under25k,
    From25kTo50k,
    From50kTo100k,
    Over100k,
}

impl IncomeRange {
    /// Value stored in the draft and sent to the backend
    pub fn value(&self) -> &'static str {
        match self {
            IncomeRange::Under25k => "< $25k",
            IncomeRange::From25kTo50k => "$25k - $50k",
            IncomeRange::From50kTo100k => "$50k - $100k",
            IncomeRange::Over100k => "> $100k",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            IncomeRange::Under25k => "Less than $25k",
            IncomeRange::From25kTo50k => "$25k - $50k",
            IncomeRange::From50kTo100k => "$50k - $100k",
            IncomeRange::Over100k => "More than $100k",
        }
    }

    pub fn from_value(s: &str) -> Option<Self> {
        Self::all().into_iter().find(|r| r.value() == s)
    }

    pub fn all() -> Vec<IncomeRange> {
        vec![
            IncomeRange::Under25k,
            IncomeRange::From25kTo50k,
            IncomeRange::From50kTo100k,
            IncomeRange::Over100k,
        ]
    }
}

/// First rule a draft fails, in checking order
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter your full name.")]
    FullName,
    #[error("Please enter a valid email.")]
    Email,
    #[error("Please enter a valid phone number.")]
    Phone,
    #[error("Please accept the consent to proceed.")]
    Consent,
}

const MIN_NAME_CHARS: usize = 2;
const MIN_PHONE_DIGITS: usize = 7;

/// Checks name, email, phone and consent in that order and reports the first failure.
pub fn validate(draft: &LeadDraft) -> Result<(), ValidationError> {
    if draft.full_name.trim().chars().count() < MIN_NAME_CHARS {
        return Err(ValidationError::FullName);
    }
    if !is_email_shaped(&draft.email) {
        return Err(ValidationError::Email);
    }
    if phone_digits(&draft.phone) < MIN_PHONE_DIGITS {
        return Err(ValidationError::Phone);
    }
    if !draft.consent {
        return Err(ValidationError::Consent);
    }
    Ok(())
}

// local@domain.tld: one '@', no whitespace, and a dot in the domain with
// something on both sides of it.
fn is_email_shaped(email: &str) -> bool {
    if email.chars().any(is_js_space) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

// `\s` as JavaScript regexes define it: Unicode White_Space minus U+0085, plus U+FEFF
fn is_js_space(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

fn phone_digits(phone: &str) -> usize {
    phone.chars().filter(char::is_ascii_digit).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> LeadDraft {
        LeadDraft {
            full_name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            phone: "555-123-4567".into(),
            income_range: String::new(),
            message: String::new(),
            consent: true,
        }
    }

    #[test]
    fn valid_draft_passes() {
        assert_eq!(validate(&valid_draft()), Ok(()));
    }

    #[test]
    fn blank_draft_reports_name_first() {
        assert_eq!(validate(&LeadDraft::default()), Err(ValidationError::FullName));
        assert_eq!(
            ValidationError::FullName.to_string(),
            "Please enter your full name."
        );
    }

    #[test]
    fn short_name_wins_over_every_other_failure() {
        for name in ["", "J", "  J  ", "   "] {
            let draft = LeadDraft {
                full_name: name.into(),
                email: "nope".into(),
                phone: "1".into(),
                consent: false,
                ..LeadDraft::default()
            };
            assert_eq!(validate(&draft), Err(ValidationError::FullName), "name {name:?}");
        }
    }

    #[test]
    fn two_character_name_is_enough() {
        let draft = LeadDraft {
            full_name: "Al".into(),
            ..valid_draft()
        };
        assert_eq!(validate(&draft), Ok(()));
    }

    #[test]
    fn bad_emails_rejected() {
        for email in [
            "",
            "jane",
            "jane@",
            "@example.com",
            "jane@example",
            "jane@example.",
            "jane@.com",
            "jane doe@example.com",
            "jane@exa mple.com",
            "jane@@example.com",
            "jane@example@com.org",
            "jane@example.com\u{FEFF}",
            "\u{FEFF}jane@example.com",
            "jane@exa\u{3000}mple.com",
        ] {
            let draft = LeadDraft {
                email: email.into(),
                phone: String::new(),
                consent: false,
                ..valid_draft()
            };
            assert_eq!(validate(&draft), Err(ValidationError::Email), "email {email:?}");
        }
    }

    #[test]
    fn unusual_but_matching_emails_accepted() {
        for email in [
            "a@b.c",
            "jane.doe+card@mail.example.co.uk",
            "x@.b.c",
            "jane@example.com\u{85}",
        ] {
            let draft = LeadDraft {
                email: email.into(),
                ..valid_draft()
            };
            assert_eq!(validate(&draft), Ok(()), "email {email:?}");
        }
    }

    #[test]
    fn phone_needs_seven_digits() {
        for phone in ["", "555-12", "(55) 512-", "abcdefghij"] {
            let draft = LeadDraft {
                phone: phone.into(),
                consent: false,
                ..valid_draft()
            };
            assert_eq!(validate(&draft), Err(ValidationError::Phone), "phone {phone:?}");
        }

        let draft = LeadDraft {
            phone: "+1 (555) 123".into(),
            ..valid_draft()
        };
        assert_eq!(validate(&draft), Ok(()));
    }

    #[test]
    fn consent_checked_last() {
        let draft = LeadDraft {
            consent: false,
            ..valid_draft()
        };
        assert_eq!(validate(&draft), Err(ValidationError::Consent));
    }

    #[test]
    fn optional_fields_do_not_affect_validation() {
        let draft = LeadDraft {
            income_range: "not a bracket".into(),
            message: "x".repeat(5000),
            ..valid_draft()
        };
        assert_eq!(validate(&draft), Ok(()));
    }

    #[test]
    fn apply_touches_only_the_named_field() {
        let mut draft = valid_draft();
        draft.apply(FieldEdit::Message("Call after 5pm".into()));
        assert_eq!(
            draft,
            LeadDraft {
                message: "Call after 5pm".into(),
                ..valid_draft()
            }
        );
    }

    #[test]
    fn apply_is_idempotent() {
        let mut once = LeadDraft::default();
        once.apply(FieldEdit::Phone("555 0100".into()));

        let mut twice = LeadDraft::default();
        twice.apply(FieldEdit::Phone("555 0100".into()));
        twice.apply(FieldEdit::Phone("555 0100".into()));

        assert_eq!(once, twice);
    }

    #[test]
    fn income_brackets_round_trip_through_values() {
        for range in IncomeRange::all() {
            assert_eq!(IncomeRange::from_value(range.value()), Some(range));
        }
        assert_eq!(IncomeRange::from_value(""), None);

        let draft = LeadDraft {
            income_range: "$50k - $100k".into(),
            ..LeadDraft::default()
        };
        assert_eq!(draft.income_bracket(), Some(IncomeRange::From50kTo100k));
    }

    #[test]
    fn draft_serializes_six_fields() {
        let json = serde_json::to_value(valid_draft()).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 6);
        assert_eq!(obj["full_name"], "Jane Doe");
        assert_eq!(obj["consent"], true);
        assert_eq!(obj["income_range"], "");
    }
}
