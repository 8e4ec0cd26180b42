use std::collections::HashMap;
use std::fmt;

use url::Url;

use super::Experience;

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Experience,
    GithubLink,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    NameTooShort,
    NameTooLong,
    EmailRequired,
    EmailInvalid,
    ExperienceRequired,
    LinkInvalid,
}

impl FieldError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::NameTooShort => "NAME_TOO_SHORT",
            Self::NameTooLong => "NAME_TOO_LONG",
            Self::EmailRequired => "EMAIL_REQUIRED",
            Self::EmailInvalid => "EMAIL_INVALID",
            Self::ExperienceRequired => "EXPERIENCE_REQUIRED",
            Self::LinkInvalid => "LINK_INVALID",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::NameTooShort => "The name must be at least 2 characters long.",
            Self::NameTooLong => "The name cannot exceed 50 characters.",
            Self::EmailRequired => "Please enter your email address.",
            Self::EmailInvalid => "Please enter a valid email address.",
            Self::ExperienceRequired => "Please select your years of experience.",
            Self::LinkInvalid => "Please enter a valid GitHub profile link.",
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// The field values a rule looks at.
pub struct FieldValues<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub experience: Option<Experience>,
    pub github_link: &'a str,
}

/// One rule per field, evaluated on every change. Whether a failure is
/// displayed is a separate concern, gated by the touched set.
pub const RULES: [(Field, fn(&FieldValues) -> Option<FieldError>); 4] = [
    (Field::Name, check_name),
    (Field::Email, check_email),
    (Field::Experience, check_experience),
    (Field::GithubLink, check_github_link),
];

pub fn evaluate(values: &FieldValues) -> HashMap<Field, FieldError> {
    RULES
        .iter()
        .filter_map(|(field, rule)| rule(values).map(|error| (*field, error)))
        .collect()
}

pub fn name(value: &str) -> Option<FieldError> {
    let chars = value.trim().chars().count();
    if chars < NAME_MIN_CHARS {
        Some(FieldError::NameTooShort)
    } else if chars > NAME_MAX_CHARS {
        Some(FieldError::NameTooLong)
    } else {
        None
    }
}

pub fn email(value: &str) -> Option<FieldError> {
    let value = value.trim();
    if value.is_empty() {
        Some(FieldError::EmailRequired)
    } else if email_address::EmailAddress::parse_with_options(
        value,
        email_address::Options::default().with_required_tld(),
    )
    .is_err()
    {
        Some(FieldError::EmailInvalid)
    } else {
        None
    }
}

pub fn experience(value: Option<Experience>) -> Option<FieldError> {
    if value.is_none() {
        Some(FieldError::ExperienceRequired)
    } else {
        None
    }
}

/// An empty link is valid, the field is optional. A non-empty one must be an
/// absolute http(s) URL on a github.com host pointing at a single
/// profile-name path segment.
pub fn github_link(value: &str) -> Option<FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    let url = match Url::parse(value) {
        Ok(url) => url,
        Err(_) => return Some(FieldError::LinkInvalid),
    };
    if !matches!(url.scheme(), "http" | "https") {
        return Some(FieldError::LinkInvalid);
    }
    match url.host_str() {
        Some(host) if host.contains("github.com") => {}
        _ => return Some(FieldError::LinkInvalid),
    }
    let segment = url.path().trim_start_matches('/').trim_end_matches('/');
    if segment.is_empty() || segment.contains('/') || !is_profile_name(segment) {
        return Some(FieldError::LinkInvalid);
    }
    None
}

// Alphanumeric with optional interior hyphens, no leading or trailing
// hyphen.
fn is_profile_name(segment: &str) -> bool {
    if segment.starts_with('-') || segment.ends_with('-') {
        return false;
    }
    segment
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-')
}

fn check_name(values: &FieldValues) -> Option<FieldError> {
    name(values.name)
}

fn check_email(values: &FieldValues) -> Option<FieldError> {
    email(values.email)
}

fn check_experience(values: &FieldValues) -> Option<FieldError> {
    experience(values.experience)
}

fn check_github_link(values: &FieldValues) -> Option<FieldError> {
    github_link(values.github_link)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_bounds() {
        assert_eq!(name("a"), Some(FieldError::NameTooShort));
        assert_eq!(name("  a  "), Some(FieldError::NameTooShort));
        assert_eq!(name(""), Some(FieldError::NameTooShort));
        assert_eq!(name("ab"), None);
        assert_eq!(name("Jane Doe"), None);
        assert_eq!(name(&"x".repeat(50)), None);
        assert_eq!(name(&"x".repeat(51)), Some(FieldError::NameTooLong));
    }

    #[test]
    fn email_rules() {
        assert_eq!(email(""), Some(FieldError::EmailRequired));
        assert_eq!(email("   "), Some(FieldError::EmailRequired));
        assert_eq!(email("not-an-address"), Some(FieldError::EmailInvalid));
        assert_eq!(email("jane@localhost"), Some(FieldError::EmailInvalid));
        assert_eq!(email("jane@example.com"), None);
        assert_eq!(email("example@company.com"), None);
    }

    #[test]
    fn experience_is_required() {
        assert_eq!(experience(None), Some(FieldError::ExperienceRequired));
        assert_eq!(experience(Some(Experience::FourToSeven)), None);
    }

    #[test]
    fn empty_link_is_valid() {
        assert_eq!(github_link(""), None);
        assert_eq!(github_link("   "), None);
    }

    #[test]
    fn link_must_be_an_absolute_url() {
        assert_eq!(github_link("not-a-url"), Some(FieldError::LinkInvalid));
        assert_eq!(github_link("github.com/alice"), Some(FieldError::LinkInvalid));
    }

    #[test]
    fn link_scheme_must_be_http_or_https() {
        assert_eq!(
            github_link("ftp://github.com/alice"),
            Some(FieldError::LinkInvalid)
        );
        assert_eq!(github_link("http://github.com/alice"), None);
        assert_eq!(github_link("https://github.com/alice"), None);
    }

    #[test]
    fn link_host_must_contain_github() {
        assert_eq!(
            github_link("https://example.com/alice"),
            Some(FieldError::LinkInvalid)
        );
        // Subdomains of github.com pass the host rule.
        assert_eq!(github_link("https://gist.github.com/alice"), None);
    }

    #[test]
    fn link_path_must_be_a_single_profile_segment() {
        assert_eq!(
            github_link("https://github.com/"),
            Some(FieldError::LinkInvalid)
        );
        assert_eq!(
            github_link("https://github.com/alice/repo"),
            Some(FieldError::LinkInvalid)
        );
        assert_eq!(github_link("https://github.com/alice/"), None);
        assert_eq!(github_link("https://github.com/al-ice"), None);
        assert_eq!(
            github_link("https://github.com/-alice"),
            Some(FieldError::LinkInvalid)
        );
        assert_eq!(
            github_link("https://github.com/alice-"),
            Some(FieldError::LinkInvalid)
        );
        assert_eq!(
            github_link("https://github.com/al ice"),
            Some(FieldError::LinkInvalid)
        );
    }

    #[test]
    fn evaluate_collects_one_error_per_failing_field() {
        let errors = evaluate(&FieldValues {
            name: "a",
            email: "",
            experience: None,
            github_link: "",
        });
        assert_eq!(errors.get(&Field::Name), Some(&FieldError::NameTooShort));
        assert_eq!(errors.get(&Field::Email), Some(&FieldError::EmailRequired));
        assert_eq!(
            errors.get(&Field::Experience),
            Some(&FieldError::ExperienceRequired)
        );
        assert_eq!(errors.get(&Field::GithubLink), None);
    }

    #[test]
    fn error_codes_are_stable() {
        assert_eq!(FieldError::NameTooShort.code(), "NAME_TOO_SHORT");
        assert_eq!(FieldError::NameTooLong.code(), "NAME_TOO_LONG");
        assert_eq!(FieldError::EmailRequired.code(), "EMAIL_REQUIRED");
        assert_eq!(FieldError::EmailInvalid.code(), "EMAIL_INVALID");
        assert_eq!(FieldError::ExperienceRequired.code(), "EXPERIENCE_REQUIRED");
        assert_eq!(FieldError::LinkInvalid.code(), "LINK_INVALID");
    }
}
