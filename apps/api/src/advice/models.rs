//! Advice request types: the age bracket selector and the validated concern.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::errors::AppError;

/// Message shown when a submission has no concern text.
pub const EMPTY_CONCERN_MESSAGE: &str = "Please enter a concern to receive advice.";

/// The five age brackets offered by the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeGroup {
    Child,
    Teenager,
    YoungAdult,
    MiddleAged,
    Senior,
}

impl AgeGroup {
    /// Selector order.
    pub const ALL: [AgeGroup; 5] = [
        AgeGroup::Child,
        AgeGroup::Teenager,
        AgeGroup::YoungAdult,
        AgeGroup::MiddleAged,
        AgeGroup::Senior,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AgeGroup::Child => "Child",
            AgeGroup::Teenager => "Teenager",
            AgeGroup::YoungAdult => "Young Adult",
            AgeGroup::MiddleAged => "Middle-aged",
            AgeGroup::Senior => "Senior",
        }
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AgeGroup {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        AgeGroup::ALL
            .into_iter()
            .find(|g| g.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                AppError::Validation(format!(
                    "Unknown age group '{wanted}'. Expected one of: Child, Teenager, Young Adult, Middle-aged, Senior"
                ))
            })
    }
}

impl Serialize for AgeGroup {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Free-text concern, trimmed and guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Concern(String);

impl Concern {
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AppError::Validation(EMPTY_CONCERN_MESSAGE.to_string()));
        }
        Ok(Concern(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Concern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One user submission. Cannot be built with an empty concern.
#[derive(Debug, Clone)]
pub struct AdviceRequest {
    pub age_group: AgeGroup,
    pub concern: Concern,
}

impl AdviceRequest {
    /// Validates raw selector and text-box input.
    pub fn parse(age_group: &str, concern: &str) -> Result<Self, AppError> {
        // Concern first: an empty submission gets the warning regardless of the selector.
        let concern = Concern::parse(concern)?;
        let age_group = age_group.parse()?;
        Ok(Self { age_group, concern })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_group_labels_in_selector_order() {
        let labels: Vec<&str> = AgeGroup::ALL.iter().map(|g| g.label()).collect();
        assert_eq!(
            labels,
            vec!["Child", "Teenager", "Young Adult", "Middle-aged", "Senior"]
        );
    }

    #[test]
    fn test_age_group_parses_labels_case_insensitively() {
        assert_eq!("young adult".parse::<AgeGroup>().unwrap(), AgeGroup::YoungAdult);
        assert_eq!(" Middle-aged ".parse::<AgeGroup>().unwrap(), AgeGroup::MiddleAged);
    }

    #[test]
    fn test_age_group_rejects_unknown_label() {
        let err = "Toddler".parse::<AgeGroup>().unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m.contains("Toddler")));
    }

    #[test]
    fn test_age_group_serializes_as_label() {
        let json = serde_json::to_string(&AgeGroup::YoungAdult).unwrap();
        assert_eq!(json, r#""Young Adult""#);
    }

    #[test]
    fn test_concern_is_trimmed() {
        let concern = Concern::parse("  exam stress \n").unwrap();
        assert_eq!(concern.as_str(), "exam stress");
    }

    #[test]
    fn test_empty_concern_rejected() {
        let err = Concern::parse("").unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m == EMPTY_CONCERN_MESSAGE));
    }

    #[test]
    fn test_whitespace_only_concern_rejected() {
        assert!(Concern::parse(" \t\n ").is_err());
    }

    #[test]
    fn test_request_reports_empty_concern_before_bad_age_group() {
        let err = AdviceRequest::parse("Toddler", "   ").unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m == EMPTY_CONCERN_MESSAGE));
    }

    #[test]
    fn test_request_parse_ok() {
        let request = AdviceRequest::parse("Teenager", "exam stress").unwrap();
        assert_eq!(request.age_group, AgeGroup::Teenager);
        assert_eq!(request.concern.as_str(), "exam stress");
    }
}
