use contracts::system::settings::{
    AccountSettings, AdvancedSettings, DisplaySettings, NotificationSettings,
    PasswordChangeRequest,
};
use std::fmt::Display;
use std::ops::RangeInclusive;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    #[error("{field} is required")]
    Missing { field: &'static str },

    #[error("{field} must be within {range}, got {value}")]
    OutOfRange {
        field: &'static str,
        range: String,
        value: String,
    },

    #[error("{field} has an invalid format: {value}")]
    InvalidFormat { field: &'static str, value: String },

    #[error("new password and confirmation do not match")]
    PasswordMismatch,
}

fn check_range<T>(field: &'static str, value: T, range: RangeInclusive<T>) -> Result<(), SettingsError>
where
    T: PartialOrd + Display,
{
    if range.contains(&value) {
        Ok(())
    } else {
        Err(SettingsError::OutOfRange {
            field,
            range: format!("{}..={}", range.start(), range.end()),
            value: value.to_string(),
        })
    }
}

fn require<'a>(field: &'static str, value: Option<&'a str>) -> Result<&'a str, SettingsError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(SettingsError::Missing { field }),
    }
}

fn check_email(field: &'static str, value: &str) -> Result<(), SettingsError> {
    if value.contains('@') {
        Ok(())
    } else {
        Err(SettingsError::InvalidFormat {
            field,
            value: value.to_string(),
        })
    }
}

fn is_hex_color(value: &str) -> bool {
    value
        .strip_prefix('#')
        .is_some_and(|hex| hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()))
}

pub fn validate_display(settings: &DisplaySettings) -> Result<(), SettingsError> {
    if !is_hex_color(&settings.primary_color) {
        return Err(SettingsError::InvalidFormat {
            field: "primary_color",
            value: settings.primary_color.clone(),
        });
    }
    Ok(())
}

pub fn validate_notifications(settings: &NotificationSettings) -> Result<(), SettingsError> {
    if settings.email_enabled {
        let email = require("email", settings.email.as_deref())?;
        check_email("email", email)?;
    }
    if settings.slack_enabled {
        require("slack_channel", settings.slack_channel.as_deref())?;
    }
    check_range("monthly_report_day", settings.monthly_report_day, 1..=28)?;
    check_range("anomaly_threshold", settings.anomaly_threshold, 1.0..=5.0)?;
    check_range("goal_percentage", settings.goal_percentage, 50..=100)?;
    Ok(())
}

pub fn validate_account(settings: &AccountSettings) -> Result<(), SettingsError> {
    require("name", Some(settings.name.as_str()))?;
    let email = require("email", Some(settings.email.as_str()))?;
    check_email("email", email)?;
    require("department", Some(settings.department.as_str()))?;
    Ok(())
}

pub fn validate_password_change(request: &PasswordChangeRequest) -> Result<(), SettingsError> {
    require("current_password", Some(request.current_password.as_str()))?;
    require("new_password", Some(request.new_password.as_str()))?;
    require("confirm_password", Some(request.confirm_password.as_str()))?;
    if request.new_password != request.confirm_password {
        return Err(SettingsError::PasswordMismatch);
    }
    Ok(())
}

pub fn validate_advanced(settings: &AdvancedSettings) -> Result<(), SettingsError> {
    check_range("data_retention_days", settings.data_retention_days, 30..=365)?;
    check_range("max_users", settings.max_users, 1..=100)?;
    check_range("session_timeout_minutes", settings.session_timeout_minutes, 5..=240)?;
    check_range("backup_retention_days", settings.backup_retention_days, 7..=365)?;
    check_range("password_expiry_days", settings.password_expiry_days, 0..=180)?;
    check_range("min_password_length", settings.min_password_length, 6..=24)?;
    check_range("rate_limit_per_minute", settings.rate_limit_per_minute, 10..=1000)?;
    check_range("api_key_expiry_days", settings.api_key_expiry_days, 1..=365)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_color() {
        let mut settings = DisplaySettings::default();
        assert!(validate_display(&settings).is_ok());

        settings.primary_color = "#12345G".to_string();
        assert!(matches!(
            validate_display(&settings),
            Err(SettingsError::InvalidFormat { field: "primary_color", .. })
        ));

        settings.primary_color = "1E88E5".to_string();
        assert!(validate_display(&settings).is_err());
    }

    #[test]
    fn test_notifications_require_enabled_channels() {
        let mut settings = NotificationSettings::default();
        assert_eq!(
            validate_notifications(&settings),
            Err(SettingsError::Missing { field: "email" })
        );

        settings.email = Some("analyst@example.com".to_string());
        assert!(validate_notifications(&settings).is_ok());

        settings.slack_enabled = true;
        settings.slack_channel = Some("  ".to_string());
        assert_eq!(
            validate_notifications(&settings),
            Err(SettingsError::Missing { field: "slack_channel" })
        );
    }

    #[test]
    fn test_notification_ranges() {
        let mut settings = NotificationSettings {
            email_enabled: false,
            ..Default::default()
        };
        settings.monthly_report_day = 29;
        let err = validate_notifications(&settings).unwrap_err();
        assert_eq!(
            err.to_string(),
            "monthly_report_day must be within 1..=28, got 29"
        );

        settings.monthly_report_day = 28;
        settings.anomaly_threshold = 5.5;
        assert!(validate_notifications(&settings).is_err());
    }

    #[test]
    fn test_password_change() {
        let mut request = PasswordChangeRequest {
            current_password: "old".to_string(),
            new_password: "new-secret".to_string(),
            confirm_password: "new-secret".to_string(),
        };
        assert!(validate_password_change(&request).is_ok());

        request.confirm_password = "other".to_string();
        assert_eq!(
            validate_password_change(&request),
            Err(SettingsError::PasswordMismatch)
        );

        request.current_password.clear();
        assert_eq!(
            validate_password_change(&request),
            Err(SettingsError::Missing { field: "current_password" })
        );
    }

    #[test]
    fn test_advanced_defaults_and_bounds() {
        let mut settings = AdvancedSettings::default();
        assert!(validate_advanced(&settings).is_ok());

        settings.password_expiry_days = 0;
        assert!(validate_advanced(&settings).is_ok());

        settings.rate_limit_per_minute = 5;
        assert!(matches!(
            validate_advanced(&settings),
            Err(SettingsError::OutOfRange { field: "rate_limit_per_minute", .. })
        ));
    }

    #[test]
    fn test_account() {
        let mut account = AccountSettings::default_for(false);
        assert!(validate_account(&account).is_ok());
        account.email = "no-at-sign".to_string();
        assert!(validate_account(&account).is_err());
    }
}
