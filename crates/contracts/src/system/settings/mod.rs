use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontSize {
    Small,
    #[default]
    Normal,
    Large,
    XLarge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartStyle {
    #[default]
    Default,
    Modern,
    Minimal,
    Classic,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplaySettings {
    pub theme: Theme,
    /// "#RRGGBB"
    pub primary_color: String,
    pub font_size: FontSize,
    pub chart_style: ChartStyle,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            primary_color: "#1E88E5".to_string(),
            font_size: FontSize::Normal,
            chart_style: ChartStyle::Default,
        }
    }
}

// ---------------------------------------------------------------------------
// Notifications
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationEvent {
    DailyReport,
    WeeklySummary,
    MonthlyReport,
    AnomalyDetection,
    GoalReached,
    SystemWarning,
}

/// Weekly summaries go out on working days only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkDay {
    #[default]
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationSettings {
    pub email_enabled: bool,
    #[serde(default)]
    pub email: Option<String>,
    pub mobile_enabled: bool,
    pub slack_enabled: bool,
    #[serde(default)]
    pub slack_channel: Option<String>,
    pub events: Vec<NotificationEvent>,
    pub daily_report_time: NaiveTime,
    pub weekly_summary_day: WorkDay,
    pub monthly_report_day: u32,
    /// In standard deviations
    pub anomaly_threshold: f64,
    /// Percent of target
    pub goal_percentage: u32,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            email_enabled: true,
            email: None,
            mobile_enabled: true,
            slack_enabled: false,
            slack_channel: None,
            events: vec![
                NotificationEvent::DailyReport,
                NotificationEvent::AnomalyDetection,
            ],
            daily_report_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default(),
            weekly_summary_day: WorkDay::Monday,
            monthly_report_day: 1,
            anomaly_threshold: 3.0,
            goal_percentage: 90,
        }
    }
}

// ---------------------------------------------------------------------------
// Account
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountRole {
    Admin,
    Analyst,
    User,
    Guest,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountSettings {
    pub name: String,
    pub email: String,
    pub department: String,
    pub role: AccountRole,
}

impl AccountSettings {
    pub fn default_for(is_admin: bool) -> Self {
        Self {
            name: "사용자 이름".to_string(),
            email: "user@example.com".to_string(),
            department: "데이터 분석팀".to_string(),
            role: if is_admin {
                AccountRole::Admin
            } else {
                AccountRole::User
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordChangeRequest {
    #[serde(default)]
    pub current_password: String,
    #[serde(default)]
    pub new_password: String,
    #[serde(default)]
    pub confirm_password: String,
}

// ---------------------------------------------------------------------------
// Advanced (admin only)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefreshInterval {
    Off,
    Minutes5,
    Minutes15,
    Minutes30,
    #[default]
    Hours1,
    Hours3,
    Hours6,
    Hours12,
    Hours24,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackupFrequency {
    Off,
    Daily,
    #[default]
    Weekly,
    Monthly,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvancedSettings {
    pub refresh_interval: RefreshInterval,
    pub data_retention_days: u32,
    pub max_users: u32,
    pub session_timeout_minutes: u32,
    pub backup_frequency: BackupFrequency,
    pub backup_retention_days: u32,
    pub require_2fa: bool,
    /// 0 = never expires
    pub password_expiry_days: u32,
    pub min_password_length: u32,
    pub api_enabled: bool,
    pub rate_limit_per_minute: u32,
    pub api_key_expiry_days: u32,
}

impl Default for AdvancedSettings {
    fn default() -> Self {
        Self {
            refresh_interval: RefreshInterval::Hours1,
            data_retention_days: 90,
            max_users: 10,
            session_timeout_minutes: 60,
            backup_frequency: BackupFrequency::Weekly,
            backup_retention_days: 30,
            require_2fa: false,
            password_expiry_days: 90,
            min_password_length: 8,
            api_enabled: true,
            rate_limit_per_minute: 100,
            api_key_expiry_days: 30,
        }
    }
}

// ---------------------------------------------------------------------------
// Aggregate view
// ---------------------------------------------------------------------------

/// Settings held by one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSettings {
    pub display: DisplaySettings,
    pub notifications: NotificationSettings,
    pub account: AccountSettings,
    /// Present for admins only
    pub advanced: Option<AdvancedSettings>,
}

impl UserSettings {
    pub fn default_for(is_admin: bool) -> Self {
        Self {
            display: DisplaySettings::default(),
            notifications: NotificationSettings::default(),
            account: AccountSettings::default_for(is_admin),
            advanced: is_admin.then(AdvancedSettings::default),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveSettingsResponse {
    pub success: bool,
    pub message: String,
}
