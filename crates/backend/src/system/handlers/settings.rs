use axum::{extract::State, Json};
use contracts::system::settings::{
    AccountSettings, AdvancedSettings, DisplaySettings, NotificationSettings,
    PasswordChangeRequest, SaveSettingsResponse, UserSettings,
};

use crate::api::error::{ApiJson, AppError};
use crate::shared::state::AppState;
use crate::system::auth::extractor::CurrentSession;
use crate::system::sessions::Session;
use crate::system::settings::validation;

fn saved(message: &str) -> Json<SaveSettingsResponse> {
    Json(SaveSettingsResponse {
        success: true,
        message: message.to_string(),
    })
}

fn store<F>(state: &AppState, session: &Session, update: F) -> Result<(), AppError>
where
    F: FnOnce(&mut UserSettings),
{
    state
        .sessions
        .update_settings(&session.id, update)
        .map(|_| ())
        .ok_or(AppError::Unauthorized)
}

/// GET /api/system/settings
pub async fn get_settings(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
) -> Result<Json<UserSettings>, AppError> {
    let current = state
        .sessions
        .get(&session.id)
        .ok_or(AppError::Unauthorized)?;
    Ok(Json(current.settings))
}

/// PUT /api/system/settings/display
pub async fn save_display(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    ApiJson(settings): ApiJson<DisplaySettings>,
) -> Result<Json<SaveSettingsResponse>, AppError> {
    validation::validate_display(&settings)?;
    store(&state, &session, |s| s.display = settings)?;
    Ok(saved("표시 설정이 저장되었습니다."))
}

/// PUT /api/system/settings/notifications
pub async fn save_notifications(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    ApiJson(settings): ApiJson<NotificationSettings>,
) -> Result<Json<SaveSettingsResponse>, AppError> {
    validation::validate_notifications(&settings)?;
    store(&state, &session, |s| s.notifications = settings)?;
    Ok(saved("알림 설정이 저장되었습니다."))
}

/// PUT /api/system/settings/account
pub async fn save_account(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    ApiJson(settings): ApiJson<AccountSettings>,
) -> Result<Json<SaveSettingsResponse>, AppError> {
    if !session.is_admin() {
        return Err(AppError::Forbidden(
            "account settings can only be changed by an admin".to_string(),
        ));
    }
    validation::validate_account(&settings)?;
    store(&state, &session, |s| s.account = settings)?;
    Ok(saved("계정 정보가 업데이트되었습니다."))
}

/// POST /api/system/settings/password
///
/// Validates the form only; demo credentials never change.
pub async fn change_password(
    CurrentSession(session): CurrentSession,
    ApiJson(request): ApiJson<PasswordChangeRequest>,
) -> Result<Json<SaveSettingsResponse>, AppError> {
    validation::validate_password_change(&request)?;
    tracing::info!("Password change accepted for '{}' (demo, not applied)", session.username);
    Ok(saved("비밀번호가 변경되었습니다."))
}

/// PUT /api/system/settings/advanced (admin only)
pub async fn save_advanced(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    ApiJson(settings): ApiJson<AdvancedSettings>,
) -> Result<Json<SaveSettingsResponse>, AppError> {
    validation::validate_advanced(&settings)?;
    store(&state, &session, |s| s.advanced = Some(settings))?;
    Ok(saved("고급 설정이 저장되었습니다."))
}
