//! Login flow controller.
//!
//! Holds the login form state and drives it through
//! `Idle -> Submitting -> Succeeded | Failed`. The network call itself lives in
//! the frontend; this type decides whether a call may be made, what it carries
//! and how its outcome is presented.

use crate::shared::api_error::ApiError;
use crate::shared::i18n::MessageKey;
use crate::system::auth::LoginRequest;
use crate::system::credentials::{
    normalize_identifier, validate_identifier, validate_password, CredentialError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

/// Form-level message rendered in the `role="alert"` area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub key: MessageKey,
}

impl Banner {
    fn error(key: MessageKey) -> Self {
        Self {
            kind: BannerKind::Error,
            key,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub remember: bool,
    pub show_password: bool,
    pub username_error: Option<CredentialError>,
    pub password_error: Option<CredentialError>,
    pub banner: Option<Banner>,
    pub phase: LoginPhase,
}

impl LoginForm {
    /// New form, prefilled with the remembered identifier if there is one.
    pub fn new(remembered_user: Option<String>) -> Self {
        let remember = remembered_user.is_some();
        Self {
            username: remembered_user.unwrap_or_default(),
            remember,
            ..Self::default()
        }
    }

    pub fn set_username(&mut self, value: String) {
        self.username_error = validate_identifier(&value).err();
        self.username = value;
    }

    pub fn set_password(&mut self, value: String) {
        self.password_error = validate_password(&value).err();
        self.password = value;
    }

    pub fn blur_username(&mut self) {
        self.username_error = validate_identifier(&self.username).err();
    }

    pub fn blur_password(&mut self) {
        self.password_error = validate_password(&self.password).err();
    }

    pub fn set_remember(&mut self, remember: bool) {
        self.remember = remember;
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == LoginPhase::Submitting
    }

    /// Submit control is enabled only for a currently valid form with no call in flight.
    pub fn can_submit(&self) -> bool {
        !self.is_submitting()
            && validate_identifier(&self.username).is_ok()
            && validate_password(&self.password).is_ok()
    }

    /// Start a submission.
    ///
    /// Returns the request to send, or `None` when no network call must be
    /// made: a call is already in flight, a field is invalid, or the browser
    /// is offline. Each `Some` corresponds to exactly one request.
    pub fn begin_submit(&mut self, online: bool) -> Option<LoginRequest> {
        if self.is_submitting() {
            return None;
        }

        self.username_error = validate_identifier(&self.username).err();
        self.password_error = validate_password(&self.password).err();
        if self.username_error.is_some() || self.password_error.is_some() {
            self.phase = LoginPhase::Idle;
            self.banner = Some(Banner::error(MessageKey::FixErrors));
            return None;
        }

        if !online {
            self.phase = LoginPhase::Failed;
            self.banner = Some(Banner::error(ApiError::Offline.message_key()));
            return None;
        }

        self.phase = LoginPhase::Submitting;
        self.banner = None;
        Some(LoginRequest {
            user_name: normalize_identifier(&self.username),
            password: self.password.clone(),
        })
    }

    /// Apply the outcome of the in-flight call.
    ///
    /// Returns the identifier to persist as "remembered": the raw typed value,
    /// only on success with the remember flag set.
    pub fn complete(&mut self, outcome: Result<(), ApiError>) -> Option<String> {
        if !self.is_submitting() {
            return None;
        }
        match outcome {
            Ok(()) => {
                self.phase = LoginPhase::Succeeded;
                self.banner = Some(Banner {
                    kind: BannerKind::Success,
                    key: MessageKey::LoginSuccess,
                });
                self.remember.then(|| self.username.clone())
            }
            Err(error) => {
                self.phase = LoginPhase::Failed;
                self.banner = Some(Banner::error(error.message_key()));
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(username: &str, password: &str) -> LoginForm {
        let mut form = LoginForm::new(None);
        form.set_username(username.to_string());
        form.set_password(password.to_string());
        form
    }

    #[test]
    fn test_valid_form_enables_submit() {
        let form = filled("user123", "password123");
        assert_eq!(form.username_error, None);
        assert_eq!(form.password_error, None);
        assert!(form.can_submit());
    }

    #[test]
    fn test_empty_form_disables_submit() {
        assert!(!LoginForm::new(None).can_submit());
        let form = filled("NCab", "password123");
        assert_eq!(form.username_error, Some(CredentialError::PrefixedIdentifierTooShort));
        assert!(!form.can_submit());
    }

    #[test]
    fn test_blur_validates_untouched_field() {
        let mut form = LoginForm::new(None);
        form.blur_username();
        form.blur_password();
        assert_eq!(form.username_error, Some(CredentialError::IdentifierRequired));
        assert_eq!(form.password_error, Some(CredentialError::PasswordRequired));
    }

    #[test]
    fn test_invalid_submit_does_not_call_network() {
        let mut form = LoginForm::new(None);
        form.username = "ab".into();
        form.password = "123".into();
        assert_eq!(form.begin_submit(true), None);
        assert_eq!(form.phase, LoginPhase::Idle);
        assert_eq!(form.banner, Some(Banner::error(MessageKey::FixErrors)));
        assert_eq!(form.username_error, Some(CredentialError::IdentifierTooShort));
        assert_eq!(form.password_error, Some(CredentialError::PasswordTooShort));
    }

    #[test]
    fn test_offline_short_circuits() {
        let mut form = filled("NC23550", "123Ninja@");
        assert_eq!(form.begin_submit(false), None);
        assert_eq!(form.phase, LoginPhase::Failed);
        assert_eq!(form.banner, Some(Banner::error(MessageKey::Offline)));
    }

    #[test]
    fn test_request_carries_normalized_identifier() {
        let mut form = filled("user123", "password123");
        let request = form.begin_submit(true).expect("request");
        assert_eq!(request.user_name, "NCuser123");
        assert_eq!(request.password, "password123");
        assert!(form.is_submitting());
        assert!(!form.can_submit());
    }

    #[test]
    fn test_one_request_while_in_flight() {
        let mut form = filled("NC23550", "123Ninja@");
        assert!(form.begin_submit(true).is_some());
        assert_eq!(form.begin_submit(true), None);
        assert_eq!(form.begin_submit(true), None);
    }

    #[test]
    fn test_success_remembers_raw_identifier() {
        let mut form = filled("user123", "password123");
        form.set_remember(true);
        form.begin_submit(true);
        assert_eq!(form.complete(Ok(())).as_deref(), Some("user123"));
        assert_eq!(form.phase, LoginPhase::Succeeded);
        assert_eq!(
            form.banner,
            Some(Banner {
                kind: BannerKind::Success,
                key: MessageKey::LoginSuccess
            })
        );
    }

    #[test]
    fn test_success_without_remember_flag() {
        let mut form = filled("user123", "password123");
        form.begin_submit(true);
        assert_eq!(form.complete(Ok(())), None);
    }

    #[test]
    fn test_failure_messages() {
        let cases = [
            (
                ApiError::HttpStatus {
                    status: 401,
                    message: "Unauthorized".into(),
                },
                MessageKey::InvalidCredentials,
            ),
            (
                ApiError::HttpStatus {
                    status: 500,
                    message: "Internal Server Error".into(),
                },
                MessageKey::ServerError,
            ),
            (ApiError::Transport("failed".into()), MessageKey::NetworkError),
        ];
        for (error, key) in cases {
            let mut form = filled("NC23550", "123Ninja@");
            form.set_remember(true);
            form.begin_submit(true);
            assert_eq!(form.complete(Err(error)), None);
            assert_eq!(form.phase, LoginPhase::Failed);
            assert_eq!(form.banner, Some(Banner::error(key)));
        }
    }

    #[test]
    fn test_retry_after_error() {
        let mut form = filled("wronguser", "wrongpassword");
        form.begin_submit(true);
        form.complete(Err(ApiError::from_response(401, "")));
        assert!(form.can_submit());

        form.set_username("NC23550".into());
        form.set_password("123Ninja@".into());
        assert!(form.begin_submit(true).is_some());
        form.complete(Ok(()));
        assert_eq!(form.phase, LoginPhase::Succeeded);
    }

    #[test]
    fn test_stray_completion_is_ignored() {
        let mut form = filled("user123", "password123");
        assert_eq!(form.complete(Ok(())), None);
        assert_eq!(form.phase, LoginPhase::Idle);
    }

    #[test]
    fn test_prefill_from_remembered_user() {
        let form = LoginForm::new(Some("NC23550".into()));
        assert_eq!(form.username, "NC23550");
        assert!(form.remember);
        assert_eq!(form.username_error, None);
    }
}
