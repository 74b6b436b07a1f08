//! End-to-end verification flow against a scripted API.

use admin_session::{
    AppError, AttemptState, AuthApi, MemoryStorage, SessionRecord, VerificationAttempt,
    VerifyOutcome, claims::ROLE_CLAIM, load_session, login::login, messages, resend_code,
    save_session,
    types::{LoginRequest, LoginResponse, ResendCodeForm, VerifyCodeRequest, VerifyCodeResponse},
    verify_code,
};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use base64ct::{Base64UrlUnpadded, Encoding};
use serde_json::json;
use std::cell::RefCell;

const STORAGE_KEY: &str = "flawless_admin_session";
const NOW: i64 = 1_700_000_000;

fn jwt(role: &str) -> String {
    jwt_expiring(role, 4_102_444_800)
}

fn jwt_expiring(role: &str, exp: i64) -> String {
    let header = Base64UrlUnpadded::encode_string(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = json!({ ROLE_CLAIM: role, "exp": exp }).to_string();
    format!(
        "{header}.{}.c2lnbmF0dXJl",
        Base64UrlUnpadded::encode_string(payload.as_bytes())
    )
}

#[derive(Default)]
struct ScriptedApi {
    login_reply: RefCell<Option<Result<LoginResponse, AppError>>>,
    verify_reply: RefCell<Option<Result<VerifyCodeResponse, AppError>>>,
    resend_reply: RefCell<Option<Result<(), AppError>>>,
    verify_requests: RefCell<Vec<VerifyCodeRequest>>,
    resend_forms: RefCell<Vec<ResendCodeForm>>,
}

impl ScriptedApi {
    fn verifying(reply: Result<VerifyCodeResponse, AppError>) -> Self {
        let api = Self::default();
        *api.verify_reply.borrow_mut() = Some(reply);
        api
    }
}

#[async_trait(?Send)]
impl AuthApi for ScriptedApi {
    async fn login(&self, _request: &LoginRequest) -> Result<LoginResponse, AppError> {
        self.login_reply
            .borrow_mut()
            .take()
            .unwrap_or_else(|| Err(AppError::Network("no scripted login".to_string())))
    }

    async fn verify_two_factor_code(
        &self,
        request: &VerifyCodeRequest,
    ) -> Result<VerifyCodeResponse, AppError> {
        self.verify_requests.borrow_mut().push(request.clone());
        self.verify_reply
            .borrow_mut()
            .take()
            .unwrap_or_else(|| Err(AppError::Network("no scripted verify".to_string())))
    }

    async fn resend_code(&self, form: &ResendCodeForm) -> Result<(), AppError> {
        self.resend_forms.borrow_mut().push(form.clone());
        self.resend_reply.borrow_mut().take().unwrap_or(Ok(()))
    }
}

/// Mirrors what the page does: begin, verify, finish, and persist only on admission.
async fn submit(
    api: &ScriptedApi,
    storage: &MemoryStorage,
    attempt: &mut VerificationAttempt,
    email: &str,
    code: &str,
) -> Result<VerifyOutcome> {
    if !attempt.begin() {
        return Err(anyhow!("submission refused"));
    }
    let outcome = verify_code(api, email, code, NOW).await;
    attempt.finish(&outcome);
    if let VerifyOutcome::Admitted(record) = &outcome {
        save_session(storage, STORAGE_KEY, record)?;
    }
    Ok(outcome)
}

#[tokio::test]
async fn admin_token_admits_and_persists_session() -> Result<()> {
    let token = jwt("Admin");
    let api = ScriptedApi::verifying(Ok(VerifyCodeResponse {
        token: Some(token.clone()),
        refresh_token: Some("r1".to_string()),
        is_success: true,
        error_message: None,
    }));
    let storage = MemoryStorage::new();
    let mut attempt = VerificationAttempt::new();

    let outcome = submit(&api, &storage, &mut attempt, "a@b.com", "123456").await?;

    let expected = SessionRecord {
        email: "a@b.com".to_string(),
        token,
        refresh_token: "r1".to_string(),
    };
    assert_eq!(outcome, VerifyOutcome::Admitted(expected.clone()));
    assert_eq!(attempt.state(), AttemptState::Admitted);
    assert_eq!(load_session(&storage, STORAGE_KEY), expected);
    assert!(expected.is_authenticated(NOW));

    let sent = api.verify_requests.borrow();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].email, "a@b.com");
    assert_eq!(sent[0].two_factor_code, "123456");
    Ok(())
}

#[tokio::test]
async fn non_admin_role_is_denied_without_mutation() -> Result<()> {
    let api = ScriptedApi::verifying(Ok(VerifyCodeResponse {
        token: Some(jwt("User")),
        refresh_token: Some("r1".to_string()),
        is_success: true,
        error_message: None,
    }));
    let storage = MemoryStorage::new();
    let mut attempt = VerificationAttempt::new();

    let outcome = submit(&api, &storage, &mut attempt, "a@b.com", "123456").await?;

    assert_eq!(outcome, VerifyOutcome::Denied);
    assert_eq!(
        attempt.last_error(),
        Some("Chỉ tài khoản Admin mới có quyền truy cập.")
    );
    assert!(!attempt.is_pending());
    assert_eq!(load_session(&storage, STORAGE_KEY), SessionRecord::default());
    Ok(())
}

#[tokio::test]
async fn expired_admin_token_stays_on_page_with_message() -> Result<()> {
    let api = ScriptedApi::verifying(Ok(VerifyCodeResponse {
        token: Some(jwt_expiring("Admin", 1_000)),
        refresh_token: Some("r1".to_string()),
        is_success: true,
        error_message: None,
    }));
    let storage = MemoryStorage::new();
    let mut attempt = VerificationAttempt::new();

    let outcome = submit(&api, &storage, &mut attempt, "a@b.com", "123456").await?;

    assert_eq!(outcome.message(), Some(messages::TOKEN_EXPIRED));
    assert_eq!(attempt.state(), AttemptState::Idle);
    assert_eq!(attempt.last_error(), Some(messages::TOKEN_EXPIRED));
    assert_eq!(load_session(&storage, STORAGE_KEY), SessionRecord::default());
    Ok(())
}

#[tokio::test]
async fn server_rejection_shows_server_message() -> Result<()> {
    let api = ScriptedApi::verifying(Ok(VerifyCodeResponse {
        is_success: false,
        error_message: Some("Mã không đúng".to_string()),
        ..VerifyCodeResponse::default()
    }));
    let storage = MemoryStorage::new();
    let mut attempt = VerificationAttempt::new();

    let outcome = submit(&api, &storage, &mut attempt, "a@b.com", "000000").await?;

    assert_eq!(outcome.message(), Some("Mã không đúng"));
    assert_eq!(attempt.state(), AttemptState::Idle);
    assert_eq!(load_session(&storage, STORAGE_KEY), SessionRecord::default());
    Ok(())
}

#[tokio::test]
async fn server_rejection_without_message_uses_default() -> Result<()> {
    let api = ScriptedApi::verifying(Ok(VerifyCodeResponse::default()));
    let outcome = verify_code(&api, "a@b.com", "000000", NOW).await;
    assert_eq!(outcome.message(), Some(messages::VERIFY_REJECTED));
    Ok(())
}

#[tokio::test]
async fn transport_failure_shows_generic_message() -> Result<()> {
    let api = ScriptedApi::verifying(Err(AppError::Network("connection reset".to_string())));
    let storage = MemoryStorage::new();
    let mut attempt = VerificationAttempt::new();

    let outcome = submit(&api, &storage, &mut attempt, "a@b.com", "123456").await?;

    assert_eq!(outcome.message(), Some("Lỗi khi xác minh mã OTP."));
    assert_eq!(load_session(&storage, STORAGE_KEY), SessionRecord::default());

    // The page stays usable after a failure.
    assert!(attempt.begin());
    Ok(())
}

#[tokio::test]
async fn error_response_with_server_message_is_surfaced() -> Result<()> {
    let api = ScriptedApi::verifying(Err(AppError::from_response(
        400,
        r#"{"errorMessage":"Mã đã hết hạn"}"#,
    )));
    let outcome = verify_code(&api, "a@b.com", "123456", NOW).await;
    assert_eq!(outcome, VerifyOutcome::Failed("Mã đã hết hạn".to_string()));
    Ok(())
}

/// Mirrors the page's resend handler: clear the inline error, then show the failure if any.
async fn resend(api: &ScriptedApi, attempt: &mut VerificationAttempt, email: &str) {
    attempt.clear_error();
    if let Some(message) = resend_code(api, email).await {
        attempt.set_error(message);
    }
}

#[tokio::test]
async fn resend_posts_email_and_reports_failures() -> Result<()> {
    let api = ScriptedApi::default();
    let mut attempt = VerificationAttempt::new();
    attempt.set_error(messages::ADMIN_ONLY);

    resend(&api, &mut attempt, "a@b.com").await;
    assert_eq!(attempt, VerificationAttempt::new());
    assert_eq!(attempt.state(), AttemptState::Idle);
    assert!(!attempt.is_pending());

    *api.resend_reply.borrow_mut() = Some(Err(AppError::Timeout("slow".to_string())));
    resend(&api, &mut attempt, "").await;
    assert_eq!(attempt.last_error(), Some("Không thể gửi lại mã OTP."));
    assert_eq!(attempt.state(), AttemptState::Idle);
    assert!(!attempt.is_pending());

    // Resending never submits a code, and verification can still start afterwards.
    assert!(api.verify_requests.borrow().is_empty());
    assert!(attempt.begin());

    let forms = api.resend_forms.borrow();
    assert_eq!(forms.len(), 2);
    assert_eq!(forms[0].fields(), [("Email", "a@b.com")]);
    assert_eq!(forms[1].email, "");
    Ok(())
}

#[tokio::test]
async fn login_records_email_for_the_code_step() -> Result<()> {
    let api = ScriptedApi::default();
    *api.login_reply.borrow_mut() = Some(Ok(LoginResponse {
        is_success: Some(true),
        error_message: None,
    }));

    let record = login(&api, "  a@b.com ", "secret").await.map_err(|e| anyhow!(e))?;
    assert_eq!(record, SessionRecord::pending("a@b.com"));
    assert!(!record.is_authenticated(0));

    *api.login_reply.borrow_mut() = Some(Ok(LoginResponse {
        is_success: Some(false),
        error_message: None,
    }));
    assert_eq!(
        login(&api, "a@b.com", "wrong").await,
        Err(messages::LOGIN_FAILED.to_string())
    );

    assert_eq!(
        login(&api, "a@b.com", "   ").await,
        Err(messages::LOGIN_FIELDS_REQUIRED.to_string())
    );
    Ok(())
}
