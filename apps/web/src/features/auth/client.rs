//! Browser implementation of the user-account API. Endpoint paths and payload
//! shapes come from `admin_session::types`; this file only moves bytes.

use crate::app_lib::{AppError, post_form, post_json};
use admin_session::{
    AuthApi,
    types::{
        LOGIN_PATH, LoginRequest, LoginResponse, RESEND_CODE_PATH, ResendCodeForm,
        VERIFY_TWO_FACTOR_PATH, VerifyCodeRequest, VerifyCodeResponse,
    },
};
use async_trait::async_trait;

/// Fetch-backed client for `/api/user-account/*`.
#[derive(Clone, Copy, Default)]
pub struct HttpAuthApi;

#[async_trait(?Send)]
impl AuthApi for HttpAuthApi {
    /// Must never log the password.
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, AppError> {
        post_json(LOGIN_PATH, request).await
    }

    /// Must never log the code or the returned tokens.
    async fn verify_two_factor_code(
        &self,
        request: &VerifyCodeRequest,
    ) -> Result<VerifyCodeResponse, AppError> {
        post_json(VERIFY_TWO_FACTOR_PATH, request).await
    }

    async fn resend_code(&self, form: &ResendCodeForm) -> Result<(), AppError> {
        post_form(RESEND_CODE_PATH, &form.fields()).await
    }
}
