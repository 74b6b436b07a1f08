use crate::{
    error::AppError,
    types::{LoginRequest, LoginResponse, ResendCodeForm, VerifyCodeRequest, VerifyCodeResponse},
};
use async_trait::async_trait;

/// Remote user-account API. The browser client implements it over fetch;
/// tests script it in memory. Futures are not `Send` because the console runs
/// on a single-threaded event loop.
#[async_trait(?Send)]
pub trait AuthApi {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, AppError>;

    async fn verify_two_factor_code(
        &self,
        request: &VerifyCodeRequest,
    ) -> Result<VerifyCodeResponse, AppError>;

    async fn resend_code(&self, form: &ResendCodeForm) -> Result<(), AppError>;
}
