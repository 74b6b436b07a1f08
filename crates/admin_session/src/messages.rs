//! User-facing strings. The console is Vietnamese-only.

/// Verification rejected by the server without an `errorMessage`.
pub const VERIFY_REJECTED: &str = "Xác minh thất bại.";
/// Server accepted the code but the token does not carry the Admin role.
pub const ADMIN_ONLY: &str = "Chỉ tài khoản Admin mới có quyền truy cập.";
/// Transport failure while verifying.
pub const VERIFY_FAILED: &str = "Lỗi khi xác minh mã OTP.";
/// Transport failure while resending.
pub const RESEND_FAILED: &str = "Không thể gửi lại mã OTP.";
/// Anything that is neither a server answer nor a transport failure.
pub const UNKNOWN_ERROR: &str = "Lỗi không xác định.";
/// Primary login rejected without a server message.
pub const LOGIN_FAILED: &str = "Đăng nhập thất bại.";
/// Login form submitted with an empty field.
pub const LOGIN_FIELDS_REQUIRED: &str = "Vui lòng nhập email và mật khẩu.";
/// Code does not match the 6-digit pattern.
pub const CODE_FORMAT: &str = "Mã xác minh phải gồm 6 chữ số.";
/// Server accepted the code but the issued token is already expired.
pub const TOKEN_EXPIRED: &str = "Phiên đăng nhập đã hết hạn, vui lòng thử lại.";
