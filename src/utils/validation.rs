use crate::error::{AppError, AppResult};
use regex::Regex;

/// 校验业务代码格式 (字母/数字/下划线/中划线)
pub fn validate_code(field: &str, code: &str) -> AppResult<()> {
    let code_regex = Regex::new(r"^[A-Za-z0-9_-]+$").unwrap();

    if !code_regex.is_match(code) {
        return Err(AppError::ValidationError(format!(
            "{field} format is invalid, only letters, digits, '_' and '-' are allowed"
        )));
    }

    Ok(())
}
