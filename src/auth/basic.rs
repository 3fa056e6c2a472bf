use base64::{Engine, engine::general_purpose::STANDARD};

use crate::error::{AppError, Result};

#[derive(Debug, PartialEq, Eq)]
pub struct BasicCredentials {
    pub username: String,
    pub password: String,
}

/// Parses an `Authorization: Basic <base64(user:pass)>` header value.
pub fn parse_basic_header(header: &str) -> Result<BasicCredentials> {
    let (scheme, encoded) = header
        .trim()
        .split_once(' ')
        .ok_or_else(|| AppError::Unauthorized("Formato de credenciales inválido".to_string()))?;

    if !scheme.eq_ignore_ascii_case("basic") {
        return Err(AppError::Unauthorized(
            "Se requiere autenticación HTTP Basic".to_string(),
        ));
    }

    let decoded = STANDARD
        .decode(encoded.trim())
        .map_err(|_| AppError::Unauthorized("Formato de credenciales inválido".to_string()))?;

    let decoded = String::from_utf8(decoded)
        .map_err(|_| AppError::Unauthorized("Formato de credenciales inválido".to_string()))?;

    let (username, password) = decoded
        .split_once(':')
        .ok_or_else(|| AppError::Unauthorized("Formato de credenciales inválido".to_string()))?;

    Ok(BasicCredentials {
        username: username.to_string(),
        password: password.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(raw: &str) -> String {
        format!("Basic {}", STANDARD.encode(raw))
    }

    #[test]
    fn parses_valid_header() {
        let creds = parse_basic_header(&encode("admin:admin123")).unwrap();
        assert_eq!(creds.username, "admin");
        assert_eq!(creds.password, "admin123");
    }

    #[test]
    fn scheme_is_case_insensitive() {
        let header = format!("basic {}", STANDARD.encode("user:user123"));
        assert_eq!(parse_basic_header(&header).unwrap().username, "user");
    }

    #[test]
    fn password_may_contain_colons() {
        let creds = parse_basic_header(&encode("user:a:b")).unwrap();
        assert_eq!(creds.password, "a:b");
    }

    #[test]
    fn rejects_bearer_scheme() {
        let result = parse_basic_header("Bearer abc.def.ghi");
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }

    #[test]
    fn rejects_bad_base64_and_missing_colon() {
        assert!(matches!(
            parse_basic_header("Basic !!!"),
            Err(AppError::Unauthorized(_))
        ));
        assert!(matches!(
            parse_basic_header(&encode("adminadmin123")),
            Err(AppError::Unauthorized(_))
        ));
        assert!(matches!(parse_basic_header("Basic"), Err(AppError::Unauthorized(_))));
    }
}
