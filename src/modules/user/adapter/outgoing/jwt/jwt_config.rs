use crate::config::{ConfigError, ConfigSource};

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub expire_minutes: i64,
}

impl JwtConfig {
    /// HS256 keys shorter than this are rejected.
    pub const MIN_SECRET_LEN: usize = 32;

    /// Ten years.
    pub const MAX_EXPIRE_MINUTES: i64 = 525_600 * 10;

    pub fn from_source(source: &impl ConfigSource) -> Result<Self, ConfigError> {
        let secret_key = source.required("JWT_SECRET_KEY")?;

        if secret_key.len() < Self::MIN_SECRET_LEN {
            return Err(ConfigError::Invalid {
                key: "JWT_SECRET_KEY",
                reason: format!(
                    "must be at least {} characters long for HS256",
                    Self::MIN_SECRET_LEN
                ),
            });
        }

        let expire_minutes = source.parse_or("JWT_EXPIRE_MINUTES", 60i64)?;
        if !(1..=Self::MAX_EXPIRE_MINUTES).contains(&expire_minutes) {
            return Err(ConfigError::Invalid {
                key: "JWT_EXPIRE_MINUTES",
                reason: format!("must be between 1 and {} minutes", Self::MAX_EXPIRE_MINUTES),
            });
        }

        Ok(Self {
            secret_key,
            expire_minutes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "0123456789abcdef0123456789abcdef";

    #[test]
    fn test_short_secret_rejected() {
        let source = |key: &str| match key {
            "JWT_SECRET_KEY" => Some("too-short".to_string()),
            _ => None,
        };

        let result = JwtConfig::from_source(&source);

        assert!(matches!(
            result,
            Err(ConfigError::Invalid { key: "JWT_SECRET_KEY", .. })
        ));
    }

    #[test]
    fn test_missing_secret() {
        let source = |_: &str| None;

        let result = JwtConfig::from_source(&source);

        assert_eq!(result.unwrap_err(), ConfigError::Missing("JWT_SECRET_KEY"));
    }

    #[test]
    fn test_non_positive_expiry_rejected() {
        let source = |key: &str| match key {
            "JWT_SECRET_KEY" => Some(SECRET.to_string()),
            "JWT_EXPIRE_MINUTES" => Some("0".to_string()),
            _ => None,
        };

        let result = JwtConfig::from_source(&source);

        assert!(matches!(
            result,
            Err(ConfigError::Invalid { key: "JWT_EXPIRE_MINUTES", .. })
        ));
    }

    #[test]
    fn test_huge_expiry_rejected() {
        let source = |key: &str| match key {
            "JWT_SECRET_KEY" => Some(SECRET.to_string()),
            "JWT_EXPIRE_MINUTES" => Some("1000000000000".to_string()),
            _ => None,
        };

        let result = JwtConfig::from_source(&source);

        assert!(matches!(
            result,
            Err(ConfigError::Invalid { key: "JWT_EXPIRE_MINUTES", .. })
        ));
    }

    #[test]
    fn test_expiry_upper_bound_accepted() {
        let max = JwtConfig::MAX_EXPIRE_MINUTES.to_string();
        let source = move |key: &str| match key {
            "JWT_SECRET_KEY" => Some(SECRET.to_string()),
            "JWT_EXPIRE_MINUTES" => Some(max.clone()),
            _ => None,
        };

        let config = JwtConfig::from_source(&source).unwrap();

        assert_eq!(config.expire_minutes, JwtConfig::MAX_EXPIRE_MINUTES);
    }

    #[test]
    fn test_custom_expiry() {
        let source = |key: &str| match key {
            "JWT_SECRET_KEY" => Some(SECRET.to_string()),
            "JWT_EXPIRE_MINUTES" => Some("15".to_string()),
            _ => None,
        };

        let config = JwtConfig::from_source(&source).unwrap();

        assert_eq!(config.expire_minutes, 15);
        assert_eq!(config.secret_key, SECRET);
    }
}
