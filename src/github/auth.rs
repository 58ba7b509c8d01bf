use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::error::BackportError;

const TOKEN_DIR: &str = ".backporter";
const TOKEN_FILE: &str = "github.token";

fn home_var() -> &'static str {
    if cfg!(windows) { "USERPROFILE" } else { "HOME" }
}

/// Resolve the credential file path from the platform home variable.
pub fn token_path() -> Result<PathBuf, BackportError> {
    let var = home_var();
    let home = env::var(var).ok().filter(|h| !h.is_empty()).ok_or_else(|| {
        BackportError::MissingCredential {
            path: PathBuf::from(TOKEN_DIR).join(TOKEN_FILE),
            reason: format!("{var} is not set"),
        }
    })?;
    Ok(PathBuf::from(home).join(TOKEN_DIR).join(TOKEN_FILE))
}

/// Read the bearer token from the default credential file.
pub fn load_token() -> Result<String, BackportError> {
    load_token_from(&token_path()?)
}

/// Read a bearer token from `path`, trimming surrounding whitespace.
/// An unreadable file or empty trimmed content is `MissingCredential`.
pub fn load_token_from(path: &Path) -> Result<String, BackportError> {
    let raw = fs::read_to_string(path).map_err(|e| BackportError::MissingCredential {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let token = raw.trim();
    if token.is_empty() {
        return Err(BackportError::MissingCredential {
            path: path.to_path_buf(),
            reason: "file is empty".to_string(),
        });
    }

    Ok(token.to_string())
}

/// Check if authentication is available and valid
pub async fn check_auth() -> Result<AuthStatus> {
    match load_token() {
        Ok(token) => {
            // Verify the token works by making a simple API call
            let octocrab = octocrab::Octocrab::builder()
                .personal_token(token)
                .build()?;

            match octocrab.current().user().await {
                Ok(user) => Ok(AuthStatus::Authenticated {
                    username: user.login,
                }),
                Err(e) => Ok(AuthStatus::InvalidToken {
                    error: e.to_string(),
                }),
            }
        }
        Err(e) => Ok(AuthStatus::NoToken {
            error: e.to_string(),
        }),
    }
}

#[derive(Debug)]
pub enum AuthStatus {
    Authenticated { username: String },
    InvalidToken { error: String },
    NoToken { error: String },
}

impl std::fmt::Display for AuthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthStatus::Authenticated { username } => {
                write!(f, "Authenticated as {}", username)
            }
            AuthStatus::InvalidToken { error } => {
                write!(f, "Invalid token: {}", error)
            }
            AuthStatus::NoToken { error } => {
                write!(f, "No token: {}", error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn token_is_trimmed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "  ghp_abc123\n").unwrap();

        assert_eq!(load_token_from(file.path()).unwrap(), "ghp_abc123");
    }

    #[test]
    fn whitespace_only_file_is_missing_credential() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, " \n\t\n").unwrap();

        let err = load_token_from(file.path()).unwrap_err();
        match err {
            BackportError::MissingCredential { path, reason } => {
                assert_eq!(path, file.path());
                assert_eq!(reason, "file is empty");
            }
            other => panic!("expected MissingCredential, got {other:?}"),
        }
    }

    #[test]
    fn unreadable_file_is_missing_credential() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("github.token");

        let err = load_token_from(&path).unwrap_err();
        assert!(matches!(err, BackportError::MissingCredential { .. }));
    }
}
