//! AWS shared credentials file (`~/.aws/credentials`) profile loading.

use std::path::{Path, PathBuf};

use crate::types::{CredentialValidationError, ProviderCredentials};

/// Environment variable that overrides the credentials file location.
pub const SHARED_CREDENTIALS_FILE_ENV: &str = "AWS_SHARED_CREDENTIALS_FILE";

/// Errors raised while loading a named profile.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    /// Neither the override variable nor a home directory is available.
    #[error("Cannot locate the shared credentials file (no home directory)")]
    NoCredentialsFile,

    /// The credentials file could not be read.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The requested `[profile]` section is absent.
    #[error("Profile '{profile}' not found in {path}")]
    ProfileNotFound { profile: String, path: PathBuf },

    /// The profile exists but lacks a required key.
    #[error("Profile '{profile}' is missing '{key}'")]
    MissingKey { profile: String, key: &'static str },

    /// A key is present but blank.
    #[error("Profile '{profile}': {source}")]
    Invalid {
        profile: String,
        #[source]
        source: CredentialValidationError,
    },
}

/// Location of the shared credentials file.
///
/// `$AWS_SHARED_CREDENTIALS_FILE` wins; otherwise `~/.aws/credentials`.
pub fn shared_credentials_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(SHARED_CREDENTIALS_FILE_ENV).filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }
    dirs::home_dir().map(|home| home.join(".aws").join("credentials"))
}

/// Load Route 53 credentials for `profile` from the shared credentials file.
#[cfg(feature = "route53")]
pub fn load_profile_credentials(profile: &str) -> Result<ProviderCredentials, ProfileError> {
    let path = shared_credentials_path().ok_or(ProfileError::NoCredentialsFile)?;
    load_profile_credentials_from(&path, profile)
}

/// Same as [`load_profile_credentials`] with an explicit file path.
#[cfg(feature = "route53")]
pub fn load_profile_credentials_from(
    path: &Path,
    profile: &str,
) -> Result<ProviderCredentials, ProfileError> {
    log::debug!("Reading profile '{profile}' from {}", path.display());
    let content = std::fs::read_to_string(path).map_err(|source| ProfileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_shared_credentials(&content, profile).map_err(|e| match e {
        ProfileError::ProfileNotFound { profile, .. } => ProfileError::ProfileNotFound {
            profile,
            path: path.to_path_buf(),
        },
        other => other,
    })
}

/// Parse the INI-style credentials file and extract one profile.
///
/// Keys are matched case-insensitively; `#` and `;` start comment lines.
#[cfg(feature = "route53")]
pub fn parse_shared_credentials(
    content: &str,
    profile: &str,
) -> Result<ProviderCredentials, ProfileError> {
    let mut in_section = false;
    let mut found = false;
    let mut access_key_id = None;
    let mut secret_access_key = None;
    let mut session_token = None;

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }

        if let Some(section) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            in_section = section.trim() == profile;
            found |= in_section;
            continue;
        }

        if !in_section {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let value = value.trim().to_string();
        match key.trim().to_ascii_lowercase().as_str() {
            "aws_access_key_id" => access_key_id = Some(value),
            "aws_secret_access_key" => secret_access_key = Some(value),
            "aws_session_token" => session_token = Some(value),
            _ => {}
        }
    }

    if !found {
        return Err(ProfileError::ProfileNotFound {
            profile: profile.to_string(),
            path: PathBuf::new(),
        });
    }

    let access_key_id = access_key_id.ok_or_else(|| ProfileError::MissingKey {
        profile: profile.to_string(),
        key: "aws_access_key_id",
    })?;
    let secret_access_key = secret_access_key.ok_or_else(|| ProfileError::MissingKey {
        profile: profile.to_string(),
        key: "aws_secret_access_key",
    })?;

    ProviderCredentials::route53(&access_key_id, &secret_access_key, session_token.as_deref())
        .map_err(|source| ProfileError::Invalid {
            profile: profile.to_string(),
            source,
        })
}
