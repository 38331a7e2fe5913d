use crate::{
    model::contact::ContactDto,
    server::error::{config::ConfigError, AppError},
};

const DEFAULT_UPLOAD_DIR: &str = "public/uploads";
const DEFAULT_UPLOAD_URL_PREFIX: &str = "/uploads";
const DEFAULT_PLACEHOLDER_IMAGE_URL: &str = "/uploads/demo-placeholder.jpg";

/// Request body limit for upload routes, sized for full-resolution phone photos.
pub const DEFAULT_UPLOAD_MAX_BYTES: usize = 20 * 1024 * 1024;

/// Which media storage backend handles uploaded images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaBackend {
    /// Writes uploads to the local upload directory.
    Local,
    /// Stores nothing and hands back a fixed placeholder URL.
    Placeholder,
}

impl MediaBackend {
    /// Resolves the backend from `MEDIA_STORAGE`, falling back on `APP_ENV`.
    ///
    /// Without an explicit choice, production deployments use the placeholder backend
    /// and every other environment writes to local disk.
    pub fn resolve(media_storage: Option<&str>, app_env: Option<&str>) -> Result<Self, ConfigError> {
        match media_storage.map(str::trim) {
            Some(value) if value.eq_ignore_ascii_case("local") => Ok(Self::Local),
            Some(value) if value.eq_ignore_ascii_case("placeholder") => Ok(Self::Placeholder),
            Some(value) => Err(ConfigError::InvalidEnvVar {
                name: "MEDIA_STORAGE".to_string(),
                value: value.to_string(),
            }),
            None => match app_env {
                Some(env) if env.eq_ignore_ascii_case("production") => Ok(Self::Placeholder),
                _ => Ok(Self::Local),
            },
        }
    }
}

pub struct Config {
    pub database_url: String,

    pub media_backend: MediaBackend,
    pub upload_dir: String,
    pub upload_url_prefix: String,
    pub placeholder_image_url: String,
    pub upload_max_bytes: usize,

    pub contact: ContactDto,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let media_backend = MediaBackend::resolve(
            optional_var("MEDIA_STORAGE").as_deref(),
            optional_var("APP_ENV").as_deref(),
        )?;

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            media_backend,
            upload_dir: optional_var("UPLOAD_DIR").unwrap_or_else(|| DEFAULT_UPLOAD_DIR.to_string()),
            upload_url_prefix: optional_var("UPLOAD_URL_PREFIX")
                .unwrap_or_else(|| DEFAULT_UPLOAD_URL_PREFIX.to_string()),
            placeholder_image_url: optional_var("PLACEHOLDER_IMAGE_URL")
                .unwrap_or_else(|| DEFAULT_PLACEHOLDER_IMAGE_URL.to_string()),
            upload_max_bytes: parse_upload_max_bytes(optional_var("UPLOAD_MAX_BYTES").as_deref())?,
            contact: ContactDto {
                address: optional_var("CONTACT_ADDRESS"),
                phone: optional_var("CONTACT_PHONE"),
                email: optional_var("CONTACT_EMAIL"),
                facebook_url: optional_var("CONTACT_FACEBOOK_URL"),
                instagram_url: optional_var("CONTACT_INSTAGRAM_URL"),
                youtube_url: optional_var("CONTACT_YOUTUBE_URL"),
            },
        })
    }
}

/// Reads an environment variable, treating blank values as unset.
fn optional_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parses `UPLOAD_MAX_BYTES`, which must be a positive byte count when set.
fn parse_upload_max_bytes(value: Option<&str>) -> Result<usize, ConfigError> {
    let Some(value) = value else {
        return Ok(DEFAULT_UPLOAD_MAX_BYTES);
    };

    match value.parse::<usize>() {
        Ok(bytes) if bytes > 0 => Ok(bytes),
        _ => Err(ConfigError::InvalidEnvVar {
            name: "UPLOAD_MAX_BYTES".to_string(),
            value: value.to_string(),
        }),
    }
}
