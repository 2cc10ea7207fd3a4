use utoipa::ToSchema;

use crate::shared::validation::AVATAR_FILENAME_REGEX;

/// Upload avatar request DTO for OpenAPI documentation.
/// Note: This struct is for Swagger UI documentation only.
/// The actual handler uses axum's Multipart extractor directly.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct UploadAvatarDto {
    /// The image file to upload (jpg, jpeg or png)
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub avatars: String,
}

/// Maximum avatar upload size in bytes
pub const MAX_AVATAR_SIZE: usize = 1_000_000;

/// Side length of the stored square avatar
pub const AVATAR_DIMENSION: u32 = 250;

/// Check an upload filename against the extension allow-list
pub fn is_avatar_filename_allowed(filename: &str) -> bool {
    AVATAR_FILENAME_REGEX.is_match(filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_allow_list() {
        assert!(is_avatar_filename_allowed("me.jpg"));
        assert!(is_avatar_filename_allowed("me.jpeg"));
        assert!(is_avatar_filename_allowed("me.PNG"));
        assert!(!is_avatar_filename_allowed("me.gif"));
        assert!(!is_avatar_filename_allowed("me.pdf"));
        assert!(!is_avatar_filename_allowed("me"));
    }
}
