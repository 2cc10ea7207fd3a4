use std::io::Cursor;

use image::{imageops::FilterType, ImageFormat};
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::avatars::dtos::AVATAR_DIMENSION;

/// Service for avatar storage and the image pipeline.
///
/// Avatars live in the `avatar` column of the account row; every stored
/// avatar is a 250x250 PNG re-encode of the upload.
pub struct AvatarService {
    pool: PgPool,
}

impl AvatarService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Decode an uploaded image, resize it to the fixed square dimension and
    /// re-encode it as PNG.
    ///
    /// `resize_exact` forces both dimensions; aspect ratio is not preserved.
    pub fn process_image(data: &[u8]) -> Result<Vec<u8>> {
        let img = image::load_from_memory(data)
            .map_err(|_| AppError::Validation("File must be an image".to_string()))?;

        let resized = img.resize_exact(AVATAR_DIMENSION, AVATAR_DIMENSION, FilterType::Lanczos3);

        let mut out = Cursor::new(Vec::new());
        resized
            .write_to(&mut out, ImageFormat::Png)
            .map_err(|e| AppError::Internal(format!("Avatar encoding failed: {}", e)))?;

        Ok(out.into_inner())
    }

    /// Store the processed avatar on the account row.
    pub async fn store(&self, account_id: Uuid, avatar: Vec<u8>) -> Result<()> {
        sqlx::query("UPDATE accounts SET avatar = $2, updated_at = NOW() WHERE id = $1")
            .bind(account_id)
            .bind(&avatar)
            .execute(&self.pool)
            .await?;

        tracing::info!(
            "Avatar stored: account_id={}, bytes={}",
            account_id,
            avatar.len()
        );

        Ok(())
    }

    /// Clear the avatar. Answers not-found when no avatar was set.
    pub async fn clear(&self, account_id: Uuid) -> Result<()> {
        let result = sqlx::query(
            "UPDATE accounts SET avatar = NULL, updated_at = NOW() WHERE id = $1 AND avatar IS NOT NULL",
        )
        .bind(account_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(
                "You do not have a profile picture".to_string(),
            ));
        }

        tracing::info!("Avatar cleared: account_id={}", account_id);

        Ok(())
    }

    /// Fetch the stored avatar bytes for any account id. `None` covers both
    /// an unknown account and an account without an avatar.
    pub async fn fetch(&self, account_id: Uuid) -> Result<Option<Vec<u8>>> {
        let row = sqlx::query_scalar::<_, Option<Vec<u8>>>(
            "SELECT avatar FROM accounts WHERE id = $1",
        )
        .bind(account_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.flatten())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;

    fn sample_png(width: u32, height: u32) -> Vec<u8> {
        let img = RgbImage::from_fn(width, height, |x, y| {
            image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
        });
        let mut out = Cursor::new(Vec::new());
        image::DynamicImage::ImageRgb8(img)
            .write_to(&mut out, ImageFormat::Png)
            .unwrap();
        out.into_inner()
    }

    #[test]
    fn test_process_resizes_to_fixed_square() {
        let input = sample_png(10, 17);
        let output = AvatarService::process_image(&input).unwrap();

        let decoded = image::load_from_memory(&output).unwrap();
        assert_eq!(decoded.width(), AVATAR_DIMENSION);
        assert_eq!(decoded.height(), AVATAR_DIMENSION);
    }

    #[test]
    fn test_process_output_is_png() {
        let input = sample_png(300, 300);
        let output = AvatarService::process_image(&input).unwrap();

        assert_eq!(
            image::guess_format(&output).unwrap(),
            ImageFormat::Png
        );
    }

    #[test]
    fn test_process_rejects_non_image_bytes() {
        let err = AvatarService::process_image(b"definitely not an image").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
