//! Local object storage for uploaded images. Files land under
//! `uploads/<subdirectory>/` with a uuid-prefixed name and are served
//! back under the `/uploads` route.

use crate::error::AppError;

pub async fn store_image(
    subdirectory: &str,
    file_name: &str,
    data: &[u8],
) -> Result<String, AppError> {
    use tokio::io::AsyncWriteExt;

    let upload_dir = format!("uploads/{subdirectory}");
    tokio::fs::create_dir_all(&upload_dir).await.map_err(|e| {
        AppError::InternalError(anyhow::anyhow!("failed to create upload directory: {e}"))
    })?;

    let unique_filename = format!("{}_{}", uuid::Uuid::new_v4(), file_name);
    let file_path = format!("{upload_dir}/{unique_filename}");

    let mut file = tokio::fs::File::create(&file_path)
        .await
        .map_err(|e| AppError::InternalError(anyhow::anyhow!("failed to create file: {e}")))?;

    file.write_all(data)
        .await
        .map_err(|e| AppError::InternalError(anyhow::anyhow!("failed to write file: {e}")))?;

    tracing::info!("stored upload at {file_path}");

    Ok(format!("/{file_path}"))
}

/// Best-effort removal of a previously stored image. URLs that do not
/// point into the local uploads directory are left alone.
pub async fn delete_image(url: &str) {
    let Some(path) = url.strip_prefix('/').filter(|p| p.starts_with("uploads/")) else {
        return;
    };

    if let Err(e) = tokio::fs::remove_file(path).await {
        tracing::warn!("could not remove {path}: {e}");
    }
}
