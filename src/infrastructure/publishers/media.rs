// src/infrastructure/publishers/media.rs
//! Local files referenced by articles (featured images, videos).
use super::error::PublishError;
use bytes::Bytes;
use std::path::{Component, Path, PathBuf};

#[derive(Debug, Clone)]
pub struct MediaFile {
    pub file_name: String,
    pub mime_type: &'static str,
    pub data: Bytes,
}

/// Editor paths look like `/uploads/x.png` and are read below the uploads
/// root; a leading `/` means the root itself. Parent, root and prefix
/// components are rejected so a reference never leaves the root.
pub fn resolve_media_path(root: &Path, reference: &str) -> Result<PathBuf, PublishError> {
    let relative = Path::new(reference.trim().trim_start_matches('/'));
    let confined = relative
        .components()
        .all(|component| matches!(component, Component::Normal(_) | Component::CurDir));
    if !confined || relative.file_name().is_none() {
        return Err(outside_root(reference));
    }
    Ok(root.join(relative))
}

fn outside_root(reference: &str) -> PublishError {
    PublishError::validation(format!(
        "media path is outside the uploads directory: {reference}"
    ))
}

pub fn image_mime_type(file_name: &str) -> Result<&'static str, PublishError> {
    match extension(file_name).as_deref() {
        Some("jpg" | "jpeg") => Ok("image/jpeg"),
        Some("png") => Ok("image/png"),
        Some("gif") => Ok("image/gif"),
        Some("webp") => Ok("image/webp"),
        other => Err(PublishError::validation(format!(
            "unsupported image format: .{}",
            other.unwrap_or_default()
        ))),
    }
}

pub fn video_mime_type(file_name: &str) -> &'static str {
    match extension(file_name).as_deref() {
        Some("mp4" | "m4v") => "video/mp4",
        Some("mov") => "video/quicktime",
        Some("webm") => "video/webm",
        Some("avi") => "video/x-msvideo",
        Some("mkv") => "video/x-matroska",
        _ => "application/octet-stream",
    }
}

pub async fn read_image(root: &Path, reference: &str) -> Result<MediaFile, PublishError> {
    let path = resolve_media_path(root, reference)?;
    let file_name = file_name_of(&path);
    let mime_type = image_mime_type(&file_name)?;
    let data = read_confined(root, &path, reference, "image").await?;
    Ok(MediaFile {
        file_name,
        mime_type,
        data,
    })
}

pub async fn read_video(root: &Path, reference: &str) -> Result<MediaFile, PublishError> {
    let path = resolve_media_path(root, reference)?;
    let file_name = file_name_of(&path);
    let data = read_confined(root, &path, reference, "video").await?;
    Ok(MediaFile {
        mime_type: video_mime_type(&file_name),
        file_name,
        data,
    })
}

/// Reads `path` after resolving symlinks; the real file must still sit
/// below the real uploads root.
async fn read_confined(
    root: &Path,
    path: &Path,
    reference: &str,
    kind: &str,
) -> Result<Bytes, PublishError> {
    let real_path = tokio::fs::canonicalize(path)
        .await
        .map_err(|err| read_error(&err, path, kind))?;
    let real_root = tokio::fs::canonicalize(root)
        .await
        .map_err(|err| read_error(&err, path, kind))?;
    if !real_path.starts_with(&real_root) {
        return Err(outside_root(reference));
    }

    tokio::fs::read(&real_path)
        .await
        .map(Bytes::from)
        .map_err(|err| read_error(&err, path, kind))
}

fn read_error(err: &std::io::Error, path: &Path, kind: &str) -> PublishError {
    if err.kind() == std::io::ErrorKind::NotFound {
        PublishError::Io(format!("{kind} file not found: {}", path.display()))
    } else {
        PublishError::Io(format!(
            "failed to read {kind} file {}: {err}",
            path.display()
        ))
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn extension(file_name: &str) -> Option<String> {
    Path::new(file_name)
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_paths_are_rooted_under_the_uploads_directory() {
        let root = Path::new("public");
        assert_eq!(
            resolve_media_path(root, "/uploads/a.png").unwrap(),
            PathBuf::from("public/uploads/a.png")
        );
        assert_eq!(
            resolve_media_path(root, "uploads/./a.png").unwrap(),
            PathBuf::from("public/uploads/./a.png")
        );
    }

    #[test]
    fn parent_components_cannot_leave_the_root() {
        let root = Path::new("public");
        for reference in ["../secret.png", "/uploads/../../etc/passwd", "", "/"] {
            let err = resolve_media_path(root, reference).unwrap_err();
            assert!(
                err.to_string().contains("outside the uploads directory"),
                "{reference}: {err}"
            );
        }
    }

    #[tokio::test]
    async fn escaping_references_are_never_read() {
        let base = std::env::temp_dir().join(format!("tribune-confine-{}", uuid::Uuid::new_v4()));
        let root = base.join("public");
        std::fs::create_dir_all(&root).unwrap();
        std::fs::write(base.join("secret.png"), b"SECRET").unwrap();
        std::fs::write(base.join("secret.mp4"), b"SECRET").unwrap();

        let image = read_image(&root, "../secret.png").await;
        let video = read_video(&root, "../secret.mp4").await;
        let absolute = read_video(&root, base.join("secret.mp4").to_str().unwrap()).await;

        std::fs::remove_dir_all(&base).ok();
        assert!(matches!(image, Err(PublishError::Validation(_))));
        assert!(matches!(video, Err(PublishError::Validation(_))));
        // an absolute path is taken as relative to the root, where nothing exists
        assert!(absolute.unwrap_err().to_string().contains("video file not found"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn symlinks_out_of_the_root_are_rejected() {
        let base = std::env::temp_dir().join(format!("tribune-symlink-{}", uuid::Uuid::new_v4()));
        let root = base.join("public");
        std::fs::create_dir_all(&root).unwrap();
        std::fs::write(base.join("secret.png"), b"SECRET").unwrap();
        std::os::unix::fs::symlink(base.join("secret.png"), root.join("link.png")).unwrap();

        let result = read_image(&root, "/link.png").await;

        std::fs::remove_dir_all(&base).ok();
        assert!(matches!(result, Err(PublishError::Validation(_))));
    }

    #[test]
    fn image_types_follow_the_extension() {
        assert_eq!(image_mime_type("a.JPG").unwrap(), "image/jpeg");
        assert_eq!(image_mime_type("a.webp").unwrap(), "image/webp");
        assert!(image_mime_type("a.bmp").is_err());
        assert!(image_mime_type("noext").is_err());
        assert_eq!(video_mime_type("clip.mp4"), "video/mp4");
        assert_eq!(video_mime_type("clip.bin"), "application/octet-stream");
    }

    #[tokio::test]
    async fn missing_files_are_reported_with_their_path() {
        let err = read_image(Path::new("/nonexistent-root"), "/gone.png")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("image file not found"));
    }
}
