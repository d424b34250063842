//! Media URL resolution.
//!
//! Every URL handed to a page must be absolute. Uploads stored by the
//! content store itself come back relative and get the base URL prefixed;
//! CDN-hosted uploads are already absolute. Cloudinary videos additionally
//! get a fixed delivery transformation.

use tracing::debug;

use crate::types::Media;

/// Returned when there is no media to show.
pub const PLACEHOLDER_URL: &str = "https://placehold.co/400x300?text=No+Image";

/// Host that marks a URL as served by Cloudinary.
pub const CDN_HOST: &str = "res.cloudinary.com";

/// Delivery transformation injected into Cloudinary video URLs.
pub const VIDEO_TRANSFORM: &str = "q_auto:best,f_auto,w_1920,c_limit,fl_progressive";

/// Named image rendition. Defaults to `Medium`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ImageSize {
    Thumbnail,
    Small,
    #[default]
    Medium,
    Large,
}

impl Media {
    pub fn is_image(&self) -> bool {
        self.mime.as_deref().is_some_and(|m| m.starts_with("image/"))
    }

    pub fn is_video(&self) -> bool {
        self.mime.as_deref().is_some_and(|m| m.starts_with("video/"))
    }

    /// URL of rendition `size`, if the store generated one.
    pub fn format_url(&self, size: ImageSize) -> Option<&str> {
        let format = match size {
            ImageSize::Thumbnail => self.formats.thumbnail.as_ref(),
            ImageSize::Small => self.formats.small.as_ref(),
            ImageSize::Medium => self.formats.medium.as_ref(),
            ImageSize::Large => self.formats.large.as_ref(),
        }?;
        Some(format.url.as_str()).filter(|url| !url.is_empty())
    }
}

/// Absolute display URL for `media` at `size`.
///
/// Images prefer the named rendition; everything else uses the original
/// upload. Missing media or an empty URL yields [`PLACEHOLDER_URL`].
pub fn resolve_media_url(base_url: &str, media: Option<&Media>, size: ImageSize) -> String {
    let Some(media) = media.filter(|m| !m.url.is_empty()) else {
        return PLACEHOLDER_URL.to_string();
    };

    let mut url = media
        .is_image()
        .then(|| media.format_url(size))
        .flatten()
        .unwrap_or(media.url.as_str())
        .to_string();

    if media.is_video() && url.contains(CDN_HOST) {
        url = optimize_video_url(&url);
        debug!(%url, "optimized CDN video URL");
    }

    absolutize(base_url, &url)
}

/// Insert [`VIDEO_TRANSFORM`] right after the upload segment of a Cloudinary
/// URL. URLs without an upload segment, or already transformed, are
/// returned unchanged.
pub fn optimize_video_url(url: &str) -> String {
    let segment = if url.contains("/video/upload/") {
        "/video/upload/"
    } else if url.contains("/upload/") {
        "/upload/"
    } else {
        return url.to_string();
    };

    let transformed = format!("{segment}{VIDEO_TRANSFORM}/");
    if url.contains(&transformed) {
        return url.to_string();
    }
    url.replacen(segment, &transformed, 1)
}

/// Prefix a bare upload path with the base URL. Empty paths stay empty.
pub fn resolve_asset_path(base_url: &str, path: &str) -> String {
    if path.is_empty() {
        return String::new();
    }
    absolutize(base_url, path)
}

fn absolutize(base_url: &str, url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("{}{url}", base_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MediaFormat, MediaFormats};

    const BASE: &str = "http://localhost:1337";

    fn image(url: &str) -> Media {
        Media {
            url: url.to_string(),
            mime: Some("image/jpeg".to_string()),
            ..Media::default()
        }
    }

    fn video(url: &str) -> Media {
        Media {
            url: url.to_string(),
            mime: Some("video/mp4".to_string()),
            ..Media::default()
        }
    }

    #[test]
    fn missing_media_gives_placeholder() {
        assert_eq!(resolve_media_url(BASE, None, ImageSize::Medium), PLACEHOLDER_URL);
        assert_eq!(resolve_media_url(BASE, Some(&image("")), ImageSize::Medium), PLACEHOLDER_URL);
    }

    #[test]
    fn relative_url_is_prefixed() {
        let media = image("/uploads/bruno.jpg");
        assert_eq!(
            resolve_media_url(BASE, Some(&media), ImageSize::Large),
            "http://localhost:1337/uploads/bruno.jpg"
        );
    }

    #[test]
    fn absolute_url_is_unchanged() {
        let media = image("https://res.cloudinary.com/demo/image/upload/bruno.jpg");
        assert_eq!(
            resolve_media_url(BASE, Some(&media), ImageSize::Medium),
            "https://res.cloudinary.com/demo/image/upload/bruno.jpg"
        );
    }

    #[test]
    fn image_prefers_requested_rendition() {
        let media = Media {
            formats: MediaFormats {
                small: Some(MediaFormat { url: "/uploads/small_bruno.jpg".to_string(), ..MediaFormat::default() }),
                ..MediaFormats::default()
            },
            ..image("/uploads/bruno.jpg")
        };
        assert_eq!(
            resolve_media_url(BASE, Some(&media), ImageSize::Small),
            "http://localhost:1337/uploads/small_bruno.jpg"
        );
        assert_eq!(
            resolve_media_url(BASE, Some(&media), ImageSize::Medium),
            "http://localhost:1337/uploads/bruno.jpg"
        );
    }

    #[test]
    fn videos_ignore_renditions() {
        let media = Media {
            formats: MediaFormats {
                medium: Some(MediaFormat { url: "/uploads/poster.jpg".to_string(), ..MediaFormat::default() }),
                ..MediaFormats::default()
            },
            ..video("/uploads/clip.mp4")
        };
        assert_eq!(
            resolve_media_url(BASE, Some(&media), ImageSize::Medium),
            "http://localhost:1337/uploads/clip.mp4"
        );
    }

    #[test]
    fn cdn_video_gets_transform_once() {
        let media = video("https://res.cloudinary.com/demo/video/upload/v1/hero.mp4");
        let url = resolve_media_url(BASE, Some(&media), ImageSize::Medium);
        assert_eq!(
            url,
            "https://res.cloudinary.com/demo/video/upload/q_auto:best,f_auto,w_1920,c_limit,fl_progressive/v1/hero.mp4"
        );
        assert_eq!(url.matches(VIDEO_TRANSFORM).count(), 1);
        assert_eq!(optimize_video_url(&url), url);
    }

    #[test]
    fn generic_upload_segment_is_transformed() {
        assert_eq!(
            optimize_video_url("https://res.cloudinary.com/demo/raw/upload/clip.mov"),
            "https://res.cloudinary.com/demo/raw/upload/q_auto:best,f_auto,w_1920,c_limit,fl_progressive/clip.mov"
        );
    }

    #[test]
    fn cdn_image_is_not_transformed() {
        let media = image("https://res.cloudinary.com/demo/image/upload/a.jpg");
        let url = resolve_media_url(BASE, Some(&media), ImageSize::Medium);
        assert!(!url.contains(VIDEO_TRANSFORM));
    }

    #[test]
    fn asset_paths() {
        assert_eq!(resolve_asset_path(BASE, ""), "");
        assert_eq!(resolve_asset_path(BASE, "/uploads/x.png"), "http://localhost:1337/uploads/x.png");
        assert_eq!(resolve_asset_path(BASE, "https://cdn.example.com/x.png"), "https://cdn.example.com/x.png");
    }

    #[test]
    fn kind_by_mime_prefix() {
        assert!(image("/a.jpg").is_image());
        assert!(video("/a.mp4").is_video());
        assert!(!Media::default().is_image());
    }
}
