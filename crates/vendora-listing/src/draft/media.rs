//! Step 2: media gallery constraints.
//!
//! The files themselves are opaque to the wizard; only their names, kinds,
//! and sizes are inspected. Upload transport belongs to a collaborator.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ListingError;
use crate::ids::MediaId;

/// Required minimum number of product images.
pub const MIN_IMAGES: usize = 5;
/// Maximum number of product images.
pub const MAX_IMAGES: usize = 10;
/// Maximum size of a single image in bytes (25 MB).
pub const MAX_IMAGE_BYTES: u64 = 25 * 1024 * 1024;
/// Maximum number of product videos.
pub const MAX_VIDEOS: usize = 2;
/// Maximum size of a single video in bytes (40 MB).
pub const MAX_VIDEO_BYTES: u64 = 40 * 1024 * 1024;

/// Kind of media file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum MediaKind {
    #[default]
    Image,
    Video,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        }
    }

    /// Infer the kind from a file extension.
    pub fn from_file_name(name: &str) -> Option<Self> {
        let ext = Path::new(name).extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" | "png" | "webp" | "gif" => Some(MediaKind::Image),
            "mp4" | "mov" | "webm" | "avi" => Some(MediaKind::Video),
            _ => None,
        }
    }
}

/// A media file reference held by the draft.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MediaFile {
    /// Unique media identifier.
    pub id: MediaId,
    /// Original file name.
    pub file_name: String,
    /// Image or video.
    pub kind: MediaKind,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Persisted URL, set once an upload collaborator reports completion.
    pub url: Option<String>,
}

/// Step 2 of the listing draft: images and videos.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MediaGallery {
    /// Image references, in insertion order.
    pub images: Vec<MediaFile>,
    /// Video references, in insertion order.
    pub videos: Vec<MediaFile>,
}

impl MediaGallery {
    /// Add an image reference.
    ///
    /// Rejected when the file name does not look like an image, the image
    /// slot count is full, or the file exceeds [`MAX_IMAGE_BYTES`]. The
    /// gallery is unchanged on rejection.
    pub fn add_image(
        &mut self,
        id: MediaId,
        file_name: impl Into<String>,
        size_bytes: u64,
    ) -> Result<MediaId, ListingError> {
        let file_name = file_name.into();
        if MediaKind::from_file_name(&file_name) != Some(MediaKind::Image) {
            return Err(ListingError::UnsupportedMediaKind {
                file_name,
                expected: "image".to_string(),
            });
        }
        if self.images.len() >= MAX_IMAGES {
            return Err(ListingError::ImageLimitReached(MAX_IMAGES));
        }
        if size_bytes > MAX_IMAGE_BYTES {
            return Err(ListingError::ImageTooLarge {
                size_bytes,
                limit_bytes: MAX_IMAGE_BYTES,
            });
        }
        self.images.push(MediaFile {
            id: id.clone(),
            file_name,
            kind: MediaKind::Image,
            size_bytes,
            url: None,
        });
        Ok(id)
    }

    /// Add a video reference.
    ///
    /// Same contract as [`add_image`](Self::add_image) with the video caps.
    pub fn add_video(
        &mut self,
        id: MediaId,
        file_name: impl Into<String>,
        size_bytes: u64,
    ) -> Result<MediaId, ListingError> {
        let file_name = file_name.into();
        if MediaKind::from_file_name(&file_name) != Some(MediaKind::Video) {
            return Err(ListingError::UnsupportedMediaKind {
                file_name,
                expected: "video".to_string(),
            });
        }
        if self.videos.len() >= MAX_VIDEOS {
            return Err(ListingError::VideoLimitReached(MAX_VIDEOS));
        }
        if size_bytes > MAX_VIDEO_BYTES {
            return Err(ListingError::VideoTooLarge {
                size_bytes,
                limit_bytes: MAX_VIDEO_BYTES,
            });
        }
        self.videos.push(MediaFile {
            id: id.clone(),
            file_name,
            kind: MediaKind::Video,
            size_bytes,
            url: None,
        });
        Ok(id)
    }

    /// Remove a media reference by id, from whichever list holds it.
    pub fn remove(&mut self, id: &MediaId) -> bool {
        let len_before = self.images.len() + self.videos.len();
        self.images.retain(|f| &f.id != id);
        self.videos.retain(|f| &f.id != id);
        self.images.len() + self.videos.len() < len_before
    }

    /// Record the persisted URL reported by an upload collaborator.
    pub fn mark_uploaded(&mut self, id: &MediaId, url: impl Into<String>) -> bool {
        if let Some(file) = self
            .images
            .iter_mut()
            .chain(self.videos.iter_mut())
            .find(|f| &f.id == id)
        {
            file.url = Some(url.into());
            true
        } else {
            false
        }
    }

    /// Files not yet uploaded.
    pub fn pending(&self) -> impl Iterator<Item = &MediaFile> {
        self.images
            .iter()
            .chain(self.videos.iter())
            .filter(|f| f.url.is_none())
    }

    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    pub fn video_count(&self) -> usize {
        self.videos.len()
    }

    /// Whether the image count satisfies the 5-10 requirement.
    pub fn has_required_images(&self) -> bool {
        (MIN_IMAGES..=MAX_IMAGES).contains(&self.images.len())
    }

    /// Combined size of every referenced file.
    pub fn total_bytes(&self) -> u64 {
        self.images
            .iter()
            .chain(self.videos.iter())
            .map(|f| f.size_bytes)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn media_id(n: u64) -> MediaId {
        MediaId::new(format!("media-{}", n))
    }

    #[test]
    fn test_add_image() {
        let mut gallery = MediaGallery::default();
        let added = gallery.add_image(media_id(1), "front.jpg", 1024);
        assert!(added.is_ok());
        assert_eq!(gallery.image_count(), 1);
        assert_eq!(gallery.images[0].kind, MediaKind::Image);
    }

    #[test]
    fn test_image_limit() {
        let mut gallery = MediaGallery::default();
        for n in 0..MAX_IMAGES as u64 {
            gallery
                .add_image(media_id(n), format!("photo-{}.jpg", n), 1024)
                .unwrap();
        }
        let result = gallery.add_image(media_id(99), "one-too-many.jpg", 1024);
        assert!(matches!(result, Err(ListingError::ImageLimitReached(_))));
        assert_eq!(gallery.image_count(), MAX_IMAGES);
    }

    #[test]
    fn test_image_size_cap() {
        let mut gallery = MediaGallery::default();
        let result = gallery.add_image(media_id(1), "huge.png", MAX_IMAGE_BYTES + 1);
        assert!(matches!(result, Err(ListingError::ImageTooLarge { .. })));
        assert_eq!(gallery.image_count(), 0);
    }

    #[test]
    fn test_video_caps() {
        let mut gallery = MediaGallery::default();
        gallery.add_video(media_id(1), "demo.mp4", 1024).unwrap();
        gallery.add_video(media_id(2), "unboxing.mov", 1024).unwrap();

        let result = gallery.add_video(media_id(3), "extra.mp4", 1024);
        assert!(matches!(result, Err(ListingError::VideoLimitReached(_))));

        let mut gallery = MediaGallery::default();
        let result = gallery.add_video(media_id(1), "film.mp4", MAX_VIDEO_BYTES + 1);
        assert!(matches!(result, Err(ListingError::VideoTooLarge { .. })));
    }

    #[test]
    fn test_kind_mismatch_rejected() {
        let mut gallery = MediaGallery::default();
        let result = gallery.add_image(media_id(1), "clip.mp4", 1024);
        assert!(matches!(
            result,
            Err(ListingError::UnsupportedMediaKind { .. })
        ));
        let result = gallery.add_video(media_id(2), "still.png", 1024);
        assert!(matches!(
            result,
            Err(ListingError::UnsupportedMediaKind { .. })
        ));
        let result = gallery.add_image(media_id(3), "notes.txt", 1024);
        assert!(matches!(
            result,
            Err(ListingError::UnsupportedMediaKind { .. })
        ));
    }

    #[test]
    fn test_remove_and_mark_uploaded() {
        let mut gallery = MediaGallery::default();
        gallery.add_image(media_id(1), "a.jpg", 10).unwrap();
        gallery.add_video(media_id(2), "b.mp4", 20).unwrap();

        assert!(gallery.mark_uploaded(&media_id(2), "https://cdn.test/b.mp4"));
        assert_eq!(gallery.pending().count(), 1);

        assert!(gallery.remove(&media_id(1)));
        assert!(!gallery.remove(&media_id(1)));
        assert_eq!(gallery.image_count(), 0);
        assert_eq!(gallery.video_count(), 1);
    }

    #[test]
    fn test_required_images() {
        let mut gallery = MediaGallery::default();
        assert!(!gallery.has_required_images());
        for n in 0..MIN_IMAGES as u64 {
            gallery
                .add_image(media_id(n), format!("photo-{}.jpg", n), 1024)
                .unwrap();
        }
        assert!(gallery.has_required_images());
    }

    #[test]
    fn test_total_bytes() {
        let mut gallery = MediaGallery::default();
        gallery.add_image(media_id(1), "a.jpg", 100).unwrap();
        gallery.add_video(media_id(2), "b.mp4", 250).unwrap();
        assert_eq!(gallery.total_bytes(), 350);
    }

    #[test]
    fn test_kind_inference() {
        assert_eq!(MediaKind::from_file_name("a.JPG"), Some(MediaKind::Image));
        assert_eq!(MediaKind::from_file_name("b.webm"), Some(MediaKind::Video));
        assert_eq!(MediaKind::from_file_name("noext"), None);
        assert_eq!(MediaKind::from_file_name("archive.zip"), None);
    }
}
