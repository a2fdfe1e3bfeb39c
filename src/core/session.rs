//! Persisted hand-off between wizard steps.
//!
//! The intake steps write their collected state as opaque JSON blobs that the
//! next step reads back, mirroring the browser-local storage of the original
//! flow. There is no schema versioning; both ends must agree on the shape.

use crate::core::profile::TeacherProfile;
use crate::core::video::VideoReference;
use crate::error::{Error, Result};
use std::fs as std_fs;
use std::path::{Path, PathBuf};
use tokio::fs;

const SESSION_DIR: &str = "session";
const PROFILE_FILE: &str = "teacher_profile.json";
const VIDEO_FILE: &str = "video_data.json";

pub struct SessionStore {
    root: PathBuf,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(SESSION_DIR)
    }
}

impl SessionStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn ensure_directory(&self) -> Result<()> {
        ensure_directory(&self.root)
    }

    fn profile_path(&self) -> PathBuf {
        self.root.join(PROFILE_FILE)
    }

    fn video_path(&self) -> PathBuf {
        self.root.join(VIDEO_FILE)
    }

    pub fn profile_exists(&self) -> bool {
        self.profile_path().exists()
    }

    pub fn video_exists(&self) -> bool {
        self.video_path().exists()
    }

    pub async fn save_profile(&self, profile: &TeacherProfile) -> Result<PathBuf> {
        self.ensure_directory()?;
        let path = self.profile_path();
        fs::write(&path, serde_json::to_string_pretty(profile)?).await?;
        Ok(path)
    }

    pub async fn load_profile(&self) -> Result<TeacherProfile> {
        let content = fs::read_to_string(self.profile_path()).await.map_err(|_| {
            Error::custom("No saved teacher profile. Run 'teachspark profile <file>' first.")
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    pub async fn save_video(&self, video: &VideoReference) -> Result<PathBuf> {
        self.ensure_directory()?;
        let path = self.video_path();
        fs::write(&path, serde_json::to_string_pretty(video)?).await?;
        Ok(path)
    }

    pub async fn load_video(&self) -> Result<VideoReference> {
        let content = fs::read_to_string(self.video_path()).await.map_err(|_| {
            Error::custom("No saved video data. Run 'teachspark video <url>' first.")
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Drop any saved session state. The next run starts clean.
    pub fn clear(&self) -> Result<()> {
        for path in [self.profile_path(), self.video_path()] {
            if path.exists() {
                std_fs::remove_file(&path)?;
            }
        }
        Ok(())
    }
}

fn ensure_directory(path: &Path) -> Result<()> {
    std_fs::create_dir_all(path)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        let metadata = std_fs::metadata(path)?;
        let mut permissions = metadata.permissions();
        if permissions.mode() & 0o777 != 0o700 {
            permissions.set_mode(0o700);
            std_fs::set_permissions(path, permissions)?;
        }
    }

    Ok(())
}
