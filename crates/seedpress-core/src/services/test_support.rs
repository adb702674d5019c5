//! In-memory collaborators for service tests.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::{FileDescriptor, FileInfo, MediaAsset};
use crate::ports::{
    Collaborators, ContentModel, ContentStore, CreatedEntry, MediaLibrary, PermissionStore, Role,
    SettingsStore, StoreError,
};

/// In-memory settings store.
#[derive(Default)]
pub struct MemorySettings {
    values: Mutex<HashMap<String, serde_json::Value>>,
}

impl MemorySettings {
    pub fn flag_is_set(&self, key: &str) -> bool {
        matches!(
            self.values.lock().unwrap().get(key),
            Some(serde_json::Value::Bool(true))
        )
    }
}

#[async_trait]
impl SettingsStore for MemorySettings {
    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>, StoreError> {
        Ok(self.values.lock().unwrap().get(key).cloned())
    }

    async fn set(&self, key: &str, value: serde_json::Value) -> Result<(), StoreError> {
        self.values.lock().unwrap().insert(key.to_string(), value);
        Ok(())
    }
}

/// In-memory content store with optional injected failure.
#[derive(Default)]
pub struct MemoryContent {
    entries: Mutex<Vec<(ContentModel, serde_json::Value)>>,
    /// Creations allowed before every further one fails; `None` = unlimited.
    allowed_creations: Mutex<Option<usize>>,
}

impl MemoryContent {
    /// Let `count` creations succeed, then fail all later ones.
    pub fn fail_after(&self, count: usize) {
        *self.allowed_creations.lock().unwrap() = Some(count);
    }

    pub fn count(&self, model: ContentModel) -> usize {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .filter(|(m, _)| *m == model)
            .count()
    }

    pub fn entries(&self, model: ContentModel) -> Vec<serde_json::Value> {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .filter(|(m, _)| *m == model)
            .map(|(_, data)| data.clone())
            .collect()
    }
}

#[async_trait]
impl ContentStore for MemoryContent {
    async fn create(
        &self,
        model: ContentModel,
        data: serde_json::Value,
    ) -> Result<CreatedEntry, StoreError> {
        let mut entries = self.entries.lock().unwrap();
        if let Some(allowed) = *self.allowed_creations.lock().unwrap() {
            if entries.len() >= allowed {
                return Err(StoreError::Storage("injected failure".to_string()));
            }
        }
        entries.push((model, data));
        Ok(CreatedEntry {
            id: entries.len() as i64,
        })
    }
}

/// In-memory media library recording upload calls.
#[derive(Default)]
pub struct MemoryMedia {
    assets: Mutex<Vec<MediaAsset>>,
    uploads: Mutex<Vec<String>>,
}

impl MemoryMedia {
    /// Register an asset as if it had been uploaded in an earlier run.
    pub fn preload_asset(&self, name: &str) {
        let mut assets = self.assets.lock().unwrap();
        let id = assets.len() as i64 + 1;
        assets.push(MediaAsset {
            id,
            name: name.to_string(),
            url: format!("/uploads/{name}"),
            mime: "image/png".to_string(),
            size_bytes: 1,
        });
    }

    pub fn upload_count(&self) -> usize {
        self.uploads.lock().unwrap().len()
    }

    pub fn uploaded_names(&self) -> Vec<String> {
        self.uploads.lock().unwrap().clone()
    }
}

#[async_trait]
impl MediaLibrary for MemoryMedia {
    async fn find_by_name(&self, name: &str) -> Result<Option<MediaAsset>, StoreError> {
        Ok(self
            .assets
            .lock()
            .unwrap()
            .iter()
            .find(|asset| asset.name == name)
            .cloned())
    }

    async fn upload(
        &self,
        file: FileDescriptor,
        info: FileInfo,
    ) -> Result<Vec<MediaAsset>, StoreError> {
        self.uploads.lock().unwrap().push(info.name.clone());
        let mut assets = self.assets.lock().unwrap();
        let asset = MediaAsset {
            id: assets.len() as i64 + 1,
            name: info.name,
            url: format!("/uploads/{}", file.original_file_name),
            mime: file.mime,
            size_bytes: i64::try_from(file.size_bytes).unwrap_or(i64::MAX),
        };
        assets.push(asset.clone());
        Ok(vec![asset])
    }
}

/// In-memory permission store recording created actions.
#[derive(Default)]
pub struct MemoryPermissions {
    actions: Mutex<Vec<String>>,
}

impl MemoryPermissions {
    pub fn created_actions(&self) -> Vec<String> {
        self.actions.lock().unwrap().clone()
    }
}

#[async_trait]
impl PermissionStore for MemoryPermissions {
    async fn find_role_by_kind(&self, kind: &str) -> Result<Role, StoreError> {
        Ok(Role {
            id: 1,
            kind: kind.to_string(),
        })
    }

    async fn create_permission(&self, action: &str, _role_id: i64) -> Result<(), StoreError> {
        self.actions.lock().unwrap().push(action.to_string());
        Ok(())
    }
}

/// A full in-memory world plus a temp directory acting as the bundle root.
pub struct TestWorld {
    pub settings: Arc<MemorySettings>,
    pub content: Arc<MemoryContent>,
    pub media: Arc<MemoryMedia>,
    pub permissions: Arc<MemoryPermissions>,
    root: tempfile::TempDir,
}

impl TestWorld {
    pub fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(root.path().join("uploads")).unwrap();
        Self {
            settings: Arc::new(MemorySettings::default()),
            content: Arc::new(MemoryContent::default()),
            media: Arc::new(MemoryMedia::default()),
            permissions: Arc::new(MemoryPermissions::default()),
            root,
        }
    }

    pub fn collaborators(&self) -> Collaborators {
        Collaborators::new(
            self.settings.clone(),
            self.content.clone(),
            self.media.clone(),
            self.permissions.clone(),
        )
    }

    pub fn bundle_root(&self) -> PathBuf {
        self.root.path().to_path_buf()
    }

    pub fn uploads_dir(&self) -> PathBuf {
        self.root.path().join("uploads")
    }

    pub fn write_upload_file(&self, file_name: &str, bytes: &[u8]) {
        std::fs::write(self.uploads_dir().join(file_name), bytes).unwrap();
    }
}
