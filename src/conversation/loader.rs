// Export package loader
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::{debug, info};

use super::model::{Conversation, UserRecord};
use crate::error::{ExplorerError, Result};

/// Parsed contents of a data export
#[derive(Debug, Clone)]
pub struct ExportPackage {
    pub user: UserRecord,
    pub conversations: Vec<Conversation>,
}

impl ExportPackage {
    /// Load `user.json` and `conversations.json`, reading both files concurrently
    pub async fn load(user_path: &Path, conversations_path: &Path) -> Result<Self> {
        let (user, conversations) = tokio::try_join!(
            read_user(user_path),
            read_conversations(conversations_path)
        )?;

        info!(
            conversations = conversations.len(),
            "Loaded export package"
        );

        Ok(Self {
            user,
            conversations,
        })
    }
}

pub async fn read_user(path: &Path) -> Result<UserRecord> {
    read_json(path).await
}

pub async fn read_conversations(path: &Path) -> Result<Vec<Conversation>> {
    read_json(path).await
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    debug!(path = %path.display(), "Reading");
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ExplorerError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

    serde_json::from_str(&content).map_err(|source| ExplorerError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
