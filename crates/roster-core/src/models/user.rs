use crate::{FALLBACK_DISPLAY_NAME, Result};

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Assigned once at creation, never changed afterwards.
    pub sync_id: Uuid,
    pub user_name: String,
}

impl User {
    pub fn new(user_name: impl Into<String>) -> Self {
        Self {
            sync_id: Uuid::new_v4(),
            user_name: user_name.into(),
        }
    }

    /// Rebuild a user from its stored columns.
    pub fn from_parts(sync_id: &str, user_name: String) -> Result<Self> {
        Ok(Self {
            sync_id: Uuid::from_str(sync_id)?,
            user_name,
        })
    }

    pub fn display_name(&self) -> &str {
        if self.user_name.is_empty() {
            FALLBACK_DISPLAY_NAME
        } else {
            &self.user_name
        }
    }
}
