//! Chat identity type.

use serde::{Deserialize, Serialize};

/// Chat (channel or private) identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}

/// Converts a transport-specific chat type to core [`Chat`].
pub trait ToCoreChat: Send + Sync {
    fn to_core(&self) -> Chat;
}
