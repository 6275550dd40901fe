//! Inbound inline query.

use serde::{Deserialize, Serialize};

use super::user::User;

/// Text typed after `@bot` in any chat, with the user who typed it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineQuery {
    /// Platform id used to answer this query.
    pub id: String,
    pub from: User,
    pub query: String,
}

/// Converts a transport-specific inline query to core [`InlineQuery`].
pub trait ToCoreInlineQuery: Send + Sync {
    fn to_core(&self) -> InlineQuery;
}
