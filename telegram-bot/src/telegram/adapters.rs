//! Adapters from Telegram (teloxide) types to core types.

use crate::core::{Chat, InlineQuery, ToCoreChat, ToCoreInlineQuery, ToCoreUser, User};

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

/// Wraps a teloxide Chat for conversion to core [`Chat`].
pub struct TelegramChatWrapper<'a>(pub &'a teloxide::types::Chat);

impl<'a> ToCoreChat for TelegramChatWrapper<'a> {
    fn to_core(&self) -> Chat {
        Chat {
            id: self.0.id.0,
            chat_type: format!("{:?}", self.0.kind),
        }
    }
}

/// Wraps a teloxide InlineQuery for conversion to core [`InlineQuery`].
pub struct TelegramInlineQueryWrapper<'a>(pub &'a teloxide::types::InlineQuery);

impl<'a> ToCoreInlineQuery for TelegramInlineQueryWrapper<'a> {
    fn to_core(&self) -> InlineQuery {
        InlineQuery {
            id: self.0.id.to_string(),
            from: TelegramUserWrapper(&self.0.from).to_core(),
            query: self.0.query.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// **Test: TelegramUserWrapper converts teloxide User to core User with correct id, username, first_name, last_name.**
    #[test]
    fn test_telegram_user_wrapper_to_core() {
        let user = teloxide::types::User {
            id: teloxide::types::UserId(123),
            is_bot: false,
            first_name: "Test".to_string(),
            last_name: Some("User".to_string()),
            username: Some("testuser".to_string()),
            language_code: Some("en".to_string()),
            is_premium: false,
            added_to_attachment_menu: false,
        };

        let core_user = TelegramUserWrapper(&user).to_core();

        assert_eq!(core_user.id, 123);
        assert_eq!(core_user.username, Some("testuser".to_string()));
        assert_eq!(core_user.first_name, Some("Test".to_string()));
        assert_eq!(core_user.last_name, Some("User".to_string()));
    }
}
