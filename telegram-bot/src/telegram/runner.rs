//! Dispatcher runner: routes `/start`, `/help` and inline queries from the polling loop to
//! [`BotHandlers`]. Inline queries are answered in spawned tasks so polling never waits on matching.

use teloxide::dispatching::HandlerExt;
use teloxide::prelude::*;
use teloxide::types::InlineQuery as TgInlineQuery;
use tracing::{error, info, instrument};

use super::adapters::{TelegramChatWrapper, TelegramInlineQueryWrapper};
use crate::core::{ToCoreChat, ToCoreInlineQuery};
use crate::handlers::{BotHandlers, Command};

async fn command_endpoint(msg: Message, cmd: Command, handlers: BotHandlers) -> ResponseResult<()> {
    let chat = TelegramChatWrapper(&msg.chat).to_core();
    if let Err(e) = handlers.commands.handle(&chat, &cmd).await {
        error!(error = %e, chat_id = chat.id, "Command handler failed");
    }
    Ok(())
}

async fn inline_query_endpoint(query: TgInlineQuery, handlers: BotHandlers) -> ResponseResult<()> {
    let core_query = TelegramInlineQueryWrapper(&query).to_core();

    // Fire and forget: no ordering between in-flight queries.
    tokio::spawn(async move {
        if let Err(e) = handlers.inline.handle(&core_query).await {
            error!(error = %e, user_id = core_query.from.id, "Inline query handler failed");
        }
    });

    Ok(())
}

/// Runs the polling dispatcher until Ctrl-C.
#[instrument(skip(bot, handlers))]
pub async fn run_dispatcher(bot: teloxide::Bot, handlers: BotHandlers) {
    let schema = dptree::entry()
        .branch(
            Update::filter_message()
                .filter_command::<Command>()
                .endpoint(command_endpoint),
        )
        .branch(Update::filter_inline_query().endpoint(inline_query_endpoint));

    info!("Starting dispatcher (polling)");

    Dispatcher::builder(bot, schema)
        .dependencies(dptree::deps![handlers])
        .default_handler(|_upd| async {})
        .error_handler(LoggingErrorHandler::with_custom_text(
            "An error has occurred in the dispatcher",
        ))
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    info!("Dispatcher stopped");
}
