mod ask;
mod history;
mod manage;
mod persona;

use crate::state::Context;

/// IDIA Chatbot Assistant
#[poise::command(
    slash_command,
    subcommands(
        "persona::persona",
        "ask::ask",
        "history::history",
        "manage::clear",
        "manage::about"
    )
)]
pub async fn idia(_ctx: Context<'_>) -> Result<(), anyhow::Error> {
    Ok(())
}

/// Send a message in Discord-safe chunks (max 1990 chars).
/// Uses ctx.say() for all chunks — poise routes follow-ups through the
/// interaction webhook, which doesn't require Send Messages channel permission.
pub(crate) async fn send_chunked(ctx: &Context<'_>, text: &str) -> Result<(), anyhow::Error> {
    let mut remaining = text;
    while !remaining.is_empty() {
        let chunk_len = remaining.len().min(1990);
        let split_at = if chunk_len < remaining.len() {
            remaining[..chunk_len]
                .rfind('\n')
                .or_else(|| remaining[..chunk_len].rfind(' '))
                .map(|i| i + 1)
                .unwrap_or(chunk_len)
        } else {
            chunk_len
        };
        let chunk = &remaining[..split_at];
        remaining = &remaining[split_at..];

        ctx.say(chunk).await?;
    }
    Ok(())
}
