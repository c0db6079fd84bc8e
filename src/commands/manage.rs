use crate::state::Context;

/// Forget your conversation and selected user type
#[poise::command(slash_command, guild_only)]
pub async fn clear(ctx: Context<'_>) -> Result<(), anyhow::Error> {
    ctx.data().sessions.clear(ctx.author().id.get()).await;
    ctx.say("Session cleared. Pick a user type with `/idia persona` to start again.")
        .await?;
    Ok(())
}

/// How to use the assistant
#[poise::command(slash_command)]
pub async fn about(ctx: Context<'_>) -> Result<(), anyhow::Error> {
    ctx.say(
        "**How to Use**\n\
         1. Select your user type (Kid, Adult, or Senior) with `/idia persona`.\n\
         2. Ask questions about IDIA with `/idia ask`: about hours, programs, etc!\n\
         3. The AI will provide information based on your user type and details.\n\n\
         Quick Links:\n\
         * Website: https://theidia.org/",
    )
    .await?;
    Ok(())
}
