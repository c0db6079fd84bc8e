use poise::ChoiceParameter;

use crate::commands::send_chunked;
use crate::session::Role;
use crate::state::Context;

/// Show your conversation so far
#[poise::command(slash_command, guild_only)]
pub async fn history(ctx: Context<'_>) -> Result<(), anyhow::Error> {
    let user_id = ctx.author().id.get();
    let transcript = ctx.data().sessions.transcript(user_id).await;

    if transcript.is_empty() {
        ctx.say(
            "No conversation yet. Pick a user type with `/idia persona`, then ask with `/idia ask`.",
        )
        .await?;
        return Ok(());
    }

    let mut output = String::from("**Your conversation**\n");
    if let Some(persona) = ctx.data().sessions.persona(user_id).await {
        output.push_str(&format!("Selected user type: {}\n", persona.name()));
    }
    output.push('\n');
    for message in &transcript {
        let speaker = match message.role {
            Role::User => "You",
            Role::Assistant => "Assistant",
        };
        output.push_str(&format!("**{}:** {}\n\n", speaker, message.content));
    }

    send_chunked(&ctx, &output).await
}
