use poise::ChoiceParameter;
use tracing::info;

use crate::chat::prompt::Persona;
use crate::state::Context;

/// Select your user type
#[poise::command(slash_command, guild_only)]
pub async fn persona(
    ctx: Context<'_>,
    #[description = "Who the assistant is talking to"] persona: Persona,
) -> Result<(), anyhow::Error> {
    let user_id = ctx.author().id.get();
    ctx.data().sessions.set_persona(user_id, persona).await;

    info!(user = ctx.author().name, ?persona, "Persona selected");

    ctx.say(format!(
        "Selected user type: **{}**. Ask away with `/idia ask`.",
        persona.name()
    ))
    .await?;
    Ok(())
}
