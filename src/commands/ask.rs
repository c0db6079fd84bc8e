use tracing::{error, info};

use crate::commands::send_chunked;
use crate::state::Context;

/// Ask a question about IDIA and the Hives
#[poise::command(slash_command, guild_only)]
pub async fn ask(
    ctx: Context<'_>,
    #[description = "Your question"] question: String,
) -> Result<(), anyhow::Error> {
    let user_id = ctx.author().id.get();
    let session = ctx.data().sessions.session(user_id).await;

    // Questions are only dispatched once a user type is chosen. A rejected
    // submission writes nothing to the transcript.
    let Some(persona) = session.persona() else {
        ctx.say("Please select a user type before asking questions: `/idia persona`")
            .await?;
        return Ok(());
    };

    // Acknowledge immediately so the user isn't staring at a loading spinner
    ctx.defer().await?;

    info!(
        user = ctx.author().name,
        ?persona,
        question,
        "Question submitted"
    );

    let result = ctx
        .data()
        .engine
        .respond(&question, Some(persona), session.context())
        .await;

    match result {
        Ok(answer) => {
            ctx.data()
                .sessions
                .record_exchange(user_id, &question, &answer)
                .await;

            info!(answer_len = answer.len(), "Answer ready");
            send_chunked(&ctx, &answer).await
        }
        Err(e) => {
            error!(error = %e, "Generation failed");
            ctx.say(
                "I couldn't reach the answer service just now. Your question wasn't \
                 recorded — please try again in a moment.",
            )
            .await?;
            Ok(())
        }
    }
}
