//! One user turn: store the message, then let the bot answer.

use crate::{
    infrastructure::dto::http::{MessageDto, SendMessageResponseDto},
    usecase::{BotReplyUseCase, SendMessageUseCase, UseCaseError},
};

use super::{event::RoomEvent, state::AppState};

/// Append the user's message, wait the reply delay, then append the bot reply.
///
/// Watchers of the room see the message, a typing notice and the reply in
/// that order. Blank text stores nothing and produces no events.
pub(crate) async fn post_and_reply(
    state: &AppState,
    room: &str,
    sender: &str,
    text: &str,
) -> Result<SendMessageResponseDto, UseCaseError> {
    let send_usecase = SendMessageUseCase::new(state.store.clone());
    let Some(posted) = send_usecase.execute(room, sender, text).await? else {
        return Ok(SendMessageResponseDto {
            posted: None,
            reply: None,
        });
    };
    state.publish(RoomEvent::MessagePosted(posted.clone()));
    state.publish(RoomEvent::BotTyping(posted.room.clone()));

    tokio::time::sleep(state.reply_delay).await;

    let reply_usecase = BotReplyUseCase::new(state.store.clone(), state.responder.clone());
    let reply = reply_usecase.execute(&posted.room, &posted.sender).await?;
    if let Some(reply) = &reply {
        state.publish(RoomEvent::MessagePosted(reply.clone()));
    }

    Ok(SendMessageResponseDto {
        posted: Some(MessageDto::from(&posted)),
        reply: reply.as_ref().map(MessageDto::from),
    })
}
