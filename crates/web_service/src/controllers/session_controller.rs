use actix_web::{
    web::{self, Data},
    HttpResponse,
};
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::{
    HistoryResponse, MessageDto, ReplyResponse, SendMessageRequest, SessionCreatedResponse,
};
use crate::server::AppState;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/sessions")
            .route("", web::post().to(create_session))
            .route("/{session_id}/messages", web::post().to(send_message))
            .route("/{session_id}/history", web::get().to(history)),
    );
}

async fn create_session(state: Data<AppState>) -> Result<HttpResponse> {
    let (session_id, greeting) = state.create_session().await;
    Ok(HttpResponse::Created().json(SessionCreatedResponse {
        session_id,
        greeting,
    }))
}

async fn send_message(
    state: Data<AppState>,
    session_id: web::Path<Uuid>,
    body: web::Json<SendMessageRequest>,
) -> Result<HttpResponse> {
    let session = state
        .session(*session_id)
        .await
        .ok_or(ApiError::SessionNotFound(*session_id))?;

    let reply = session.lock().await.reply(&body.message).await;
    Ok(HttpResponse::Ok().json(ReplyResponse::from(reply)))
}

async fn history(state: Data<AppState>, session_id: web::Path<Uuid>) -> Result<HttpResponse> {
    let session = state
        .session(*session_id)
        .await
        .ok_or(ApiError::SessionNotFound(*session_id))?;

    let session = session.lock().await;
    let messages: Vec<MessageDto> = session.history().iter().map(MessageDto::from).collect();
    Ok(HttpResponse::Ok().json(HistoryResponse {
        session_id: *session_id,
        messages,
    }))
}
