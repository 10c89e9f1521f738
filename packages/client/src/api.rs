//! Thin wrapper over the server's HTTP API.

use reqwest::{StatusCode, Url};
use roomchat_server::infrastructure::dto::http::{
    JoinRoomRequestDto, MessageDto, RoomDto, SendMessageRequestDto, SendMessageResponseDto,
};

use crate::error::ClientError;

/// HTTP client bound to one server
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base_url = Url::parse(base_url).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
        if base_url.cannot_be_a_base() || !matches!(base_url.scheme(), "http" | "https") {
            return Err(ClientError::InvalidUrl(base_url.to_string()));
        }
        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
        })
    }

    /// Build `{base}/{segments...}`, percent-encoding each segment
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// WebSocket URL watching `room`
    pub fn ws_url(&self, room: &str) -> Result<String, ClientError> {
        let url = self.endpoint(&["api", "rooms", room, "ws"])?.to_string();
        let ws = match url.strip_prefix("https://") {
            Some(rest) => format!("wss://{rest}"),
            None => match url.strip_prefix("http://") {
                Some(rest) => format!("ws://{rest}"),
                None => return Err(ClientError::InvalidUrl(url)),
            },
        };
        Ok(ws)
    }

    pub async fn health(&self) -> Result<(), ClientError> {
        self.http
            .get(self.endpoint(&["api", "health"])?)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    pub async fn list_rooms(&self) -> Result<Vec<RoomDto>, ClientError> {
        let rooms = self
            .http
            .get(self.endpoint(&["api", "rooms"])?)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(rooms)
    }

    /// Join a room; `None` when the name was blank
    pub async fn join_room(&self, name: &str) -> Result<Option<RoomDto>, ClientError> {
        let response = self
            .http
            .post(self.endpoint(&["api", "rooms"])?)
            .json(&JoinRoomRequestDto {
                name: name.to_string(),
            })
            .send()
            .await?
            .error_for_status()?;
        if response.status() == StatusCode::NO_CONTENT {
            return Ok(None);
        }
        Ok(Some(response.json().await?))
    }

    pub async fn fetch_messages(&self, room: &str) -> Result<Vec<MessageDto>, ClientError> {
        let messages = self
            .http
            .get(self.endpoint(&["api", "rooms", room, "messages"])?)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(messages)
    }

    pub async fn post_message(
        &self,
        room: &str,
        sender: &str,
        text: &str,
    ) -> Result<SendMessageResponseDto, ClientError> {
        let response = self
            .http
            .post(self.endpoint(&["api", "rooms", room, "messages"])?)
            .json(&SendMessageRequestDto {
                sender: sender.to_string(),
                text: text.to_string(),
            })
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(response)
    }

    pub async fn clear_room(&self, room: &str) -> Result<(), ClientError> {
        self.http
            .delete(self.endpoint(&["api", "rooms", room, "messages"])?)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    pub async fn reset(&self) -> Result<(), ClientError> {
        self.http
            .post(self.endpoint(&["api", "reset"])?)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    /// Transcript text of `room`
    pub async fn export(&self, room: &str) -> Result<String, ClientError> {
        let body = self
            .http
            .get(self.endpoint(&["api", "rooms", room, "export"])?)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Ok(body)
    }
}
