use std::time::Duration;

use futures::stream::{self, BoxStream, SplitSink, SplitStream};
use futures::{SinkExt, StreamExt};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::client::IntoClientRequest;
use tokio_tungstenite::tungstenite::http::HeaderValue;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};

use crate::infra::graphql::client::{GraphQlErrorEntry, GraphQlResponse};
use crate::usecase::ports::source::SourceError;

pub const SUBPROTOCOL: &str = "graphql-transport-ws";
const SUBSCRIPTION_ID: &str = "1";

type Socket = WebSocketStream<MaybeTlsStream<TcpStream>>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubscribePayload {
    pub query: String,
    pub variables: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    ConnectionInit {
        #[serde(skip_serializing_if = "Option::is_none")]
        payload: Option<Value>,
    },
    Subscribe {
        id: String,
        payload: SubscribePayload,
    },
    Pong {
        #[serde(skip_serializing_if = "Option::is_none")]
        payload: Option<Value>,
    },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    ConnectionAck {},
    Next {
        id: String,
        payload: GraphQlResponse,
    },
    Error {
        id: String,
        payload: Vec<GraphQlErrorEntry>,
    },
    Complete {
        id: String,
    },
    Ping {
        #[serde(default)]
        payload: Option<Value>,
    },
    Pong {},
}

impl ClientMessage {
    fn to_message(&self) -> Result<Message, SourceError> {
        Ok(Message::Text(serde_json::to_string(self)?))
    }
}

fn socket_error(err: impl std::fmt::Display) -> SourceError {
    SourceError::Socket(err.to_string())
}

#[derive(Debug)]
pub enum Step {
    Emit(Result<Value, SourceError>),
    Reply(ClientMessage),
    Finish(Option<SourceError>),
    Skip,
}

pub fn step_for(message: ServerMessage) -> Step {
    match message {
        ServerMessage::Next { id, .. }
        | ServerMessage::Error { id, .. }
        | ServerMessage::Complete { id }
            if id != SUBSCRIPTION_ID =>
        {
            log::debug!("ignoring frame for subscription {id}");
            Step::Skip
        }
        ServerMessage::Next { payload, .. } => Step::Emit(payload.into_data()),
        ServerMessage::Error { payload, .. } => Step::Finish(Some(SourceError::GraphQl(
            payload.into_iter().map(|entry| entry.message).collect(),
        ))),
        ServerMessage::Complete { .. } => Step::Finish(None),
        ServerMessage::Ping { payload } => Step::Reply(ClientMessage::Pong { payload }),
        ServerMessage::ConnectionAck {} | ServerMessage::Pong {} => Step::Skip,
    }
}

struct Subscription {
    sink: SplitSink<Socket, Message>,
    frames: SplitStream<Socket>,
    done: bool,
}

impl Subscription {
    async fn next_payload(&mut self) -> Option<Result<Value, SourceError>> {
        if self.done {
            return None;
        }
        while let Some(frame) = self.frames.next().await {
            let text = match frame {
                Ok(Message::Text(text)) => text,
                Ok(Message::Close(_)) => break,
                Ok(_) => continue,
                Err(err) => {
                    self.done = true;
                    return Some(Err(socket_error(err)));
                }
            };
            let message = match serde_json::from_str::<ServerMessage>(&text) {
                Ok(message) => message,
                Err(err) => {
                    log::warn!("ignoring unreadable subscription frame: {err}");
                    continue;
                }
            };
            match step_for(message) {
                Step::Emit(payload) => return Some(payload),
                Step::Reply(reply) => {
                    if let Err(err) = self.send(&reply).await {
                        self.done = true;
                        return Some(Err(err));
                    }
                }
                Step::Finish(error) => {
                    self.done = true;
                    return error.map(Err);
                }
                Step::Skip => {}
            }
        }
        log::debug!("subscription socket closed");
        self.done = true;
        None
    }

    async fn send(&mut self, message: &ClientMessage) -> Result<(), SourceError> {
        self.sink
            .send(message.to_message()?)
            .await
            .map_err(socket_error)
    }
}

async fn wait_for_ack(sub: &mut Subscription) -> Result<(), SourceError> {
    while let Some(frame) = sub.frames.next().await {
        let text = match frame.map_err(socket_error)? {
            Message::Text(text) => text,
            Message::Close(_) => break,
            _ => continue,
        };
        match serde_json::from_str::<ServerMessage>(&text)? {
            ServerMessage::ConnectionAck { .. } => return Ok(()),
            ServerMessage::Ping { payload } => sub.send(&ClientMessage::Pong { payload }).await?,
            other => {
                return Err(SourceError::Protocol(format!(
                    "expected connection_ack, got {other:?}"
                )))
            }
        }
    }
    Err(SourceError::Protocol(
        "socket closed before connection_ack".to_string(),
    ))
}

pub async fn subscribe(
    url: &str,
    query: &str,
    variables: Value,
    handshake_timeout: Duration,
) -> Result<BoxStream<'static, Result<Value, SourceError>>, SourceError> {
    let mut request = url.into_client_request().map_err(socket_error)?;
    request
        .headers_mut()
        .insert("Sec-WebSocket-Protocol", HeaderValue::from_static(SUBPROTOCOL));

    let (socket, _) = tokio::time::timeout(handshake_timeout, connect_async(request))
        .await
        .map_err(|_| socket_error(format!("connecting to {url} timed out")))?
        .map_err(socket_error)?;
    let (sink, frames) = socket.split();
    let mut sub = Subscription {
        sink,
        frames,
        done: false,
    };

    sub.send(&ClientMessage::ConnectionInit { payload: None })
        .await?;
    tokio::time::timeout(handshake_timeout, wait_for_ack(&mut sub))
        .await
        .map_err(|_| SourceError::Protocol("timed out waiting for connection_ack".to_string()))??;
    sub.send(&ClientMessage::Subscribe {
        id: SUBSCRIPTION_ID.to_string(),
        payload: SubscribePayload {
            query: query.to_string(),
            variables,
        },
    })
    .await?;
    log::debug!("subscribed to {url}");

    let payloads = stream::unfold(sub, |mut sub| async move {
        sub.next_payload().await.map(|payload| (payload, sub))
    });
    Ok(payloads.boxed())
}
