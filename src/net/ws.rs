//! Thin WebSocket wrapper for the live-chat inbox.
//!
//! A bare reconnect loop: no framing, no acknowledgements. Incoming text
//! that parses as JSON is handed to the chat state; the reconnect delay
//! grows linearly and caps at five seconds. The loop runs until the
//! [`ChatClient`] handle is closed or every sender is dropped. Connection
//! plumbing is browser-only behind the `hydrate` feature.

#[cfg(test)]
#[path = "ws_test.rs"]
mod ws_test;

/// Delay in milliseconds before reconnect attempt `retry` (zero-based):
/// 1 s, 2 s, 3 s, 4 s, then 5 s for every later attempt.
#[must_use]
pub fn reconnect_delay_ms(retry: u32) -> u32 {
    1000u32.saturating_mul(retry.saturating_add(1)).min(5000)
}

/// Why a single connection attempt ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SocketEnd {
    /// The server closed the socket.
    Server,
    /// Opening or running the connection failed.
    Error(String),
    /// Every client-side sender is gone; the page unmounted.
    ChannelClosed,
}

/// Whether the loop should attempt another connection after one ended the
/// given way. An explicit close or a closed outbound channel stops it for
/// good; anything else reconnects.
#[must_use]
pub fn should_reconnect(end: &SocketEnd, closed: bool) -> bool {
    !closed && *end != SocketEnd::ChannelClosed
}

/// Handle to a running chat client: the outbound sender plus a close flag.
/// Clone one copy into an unmount cleanup and call [`ChatClient::close`]
/// there.
#[cfg(feature = "hydrate")]
#[derive(Clone)]
pub struct ChatClient {
    tx: futures::channel::mpsc::UnboundedSender<String>,
    closed: std::rc::Rc<std::cell::Cell<bool>>,
}

#[cfg(feature = "hydrate")]
impl ChatClient {
    /// Queue an outbound message; silently dropped once closed.
    pub fn send(&self, msg: String) {
        let _ = self.tx.unbounded_send(msg);
    }

    /// Stop the socket task. Closing the channel wakes the send half of
    /// the running connection; the flag keeps the loop from reconnecting.
    pub fn close(&self) {
        self.closed.set(true);
        self.tx.close_channel();
    }
}

/// Spawn the chat socket lifecycle as a local async task and return its
/// handle. Messages queued on the handle are forwarded to the server
/// whenever a connection is up.
#[cfg(feature = "hydrate")]
pub fn spawn_chat_client(
    user_type: &str,
    user_id: &str,
    chat: leptos::prelude::RwSignal<crate::state::chat::ChatState>,
) -> ChatClient {
    use futures::channel::mpsc;
    use std::cell::Cell;
    use std::rc::Rc;

    let (tx, rx) = mpsc::unbounded::<String>();
    let closed = Rc::new(Cell::new(false));
    let url = chat_socket_url(user_type, user_id);

    leptos::task::spawn_local(chat_client_loop(url, chat, rx, Rc::clone(&closed)));

    ChatClient { tx, closed }
}

/// Build the socket URL, deriving the scheme and host from the page
/// location unless a base was configured at build time.
#[cfg(feature = "hydrate")]
fn chat_socket_url(user_type: &str, user_id: &str) -> String {
    let base = crate::config::ws_base_url().map_or_else(
        || {
            let location = web_sys::window()
                .and_then(|w| w.location().href().ok())
                .unwrap_or_default();
            let proto = if location.starts_with("https") { "wss" } else { "ws" };
            let host = web_sys::window()
                .and_then(|w| w.location().host().ok())
                .unwrap_or_else(|| "localhost:3000".to_owned());
            format!("{proto}://{host}")
        },
        str::to_owned,
    );
    format!("{base}/ws/{user_type}/{user_id}")
}

/// Main connection loop with reconnect.
#[cfg(feature = "hydrate")]
async fn chat_client_loop(
    url: String,
    chat: leptos::prelude::RwSignal<crate::state::chat::ChatState>,
    rx: futures::channel::mpsc::UnboundedReceiver<String>,
    closed: std::rc::Rc<std::cell::Cell<bool>>,
) {
    use crate::state::chat::ConnectionStatus;
    use leptos::prelude::Update;
    use std::cell::RefCell;
    use std::rc::Rc;

    let rx = Rc::new(RefCell::new(rx));
    let mut retry: u32 = 0;

    loop {
        if closed.get() {
            break;
        }
        chat.update(|c| c.connection_status = ConnectionStatus::Connecting);

        let end = connect_and_run(&url, chat, &rx).await;
        match &end {
            SocketEnd::Server => {
                leptos::logging::log!("chat socket disconnected");
                retry = 0;
            }
            SocketEnd::Error(e) => {
                leptos::logging::warn!("chat socket error: {e}");
            }
            SocketEnd::ChannelClosed => {
                leptos::logging::log!("chat socket closed by client");
            }
        }

        chat.update(|c| c.connection_status = ConnectionStatus::Disconnected);

        if !should_reconnect(&end, closed.get()) {
            break;
        }

        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(
            reconnect_delay_ms(retry),
        )))
        .await;
        retry = retry.saturating_add(1);
    }
}

/// Connect and pump messages until the socket closes or the outbound
/// channel is exhausted.
#[cfg(feature = "hydrate")]
async fn connect_and_run(
    url: &str,
    chat: leptos::prelude::RwSignal<crate::state::chat::ChatState>,
    rx: &std::rc::Rc<std::cell::RefCell<futures::channel::mpsc::UnboundedReceiver<String>>>,
) -> SocketEnd {
    use crate::state::chat::ConnectionStatus;
    use futures::StreamExt;
    use gloo_net::websocket::Message;
    use gloo_net::websocket::futures::WebSocket;
    use leptos::prelude::Update;
    use std::cell::Cell;

    let ws = match WebSocket::open(url) {
        Ok(ws) => ws,
        Err(e) => return SocketEnd::Error(e.to_string()),
    };
    let (mut ws_write, mut ws_read) = ws.split();

    chat.update(|c| c.connection_status = ConnectionStatus::Connected);

    let mut rx_borrow = rx.borrow_mut();
    let channel_closed = Cell::new(false);
    let send_task = async {
        use futures::SinkExt;
        loop {
            match rx_borrow.next().await {
                Some(msg) => {
                    if ws_write.send(Message::Text(msg)).await.is_err() {
                        break;
                    }
                }
                None => {
                    channel_closed.set(true);
                    break;
                }
            }
        }
    };

    let recv_task = async {
        while let Some(msg) = ws_read.next().await {
            match msg {
                Ok(Message::Text(text)) => {
                    if let Ok(value) = serde_json::from_str::<serde_json::Value>(&text) {
                        chat.update(|c| c.push_incoming(&value));
                    }
                }
                Ok(Message::Bytes(_)) => {}
                Err(e) => {
                    leptos::logging::warn!("chat socket recv error: {e}");
                    break;
                }
            }
        }
    };

    futures::future::select(Box::pin(send_task), Box::pin(recv_task)).await;

    if channel_closed.get() {
        SocketEnd::ChannelClosed
    } else {
        SocketEnd::Server
    }
}
