//! Network boundary: REST API helpers, endpoint table, wire types, and the
//! live-chat WebSocket client.

pub mod api;
pub mod endpoints;
pub mod types;
pub mod ws;
