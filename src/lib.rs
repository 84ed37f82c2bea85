//! KIKO Library
//!
//! Backend for the KIKO moodboard generator: the HTTP proxy server, chat
//! transcript storage, and the canvas view-state model used by the editor.

pub mod canvas;
pub mod server;
pub mod services;
pub mod storage;
pub mod types;
