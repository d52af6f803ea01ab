//! # Penz Architecture
//!
//! Penz is a **UI-agnostic pens library**: an authoritative in-memory collection
//! of HTML/CSS/JS snippets ("pens") with the query, engagement, and editing
//! semantics of a browser playground. The bundled CLI is just one client of the
//! library, the same way a web front end would be.
//!
//! ## Layers
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Clients (main.rs CLI, view-models in viewmodel.rs)          │
//! │  - The only places that know about terminals or UI state     │
//! └──────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Service facade (service.rs)                                 │
//! │  - Async entry point for every operation                     │
//! │  - Simulates per-operation network latency                   │
//! │  - Owns the collection, the id counter, and the mirror       │
//! └──────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Command layer (commands/*.rs)                               │
//! │  - Pure business logic over the pen collection               │
//! │  - No I/O assumptions, no async                              │
//! └──────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Mirror (store/)                                             │
//! │  - Best-effort write-through persistence, never read         │
//! │    mid-session; FileMirror (production), InMemoryMirror      │
//! │    (testing)                                                 │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The in-memory collection is the system of record for a session. The mirror
//! only matters at the edges: records are written through on create/update/
//! delete, and read back once at startup for cross-session recovery.
//!
//! ## Testing Strategy
//!
//! Command modules carry the lion's share of tests, against `InMemoryMirror`.
//! Timer behavior (latency, debounced auto-save) is tested with tokio's paused
//! clock. The CLI has end-to-end tests in `tests/` driving the real binary
//! against a temporary data dir.
//!
//! ## Module Overview
//!
//! - [`service`]: The async facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: The persistence mirror and its implementations
//! - [`model`]: Core data types (`Pen`, `Author`, `PenDraft`, `PenPatch`)
//! - [`viewmodel`] / [`request`]: Request state machines for UI consumers
//! - [`editor`] / [`autosave`]: Editing sessions with debounced auto-save
//! - [`preview`]: Live preview document composition
//! - [`latency`]: Simulated network latency
//! - [`seed`]: The built-in gallery fixture
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod autosave;
pub mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod latency;
pub mod model;
pub mod preview;
pub mod request;
pub mod seed;
pub mod service;
pub mod store;
pub mod viewmodel;
