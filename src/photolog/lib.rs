//! # Photolog Architecture
//!
//! Photolog is a **UI-agnostic photo journal library**: every day on an
//! infinitely scrollable calendar can hold zero or more journal entries
//! (image, rating, categories, description), persisted in one flat local
//! blob. The CLI in `main.rs` is just one client of the library.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, wired by main.rs)                      │
//! │  - Parses arguments, renders grids, handles terminal I/O    │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic over the journal                     │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore trait over the entry blob             │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Beside the layers sit the pure core modules an embedding UI builds
//! on directly: the calendar grid builder, the infinite scroll window,
//! and the entry pager. None of them do I/O.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all journal operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`journal`]: Date-keyed entry buckets and the mutation protocols
//! - [`model`]: Core data types (`Entry`, `EntryDraft`, `DayKey`)
//! - [`calendar`]: Pure month-grid arithmetic and labels
//! - [`window`]: Infinite scroll window over a contiguous month run
//! - [`viewer`]: Flattened entry pager behind the day viewer
//! - [`upload`]: Image hosting upload client
//! - [`sample`]: Bundled seed dataset
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod calendar;
pub mod commands;
pub mod config;
pub mod error;
pub mod journal;
pub mod model;
pub mod sample;
pub mod store;
pub mod upload;
pub mod viewer;
pub mod window;
