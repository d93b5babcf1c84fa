//! # Phonebook Architecture
//!
//! Phonebook is a small contact directory: six fixed string fields per
//! record, persisted as one CSV file, driven from an interactive terminal
//! menu. The library holds everything except the terminal itself.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Menu loop, prompts, printing                             │
//! │  - The ONLY place that reads stdin or writes stdout         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Holds session state (page size)                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per action, returns `CmdResult`               │
//! │  - Uses matcher, pagination                                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait: load all / save all                     │
//! │  - FileStore (CSV), InMemoryStore (testing)                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Record identity
//!
//! Records carry no identifier. A search hit ([`model::ListedRecord`])
//! remembers its position in the set it was loaded from; edit and delete
//! reload the set and use that position if the record there is unchanged,
//! else the first record with identical contents.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each menu action
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Field`, `Record`, `ListedRecord`
//! - [`matcher`]: Case-insensitive per-field prefix search
//! - [`pagination`]: `PageSize` and page slicing
//! - [`table`]: Aligned text table rendering
//! - [`config`]: Configuration file
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod matcher;
pub mod model;
pub mod pagination;
pub mod store;
pub mod table;
