//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! Adapters are thin translators between domain documents and their stored
//! representation. They contain no business logic.

pub mod persistence;
