//! Shared command handler flows

mod export;

pub use export::finish_export;
