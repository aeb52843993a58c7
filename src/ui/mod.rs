// Presentation layer.
// Turns lookup results into ratatui lines and widgets.

pub mod badge;

pub use badge::{BadgeKind, DisplayState, MetadataBadge, format_count};
