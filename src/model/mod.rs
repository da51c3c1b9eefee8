//! Document model types for knowledge-base rendering.
//!
//! This module defines the intermediate representation that bridges line
//! classification and page layout. A source document becomes an ordered
//! sequence of [`DocumentBlock`]s; each block kind maps to exactly one
//! [`StyleProfile`] in the [`StyleSheet`] handed to the renderer.

mod block;
mod style;

pub use block::{BlockKind, DocumentBlock, Span};
pub use style::{Alignment, StyleProfile, StyleSheet, LINK_COLOR};
