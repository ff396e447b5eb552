//! Folio core library.
//!
//! Domain logic for the portfolio site: the validated content table, the
//! page-load contract, the section composer and the renderers that populate
//! host documents. Nothing here performs I/O; the HTTP surface lives in
//! `folio-api`.

pub mod assets;
pub mod composer;
pub mod content;
pub mod document;
pub mod dom;
pub mod error;
pub mod layout;
pub mod markup;
pub mod renderer;
pub mod reveal;
pub mod selected_work;
pub mod template;
pub mod types;
