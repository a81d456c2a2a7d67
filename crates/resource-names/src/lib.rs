//! # Resource Names
//!
//! Parse and generate hierarchical resource-name strings against fixed
//! templates with named variable segments, the naming convention of
//! resource-oriented RPC APIs (`/users/{user_id}/books/{book_id}`).
//!
//! ## Features
//!
//! - **Pattern compilation** - a template compiles once into constant and
//!   variable segments and is reused across calls
//! - **Matching** - extract variable segment values from a concrete name
//!   into a map
//! - **Formatting** - render a name from a resolver, in template order
//! - **Field binding** - `#[derive(Bindable)]` associates struct fields with
//!   variable segments through `#[binding("...")]` attributes, both
//!   directions
//! - **Dynamic records** - loosely-typed [`Value`] objects for callers
//!   without a fixed struct shape
//! - **Thread friendly** - compiled patterns are immutable and safe for
//!   concurrent reads
//!
//! ## Quick Start
//!
//! ```rust
//! use resource_names::{Bindable, NamePattern};
//!
//! #[derive(Bindable, Default)]
//! struct Book {
//!     #[binding("user_id")]
//!     user_id: String,
//!     #[binding("book_id")]
//!     book_id: u64,
//! }
//!
//! let pattern = NamePattern::compile("/users/{user_id}/books/{book_id}");
//!
//! // Name -> record
//! let mut book = Book::default();
//! pattern.bind_into("/users/42/books/7", &mut book).unwrap();
//! assert_eq!(book.user_id, "42");
//! assert_eq!(book.book_id, 7);
//!
//! // Record -> name
//! assert_eq!(pattern.render(&book).unwrap(), "/users/42/books/7");
//! ```
//!
//! ## Template Syntax
//!
//! | Template segment | Kind | Behavior |
//! |------------------|----------|-----------------------------------------|
//! | `users` | constant | must match verbatim, case-sensitively |
//! | `{user_id}` | variable | captures the candidate segment's text |
//! | `{}` | constant | braces without a name are taken verbatim |
//!
//! Leading and trailing `/` are ignored; a segment is a variable exactly when
//! it is at least three bytes long and delimited by literal braces. There are
//! no wildcard or repeated segments, and no percent-decoding.
//!
//! ## Error Handling
//!
//! Fallible operations return a closed [`Error`] enum. Matching is
//! all-or-nothing: on failure the caller receives the error alone, never a
//! partially filled parameter map. Binding is deliberately lenient (unbound
//! variables and unconvertible values are skipped), while rendering is
//! strict (every variable segment must resolve); see
//! [`NamePattern::bind_into`] and [`NamePattern::render`].

mod bind;
mod error;
mod pattern;
mod value;

pub use bind::{Bindable, Bindings, SegmentValue};
pub use error::Error;
pub use pattern::{NamePattern, Segment};
pub use value::Value;

/// Derives [`Bindable`] for structs with named fields.
///
/// Each field carrying `#[binding("segment_name")]` is associated with the
/// variable segment of that name; fields without the attribute are ignored.
/// Field types must implement [`SegmentValue`].
pub use resource_names_derive::Bindable;
