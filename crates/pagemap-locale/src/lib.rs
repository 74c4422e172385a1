//! Locale resolution for pagemap navigation trees.
//!
//! This crate provides:
//! - [`LocaleResolver`]: one validated [`NavTree`](pagemap_tree::NavTree) per
//!   locale, resolving `(locale, route)` requests with fallback to a default
//!   locale
//! - [`NavigationContext`]: the resolved bundle handed to rendering
//! - [`NavStore`]: a shared snapshot that can be rebuilt and swapped while
//!   requests are being served
//!
//! # Quick Start
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use pagemap_locale::LocaleResolver;
//! use pagemap_tree::{LocaleInfo, NavTree};
//!
//! let en = NavTree::from_json(
//!     LocaleInfo::new("en", "English"),
//!     r#"[{"name": "zustand", "route": "/middlewares/zustand", "title": "zustand"}]"#,
//! )?;
//! let ko = NavTree::from_json(LocaleInfo::new("ko", "한국어"), "[]")?;
//!
//! let mut resolver = LocaleResolver::new("en");
//! resolver.register(en)?;
//! resolver.register(ko)?;
//!
//! let resolution = resolver.resolve("ko", "/middlewares/zustand")?;
//! assert!(resolution.is_fallback());
//! assert!(!resolution.context().translation_available);
//! # Ok(())
//! # }
//! ```

mod context;
mod error;
mod resolver;
mod store;

pub use context::{NavigationContext, Resolution};
pub use error::{RegisterError, ResolveError};
pub use resolver::LocaleResolver;
pub use store::NavStore;
