/// Browser capability layer
///
/// This module groups the narrow "page" capability the adapters
/// consume:
/// - `page`:    the `Page` trait and its error type
/// - `dom`:     owned element handles with scoped sub-selection
/// - `session`: the live HTTP-backed implementation
///
/// Design notes:
/// - Adapters MUST interact with sources exclusively through the
///   `Page` trait so they can be driven from fixture pages in tests
/// - The core does not distinguish network, render or timeout
///   failures; every failure is "this step failed, stop this
///   adapter's loop"
pub mod page;
pub mod dom;
pub mod session;

pub use page::{Page, PageError};
pub use dom::Element;
pub use session::BrowserSession;
