//! HTTP Handlers

mod addresses;
mod contacts;
mod ping;
mod users;

pub use addresses::*;
pub use contacts::*;
pub use ping::*;
pub use users::*;
