/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

pub mod api;
pub mod cancel;
pub mod client;
pub mod comments;
pub mod errors;
mod oauth1;
pub mod pagination;
mod parsers;
pub mod photos;
pub mod properties;
pub mod streamer;
pub mod user;

pub use api::*;
pub use cancel::*;
pub use client::*;
pub use comments::*;
pub use errors::*;
pub use pagination::*;
pub use photos::*;
pub use properties::*;
pub use streamer::{Page, PageStream};
pub use user::*;
