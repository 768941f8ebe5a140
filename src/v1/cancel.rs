/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use log::debug;
use tokio_util::sync::CancellationToken;

/// Stops a page stream from fetching any further pages.
///
/// Cancelling is cooperative: a page that is already being fetched is still
/// delivered, but no new fetch is started afterwards. Calling [`Canceler::cancel`]
/// more than once has no further effect.
#[derive(Debug, Clone, Default)]
pub struct Canceler {
    token: CancellationToken,
}

impl Canceler {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Signals the stream to stop
    pub fn cancel(&self) {
        if !self.token.is_cancelled() {
            debug!("Page stream cancel requested");
        }
        self.token.cancel();
    }

    /// Returns true once [`Canceler::cancel`] has been called
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    pub(crate) async fn cancelled(&self) {
        self.token.cancelled().await
    }
}
