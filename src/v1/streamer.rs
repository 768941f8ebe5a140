/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1::api::decode;
use crate::v1::cancel::Canceler;
use crate::v1::errors::PxError;
use async_stream::try_stream;
use bytes::Bytes;
use futures::Stream;
use log::{debug, warn};
use serde::de::DeserializeOwned;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;
use tokio::sync::mpsc;

/// A single decoded response from a paginated endpoint
pub trait Page: DeserializeOwned + Send + 'static {
    type Item: Send + 'static;

    /// Number of items carried by this page
    fn item_count(&self) -> usize;

    /// The page number this page was requested as
    fn page_number(&self) -> u64;

    fn set_page_number(&mut self, page_number: u64);

    fn into_items(self) -> Vec<Self::Item>;
}

/// What a stream does when the service returns a page with no items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyPageMode {
    /// Hand the empty page to the consumer, then finish
    EmitThenStop,
    /// Finish without handing the empty page over
    StopSilently,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct StreamOptions {
    pub(crate) start_page: u64,
    /// 0 means no upper bound
    pub(crate) max_page_number: u64,
    pub(crate) throttle: Duration,
    pub(crate) on_empty: EmptyPageMode,
}

impl StreamOptions {
    fn is_last_page(&self, page_number: u64) -> bool {
        self.max_page_number > 0 && page_number >= self.max_page_number
    }
}

/// Ordered, single pass sequence of pages produced by a background task.
///
/// A failed fetch or decode shows up as a final `Err` item, after which the
/// stream ends.
#[derive(Debug)]
pub struct PageStream<P> {
    rx: mpsc::Receiver<Result<P, PxError>>,
}

impl<P: Page> PageStream<P> {
    /// Waits for the next page. `None` once the stream is finished.
    pub async fn next_page(&mut self) -> Option<Result<P, PxError>> {
        self.rx.recv().await
    }

    /// Flattens the pages into their individual items
    pub fn items(mut self) -> impl Stream<Item = Result<P::Item, PxError>> {
        try_stream! {
            while let Some(page) = self.rx.recv().await {
                for item in page?.into_items() {
                    yield item
                }
            }
        }
    }
}

impl<P> Stream for PageStream<P> {
    type Item = Result<P, PxError>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.rx.poll_recv(cx)
    }
}

/// Starts the background task that pages through an endpoint.
///
/// `fetch` is called with each page number in turn and returns the raw body for
/// that page.
pub(crate) fn start<P, F, Fut>(
    options: StreamOptions,
    fetch: F,
) -> Result<(PageStream<P>, Canceler), PxError>
where
    P: Page,
    F: FnMut(u64) -> Fut + Send + 'static,
    Fut: Future<Output = Result<Bytes, PxError>> + Send + 'static,
{
    let handle = tokio::runtime::Handle::try_current().map_err(|_| PxError::NoRuntime())?;

    // A single slot so the task never runs ahead of the consumer
    let (tx, rx) = mpsc::channel(1);
    let canceler = Canceler::new();
    handle.spawn(produce(options, fetch, tx, canceler.clone()));

    Ok((PageStream { rx }, canceler))
}

async fn produce<P, F, Fut>(
    options: StreamOptions,
    mut fetch: F,
    tx: mpsc::Sender<Result<P, PxError>>,
    canceler: Canceler,
) where
    P: Page,
    F: FnMut(u64) -> Fut + Send + 'static,
    Fut: Future<Output = Result<Bytes, PxError>> + Send + 'static,
{
    let mut page_number = options.start_page;

    loop {
        // Previous page must be taken before the next one is fetched
        let permit = tokio::select! {
            biased;
            _ = canceler.cancelled() => {
                debug!("Page stream cancelled before page {}", page_number);
                return;
            }
            permit = tx.reserve() => match permit {
                Ok(permit) => permit,
                Err(_) => {
                    debug!("Page stream dropped by consumer before page {}", page_number);
                    return;
                }
            },
        };

        let mut page = match fetch(page_number).await.and_then(|raw| decode::<P>(&raw)) {
            Ok(page) => page,
            Err(err) => {
                warn!("Page {} failed: {}", page_number, err);
                permit.send(Err(err));
                return;
            }
        };
        page.set_page_number(page_number);

        if page.item_count() == 0 {
            debug!("Page {} is empty, page stream finished", page_number);
            if options.on_empty == EmptyPageMode::EmitThenStop {
                permit.send(Ok(page));
            }
            return;
        }

        debug!("Page {} has {} items", page_number, page.item_count());
        permit.send(Ok(page));

        tokio::select! {
            biased;
            _ = canceler.cancelled() => {
                debug!("Page stream cancelled after page {}", page_number);
                return;
            }
            _ = tokio::time::sleep(options.throttle) => {}
        }

        if options.is_last_page(page_number) {
            debug!("Reached max page {}, page stream finished", page_number);
            return;
        }
        page_number += 1;
    }
}
