//! Page command definitions.
//!
//! These types define the interface between the Core and the Shell for page
//! interactions the HTTP capability cannot express: modal confirmation
//! prompts and one-shot delays (the post-save reload timer).

use crux_core::{capability::Operation, command, Command};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

// Operations that the Shell needs to perform on the page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum PageOperation {
    /// Ask the user to confirm an action; a browser shell maps this to
    /// `window.confirm(message)`
    Confirm { message: String },
    /// Resolve after the given delay has elapsed
    Delay { duration_ms: u64 },
}

// The output from page operations (shell tells us what happened)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum PageOutput {
    Confirmed(bool),
    Elapsed,
}

impl Operation for PageOperation {
    type Output = PageOutput;
}

/// Command-based page API
pub struct Page<Effect, Event> {
    _effect: PhantomData<Effect>,
    _event: PhantomData<Event>,
}

impl<Effect, Event> Page<Effect, Event>
where
    Effect: Send + From<crux_core::Request<PageOperation>> + 'static,
    Event: Send + 'static,
{
    /// Ask the user to confirm an action
    pub fn confirm(message: impl Into<String>) -> RequestBuilder<Effect, Event> {
        RequestBuilder::new(PageOperation::Confirm {
            message: message.into(),
        })
    }

    /// Wait for the given number of milliseconds
    pub fn delay(duration_ms: u64) -> RequestBuilder<Effect, Event> {
        RequestBuilder::new(PageOperation::Delay { duration_ms })
    }
}

/// Request builder for page operations
#[must_use]
pub struct RequestBuilder<Effect, Event> {
    operation: PageOperation,
    _effect: PhantomData<Effect>,
    _event: PhantomData<fn() -> Event>,
}

impl<Effect, Event> RequestBuilder<Effect, Event>
where
    Effect: Send + From<crux_core::Request<PageOperation>> + 'static,
    Event: Send + 'static,
{
    fn new(operation: PageOperation) -> Self {
        Self {
            operation,
            _effect: PhantomData,
            _event: PhantomData,
        }
    }

    /// Build the request into a Command RequestBuilder
    pub fn build(
        self,
    ) -> command::RequestBuilder<Effect, Event, impl std::future::Future<Output = PageOutput>>
    {
        command::RequestBuilder::new(move |ctx| async move {
            Command::request_from_shell(self.operation)
                .into_future(ctx)
                .await
        })
    }
}
