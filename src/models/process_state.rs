//! Process state indicator

/// Three-way state driving how an asynchronous fetch is rendered: a spinner
/// while in flight, the data once populated, or a message when the fetch
/// failed or came back empty.
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessState {
    Loading,
    Done,
    Error(String),
}
