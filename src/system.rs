/// Actions represent user intentions. They correspond one-to-one with key
/// presses, and are the things that users can configure key maps for. Each
/// action is passed to the root component (`App`), which forwards it to the
/// button row and from there to the focused button.
pub mod action;

/// Events represent things that happen within the program. Events are emitted
/// by components as a result of handling an action, a raw terminal event, or
/// another event. Every component receives every event.
pub mod event;

/// Messages represent direct imperative communications between components.
/// Unlike events, messages are tagged with a recipient component, and are only
/// handled by that component.
pub mod message;

/// Signal utilities including the Signal enum and `SignalQueue` for managing
/// the communication between components in the event-driven system.
pub mod signal;

pub use signal::Signal;
