//! Machine trait for pure event interpretation.
//!
//! Machines interpret facts about what happened and decide on intent. The
//! `decide` method is synchronous and performs no IO; executing the returned
//! commands is the job of an effect.
//!
//! # Key Properties
//!
//! - **Pure decisions**: No IO, no async, no hidden coupling to a persistence lifecycle
//! - **Ordered output**: One event may yield several commands, executed in order
//! - **Empty output is normal**: Most events are ignored by most machines

use std::fmt::Debug;

/// A state machine that interprets events and decides on commands.
///
/// # Example
///
/// ```rust
/// use questions_core::common::Machine;
///
/// #[derive(Debug)]
/// enum Ping {
///     Sent,
///     Ignored,
/// }
///
/// #[derive(Debug, PartialEq)]
/// struct Pong;
///
/// struct PingMachine;
///
/// impl Machine for PingMachine {
///     type Event = Ping;
///     type Command = Pong;
///
///     fn decide(&mut self, event: &Ping) -> Vec<Pong> {
///         match event {
///             Ping::Sent => vec![Pong],
///             Ping::Ignored => Vec::new(),
///         }
///     }
/// }
///
/// assert_eq!(PingMachine.decide(&Ping::Sent), vec![Pong]);
/// assert!(PingMachine.decide(&Ping::Ignored).is_empty());
/// ```
pub trait Machine: Send + Sync + 'static {
    /// The event type this machine handles.
    type Event: Debug;

    /// The command type this machine can emit.
    type Command: Debug;

    /// Process an event and return the commands it calls for, in execution order.
    ///
    /// # Guarantees
    ///
    /// - Called synchronously (no async)
    /// - Called serially per question (callers preserve transition order)
    fn decide(&mut self, event: &Self::Event) -> Vec<Self::Command>;

    /// Human-readable name for logging.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
