//! Host service abstractions for MIRAGE_TERM.
//!
//! The interpreter core never touches the host directly; hosts hand it
//! capabilities through these traits. Desktop implementations using `std`
//! facilities live here too.

pub mod services;

/// Abstraction over the host wall clock.
pub use services::Clock;
/// Default clock implementation using `std::time`.
pub use services::DesktopClock;
/// An observable, cancellable navigation effect scheduled by `exit`.
pub use services::ScheduledNavigation;
/// A broken-down wall-clock timestamp.
pub use services::WallClock;
/// Day of the week derived from a timestamp.
pub use services::Weekday;
