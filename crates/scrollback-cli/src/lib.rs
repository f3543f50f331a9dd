// NOTE: Rendering Architecture Rationale
//
// Why two fidelity modes (compact default, full on demand)?
// - Sessions routinely contain hundreds of parts; full detail drowns the signal
// - Compact shows *what was asked* (commands, files), never bulky results
// - Full mode is for deep inspection and still withholds raw tool outputs
//
// Why is the mode an explicit parameter (not process-global state)?
// - Rendering stays a pure function of (part, mode): trivially testable
// - A single invocation can mix modes (user text always renders full;
//   single-message inspection forces full regardless of the session toggle)

mod args;
mod commands;
mod handlers;
pub mod presentation;

pub use args::{Cli, Commands};
pub use commands::run;
