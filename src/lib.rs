//! Declare typed environment variables, load them in one pass and report
//! every problem at once.
//!
//! ```no_run
//! use envreg::Registry;
//!
//! let mut registry = Registry::new();
//! let address = registry.string("BIND_ADDRESS", true, "", "bind address for server");
//! let port = registry.int("BIND_PORT", false, 9090, "bind port for the server");
//!
//! if let Err(e) = registry.parse() {
//!     eprintln!("{}", e);
//!     std::process::exit(1);
//! }
//! println!("{}:{}", address.get(), port.get());
//! ```

mod binding;
pub mod cli;
mod error;
pub mod logging;
mod registry;
mod source;
mod var;

pub use binding::Binding;
pub use error::{ParseError, VarError};
pub use registry::{Registry, HELP_HEADER};
pub use source::{Lookup, ProcessEnv};
pub use var::{Kind, Var};
