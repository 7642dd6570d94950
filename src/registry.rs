//! Variable registry, parse pass and help listing

use crate::binding::Binding;
use crate::error::ParseError;
use crate::source::{Lookup, ProcessEnv};
use crate::var::{Slot, Var};
use log::{debug, info, warn};
use std::fmt::Write;

/// First line of the help listing
pub const HELP_HEADER: &str = "Environment variables:";

/// Ordered set of declared variables.
///
/// Declare every variable first, then call [`Registry::parse`]. Registration
/// order is kept for both parsing and the help listing.
#[derive(Debug, Default)]
pub struct Registry {
    vars: Vec<Var>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a string variable
    pub fn string(&mut self, name: &str, required: bool, default: &str, help: &str) -> Binding<String> {
        let cell = Binding::new();
        self.register(
            name,
            required,
            help,
            Slot::String {
                default: default.to_string(),
                cell: cell.clone(),
            },
        );
        cell
    }

    /// Declare an integer variable
    pub fn int(&mut self, name: &str, required: bool, default: isize, help: &str) -> Binding<isize> {
        let cell = Binding::new();
        self.register(
            name,
            required,
            help,
            Slot::Int {
                default,
                cell: cell.clone(),
            },
        );
        cell
    }

    /// Declare a floating point variable
    pub fn float64(&mut self, name: &str, required: bool, default: f64, help: &str) -> Binding<f64> {
        let cell = Binding::new();
        self.register(
            name,
            required,
            help,
            Slot::Float64 {
                default,
                cell: cell.clone(),
            },
        );
        cell
    }

    /// Declare a boolean variable
    pub fn bool(&mut self, name: &str, required: bool, default: bool, help: &str) -> Binding<bool> {
        let cell = Binding::new();
        self.register(
            name,
            required,
            help,
            Slot::Bool {
                default,
                cell: cell.clone(),
            },
        );
        cell
    }

    fn register(&mut self, name: &str, required: bool, help: &str, slot: Slot) {
        if self.vars.iter().any(|var| var.name() == name) {
            warn!("Environment variable {} is declared more than once", name);
        }
        self.vars.push(Var::new(name, required, help, slot));
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Declared variables in registration order
    pub fn vars(&self) -> impl Iterator<Item = &Var> {
        self.vars.iter()
    }

    /// Forget every declared variable. Bindings already handed out keep
    /// their last value.
    pub fn clear(&mut self) {
        self.vars.clear();
    }

    /// Load every variable from the process environment
    pub fn parse(&mut self) -> Result<(), ParseError> {
        self.parse_from(&ProcessEnv)
    }

    /// Load every variable from `source`.
    ///
    /// Each variable is attempted exactly once, whatever happened to the ones
    /// before it. An unset variable and one set to the empty string behave
    /// the same: the default is applied, or the variable is reported missing
    /// if it is required.
    pub fn parse_from<L: Lookup + ?Sized>(&mut self, source: &L) -> Result<(), ParseError> {
        let mut failures = Vec::new();
        let mut defaulted = 0;

        for var in &mut self.vars {
            let raw = source.lookup(var.name()).unwrap_or_default();
            match var.load(raw) {
                Ok(true) => {
                    debug!("{} ({}) not set, using default '{}'", var.name(), var.kind(), var.default_string());
                    defaulted += 1;
                }
                Ok(false) => {
                    debug!("{} ({}) loaded from environment", var.name(), var.kind());
                }
                Err(e) => {
                    warn!("{}", e);
                    failures.push(e);
                }
            }
        }

        if !failures.is_empty() {
            return Err(ParseError::new(failures));
        }

        info!(
            "Loaded {} environment variables ({} from defaults)",
            self.vars.len(),
            defaulted
        );
        Ok(())
    }

    /// Human readable listing of every declared variable
    pub fn help(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", HELP_HEADER);

        for var in &self.vars {
            let default = var.default_string();
            if default.is_empty() {
                let _ = writeln!(out, "  {} no default", var.name());
            } else {
                let _ = writeln!(out, "  {} default: '{}'", var.name(), default);
            }
            if !var.help().is_empty() {
                let _ = writeln!(out, "      {}", var.help());
            }
            out.push('\n');
        }

        out
    }
}
