//! Variable descriptors and per-kind conversion

use crate::binding::Binding;
use crate::error::VarError;
use std::fmt;

/// The type a variable is converted to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    String,
    Int,
    Float64,
    Bool,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::String => "string",
            Kind::Int => "int",
            Kind::Float64 => "float64",
            Kind::Bool => "bool",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed default and output cell for each supported kind
#[derive(Debug, Clone)]
pub(crate) enum Slot {
    String {
        default: String,
        cell: Binding<String>,
    },
    Int {
        default: isize,
        cell: Binding<isize>,
    },
    Float64 {
        default: f64,
        cell: Binding<f64>,
    },
    Bool {
        default: bool,
        cell: Binding<bool>,
    },
}

impl Slot {
    fn kind(&self) -> Kind {
        match self {
            Slot::String { .. } => Kind::String,
            Slot::Int { .. } => Kind::Int,
            Slot::Float64 { .. } => Kind::Float64,
            Slot::Bool { .. } => Kind::Bool,
        }
    }

    fn default_string(&self) -> String {
        match self {
            Slot::String { default, .. } => default.clone(),
            Slot::Int { default, .. } => default.to_string(),
            Slot::Float64 { default, .. } => default.to_string(),
            Slot::Bool { default, .. } => default.to_string(),
        }
    }

    fn apply_default(&self) {
        match self {
            Slot::String { default, cell } => cell.set(default.clone()),
            Slot::Int { default, cell } => cell.set(*default),
            Slot::Float64 { default, cell } => cell.set(*default),
            Slot::Bool { default, cell } => cell.set(*default),
        }
    }

    /// Convert `raw` and store it. Returns false if `raw` is not a valid
    /// literal, in which case the cell is left untouched.
    fn convert(&self, raw: &str) -> bool {
        match self {
            Slot::String { cell, .. } => {
                cell.set(raw.to_string());
                true
            }
            Slot::Int { cell, .. } => match parse_int(raw) {
                Some(value) => {
                    cell.set(value);
                    true
                }
                None => false,
            },
            Slot::Float64 { cell, .. } => match raw.parse::<f64>() {
                Ok(value) => {
                    cell.set(value);
                    true
                }
                Err(_) => false,
            },
            Slot::Bool { cell, .. } => match parse_bool(raw) {
                Some(value) => {
                    cell.set(value);
                    true
                }
                None => false,
            },
        }
    }
}

/// Base-10 signed literal in 64-bit range, narrowed to the native width
fn parse_int(raw: &str) -> Option<isize> {
    raw.parse::<i64>()
        .ok()
        .and_then(|value| isize::try_from(value).ok())
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_lowercase().as_str() {
        "1" | "t" | "true" => Some(true),
        "0" | "f" | "false" => Some(false),
        _ => None,
    }
}

/// One declared variable.
#[derive(Debug, Clone)]
pub struct Var {
    name: String,
    required: bool,
    help: String,
    raw: String,
    slot: Slot,
}

impl Var {
    pub(crate) fn new(name: &str, required: bool, help: &str, slot: Slot) -> Self {
        Self {
            name: name.to_string(),
            required,
            help: help.to_string(),
            raw: String::new(),
            slot,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> Kind {
        self.slot.kind()
    }

    pub fn required(&self) -> bool {
        self.required
    }

    pub fn help(&self) -> &str {
        &self.help
    }

    /// Raw value captured by the most recent parse, empty before the first one
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Default value formatted the way the help listing shows it
    pub fn default_string(&self) -> String {
        self.slot.default_string()
    }

    /// Load this variable from `raw`, recording the value for later reporting.
    ///
    /// Returns whether the default was applied.
    pub(crate) fn load(&mut self, raw: String) -> Result<bool, VarError> {
        self.raw = raw;

        if self.raw.is_empty() {
            if self.required {
                return Err(VarError::Missing {
                    name: self.name.clone(),
                });
            }
            self.slot.apply_default();
            return Ok(true);
        }

        if self.slot.convert(&self.raw) {
            Ok(false)
        } else {
            Err(VarError::Conversion {
                name: self.name.clone(),
                kind: self.kind(),
                raw: self.raw.clone(),
            })
        }
    }
}
