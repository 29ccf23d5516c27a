//! Function Module
//!
//! Routine payload: argument signature, result shape metadata and body.
//! Routines are overloadable, so their identity carries the input arguments.

use serde::{Serialize, Deserialize};

/// Whether a routine is a function or a procedure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoutineKind {
    #[default]
    Function,
    Procedure,
}

/// Argument mode as declared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArgumentMode {
    #[default]
    In,
    Out,
    InOut,
    Variadic,
    /// Output column of a `RETURNS TABLE(...)` routine
    Table,
}

impl ArgumentMode {
    /// Whether the argument is part of the call signature
    pub fn is_input(&self) -> bool {
        matches!(self, ArgumentMode::In | ArgumentMode::InOut | ArgumentMode::Variadic)
    }
}

/// One declared routine argument
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionArgument {
    pub name: Option<String>,
    pub data_type: String,
    #[serde(default)]
    pub mode: ArgumentMode,
    #[serde(default)]
    pub default: Option<String>,
}

impl FunctionArgument {
    /// Rendering used inside a routine identity: `[INOUT|VARIADIC ]name type`
    fn identity_fragment(&self) -> String {
        let prefix = match self.mode {
            ArgumentMode::InOut => "INOUT ",
            ArgumentMode::Variadic => "VARIADIC ",
            _ => "",
        };
        match &self.name {
            Some(name) if !name.is_empty() => format!("{}{} {}", prefix, name, self.data_type),
            _ => format!("{}{}", prefix, self.data_type),
        }
    }
}

/// Function-specific attributes of a schema object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionDef {
    pub kind: RoutineKind,
    pub arguments: Vec<FunctionArgument>,
    /// Declared return type (`record`, `SETOF foo`, `void`, ...)
    pub return_type: String,
    pub returns_set: bool,
    pub language: String,
    /// Body source text
    pub definition: String,
    pub volatility: String,
    pub strict: bool,
    pub security_definer: bool,
}

impl FunctionDef {
    /// Input arguments rendered the way the engine prints identity arguments,
    /// e.g. `t text, VARIADIC integer[]`
    pub fn identity_arguments(&self) -> String {
        self.arguments
            .iter()
            .filter(|arg| arg.mode.is_input())
            .map(FunctionArgument::identity_fragment)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// The engine refuses to replace a routine if this would remove an input
    /// argument default the old definition had.
    pub(crate) fn keeps_defaults_of(&self, old: &FunctionDef) -> bool {
        let new_inputs = self.arguments.iter().filter(|a| a.mode.is_input());
        let old_inputs = old.arguments.iter().filter(|a| a.mode.is_input());
        new_inputs
            .zip(old_inputs)
            .all(|(new, old)| old.default.is_none() || new.default.is_some())
    }
}
