//! scalar literals
//!
//! Literal values are kept as the source text the lexer produced, quotes and escapes included.

use crate::Node;
use strum::EnumIter;

/// A floating point literal, e.g. `1.5e3`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalarDnumber {
    pub value: String,
}

/// A double quoted string with interpolation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalarEncapsed {
    pub parts: Vec<Node>,
}

/// A literal fragment of an interpolated string, escapes unresolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalarEncapsedStringPart {
    pub value: String,
    /// The string the fragment appears in, which decides what its escapes mean
    pub delimiter: Delimiter,
}

/// The kind of string a [`ScalarEncapsedStringPart`] belongs to
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, EnumIter)]
pub enum Delimiter {
    /// `"..."`
    DoubleQuote,
    /// `` `...` ``
    Backtick,
    /// `<<<EOT`
    Heredoc,
    /// `<<<'EOT'`
    Nowdoc,
}

/// `${name}` or `${name[dim]}` inside an interpolated string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalarEncapsedStringVar {
    pub name: Box<Node>,
    pub dim: Option<Box<Node>>,
}

/// `{$expr}` inside an interpolated string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalarEncapsedStringBrackets {
    pub expr: Box<Node>,
}

/// A heredoc or nowdoc
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalarHeredoc {
    pub parts: Vec<Node>,
}

/// An integer literal in any base, e.g. `0x1F`, `0b101`, `1_000`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalarLnumber {
    pub value: String,
}

/// `__LINE__`, `__CLASS__`, ...
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalarMagicConstant {
    pub value: String,
}

/// A constant string, e.g. `'hi'` or `"hi\n"`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalarString {
    pub value: String,
}
