//! Source-to-source placeholder substitution.
//!
//! Reads a source module, replaces named placeholder tokens with
//! literal values, and writes the result to a target path. Tokens are
//! matched as whole identifiers, so a binding for `__FOO` never
//! touches `__FOO_BAR`.

use regex::{NoExpand, Regex};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("failed to read template source {path}: {source}")]
    ReadSource { path: PathBuf, source: io::Error },
    #[error("failed to write generated module {path}: {source}")]
    WriteTarget { path: PathBuf, source: io::Error },
    #[error("placeholder token `{0}` is not a valid identifier")]
    InvalidToken(String),
}

/// A value bound to a placeholder token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateValue {
    /// Encoded as an escaped, double-quoted JS string literal.
    StringLiteral(String),
    /// Spliced into the output verbatim.
    Raw(String),
}

impl TemplateValue {
    fn render(&self) -> String {
        match self {
            TemplateValue::StringLiteral(s) => encode_string_literal(s),
            TemplateValue::Raw(s) => s.clone(),
        }
    }
}

/// Token -> value bindings for one transform, applied in binding order.
#[derive(Debug, Clone, Default)]
pub struct TemplateSpec {
    bindings: Vec<(String, TemplateValue)>,
}

impl TemplateSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `token` to `value`. Rebinding a token replaces the earlier
    /// value.
    pub fn bind(mut self, token: impl Into<String>, value: TemplateValue) -> Self {
        let token = token.into();
        self.bindings.retain(|(t, _)| *t != token);
        self.bindings.push((token, value));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

pub struct TransformArgs<'a> {
    pub src_file: &'a Path,
    pub target_file: &'a Path,
    pub template_spec: &'a TemplateSpec,
}

/// Read `src_file`, substitute every bound placeholder, and write the
/// result to `target_file`.
pub fn transform_code_to_template(args: TransformArgs<'_>) -> Result<(), TemplateError> {
    let TransformArgs {
        src_file,
        target_file,
        template_spec,
    } = args;

    let mut code = fs::read_to_string(src_file).map_err(|source| TemplateError::ReadSource {
        path: src_file.to_path_buf(),
        source,
    })?;

    for (token, value) in &template_spec.bindings {
        code = substitute(&code, token, &value.render())?;
    }

    fs::write(target_file, code).map_err(|source| TemplateError::WriteTarget {
        path: target_file.to_path_buf(),
        source,
    })?;

    tracing::debug!(
        "Generated {} from {}",
        target_file.display(),
        src_file.display()
    );
    Ok(())
}

fn substitute(code: &str, token: &str, replacement: &str) -> Result<String, TemplateError> {
    if !is_identifier(token) {
        return Err(TemplateError::InvalidToken(token.to_string()));
    }
    // Identifier tokens contain no regex metacharacters, so the
    // pattern is always valid.
    let pattern = Regex::new(&format!(r"\b{token}\b")).expect("identifier pattern");
    Ok(pattern.replace_all(code, NoExpand(replacement)).into_owned())
}

fn is_identifier(token: &str) -> bool {
    let mut chars = token.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Encode `value` as a double-quoted JS string literal. Backslashes
/// survive, so Windows paths stay valid after splicing.
pub fn encode_string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
