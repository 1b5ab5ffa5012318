//! # URI Templates
//!
//! A small RFC 6570 implementation covering expression levels 1 to 3.
//! Level 4 modifiers (`{var*}`, `{var:3}`) are accepted while parsing but ignored
//! during expansion.
//!
//! A [`Link`](crate::model::Link) keeps its href as a `UriTemplate`; a link is
//! *templated* when the template declares at least one variable.

use std::collections::HashMap;
use std::fmt;

/// The operator of a template expression, which decides how its variables expand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateVariableKind {
    /// `{var}`
    Simple,
    /// `{+var}`
    Reserved,
    /// `{#var}`
    Fragment,
    /// `{.var}`
    Label,
    /// `{/var}`
    PathSegment,
    /// `{;var}`
    PathParameter,
    /// `{?var}`
    RequestParam,
    /// `{&var}`
    RequestParamContinued,
}

impl TemplateVariableKind {
    fn from_operator(operator: char) -> Option<Self> {
        match operator {
            '+' => Some(Self::Reserved),
            '#' => Some(Self::Fragment),
            '.' => Some(Self::Label),
            '/' => Some(Self::PathSegment),
            ';' => Some(Self::PathParameter),
            '?' => Some(Self::RequestParam),
            '&' => Some(Self::RequestParamContinued),
            _ => None,
        }
    }

    fn operator(self) -> &'static str {
        match self {
            Self::Simple => "",
            Self::Reserved => "+",
            Self::Fragment => "#",
            Self::Label => ".",
            Self::PathSegment => "/",
            Self::PathParameter => ";",
            Self::RequestParam => "?",
            Self::RequestParamContinued => "&",
        }
    }

    fn prefix(self) -> &'static str {
        match self {
            Self::Simple | Self::Reserved => "",
            other => other.operator(),
        }
    }

    fn separator(self) -> &'static str {
        match self {
            Self::Simple | Self::Reserved | Self::Fragment => ",",
            Self::Label => ".",
            Self::PathSegment => "/",
            Self::PathParameter => ";",
            Self::RequestParam | Self::RequestParamContinued => "&",
        }
    }

    fn is_named(self) -> bool {
        matches!(
            self,
            Self::PathParameter | Self::RequestParam | Self::RequestParamContinued
        )
    }

    fn allows_reserved(self) -> bool {
        matches!(self, Self::Reserved | Self::Fragment)
    }
}

/// A single variable declared by a template expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TemplateVariable {
    name: String,
    kind: TemplateVariableKind,
}

impl TemplateVariable {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> TemplateVariableKind {
        self.kind
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Part {
    Literal(String),
    Expression {
        kind: TemplateVariableKind,
        names: Vec<String>,
    },
}

/// A parsed URI template.
///
/// Parsing never fails: an unterminated or empty expression is kept as literal text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UriTemplate {
    source: String,
    parts: Vec<Part>,
}

impl UriTemplate {
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let parts = parse(&source);
        Self { source, parts }
    }

    /// The template exactly as it was given.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// All declared variables, in the order they appear.
    pub fn variables(&self) -> Vec<TemplateVariable> {
        self.parts
            .iter()
            .filter_map(|part| match part {
                Part::Expression { kind, names } => Some(names.iter().map(|name| TemplateVariable {
                    name: name.clone(),
                    kind: *kind,
                })),
                Part::Literal(_) => None,
            })
            .flatten()
            .collect()
    }

    pub fn has_variables(&self) -> bool {
        self.parts
            .iter()
            .any(|part| matches!(part, Part::Expression { .. }))
    }

    /// Expands the template. Variables without a value are dropped, and an
    /// expression whose variables are all unbound disappears entirely.
    pub fn expand(&self, values: &HashMap<String, String>) -> String {
        let mut expanded = String::with_capacity(self.source.len());
        for part in &self.parts {
            match part {
                Part::Literal(text) => expanded.push_str(text),
                Part::Expression { kind, names } => {
                    let items: Vec<String> = names
                        .iter()
                        .filter_map(|name| {
                            values
                                .get(name)
                                .map(|value| expand_item(*kind, name, value))
                        })
                        .collect();
                    if !items.is_empty() {
                        expanded.push_str(kind.prefix());
                        expanded.push_str(&items.join(kind.separator()));
                    }
                }
            }
        }
        expanded
    }
}

impl fmt::Display for UriTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl From<&str> for UriTemplate {
    fn from(source: &str) -> Self {
        Self::new(source)
    }
}

impl From<String> for UriTemplate {
    fn from(source: String) -> Self {
        Self::new(source)
    }
}

fn parse(source: &str) -> Vec<Part> {
    let mut parts = Vec::new();
    let mut literal = String::new();
    let mut rest = source;

    while let Some(start) = rest.find('{') {
        let Some(length) = rest[start..].find('}') else {
            break;
        };
        let body = &rest[start + 1..start + length];
        match expression(body) {
            Some(part) => {
                literal.push_str(&rest[..start]);
                if !literal.is_empty() {
                    parts.push(Part::Literal(std::mem::take(&mut literal)));
                }
                parts.push(part);
            }
            None => literal.push_str(&rest[..=start + length]),
        }
        rest = &rest[start + length + 1..];
    }

    literal.push_str(rest);
    if !literal.is_empty() {
        parts.push(Part::Literal(literal));
    }
    parts
}

fn expression(body: &str) -> Option<Part> {
    let mut chars = body.chars();
    let (kind, names) = match chars.next().and_then(TemplateVariableKind::from_operator) {
        Some(kind) => (kind, chars.as_str()),
        None => (TemplateVariableKind::Simple, body),
    };

    let names: Vec<String> = names
        .split(',')
        .map(|name| {
            name.trim()
                .trim_end_matches('*')
                .split(':')
                .next()
                .unwrap_or_default()
                .to_string()
        })
        .filter(|name| !name.is_empty())
        .collect();

    if names.is_empty() {
        None
    } else {
        Some(Part::Expression { kind, names })
    }
}

fn expand_item(kind: TemplateVariableKind, name: &str, value: &str) -> String {
    let encoded = encode(value, kind.allows_reserved());
    if !kind.is_named() {
        return encoded;
    }
    if encoded.is_empty() && kind == TemplateVariableKind::PathParameter {
        return name.to_string();
    }
    format!("{name}={encoded}")
}

fn encode(value: &str, allow_reserved: bool) -> String {
    const RESERVED: &[u8] = b":/?#[]@!$&'()*+,;=";

    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        let unreserved = byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'.' | b'_' | b'~');
        if unreserved || (allow_reserved && RESERVED.contains(&byte)) {
            encoded.push(byte as char);
        } else {
            encoded.push_str(&format!("%{byte:02X}"));
        }
    }
    encoded
}
