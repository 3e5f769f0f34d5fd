//! Named-placeholder templates for tensor type names.
//!
//! A template is a type-name string in which the bare words `order`, `dim`,
//! `range` and `rank` stand for integers:
//!
//! ```text
//! Tensor<dim, order, tensor::covariant, Tensor<range, rank, tensor::contravariant, Tdouble>>
//! ```
//!
//! The source is split once into literal and placeholder segments, and
//! rendering resolves every placeholder in one pass. A substituted value is
//! never scanned again, so a value can not be mistaken for a placeholder.
//! Placeholders are matched anywhere in the text, not only at word
//! boundaries.

use serde::{Deserialize, Serialize};

pub const DEFAULT_DERIVATIVE_TEMPLATE: &str =
    "Tensor<dim, order, tensor::covariant, Tensor<range, rank, tensor::contravariant, Tdouble>>";
pub const DEFAULT_VALUE_TEMPLATE: &str = "Tensor<range, rank, tensor::contravariant, Tdouble>";

/// A substitutable token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placeholder {
    Order,
    Dim,
    Range,
    Rank,
}

impl Placeholder {
    /// Declaration order. None of the tokens is a prefix of another.
    pub const ALL: [Placeholder; 4] = [Self::Order, Self::Dim, Self::Range, Self::Rank];

    pub fn token(self) -> &'static str {
        match self {
            Self::Order => "order",
            Self::Dim => "dim",
            Self::Range => "range",
            Self::Rank => "rank",
        }
    }
}

impl std::fmt::Display for Placeholder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

/// Concrete values for every placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeBindings {
    pub order: i64,
    pub dim: i64,
    pub range: i64,
    pub rank: i64,
}

impl ShapeBindings {
    pub fn get(&self, placeholder: Placeholder) -> i64 {
        match placeholder {
            Placeholder::Order => self.order,
            Placeholder::Dim => self.dim,
            Placeholder::Range => self.range,
            Placeholder::Rank => self.rank,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Segment {
    Literal(String),
    Placeholder(Placeholder),
}

/// A parsed template.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

impl Template {
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let segments = parse_segments(&source);
        Self { source, segments }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Distinct placeholders present, in declaration order.
    pub fn placeholders(&self) -> Vec<Placeholder> {
        Placeholder::ALL
            .into_iter()
            .filter(|p| self.segments.contains(&Segment::Placeholder(*p)))
            .collect()
    }

    /// Placeholders the template never mentions. Rendering simply has
    /// nothing to substitute for them.
    pub fn missing_placeholders(&self) -> Vec<Placeholder> {
        let present = self.placeholders();
        Placeholder::ALL
            .into_iter()
            .filter(|p| !present.contains(p))
            .collect()
    }

    /// Render, resolving each placeholder through `lookup`. A placeholder
    /// the lookup does not resolve keeps its token text.
    pub fn render(&self, lookup: impl Fn(Placeholder) -> Option<i64>) -> String {
        let mut out = String::with_capacity(self.source.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(p) => match lookup(*p) {
                    Some(value) => out.push_str(&value.to_string()),
                    None => out.push_str(p.token()),
                },
            }
        }
        out
    }

    pub fn substitute(&self, bindings: &ShapeBindings) -> String {
        self.render(|p| Some(bindings.get(p)))
    }
}

impl From<String> for Template {
    fn from(source: String) -> Self {
        Self::new(source)
    }
}

impl From<&str> for Template {
    fn from(source: &str) -> Self {
        Self::new(source)
    }
}

impl From<Template> for String {
    fn from(template: Template) -> Self {
        template.source
    }
}

impl std::fmt::Display for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.source)
    }
}

fn parse_segments(source: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut rest = source;

    'scan: while let Some(ch) = rest.chars().next() {
        for placeholder in Placeholder::ALL {
            if let Some(tail) = rest.strip_prefix(placeholder.token()) {
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(Segment::Placeholder(placeholder));
                rest = tail;
                continue 'scan;
            }
        }
        literal.push(ch);
        rest = &rest[ch.len_utf8()..];
    }

    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequential_replace(source: &str, bindings: &ShapeBindings) -> String {
        let mut out = source.to_string();
        for p in Placeholder::ALL {
            out = out.replace(p.token(), &bindings.get(p).to_string());
        }
        out
    }

    #[test]
    fn derivative_template_substitution() {
        let template = Template::new(DEFAULT_DERIVATIVE_TEMPLATE);
        let bindings = ShapeBindings {
            order: 2,
            dim: 3,
            range: 1,
            rank: 1,
        };
        assert_eq!(
            template.substitute(&bindings),
            "Tensor<3, 2, tensor::covariant, Tensor<1, 1, tensor::contravariant, Tdouble>>"
        );
    }

    #[test]
    fn single_pass_matches_sequential_replacement() {
        let bindings = ShapeBindings {
            order: 1,
            dim: 2,
            range: 3,
            rank: 4,
        };
        for source in [
            DEFAULT_DERIVATIVE_TEMPLATE,
            DEFAULT_VALUE_TEMPLATE,
            "orderange",
            "rankorder dimdim",
        ] {
            let template = Template::new(source);
            assert_eq!(
                template.substitute(&bindings),
                sequential_replace(source, &bindings),
                "template {source}"
            );
        }
    }

    #[test]
    fn missing_placeholder_is_a_no_op() {
        let template = Template::new(DEFAULT_VALUE_TEMPLATE);
        assert_eq!(
            template.missing_placeholders(),
            vec![Placeholder::Order, Placeholder::Dim]
        );
        let bindings = ShapeBindings {
            order: 9,
            dim: 9,
            range: 2,
            rank: 1,
        };
        assert_eq!(
            template.substitute(&bindings),
            "Tensor<2, 1, tensor::contravariant, Tdouble>"
        );
    }

    #[test]
    fn unresolved_placeholder_keeps_token() {
        let template = Template::new("Tensor<dim, rank>");
        let rendered = template.render(|p| (p == Placeholder::Dim).then_some(3));
        assert_eq!(rendered, "Tensor<3, rank>");
    }

    #[test]
    fn template_deserializes_from_string() {
        let template: Template =
            serde_json::from_str("\"Foo<dim>\"").expect("template should parse");
        assert_eq!(template.placeholders(), vec![Placeholder::Dim]);
    }
}
