//! Literal-segment templates
//!
//! A template is parsed once into a flat list of literal segments and named
//! `{identifier}` placeholders. Rendering is a single substitution pass
//! that inserts each placeholder's value verbatim; there is no escaping,
//! no reformatting, and no run-time evaluation of any kind.

use crate::error::{Error, Result};
use std::collections::HashMap;

/// One piece of a parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Text emitted as-is
    Literal(String),
    /// Named slot filled at render time
    Placeholder(String),
}

/// A parsed template, ready to render any number of times.
#[derive(Debug, Clone)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Parse template text.
    ///
    /// A placeholder is `{name}` where `name` is one or more ASCII
    /// alphanumerics or underscores. Any other use of braces is literal
    /// text, so parsing cannot fail.
    pub fn parse(text: &str) -> Self {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = text;

        while let Some(open) = rest.find('{') {
            literal.push_str(&rest[..open]);
            let tail = &rest[open + 1..];
            match tail.find(|c: char| !c.is_ascii_alphanumeric() && c != '_') {
                Some(end) if end > 0 && tail.as_bytes()[end] == b'}' => {
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Placeholder(tail[..end].to_string()));
                    rest = &tail[end + 1..];
                }
                _ => {
                    literal.push('{');
                    rest = tail;
                }
            }
        }

        literal.push_str(rest);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Self { segments }
    }

    /// Iterate over the placeholder names, in document order.
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Render the template with the given placeholder values.
    ///
    /// Every placeholder must have a value; values without a matching
    /// placeholder are ignored.
    pub fn render(&self, values: &HashMap<String, String>) -> Result<String> {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(name) => match values.get(name) {
                    Some(value) => out.push_str(value),
                    None => {
                        return Err(Error::Template(format!(
                            "no value for placeholder '{}'",
                            name
                        )))
                    }
                },
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_parse_splits_literals_and_placeholders() {
        let template = Template::parse("before {name} after");
        assert_eq!(
            template.segments,
            vec![
                Segment::Literal("before ".to_string()),
                Segment::Placeholder("name".to_string()),
                Segment::Literal(" after".to_string()),
            ]
        );
    }

    #[test]
    fn test_non_identifier_braces_are_literal() {
        let template = Template::parse("a {not a name} b {} c {unclosed");
        let rendered = template.render(&HashMap::new()).unwrap();
        assert_eq!(rendered, "a {not a name} b {} c {unclosed");
    }

    #[test]
    fn test_render_inserts_value_verbatim() {
        let template = Template::parse("```\n{table}\n```");
        let rendered = template
            .render(&values(&[("table", "1,2,3\n| a | b |")]))
            .unwrap();
        assert_eq!(rendered, "```\n1,2,3\n| a | b |\n```");
    }

    #[test]
    fn test_render_empty_value_keeps_surrounding_text() {
        let template = Template::parse("left\n{block}\nright");
        let rendered = template.render(&values(&[("block", "")])).unwrap();
        assert_eq!(rendered, "left\n\nright");
    }

    #[test]
    fn test_render_fails_on_missing_value() {
        let template = Template::parse("{present} {absent}");
        let err = template
            .render(&values(&[("present", "x")]))
            .unwrap_err();
        assert!(err.to_string().contains("absent"));
    }

    #[test]
    fn test_render_is_repeatable() {
        let template = Template::parse("a {x} b {y} c");
        let vals = values(&[("x", "1"), ("y", "2")]);
        let first = template.render(&vals).unwrap();
        let second = template.render(&vals).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_placeholders_in_document_order() {
        let template = Template::parse("{one} then {two} then {one}");
        let names: Vec<_> = template.placeholders().collect();
        assert_eq!(names, vec!["one", "two", "one"]);
    }
}
