//! Per-line classification for the circuit text grammar.
//!
//! ```text
//! U1 -> U2 [label="conc"];         edge line
//! U3 [label="Feed tank"];          node line
//! A -> B [label=tails weight=2]     attributes split by `,`, `;` or spaces
//! digraph {                        anything else is ignored
//! ```
//!
//! Identifiers and attribute values may be double-quoted; inside quotes `\`
//! escapes the next character. A line must be consumed completely by one
//! statement, otherwise it is ignored.

use nom::{
    branch::alt,
    bytes::complete::{escaped_transform, is_not, tag, take_while1},
    character::complete::{anychar, char, one_of, space0, space1},
    combinator::{all_consuming, map, not, opt, recognize, value},
    multi::{many1_count, separated_list0},
    sequence::{delimited, pair, preceded, terminated, tuple},
    IResult,
};

/// Arrow token separating edge endpoints
pub const ARROW: &str = "->";

/// Statement keywords that look like node lines but set defaults instead
const KEYWORDS: [&str; 3] = ["graph", "node", "edge"];

/// Parsed `key=value` pairs of a bracketed attribute list, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AttrList(Vec<(String, String)>);

impl AttrList {
    /// Last value given for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// What a single line of circuit text contributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// `A -> B [attrs]`
    Edge {
        from: String,
        to: String,
        attrs: AttrList,
    },
    /// `A [label=...]`
    Node { name: String, label: String },
    /// Anything else
    Ignored,
}

impl LineKind {
    /// Classify one line. Never fails; unrecognised input is [`LineKind::Ignored`].
    pub fn classify(line: &str) -> Self {
        let parsed = all_consuming(terminated(statement, pair(space0, opt(char(';')))))(line.trim());

        match parsed {
            Ok((_, Statement::Edge { from, to, attrs })) => LineKind::Edge {
                from,
                to,
                attrs: attrs.unwrap_or_default(),
            },
            Ok((_, Statement::Node { name, attrs })) => match attrs.get("label") {
                Some(label) if !KEYWORDS.contains(&name.as_str()) => LineKind::Node {
                    label: label.to_string(),
                    name,
                },
                _ => LineKind::Ignored,
            },
            Err(_) => LineKind::Ignored,
        }
    }
}

// ---------------------------------------------------------------------------
// Grammar
// ---------------------------------------------------------------------------

enum Statement {
    Edge {
        from: String,
        to: String,
        attrs: Option<AttrList>,
    },
    Node {
        name: String,
        attrs: AttrList,
    },
}

fn statement(input: &str) -> IResult<&str, Statement> {
    alt((edge_statement, node_statement))(input)
}

/// `from -> to [attrs]`
fn edge_statement(input: &str) -> IResult<&str, Statement> {
    map(
        tuple((
            identifier,
            delimited(space0, tag(ARROW), space0),
            identifier,
            opt(preceded(space0, attr_block)),
        )),
        |(from, _, to, attrs)| Statement::Edge { from, to, attrs },
    )(input)
}

/// `name [attrs]`
fn node_statement(input: &str) -> IResult<&str, Statement> {
    map(
        pair(identifier, preceded(space0, attr_block)),
        |(name, attrs)| Statement::Node { name, attrs },
    )(input)
}

/// Quoted or bare node identifier.
fn identifier(input: &str) -> IResult<&str, String> {
    alt((quoted_string, map(bare_identifier, str::to_string)))(input)
}

/// Run of non-structural characters. A `-` is allowed unless it starts `->`.
fn bare_identifier(input: &str) -> IResult<&str, &str> {
    recognize(many1_count(alt((
        take_while1(|c: char| is_bare(c) && c != '-'),
        terminated(tag("-"), not(char('>'))),
    ))))(input)
}

fn is_bare(c: char) -> bool {
    !c.is_whitespace() && !"{}[]=;,\"".contains(c)
}

/// `"..."` with backslash escapes.
fn quoted_string(input: &str) -> IResult<&str, String> {
    delimited(
        char('"'),
        map(
            opt(escaped_transform(is_not("\\\""), '\\', anychar)),
            Option::unwrap_or_default,
        ),
        char('"'),
    )(input)
}

/// `[k=v, k=v; k=v k=v]`; entries without `=` are dropped.
fn attr_block(input: &str) -> IResult<&str, AttrList> {
    map(
        delimited(
            pair(char('['), space0),
            terminated(separated_list0(attr_separator, attr_entry), opt(attr_separator)),
            pair(space0, char(']')),
        ),
        |entries| AttrList(entries.into_iter().flatten().collect()),
    )(input)
}

fn attr_separator(input: &str) -> IResult<&str, ()> {
    value(
        (),
        alt((recognize(tuple((space0, one_of(",;"), space0))), space1)),
    )(input)
}

fn attr_entry(input: &str) -> IResult<&str, Option<(String, String)>> {
    map(
        pair(
            take_while1(|c: char| c.is_alphanumeric() || c == '_'),
            opt(preceded(tuple((space0, char('='), space0)), attr_value)),
        ),
        |(key, value): (&str, Option<String>)| value.map(|v| (key.to_string(), v)),
    )(input)
}

fn attr_value(input: &str) -> IResult<&str, String> {
    alt((
        quoted_string,
        map(
            take_while1(|c: char| !c.is_whitespace() && !",;[]\"".contains(c)),
            str::to_string,
        ),
    ))(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(from: &str, to: &str) -> (String, String) {
        (from.to_string(), to.to_string())
    }

    fn attrs(block: &str) -> AttrList {
        let (rest, attrs) = attr_block(block).unwrap();
        assert!(rest.is_empty(), "unconsumed {:?}", rest);
        attrs
    }

    #[test]
    fn test_edge_line() {
        match LineKind::classify("U1 -> U2 [label=\"conc\"];") {
            LineKind::Edge { from, to, attrs } => {
                assert_eq!((from, to), edge("U1", "U2"));
                assert_eq!(attrs.get("label"), Some("conc"));
            }
            other => panic!("expected edge, got {:?}", other),
        }
    }

    #[test]
    fn test_edge_without_attrs() {
        assert_eq!(
            LineKind::classify("  A->B"),
            LineKind::Edge {
                from: "A".to_string(),
                to: "B".to_string(),
                attrs: AttrList::default(),
            }
        );
    }

    #[test]
    fn test_hyphenated_identifiers() {
        match LineKind::classify("pre-clean -> re-grind") {
            LineKind::Edge { from, to, .. } => {
                assert_eq!((from, to), edge("pre-clean", "re-grind"))
            }
            other => panic!("expected edge, got {:?}", other),
        }
    }

    #[test]
    fn test_quoted_identifiers() {
        match LineKind::classify(r#""Unit 1" -> "Unit -> 2" [color=blue, label="a, b"]"#) {
            LineKind::Edge { from, to, attrs } => {
                assert_eq!((from, to), edge("Unit 1", "Unit -> 2"));
                assert_eq!(attrs.get("label"), Some("a, b"));
                assert_eq!(attrs.get("color"), Some("blue"));
                assert_eq!(attrs.len(), 2);
            }
            other => panic!("expected edge, got {:?}", other),
        }
    }

    #[test]
    fn test_space_separated_attributes() {
        match LineKind::classify(r#"A -> B [label="conc" weight=2]"#) {
            LineKind::Edge { attrs, .. } => {
                assert_eq!(attrs.get("label"), Some("conc"));
                assert_eq!(attrs.get("weight"), Some("2"));
                assert_eq!(attrs.len(), 2);
            }
            other => panic!("expected edge, got {:?}", other),
        }
    }

    #[test]
    fn test_node_line() {
        assert_eq!(
            LineKind::classify("U3 [label=\"Feed tank\"];"),
            LineKind::Node {
                name: "U3".to_string(),
                label: "Feed tank".to_string(),
            }
        );
    }

    #[test]
    fn test_ignored_lines() {
        for line in [
            "",
            "digraph G {",
            "}",
            "rankdir=LR;",
            "U3 [shape=box];",
            "node [label=\"x\"];",
            "A -> B -> C;",
            "-> B",
            "A -> ",
            "A [label=\"unterminated\"",
            "A [label=x] trailing",
            "just some words",
        ] {
            assert_eq!(LineKind::classify(line), LineKind::Ignored, "line {:?}", line);
        }
    }

    #[test]
    fn test_attr_list_parsing() {
        let attrs = attrs(r#"[ label = "say \"hi\"" ; weight=3,flag ]"#);
        assert_eq!(attrs.get("label"), Some(r#"say "hi""#));
        assert_eq!(attrs.get("weight"), Some("3"));
        assert_eq!(attrs.get("flag"), None);
        assert_eq!(attrs.len(), 2);
    }

    #[test]
    fn test_empty_and_trailing_separator() {
        assert!(attrs("[]").is_empty());
        assert_eq!(attrs("[label=\"\",]").get("label"), Some(""));
    }

    #[test]
    fn test_last_duplicate_key_wins() {
        let attrs = attrs("[label=a, label=b]");
        assert_eq!(attrs.get("label"), Some("b"));
    }
}
