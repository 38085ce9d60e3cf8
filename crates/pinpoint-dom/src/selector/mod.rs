//! CSS selector parsing and matching.

pub mod ast;
mod matcher;

pub use ast::*;
pub use matcher::matches;

use pest::Parser;
use pest::error::InputLocation;
use pest::iterators::Pair;
use pest_derive::Parser;
use pinpoint_common::QueryError;

#[derive(Parser)]
#[grammar = "selector.pest"]
pub struct SelectorParser;

/// Parse selector text into a [`SelectorList`].
pub fn parse_selector(input: &str) -> Result<SelectorList, QueryError> {
    let mut pairs = SelectorParser::parse(Rule::selector_list, input).map_err(|e| {
        let at = match e.location {
            InputLocation::Pos(pos) => pos,
            InputLocation::Span((start, _)) => start,
        };
        QueryError::invalid(input, format!("at {}: {}", at, e.variant.message()))
    })?;

    let mut selectors = Vec::new();
    if let Some(list) = pairs.next() {
        for inner in list.into_inner() {
            if inner.as_rule() == Rule::complex {
                selectors.push(parse_complex(inner, input)?);
            }
        }
    }

    Ok(SelectorList { selectors })
}

fn parse_complex(pair: Pair<Rule>, input: &str) -> Result<ComplexSelector, QueryError> {
    let mut parts = Vec::new();
    let mut pending = None;

    for inner in pair.into_inner() {
        match inner.as_rule() {
            Rule::child => pending = Some(Combinator::Child),
            Rule::adjacent => pending = Some(Combinator::Adjacent),
            Rule::sibling => pending = Some(Combinator::Sibling),
            Rule::descendant => pending = Some(Combinator::Descendant),
            Rule::compound => parts.push(SelectorPart {
                combinator: pending.take(),
                compound: parse_compound(inner, input)?,
            }),
            _ => {}
        }
    }

    Ok(ComplexSelector { parts })
}

fn parse_compound(pair: Pair<Rule>, input: &str) -> Result<Compound, QueryError> {
    let mut compound = Compound::default();

    for inner in pair.into_inner() {
        match inner.as_rule() {
            Rule::type_sel => compound.tag = Some(unescape(inner.as_str()).to_ascii_lowercase()),
            Rule::universal => {}
            Rule::id_sel => compound
                .conditions
                .push(Condition::Id(unescape(first_inner_str(inner)))),
            Rule::class_sel => compound
                .conditions
                .push(Condition::Class(unescape(first_inner_str(inner)))),
            Rule::attr_sel => compound
                .conditions
                .push(Condition::Attribute(parse_attribute(inner))),
            Rule::pseudo => compound
                .conditions
                .push(Condition::Pseudo(parse_pseudo(inner, input)?)),
            _ => {}
        }
    }

    Ok(compound)
}

fn first_inner_str<'i>(pair: Pair<'i, Rule>) -> &'i str {
    pair.into_inner()
        .next()
        .map(|p| p.as_str())
        .unwrap_or_default()
}

fn parse_attribute(pair: Pair<Rule>) -> AttributeCondition {
    let mut name = String::new();
    let mut op = None;
    let mut value = String::new();
    let mut case_insensitive = false;

    for inner in pair.into_inner() {
        match inner.as_rule() {
            Rule::attr_name => name = unescape(inner.as_str()).to_ascii_lowercase(),
            Rule::attr_op => {
                op = Some(match inner.as_str() {
                    "~=" => AttrOp::Includes,
                    "|=" => AttrOp::DashMatch,
                    "^=" => AttrOp::Prefix,
                    "$=" => AttrOp::Suffix,
                    "*=" => AttrOp::Substring,
                    _ => AttrOp::Equals,
                })
            }
            Rule::single_quoted | Rule::double_quoted => value = unescape(first_inner_str(inner)),
            Rule::bare_value => value = unescape(inner.as_str()),
            Rule::attr_flag => case_insensitive = inner.as_str().eq_ignore_ascii_case("i"),
            _ => {}
        }
    }

    AttributeCondition {
        name,
        matcher: op.map(|op| (op, value)),
        case_insensitive,
    }
}

fn parse_pseudo(pair: Pair<Rule>, input: &str) -> Result<PseudoClass, QueryError> {
    let Some(body) = pair.into_inner().next() else {
        return Err(QueryError::invalid(input, "empty pseudo-class"));
    };

    match body.as_rule() {
        Rule::nth_pseudo => parse_nth_pseudo(body, input),
        Rule::not_pseudo => {
            let compound = body
                .into_inner()
                .find(|p| p.as_rule() == Rule::compound)
                .ok_or_else(|| QueryError::invalid(input, ":not() needs a selector"))?;
            Ok(PseudoClass::Not(Box::new(parse_compound(compound, input)?)))
        }
        Rule::simple_pseudo => Ok(match body.as_str() {
            "first-child" => PseudoClass::FirstChild,
            "last-child" => PseudoClass::LastChild,
            "only-child" => PseudoClass::OnlyChild,
            "first-of-type" => PseudoClass::FirstOfType,
            "last-of-type" => PseudoClass::LastOfType,
            "only-of-type" => PseudoClass::OnlyOfType,
            "root" => PseudoClass::Root,
            _ => PseudoClass::Empty,
        }),
        other => Err(QueryError::invalid(
            input,
            format!("unsupported pseudo-class rule {:?}", other),
        )),
    }
}

fn parse_nth_pseudo(pair: Pair<Rule>, input: &str) -> Result<PseudoClass, QueryError> {
    let mut kind = NthKind::Child;
    let mut nth = Nth::exact(1);

    for inner in pair.into_inner() {
        match inner.as_rule() {
            Rule::nth_name => {
                kind = match inner.as_str() {
                    "nth-of-type" => NthKind::OfType,
                    "nth-last-of-type" => NthKind::LastOfType,
                    "nth-last-child" => NthKind::LastChild,
                    _ => NthKind::Child,
                }
            }
            Rule::nth_expr => nth = parse_nth_expr(inner, input)?,
            _ => {}
        }
    }

    Ok(PseudoClass::Nth(kind, nth))
}

fn parse_nth_expr(pair: Pair<Rule>, input: &str) -> Result<Nth, QueryError> {
    let Some(expr) = pair.into_inner().next() else {
        return Err(QueryError::invalid(input, "empty nth expression"));
    };

    match expr.as_rule() {
        Rule::odd => Ok(Nth { a: 2, b: 1 }),
        Rule::even => Ok(Nth { a: 2, b: 0 }),
        Rule::b_only => Ok(Nth::exact(parse_int(expr.as_str(), input)?)),
        Rule::an_plus_b => {
            let mut nth = Nth { a: 1, b: 0 };
            for part in expr.into_inner() {
                match part.as_rule() {
                    Rule::a_coef => {
                        let coef = &part.as_str()[..part.as_str().len() - 1];
                        nth.a = match coef {
                            "" | "+" => 1,
                            "-" => -1,
                            digits => parse_int(digits, input)?,
                        };
                    }
                    Rule::b_term => {
                        let compact: String =
                            part.as_str().chars().filter(|c| !c.is_whitespace()).collect();
                        nth.b = parse_int(&compact, input)?;
                    }
                    _ => {}
                }
            }
            Ok(nth)
        }
        other => Err(QueryError::invalid(
            input,
            format!("unexpected nth rule {:?}", other),
        )),
    }
}

fn parse_int(text: &str, input: &str) -> Result<i64, QueryError> {
    text.parse::<i64>()
        .map_err(|e| QueryError::invalid(input, format!("bad number '{}': {}", text, e)))
}

/// Resolve CSS backslash escapes: `\'` and friends, plus hex code points.
pub fn unescape(raw: &str) -> String {
    if !raw.contains('\\') {
        return raw.to_string();
    }

    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }

        let mut hex = String::new();
        while hex.len() < 6 {
            match chars.peek() {
                Some(h) if h.is_ascii_hexdigit() => {
                    hex.push(*h);
                    chars.next();
                }
                _ => break,
            }
        }

        if hex.is_empty() {
            if let Some(next) = chars.next() {
                out.push(next);
            }
        } else {
            let code = u32::from_str_radix(&hex, 16).unwrap_or(0xFFFD);
            out.push(char::from_u32(code).unwrap_or('\u{FFFD}'));
            // a single whitespace terminates a hex escape
            if chars.peek().is_some_and(|c| c.is_whitespace()) {
                chars.next();
            }
        }
    }
    out
}
