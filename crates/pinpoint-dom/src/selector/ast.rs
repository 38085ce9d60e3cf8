/// A comma-separated list of complex selectors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorList {
    pub selectors: Vec<ComplexSelector>,
}

/// Compound selectors joined by combinators, stored left to right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplexSelector {
    pub parts: Vec<SelectorPart>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorPart {
    /// Relation to the part on the left; `None` for the leftmost part.
    pub combinator: Option<Combinator>,
    pub compound: Compound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    Descendant,
    Child,
    Adjacent,
    Sibling,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Compound {
    /// Lower-case type selector; `None` for `*` or an implied universal.
    pub tag: Option<String>,
    pub conditions: Vec<Condition>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    Id(String),
    Class(String),
    Attribute(AttributeCondition),
    Pseudo(PseudoClass),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeCondition {
    pub name: String,
    /// `None` means a bare presence test like `[disabled]`.
    pub matcher: Option<(AttrOp, String)>,
    pub case_insensitive: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrOp {
    /// `=`
    Equals,
    /// `~=`
    Includes,
    /// `|=`
    DashMatch,
    /// `^=`
    Prefix,
    /// `$=`
    Suffix,
    /// `*=`
    Substring,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PseudoClass {
    Nth(NthKind, Nth),
    FirstChild,
    LastChild,
    OnlyChild,
    FirstOfType,
    LastOfType,
    OnlyOfType,
    Root,
    Empty,
    Not(Box<Compound>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NthKind {
    OfType,
    LastOfType,
    Child,
    LastChild,
}

/// The `An+B` formula of the `:nth-*` pseudo-classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Nth {
    pub a: i64,
    pub b: i64,
}

impl Nth {
    pub fn exact(b: i64) -> Self {
        Self { a: 0, b }
    }

    /// Whether the 1-based `position` satisfies `An+B` for some n >= 0.
    ///
    /// Computed in `i128` so that extreme coefficients cannot overflow.
    pub fn matches(&self, position: i64) -> bool {
        let (a, b) = (i128::from(self.a), i128::from(self.b));
        let diff = i128::from(position) - b;
        if a == 0 {
            return diff == 0;
        }
        diff % a == 0 && diff / a >= 0
    }
}
