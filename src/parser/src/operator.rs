//! Operator tiers and precedence definitions.
//!
//! Expressions have exactly four tiers of binary operators. From loosest to
//! tightest binding they are:
//!
//! 1. logical, like `and` and `or`
//! 2. relational, like `<` or `==`
//! 3. additive, like `+` and `-`
//! 4. multiplicative, like `*` and `/`
//!
//! All operators are left associative, so `a - b - c` is the same as
//! `(a - b) - c`. There are no prefix or postfix operators.

/// The precedence of an operator.
///
/// When multiple operators are used, precedence is how we decide which one
/// 'happens first'. For example, `a + b * c` is read as the same as `a + (b *
/// c)` because the `*` has higher precedence
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    Logical,
    Relational,
    Additive,
    Multiplicative,
}

impl Tier {
    /// The loosest binding tier, where parsing an expression starts.
    pub const LOWEST: Tier = Tier::Logical;

    /// The next tighter binding tier, if there is one.
    pub fn next(self) -> Option<Tier> {
        match self {
            Tier::Logical => Some(Tier::Relational),
            Tier::Relational => Some(Tier::Additive),
            Tier::Additive => Some(Tier::Multiplicative),
            Tier::Multiplicative => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Tier::Logical => "logical",
            Tier::Relational => "relational",
            Tier::Additive => "additive",
            Tier::Multiplicative => "multiplicative",
        }
    }
}

/// The operators of each [`Tier`].
#[derive(Debug, Clone, PartialEq)]
pub struct OperatorTiers<V> {
    logical: Vec<V>,
    relational: Vec<V>,
    additive: Vec<V>,
    multiplicative: Vec<V>,
}

impl<V> OperatorTiers<V> {
    pub fn new(
        logical: impl IntoIterator<Item = V>,
        relational: impl IntoIterator<Item = V>,
        additive: impl IntoIterator<Item = V>,
        multiplicative: impl IntoIterator<Item = V>,
    ) -> Self {
        OperatorTiers {
            logical: logical.into_iter().collect(),
            relational: relational.into_iter().collect(),
            additive: additive.into_iter().collect(),
            multiplicative: multiplicative.into_iter().collect(),
        }
    }

    /// The operators at some tier.
    pub fn operators(&self, tier: Tier) -> &[V] {
        match tier {
            Tier::Logical => &self.logical,
            Tier::Relational => &self.relational,
            Tier::Additive => &self.additive,
            Tier::Multiplicative => &self.multiplicative,
        }
    }
}

impl<V: PartialEq> OperatorTiers<V> {
    /// Is `value` an operator at `tier`?
    pub fn contains(&self, tier: Tier, value: &V) -> bool {
        self.operators(tier).contains(value)
    }
}

impl OperatorTiers<String> {
    /// Is `text` an operator at `tier`, ignoring ASCII case?
    pub fn contains_text(&self, tier: Tier, text: &str) -> bool {
        self.operators(tier)
            .iter()
            .any(|op| op.eq_ignore_ascii_case(text))
    }
}

impl Default for OperatorTiers<String> {
    fn default() -> Self {
        let strings = |ops: &[&str]| -> Vec<String> {
            ops.iter().map(|op| op.to_string()).collect()
        };

        OperatorTiers::new(
            strings(&["and", "or"]),
            strings(&["<", ">", "<=", ">=", "==", "!="]),
            strings(&["+", "-"]),
            strings(&["*", "/", "%"]),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_climb_to_multiplicative() {
        let mut tier = Tier::LOWEST;
        let mut seen = vec![tier];
        while let Some(next) = tier.next() {
            assert!(next > tier);
            seen.push(next);
            tier = next;
        }
        assert_eq!(seen.len(), 4);
        assert_eq!(tier, Tier::Multiplicative);
        assert_eq!(Tier::LOWEST.name(), "logical");
    }

    #[test]
    fn default_tiers() {
        let tiers = OperatorTiers::default();
        assert!(tiers.contains_text(Tier::Logical, "AND"));
        assert!(tiers.contains_text(Tier::Relational, "<="));
        assert!(!tiers.contains_text(Tier::Additive, "*"));
        assert!(tiers.contains(Tier::Multiplicative, &"%".to_string()));
    }
}
