//! Boolean algebra over primary events: terms (conjunctions) and expressions
//! (minimised disjunctions of terms), plus the k-of-n vote operator.
//!
//! A [`Term`] is a minimal cut set (or a mode failure), represented as a
//! Boolean product of events encoded in binary: bit *i* is set iff the
//! primary event at index *i* is a factor of the term. Encoding `0` denotes
//! the empty conjunction, i.e. Boolean `True`.
//!
//! An [`Expression`] is a disjunction of terms, stored minimised: no term it
//! holds implies another (absorption), and if `True` (encoding `0`) is a
//! member it is the only member.

use std::collections::BTreeSet;

/// A Boolean product of primary events, encoded as a bit vector.
///
/// For example, if the events are `A, B, C, D, E`, the term `A.B.E` encodes
/// as `0b10011` (bits 0, 1, 4 set), i.e. 19.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Term {
    encoding: u128,
}

impl Term {
    /// The empty conjunction (Boolean `True`).
    pub const TRUE: Term = Term { encoding: 0 };

    pub const fn from_encoding(encoding: u128) -> Self {
        Term { encoding }
    }

    /// The single-bit term for the primary event at `index`.
    pub const fn from_event_index(index: usize) -> Self {
        Term {
            encoding: 1u128 << index,
        }
    }

    pub const fn encoding(self) -> u128 {
        self.encoding
    }

    /// `order(t)`: the number of event factors in the term.
    pub fn order(self) -> u32 {
        self.encoding.count_ones()
    }

    /// `is_vacuous(t)`: whether the term is the empty conjunction (`True`).
    pub fn is_vacuous(self) -> bool {
        self.encoding == 0
    }

    /// Ascending list of the event indices set in this term.
    pub fn event_indices(self) -> Vec<usize> {
        (0..u128::BITS as usize)
            .filter(|&i| self.encoding & (1u128 << i) != 0)
            .collect()
    }

    /// Ascending list of single-bit terms making up this term.
    pub fn factors(self) -> Vec<Term> {
        self.event_indices()
            .into_iter()
            .map(Term::from_event_index)
            .collect()
    }

    /// `t.implies(u)`: every bit set in `u` is also set in `t`, i.e. `t` is
    /// redundant in a disjunction alongside `u` (the stronger term).
    pub fn implies(self, other: Term) -> bool {
        !self.encoding & other.encoding == 0
    }

    /// `t / u`: strip the factors of `u` from `t`. Meaningful only in a
    /// minimal-cut-set context (e.g. deriving the complement within a term).
    pub fn divide(self, other: Term) -> Term {
        Term {
            encoding: self.encoding & !other.encoding,
        }
    }

    /// `conjunction(t1, ..., tn)`: bitwise OR of the encodings (the AND of
    /// the terms as Boolean products). Empty input is `True`.
    pub fn conjunction(terms: impl IntoIterator<Item = Term>) -> Term {
        Term {
            encoding: terms.into_iter().fold(0, |acc, t| acc | t.encoding),
        }
    }

    /// `gcd(t1, ..., tn)`: bitwise AND of the encodings. Undefined (panics)
    /// on an empty sequence, matching the mathematical gcd of zero terms.
    pub fn gcd(terms: impl IntoIterator<Item = Term>) -> Term {
        let mut iter = terms.into_iter();
        let first = iter.next().expect("gcd of an empty sequence of terms");
        Term {
            encoding: iter.fold(first.encoding, |acc, t| acc & t.encoding),
        }
    }
}

/// A disjunction (OR) of minimal cut sets: a Boolean sum of products.
///
/// Invariant: minimised by absorption — no stored term implies another. If
/// `True` is present it is the sole member. The empty set denotes `False`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    terms: BTreeSet<Term>,
}

impl Expression {
    /// Boolean `False`: the empty disjunction.
    pub fn false_() -> Self {
        Expression {
            terms: BTreeSet::new(),
        }
    }

    /// Boolean `True`: the disjunction containing only the empty conjunction.
    pub fn true_() -> Self {
        Expression {
            terms: BTreeSet::from([Term::TRUE]),
        }
    }

    /// The expression consisting of a single term.
    pub fn single(term: Term) -> Self {
        Expression {
            terms: BTreeSet::from([term]),
        }
    }

    /// Build a minimised expression from an arbitrary (possibly redundant)
    /// collection of terms.
    ///
    /// Sort ascending by order, then keep a candidate only if no
    /// already-kept term implies it is redundant against it. Because
    /// candidates are processed in non-decreasing order, a kept term of
    /// lower-or-equal order can never later be discarded: absorption only
    /// ever removes the higher-order side.
    pub fn from_terms(terms: impl IntoIterator<Item = Term>) -> Self {
        let mut sorted: Vec<Term> = terms.into_iter().collect();
        sorted.sort_by_key(|t| t.order());

        let mut kept: Vec<Term> = Vec::new();
        for candidate in sorted {
            if !kept.iter().any(|&k| candidate.implies(k)) {
                kept.push(candidate);
            }
        }

        Expression {
            terms: kept.into_iter().collect(),
        }
    }

    pub fn terms(&self) -> impl Iterator<Item = Term> + '_ {
        self.terms.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn is_true(&self) -> bool {
        self.terms.len() == 1 && self.terms.contains(&Term::TRUE)
    }

    /// `Expression.conjunction(E1, ..., Ek)`: distribute — Cartesian product
    /// of the term lists, term-wise conjunction, then minimise. The empty
    /// conjunction (`k == 0`) is `True`.
    pub fn conjunction<'a>(expressions: impl IntoIterator<Item = &'a Expression>) -> Expression {
        let mut acc: Vec<Term> = vec![Term::TRUE];

        for expr in expressions {
            let mut next = Vec::with_capacity(acc.len() * expr.terms.len().max(1));
            for &lhs in &acc {
                for &rhs in &expr.terms {
                    next.push(Term::conjunction([lhs, rhs]));
                }
            }
            acc = next;
            if acc.is_empty() {
                break;
            }
        }

        Expression::from_terms(acc)
    }

    /// `Expression.disjunction(E1, ..., Ek)`: union all terms then minimise.
    pub fn disjunction<'a>(expressions: impl IntoIterator<Item = &'a Expression>) -> Expression {
        let all_terms = expressions.into_iter().flat_map(|e| e.terms.iter().copied());
        Expression::from_terms(all_terms)
    }

    /// `Expression.vote(E1, ..., En, k)`: OR over every k-subset `S` of the
    /// inputs of the conjunction of `S`.
    ///
    /// Edge cases: `k <= 0` is `True`; `k > n` is `False`.
    pub fn vote(expressions: &[Expression], k: i64) -> Expression {
        let n = expressions.len();

        if k <= 0 {
            return Expression::true_();
        }
        if k as usize > n {
            return Expression::false_();
        }

        let k = k as usize;
        let mut terms = Vec::new();
        for combo in combinations(n, k) {
            let chosen = combo.iter().map(|&i| &expressions[i]);
            let conj = Expression::conjunction(chosen);
            terms.extend(conj.terms.iter().copied());
        }

        Expression::from_terms(terms)
    }
}

/// Ascending index combinations of size `k` out of `0..n`.
fn combinations(n: usize, k: usize) -> Vec<Vec<usize>> {
    let mut result = Vec::new();
    let mut current = Vec::with_capacity(k);

    fn recurse(start: usize, n: usize, k: usize, current: &mut Vec<usize>, result: &mut Vec<Vec<usize>>) {
        if current.len() == k {
            result.push(current.clone());
            return;
        }
        for i in start..n {
            current.push(i);
            recurse(i + 1, n, k, current, result);
            current.pop();
        }
    }

    recurse(0, n, k, &mut current, &mut result);
    result
}

#[cfg(test)]
#[path = "boolean_tests.rs"]
mod boolean_tests;
