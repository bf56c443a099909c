//! Constraint network: variables, constraints and the incidence index.

use super::term::{consistent, Operator, Term};
use crate::error::{CspError, Result};
use std::collections::{BTreeMap, HashMap};

/// A complete or partial assignment of values to variable keys.
pub type Assignment = BTreeMap<String, i64>;

/// A decision variable with an ordered, duplicate-free domain.
///
/// Domain order is insertion order and is significant: both arc-consistency
/// and search iterate values in this order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Variable {
    /// Unique key within a network.
    pub key: String,
    /// Candidate values.
    pub domain: Vec<i64>,
}

impl Variable {
    /// Creates a variable. Repeated values keep their first occurrence.
    pub fn new(key: impl Into<String>, domain: impl IntoIterator<Item = i64>) -> Self {
        Self {
            key: key.into(),
            domain: dedup_first(domain),
        }
    }
}

fn dedup_first(domain: impl IntoIterator<Item = i64>) -> Vec<i64> {
    let mut values = Vec::new();
    for v in domain {
        if !values.contains(&v) {
            values.push(v);
        }
    }
    values
}

/// A binary relational constraint `left op right`.
///
/// # Examples
///
/// ```
/// use u_csp::network::{Constraint, Operator, Term};
///
/// let c = Constraint::new(Term::var("A"), Operator::Gt, Term::var("B"));
/// assert!(c.mentions("A"));
/// assert!(!c.mentions("C"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Constraint {
    pub left: Term,
    pub op: Operator,
    pub right: Term,
}

impl Constraint {
    pub fn new(left: Term, op: Operator, right: Term) -> Self {
        Self { left, op, right }
    }

    /// Convenience: constraint between two variable keys.
    pub fn vars(left: impl Into<String>, op: Operator, right: impl Into<String>) -> Self {
        Self::new(Term::Var(left.into()), op, Term::Var(right.into()))
    }

    /// Whether either side references `key`.
    pub fn mentions(&self, key: &str) -> bool {
        self.left.key() == Some(key) || self.right.key() == Some(key)
    }
}

/// Which side of a constraint a variable occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

/// A constraint endpoint resolved against the variable table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Endpoint {
    Var(usize),
    Const(i64),
}

/// Resolved form of a [`Constraint`]: keys replaced by variable indices.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Edge {
    pub left: Endpoint,
    pub op: Operator,
    pub right: Endpoint,
}

impl Edge {
    /// The endpoint opposite to `side`.
    pub fn other(&self, side: Side) -> Endpoint {
        match side {
            Side::Left => self.right,
            Side::Right => self.left,
        }
    }

    /// Tests `value` (at `side`) against `other` (at the opposite side).
    #[inline]
    pub fn allows(&self, side: Side, value: i64, other: i64) -> bool {
        match side {
            Side::Left => consistent(value, other, self.op),
            Side::Right => consistent(other, value, self.op),
        }
    }
}

/// One mention of a variable in a constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Incidence {
    pub constraint: usize,
    pub side: Side,
}

/// A finite-domain constraint network.
///
/// Owns the variables (in declaration order), the constraint list and a
/// per-variable index of incident constraints. The topology is fixed at
/// construction; only domains change afterwards, and only through
/// arc-consistency.
///
/// # Examples
///
/// ```
/// use u_csp::network::{Constraint, ConstraintNetwork, Operator, Variable};
///
/// let network = ConstraintNetwork::new(
///     vec![Variable::new("A", [1, 2, 3]), Variable::new("B", [1, 2, 3])],
///     vec![Constraint::vars("A", Operator::Gt, "B")],
/// )
/// .unwrap();
///
/// assert_eq!(network.variable_count(), 2);
/// assert_eq!(network.domain_size_total(), 6);
/// assert_eq!(network.incident("A").unwrap().count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct ConstraintNetwork {
    variables: Vec<Variable>,
    positions: HashMap<String, usize>,
    constraints: Vec<Constraint>,
    edges: Vec<Edge>,
    incidence: Vec<Vec<Incidence>>,
}

impl ConstraintNetwork {
    /// Builds a network and its incidence index.
    ///
    /// # Errors
    ///
    /// - [`CspError::DuplicateVariable`] if a key is declared twice
    /// - [`CspError::EmptyDomain`] if a variable has no values
    /// - [`CspError::InvalidConstraint`] if a constraint names an unknown key
    ///
    /// Repeated domain values keep their first occurrence, as in
    /// [`Variable::new`].
    pub fn new(mut variables: Vec<Variable>, constraints: Vec<Constraint>) -> Result<Self> {
        let mut positions = HashMap::with_capacity(variables.len());
        for (i, var) in variables.iter_mut().enumerate() {
            var.domain = dedup_first(std::mem::take(&mut var.domain));
            if var.domain.is_empty() {
                return Err(CspError::EmptyDomain {
                    key: var.key.clone(),
                });
            }
            if positions.insert(var.key.clone(), i).is_some() {
                return Err(CspError::DuplicateVariable {
                    key: var.key.clone(),
                });
            }
        }

        let resolve = |index: usize, term: &Term| -> Result<Endpoint> {
            match term {
                Term::Const(value) => Ok(Endpoint::Const(*value)),
                Term::Var(key) => positions
                    .get(key)
                    .map(|&i| Endpoint::Var(i))
                    .ok_or_else(|| CspError::InvalidConstraint {
                        index,
                        key: key.clone(),
                    }),
            }
        };

        let mut edges = Vec::with_capacity(constraints.len());
        for (index, c) in constraints.iter().enumerate() {
            edges.push(Edge {
                left: resolve(index, &c.left)?,
                op: c.op,
                right: resolve(index, &c.right)?,
            });
        }

        // Index in constraint order; a self-referencing constraint is listed
        // once per mention.
        let mut incidence = vec![Vec::new(); variables.len()];
        for (ci, edge) in edges.iter().enumerate() {
            if let Endpoint::Var(v) = edge.left {
                incidence[v].push(Incidence {
                    constraint: ci,
                    side: Side::Left,
                });
            }
            if let Endpoint::Var(v) = edge.right {
                incidence[v].push(Incidence {
                    constraint: ci,
                    side: Side::Right,
                });
            }
        }

        Ok(Self {
            variables,
            positions,
            constraints,
            edges,
            incidence,
        })
    }

    /// Sum of all current domain sizes.
    pub fn domain_size_total(&self) -> usize {
        self.variables.iter().map(|v| v.domain.len()).sum()
    }

    /// Number of variables.
    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    /// Number of constraints.
    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }

    /// Variables in declaration order.
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// Constraints in insertion order.
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Current domain of `key`, or `None` if undeclared.
    pub fn domain(&self, key: &str) -> Option<&[i64]> {
        self.positions
            .get(key)
            .map(|&i| self.variables[i].domain.as_slice())
    }

    /// Constraints mentioning `key`, in insertion order, once per mention.
    pub fn incident<'a>(&'a self, key: &str) -> Option<impl Iterator<Item = &'a Constraint> + 'a> {
        let i = *self.positions.get(key)?;
        Some(
            self.incidence[i]
                .iter()
                .map(move |inc| &self.constraints[inc.constraint]),
        )
    }

    /// Whether a complete assignment satisfies every constraint.
    ///
    /// Returns `false` if any variable is missing or holds a value outside
    /// its current domain.
    pub fn is_satisfied_by(&self, assignment: &Assignment) -> bool {
        let mut values = Vec::with_capacity(self.variables.len());
        for var in &self.variables {
            match assignment.get(&var.key) {
                Some(&v) if var.domain.contains(&v) => values.push(v),
                _ => return false,
            }
        }
        let value_of = |e: Endpoint| match e {
            Endpoint::Var(i) => values[i],
            Endpoint::Const(c) => c,
        };
        self.edges
            .iter()
            .all(|e| consistent(value_of(e.left), value_of(e.right), e.op))
    }

    pub(crate) fn key_at(&self, var: usize) -> &str {
        &self.variables[var].key
    }

    pub(crate) fn domain_at(&self, var: usize) -> &[i64] {
        &self.variables[var].domain
    }

    pub(crate) fn incidence_at(&self, var: usize) -> &[Incidence] {
        &self.incidence[var]
    }

    pub(crate) fn edge(&self, constraint: usize) -> &Edge {
        &self.edges[constraint]
    }

    pub(crate) fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Removes `value` from a domain, preserving the order of the rest.
    pub(crate) fn remove_value(&mut self, var: usize, value: i64) -> bool {
        let domain = &mut self.variables[var].domain;
        match domain.iter().position(|&v| v == value) {
            Some(pos) => {
                domain.remove(pos);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abcd() -> ConstraintNetwork {
        let vars = ["A", "B", "C", "D"]
            .into_iter()
            .map(|k| Variable::new(k, [1, 2, 3, 4]))
            .collect();
        let constraints = vec![
            Constraint::vars("A", Operator::Gt, "B"),
            Constraint::vars("A", Operator::Lt, "D"),
            Constraint::vars("A", Operator::Eq, "C"),
            Constraint::vars("B", Operator::Lt, "C"),
        ];
        ConstraintNetwork::new(vars, constraints).unwrap()
    }

    #[test]
    fn test_incidence_in_insertion_order() {
        let network = abcd();
        let a: Vec<_> = network.incident("A").unwrap().cloned().collect();
        assert_eq!(
            a,
            vec![
                Constraint::vars("A", Operator::Gt, "B"),
                Constraint::vars("A", Operator::Lt, "D"),
                Constraint::vars("A", Operator::Eq, "C"),
            ]
        );
        assert_eq!(network.incident("B").unwrap().count(), 2);
        assert_eq!(network.incident("C").unwrap().count(), 2);
        assert_eq!(network.incident("D").unwrap().count(), 1);
        assert!(network.incident("E").is_none());
    }

    #[test]
    fn test_incidence_matches_mentions() {
        let network = abcd();
        for var in network.variables() {
            let indexed = network.incident(&var.key).unwrap().count();
            let mentioned = network
                .constraints()
                .iter()
                .filter(|c| c.mentions(&var.key))
                .count();
            assert_eq!(indexed, mentioned);
        }
    }

    #[test]
    fn test_self_reference_indexed_per_mention() {
        let network = ConstraintNetwork::new(
            vec![Variable::new("A", [1, 2])],
            vec![Constraint::vars("A", Operator::Le, "A")],
        )
        .unwrap();
        assert_eq!(network.incident("A").unwrap().count(), 2);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = ConstraintNetwork::new(
            vec![Variable::new("A", [1])],
            vec![
                Constraint::new(Term::var("A"), Operator::Lt, Term::constant(3)),
                Constraint::vars("A", Operator::Lt, "Z"),
            ],
        )
        .unwrap_err();
        assert_eq!(
            err,
            CspError::InvalidConstraint {
                index: 1,
                key: "Z".into()
            }
        );
    }

    #[test]
    fn test_empty_domain_rejected() {
        let err = ConstraintNetwork::new(
            vec![Variable::new("A", [1]), Variable::new("B", Vec::new())],
            vec![],
        )
        .unwrap_err();
        assert_eq!(err, CspError::EmptyDomain { key: "B".into() });
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let err = ConstraintNetwork::new(
            vec![Variable::new("A", [1]), Variable::new("A", [2])],
            vec![],
        )
        .unwrap_err();
        assert_eq!(err, CspError::DuplicateVariable { key: "A".into() });
    }

    #[test]
    fn test_network_dedups_literal_domain() {
        let network = ConstraintNetwork::new(
            vec![
                Variable {
                    key: "A".into(),
                    domain: vec![2, 2, 3],
                },
                Variable::new("B", [1]),
            ],
            vec![Constraint::vars("A", Operator::Gt, "B")],
        )
        .unwrap();

        assert_eq!(network.domain("A"), Some(&[2, 3][..]));
        assert_eq!(network.domain_size_total(), 3);

        let found = crate::search(&network, true);
        assert_eq!(found.solutions.len(), 2);
    }

    #[test]
    fn test_variable_dedups_domain() {
        let v = Variable::new("x", [3, 1, 3, 2, 1]);
        assert_eq!(v.domain, vec![3, 1, 2]);
    }

    #[test]
    fn test_sizes_and_domain_access() {
        let network = abcd();
        assert_eq!(network.variable_count(), 4);
        assert_eq!(network.constraint_count(), 4);
        assert_eq!(network.domain_size_total(), 16);
        assert_eq!(network.domain("C"), Some(&[1, 2, 3, 4][..]));
        assert_eq!(network.domain("Q"), None);
    }

    #[test]
    fn test_remove_value_keeps_order() {
        let mut network = abcd();
        assert!(network.remove_value(0, 2));
        assert!(!network.remove_value(0, 2));
        assert_eq!(network.domain("A"), Some(&[1, 3, 4][..]));
        assert_eq!(network.domain_size_total(), 15);
    }

    #[test]
    fn test_is_satisfied_by() {
        let network = abcd();
        let good: Assignment = [("A", 3), ("B", 2), ("C", 3), ("D", 4)]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        assert!(network.is_satisfied_by(&good));

        let mut bad = good.clone();
        bad.insert("D".into(), 1);
        assert!(!network.is_satisfied_by(&bad));

        let mut partial = good;
        partial.remove("B");
        assert!(!network.is_satisfied_by(&partial));
    }
}
