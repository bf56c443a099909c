//! Parser for the Nodes/Constraints text format.

use super::types::Problem;
use crate::error::LoadError;
use crate::network::{Constraint, ConstraintNetwork, Operator, Term, Variable};
use log::debug;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Preamble,
    Nodes,
    Constraints,
}

fn syntax(line: usize, message: impl Into<String>) -> LoadError {
    LoadError::Syntax {
        line,
        message: message.into(),
    }
}

/// Parses a problem description.
///
/// ```text
/// Nodes
/// A,1,2,3
/// B,1,2,3
/// Constraints
/// A,>,B
/// B,!=,2
/// ```
///
/// Tokens are trimmed, blank lines and lines starting with `#` are skipped.
/// A constraint side that parses as an integer is a constant; anything else
/// is a variable key.
pub fn parse(text: &str) -> Result<Problem, LoadError> {
    let mut problem = Problem::default();
    let mut section = Section::Preamble;
    let mut seen_constraints = false;

    for (i, raw) in text.lines().enumerate() {
        let line_no = i + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match line {
            "Nodes" => {
                if section != Section::Preamble {
                    return Err(syntax(line_no, "`Nodes` must be the first section"));
                }
                section = Section::Nodes;
                continue;
            }
            "Constraints" => {
                if section != Section::Nodes {
                    return Err(syntax(line_no, "`Constraints` must follow `Nodes`"));
                }
                section = Section::Constraints;
                seen_constraints = true;
                continue;
            }
            _ => {}
        }

        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        match section {
            Section::Preamble => {
                return Err(syntax(line_no, "expected `Nodes` header"));
            }
            Section::Nodes => problem.variables.push(parse_node(line_no, &fields)?),
            Section::Constraints => problem
                .constraints
                .push(parse_constraint(line_no, &fields)?),
        }
    }

    if section == Section::Preamble {
        return Err(syntax(0, "missing `Nodes` section"));
    }
    if !seen_constraints {
        return Err(syntax(0, "missing `Constraints` section"));
    }

    debug!(
        "parsed problem: {} variables, {} constraints",
        problem.variables.len(),
        problem.constraints.len()
    );
    Ok(problem)
}

fn parse_node(line: usize, fields: &[&str]) -> Result<Variable, LoadError> {
    let key = fields[0];
    if key.is_empty() {
        return Err(syntax(line, "empty variable key"));
    }
    if key.parse::<i64>().is_ok() {
        return Err(syntax(line, format!("variable key `{key}` is numeric")));
    }
    let mut domain = Vec::with_capacity(fields.len() - 1);
    for token in &fields[1..] {
        let value = token
            .parse::<i64>()
            .map_err(|_| syntax(line, format!("invalid domain value `{token}`")))?;
        domain.push(value);
    }
    Ok(Variable::new(key, domain))
}

fn parse_constraint(line: usize, fields: &[&str]) -> Result<Constraint, LoadError> {
    let [left, op, right] = fields else {
        return Err(syntax(
            line,
            format!("expected `left,op,right`, got {} field(s)", fields.len()),
        ));
    };
    if left.is_empty() || right.is_empty() {
        return Err(syntax(line, "empty constraint term"));
    }
    let op = Operator::from_str(op).map_err(|message| syntax(line, message))?;
    Ok(Constraint::new(
        Term::parse_token(left),
        op,
        Term::parse_token(right),
    ))
}

impl FromStr for Problem {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Reads a problem file.
pub fn read_problem(path: impl AsRef<Path>) -> Result<Problem, LoadError> {
    let text = std::fs::read_to_string(path)?;
    parse(&text)
}

/// Reads a problem file and builds its network.
pub fn load_file(path: impl AsRef<Path>) -> Result<ConstraintNetwork, LoadError> {
    Ok(read_problem(path)?.into_network()?)
}
