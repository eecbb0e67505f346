//! Goal literal surface syntax: `relation(arg, arg)` or
//! `relation(arg, arg, arg)`.
//!
//! ```text
//! dfl:hasDisposition(dfl:Cup1, ?d)
//! useMatch(dfl:Cutting, ?tool, dfl:Apple1)
//! ```
//!
//! Arguments starting with `?` are variables; everything else is a name and
//! is handed to the evaluator verbatim (prefixed, fully qualified, or quoted
//! names all pass through unchanged).

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{char, multispace0},
    combinator::all_consuming,
    multi::separated_list1,
    sequence::{delimited, preceded, terminated},
    IResult,
};
use thiserror::Error;

use ontogoal_model::{Goal, GoalArg};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LiteralError {
    #[error("malformed goal literal: `{0}`")]
    Malformed(String),
}

fn relation(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| !c.is_whitespace() && c != '(')(input)
}

fn bare_name(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| !c.is_whitespace() && c != ',' && c != ')')(input)
}

fn variable(input: &str) -> IResult<&str, GoalArg> {
    let (rest, name) = preceded(tag("?"), bare_name)(input)?;
    Ok((rest, GoalArg::variable(name)))
}

fn name(input: &str) -> IResult<&str, GoalArg> {
    let (rest, raw) = bare_name(input)?;
    Ok((rest, GoalArg::name(raw)))
}

fn argument(input: &str) -> IResult<&str, GoalArg> {
    delimited(multispace0, alt((variable, name)), multispace0)(input)
}

fn literal(input: &str) -> IResult<&str, Goal> {
    let (rest, rel) = delimited(multispace0, relation, multispace0)(input)?;
    let (rest, args) = terminated(
        delimited(
            char('('),
            separated_list1(char(','), argument),
            char(')'),
        ),
        multispace0,
    )(rest)?;
    Ok((rest, Goal {
        relation: rel.to_string(),
        args,
    }))
}

/// Parse one goal literal. Arity checking is left to the evaluator so the
/// error names the relation's expected shape.
pub fn parse_literal(input: &str) -> Result<Goal, LiteralError> {
    let (_, goal) = all_consuming(literal)(input)
        .map_err(|_| LiteralError::Malformed(input.to_string()))?;
    Ok(goal)
}
