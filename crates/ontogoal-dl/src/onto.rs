//! `.onto` surface syntax: a line-oriented taxonomy declaration format.
//!
//! ```text
//! # comments run to end of line
//! class dfl:PhysicalObject
//! subclass dfl:DrinkingCup dfl:Container
//! disposition dfl:Container dfl:Containment
//! part dfl:DrinkingCup dfl:Handle
//! constituent dfl:DrinkingCup dfl:Ceramic
//! affordance dfl:Cutting dfl:Knife dfl:Cuttable
//! ```
//!
//! Names may be prefixed or fully qualified; expansion happens through the
//! shared `NameResolver` when the declarations are loaded into an engine.

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{multispace0, multispace1},
    combinator::all_consuming,
    sequence::{preceded, terminated, tuple},
    IResult,
};
use thiserror::Error;

use ontogoal_model::{NameResolver, ResolveError};

use crate::TaxonomyEngine;

/// One parsed `.onto` declaration, names still in external form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OntoDecl {
    Class { name: String },
    Subclass { sub: String, sup: String },
    Disposition { class: String, disposition: String },
    Part { class: String, part: String },
    Constituent { class: String, constituent: String },
    Affordance { task: String, tool: String, patient: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OntoParseError {
    #[error("parse error on line {line}: {message}")]
    Line { line: usize, message: String },
}

#[derive(Debug, Error)]
pub enum OntoLoadError {
    #[error(transparent)]
    Parse(#[from] OntoParseError),
    #[error("cannot resolve `{name}`: {source}")]
    Resolve {
        name: String,
        #[source]
        source: ResolveError,
    },
}

// ============================================================================
// Parser
// ============================================================================

fn name(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| !c.is_whitespace() && c != '#')(input)
}

fn keyword<'a>(kw: &'static str) -> impl FnMut(&'a str) -> IResult<&'a str, &'a str> {
    terminated(tag(kw), multispace1)
}

fn class_decl(input: &str) -> IResult<&str, OntoDecl> {
    let (rest, name) = preceded(keyword("class"), name)(input)?;
    Ok((rest, OntoDecl::Class {
        name: name.to_string(),
    }))
}

fn subclass_decl(input: &str) -> IResult<&str, OntoDecl> {
    let (rest, (sub, _, sup)) =
        preceded(keyword("subclass"), tuple((name, multispace1, name)))(input)?;
    Ok((rest, OntoDecl::Subclass {
        sub: sub.to_string(),
        sup: sup.to_string(),
    }))
}

fn disposition_decl(input: &str) -> IResult<&str, OntoDecl> {
    let (rest, (class, _, disposition)) =
        preceded(keyword("disposition"), tuple((name, multispace1, name)))(input)?;
    Ok((rest, OntoDecl::Disposition {
        class: class.to_string(),
        disposition: disposition.to_string(),
    }))
}

fn part_decl(input: &str) -> IResult<&str, OntoDecl> {
    let (rest, (class, _, part)) =
        preceded(keyword("part"), tuple((name, multispace1, name)))(input)?;
    Ok((rest, OntoDecl::Part {
        class: class.to_string(),
        part: part.to_string(),
    }))
}

fn constituent_decl(input: &str) -> IResult<&str, OntoDecl> {
    let (rest, (class, _, constituent)) =
        preceded(keyword("constituent"), tuple((name, multispace1, name)))(input)?;
    Ok((rest, OntoDecl::Constituent {
        class: class.to_string(),
        constituent: constituent.to_string(),
    }))
}

fn affordance_decl(input: &str) -> IResult<&str, OntoDecl> {
    let (rest, (task, _, tool, _, patient)) = preceded(
        keyword("affordance"),
        tuple((name, multispace1, name, multispace1, name)),
    )(input)?;
    Ok((rest, OntoDecl::Affordance {
        task: task.to_string(),
        tool: tool.to_string(),
        patient: patient.to_string(),
    }))
}

fn decl(input: &str) -> IResult<&str, OntoDecl> {
    all_consuming(terminated(
        alt((
            class_decl,
            subclass_decl,
            disposition_decl,
            part_decl,
            constituent_decl,
            affordance_decl,
        )),
        multispace0,
    ))(input)
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

/// Parse a whole `.onto` document into declarations.
pub fn parse_onto(text: &str) -> Result<Vec<OntoDecl>, OntoParseError> {
    let mut decls = Vec::new();
    for (i, raw) in text.lines().enumerate() {
        let line = strip_comment(raw).trim();
        if line.is_empty() {
            continue;
        }
        let (_, parsed) = decl(line).map_err(|_| OntoParseError::Line {
            line: i + 1,
            message: format!("unrecognized declaration: `{line}`"),
        })?;
        decls.push(parsed);
    }
    Ok(decls)
}

// ============================================================================
// Loading
// ============================================================================

impl TaxonomyEngine {
    /// Build an engine from `.onto` text, expanding every name through
    /// `resolver`. The engine still needs `initialize` before use.
    pub fn from_onto<R: NameResolver>(text: &str, resolver: &R) -> Result<Self, OntoLoadError> {
        let decls = parse_onto(text)?;
        let mut engine = TaxonomyEngine::new();
        let resolve = |raw: &str| {
            resolver.resolve(raw).map_err(|source| OntoLoadError::Resolve {
                name: raw.to_string(),
                source,
            })
        };
        for decl in &decls {
            match decl {
                OntoDecl::Class { name } => engine.declare_class(resolve(name)?),
                OntoDecl::Subclass { sub, sup } => {
                    engine.declare_subclass(resolve(sub)?, resolve(sup)?)
                }
                OntoDecl::Disposition { class, disposition } => {
                    engine.declare_disposition(resolve(class)?, resolve(disposition)?)
                }
                OntoDecl::Part { class, part } => {
                    engine.declare_part(resolve(class)?, resolve(part)?)
                }
                OntoDecl::Constituent { class, constituent } => {
                    engine.declare_constituent(resolve(class)?, resolve(constituent)?)
                }
                OntoDecl::Affordance { task, tool, patient } => {
                    engine.declare_affordance(resolve(task)?, resolve(tool)?, resolve(patient)?)
                }
            }
        }
        Ok(engine)
    }
}
