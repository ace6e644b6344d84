use serde::Serialize;

use crate::config::CommandEntry;
use crate::grammar::{Datatype, Dispatch, Match, Parameter, Pattern, Token};

/// JSON written by `cmdpat inspect`.
#[derive(Debug, Serialize, PartialEq)]
pub struct InspectOutput {
    pub text: String,
    pub expression: String,
    pub tokens: Vec<Token>,
    pub parameters: Vec<ParameterInfo>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct ParameterInfo {
    pub name: String,
    pub datatype: Datatype,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

/// JSON written by `cmdpat match`.
#[derive(Debug, Serialize, PartialEq)]
pub struct MatchOutput {
    pub matched: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<CapturedValue>,
}

/// JSON written by `cmdpat dispatch`, one object per input line.
#[derive(Debug, Serialize, PartialEq)]
pub struct DispatchOutput {
    pub line: String,
    pub usage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<CapturedValue>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct CapturedValue {
    pub name: String,
    pub value: String,
}

pub fn build_inspect_output(pattern: &Pattern) -> InspectOutput {
    InspectOutput {
        text: pattern.text().to_string(),
        expression: pattern.expression().as_str().to_string(),
        tokens: pattern.tokens().to_vec(),
        parameters: pattern.parameters().iter().map(parameter_info).collect(),
    }
}

pub fn build_match_output(matched: Option<&Match<'_>>) -> MatchOutput {
    MatchOutput {
        matched: matched.is_some(),
        parameters: matched.map(captured_values).unwrap_or_default(),
    }
}

pub fn build_dispatch_output(
    line: &str,
    dispatch: Option<&Dispatch<'_, CommandEntry>>,
) -> DispatchOutput {
    match dispatch {
        Some(dispatch) => DispatchOutput {
            line: dispatch.matched().line().to_string(),
            usage: Some(dispatch.definition().usage.clone()),
            description: dispatch.definition().description.clone(),
            parameters: captured_values(dispatch.matched()),
        },
        None => DispatchOutput {
            line: line.to_string(),
            usage: None,
            description: None,
            parameters: Vec::new(),
        },
    }
}

fn parameter_info(parameter: &Parameter) -> ParameterInfo {
    ParameterInfo {
        name: parameter.name().to_string(),
        datatype: parameter.datatype(),
        options: parameter.options().map(<[String]>::to_vec),
    }
}

fn captured_values(matched: &Match<'_>) -> Vec<CapturedValue> {
    matched
        .values()
        .map(|(name, value)| CapturedValue {
            name: name.to_string(),
            value: value.to_string(),
        })
        .collect()
}
