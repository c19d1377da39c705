// File: src/expression.rs
// Purpose: Evaluates `${...}` expressions embedded in configured view paths

use crate::error::ExpressionError;
use crate::request_context::VariableContext;
use crate::value::Value;
use once_cell::sync::Lazy;
use regex::Regex;

static SEGMENT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*$").expect("valid segment pattern"));

/// Turns a view template into a plain path
pub trait Evaluator: Send + Sync {
    fn parse_expression(
        &self,
        template: &str,
        ctx: &dyn VariableContext,
    ) -> Result<String, ExpressionError>;
}

/// Default evaluator.
///
/// `${name}` and `${name.field.sub}` are replaced by the matching request
/// variable; everything else is copied verbatim. A variable that does not
/// exist renders as the empty string, while a template that cannot be parsed
/// is an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpressionEvaluator;

impl ExpressionEvaluator {
    pub fn new() -> Self {
        Self
    }

    fn evaluate(
        &self,
        expression: &str,
        ctx: &dyn VariableContext,
    ) -> Result<String, ExpressionError> {
        if let Some(bad) = expression.split('.').find(|s| !SEGMENT_REGEX.is_match(s)) {
            return Err(ExpressionError::InvalidSegment {
                expression: expression.to_string(),
                segment: bad.to_string(),
            });
        }

        let mut segments = expression.split('.');
        let first = segments.next().unwrap_or_default();
        let Some(mut current) = ctx.variable(first) else {
            return Ok(String::new());
        };

        let mut walked = first.to_string();
        for segment in segments {
            let next = match &current {
                Value::Object(map) => map.get(segment).cloned(),
                Value::Null => None,
                _ => {
                    return Err(ExpressionError::NotAnObject {
                        expression: expression.to_string(),
                        path: walked,
                    })
                }
            };
            match next {
                Some(value) => current = value,
                None => return Ok(String::new()),
            }
            walked.push('.');
            walked.push_str(segment);
        }

        Ok(current.to_string())
    }
}

impl Evaluator for ExpressionEvaluator {
    fn parse_expression(
        &self,
        template: &str,
        ctx: &dyn VariableContext,
    ) -> Result<String, ExpressionError> {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;
        let mut offset = 0;

        while let Some(start) = rest.find("${") {
            out.push_str(&rest[..start]);

            let body = start + 2;
            let end = rest[body..]
                .find('}')
                .ok_or(ExpressionError::Unterminated { position: offset + start })?;

            let expression = rest[body..body + end].trim();
            if expression.is_empty() {
                return Err(ExpressionError::Empty { position: offset + start });
            }
            out.push_str(&self.evaluate(expression, ctx)?);

            let consumed = body + end + 1;
            offset += consumed;
            rest = &rest[consumed..];
        }

        out.push_str(rest);
        Ok(out)
    }
}
