//! The field expander: one constrained-alphabet token in, a sorted set of
//! integers out.
//!
//! A token is a single atom or a comma-separated list of atoms. Supported
//! atom forms, in the precedence order they are recognized:
//!
//! - `<day>W` — nearest-weekday marker (day-of-month only), recognized and
//!   rejected as unsupported
//! - `*/N`, `A/N`, `A-B/N` — stepped forms; values start at the resolved
//!   range start and advance by N
//! - `X,Y,Z` — comma list; each segment is a plain value, an alias, or a
//!   range `A-B` (step forms do not combine with commas)
//! - `A-B` — inclusive range
//! - `*` — the full field range; `?` likewise where the field admits it
//! - `A` — a single value or alias
//!
//! Atoms resolve alias-first, integer-parse fallback. Any invalid atom fails
//! the whole token.

use std::collections::BTreeSet;

use crate::error::InvalidFieldError;
use crate::field::FieldSpec;

/// Expands a field token into the ordered set of integers it denotes.
///
/// The result is strictly ascending, de-duplicated, and bounded by the
/// field's `[min, max]` range.
///
/// # Example
/// ```
/// use cronspell_schedule::{expand, FieldSpec};
///
/// let minutes = expand("*/15", &FieldSpec::MINUTE).unwrap();
/// assert_eq!(minutes, vec![0, 15, 30, 45]);
/// ```
pub fn expand(token: &str, spec: &FieldSpec) -> Result<Vec<u32>, InvalidFieldError> {
    if token.is_empty() {
        return Err(InvalidFieldError::EmptyToken);
    }

    if spec.accepts_nearest_weekday() && token.contains('W') {
        return Err(InvalidFieldError::NearestWeekdayUnsupported {
            token: token.to_string(),
        });
    }

    if let Some((start_expr, raw_step)) = token.split_once('/') {
        return expand_step(start_expr, raw_step, spec);
    }

    if token.contains(',') {
        return expand_list(token, spec);
    }

    if let Some((start_expr, end_expr)) = token.split_once('-') {
        return expand_range(start_expr, end_expr, spec);
    }

    if token == "*" || (token == "?" && spec.accepts_unspecified()) {
        return Ok(spec.all_values());
    }

    spec.resolve(token).map(|value| vec![value])
}

/// Expands a stepped form: `*/N`, `A/N`, or `A-B/N`.
///
/// The first element is always the resolved range start; consecutive elements
/// differ by exactly the step amount.
fn expand_step(
    start_expr: &str,
    raw_step: &str,
    spec: &FieldSpec,
) -> Result<Vec<u32>, InvalidFieldError> {
    let step = parse_step(raw_step)?;

    let (start, end) = if start_expr == "*" || (start_expr == "?" && spec.accepts_unspecified()) {
        (spec.min(), spec.max())
    } else if let Some((a, b)) = start_expr.split_once('-') {
        let start = spec.resolve(a)?;
        let end = spec.resolve(b)?;
        if start > end {
            return Err(InvalidFieldError::ReversedRange { start, end });
        }
        (start, end)
    } else {
        (spec.resolve(start_expr)?, spec.max())
    };

    Ok((start..=end).step_by(step as usize).collect())
}

/// Expands a comma list whose segments are plain values, aliases, or ranges.
fn expand_list(token: &str, spec: &FieldSpec) -> Result<Vec<u32>, InvalidFieldError> {
    let mut values = BTreeSet::new();

    for atom in token.split(',') {
        if let Some((start_expr, end_expr)) = atom.split_once('-') {
            values.extend(expand_range(start_expr, end_expr, spec)?);
        } else {
            values.insert(spec.resolve(atom)?);
        }
    }

    Ok(values.into_iter().collect())
}

/// Expands an inclusive range `A-B` with resolved endpoints.
fn expand_range(
    start_expr: &str,
    end_expr: &str,
    spec: &FieldSpec,
) -> Result<Vec<u32>, InvalidFieldError> {
    let start = spec.resolve(start_expr)?;
    let end = spec.resolve(end_expr)?;

    if start > end {
        return Err(InvalidFieldError::ReversedRange { start, end });
    }

    Ok((start..=end).collect())
}

/// Parses a step amount, rejecting zero and anything non-numeric.
fn parse_step(raw: &str) -> Result<u32, InvalidFieldError> {
    match raw.parse::<u32>() {
        Ok(step) if step > 0 => Ok(step),
        _ => Err(InvalidFieldError::InvalidStep {
            step: raw.to_string(),
        }),
    }
}
