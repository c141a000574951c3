use crate::{
    dsl::{CriteriaError, SearchRequest, Token, TokenKind},
    query::Criteria,
    record::FileKind,
};

/// Comparison operator in a `size:` atom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CmpOp {
    Eq,
    Gt,
    Ge,
    Lt,
    Le,
}

impl CmpOp {
    pub(crate) fn from_token(kind: TokenKind) -> Option<CmpOp> {
        match kind {
            TokenKind::Eq => Some(CmpOp::Eq),
            TokenKind::Gt => Some(CmpOp::Gt),
            TokenKind::Gte => Some(CmpOp::Ge),
            TokenKind::Lt => Some(CmpOp::Lt),
            TokenKind::Lte => Some(CmpOp::Le),
            _ => None,
        }
    }
}

/// Fold one `field:value` atom into the request.
///
/// Later atoms overwrite earlier ones, except size bounds, which only narrow.
pub(crate) fn apply_field(
    req: &mut SearchRequest,
    field: &str,
    op: Option<CmpOp>,
    value: &Token<'_>,
) -> Result<(), CriteriaError> {
    let field_lc = field.to_ascii_lowercase();
    let text = value.lexeme;

    let size_op = match field_lc.as_str() {
        "size" => Some(op.unwrap_or(CmpOp::Eq)),
        "min" => Some(CmpOp::Ge),
        "max" => Some(CmpOp::Le),
        _ => None,
    };

    if let Some(size_op) = size_op {
        if op.is_some() && field_lc != "size" {
            return Err(CriteriaError::UnsupportedComparison(field.to_owned()));
        }
        // Empty leaves the range as is.
        if text.is_empty() {
            return Ok(());
        }
        let kb = parse_size_value(text)?;
        narrow_size(&mut req.criteria, size_op, kb);
        return Ok(());
    }

    if matches!(op, Some(op) if op != CmpOp::Eq) {
        return Err(CriteriaError::UnsupportedComparison(field.to_owned()));
    }

    let criteria = &mut req.criteria;
    match field_lc.as_str() {
        "type" | "kind" => criteria.kind = parse_kind(text)?,
        "tag" => criteria.tag = non_empty(text),
        "created" => criteria.created = non_empty(text),
        "modified" => criteria.modified = non_empty(text),
        "sort" => req.sort = non_empty(text),
        _ => return Err(CriteriaError::UnknownField(field.to_owned())),
    }

    Ok(())
}

/// Empty values mean "any".
fn non_empty(text: &str) -> Option<String> {
    (!text.is_empty()).then(|| text.to_owned())
}

/// Variant name (`ImageFile`) or type code (`jpg`). Empty means any type.
fn parse_kind(text: &str) -> Result<Option<FileKind>, CriteriaError> {
    if text.is_empty() {
        return Ok(None);
    }
    text.parse::<FileKind>()
        .or_else(|_| FileKind::from_code(&text.to_ascii_lowercase()))
        .map(Some)
        .map_err(|_| CriteriaError::UnknownType(text.to_owned()))
}

/// Parse `1500`, `1500KB` or `2MB` into kilobytes. Units are case-insensitive
/// and a bare number is kilobytes.
pub(crate) fn parse_size_value(text: &str) -> Result<u64, CriteriaError> {
    let invalid = || CriteriaError::InvalidSize(text.to_owned());

    let split = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    let (digits, unit) = text.split_at(split);

    let value: u64 = digits.parse().map_err(|_| invalid())?;
    let factor = match unit.to_ascii_lowercase().as_str() {
        "" | "kb" | "k" => 1,
        "mb" | "m" => 1024,
        _ => return Err(invalid()),
    };

    value.checked_mul(factor).ok_or_else(invalid)
}

fn narrow_size(criteria: &mut Criteria, op: CmpOp, kb: u64) {
    let (lo, hi) = match op {
        CmpOp::Eq => (Some(kb), Some(kb)),
        CmpOp::Ge => (Some(kb), None),
        CmpOp::Le => (None, Some(kb)),
        CmpOp::Gt => match kb.checked_add(1) {
            Some(lo) => (Some(lo), None),
            None => return make_unsatisfiable(criteria),
        },
        CmpOp::Lt => match kb.checked_sub(1) {
            Some(hi) => (None, Some(hi)),
            None => return make_unsatisfiable(criteria),
        },
    };

    if let Some(lo) = lo {
        criteria.min_size_kb = criteria.min_size_kb.max(lo);
    }
    if let Some(hi) = hi {
        criteria.max_size_kb = criteria.max_size_kb.min(hi);
    }
}

// min > max matches nothing, and later atoms can only narrow further.
fn make_unsatisfiable(criteria: &mut Criteria) {
    criteria.min_size_kb = criteria.min_size_kb.max(1);
    criteria.max_size_kb = 0;
}

#[cfg(test)]
#[path = "fields_tests.rs"]
mod tests;
