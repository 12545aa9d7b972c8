use crate::entity_tag::TagFilter;
use crate::preconditions::{AcceptCondition, Preconditions, RejectCondition};
use crate::result::ShortCircuit;
use crate::util::is_safe_method;
use crate::validator::Validators;

/// Applies RFC 7232 section 6 to freshly computed validators.
///
/// The accept and reject sides are checked independently; precedence inside
/// each side was settled while parsing.
pub(crate) fn evaluate(
    method: &str,
    preconditions: &Preconditions,
    validators: &Validators,
) -> Result<(), ShortCircuit> {
    let effective = validators.effective.timestamp_millis();

    match &preconditions.accept {
        Some(AcceptCondition::Tags(accepted)) => {
            if !tag_matches(accepted, validators.strong_tag.as_deref()) {
                return Err(ShortCircuit::PreconditionFailed);
            }
        }
        Some(AcceptCondition::UnmodifiedSince(max_inclusive)) => {
            if effective > max_inclusive.timestamp_millis() {
                return Err(ShortCircuit::PreconditionFailed);
            }
        }
        None => {}
    }

    match &preconditions.reject {
        Some(RejectCondition::Tags(rejected)) => {
            if tag_matches(rejected, validators.weak_tag.as_deref()) {
                return Err(if is_safe_method(method) {
                    not_modified(validators)
                } else {
                    ShortCircuit::PreconditionFailed
                });
            }
        }
        Some(RejectCondition::ModifiedSince(min_exclusive)) => {
            if effective <= min_exclusive.timestamp_millis() {
                return Err(not_modified(validators));
            }
        }
        None => {}
    }

    Ok(())
}

fn tag_matches(filter: &TagFilter, tag: Option<&str>) -> bool {
    tag.is_some_and(|tag| filter.matches(tag))
}

fn not_modified(validators: &Validators) -> ShortCircuit {
    ShortCircuit::NotModified {
        headers: validators.headers.to_headers(),
    }
}

#[cfg(test)]
#[path = "evaluate_test.rs"]
mod evaluate_test;
