//! Sequential identifier proposals.
//!
//! Ids have the form `<PREFIX><6-digit zero-padded integer>`, e.g. `F000007`. The proposal is
//! advisory: nothing is reserved, and the backend rejects duplicates when two clients race
//! on the same snapshot.

use entity::{Entity, EntityKind};

/// Proposes the next id for `E` from the records currently held.
pub fn next_id<E: Entity>(records: &[E]) -> String {
    next_id_for(E::KIND, records.iter().map(|record| record.primary_key()))
}

/// Proposes the next id of `kind` given the existing primary keys.
///
/// Keys whose numeric part does not parse are ignored, and so is a key already at
/// `u64::MAX`, which has no successor. Values past 999999 keep growing beyond six digits
/// rather than wrapping.
pub fn next_id_for<'a, I>(kind: EntityKind, ids: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let prefix = kind.schema().prefix;

    let max = ids
        .into_iter()
        .filter_map(|id| parse_sequence(prefix, id))
        .max()
        .unwrap_or(0);

    format!("{}{:06}", prefix, max + 1)
}

fn parse_sequence(prefix: &str, id: &str) -> Option<u64> {
    let id = id.trim();
    let digits = id.strip_prefix(prefix).unwrap_or(id);

    // `u64::from_str` accepts a leading '+', which is not part of any id
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    digits.parse::<u64>().ok().filter(|n| *n < u64::MAX)
}
