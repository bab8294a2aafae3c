use crate::middleware::error::{AppError, AppResult};
use surrealdb::sql::Thing;

pub fn get_str_thing(value: &str) -> AppResult<Thing> {
    Thing::try_from(value).map_err(|_| AppError::InvalidIdentifier {
        ident: value.to_string(),
    })
}

/// Parses an entity reference and rejects ids that point at a different table
/// than the caller expects.
pub fn get_thing_of(value: &str, table: &str) -> AppResult<Thing> {
    let thing = get_str_thing(value)?;
    if thing.tb != table {
        return Err(AppError::InvalidIdentifier {
            ident: value.to_string(),
        });
    }
    Ok(thing)
}
