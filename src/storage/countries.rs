//! Country lookups against the `countries` reference table.

use log::debug;
use sqlx::AnyPool;

use crate::error_handling::StoreError;

const ALL_COUNTRIES: &str = "SELECT CAST(country_code AS TEXT), CAST(country_name AS TEXT) \
     FROM countries";

/// Resolves free-text input to a country code.
///
/// The input is trimmed and lowercased, then matched as a substring of the
/// lowercased country names. Returns `None` when nothing matches.
///
/// Case folding happens here rather than in SQL: `LOWER()` only folds ASCII
/// on SQLite, which would make names like "Åland Islands" unreachable.
///
/// Short inputs can match several countries (`"in"` hits India, Finland,
/// Spain...); the ordering in `best_match` picks one deterministically but cannot know
/// which one the user meant.
pub async fn find_country_code(pool: &AnyPool, input: &str) -> Result<Option<String>, StoreError> {
    let name = input.trim().to_lowercase();

    let countries = sqlx::query_as::<_, (String, String)>(ALL_COUNTRIES)
        .fetch_all(pool)
        .await?;

    let code = best_match(&name, countries);

    debug!("Resolved {name:?} to {code:?}");

    Ok(code)
}

/// Picks the code of the best country whose lowercased name contains `name`.
///
/// Exact name first, then the shortest name, then the lowest code, so the
/// same input always resolves to the same country. `name` must already be
/// lowercased.
fn best_match<I>(name: &str, countries: I) -> Option<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    countries
        .into_iter()
        .filter_map(|(code, country_name)| {
            let lowered = country_name.to_lowercase();
            lowered.contains(name).then(|| {
                let inexact = u8::from(lowered != name);
                (inexact, lowered.chars().count(), code)
            })
        })
        .min()
        .map(|(_, _, code)| code)
}
