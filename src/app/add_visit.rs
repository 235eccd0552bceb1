//! The add-a-visit pipeline, independent of HTTP.

use log::info;
use sqlx::AnyPool;

use super::input::{capitalize_first, normalize_country_input};
use crate::config::{COUNTRY_NOT_FOUND_MESSAGE, MISSING_INPUT_MESSAGE};
use crate::error_handling::StoreError;
use crate::storage::{find_country_code, record_visit};
use crate::view::Notification;

/// What happened to one add-visit submission.
///
/// Every expected outcome lands here; only unexpected store failures are
/// returned as errors by [`add_visit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddVisitOutcome {
    /// The field was missing or blank; nothing was looked up.
    MissingInput,
    /// No country name contains the input.
    NotFound,
    /// A new visit was recorded. `country` is the capitalized input.
    Added { country: String },
    /// The resolved country was already recorded.
    AlreadyVisited { country: String },
}

impl AddVisitOutcome {
    /// The banner shown for this outcome.
    pub fn notification(&self) -> Notification {
        match self {
            AddVisitOutcome::MissingInput => Notification::warning(MISSING_INPUT_MESSAGE),
            AddVisitOutcome::NotFound => Notification::error(COUNTRY_NOT_FOUND_MESSAGE),
            AddVisitOutcome::Added { country } => {
                Notification::success(format!("Added {country} successfully!"))
            }
            AddVisitOutcome::AlreadyVisited { country } => {
                Notification::info(format!("You already visited {country}"))
            }
        }
    }
}

/// Resolves the submitted name and records a visit.
///
/// Issues at most two statements (lookup, then insert) with no transaction
/// around them; the unique constraint on `visited_countries` settles races
/// between two submissions of the same country.
pub async fn add_visit(pool: &AnyPool, input: Option<&str>) -> Result<AddVisitOutcome, StoreError> {
    let Some(name) = normalize_country_input(input) else {
        info!("Add visit rejected: no country name given");
        return Ok(AddVisitOutcome::MissingInput);
    };

    let Some(code) = find_country_code(pool, &name).await? else {
        info!("Add visit rejected: no country matches {name:?}");
        return Ok(AddVisitOutcome::NotFound);
    };

    let country = capitalize_first(&name);
    match record_visit(pool, &code).await {
        Ok(()) => {
            info!("Recorded visit to {code} ({country})");
            Ok(AddVisitOutcome::Added { country })
        }
        Err(StoreError::Conflict(_)) => {
            info!("{code} ({country}) was already visited");
            Ok(AddVisitOutcome::AlreadyVisited { country })
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::test_helpers::{count_visits, create_test_pool};
    use crate::storage::visited_country_codes;
    use crate::view::NotificationKind;

    #[test]
    fn test_outcome_notifications() {
        let warning = AddVisitOutcome::MissingInput.notification();
        assert_eq!(warning.kind, NotificationKind::Warning);
        assert_eq!(warning.message, "Please enter a country name!");

        let error = AddVisitOutcome::NotFound.notification();
        assert_eq!(error.kind, NotificationKind::Error);
        assert_eq!(error.message, "Country not found, try again.");

        let success = AddVisitOutcome::Added {
            country: "France".to_string(),
        }
        .notification();
        assert_eq!(success.kind, NotificationKind::Success);
        assert_eq!(success.message, "Added France successfully!");

        let info = AddVisitOutcome::AlreadyVisited {
            country: "France".to_string(),
        }
        .notification();
        assert_eq!(info.kind, NotificationKind::Info);
        assert_eq!(info.message, "You already visited France");
    }

    #[tokio::test]
    async fn test_blank_input_touches_nothing() {
        let pool = create_test_pool().await;
        for input in [None, Some(""), Some("   "), Some("\t")] {
            let outcome = add_visit(&pool, input).await.unwrap();
            assert_eq!(outcome, AddVisitOutcome::MissingInput);
        }
        assert_eq!(count_visits(&pool).await, 0);
    }

    #[tokio::test]
    async fn test_unknown_country_touches_nothing() {
        let pool = create_test_pool().await;
        let outcome = add_visit(&pool, Some("atlantis")).await.unwrap();
        assert_eq!(outcome, AddVisitOutcome::NotFound);
        assert_eq!(count_visits(&pool).await, 0);
    }

    #[tokio::test]
    async fn test_add_then_duplicate() {
        let pool = create_test_pool().await;

        let first = add_visit(&pool, Some("france")).await.unwrap();
        assert_eq!(
            first,
            AddVisitOutcome::Added {
                country: "France".to_string()
            }
        );
        assert_eq!(visited_country_codes(&pool).await.unwrap(), vec!["FR"]);

        let second = add_visit(&pool, Some("france")).await.unwrap();
        assert_eq!(
            second,
            AddVisitOutcome::AlreadyVisited {
                country: "France".to_string()
            }
        );
        assert_eq!(count_visits(&pool).await, 1);
    }

    #[tokio::test]
    async fn test_display_name_comes_from_input() {
        let pool = create_test_pool().await;
        let outcome = add_visit(&pool, Some("  KINGDOM ")).await.unwrap();
        assert_eq!(
            outcome,
            AddVisitOutcome::Added {
                country: "Kingdom".to_string()
            }
        );
        assert_eq!(visited_country_codes(&pool).await.unwrap(), vec!["GB"]);
    }

    #[tokio::test]
    async fn test_closed_pool_is_an_error() {
        let pool = create_test_pool().await;
        pool.close().await;

        let result = add_visit(&pool, Some("france")).await;
        assert!(matches!(result, Err(StoreError::Sql(_))));
    }
}
