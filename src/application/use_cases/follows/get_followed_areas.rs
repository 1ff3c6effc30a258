//! Get Followed Areas Use Case

use std::sync::Arc;

use crate::domain::gateways::FollowRepository;
use crate::domain::models::follow::AreaSimple;
use crate::domain::models::user::Uid;
use crate::shared::errors::UseCaseError;

/// Use case for listing the areas a user follows
pub struct GetFollowedAreasUseCase {
    follow_repository: Arc<dyn FollowRepository>,
}

impl GetFollowedAreasUseCase {
    /// Create a new GetFollowedAreasUseCase
    #[must_use]
    pub fn new(follow_repository: Arc<dyn FollowRepository>) -> Self {
        Self { follow_repository }
    }

    /// Execute the use case
    ///
    /// An unknown uid simply follows nothing.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, uid: &Uid) -> Result<Vec<AreaSimple>, UseCaseError> {
        tracing::debug!(uid = %uid, "Fetching followed areas");

        let areas = self.follow_repository.find_followed_areas(uid).await?;

        tracing::debug!(uid = %uid, count = areas.len(), "Fetched followed areas");
        Ok(areas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::follow_repository::MockFollowRepository;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn should_return_areas_in_repository_order() {
        let mut repo = MockFollowRepository::new();
        repo.expect_find_followed_areas()
            .with(eq(Uid::from("uid1")))
            .times(1)
            .returning(|_| {
                Ok(vec![
                    AreaSimple {
                        area_type: "网游".to_string(),
                        area_name: "英雄联盟".to_string(),
                    },
                    AreaSimple {
                        area_type: "手游".to_string(),
                        area_name: "王者荣耀".to_string(),
                    },
                ])
            });

        let use_case = GetFollowedAreasUseCase::new(Arc::new(repo));
        let areas = use_case.execute(&Uid::from("uid1")).await.unwrap();

        assert_eq!(areas.len(), 2);
        assert_eq!(areas[0].area_name, "英雄联盟");
        assert_eq!(areas[1].area_type, "手游");
    }

    #[tokio::test]
    async fn should_return_empty_list_for_unknown_user() {
        let mut repo = MockFollowRepository::new();
        repo.expect_find_followed_areas().returning(|_| Ok(vec![]));

        let use_case = GetFollowedAreasUseCase::new(Arc::new(repo));

        assert!(use_case.execute(&Uid::from("nobody")).await.unwrap().is_empty());
    }
}
