use async_graphql::*;
use tracing::info;

use crate::graphql::context::GraphQLContext;
use crate::graphql::types::{Developer, Project};

#[derive(Default)]
pub struct Mutation;

/// Root Mutation
#[Object(name = "mutation")]
impl Mutation {
    /// Add a project
    async fn add_project(
        &self,
        ctx: &Context<'_>,
        name: String,
        #[graphql(name = "developerID")] developer_id: i32,
    ) -> Result<Option<Project>> {
        let context = ctx.data::<GraphQLContext>()?;
        let project = context.store.add_project(name, developer_id).await;

        info!("Created project {} for developer {}", project.id, developer_id);
        Ok(Some(Project::from(project)))
    }

    /// Add a developer
    async fn add_developer(&self, ctx: &Context<'_>, name: String) -> Result<Option<Developer>> {
        let context = ctx.data::<GraphQLContext>()?;
        let developer = context.store.add_developer(name).await;

        info!("Created developer {}", developer.id);
        Ok(Some(Developer::from(developer)))
    }
}
