use async_graphql::*;

use crate::graphql::context::GraphQLContext;
use crate::graphql::types::{Developer, Project};

#[derive(Default)]
pub struct Query;

/// Root Query
#[Object]
impl Query {
    /// A Single Project
    async fn project(&self, ctx: &Context<'_>, id: Option<i32>) -> Result<Option<Project>> {
        let context = ctx.data::<GraphQLContext>()?;
        let Some(id) = id else {
            return Ok(None);
        };
        let project = context.store.project(id).await;

        Ok(project.map(Project::from))
    }

    /// List of All Projects
    async fn projects(&self, ctx: &Context<'_>) -> Result<Option<Vec<Option<Project>>>> {
        let context = ctx.data::<GraphQLContext>()?;
        let projects = context.store.projects().await;

        Ok(Some(
            projects
                .into_iter()
                .map(|p| Some(Project::from(p)))
                .collect(),
        ))
    }

    /// A single Developer
    async fn developer(&self, ctx: &Context<'_>, id: Option<i32>) -> Result<Option<Developer>> {
        let context = ctx.data::<GraphQLContext>()?;
        let Some(id) = id else {
            return Ok(None);
        };
        let developer = context.store.developer(id).await;

        Ok(developer.map(Developer::from))
    }

    /// List of All Developers
    async fn developers(&self, ctx: &Context<'_>) -> Result<Option<Vec<Option<Developer>>>> {
        let context = ctx.data::<GraphQLContext>()?;
        let developers = context.store.developers().await;

        Ok(Some(
            developers
                .into_iter()
                .map(|d| Some(Developer::from(d)))
                .collect(),
        ))
    }
}
