use async_graphql::*;

use crate::graphql::context::GraphQLContext;
use crate::graphql::types::Project;
use crate::store::entities;

/// This represents a developer
#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct Developer {
    pub id: i32,
    pub name: String,
}

impl From<entities::Developer> for Developer {
    fn from(record: entities::Developer) -> Self {
        Self {
            id: record.id,
            name: record.name,
        }
    }
}

#[ComplexObject]
impl Developer {
    /// Projects whose developerId points at this developer, in insertion order
    async fn projects(&self, ctx: &Context<'_>) -> Result<Option<Vec<Option<Project>>>> {
        let context = ctx.data::<GraphQLContext>()?;
        let projects = context.store.projects_for_developer(self.id).await;

        Ok(Some(
            projects
                .into_iter()
                .map(|p| Some(Project::from(p)))
                .collect(),
        ))
    }
}
