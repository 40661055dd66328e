use async_graphql::*;

use crate::graphql::context::GraphQLContext;
use crate::graphql::types::Developer;
use crate::store::entities;

/// This represents a project developed by a developer
#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct Project {
    pub id: i32,
    pub name: String,
    pub developer_id: i32,
}

impl From<entities::Project> for Project {
    fn from(record: entities::Project) -> Self {
        Self {
            id: record.id,
            name: record.name,
            developer_id: record.developer_id,
        }
    }
}

#[ComplexObject]
impl Project {
    /// The developer referenced by developerId, or null when none matches
    async fn developer(&self, ctx: &Context<'_>) -> Result<Option<Developer>> {
        let context = ctx.data::<GraphQLContext>()?;
        let developer = context.store.developer(self.developer_id).await;

        Ok(developer.map(Developer::from))
    }
}
