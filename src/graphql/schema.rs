use std::sync::Arc;

use async_graphql::*;

use crate::graphql::context::GraphQLContext;
use crate::graphql::mutations::Mutation;
use crate::graphql::queries::Query;
use crate::store::EntityStore;

pub type GraphQLSchema = Schema<Query, Mutation, EmptySubscription>;

/// Wires both roots over `store`. Relationship fields live on the object
/// types and read the same store through [`GraphQLContext`].
pub fn build_schema(store: Arc<EntityStore>) -> GraphQLSchema {
    Schema::build(Query, Mutation, EmptySubscription)
        .data(GraphQLContext::new(store))
        .finish()
}
