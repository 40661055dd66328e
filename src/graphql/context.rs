use std::sync::Arc;

use crate::store::EntityStore;

/// Data handed to every resolver through the schema.
#[derive(Clone)]
pub struct GraphQLContext {
    pub store: Arc<EntityStore>,
}

impl GraphQLContext {
    pub fn new(store: Arc<EntityStore>) -> Self {
        Self { store }
    }
}
