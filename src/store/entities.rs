/// A developer record. Projects are not owned here; they point back through
/// [`Project::developer_id`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Developer {
    pub id: i32,
    pub name: String,
}

/// A project record. `developer_id` is expected to name an existing developer
/// but nothing checks that it does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: i32,
    pub name: String,
    pub developer_id: i32,
}
