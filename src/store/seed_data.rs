use super::entities::{Developer, Project};

const DEVELOPERS: &[(i32, &str)] = &[(1, "John"), (2, "Jonas"), (3, "Jack")];

const PROJECTS: &[(i32, &str, i32)] = &[
    (1, "mango", 1),
    (2, "LandY", 2),
    (3, "ApnaBazaar", 3),
    (4, "WooCommerce1", 1),
    (5, "Delicious", 2),
    (6, "ParInd", 3),
    (7, "WooCommerce2", 1),
];

pub fn sample_developers() -> Vec<Developer> {
    DEVELOPERS
        .iter()
        .map(|&(id, name)| Developer {
            id,
            name: name.to_string(),
        })
        .collect()
}

pub fn sample_projects() -> Vec<Project> {
    PROJECTS
        .iter()
        .map(|&(id, name, developer_id)| Project {
            id,
            name: name.to_string(),
            developer_id,
        })
        .collect()
}
