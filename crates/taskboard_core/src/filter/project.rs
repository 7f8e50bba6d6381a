//! Project list search.

use crate::model::project::Project;

/// Projects whose name or description contains `query`, case-insensitively.
///
/// The empty query returns every project in input order; whitespace is
/// matched literally.
pub fn filter_projects<'a, I>(projects: I, query: &str) -> Vec<&'a Project>
where
    I: IntoIterator<Item = &'a Project>,
{
    let needle = query.to_lowercase();
    projects
        .into_iter()
        .filter(|project| {
            needle.is_empty()
                || project.name.to_lowercase().contains(&needle)
                || project.description.to_lowercase().contains(&needle)
        })
        .collect()
}
