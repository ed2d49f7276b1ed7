// ABOUTME: Technology extractor finding named stacks mentioned in a task description.
// ABOUTME: Matches fixed per-category vocabularies, preserving declared vocabulary order.

use serde::Serialize;

const FRONTEND_VOCAB: &[&str] = &["react", "vue", "angular", "svelte", "next.js"];
const BACKEND_VOCAB: &[&str] = &["fastapi", "django", "flask", "express", "spring", "rails"];
const DATABASE_VOCAB: &[&str] = &[
    "postgres",
    "mysql",
    "mongodb",
    "redis",
    "sqlite",
    "elasticsearch",
];
const CLOUD_VOCAB: &[&str] = &["aws", "azure", "gcp", "docker", "kubernetes"];
const CMS_VOCAB: &[&str] = &["wordpress", "drupal", "contentful", "strapi", "sanity"];

/// The fixed set of technology categories the extractor knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TechCategory {
    Frontend,
    Backend,
    Database,
    Cloud,
    Cms,
}

impl TechCategory {
    /// Return a display label for this category.
    pub fn label(&self) -> &'static str {
        match self {
            TechCategory::Frontend => "Frontend",
            TechCategory::Backend => "Backend",
            TechCategory::Database => "Database",
            TechCategory::Cloud => "Cloud",
            TechCategory::Cms => "CMS",
        }
    }

    fn vocabulary(&self) -> &'static [&'static str] {
        match self {
            TechCategory::Frontend => FRONTEND_VOCAB,
            TechCategory::Backend => BACKEND_VOCAB,
            TechCategory::Database => DATABASE_VOCAB,
            TechCategory::Cloud => CLOUD_VOCAB,
            TechCategory::Cms => CMS_VOCAB,
        }
    }

    /// All categories, in display order.
    pub fn all() -> [TechCategory; 5] {
        [
            TechCategory::Frontend,
            TechCategory::Backend,
            TechCategory::Database,
            TechCategory::Cloud,
            TechCategory::Cms,
        ]
    }
}

/// Per-category vocabulary entries found in a task, in vocabulary order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TechnologyMentions {
    pub frontend: Vec<&'static str>,
    pub backend: Vec<&'static str>,
    pub database: Vec<&'static str>,
    pub cloud: Vec<&'static str>,
    pub cms: Vec<&'static str>,
}

impl TechnologyMentions {
    /// Extract technology mentions from a task description. Pure and total.
    pub fn from_task(task: &str) -> Self {
        let task_lower = task.to_lowercase();
        let found = |category: TechCategory| {
            category
                .vocabulary()
                .iter()
                .copied()
                .filter(|entry| task_lower.contains(entry))
                .collect::<Vec<_>>()
        };

        Self {
            frontend: found(TechCategory::Frontend),
            backend: found(TechCategory::Backend),
            database: found(TechCategory::Database),
            cloud: found(TechCategory::Cloud),
            cms: found(TechCategory::Cms),
        }
    }

    /// Mentions for a single category.
    pub fn for_category(&self, category: TechCategory) -> &[&'static str] {
        match category {
            TechCategory::Frontend => &self.frontend,
            TechCategory::Backend => &self.backend,
            TechCategory::Database => &self.database,
            TechCategory::Cloud => &self.cloud,
            TechCategory::Cms => &self.cms,
        }
    }

    /// True when no category matched anything.
    pub fn is_empty(&self) -> bool {
        TechCategory::all()
            .iter()
            .all(|c| self.for_category(*c).is_empty())
    }
}
