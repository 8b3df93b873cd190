//! Technology detection catalogues
//!
//! Each dependency signal is `(token, display name, category)`: a dependency
//! whose lower-cased name contains `token` contributes `display name`.

use super::path_rules::PathRule;
use crate::models::TechCategory;

pub type TechSignal = (&'static str, &'static str, TechCategory);

/// `package.json` dependencies and devDependencies
pub const NODE_DEPENDENCY_SIGNALS: &[TechSignal] = &[
    ("react", "React", TechCategory::Framework),
    ("vue", "Vue.js", TechCategory::Framework),
    ("next", "Next.js", TechCategory::Framework),
    ("nuxt", "Nuxt.js", TechCategory::Framework),
    ("express", "Express.js", TechCategory::Framework),
    ("fastify", "Fastify", TechCategory::Framework),
    ("svelte", "Svelte", TechCategory::Framework),
    ("nest", "NestJS", TechCategory::Framework),
    ("prisma", "Prisma", TechCategory::Database),
    ("mongoose", "MongoDB/Mongoose", TechCategory::Database),
    ("pg", "PostgreSQL", TechCategory::Database),
    ("redis", "Redis", TechCategory::Database),
    ("graphql", "GraphQL", TechCategory::Api),
    ("jest", "Jest", TechCategory::Testing),
    ("vitest", "Vitest", TechCategory::Testing),
    ("playwright", "Playwright", TechCategory::Testing),
    ("typescript", "TypeScript", TechCategory::Language),
    ("tailwindcss", "Tailwind CSS", TechCategory::Styling),
];

/// `requirements.txt` text
pub const PYTHON_DEPENDENCY_SIGNALS: &[TechSignal] = &[
    ("fastapi", "FastAPI", TechCategory::Framework),
    ("flask", "Flask", TechCategory::Framework),
    ("django", "Django", TechCategory::Framework),
    ("sqlalchemy", "SQLAlchemy", TechCategory::Database),
    ("celery", "Celery", TechCategory::Infrastructure),
    ("pandas", "Pandas", TechCategory::Data),
    ("numpy", "NumPy", TechCategory::Data),
    ("torch", "PyTorch", TechCategory::Ai),
    ("tensorflow", "TensorFlow", TechCategory::Ai),
    ("transformers", "Transformers", TechCategory::Ai),
];

/// `Cargo.toml` dependency tables
pub const CARGO_DEPENDENCY_SIGNALS: &[TechSignal] = &[
    ("tokio", "Tokio", TechCategory::Runtime),
    ("axum", "Axum", TechCategory::Framework),
    ("actix", "Actix Web", TechCategory::Framework),
    ("rocket", "Rocket", TechCategory::Framework),
    ("serde", "Serde", TechCategory::Data),
    ("diesel", "Diesel", TechCategory::Database),
    ("sqlx", "SQLx", TechCategory::Database),
    ("clap", "Clap", TechCategory::Framework),
    ("tonic", "Tonic gRPC", TechCategory::Api),
    ("wasm-bindgen", "WebAssembly", TechCategory::Runtime),
];

/// Cargo manifest tables whose keys are dependency names
pub const CARGO_DEPENDENCY_TABLES: &[&str] = &["dependencies", "dev-dependencies", "build-dependencies"];

/// Lower-cased file-tree paths
pub const TREE_SIGNALS: &[(PathRule, &str, TechCategory)] = &[
    (PathRule::AnyContains(&["dockerfile", "docker-compose"]), "Docker", TechCategory::Infrastructure),
    (PathRule::AnyPrefix(&[".github/workflows/"]), "GitHub Actions", TechCategory::Ci),
    (PathRule::AnyContains(&["terraform"]), "Terraform", TechCategory::Infrastructure),
];

/// Lower-cased README text
pub const README_SIGNALS: &[(&[&str], &str, TechCategory)] = &[
    (&["kubernetes", "k8s"], "Kubernetes", TechCategory::Infrastructure),
    (&["postgres"], "PostgreSQL", TechCategory::Database),
];
