//! # analyze: heuristic repository classification
//!
//! [`analyze_repository`] turns repository metadata and a fetched file set into a
//! [`RepositoryAnalysis`]. It is pure: no I/O, no clock, no randomness.
//!
//! ## Rule tables
//! Project type and package manager are decided by ordered `(predicate, classification)`
//! tables. Rules are evaluated top to bottom and the first match wins, so a repository
//! carrying both `package.json` and `requirements.txt` is classified as Node.js.
//!
//! ## Frameworks
//! JavaScript frameworks come from the parsed `package.json` dependency maps. Python, Rust
//! and Go frameworks come from substring matches inside their manifests only; source files
//! are never scanned.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::contract::{GitHubFile, RepositoryInfo};

/// Flat descriptor of a repository, computed per request.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryAnalysis {
    pub project_type: String,
    pub main_language: String,
    pub frameworks: Vec<String>,
    pub features: Vec<String>,
    pub structure: Vec<String>,
    pub has_tests: bool,
    pub has_documentation: bool,
    pub has_ci: bool,
    pub has_docker: bool,
    pub package_manager: String,
    pub build_tool: Option<String>,
    pub dependencies: Vec<String>,
    pub scripts: Vec<String>,
}

/// View over the file set shared by every rule.
struct Facts<'a> {
    files: &'a [GitHubFile],
    language: &'a str,
}

impl<'a> Facts<'a> {
    fn has_name(&self, name: &str) -> bool {
        self.files.iter().any(|f| f.name == name)
    }

    fn has_any_name(&self, names: &[&str]) -> bool {
        names.iter().any(|n| self.has_name(n))
    }

    fn path_contains(&self, needle: &str) -> bool {
        self.files.iter().any(|f| f.path.contains(needle))
    }

    fn language_is(&self, languages: &[&str]) -> bool {
        languages.contains(&self.language)
    }

    fn is_python(&self) -> bool {
        self.has_any_name(PYTHON_MANIFESTS) || self.language_is(&["Python"])
    }

    fn content_of(&self, name: &str) -> Option<&'a str> {
        self.files
            .iter()
            .find(|f| f.name == name)
            .and_then(|f| f.content.as_deref())
    }
}

type Rule = (fn(&Facts) -> bool, &'static str);

const PYTHON_MANIFESTS: &[&str] = &["requirements.txt", "pyproject.toml", "setup.py", "Pipfile"];

const PROJECT_TYPE_RULES: &[Rule] = &[
    (
        |f| f.has_name("package.json") && f.has_any_name(&["next.config.js", "next.config.mjs", "next.config.ts"]),
        "Next.js Application",
    ),
    (
        |f| {
            f.has_name("package.json")
                && ["src/App.js", "src/App.jsx", "src/App.tsx"]
                    .iter()
                    .any(|p| f.path_contains(p))
        },
        "React Application",
    ),
    (
        |f| f.has_name("package.json") && (f.has_name("vue.config.js") || f.path_contains("src/App.vue")),
        "Vue.js Application",
    ),
    (
        |f| f.has_name("package.json") && f.has_name("angular.json"),
        "Angular Application",
    ),
    (|f| f.has_name("package.json"), "Node.js Application"),
    (|f| f.is_python() && f.has_name("manage.py"), "Django Application"),
    (
        |f| f.is_python() && f.has_any_name(&["app.py", "main.py"]),
        "Flask/FastAPI Application",
    ),
    (|f| f.is_python(), "Python Application"),
    (|f| f.has_name("Cargo.toml"), "Rust Application"),
    (|f| f.has_name("go.mod"), "Go Application"),
    (|f| f.has_any_name(&["pom.xml", "build.gradle"]), "Java Application"),
    (|f| f.has_name("composer.json"), "PHP Application"),
    (|f| f.has_name("Gemfile"), "Ruby Application"),
    (|f| f.language_is(&["JavaScript", "TypeScript"]), "Node.js Application"),
    (|f| f.language_is(&["Rust"]), "Rust Application"),
    (|f| f.language_is(&["Go"]), "Go Application"),
    (|f| f.language_is(&["Java"]), "Java Application"),
];

const PACKAGE_MANAGER_RULES: &[Rule] = &[
    (|f| f.has_any_name(PYTHON_MANIFESTS), "pip"),
    (|f| f.has_name("Cargo.toml"), "Cargo"),
    (|f| f.has_name("go.mod"), "Go Modules"),
    (|f| f.has_name("yarn.lock"), "Yarn"),
    (|f| f.has_name("pnpm-lock.yaml"), "pnpm"),
    (|f| f.has_any_name(&["package-lock.json", "package.json"]), "npm"),
    (|f| f.language_is(&["Python"]), "pip"),
    (|f| f.language_is(&["Rust"]), "Cargo"),
    (|f| f.language_is(&["Go"]), "Go Modules"),
    (|f| f.language_is(&["JavaScript", "TypeScript"]), "npm"),
    (|f| f.language_is(&["Java"]), "Maven/Gradle"),
    (|f| f.language_is(&["C#"]), "NuGet"),
    (|f| f.language_is(&["Ruby"]), "Bundler"),
    (|f| f.language_is(&["PHP"]), "Composer"),
];

const BUILD_TOOL_RULES: &[Rule] = &[
    (|f| f.has_any_name(&["webpack.config.js", "webpack.config.ts"]), "Webpack"),
    (
        |f| f.has_any_name(&["vite.config.js", "vite.config.ts", "vite.config.mjs"]),
        "Vite",
    ),
    (|f| f.has_any_name(&["rollup.config.js", "rollup.config.mjs"]), "Rollup"),
    (|f| f.has_name("gulpfile.js"), "Gulp"),
];

const FEATURE_RULES: &[Rule] = &[
    (|f| f.path_contains("api") || f.path_contains("routes"), "RESTful API"),
    (|f| f.path_contains("auth") || f.path_contains("login"), "Authentication"),
    (
        |f| {
            f.path_contains("database")
                || f.path_contains("db")
                || f.files.iter().any(|x| x.name.contains("schema"))
        },
        "Database Integration",
    ),
    (
        |f| f.path_contains("component") || f.path_contains("ui"),
        "Component-based Architecture",
    ),
    (|f| f.path_contains("test") || f.path_contains("spec"), "Comprehensive Testing"),
    (|f| has_docker(f.files), "Docker Support"),
    (|f| f.path_contains(".github/workflows"), "CI/CD Pipeline"),
];

/// `(dependency key, framework)` pairs checked against package.json, in output order.
const NPM_FRAMEWORKS: &[(&str, &str)] = &[
    ("react", "React"),
    ("next", "Next.js"),
    ("vue", "Vue.js"),
    ("@angular/core", "Angular"),
    ("angular", "Angular"),
    ("express", "Express.js"),
    ("typescript", "TypeScript"),
    ("tailwindcss", "Tailwind CSS"),
    ("sass", "Sass/SCSS"),
    ("scss", "Sass/SCSS"),
    ("webpack", "Webpack"),
    ("vite", "Vite"),
];

/// `(manifest, lowercase needle, framework)` triples.
const MANIFEST_FRAMEWORKS: &[(&str, &str, &str)] = &[
    ("requirements.txt", "django", "Django"),
    ("requirements.txt", "flask", "Flask"),
    ("requirements.txt", "fastapi", "FastAPI"),
    ("pyproject.toml", "django", "Django"),
    ("pyproject.toml", "flask", "Flask"),
    ("pyproject.toml", "fastapi", "FastAPI"),
    ("Pipfile", "django", "Django"),
    ("Pipfile", "flask", "Flask"),
    ("Pipfile", "fastapi", "FastAPI"),
    ("Cargo.toml", "actix-web", "Actix Web"),
    ("Cargo.toml", "axum", "Axum"),
    ("Cargo.toml", "rocket", "Rocket"),
    ("Cargo.toml", "tokio", "Tokio"),
    ("go.mod", "gin-gonic/gin", "Gin"),
    ("go.mod", "labstack/echo", "Echo"),
];

const CI_FILES: &[&str] = &[
    ".gitlab-ci.yml",
    ".travis.yml",
    "azure-pipelines.yml",
    "Jenkinsfile",
    "bitbucket-pipelines.yml",
    ".circleci",
];

fn first_match(rules: &[Rule], facts: &Facts) -> Option<&'static str> {
    rules
        .iter()
        .find(|(applies, _)| applies(facts))
        .map(|(_, label)| *label)
}

fn has_docker(files: &[GitHubFile]) -> bool {
    files.iter().any(|f| f.name.to_lowercase().contains("docker"))
}

fn push_unique(list: &mut Vec<String>, item: &str) {
    if !list.iter().any(|x| x == item) {
        list.push(item.to_string());
    }
}

fn parse_package_json(facts: &Facts) -> Option<Map<String, Value>> {
    let raw = facts.content_of("package.json")?;
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => Some(map),
        Ok(_) => None,
        Err(e) => {
            tracing::debug!(error = %e, "Ignoring unparseable package.json");
            None
        }
    }
}

fn object_keys(pkg: &Map<String, Value>, field: &str) -> Vec<String> {
    pkg.get(field)
        .and_then(Value::as_object)
        .map(|m| m.keys().cloned().collect())
        .unwrap_or_default()
}

fn detect_frameworks(facts: &Facts, dependencies: &[String]) -> Vec<String> {
    let mut frameworks = Vec::new();
    for (key, framework) in NPM_FRAMEWORKS {
        if dependencies.iter().any(|d| d == key) {
            push_unique(&mut frameworks, framework);
        }
    }
    for (manifest, needle, framework) in MANIFEST_FRAMEWORKS {
        if let Some(content) = facts.content_of(manifest) {
            if content.to_lowercase().contains(needle) {
                push_unique(&mut frameworks, framework);
            }
        }
    }
    frameworks
}

/// Classifies a repository from its metadata and fetched files.
pub fn analyze_repository(info: &RepositoryInfo, files: &[GitHubFile]) -> RepositoryAnalysis {
    let facts = Facts {
        files,
        language: &info.language,
    };

    let package_json = parse_package_json(&facts);
    let (dependencies, scripts) = match &package_json {
        Some(pkg) => {
            let mut deps = object_keys(pkg, "dependencies");
            for dev in object_keys(pkg, "devDependencies") {
                if !deps.contains(&dev) {
                    deps.push(dev);
                }
            }
            (deps, object_keys(pkg, "scripts"))
        }
        None => (Vec::new(), Vec::new()),
    };

    let mut structure = Vec::new();
    for dir in files.iter().filter(|f| f.is_dir()) {
        push_unique(&mut structure, &dir.name);
    }

    let analysis = RepositoryAnalysis {
        project_type: first_match(PROJECT_TYPE_RULES, &facts)
            .map(str::to_string)
            .unwrap_or_else(|| format!("{} Project", info.language)),
        main_language: info.language.clone(),
        frameworks: detect_frameworks(&facts, &dependencies),
        features: FEATURE_RULES
            .iter()
            .filter(|(applies, _)| applies(&facts))
            .map(|(_, label)| label.to_string())
            .collect(),
        structure,
        has_tests: facts.path_contains("test") || facts.path_contains("spec"),
        has_documentation: files.iter().any(|f| {
            let name = f.name.to_lowercase();
            name.contains("readme") || name.contains("doc")
        }) || facts.path_contains("docs"),
        has_ci: facts.path_contains(".github/workflows")
            || files
                .iter()
                .any(|f| CI_FILES.iter().any(|ci| f.path.starts_with(ci))),
        has_docker: has_docker(files),
        package_manager: first_match(PACKAGE_MANAGER_RULES, &facts)
            .unwrap_or("Manual Setup")
            .to_string(),
        build_tool: first_match(BUILD_TOOL_RULES, &facts).map(str::to_string),
        dependencies,
        scripts,
    };

    tracing::debug!(
        project_type = %analysis.project_type,
        package_manager = %analysis.package_manager,
        frameworks = ?analysis.frameworks,
        "Analyzed repository"
    );
    analysis
}
