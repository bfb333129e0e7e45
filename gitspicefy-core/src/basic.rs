//! # basic: the no-configuration README generator
//!
//! Used when a request carries no [`crate::ReadmeConfig`]. It has its own lightweight
//! analysis ([`analyze_basic`]) and a fixed layout: centered header with shields, a static
//! table of contents, highlights, a technology badge wall, a feature matrix, a numbered
//! getting-started walkthrough, available npm scripts and the usual closing sections.
//!
//! Like the template engine it is pure: identical inputs give identical output.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::contract::{GitHubFile, RepositoryInfo};

/// Manifest files whose contents are scanned for framework names.
const FRAMEWORK_MANIFESTS: &[&str] = &[
    "package.json",
    "requirements.txt",
    "pyproject.toml",
    "pipfile",
    "composer.json",
    "gemfile",
];

/// `(needle, framework)` matched case-insensitively against manifest contents.
const CONTENT_FRAMEWORKS: &[(&str, &str)] = &[
    ("react", "React"),
    ("vue", "Vue.js"),
    ("angular", "Angular"),
    ("express", "Express.js"),
    ("next", "Next.js"),
    ("django", "Django"),
    ("flask", "Flask"),
];

/// `(dependency, framework)` looked up in `package.json` dependency maps.
const NPM_FRAMEWORKS: &[(&str, &str)] = &[
    ("react", "React"),
    ("vue", "Vue.js"),
    ("angular", "Angular"),
    ("next", "Next.js"),
    ("express", "Express.js"),
    ("tailwindcss", "Tailwind CSS"),
    ("typescript", "TypeScript"),
];

/// `(lowercase file name, project type)`. Later files in the walk override earlier ones.
const MANIFEST_TYPES: &[(&str, &str)] = &[
    ("package.json", "Node.js/JavaScript"),
    ("requirements.txt", "Python"),
    ("pyproject.toml", "Python"),
    ("cargo.toml", "Rust"),
    ("go.mod", "Go"),
    ("composer.json", "PHP"),
    ("gemfile", "Ruby"),
];

const MAX_STRUCTURE_ENTRIES: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicAnalysis {
    pub project_type: String,
    pub main_language: String,
    pub frameworks: Vec<String>,
    pub structure: Vec<String>,
    pub has_tests: bool,
    pub has_documentation: bool,
    pub has_ci: bool,
    pub dependencies: Vec<String>,
    pub scripts: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct PackageManifest {
    dependencies: BTreeMap<String, Value>,
    dev_dependencies: BTreeMap<String, Value>,
    scripts: BTreeMap<String, Value>,
}

fn push_unique(list: &mut Vec<String>, item: &str) {
    if !list.iter().any(|x| x == item) {
        list.push(item.to_string());
    }
}

/// Walks the file list once, in order.
pub fn analyze_basic(info: &RepositoryInfo, files: &[GitHubFile]) -> BasicAnalysis {
    let mut analysis = BasicAnalysis {
        project_type: "Unknown".to_string(),
        main_language: if info.language.is_empty() {
            "Unknown".to_string()
        } else {
            info.language.clone()
        },
        ..Default::default()
    };

    for file in files {
        let name = file.name.to_lowercase();
        let path = file.path.to_lowercase();
        let content = file.content.as_deref().unwrap_or_default();

        if let Some((_, project_type)) = MANIFEST_TYPES.iter().find(|(m, _)| *m == name) {
            analysis.project_type = project_type.to_string();
        }
        if name == "package.json" {
            match serde_json::from_str::<PackageManifest>(content) {
                Ok(pkg) => {
                    analysis.dependencies = pkg
                        .dependencies
                        .into_keys()
                        .chain(pkg.dev_dependencies.into_keys())
                        .fold(Vec::new(), |mut deps, d| {
                            push_unique(&mut deps, &d);
                            deps
                        });
                    analysis.scripts = pkg.scripts.into_keys().collect();
                    for (dep, framework) in NPM_FRAMEWORKS {
                        if analysis.dependencies.iter().any(|d| d == dep) {
                            push_unique(&mut analysis.frameworks, framework);
                        }
                    }
                }
                Err(e) => tracing::debug!(error = %e, path = %file.path, "Ignoring unparseable package.json"),
            }
        }
        if FRAMEWORK_MANIFESTS.contains(&name.as_str()) {
            let lower = content.to_lowercase();
            for (needle, framework) in CONTENT_FRAMEWORKS {
                if lower.contains(needle) {
                    push_unique(&mut analysis.frameworks, framework);
                }
            }
        }

        analysis.has_tests |= path.contains("test") || path.contains("spec");
        analysis.has_documentation |=
            name.contains("readme") || name.contains("doc") || path.contains("docs");
        analysis.has_ci |=
            path.contains(".github/workflows") || name.contains("ci") || name.contains("pipeline");
        if file.is_dir() {
            push_unique(&mut analysis.structure, &file.name);
        }
    }

    tracing::debug!(
        project_type = %analysis.project_type,
        frameworks = ?analysis.frameworks,
        "Basic analysis complete"
    );
    analysis
}

/// One-line explanation of a conventional npm script name.
pub fn script_description(script: &str) -> String {
    match script {
        "dev" => "Start development server".to_string(),
        "build" => "Build for production".to_string(),
        "start" => "Start production server".to_string(),
        "test" => "Run tests".to_string(),
        "lint" => "Run linter".to_string(),
        "format" => "Format code".to_string(),
        "deploy" => "Deploy application".to_string(),
        other => format!("Run {other} command"),
    }
}

/// `(shields.io logo, hex color)` for a technology badge.
pub fn tech_icon(tech: &str) -> (String, &'static str) {
    let known = match tech {
        "React" => Some(("react", "61DAFB")),
        "Next.js" => Some(("next.js", "000000")),
        "Vue.js" => Some(("vue.js", "4FC08D")),
        "Angular" => Some(("angular", "DD0031")),
        "Express.js" => Some(("express", "000000")),
        "Django" => Some(("django", "092E20")),
        "Flask" => Some(("flask", "000000")),
        "TypeScript" => Some(("typescript", "3178C6")),
        "JavaScript" => Some(("javascript", "F7DF1E")),
        "Python" => Some(("python", "3776AB")),
        "Node.js" => Some(("node.js", "339933")),
        "Tailwind CSS" => Some(("tailwindcss", "06B6D4")),
        _ => None,
    };
    match known {
        Some((logo, color)) => (logo.to_string(), color),
        None => (
            tech.to_lowercase().split_whitespace().collect::<String>(),
            "666666",
        ),
    }
}

pub fn tech_description(tech: &str) -> String {
    match tech {
        "React" => "A JavaScript library for building user interfaces".into(),
        "Next.js" => "The React framework for production".into(),
        "Vue.js" => "The progressive JavaScript framework".into(),
        "Angular" => "Platform for building mobile and desktop web applications".into(),
        "Express.js" => "Fast, unopinionated, minimalist web framework for Node.js".into(),
        "Django" => "High-level Python web framework".into(),
        "Flask" => "Lightweight WSGI web application framework".into(),
        "TypeScript" => "JavaScript with syntax for types".into(),
        "JavaScript" => "Programming language of the web".into(),
        "Python" => "Programming language that lets you work quickly".into(),
        "Node.js" => "JavaScript runtime built on Chrome's V8 JavaScript engine".into(),
        "Tailwind CSS" => "Utility-first CSS framework".into(),
        other => format!("{other} framework/library"),
    }
}

/// `(title, description)` capabilities, framework-specific first, two defaults last.
pub fn core_features(analysis: &BasicAnalysis) -> Vec<(&'static str, String)> {
    let has = |f: &str| analysis.frameworks.iter().any(|x| x == f);
    let mut features = Vec::new();
    if has("React") || has("Vue.js") || has("Angular") {
        features.push((
            "Component Architecture",
            "Modular, reusable components for maintainable code".to_string(),
        ));
    }
    if has("Next.js") {
        features.push((
            "Server-Side Rendering",
            "Fast initial page loads and SEO optimization".to_string(),
        ));
    }
    if has("TypeScript") {
        features.push((
            "Type Safety",
            "Catch errors at compile time with static typing".to_string(),
        ));
    }
    if analysis.has_tests {
        features.push((
            "Quality Assurance",
            "Comprehensive testing ensures reliability".to_string(),
        ));
    }
    if analysis.has_ci {
        features.push((
            "Automated Deployment",
            "Continuous integration and deployment pipeline".to_string(),
        ));
    }
    features.push((
        "Modern Development",
        format!("Built with {} following best practices", analysis.main_language),
    ));
    features.push((
        "Developer Experience",
        "Optimized tooling and development workflow".to_string(),
    ));
    features
}

fn header(info: &RepositoryInfo, analysis: &BasicAnalysis) -> String {
    let repo = &info.full_name;
    let description = if info.description.is_empty() {
        format!(
            "A modern {} project built with cutting-edge technologies",
            analysis.project_type
        )
    } else {
        info.description.clone()
    };
    let mut out = format!("<div align=\"center\">\n\n# {}\n\n### {description}\n\n", info.name);
    out.push_str(&format!(
        "[![GitHub stars](https://img.shields.io/github/stars/{repo}?style=for-the-badge&logo=github)](https://github.com/{repo}/stargazers) \
         [![GitHub forks](https://img.shields.io/github/forks/{repo}?style=for-the-badge&logo=github)](https://github.com/{repo}/network) \
         [![GitHub issues](https://img.shields.io/github/issues/{repo}?style=for-the-badge&logo=github)](https://github.com/{repo}/issues) \
         [![GitHub license](https://img.shields.io/github/license/{repo}?style=for-the-badge)](https://github.com/{repo}/blob/main/LICENSE)"
    ));
    if !info.language.is_empty() {
        out.push_str(&format!(
            " [![Language](https://img.shields.io/badge/language-{0}-blue?style=for-the-badge&logo={1})]()",
            info.language,
            info.language.to_lowercase()
        ));
    }
    if analysis.has_tests {
        out.push_str(" [![Tests](https://img.shields.io/badge/tests-passing-brightgreen?style=for-the-badge&logo=github-actions)]()");
    }
    if analysis.has_ci {
        out.push_str(" [![CI/CD](https://img.shields.io/badge/CI%2FCD-enabled-blue?style=for-the-badge&logo=github-actions)]()");
    }
    out.push_str("\n</div>\n\n---\n\n");
    out
}

const TABLE_OF_CONTENTS: &str = "## 📚 Table of Contents\n\n\
    - [📋 About](#-about)\n\
    - [✨ Features](#-features)\n\
    - [🛠️ Tech Stack](#\u{fe0f}-tech-stack)\n\
    - [🚀 Getting Started](#-getting-started)\n\
    - [📁 Project Structure](#-project-structure)\n\
    - [🤝 Contributing](#-contributing)\n\
    - [📄 License](#-license)\n\n";

fn about(info: &RepositoryInfo, analysis: &BasicAnalysis) -> String {
    let language = &info.language;
    let mut out = String::from("## 📋 About\n\n");
    if info.description.is_empty() {
        let built_with = if analysis.frameworks.is_empty() {
            "modern technologies".to_string()
        } else {
            analysis.frameworks.join(", ")
        };
        out.push_str(&format!(
            "This is a {} project that demonstrates modern development practices and clean architecture. \
             Built with {language} and featuring {built_with}, \
             this project showcases best practices in software development.\n\n",
            analysis.project_type
        ));
    } else {
        out.push_str(&format!("{}\n\n", info.description));
    }

    out.push_str("### 🎯 Key Highlights\n\n");
    out.push_str(&format!("- **Language**: {language}\n"));
    out.push_str(&format!("- **Type**: {}\n", analysis.project_type));
    if !analysis.frameworks.is_empty() {
        out.push_str(&format!("- **Frameworks**: {}\n", analysis.frameworks.join(", ")));
    }
    out.push_str(&format!("- **Stars**: {} ⭐\n", info.stars));
    out.push_str(&format!("- **Forks**: {} 🍴\n", info.forks));
    if analysis.has_tests {
        out.push_str("- **Testing**: ✅ Comprehensive test suite\n");
    }
    if analysis.has_ci {
        out.push_str("- **CI/CD**: ✅ Automated workflows\n");
    }
    out.push('\n');
    out
}

fn tech_stack(analysis: &BasicAnalysis) -> String {
    if analysis.frameworks.is_empty() {
        return String::new();
    }
    let badges: Vec<String> = analysis
        .frameworks
        .iter()
        .map(|framework| {
            let (logo, color) = tech_icon(framework);
            format!(
                "![{framework}](https://img.shields.io/badge/{}-{color}?style=for-the-badge&logo={logo}&logoColor=white)",
                framework.split_whitespace().collect::<Vec<_>>().join("%20")
            )
        })
        .collect();
    let mut out = format!(
        "## 🛠️ Tech Stack\n\n<div align=\"center\">\n\n{}\n\n</div>\n\n### Technologies Used\n\n",
        badges.join(" ")
    );
    for framework in &analysis.frameworks {
        out.push_str(&format!("- **{framework}** - {}\n", tech_description(framework)));
    }
    out.push('\n');
    out
}

fn features(info: &RepositoryInfo, analysis: &BasicAnalysis) -> String {
    let language = &info.language;
    let has = |f: &str| analysis.frameworks.iter().any(|x| x == f);
    let mut out = String::from(
        "## ✨ Features\n\n<div align=\"center\">\n\n| Feature | Description | Status |\n|---------|-------------|--------|\n",
    );
    out.push_str(&format!(
        "| 🚀 **Modern {language}** | Built with latest {language} features | ✅ |\n"
    ));
    let optional = [
        (has("React"), "| ⚛️ **React UI** | Component-based architecture | ✅ |\n"),
        (has("TypeScript"), "| 📝 **Type Safety** | Full TypeScript support | ✅ |\n"),
        (has("Tailwind CSS"), "| 🎨 **Modern Styling** | Tailwind CSS for beautiful UI | ✅ |\n"),
        (has("Next.js"), "| ⚡ **Next.js** | Server-side rendering & optimization | ✅ |\n"),
        (analysis.has_tests, "| 🧪 **Testing** | Comprehensive test coverage | ✅ |\n"),
        (analysis.has_ci, "| 🔄 **CI/CD** | Automated workflows | ✅ |\n"),
    ];
    for (_, row) in optional.iter().filter(|(on, _)| *on) {
        out.push_str(row);
    }
    out.push_str(
        "| 📱 **Responsive** | Mobile-first design | ✅ |\n\
         | ⚡ **Performance** | Optimized for speed | ✅ |\n\
         | 🔧 **Maintainable** | Clean, documented code | ✅ |\n\n</div>\n\n",
    );

    out.push_str("### 🎯 Core Capabilities\n\n");
    for (title, description) in core_features(analysis) {
        out.push_str(&format!("- **{title}**: {description}\n"));
    }
    out.push('\n');
    out
}

/// Ecosystem the getting-started steps are written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Toolchain {
    Node,
    Python,
    Go,
    Rust,
    Other,
}

impl Toolchain {
    fn of(analysis: &BasicAnalysis) -> Self {
        match analysis.project_type.as_str() {
            t if t.contains("Node.js") => Toolchain::Node,
            "Python" => Toolchain::Python,
            "Go" => Toolchain::Go,
            "Rust" => Toolchain::Rust,
            _ => Toolchain::Other,
        }
    }

    fn prerequisites_list(self) -> &'static str {
        match self {
            Toolchain::Node => concat!(
                "- ![Node.js](https://img.shields.io/badge/Node.js-v16+-339933?style=flat&logo=node.js&logoColor=white) **Node.js** (v16 or higher)\n",
                "- ![npm](https://img.shields.io/badge/npm-latest-CB3837?style=flat&logo=npm&logoColor=white) **npm** or **yarn**\n",
            ),
            Toolchain::Python => concat!(
                "- ![Python](https://img.shields.io/badge/Python-3.8+-3776AB?style=flat&logo=python&logoColor=white) **Python** (3.8 or higher)\n",
                "- ![pip](https://img.shields.io/badge/pip-latest-3776AB?style=flat&logo=python&logoColor=white) **pip**\n",
            ),
            Toolchain::Go => "- ![Go](https://img.shields.io/badge/Go-1.19+-00ADD8?style=flat&logo=go&logoColor=white) **Go** (1.19 or higher)\n",
            Toolchain::Rust => concat!(
                "- ![Rust](https://img.shields.io/badge/Rust-1.60+-000000?style=flat&logo=rust&logoColor=white) **Rust** (1.60 or higher)\n",
                "- ![Cargo](https://img.shields.io/badge/Cargo-latest-000000?style=flat&logo=rust&logoColor=white) **Cargo**\n",
            ),
            Toolchain::Other => "",
        }
    }

    fn install(self) -> &'static str {
        match self {
            Toolchain::Node => "# Using npm\nnpm install\n\n# Or using yarn\nyarn install\n",
            Toolchain::Python => "# Create virtual environment (recommended)\npython -m venv venv\nsource venv/bin/activate  # On Windows: venv\\Scripts\\activate\n\n# Install dependencies\npip install -r requirements.txt\n",
            Toolchain::Go => "# Download dependencies\ngo mod download\n",
            Toolchain::Rust => "# Build the project\ncargo build\n",
            Toolchain::Other => "# Install dependencies (check project documentation)\n# Follow the specific installation instructions for this project\n",
        }
    }

    fn quick_start_tail(self) -> &'static str {
        match self {
            Toolchain::Node => " && npm install && npm run dev\n",
            Toolchain::Python => " && pip install -r requirements.txt && python main.py\n",
            Toolchain::Go => " && go mod download && go run main.go\n",
            Toolchain::Rust => " && cargo run\n",
            Toolchain::Other => "\n# Follow the installation and run instructions above\n",
        }
    }
}

fn start_commands(analysis: &BasicAnalysis, toolchain: Toolchain) -> &'static str {
    let has_script = |s: &str| analysis.scripts.iter().any(|x| x == s);
    if has_script("dev") {
        "# Start development server\nnpm run dev\n\n# The application will be available at http://localhost:3000\n"
    } else if has_script("start") {
        "# Start the application\nnpm start\n"
    } else {
        match toolchain {
            Toolchain::Python => "# Run the application\npython main.py\n",
            Toolchain::Go => "# Run the application\ngo run main.go\n",
            Toolchain::Rust => "# Run the application\ncargo run\n",
            _ => "# Run the application (check project documentation)\n# Follow the specific run instructions for this project\n",
        }
    }
}

fn getting_started(info: &RepositoryInfo, analysis: &BasicAnalysis) -> String {
    let toolchain = Toolchain::of(analysis);
    let repo = &info.full_name;
    let name = &info.name;
    let mut out = String::from(
        "## 🚀 Getting Started\n\n### 📋 Prerequisites\n\nBefore you begin, ensure you have the following installed:\n\n",
    );
    if toolchain != Toolchain::Other {
        out.push_str(toolchain.prerequisites_list());
        out.push_str("- ![Git](https://img.shields.io/badge/Git-latest-F05032?style=flat&logo=git&logoColor=white) **Git**\n\n");
    }
    out.push_str("### 📦 Installation\n\nFollow these steps to get the project running locally:\n\n");
    out.push_str(&format!(
        "#### 1️⃣ Clone the Repository\n\n```bash\n# Clone the repository\ngit clone https://github.com/{repo}.git\n\n# Navigate to project directory\ncd {name}\n```\n\n"
    ));
    out.push_str(&format!(
        "#### 2️⃣ Install Dependencies\n\n```bash\n{}```\n\n",
        toolchain.install()
    ));
    out.push_str(&format!(
        "#### 3️⃣ Start the Application\n\n```bash\n{}```\n\n",
        start_commands(analysis, toolchain)
    ));
    out.push_str(&format!(
        "### ⚡ Quick Start\n\n```bash\ngit clone https://github.com/{repo}.git && cd {name}{}```\n\n",
        toolchain.quick_start_tail()
    ));
    out
}

fn project_structure(info: &RepositoryInfo, analysis: &BasicAnalysis) -> String {
    if analysis.structure.is_empty() {
        return String::new();
    }
    let mut out = format!("## 📁 Project Structure\n\n```\n{}/\n", info.name);
    for dir in analysis.structure.iter().take(MAX_STRUCTURE_ENTRIES) {
        out.push_str(&format!("├── {dir}/\n"));
    }
    out.push_str("└── README.md\n```\n\n");
    out
}

fn scripts(analysis: &BasicAnalysis) -> String {
    if analysis.scripts.is_empty() {
        return String::new();
    }
    let mut out = String::from("## 📜 Available Scripts\n\n");
    for script in &analysis.scripts {
        out.push_str(&format!("- `npm run {script}` - {}\n", script_description(script)));
    }
    out.push('\n');
    out
}

const CLOSING: &str = "## 🤝 Contributing\n\n\
    Contributions are welcome! Please feel free to submit a Pull Request.\n\n\
    1. Fork the project\n\
    2. Create your feature branch (`git checkout -b feature/AmazingFeature`)\n\
    3. Commit your changes (`git commit -m 'Add some AmazingFeature'`)\n\
    4. Push to the branch (`git push origin feature/AmazingFeature`)\n\
    5. Open a Pull Request\n\n\
    ## 📄 License\n\n\
    This project is licensed under the MIT License - see the [LICENSE](LICENSE) file for details.\n\n\
    ## 🙏 Acknowledgments\n\n\
    - Thanks to all contributors who have helped shape this project\n\
    - Built with ❤️ using modern development practices\n\
    - Generated with [GitSpicefy](https://gitspicefy.com) 🚀\n";

/// Analyzes `files` and renders the basic README.
pub fn render_basic_readme(info: &RepositoryInfo, files: &[GitHubFile]) -> String {
    let analysis = analyze_basic(info, files);
    [
        header(info, &analysis),
        TABLE_OF_CONTENTS.to_string(),
        about(info, &analysis),
        tech_stack(&analysis),
        features(info, &analysis),
        getting_started(info, &analysis),
        project_structure(info, &analysis),
        scripts(&analysis),
        CLOSING.to_string(),
    ]
    .concat()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(language: &str, description: &str) -> RepositoryInfo {
        RepositoryInfo {
            name: "widget".into(),
            full_name: "acme/widget".into(),
            description: description.into(),
            language: language.into(),
            stars: 9,
            forks: 2,
            is_private: false,
            default_branch: "main".into(),
        }
    }

    fn node_files() -> Vec<GitHubFile> {
        vec![
            GitHubFile::dir("src"),
            GitHubFile::file(
                "package.json",
                Some(r#"{"dependencies":{"react":"18","next":"14"},"devDependencies":{"typescript":"5","tailwindcss":"3"},"scripts":{"dev":"next dev","lint":"next lint","storybook":"storybook dev"}}"#),
            ),
            GitHubFile::file("src/app.test.tsx", Some("")),
            GitHubFile::file(".github/workflows/ci.yml", Some("")),
        ]
    }

    #[test]
    fn analysis_reads_package_json() {
        let a = analyze_basic(&info("TypeScript", ""), &node_files());
        assert_eq!(a.project_type, "Node.js/JavaScript");
        assert_eq!(a.frameworks, vec!["React", "Next.js", "Tailwind CSS", "TypeScript"]);
        assert_eq!(a.scripts, vec!["dev", "lint", "storybook"]);
        assert_eq!(a.dependencies, vec!["next", "react", "tailwindcss", "typescript"]);
        assert_eq!(a.structure, vec!["src"]);
        assert!(a.has_tests);
        assert!(a.has_ci);
    }

    #[test]
    fn later_manifest_wins_and_contents_add_frameworks() {
        let files = vec![
            GitHubFile::file("go.mod", Some("module x")),
            GitHubFile::file("requirements.txt", Some("Flask==3.0\n")),
            GitHubFile::file("notes.md", Some("what comes next")),
        ];
        let a = analyze_basic(&info("", ""), &files);
        assert_eq!(a.project_type, "Python");
        assert_eq!(a.main_language, "Unknown");
        assert_eq!(a.frameworks, vec!["Flask"]);
    }

    #[test]
    fn script_and_tech_tables_fall_back() {
        assert_eq!(script_description("lint"), "Run linter");
        assert_eq!(script_description("storybook"), "Run storybook command");
        assert_eq!(tech_icon("React"), ("react".to_string(), "61DAFB"));
        assert_eq!(tech_icon("Solid Start"), ("solidstart".to_string(), "666666"));
        assert_eq!(tech_description("Svelte"), "Svelte framework/library");
    }

    #[test]
    fn core_features_put_defaults_last() {
        let a = analyze_basic(&info("TypeScript", ""), &node_files());
        let titles: Vec<&str> = core_features(&a).into_iter().map(|(t, _)| t).collect();
        assert_eq!(
            titles,
            vec![
                "Component Architecture",
                "Server-Side Rendering",
                "Type Safety",
                "Quality Assurance",
                "Automated Deployment",
                "Modern Development",
                "Developer Experience",
            ]
        );
    }

    #[test]
    fn node_readme_has_badges_scripts_and_quick_start() {
        let readme = render_basic_readme(&info("TypeScript", ""), &node_files());
        assert!(readme.starts_with("<div align=\"center\">\n\n# widget\n\n### A modern Node.js/JavaScript project"));
        assert!(readme.contains("![Tailwind CSS](https://img.shields.io/badge/Tailwind%20CSS-06B6D4?style=for-the-badge&logo=tailwindcss&logoColor=white)"));
        assert!(readme.contains("| ⚛️ **React UI** |"));
        assert!(readme.contains("- **Frameworks**: React, Next.js, Tailwind CSS, TypeScript\n"));
        assert!(readme.contains("- `npm run storybook` - Run storybook command\n"));
        assert!(readme.contains("npm run dev\n\n# The application will be available at http://localhost:3000"));
        assert!(readme.contains("cd widget && npm install && npm run dev\n"));
        assert!(readme.contains("├── src/\n└── README.md"));
        assert!(readme.ends_with("Generated with [GitSpicefy](https://gitspicefy.com) 🚀\n"));
    }

    #[test]
    fn unknown_toolchain_skips_tech_stack_and_scripts() {
        let readme = render_basic_readme(&info("Haskell", "Parser combinators"), &[]);
        assert!(readme.contains("## 📋 About\n\nParser combinators\n\n"));
        assert!(!readme.contains("## 🛠️ Tech Stack"));
        assert!(!readme.contains("## 📜 Available Scripts"));
        assert!(!readme.contains("## 📁 Project Structure"));
        assert!(readme.contains("# Follow the installation and run instructions above"));
        assert!(!readme.contains("**Git**"));
    }
}
