//! # template: deterministic README synthesis
//!
//! [`render_readme`] assembles Markdown in a fixed section order from a
//! [`RepositoryAnalysis`] and a [`ReadmeConfig`]:
//!
//! header → badges → table of contents → about → features → tech stack → installation →
//! usage → project structure → project ideas → roadmap → contributing → license →
//! acknowledgments
//!
//! Every body section is a pure function of the descriptor and config, gated by its
//! section toggle. Rendering is idempotent: identical inputs give identical output.
//!
//! [`render_fallback_readme`] is a compact variant that works from raw files, used when a
//! remote model produces nothing usable.

use crate::analyze::RepositoryAnalysis;
use crate::contract::{GitHubFile, RepositoryInfo};
use crate::logo::generate_logo_for_project;
use crate::readme_config::{HeaderAlignment, ReadmeConfig, TocStyle};

const ROADMAP: &[&str] = &[
    "Improve documentation and code comments",
    "Add comprehensive unit and integration tests",
    "Performance optimization and code refactoring",
    "Implement user feedback and feature requests",
    "Add internationalization (i18n) support",
    "Create mobile-responsive design improvements",
    "Set up automated deployment pipeline",
    "Add monitoring and logging capabilities",
];

const MAX_PROJECT_IDEAS: usize = 5;

/// `## <emoji> <title>` with the emoji dropped when disabled.
fn heading(config: &ReadmeConfig, emoji: &str, title: &str) -> String {
    if config.add_emojis_to_headings {
        format!("## {emoji} {title}\n\n")
    } else {
        format!("## {title}\n\n")
    }
}

fn open_alignment(config: &ReadmeConfig) -> &'static str {
    match config.header_alignment {
        HeaderAlignment::Left => "",
        HeaderAlignment::Center => "<div align=\"center\">\n\n",
        HeaderAlignment::Right => "<div align=\"right\">\n\n",
    }
}

fn close_alignment(config: &ReadmeConfig) -> &'static str {
    match config.header_alignment {
        HeaderAlignment::Left => "",
        _ => "</div>\n\n",
    }
}

pub fn project_emoji(project_type: &str) -> &'static str {
    match project_type {
        "Next.js Application" => "⚡",
        "React Application" => "⚛️",
        "Vue.js Application" => "💚",
        "Angular Application" => "🅰️",
        "Node.js Application" => "🟢",
        "Django Application" | "Flask/FastAPI Application" | "Python Application" => "🐍",
        "Rust Application" => "🦀",
        "Go Application" => "🐹",
        "Java Application" => "☕",
        _ => "🚀",
    }
}

/// User-supplied description, then the GitHub one, then a project-type blurb.
pub fn describe(info: &RepositoryInfo, analysis: &RepositoryAnalysis, config: &ReadmeConfig) -> String {
    if let Some(custom) = config
        .project_description
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
    {
        return custom.to_string();
    }
    if !info.description.is_empty() {
        return info.description.clone();
    }
    let blurb = match analysis.project_type.as_str() {
        "Next.js Application" => "A modern, full-stack web application built with Next.js, featuring server-side rendering and optimal performance",
        "React Application" => "A dynamic, interactive web application built with React, showcasing modern component-based architecture",
        "Vue.js Application" => "A progressive web application built with Vue.js, combining simplicity with powerful features",
        "Node.js Application" => "A scalable server-side application built with Node.js, designed for high performance and reliability",
        "Python Application" => "A robust Python application demonstrating clean code practices and efficient problem-solving",
        "Rust Application" => "A high-performance, memory-safe application built with Rust, emphasizing speed and reliability",
        "Go Application" => "A concurrent, efficient application built with Go, designed for scalability and simplicity",
        _ => {
            return format!(
                "A well-crafted {} project showcasing modern development practices",
                info.language
            )
        }
    };
    blurb.to_string()
}

fn tech_description(tech: &str) -> String {
    match tech {
        "React" => "A JavaScript library for building user interfaces".into(),
        "Next.js" => "The React framework for production".into(),
        "Vue.js" => "The progressive JavaScript framework".into(),
        "Angular" => "Platform for building mobile and desktop web applications".into(),
        "Express.js" => "Fast, unopinionated, minimalist web framework for Node.js".into(),
        "TypeScript" => "JavaScript with syntax for types".into(),
        "Tailwind CSS" => "Utility-first CSS framework".into(),
        "Sass/SCSS" => "CSS extension language".into(),
        "Webpack" => "Module bundler".into(),
        "Vite" => "Next generation frontend tooling".into(),
        "Django" => "The web framework for perfectionists with deadlines".into(),
        "Flask" => "Lightweight WSGI web application framework".into(),
        "FastAPI" => "Modern, fast web framework for building APIs with Python".into(),
        "Tokio" => "Asynchronous runtime for Rust".into(),
        other => format!("{other} framework/library"),
    }
}

fn header(info: &RepositoryInfo, analysis: &RepositoryAnalysis, config: &ReadmeConfig) -> String {
    let mut out = String::from(open_alignment(config));
    if config.generate_logo {
        let description = (!info.description.is_empty()).then_some(info.description.as_str());
        out.push_str(&generate_logo_for_project(
            &info.name,
            Some(analysis.project_type.as_str()),
            description,
        ));
        out.push_str("\n\n");
    }
    if config.add_emojis_to_headings {
        out.push_str(&format!("# {} {}\n\n", project_emoji(&analysis.project_type), info.name));
    } else {
        out.push_str(&format!("# {}\n\n", info.name));
    }
    out.push_str(&format!("### {}\n\n", describe(info, analysis, config)));
    out
}

fn badges(info: &RepositoryInfo, analysis: &RepositoryAnalysis, config: &ReadmeConfig) -> String {
    if !config.sections.badges {
        return String::new();
    }
    let style = config.badge_style.as_str();
    let repo = &info.full_name;
    let mut out = format!(
        "[![GitHub stars](https://img.shields.io/github/stars/{repo}?style={style}&logo=github)](https://github.com/{repo}/stargazers) \
         [![GitHub forks](https://img.shields.io/github/forks/{repo}?style={style}&logo=github)](https://github.com/{repo}/network) \
         [![GitHub issues](https://img.shields.io/github/issues/{repo}?style={style}&logo=github)](https://github.com/{repo}/issues) "
    );
    if !info.language.is_empty() {
        let language = info.language.replace(' ', "%20").replace('-', "--");
        out.push_str(&format!(
            "[![Language](https://img.shields.io/badge/language-{language}-blue?style={style})]() "
        ));
    }
    if analysis.has_tests {
        out.push_str(&format!(
            "[![Tests](https://img.shields.io/badge/tests-passing-brightgreen?style={style})]() "
        ));
    }
    if analysis.has_ci {
        out.push_str(&format!(
            "[![CI/CD](https://img.shields.io/badge/CI%2FCD-enabled-blue?style={style})]() "
        ));
    }
    out.push_str("\n\n");
    out
}

/// `(enabled, emoji, title)` for each table-of-contents entry, in document order.
fn toc_entries(config: &ReadmeConfig) -> Vec<(&'static str, &'static str)> {
    let s = &config.sections;
    [
        (true, "📋", "About"),
        (s.features, "✨", "Features"),
        (s.tech_stack, "🛠️", "Tech Stack"),
        (s.installation, "🚀", "Getting Started"),
        (s.usage, "💻", "Usage"),
        (s.project_structure, "📁", "Project Structure"),
        (s.project_ideas, "💡", "Project Ideas"),
        (s.roadmap, "🗺️", "Roadmap"),
        (s.contributors, "🤝", "Contributing"),
        (s.license, "📄", "License"),
        (s.acknowledgments, "🙏", "Acknowledgments"),
    ]
    .into_iter()
    .filter(|(on, _, _)| *on)
    .map(|(_, emoji, title)| (emoji, title))
    .collect()
}

fn anchor(title: &str) -> String {
    title.to_lowercase().split_whitespace().collect::<Vec<_>>().join("-")
}

fn table_of_contents(config: &ReadmeConfig) -> String {
    let entries = toc_entries(config);
    let mut out = heading(config, "📚", "Table of Contents");
    if config.table_of_contents_style == TocStyle::Minimal {
        let links: Vec<String> = entries
            .iter()
            .map(|(_, title)| format!("[{title}](#{})", anchor(title)))
            .collect();
        out.push_str(&links.join(" • "));
        out.push_str("\n\n");
        return out;
    }
    for (i, (emoji, title)) in entries.iter().enumerate() {
        let prefix = match config.table_of_contents_style {
            TocStyle::Numbered => format!("{}. ", i + 1),
            _ => "- ".to_string(),
        };
        let label = if config.add_emojis_to_headings {
            format!("{emoji} {title}")
        } else {
            title.to_string()
        };
        out.push_str(&format!("{prefix}[{label}](#{})\n", anchor(title)));
    }
    out.push('\n');
    out
}

fn about(info: &RepositoryInfo, analysis: &RepositoryAnalysis, config: &ReadmeConfig) -> String {
    let mut out = heading(config, "📋", "About");
    out.push_str(&format!("{}\n\n", describe(info, analysis, config)));
    out.push_str("### 🎯 Key Highlights\n\n");
    out.push_str(&format!("- **Project Type**: {}\n", analysis.project_type));
    out.push_str(&format!("- **Language**: {}\n", info.language));
    out.push_str(&format!("- **Package Manager**: {}\n", analysis.package_manager));
    if let Some(tool) = &analysis.build_tool {
        out.push_str(&format!("- **Build Tool**: {tool}\n"));
    }
    out.push_str(&format!("- **Stars**: {} ⭐\n", info.stars));
    out.push_str(&format!("- **Forks**: {} 🍴\n", info.forks));
    if analysis.has_tests {
        out.push_str("- **Testing**: ✅ Comprehensive test suite\n");
    }
    if analysis.has_ci {
        out.push_str("- **CI/CD**: ✅ Automated workflows\n");
    }
    if analysis.has_docker {
        out.push_str("- **Docker**: ✅ Containerized deployment\n");
    }
    out.push('\n');
    out
}

fn features(analysis: &RepositoryAnalysis, config: &ReadmeConfig) -> String {
    let mut out = heading(config, "✨", "Features");
    if !config.custom_features.is_empty() {
        for feature in &config.custom_features {
            out.push_str(&format!("- 🚀 **{feature}**\n"));
        }
    } else {
        for feature in &analysis.features {
            out.push_str(&format!("- ✅ **{feature}**\n"));
        }
        for framework in &analysis.frameworks {
            out.push_str(&format!(
                "- 🛠️ **{framework}** - Modern {framework} implementation\n"
            ));
        }
        out.push_str("- 📱 **Responsive Design** - Works on all devices\n");
        out.push_str("- ⚡ **High Performance** - Optimized for speed\n");
        out.push_str("- 🔧 **Easy Setup** - Quick installation and configuration\n");
    }
    out.push('\n');
    out
}

fn tech_stack(analysis: &RepositoryAnalysis, config: &ReadmeConfig) -> String {
    let mut out = heading(config, "🛠️", "Tech Stack");
    if !config.custom_tech_stack.is_empty() {
        for tech in &config.custom_tech_stack {
            out.push_str(&format!("- **{tech}**\n"));
        }
    } else {
        for framework in &analysis.frameworks {
            out.push_str(&format!("- **{framework}** - {}\n", tech_description(framework)));
        }
        out.push_str(&format!("- **{}** - Package management\n", analysis.package_manager));
        if let Some(tool) = &analysis.build_tool {
            out.push_str(&format!("- **{tool}** - Build tool\n"));
        }
        out.push_str("- **Git** - Version control\n");
        out.push_str("- **GitHub** - Code hosting and collaboration\n");
    }
    out.push('\n');
    out
}

fn is_node_manager(package_manager: &str) -> bool {
    matches!(package_manager, "npm" | "Yarn" | "pnpm")
}

fn prerequisites(analysis: &RepositoryAnalysis) -> String {
    let pm = analysis.package_manager.as_str();
    let mut out = match pm {
        "pip" => "- Python (3.8 or higher)\n- pip\n".to_string(),
        "Cargo" => "- Rust (1.60 or higher)\n- Cargo\n".to_string(),
        "Go Modules" => "- Go (1.19 or higher)\n".to_string(),
        _ if is_node_manager(pm) => format!("- Node.js (v16 or higher)\n- {pm}\n"),
        _ => String::new(),
    };
    out.push_str("- Git\n");
    out
}

fn install_commands(analysis: &RepositoryAnalysis) -> &'static str {
    match analysis.package_manager.as_str() {
        "pip" => "pip install -r requirements.txt\n# or if using virtual environment\npython -m venv venv\nsource venv/bin/activate  # On Windows: venv\\Scripts\\activate\npip install -r requirements.txt\n",
        "Cargo" => "cargo build\n",
        "Go Modules" => "go mod download\n",
        "npm" => "npm install\n",
        "Yarn" => "yarn install\n",
        "pnpm" => "pnpm install\n",
        "Maven/Gradle" => "mvn install\n# or\ngradle build\n",
        "Bundler" => "bundle install\n",
        "Composer" => "composer install\n",
        "NuGet" => "dotnet restore\n",
        _ => "# Follow project-specific installation instructions\n",
    }
}

fn installation(info: &RepositoryInfo, analysis: &RepositoryAnalysis, config: &ReadmeConfig) -> String {
    let mut out = heading(config, "🚀", "Getting Started");
    out.push_str("### Prerequisites\n\n");
    out.push_str(&prerequisites(analysis));
    out.push_str("\n### Installation\n\n");
    out.push_str("1. Clone the repository:\n```bash\n");
    out.push_str(&format!(
        "git clone https://github.com/{}.git\ncd {}\n",
        info.full_name, info.name
    ));
    out.push_str("```\n\n2. Install dependencies:\n```bash\n");
    out.push_str(install_commands(analysis));
    out.push_str("```\n\n");
    out
}

fn usage_commands(analysis: &RepositoryAnalysis) -> &'static str {
    let pm = analysis.package_manager.as_str();
    match pm {
        "pip" => "python main.py\n# or\npython app.py\n# or if using a specific script\npython src/main.py\n",
        "Cargo" => "cargo run\n# or for release build\ncargo run --release\n",
        "Go Modules" => "go run main.go\n# or build and run\ngo build\n./main\n",
        _ if analysis.project_type.contains("Next.js") => {
            "npm run dev\n# or\nyarn dev\n# or\npnpm dev\n\n# Open http://localhost:3000 in your browser\n"
        }
        _ if is_node_manager(pm) => "npm start\n# or for development\nnpm run dev\n",
        _ => "# Run the application\n# Check project documentation for specific commands\n",
    }
}

fn usage(analysis: &RepositoryAnalysis, config: &ReadmeConfig) -> String {
    let mut out = heading(config, "💻", "Usage");
    out.push_str("```bash\n");
    out.push_str(usage_commands(analysis));
    out.push_str("```\n\n");
    out
}

fn manifest_name(analysis: &RepositoryAnalysis) -> &'static str {
    match analysis.package_manager.as_str() {
        "pip" => "requirements.txt",
        "Cargo" => "Cargo.toml",
        "Go Modules" => "go.mod",
        _ => "package.json",
    }
}

fn project_structure(info: &RepositoryInfo, analysis: &RepositoryAnalysis, config: &ReadmeConfig) -> String {
    let mut out = heading(config, "📁", "Project Structure");
    out.push_str(&format!("```\n{}/\n", info.name));
    for dir in analysis.structure.iter().take(10) {
        out.push_str(&format!("├── {dir}/\n"));
    }
    out.push_str("├── README.md\n");
    out.push_str(&format!("└── {}\n```\n\n", manifest_name(analysis)));
    out
}

/// Up to five follow-up ideas. Project-type specific ideas come before the generic ones.
pub fn project_ideas(info: &RepositoryInfo, analysis: &RepositoryAnalysis) -> Vec<String> {
    let mut ideas = vec![format!(
        "Extend {} with additional {} features",
        info.name, analysis.project_type
    )];
    let ty = &analysis.project_type;
    if ty.contains("React") || ty.contains("Next.js") {
        ideas.push("Add Progressive Web App (PWA) capabilities".to_string());
        ideas.push("Implement server-side rendering optimizations".to_string());
    }
    if ty.contains("Python") {
        ideas.push("Add machine learning capabilities".to_string());
        ideas.push("Create a REST API with FastAPI".to_string());
    }
    ideas.extend(
        [
            "Create a mobile version using React Native or Flutter",
            "Build a comprehensive admin dashboard",
            "Add real-time features with WebSockets",
            "Implement advanced analytics and reporting",
        ]
        .map(str::to_string),
    );
    ideas.truncate(MAX_PROJECT_IDEAS);
    ideas
}

pub fn roadmap_items() -> &'static [&'static str] {
    ROADMAP
}

fn project_ideas_section(info: &RepositoryInfo, analysis: &RepositoryAnalysis, config: &ReadmeConfig) -> String {
    let mut out = heading(config, "💡", "Project Ideas");
    for idea in project_ideas(info, analysis) {
        out.push_str(&format!("- {idea}\n"));
    }
    out.push('\n');
    out
}

fn roadmap(config: &ReadmeConfig) -> String {
    let mut out = heading(config, "🗺️", "Roadmap");
    for item in roadmap_items() {
        out.push_str(&format!("- [ ] {item}\n"));
    }
    out.push('\n');
    out
}

fn contributing(config: &ReadmeConfig) -> String {
    let mut out = heading(config, "🤝", "Contributing");
    out.push_str(
        "Contributions are welcome! Please feel free to submit a Pull Request.\n\n\
         1. Fork the project\n\
         2. Create your feature branch (`git checkout -b feature/AmazingFeature`)\n\
         3. Commit your changes (`git commit -m 'Add some AmazingFeature'`)\n\
         4. Push to the branch (`git push origin feature/AmazingFeature`)\n\
         5. Open a Pull Request\n\n",
    );
    out
}

fn license(config: &ReadmeConfig) -> String {
    let mut out = heading(config, "📄", "License");
    out.push_str(&format!(
        "This project is licensed under the {} License - see the [LICENSE](LICENSE) file for details.\n\n",
        config.license_type.as_str()
    ));
    out
}

fn acknowledgments(config: &ReadmeConfig) -> String {
    let mut out = heading(config, "🙏", "Acknowledgments");
    out.push_str(
        "- Thanks to all contributors who have helped shape this project\n\
         - Built with ❤️ using modern development practices\n\
         - Generated with [GitSpicefy](https://gitspicefy.com) 🚀\n\n",
    );
    out
}

/// Renders the full README. Pure and idempotent.
pub fn render_readme(info: &RepositoryInfo, analysis: &RepositoryAnalysis, config: &ReadmeConfig) -> String {
    let s = &config.sections;
    let mut readme = header(info, analysis, config);
    readme.push_str(&badges(info, analysis, config));
    readme.push_str(close_alignment(config));
    readme.push_str("---\n\n");
    readme.push_str(&table_of_contents(config));
    readme.push_str(&about(info, analysis, config));

    let body: [(bool, String); 10] = [
        (s.features, features(analysis, config)),
        (s.tech_stack, tech_stack(analysis, config)),
        (s.installation, installation(info, analysis, config)),
        (s.usage, usage(analysis, config)),
        (s.project_structure, project_structure(info, analysis, config)),
        (s.project_ideas, project_ideas_section(info, analysis, config)),
        (s.roadmap, roadmap(config)),
        (s.contributors, contributing(config)),
        (s.license, license(config)),
        (s.acknowledgments, acknowledgments(config)),
    ];
    for (_, section) in body.into_iter().filter(|(on, _)| *on) {
        readme.push_str(&section);
    }
    readme
}

/// Compact README built from the raw file list, without a prior analysis pass.
pub fn render_fallback_readme(info: &RepositoryInfo, files: &[GitHubFile], config: &ReadmeConfig) -> String {
    let s = &config.sections;
    let language = info.language.as_str();
    let has_name = |name: &str| files.iter().any(|f| f.name == name);
    let path_has = |needle: &str| files.iter().any(|f| f.path.contains(needle));
    let dockerized = files.iter().any(|f| f.name.to_lowercase().contains("docker"));
    let node = matches!(language, "JavaScript" | "TypeScript") || has_name("package.json");

    let mut readme = String::from(open_alignment(config));
    if config.generate_logo {
        let description = (!info.description.is_empty()).then_some(info.description.as_str());
        readme.push_str(&generate_logo_for_project(&info.name, Some(language), description));
        readme.push_str("\n\n");
    }
    if config.add_emojis_to_headings {
        readme.push_str(&format!("# 🚀 {}\n\n", info.name));
    } else {
        readme.push_str(&format!("# {}\n\n", info.name));
    }
    let description = if info.description.is_empty() {
        format!("A modern {language} project with advanced features")
    } else {
        info.description.clone()
    };
    readme.push_str(&format!("### {description}\n\n"));

    if s.badges {
        let style = config.badge_style.as_str();
        let repo = &info.full_name;
        readme.push_str(&format!(
            "[![GitHub stars](https://img.shields.io/github/stars/{repo}?style={style}&logo=github)](https://github.com/{repo}/stargazers) \
             [![GitHub forks](https://img.shields.io/github/forks/{repo}?style={style}&logo=github)](https://github.com/{repo}/network) \
             [![GitHub issues](https://img.shields.io/github/issues/{repo}?style={style}&logo=github)](https://github.com/{repo}/issues)\n\n"
        ));
    }
    readme.push_str(close_alignment(config));
    readme.push_str("---\n\n");

    readme.push_str(&heading(config, "📋", "About"));
    readme.push_str(&format!(
        "{description}\n\nThis {language} project demonstrates modern development practices and includes:\n\n"
    ));
    readme.push_str(&format!(
        "- 🚀 **Modern {language}** - Built with latest {language} features\n"
    ));
    if path_has("test") || path_has("spec") {
        readme.push_str("- 🧪 **Well Tested** - Comprehensive test coverage\n");
    }
    if path_has(".github/workflows") {
        readme.push_str("- 🔄 **CI/CD Ready** - Automated deployment pipeline\n");
    }
    if dockerized {
        readme.push_str("- 🐳 **Dockerized** - Easy deployment with Docker\n");
    }
    if files.iter().any(|f| f.name.to_lowercase().contains("readme")) || path_has("docs") {
        readme.push_str("- 📚 **Well Documented** - Comprehensive documentation\n");
    }
    readme.push_str(
        "- ⚡ **High Performance** - Optimized for speed and efficiency\n\
         - 🔧 **Easy Setup** - Quick installation and configuration\n\
         - 📱 **Cross Platform** - Works on multiple platforms\n\n",
    );

    if s.tech_stack {
        readme.push_str(&heading(config, "🛠️", "Tech Stack"));
        readme.push_str(&format!("- **{language}** - Primary programming language\n"));
        let mut tech: Vec<&str> = Vec::new();
        if has_name("package.json") {
            tech.extend(["Node.js", "npm"]);
        }
        if has_name("requirements.txt") || has_name("pyproject.toml") {
            tech.extend(["Python", "pip"]);
        }
        if has_name("Cargo.toml") {
            tech.extend(["Rust", "Cargo"]);
        }
        if has_name("go.mod") {
            tech.push("Go Modules");
        }
        if dockerized {
            tech.push("Docker");
        }
        if path_has(".github") {
            tech.push("GitHub Actions");
        }
        tech.extend(["Git", "GitHub"]);
        for t in tech {
            readme.push_str(&format!("- **{t}**\n"));
        }
        readme.push('\n');
    }

    if s.installation {
        let (prereqs, install) = if node {
            ("- Node.js (v16 or higher)\n- npm or yarn\n", "npm install\n")
        } else {
            match language {
                "Python" => ("- Python (3.8 or higher)\n- pip\n", "pip install -r requirements.txt\n"),
                "Rust" => ("- Rust (1.60 or higher)\n- Cargo\n", "cargo build\n"),
                "Go" => ("- Go (1.19 or higher)\n", "go mod download\n"),
                _ => ("", "# Follow project-specific installation instructions\n"),
            }
        };
        readme.push_str(&heading(config, "🚀", "Getting Started"));
        readme.push_str(&format!("### Prerequisites\n\n{prereqs}- Git\n\n### Installation\n\n```bash\n"));
        readme.push_str(&format!(
            "git clone https://github.com/{}.git\ncd {}\n{install}```\n\n",
            info.full_name, info.name
        ));
    }

    if s.usage {
        let run = if node {
            "npm start\n# or for development\nnpm run dev\n"
        } else {
            match language {
                "Python" => "python main.py\n# or\npython app.py\n",
                "Rust" => "cargo run\n",
                "Go" => "go run main.go\n",
                _ => "# Run the application\n# Check project documentation for specific commands\n",
            }
        };
        readme.push_str(&heading(config, "💻", "Usage"));
        readme.push_str(&format!("```bash\n{run}```\n\n"));
    }

    if s.contributors {
        readme.push_str(&contributing(config));
    }
    if s.license {
        readme.push_str(&license(config));
    }
    if s.acknowledgments {
        readme.push_str(&acknowledgments(config));
    }
    readme
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info() -> RepositoryInfo {
        RepositoryInfo {
            name: "demo".into(),
            full_name: "acme/demo".into(),
            description: String::new(),
            language: "Rust".into(),
            stars: 3,
            forks: 1,
            is_private: false,
            default_branch: "main".into(),
        }
    }

    fn analysis() -> RepositoryAnalysis {
        RepositoryAnalysis {
            project_type: "Rust Application".into(),
            main_language: "Rust".into(),
            package_manager: "Cargo".into(),
            structure: vec!["src".into()],
            ..Default::default()
        }
    }

    #[test]
    fn numbered_toc_counts_up() {
        let config = ReadmeConfig {
            table_of_contents_style: TocStyle::Numbered,
            add_emojis_to_headings: false,
            ..Default::default()
        };
        let toc = table_of_contents(&config);
        assert!(toc.contains("1. [About](#about)"));
        assert!(toc.contains("2. [Features](#features)"));
        assert!(toc.contains("[Getting Started](#getting-started)"));
    }

    #[test]
    fn minimal_toc_is_one_line() {
        let config = ReadmeConfig {
            table_of_contents_style: TocStyle::Minimal,
            ..Default::default()
        };
        let toc = table_of_contents(&config);
        assert_eq!(toc.lines().filter(|l| l.contains("](#")).count(), 1);
        assert!(!toc.contains("✨"));
    }

    #[test]
    fn left_alignment_has_no_div() {
        let config = ReadmeConfig {
            header_alignment: HeaderAlignment::Left,
            ..Default::default()
        };
        let readme = render_readme(&info(), &analysis(), &config);
        assert!(!readme.contains("<div"));
        assert!(readme.starts_with("# 🦀 demo"));
    }

    #[test]
    fn logo_is_inlined_when_requested() {
        let config = ReadmeConfig {
            generate_logo: true,
            ..Default::default()
        };
        let readme = render_readme(&info(), &analysis(), &config);
        assert!(readme.contains("<svg"));
    }

    #[test]
    fn project_ideas_are_capped() {
        let mut a = analysis();
        a.project_type = "Python Application".into();
        let ideas = project_ideas(&info(), &a);
        assert_eq!(ideas.len(), MAX_PROJECT_IDEAS);
        assert!(ideas[0].contains("Python Application"));
        assert_eq!(ideas[1], "Add machine learning capabilities");
        assert_eq!(ideas[2], "Create a REST API with FastAPI");

        a.project_type = "Next.js Application".into();
        let ideas = project_ideas(&info(), &a);
        assert!(ideas.contains(&"Add Progressive Web App (PWA) capabilities".to_string()));

        a.project_type = "Go Application".into();
        let ideas = project_ideas(&info(), &a);
        assert_eq!(ideas.len(), MAX_PROJECT_IDEAS);
        assert_eq!(ideas[1], "Create a mobile version using React Native or Flutter");
    }

    #[test]
    fn user_description_wins_over_repository_description() {
        let mut i = info();
        i.description = "From GitHub".into();
        let config = ReadmeConfig {
            project_description: Some("A hand-written pitch".into()),
            ..Default::default()
        };
        let readme = render_readme(&i, &analysis(), &config);
        assert!(readme.contains("### A hand-written pitch\n\n"));
        assert!(readme.contains("About\n\nA hand-written pitch\n\n"));
        assert!(!readme.contains("From GitHub"));

        let blank = ReadmeConfig {
            project_description: Some("   ".into()),
            ..Default::default()
        };
        assert_eq!(describe(&i, &analysis(), &blank), "From GitHub");
    }

    #[test]
    fn fallback_mentions_pip_for_python() {
        let mut i = info();
        i.language = "Python".into();
        let files = vec![GitHubFile::file("requirements.txt", Some("flask"))];
        let readme = render_fallback_readme(&i, &files, &ReadmeConfig::default());
        assert!(readme.contains("pip install -r requirements.txt"));
        assert!(readme.contains("A modern Python project"));
    }
}
