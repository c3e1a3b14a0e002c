//! Static skill taxonomy: keyword -> category mapping with alias resolution
//! and a case-insensitive whole-word automaton over all surface forms.
//!
//! The taxonomy is built once per process and shared read-only through
//! [`Taxonomy::global`]; nothing mutates it after construction.

use aho_corasick::AhoCorasick;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Bumped whenever the built-in skill lists change.
pub const TAXONOMY_VERSION: &str = "2024.1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillCategory {
    ProgrammingLanguage,
    Framework,
    Database,
    Tool,
    CloudPlatform,
    Methodology,
    Certification,
    SoftSkill,
}

impl SkillCategory {
    /// Ranking used when one keyword is claimed by two categories: the more
    /// specific category wins, soft skills being the least specific.
    fn specificity(&self) -> u8 {
        match self {
            SkillCategory::SoftSkill => 0,
            SkillCategory::Tool => 1,
            SkillCategory::Methodology => 2,
            SkillCategory::ProgrammingLanguage => 3,
            SkillCategory::Framework => 4,
            SkillCategory::Database => 5,
            SkillCategory::CloudPlatform => 6,
            SkillCategory::Certification => 7,
        }
    }
}

impl std::fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SkillCategory::ProgrammingLanguage => "programming language",
            SkillCategory::Framework => "framework",
            SkillCategory::Database => "database",
            SkillCategory::Tool => "tool",
            SkillCategory::CloudPlatform => "cloud platform",
            SkillCategory::Methodology => "methodology",
            SkillCategory::Certification => "certification",
            SkillCategory::SoftSkill => "soft skill",
        };
        write!(f, "{}", name)
    }
}

/// One canonical skill: display name in canonical casing plus its category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillEntry {
    pub name: String,
    pub category: SkillCategory,
}

/// A whole-word hit of a taxonomy surface form in some text.
#[derive(Debug, Clone)]
pub struct SkillMention<'t> {
    pub entry: &'t SkillEntry,
    pub start: usize,
    pub end: usize,
}

pub struct Taxonomy {
    entries: Vec<SkillEntry>,
    patterns: Vec<String>,
    pattern_entry: Vec<usize>,
    matcher: AhoCorasick,
}

/// The one canonicalization policy for skill names. Deduplication,
/// exact-match scoring, and set differences all go through here.
pub fn canonical_key(name: &str) -> String {
    let lowered = name.trim().to_lowercase();
    let collapsed: String = lowered.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed
        .trim_end_matches(['.', ',', ';', ':'])
        .to_string()
}

impl Taxonomy {
    /// Process-wide shared instance, built on first use.
    pub fn global() -> &'static Taxonomy {
        static TAXONOMY: OnceLock<Taxonomy> = OnceLock::new();
        TAXONOMY.get_or_init(Taxonomy::builtin)
    }

    pub fn builtin() -> Self {
        let mut builder = TaxonomyBuilder::new();

        builder.category(
            SkillCategory::ProgrammingLanguage,
            &[
                "Python", "JavaScript", "TypeScript", "Java", "C++", "C#", "C", "Ruby", "PHP",
                "Swift", "Kotlin", "Go", "Rust", "Scala", "R", "Perl", "Objective-C", "Dart",
                "MATLAB", "Shell", "Bash", "PowerShell", "SQL", "PL/SQL", "Groovy", "Lua",
                "Haskell", "Elixir", "Clojure", "F#", "Julia", "Assembly",
            ],
        );
        builder.category(
            SkillCategory::Framework,
            &[
                "React", "Angular", "Vue", "Node.js", "Express.js", "Django", "Flask", "FastAPI",
                "Spring", "Spring Boot", "Hibernate", ".NET", "ASP.NET", "Laravel", "Symfony",
                "Ruby on Rails", "jQuery", "Bootstrap", "Tailwind CSS", "Next.js", "Nuxt.js",
                "Gatsby", "Svelte", "Redux", "TensorFlow", "PyTorch", "Keras", "Scikit-learn",
                "Pandas", "NumPy", "Apache Spark", "Hadoop", "Kafka", "RabbitMQ", "Selenium",
                "Cypress", "Jest", "Mocha", "Pytest", "JUnit", "Playwright", "Axum", "Actix",
                "Tokio",
            ],
        );
        builder.category(
            SkillCategory::Database,
            &[
                "MySQL", "PostgreSQL", "MongoDB", "Oracle", "SQL Server", "SQLite", "Redis",
                "Cassandra", "DynamoDB", "Elasticsearch", "MariaDB", "CouchDB", "Neo4j",
                "Firebase", "Firestore", "Supabase", "InfluxDB", "Memcached", "Snowflake",
                "BigQuery", "Redshift",
            ],
        );
        builder.category(
            SkillCategory::Tool,
            &[
                "Git", "GitHub", "GitLab", "Bitbucket", "Docker", "Kubernetes", "Jenkins",
                "Travis CI", "CircleCI", "GitHub Actions", "Terraform", "Ansible", "Chef",
                "Puppet", "Vagrant", "JIRA", "Confluence", "Trello", "Slack", "VS Code",
                "Visual Studio", "IntelliJ IDEA", "PyCharm", "Eclipse", "Postman", "Swagger",
                "Nginx", "Apache", "Linux", "Unix", "Vim", "Emacs", "Webpack", "Vite", "Babel",
                "ESLint", "npm", "yarn", "Maven", "Gradle", "Make", "CMake", "Figma", "Tableau",
                "Power BI", "Grafana", "Prometheus", "Datadog", "Splunk", "AWS", "Azure",
                "Google Cloud", "Heroku",
            ],
        );
        builder.category(
            SkillCategory::CloudPlatform,
            &[
                "AWS", "Amazon Web Services", "Azure", "Microsoft Azure", "Google Cloud", "GCP",
                "Google Cloud Platform", "IBM Cloud", "Oracle Cloud", "DigitalOcean", "Heroku",
                "Netlify", "Vercel", "Cloudflare",
            ],
        );
        builder.category(
            SkillCategory::Methodology,
            &[
                "Agile", "Scrum", "Kanban", "Waterfall", "DevOps", "CI/CD",
                "Test-Driven Development", "Behavior-Driven Development", "Microservices",
                "RESTful API", "GraphQL", "SOAP", "Object-Oriented Programming",
                "Functional Programming", "Design Patterns", "MVC", "Clean Architecture",
                "Domain-Driven Design",
            ],
        );
        builder.category(
            SkillCategory::Certification,
            &[
                "AWS Certified", "Azure Certified", "Google Cloud Certified", "PMP",
                "Scrum Master", "CSM", "CISSP", "CompTIA", "CCNA", "CCNP", "RHCE", "RHCSA",
                "CKA", "CKAD", "Oracle Certified", "Microsoft Certified",
            ],
        );
        builder.category(
            SkillCategory::SoftSkill,
            &[
                "Leadership", "Communication", "Teamwork", "Problem Solving",
                "Critical Thinking", "Project Management", "Time Management", "Adaptability",
                "Creativity", "Collaboration", "Presentation", "Negotiation",
                "Conflict Resolution", "Decision Making", "Strategic Planning", "Mentoring",
                "Coaching", "Agile", "Scrum", "Kanban", "Stakeholder Management",
                "Customer Service", "Public Speaking", "Documentation", "Research",
                "Attention to Detail",
            ],
        );

        // Shorthand forms seen in the wild, resolving to canonical entries.
        builder.alias("js", "JavaScript");
        builder.alias("ts", "TypeScript");
        builder.alias("k8s", "Kubernetes");
        builder.alias("postgres", "PostgreSQL");
        builder.alias("mongo", "MongoDB");
        builder.alias("react.js", "React");
        builder.alias("vue.js", "Vue");
        builder.alias("node", "Node.js");
        builder.alias("nodejs", "Node.js");
        builder.alias("golang", "Go");
        builder.alias("sklearn", "Scikit-learn");
        builder.alias("oop", "Object-Oriented Programming");
        builder.alias("tdd", "Test-Driven Development");
        builder.alias("bdd", "Behavior-Driven Development");
        builder.alias("ddd", "Domain-Driven Design");

        builder.build()
    }

    /// All whole-word mentions of taxonomy surface forms in `text`, in
    /// document order. Overlaps resolve leftmost-longest, so "JavaScript"
    /// never also reports "Java".
    pub fn find_mentions<'t>(&'t self, text: &str) -> Vec<SkillMention<'t>> {
        let mut mentions = Vec::new();

        for mat in self.matcher.find_iter(text) {
            let pattern = &self.patterns[mat.pattern().as_usize()];
            if !is_whole_word(text, mat.start(), mat.end(), pattern) {
                continue;
            }
            mentions.push(SkillMention {
                entry: &self.entries[self.pattern_entry[mat.pattern().as_usize()]],
                start: mat.start(),
                end: mat.end(),
            });
        }

        mentions
    }

    /// Look up the canonical entry for a skill name, alias-aware.
    pub fn lookup(&self, name: &str) -> Option<&SkillEntry> {
        let key = canonical_key(name);
        self.patterns
            .iter()
            .position(|p| canonical_key(p) == key)
            .map(|idx| &self.entries[self.pattern_entry[idx]])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Word-boundary test mirroring `\b` semantics: an edge that touches an
/// alphanumeric pattern character must not also touch alphanumeric text.
fn is_whole_word(text: &str, start: usize, end: usize, pattern: &str) -> bool {
    let first_alnum = pattern.chars().next().map(|c| c.is_alphanumeric()).unwrap_or(false);
    let last_alnum = pattern.chars().next_back().map(|c| c.is_alphanumeric()).unwrap_or(false);

    let left_ok = !first_alnum
        || text[..start]
            .chars()
            .next_back()
            .map(|c| !c.is_alphanumeric())
            .unwrap_or(true);
    let right_ok = !last_alnum
        || text[end..]
            .chars()
            .next()
            .map(|c| !c.is_alphanumeric())
            .unwrap_or(true);

    left_ok && right_ok
}

struct TaxonomyBuilder {
    entries: Vec<SkillEntry>,
    by_key: HashMap<String, usize>,
    aliases: Vec<(String, String)>,
}

impl TaxonomyBuilder {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
            by_key: HashMap::new(),
            aliases: Vec::new(),
        }
    }

    fn category(&mut self, category: SkillCategory, names: &[&str]) {
        for name in names {
            let key = canonical_key(name);
            match self.by_key.get(&key) {
                Some(&idx) => {
                    // Duplicate keyword: keep the more specific category,
                    // first-categorized wins ties.
                    if category.specificity() > self.entries[idx].category.specificity() {
                        self.entries[idx].category = category;
                    }
                }
                None => {
                    self.by_key.insert(key, self.entries.len());
                    self.entries.push(SkillEntry {
                        name: (*name).to_string(),
                        category,
                    });
                }
            }
        }
    }

    fn alias(&mut self, surface: &str, canonical: &str) {
        self.aliases.push((surface.to_string(), canonical.to_string()));
    }

    fn build(self) -> Taxonomy {
        let mut patterns: Vec<String> = Vec::new();
        let mut pattern_entry: Vec<usize> = Vec::new();

        for (idx, entry) in self.entries.iter().enumerate() {
            patterns.push(entry.name.clone());
            pattern_entry.push(idx);
        }
        for (surface, canonical) in &self.aliases {
            if let Some(&idx) = self.by_key.get(&canonical_key(canonical)) {
                patterns.push(surface.clone());
                pattern_entry.push(idx);
            }
        }

        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(aho_corasick::MatchKind::LeftmostLongest)
            .build(&patterns)
            .expect("static taxonomy patterns must compile");

        Taxonomy {
            entries: self.entries,
            patterns,
            pattern_entry,
            matcher,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_key() {
        assert_eq!(canonical_key("  Node.js "), "node.js");
        assert_eq!(canonical_key("Machine   Learning,"), "machine learning");
        assert_eq!(canonical_key("PYTHON"), "python");
    }

    #[test]
    fn test_whole_word_matching() {
        let taxonomy = Taxonomy::builtin();
        let mentions = taxonomy.find_mentions("I write Java and JavaScript; Rustaceans rust.");

        let names: Vec<&str> = mentions.iter().map(|m| m.entry.name.as_str()).collect();
        assert!(names.contains(&"Java"));
        assert!(names.contains(&"JavaScript"));
        // "Rustaceans" must not hit Rust; the standalone "rust" must.
        assert_eq!(names.iter().filter(|n| **n == "Rust").count(), 1);
    }

    #[test]
    fn test_alias_resolution() {
        let taxonomy = Taxonomy::builtin();
        let mentions = taxonomy.find_mentions("Deployed on k8s with postgres.");

        let names: Vec<&str> = mentions.iter().map(|m| m.entry.name.as_str()).collect();
        assert!(names.contains(&"Kubernetes"));
        assert!(names.contains(&"PostgreSQL"));
    }

    #[test]
    fn test_category_tiebreak_prefers_specific() {
        let taxonomy = Taxonomy::builtin();
        // AWS is listed under tools and cloud platforms; cloud wins.
        let entry = taxonomy.lookup("AWS").unwrap();
        assert_eq!(entry.category, SkillCategory::CloudPlatform);
        // Agile is a methodology before it is a soft skill.
        let entry = taxonomy.lookup("Agile").unwrap();
        assert_eq!(entry.category, SkillCategory::Methodology);
    }

    #[test]
    fn test_case_insensitive() {
        let taxonomy = Taxonomy::builtin();
        let mentions = taxonomy.find_mentions("PYTHON and python and Python");
        assert_eq!(
            mentions.iter().filter(|m| m.entry.name == "Python").count(),
            3
        );
    }

    #[test]
    fn test_cpp_and_csharp() {
        let taxonomy = Taxonomy::builtin();
        let mentions = taxonomy.find_mentions("Fluent in C++ and C#.");
        let names: Vec<&str> = mentions.iter().map(|m| m.entry.name.as_str()).collect();
        assert!(names.contains(&"C++"));
        assert!(names.contains(&"C#"));
    }
}
