// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! Static knowledge base and keyword scoring.
//!
//! The knowledge base is an ordered table of domains, each carrying a set of
//! keywords and a list of canned responses. Classification is plain substring
//! containment against the lower-cased prompt: one point per keyword, plus a
//! half point per matching priority keyword. The first domain to reach the
//! highest score wins, so table order is significant.
//!
//! # Examples
//!
//! ```
//! use reflekt::knowledge::{Domain, KnowledgeBase};
//!
//! let kb = KnowledgeBase::builtin();
//! let class = kb.classify("How do I optimize a recursive algorithm?");
//! assert_eq!(class.domain, Domain::Algorithms);
//! assert_eq!(class.score, 2.5);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Topical category used to select canned response content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    /// Algorithm design and optimization.
    Algorithms,
    /// System design and architecture.
    Systems,
    /// Machine learning.
    MachineLearning,
    /// Debugging and troubleshooting.
    Debugging,
    /// Web frontends, backends and APIs.
    WebDevelopment,
    /// Data structure selection.
    DataStructures,
    /// Application security.
    Security,
    /// Career advice.
    Career,
    /// General programming practice.
    Programming,
    /// Learning and study habits.
    Learning,
    /// Fallback when no domain keyword matched.
    General,
}

impl Domain {
    /// Canonical snake_case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Algorithms => "algorithms",
            Self::Systems => "systems",
            Self::MachineLearning => "machine_learning",
            Self::Debugging => "debugging",
            Self::WebDevelopment => "web_development",
            Self::DataStructures => "data_structures",
            Self::Security => "security",
            Self::Career => "career",
            Self::Programming => "programming",
            Self::Learning => "learning",
            Self::General => "general",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the knowledge base.
#[derive(Debug, Clone, Copy)]
pub struct DomainEntry {
    /// The domain this row describes.
    pub domain: Domain,
    /// Keywords matched as substrings of the lower-cased prompt.
    pub keywords: &'static [&'static str],
    /// Canned responses, one drawn uniformly at random on a match.
    pub responses: &'static [&'static str],
}

/// Boost keywords for one domain.
#[derive(Debug, Clone, Copy)]
pub struct PriorityEntry {
    /// Domain receiving the boost.
    pub domain: Domain,
    /// Keywords worth an extra half point each.
    pub keywords: &'static [&'static str],
}

/// Boost applied per matching priority keyword.
pub const PRIORITY_BOOST: f64 = 0.5;

/// Result of classifying a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Classification {
    /// Winning domain, `General` when nothing matched.
    pub domain: Domain,
    /// Score of the winning domain (0.0 for `General`).
    pub score: f64,
}

impl Classification {
    /// Whether any domain keyword matched.
    #[inline]
    pub fn is_matched(&self) -> bool {
        self.score > 0.0
    }
}

/// Ordered, immutable domain table plus its priority keyword table.
#[derive(Debug, Clone, Copy)]
pub struct KnowledgeBase {
    entries: &'static [DomainEntry],
    priorities: &'static [PriorityEntry],
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::builtin()
    }
}

impl KnowledgeBase {
    /// Build a knowledge base from custom tables.
    pub const fn new(
        entries: &'static [DomainEntry],
        priorities: &'static [PriorityEntry],
    ) -> Self {
        Self {
            entries,
            priorities,
        }
    }

    /// The built-in ten-domain knowledge base.
    pub const fn builtin() -> Self {
        Self::new(BUILTIN_ENTRIES, BUILTIN_PRIORITIES)
    }

    /// Domain rows in canonical order.
    #[inline]
    pub fn entries(&self) -> &'static [DomainEntry] {
        self.entries
    }

    /// Look up a domain row.
    pub fn get(&self, domain: Domain) -> Option<&'static DomainEntry> {
        self.entries.iter().find(|e| e.domain == domain)
    }

    /// Priority keywords for a domain (empty when the domain has none).
    pub fn priority_keywords(&self, domain: Domain) -> &'static [&'static str] {
        self.priorities
            .iter()
            .find(|p| p.domain == domain)
            .map(|p| p.keywords)
            .unwrap_or(&[])
    }

    /// Score a single domain row against an already lower-cased prompt.
    pub fn score(&self, entry: &DomainEntry, prompt_lower: &str) -> f64 {
        let matches = entry
            .keywords
            .iter()
            .filter(|k| prompt_lower.contains(*k))
            .count();

        let boosts = self
            .priority_keywords(entry.domain)
            .iter()
            .filter(|k| prompt_lower.contains(*k))
            .count();

        matches as f64 + boosts as f64 * PRIORITY_BOOST
    }

    /// Classify a prompt into a domain.
    ///
    /// Ties keep the earlier domain; a best score of zero yields `General`.
    pub fn classify(&self, prompt: &str) -> Classification {
        let prompt_lower = prompt.to_lowercase();
        let mut best = Classification {
            domain: Domain::General,
            score: 0.0,
        };

        for entry in self.entries {
            let score = self.score(entry, &prompt_lower);
            if score > best.score {
                best = Classification {
                    domain: entry.domain,
                    score,
                };
            }
        }

        best
    }
}

const BUILTIN_ENTRIES: &[DomainEntry] = &[
    DomainEntry {
        domain: Domain::Algorithms,
        keywords: &[
            "recursive",
            "sorting",
            "complexity",
            "optimization",
            "algorithm",
            "binary search",
            "dynamic programming",
        ],
        responses: &[
            "For recursive algorithms, implement memoization to cache results and avoid redundant calculations. Consider the base case carefully and ensure stack overflow protection for deep recursions.",
            "When optimizing sorting algorithms, consider the input characteristics: quicksort for general cases, mergesort for stability, radix sort for integers, and heapsort for guaranteed O(n log n).",
            "Dynamic programming works best when you have overlapping subproblems and optimal substructure. Break the problem into smaller subproblems and build up the solution.",
            "Profile your algorithm with realistic data sizes. Use Big O analysis but also measure real performance. Consider space-time tradeoffs and the specific constraints of your use case.",
        ],
    },
    DomainEntry {
        domain: Domain::Systems,
        keywords: &[
            "scalable",
            "architecture",
            "concurrent",
            "distributed",
            "system design",
            "microservices",
            "database",
        ],
        responses: &[
            "Design for horizontal scalability from the start. Use load balancers, implement caching layers (Redis/Memcached), and consider database sharding strategies.",
            "In distributed systems, understand CAP theorem trade-offs. Choose between consistency and availability based on your use case. Implement proper circuit breakers and retry mechanisms.",
            "For concurrent systems, use thread-safe data structures, minimize shared state, and consider message-passing over shared memory. Always handle race conditions and deadlocks.",
            "Monitor system health with comprehensive metrics (latency, throughput, error rates). Implement distributed tracing and establish clear SLA targets.",
        ],
    },
    DomainEntry {
        domain: Domain::MachineLearning,
        keywords: &[
            "machine learning",
            "ml",
            "overfitting",
            "model",
            "training",
            "data",
            "neural network",
            "gradient descent",
            "learn machine learning",
            "ai",
            "artificial intelligence",
            "classification",
            "regression",
            "clustering",
            "supervised",
            "unsupervised",
            "dataset",
            "features",
            "algorithms",
            "unbalanced",
            "imbalanced",
            "bias",
            "variance",
            "cross-validation",
            "hyperparameters",
            "deep learning",
            "preprocessing",
        ],
        responses: &[
            "For unbalanced classification problems, use techniques like SMOTE for oversampling, undersampling majority class, or cost-sensitive learning. Evaluate with precision, recall, F1-score, and AUC-ROC rather than just accuracy.",
            "Prevent overfitting through regularization (L1/L2), dropout, early stopping, and cross-validation. Use more training data when possible and consider ensemble methods to reduce variance.",
            "Start with simple algorithms (logistic regression, decision trees) before complex ones. Focus on feature engineering and data quality - clean, relevant features often matter more than complex models.",
            "For classification problems, understand your evaluation metrics: accuracy for balanced datasets, precision/recall for imbalanced ones, and AUC-ROC for ranking problems. Always use proper train/validation/test splits.",
        ],
    },
    DomainEntry {
        domain: Domain::Debugging,
        keywords: &[
            "debug",
            "debugging",
            "error",
            "bug",
            "crash",
            "exception",
            "troubleshoot",
        ],
        responses: &[
            "Use systematic debugging: reproduce the issue consistently, check logs and error messages, use debugger breakpoints, and isolate the problem to the smallest failing case.",
            "For production debugging, implement comprehensive logging with different levels (DEBUG, INFO, WARN, ERROR). Use distributed tracing in microservices to track request flows.",
            "Common debugging strategies: rubber duck debugging, binary search through code changes, checking recent modifications, and validating assumptions with assertions.",
            "Performance debugging requires profiling tools. Identify bottlenecks with CPU and memory profilers, database query analyzers, and network monitoring tools.",
        ],
    },
    DomainEntry {
        domain: Domain::WebDevelopment,
        keywords: &[
            "web",
            "frontend",
            "backend",
            "api",
            "javascript",
            "react",
            "node",
            "performance",
        ],
        responses: &[
            "For frontend performance, optimize bundle sizes with code splitting, lazy loading, and tree shaking. Minimize DOM manipulations and use virtual DOM efficiently.",
            "API design should follow RESTful principles or GraphQL best practices. Implement proper error handling, rate limiting, and authentication/authorization.",
            "Backend optimization involves database query optimization, caching strategies, connection pooling, and efficient data serialization (JSON vs Protocol Buffers).",
            "Modern web apps need responsive design, accessibility (WCAG guidelines), progressive enhancement, and cross-browser compatibility testing.",
        ],
    },
    DomainEntry {
        domain: Domain::DataStructures,
        keywords: &[
            "data structure",
            "array",
            "linked list",
            "tree",
            "graph",
            "hash table",
            "queue",
            "stack",
        ],
        responses: &[
            "Choose data structures based on operations: arrays for random access, linked lists for frequent insertions/deletions, hash tables for O(1) lookups.",
            "For tree structures, consider balance: use AVL or Red-Black trees for guaranteed O(log n) operations, or B-trees for disk-based storage systems.",
            "Graph algorithms require careful choice of representation: adjacency lists for sparse graphs, adjacency matrices for dense graphs. Consider directed vs undirected.",
            "Advanced structures like segment trees, tries, and disjoint sets solve specific problems efficiently. Understand the problem pattern before choosing.",
        ],
    },
    DomainEntry {
        domain: Domain::Security,
        keywords: &[
            "security",
            "authentication",
            "encryption",
            "vulnerability",
            "attack",
            "secure",
        ],
        responses: &[
            "Implement defense in depth: input validation, output encoding, authentication, authorization, encryption in transit and at rest, and security monitoring.",
            "For web security, protect against OWASP Top 10: SQL injection, XSS, CSRF, insecure direct object references, and security misconfigurations.",
            "Use established cryptographic libraries, never roll your own crypto. Implement proper key management, use strong random number generators, and keep dependencies updated.",
            "Security testing should include static analysis, dynamic testing, dependency scanning, and penetration testing. Regular security audits are essential.",
        ],
    },
    DomainEntry {
        domain: Domain::Career,
        keywords: &[
            "career",
            "job",
            "interview",
            "internship",
            "resume",
            "portfolio",
            "networking",
        ],
        responses: &[
            "Build a strong portfolio with 3-5 diverse projects showcasing different skills. Include clean code, documentation, and deployed demos when possible.",
            "For technical interviews, practice coding problems daily, understand system design basics, and prepare behavioral stories using the STAR method.",
            "Network actively through tech meetups, LinkedIn, GitHub contributions, and informational interviews. Quality connections matter more than quantity.",
            "Tailor your resume for each application, highlighting relevant projects and skills. Keep it concise, quantify achievements, and proofread carefully.",
        ],
    },
    DomainEntry {
        domain: Domain::Programming,
        keywords: &[
            "programming",
            "coding",
            "software development",
            "best practices",
            "clean code",
        ],
        responses: &[
            "Write clean, readable code with meaningful variable names, consistent formatting, and clear comments. Follow SOLID principles and design patterns.",
            "Practice version control with Git, write comprehensive tests, and use continuous integration. Code review and pair programming improve quality.",
            "Learn multiple programming paradigms: object-oriented, functional, and procedural. Master one language deeply before learning others.",
            "Focus on problem-solving skills over syntax memorization. Break complex problems into smaller pieces and test iteratively.",
        ],
    },
    DomainEntry {
        domain: Domain::Learning,
        keywords: &[
            "learn",
            "study",
            "education",
            "skills",
            "improvement",
            "development",
        ],
        responses: &[
            "Use active learning: build projects, teach others, and practice spaced repetition. Theory + hands-on practice is most effective.",
            "Set specific, measurable goals with deadlines. Track progress and adjust methods based on what works for your learning style.",
            "Join communities, find mentors, and engage with peers. Learning is social - discussion and collaboration accelerate understanding.",
            "Focus on fundamentals first, then specialize. Solid foundations in math, CS theory, and problem-solving transfer across domains.",
        ],
    },
];

const BUILTIN_PRIORITIES: &[PriorityEntry] = &[
    PriorityEntry {
        domain: Domain::Debugging,
        keywords: &["debug", "debugging", "troubleshoot", "error", "bug"],
    },
    PriorityEntry {
        domain: Domain::MachineLearning,
        keywords: &["learn machine learning", "ml", "ai", "artificial intelligence"],
    },
    PriorityEntry {
        domain: Domain::Systems,
        keywords: &["design", "architecture", "scalable", "distributed"],
    },
    PriorityEntry {
        domain: Domain::Algorithms,
        keywords: &["algorithm", "complexity", "sorting", "optimization"],
    },
    PriorityEntry {
        domain: Domain::WebDevelopment,
        keywords: &["web", "frontend", "backend", "api"],
    },
    PriorityEntry {
        domain: Domain::Security,
        keywords: &["security", "authentication", "encryption"],
    },
    PriorityEntry {
        domain: Domain::Career,
        keywords: &["career", "job", "interview", "internship"],
    },
    PriorityEntry {
        domain: Domain::Programming,
        keywords: &["programming", "coding", "software development"],
    },
    PriorityEntry {
        domain: Domain::Learning,
        keywords: &["learn", "study", "education", "skills"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_domain_has_keywords_and_responses() {
        let kb = KnowledgeBase::builtin();
        assert_eq!(kb.entries().len(), 10);
        for entry in kb.entries() {
            assert!(!entry.keywords.is_empty(), "{} has no keywords", entry.domain);
            assert!(!entry.responses.is_empty(), "{} has no responses", entry.domain);
        }
    }

    #[test]
    fn test_priority_domains_exist_in_table() {
        let kb = KnowledgeBase::builtin();
        for p in BUILTIN_PRIORITIES {
            assert!(kb.get(p.domain).is_some(), "{} missing", p.domain);
        }
    }

    #[test]
    fn test_missing_priority_is_no_op() {
        let kb = KnowledgeBase::builtin();
        assert!(kb.priority_keywords(Domain::DataStructures).is_empty());

        let entry = kb.get(Domain::DataStructures).unwrap();
        assert_eq!(kb.score(entry, "linked list or hash table"), 2.0);
    }

    #[test]
    fn test_classify_recursive_algorithm() {
        let class = KnowledgeBase::builtin().classify("How do I optimize a recursive algorithm?");
        assert_eq!(class.domain, Domain::Algorithms);
        // recursive + algorithm, plus the "algorithm" boost
        assert_eq!(class.score, 2.5);
        assert!(class.is_matched());
    }

    #[test]
    fn test_classify_empty_is_general() {
        let class = KnowledgeBase::builtin().classify("");
        assert_eq!(class.domain, Domain::General);
        assert_eq!(class.score, 0.0);
        assert!(!class.is_matched());
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        let class = KnowledgeBase::builtin().classify("ENCRYPTION at rest");
        assert_eq!(class.domain, Domain::Security);
    }

    #[test]
    fn test_tie_keeps_earlier_domain() {
        // sorting: 1 + 0.5 for algorithms, scalable: 1 + 0.5 for systems
        let kb = KnowledgeBase::builtin();
        assert_eq!(kb.classify("sorting scalable").domain, Domain::Algorithms);
        assert_eq!(kb.classify("scalable sorting").domain, Domain::Algorithms);
    }

    #[test]
    fn test_substring_containment_not_tokens() {
        // "bug" inside "debugger" still counts for debugging
        let kb = KnowledgeBase::builtin();
        let entry = kb.get(Domain::Debugging).unwrap();
        assert!(kb.score(entry, "the debugger") >= 2.0);
    }

    #[test]
    fn test_domain_names() {
        assert_eq!(Domain::MachineLearning.as_str(), "machine_learning");
        assert_eq!(Domain::General.to_string(), "general");
        assert_eq!(
            serde_json::to_string(&Domain::WebDevelopment).unwrap(),
            "\"web_development\""
        );
    }
}
