// All fixed instruction text emitted into enhanced prompts.
// Changing any of these strings changes every determinism hash.

/// Canonical section headers, in output order.
pub const SECTION_HEADERS: [&str; 8] = [
    "### ROLE",
    "### TASK",
    "### CONTEXT",
    "### CONSTRAINTS",
    "### VERIFICATION RULES",
    "### OUTPUT FORMAT",
    "### SEMANTIC INTEGRITY RULE",
    "### QUALITY BAR",
];

/// Anti-fabrication guards injected into every prompt.
pub const GLOBAL_GUARDS: &[&str] = &[
    "Do not fabricate facts, data, sources, APIs, citations, or functionality.",
    "If required information is missing or unknown, explicitly state that it is unknown.",
    "Do not assume unstated user preferences, constraints, or context.",
    "Do not infer intent beyond what is explicitly requested.",
];

pub const BASE_VERIFICATION_RULES: &[&str] = &[
    "Treat missing information as unknown.",
    "Prefer conservative, factual responses over speculative or creative ones.",
    "Clearly state uncertainty when certainty is not possible.",
    "Never guess to fill gaps in information.",
];

pub const HIGH_RISK_VERIFICATION_RULES: &[&str] = &[
    "Do not provide estimates unless explicitly requested.",
    "Avoid absolute claims unless directly supported by provided information.",
    "If factual accuracy cannot be ensured, say so explicitly.",
];

pub const AMBIGUITY_VERIFICATION_RULES: &[&str] = &[
    "If required details are missing, respond using general best practices.",
    "Explicitly state any assumptions made.",
];

pub const DEFAULT_OUTPUT_FORMAT: &str =
    "Provide a clear, well-organized response using appropriate structure.";

pub const SEMANTIC_INTEGRITY_RULE: &str = "The response must satisfy the original user request \
    exactly, without adding, removing, or expanding scope.";

pub const NO_EXTRA_CONTEXT: &str = "No additional context was provided beyond the user prompt.";

// ────────────────────────────────────────────────────────────────────────────
// Constraints
// ────────────────────────────────────────────────────────────────────────────

pub const UNIVERSAL_CONSTRAINTS: &[&str] = &[
    "Preserve the original user intent exactly.",
    "Do not add new requirements, features, or scope.",
];

/// Language directive. Replace `{language}` before use.
pub const LANGUAGE_CONSTRAINT_TEMPLATE: &str = "Write the response in {language}.";

// ────────────────────────────────────────────────────────────────────────────
// Output format directives
// ────────────────────────────────────────────────────────────────────────────

pub const FORMAT_JSON: &str = "Return a valid JSON object as the entire response.";
pub const FORMAT_YAML: &str = "Return a valid YAML document as the entire response.";
pub const FORMAT_XML: &str = "Return a valid XML document as the entire response.";
pub const FORMAT_CSV: &str = "Return a valid CSV document as the entire response.";
pub const FORMAT_MARKDOWN: &str = "Respond in Markdown.";
pub const FORMAT_TABLE: &str = "Use a table for structured comparisons or structured data.";
pub const FORMAT_TIMELINE: &str = "Include a timeline as part of the response.";
pub const FORMAT_STEPS: &str = "Provide the response as step-by-step instructions.";
pub const FORMAT_OUTLINE: &str =
    "Provide the response as a clear outline with headings and subpoints.";
pub const FORMAT_LIST: &str = "Use bullet points or numbered lists where appropriate.";
pub const FORMAT_CONVERSION: &str = "Provide the transformed output requested in TASK.";
pub const FORMAT_AS_REQUESTED: &str = "Provide the response in the format explicitly requested \
    in TASK. If no explicit format is requested, use a clear structure.";

// ────────────────────────────────────────────────────────────────────────────
// Quality bar
// ────────────────────────────────────────────────────────────────────────────

pub const UNIVERSAL_QUALITY_BAR: &[&str] = &[
    "Fully addresses the user request in TASK.",
    "Does not add, remove, or expand scope beyond the original request.",
    "Treats missing information as unknown and states uncertainty clearly when needed.",
    "Is clear, well-organized, and internally consistent.",
];

pub const CODE_QUALITY_BAR: &str =
    "Uses correct, idiomatic code and avoids assuming unspecified dependencies or versions.";

pub const CITATION_QUALITY_BAR: &str =
    "Avoids unsupported factual claims and does not invent citations or sources.";

/// Renders lines as a newline-joined `- ` bullet block.
pub fn bullets<'a>(lines: impl IntoIterator<Item = &'a str>) -> String {
    lines
        .into_iter()
        .map(|line| format!("- {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
