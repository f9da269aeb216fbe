//! Ordered title-pattern table.
//!
//! The scan order is a contract: the first matching entry wins, and several
//! entries overlap (`fix` shadows `bug`, `update` shadows `upgrade`), so the
//! table must stay an explicit ordered list. Tests pin the order down.

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

pub(crate) struct TitlePattern {
    pub name: &'static str,
    pub matcher: Regex,
    pub prefix: &'static str,
}

const MAX_DETAIL_LENGTH: usize = 60;

fn pattern(name: &'static str, re: &str, prefix: &'static str) -> TitlePattern {
    TitlePattern {
        name,
        matcher: Regex::new(&format!("(?i){re}")).unwrap(),
        prefix,
    }
}

static TITLE_PATTERNS: Lazy<Vec<TitlePattern>> = Lazy::new(|| {
    vec![
        // Implementation
        pattern("implement", r"(?:implement|add|create|build|develop)\s+(.+)", "Implement "),
        pattern("feature", r"(?:feature|functionality):\s*(.+)", "Add feature: "),
        // Fixes and defects
        pattern("fix", r"(?:fix|repair|resolve|solve|correct)\s+(.+)", "Fix "),
        pattern("bug", r"(?:bug|issue|problem|error):\s*(.+)", "Fix bug: "),
        pattern("broken", r"(?:broken|not working|doesn't work|fails?)\s*(.+)", "Repair broken "),
        // Updates and refactoring
        pattern("update", r"(?:update|upgrade|migrate)\s+(.+)", "Update "),
        pattern("refactor", r"(?:refactor|restructure|reorganize|clean up?)\s+(.+)", "Refactor "),
        pattern("optimize", r"(?:optimize|improve|enhance|speed up)\s+(.+)", "Optimize "),
        // Security
        pattern(
            "security",
            r"(?:security|vulnerability|exploit|injection|xss|csrf)\s*(.+)",
            "Fix security issue: "
        ),
        pattern("validate", r"(?:validate|sanitize|escape)\s+(.+)", "Add validation for "),
        // Documentation
        pattern("document", r"(?:document|docs?|write docs?)\s+(?:for\s+)?(.+)", "Document "),
        pattern("comment", r"(?:add comments?|comment)\s+(?:to\s+)?(.+)", "Add comments to "),
        // Testing
        pattern("test", r"(?:test|write tests?|add tests?)\s+(?:for\s+)?(.+)", "Add tests for "),
        pattern("coverage", r"(?:coverage|cover)\s+(.+)", "Improve test coverage for "),
        // Configuration
        pattern("config", r"(?:configure|config|setup)\s+(.+)", "Configure "),
        pattern("env", r"(?:environment|env|settings?)\s+(.+)", "Setup environment for "),
        // API and integration
        pattern("api", r"(?:api|endpoint|route)\s+(.+)", "Implement API "),
        pattern("integrate", r"(?:integrate|connect|link)\s+(.+)", "Integrate "),
        // UI/UX
        pattern("ui", r"(?:ui|user interface|frontend)\s+(.+)", "Update UI: "),
        pattern("ux", r"(?:ux|user experience|usability)\s+(.+)", "Improve UX: "),
        pattern("style", r"(?:style|css|styling|design)\s+(.+)", "Fix styling: "),
        // Database
        pattern("database", r"(?:database|db|query|migration)\s+(.+)", "Update database "),
        pattern("schema", r"(?:schema|model|table)\s+(.+)", "Modify schema: "),
        // Performance
        pattern("performance", r"(?:performance|slow|latency|speed)\s+(.+)", "Improve performance: "),
        pattern("memory", r"(?:memory|leak|ram|heap)\s+(.+)", "Fix memory issue: "),
        // Dependencies
        pattern("dependency", r"(?:dependency|dependencies|package|library)\s+(.+)", "Update dependency: "),
        pattern("upgrade", r"(?:upgrade|update)\s+(.+)", "Upgrade "),
    ]
});

/// Scan the pattern table in order and render the first match.
pub(crate) fn apply_patterns(description: &str) -> Option<String> {
    TITLE_PATTERNS.iter().find_map(|pattern| {
        pattern.matcher.captures(description).map(|caps| {
            debug!("title pattern '{}' matched", pattern.name);
            let detail = caps
                .get(1)
                .map(|m| m.as_str().trim())
                .unwrap_or(description);
            format!("{}{}", pattern.prefix, truncate_detail(detail))
        })
    })
}

fn truncate_detail(detail: &str) -> String {
    if detail.chars().count() > MAX_DETAIL_LENGTH {
        let truncated: String = detail.chars().take(MAX_DETAIL_LENGTH).collect();
        format!("{truncated}...")
    } else {
        detail.to_string()
    }
}
