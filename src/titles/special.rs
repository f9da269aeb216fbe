//! Specialized title generators for incomplete-code and security findings.
//!
//! These bypass the comment-marker title pipeline entirely: the finding's
//! type tag picks a base phrase from a fixed table, and the best available
//! context (identifier, location, component, extracted subject) is appended.

use crate::core::{IncompleteCodeFinding, IncompleteKind, SecurityFinding, VulnerabilityKind};
use crate::titles::subject::extract_subject;

static INCOMPLETE_TITLES: &[(IncompleteKind, &str)] = &[
    (IncompleteKind::EmptyFunction, "Implement empty function"),
    (IncompleteKind::EmptyMethod, "Implement empty method"),
    (IncompleteKind::EmptyClass, "Implement empty class"),
    (IncompleteKind::EmptyBlock, "Complete empty code block"),
    (IncompleteKind::Placeholder, "Replace placeholder implementation"),
    (IncompleteKind::Stub, "Complete stub implementation"),
    (IncompleteKind::NotImplemented, "Implement missing functionality"),
    (
        IncompleteKind::ThrowNotImplemented,
        "Replace NotImplemented exception",
    ),
    (
        IncompleteKind::PassStatement,
        "Replace pass statement with implementation",
    ),
    (
        IncompleteKind::EmptyCatch,
        "Handle exception in empty catch block",
    ),
    (
        IncompleteKind::EmptyFinally,
        "Add cleanup code to finally block",
    ),
    (IncompleteKind::EmptyConstructor, "Initialize constructor"),
    (IncompleteKind::EmptyDestructor, "Implement destructor cleanup"),
    (
        IncompleteKind::PartialImplementation,
        "Complete partial implementation",
    ),
    (
        IncompleteKind::MockImplementation,
        "Replace mock with real implementation",
    ),
];

static SECURITY_TITLES: &[(VulnerabilityKind, &str)] = &[
    (VulnerabilityKind::SqlInjection, "Fix SQL injection vulnerability"),
    (
        VulnerabilityKind::Xss,
        "Fix XSS (Cross-Site Scripting) vulnerability",
    ),
    (VulnerabilityKind::Csrf, "Add CSRF protection"),
    (
        VulnerabilityKind::InsecureRandom,
        "Replace insecure random number generation",
    ),
    (
        VulnerabilityKind::HardcodedSecret,
        "Remove hardcoded secret/credential",
    ),
    (VulnerabilityKind::HardcodedPassword, "Remove hardcoded password"),
    (
        VulnerabilityKind::WeakCrypto,
        "Replace weak cryptographic algorithm",
    ),
    (
        VulnerabilityKind::NoEncryption,
        "Add encryption for sensitive data",
    ),
    (
        VulnerabilityKind::PathTraversal,
        "Fix path traversal vulnerability",
    ),
    (
        VulnerabilityKind::CommandInjection,
        "Fix command injection vulnerability",
    ),
    (
        VulnerabilityKind::LdapInjection,
        "Fix LDAP injection vulnerability",
    ),
    (
        VulnerabilityKind::Xxe,
        "Fix XML External Entity (XXE) vulnerability",
    ),
    (
        VulnerabilityKind::InsecureDeserialization,
        "Fix insecure deserialization",
    ),
    (
        VulnerabilityKind::MissingAuthentication,
        "Add authentication check",
    ),
    (
        VulnerabilityKind::MissingAuthorization,
        "Add authorization check",
    ),
    (
        VulnerabilityKind::WeakPasswordRequirements,
        "Strengthen password requirements",
    ),
    (VulnerabilityKind::InsecureCookie, "Secure cookie configuration"),
    (VulnerabilityKind::MissingHttps, "Enforce HTTPS/TLS"),
    (
        VulnerabilityKind::ExposedSensitiveData,
        "Protect exposed sensitive data",
    ),
    (VulnerabilityKind::UnsafeEval, "Remove unsafe eval() usage"),
    (VulnerabilityKind::UnsafeRegex, "Fix ReDoS vulnerable regex"),
    (
        VulnerabilityKind::RaceCondition,
        "Fix race condition vulnerability",
    ),
    (VulnerabilityKind::BufferOverflow, "Fix buffer overflow risk"),
    (
        VulnerabilityKind::IntegerOverflow,
        "Fix integer overflow vulnerability",
    ),
    (VulnerabilityKind::UnvalidatedInput, "Add input validation"),
    (VulnerabilityKind::UnsanitizedOutput, "Sanitize output data"),
    (
        VulnerabilityKind::SensitiveDataInUrl,
        "Remove sensitive data from URL",
    ),
    (
        VulnerabilityKind::SensitiveDataInLogs,
        "Remove sensitive data from logs",
    ),
    (VulnerabilityKind::MissingRateLimiting, "Add rate limiting"),
    (
        VulnerabilityKind::InsecureFileUpload,
        "Secure file upload handling",
    ),
    (VulnerabilityKind::DirectoryListing, "Disable directory listing"),
    (
        VulnerabilityKind::InformationDisclosure,
        "Prevent information disclosure",
    ),
    (
        VulnerabilityKind::MissingSecurityHeaders,
        "Add security headers",
    ),
    (
        VulnerabilityKind::OutdatedDependency,
        "Update vulnerable dependency",
    ),
];

const MAX_SECURITY_SUBJECT_LENGTH: usize = 30;

fn incomplete_base_title(kind: &IncompleteKind) -> String {
    INCOMPLETE_TITLES
        .iter()
        .find(|(k, _)| k == kind)
        .map(|(_, title)| (*title).to_string())
        .unwrap_or_else(|| format!("Complete {}", kind.humanized()))
}

fn security_base_title(kind: &VulnerabilityKind) -> String {
    SECURITY_TITLES
        .iter()
        .find(|(k, _)| k == kind)
        .map(|(_, title)| (*title).to_string())
        .unwrap_or_else(|| format!("Fix {}", kind.humanized()))
}

/// Title for an incomplete-code finding: base phrase from the type tag,
/// then the identifier name, else a subject extracted from the description.
pub fn generate_incomplete_code_title(finding: &IncompleteCodeFinding) -> String {
    let base = incomplete_base_title(&finding.kind);

    if let Some(name) = &finding.name {
        return format!("{base}: {name}");
    }

    if let Some(description) = &finding.description {
        let subject = extract_subject(description);
        if !subject.is_empty() && subject != *description {
            return format!("{base} for {subject}");
        }
    }

    base
}

/// Title for a security finding. Suffix preference order: explicit
/// location, affected component, then a short extracted subject.
pub fn generate_security_title(finding: &SecurityFinding) -> String {
    let base = security_base_title(&finding.kind);

    if let Some(location) = &finding.location {
        return format!("{base} in {location}");
    }

    if let Some(component) = &finding.affected_component {
        return format!("{base}: {component}");
    }

    if !finding.description.is_empty() {
        let subject = extract_subject(&finding.description);
        if !subject.is_empty() && subject.chars().count() < MAX_SECURITY_SUBJECT_LENGTH {
            return format!("{base} - {subject}");
        }
    }

    base
}
