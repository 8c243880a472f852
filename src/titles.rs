//! Short titles for ETSI deliverables
//!
//! Well-known documents have a curated short title. Everything else gets its
//! catalog title cleaned up by [`normalize_title`].

/// Curated short titles, keyed by document identifier
pub const SHORT_TITLES: &[(&str, &str)] = &[
    ("EG 202 103", "Guide for the use of the second edition of TTCN"),
    ("ES 201 873-1", "Core Language"),
    ("ES 201 873-3", "Graphical presentation Format (GFT)"),
    ("ES 201 873-4", "Operational Semantics"),
    ("ES 201 873-5", "Runtime Interface (TRI)"),
    ("ES 201 873-6", "Control Interface (TCI)"),
    ("ES 201 873-10", "Documentation Comment Specification"),
    ("ES 201 873-7", "Using ASN.1"),
    ("ES 201 873-8", "Using IDL"),
    ("ES 201 873-9", "Using XML schema"),
    ("ES 201 873-11", "Using JSON"),
    // Language extension packages
    ("ES 202 781", "Configuration and Deployment Support"),
    ("ES 202 782", "Performance and Real Time Testing"),
    ("ES 202 784", "Advanced Parameterization"),
    ("ES 202 785", "Behaviour Types"),
    ("ES 202 786", "Support of interfaces with continuous signals"),
    ("ES 202 789", "Extended TRI"),
    ("ES 203 022", "Advanced Matching"),
    ("ES 203 790", "Object-Oriented Features"),
    // Conformance test suites
    (
        "TS 102 950-1",
        "Conformance Tests: Core Language: Implementation Conformance Statement (ICS)",
    ),
    (
        "TS 102 950-2",
        "Conformance Tests: Core Language: Test Suite Structure and Test Purposes (TSS&TP)",
    ),
    (
        "TS 102 950-3",
        "Conformance Tests: Core Language: Abstract Test Suite (ATS) and Implementation eXtra Information for Testing (IXIT)",
    ),
    (
        "TS 103 253",
        "Conformance Tests: XML and JSON schema; Implementation Conformance Statement (ICS)",
    ),
    (
        "TS 103 254",
        "Conformance Tests: XML and JSON schema; Test Suite Structure and Test Purposes (TSS&TP)",
    ),
    (
        "TS 103 255",
        "Conformance Tests: XML and JSON schema; Abstract Test Suite & IXIT",
    ),
    (
        "TS 103 663-1",
        "Conformance Tests: Object-Oriented Features;  Implementation Conformance Statement (ICS)",
    ),
    (
        "TS 103 663-2",
        "Conformance Tests: Object-Oriented Features;  Test Suite Structure and Test Purposes (TSS&TP)",
    ),
    (
        "TS 103 663-3",
        "Conformance Tests: Object-Oriented Features;  Abstract Test Suite (ATS) and Implementation eXtra Information for Testing (IXIT)",
    ),
    // Guides, reports and mappings
    ("ES 203 119-6", "TDL: Mapping to TTCN-3"),
    ("ETR 141 ed.1", "TTCN style guide"),
    ("TR 101 101", "TTCN interim version including ASN.1 1994 support"),
    (
        "TR 101 114",
        "Analysis of the use of ASN.1 94 with TTCN and SDL in ETSI deliverables",
    ),
    ("TR 101 666", "TTCN (Ed. 2++)"),
    ("TR 101 680", "A harmonized integration of ASN.1, TTCN and SDL"),
    ("TR 101 873-3", "Graphical presentation Format (GFT)"),
    ("TR 101 874", "TTCN-2 to TTCN-3 Mapping"),
    ("TR 102 043", "Concepts and definition of the TRI"),
    ("TR 102 560", "URI name space for TTCN-3"),
    ("TR 102 976", "Mobile Reference tests for TTCN-3 tools"),
    ("TS 101 875", "Library of Additional Predefined Functions"),
    ("TS 102 219", "IDL to TTCN-3 Mapping"),
    ("TS 102 351", "IPv6 Test Specification Toolkit"),
    ("TS 102 995", "Proforma for TTCN-3 reference test suite"),
];

/// Replacements applied by [`normalize_title`], in order.
///
/// The phrase rewrites to "TTCN-3" must precede the "TTCN-3;" removal, and all of
/// them must precede the single leading "TTCN-3" removal done afterwards.
const TITLE_REPLACEMENTS: &[(&str, &str)] = &[
    ("Methods for Testing and Specification (MTS);", ""),
    ("Tree and Tabular Combined Notation version 3", "TTCN-3"),
    ("Testing and Test Control Notation version 3", "TTCN-3"),
    ("The ", ""),
    ("TTCN-3;", ""),
    ("Part 1:", ""),
    ("Part 2:", ""),
    ("Part 3:", ""),
    ("Part 4:", ""),
    ("Part 5:", ""),
    ("Part 6:", ""),
    ("Part 7:", ""),
    ("Part 8:", ""),
    ("Part 9:", ""),
    ("Part 10:", ""),
    ("Part 11:", ""),
    ("Part 12:", ""),
    ("Part 13:", ""),
];

/// Curated short title for a document identifier
pub fn known_short_title(doc_id: &str) -> Option<&'static str> {
    SHORT_TITLES
        .iter()
        .find(|(id, _)| *id == doc_id)
        .map(|(_, title)| *title)
}

/// Strip series boilerplate from a catalog title
///
/// # Examples
///
/// ```
/// use etsi_deliverables::titles::normalize_title;
///
/// let raw = "Methods for Testing and Specification (MTS); The Testing and Test Control \
///            Notation version 3; Part 9: Using XML schema";
/// assert_eq!(normalize_title(raw), "Using XML schema");
/// ```
pub fn normalize_title(raw: &str) -> String {
    let mut title = raw.to_string();
    for (pattern, replacement) in TITLE_REPLACEMENTS {
        title = title.replace(pattern, replacement);
    }
    title.replacen("TTCN-3", "", 1).trim().to_string()
}

/// Short title for a record: the curated one if known, else the normalized catalog title
pub fn short_title(doc_id: &str, raw_title: &str) -> String {
    match known_short_title(doc_id) {
        Some(title) => title.to_string(),
        None => normalize_title(raw_title),
    }
}
