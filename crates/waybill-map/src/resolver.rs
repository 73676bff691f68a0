//! Candidate-list-driven column resolution.

use waybill_model::Table;

use crate::normalize::normalize;

/// Finds the table column best matching one of `candidates`, most-preferred
/// first. Returns the original header string, or `None` — never an error.
///
/// Two passes, in strict priority:
/// 1. exact match on normalized forms, iterating candidates in caller order;
/// 2. substring containment in either direction, iterating headers in table
///    order and candidates inside that loop.
///
/// The substring pass is header-then-candidate ordered, so a lower-priority
/// alias can win over a higher-priority one when several headers are
/// substring-ambiguous. Intentional: preserved from the reference behavior.
pub fn find_column(table: &Table, candidates: &[String]) -> Option<String> {
    let normalized_headers = normalized_header_map(table.headers());

    for candidate in candidates {
        let normalized = normalize(candidate);
        if let Some(original) = normalized_headers
            .iter()
            .find(|(header, _)| *header == normalized)
        {
            return Some(original.1.clone());
        }
    }

    for (header_norm, original) in &normalized_headers {
        for candidate in candidates {
            let normalized = normalize(candidate);
            if !normalized.is_empty()
                && (header_norm.contains(&normalized) || normalized.contains(header_norm.as_str()))
            {
                return Some(original.clone());
            }
        }
    }

    None
}

/// Normalized header → original header, preserving first-seen key order.
/// When two headers normalize identically the later column's original name
/// wins (last-write-wins); an accepted ambiguity, not an error.
fn normalized_header_map(headers: &[String]) -> Vec<(String, String)> {
    let mut map: Vec<(String, String)> = Vec::with_capacity(headers.len());
    for header in headers {
        let key = normalize(header);
        match map.iter_mut().find(|(existing, _)| *existing == key) {
            Some(entry) => entry.1 = header.clone(),
            None => map.push((key, header.clone())),
        }
    }
    map
}
