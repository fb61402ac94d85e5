// Copyright (C) 2026 Backline Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use backline_domain::{Candidate, CandidateStatus};

/// A filter over the candidate list.
///
/// Free-text search is a case-insensitive substring match over name,
/// email, and position; status and department are exact matches. All
/// criteria are ANDed; an empty filter matches everything.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CandidateFilter {
    /// Free-text search term.
    pub search: Option<String>,
    /// Exact status match.
    pub status: Option<CandidateStatus>,
    /// Exact department match.
    pub department: Option<String>,
}

impl CandidateFilter {
    /// Creates an empty filter that matches every candidate.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            search: None,
            status: None,
            department: None,
        }
    }

    /// Whether a candidate passes this filter.
    #[must_use]
    pub fn matches(&self, candidate: &Candidate) -> bool {
        if let Some(term) = &self.search {
            let term: String = term.to_lowercase();
            let hit: bool = candidate.name.to_lowercase().contains(&term)
                || candidate.email.to_lowercase().contains(&term)
                || candidate.position.to_lowercase().contains(&term);
            if !hit {
                return false;
            }
        }

        if let Some(status) = self.status
            && candidate.status != status
        {
            return false;
        }

        if let Some(department) = &self.department
            && &candidate.department != department
        {
            return false;
        }

        true
    }

    /// Applies this filter to a candidate list, preserving order.
    #[must_use]
    pub fn apply<'a>(&self, candidates: &'a [Candidate]) -> Vec<&'a Candidate> {
        candidates.iter().filter(|c| self.matches(c)).collect()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::CandidateFilter;
    use backline_domain::{Candidate, CandidateStatus, EntityId};

    fn candidate(name: &str, email: &str, position: &str, department: &str) -> Candidate {
        Candidate {
            id: EntityId::generate(),
            name: String::from(name),
            email: String::from(email),
            position: String::from(position),
            department: String::from(department),
            status: CandidateStatus::Applied,
            venue_id: None,
            applied_at: None,
        }
    }

    #[test]
    fn test_search_is_case_insensitive_over_name() {
        // "jane" matches "Jane Smith" and excludes "John Doe"
        let candidates = vec![
            candidate("Jane Smith", "jane@example.com", "Bartender", "Bar"),
            candidate("John Doe", "john@example.com", "Sound Tech", "Production"),
        ];

        let filter = CandidateFilter {
            search: Some(String::from("jane")),
            ..CandidateFilter::new()
        };

        let hits = filter.apply(&candidates);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Jane Smith");
    }

    #[test]
    fn test_search_also_covers_email_and_position() {
        let candidates = vec![
            candidate("Jane Smith", "jane@example.com", "Bartender", "Bar"),
            candidate("John Doe", "john@example.com", "Sound Tech", "Production"),
        ];

        let by_email = CandidateFilter {
            search: Some(String::from("JOHN@")),
            ..CandidateFilter::new()
        };
        assert_eq!(by_email.apply(&candidates).len(), 1);

        let by_position = CandidateFilter {
            search: Some(String::from("sound")),
            ..CandidateFilter::new()
        };
        assert_eq!(by_position.apply(&candidates)[0].name, "John Doe");
    }

    #[test]
    fn test_status_and_department_are_exact_matches() {
        let mut hired = candidate("Jane Smith", "jane@example.com", "Bartender", "Bar");
        hired.status = CandidateStatus::Hired;
        let candidates = vec![
            hired,
            candidate("John Doe", "john@example.com", "Sound Tech", "Production"),
        ];

        let filter = CandidateFilter {
            status: Some(CandidateStatus::Hired),
            department: Some(String::from("Bar")),
            ..CandidateFilter::new()
        };
        assert_eq!(filter.apply(&candidates).len(), 1);

        // Departments do not substring-match
        let partial = CandidateFilter {
            department: Some(String::from("Ba")),
            ..CandidateFilter::new()
        };
        assert!(partial.apply(&candidates).is_empty());
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let candidates = vec![
            candidate("Jane Smith", "jane@example.com", "Bartender", "Bar"),
            candidate("John Doe", "john@example.com", "Sound Tech", "Production"),
        ];
        assert_eq!(CandidateFilter::new().apply(&candidates).len(), 2);
    }
}
