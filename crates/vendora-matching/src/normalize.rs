//! Query normalization: free text and UI categories to canonical service tags.

use std::collections::HashMap;

pub use vendora_core::normalize_text;
use vendora_core::ServiceTag;

/// What the requester is looking for, after alias resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceQuery {
    /// No service constraint.
    Any,
    Tag(ServiceTag),
    /// Normalized text that matched no alias; matched by containment against
    /// vendor service types and descriptions.
    Text(String),
}

impl ServiceQuery {
    /// Coarse pre-filter string for catalog backends.
    #[must_use]
    pub fn catalog_hint(&self) -> Option<String> {
        match self {
            ServiceQuery::Any => None,
            ServiceQuery::Tag(tag) => Some(tag.token().to_string()),
            ServiceQuery::Text(text) => Some(text.clone()),
        }
    }

    /// Relevance of a vendor to this query, or `None` when it does not match.
    ///
    /// Tag comparisons run on the normalized service type, so
    /// `wedding_photography` is compared as `wedding photography`.
    #[must_use]
    pub fn match_score(&self, service_type: &str, description: Option<&str>) -> Option<f64> {
        let tag = normalize_text(service_type);
        match self {
            ServiceQuery::Any => Some(0.5),
            ServiceQuery::Tag(t) => containment_score(&tag, t.token()),
            ServiceQuery::Text(text) => containment_score(&tag, text).or_else(|| {
                description
                    .map(normalize_text)
                    .filter(|d| d.contains(text.as_str()))
                    .map(|_| 0.3)
            }),
        }
    }
}

fn containment_score(tag: &str, needle: &str) -> Option<f64> {
    if needle.is_empty() || tag.is_empty() {
        return None;
    }
    if tag == needle {
        Some(1.0)
    } else if tag.starts_with(needle) {
        Some(0.9)
    } else if tag.contains(needle) {
        Some(0.8)
    } else if needle.contains(tag) {
        Some(0.6)
    } else {
        None
    }
}

/// Immutable alias lookup.
#[derive(Debug, Clone)]
pub struct AliasTable {
    exact: HashMap<String, ServiceTag>,
    /// Space-padded aliases, longest first, for whole-phrase containment.
    phrases: Vec<(String, ServiceTag)>,
    /// Tags ordered by token length, longest first, for stem matching.
    stems: Vec<ServiceTag>,
}

impl AliasTable {
    /// Build from `(alias, tag)` pairs. Aliases are normalized; the first
    /// definition of a duplicate alias wins.
    #[must_use]
    pub fn new(aliases: &[(String, ServiceTag)]) -> Self {
        let mut exact = HashMap::new();
        let mut phrases = Vec::new();
        for (alias, tag) in aliases {
            let alias = normalize_text(alias);
            if alias.is_empty() || exact.contains_key(&alias) {
                continue;
            }
            exact.insert(alias.clone(), *tag);
            phrases.push((format!(" {alias} "), *tag));
        }
        phrases.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

        let mut stems = ServiceTag::ALL.to_vec();
        stems.sort_by(|a, b| b.token().len().cmp(&a.token().len()));

        Self {
            exact,
            phrases,
            stems,
        }
    }

    /// Resolve already-normalized text to a tag.
    ///
    /// Tries, in order: exact alias, alias as a whole phrase inside the text
    /// (longest alias first), then any word starting with a tag's stem.
    #[must_use]
    pub fn resolve(&self, normalized: &str) -> Option<ServiceTag> {
        if normalized.is_empty() {
            return None;
        }
        if let Some(tag) = self.exact.get(normalized) {
            return Some(*tag);
        }

        let padded = format!(" {normalized} ");
        if let Some((_, tag)) = self.phrases.iter().find(|(p, _)| padded.contains(p.as_str())) {
            return Some(*tag);
        }

        normalized.split(' ').find_map(|word| {
            self.stems
                .iter()
                .copied()
                .find(|tag| word.starts_with(tag.token()))
        })
    }
}

/// Maps raw search input to a [`ServiceQuery`]. Deterministic and side-effect free.
#[derive(Debug, Clone)]
pub struct QueryNormalizer {
    aliases: AliasTable,
}

impl QueryNormalizer {
    #[must_use]
    pub fn new(aliases: AliasTable) -> Self {
        Self { aliases }
    }

    /// A UI category wins when it resolves to a tag; otherwise the free text
    /// is used, and an unresolved category only applies when there is no text.
    #[must_use]
    pub fn normalize(&self, query: Option<&str>, category: Option<&str>) -> ServiceQuery {
        let category = category.map(normalize_text).filter(|c| !c.is_empty());
        if let Some(c) = category.as_deref() {
            let resolved = self
                .aliases
                .resolve(c)
                .or_else(|| c.replace(' ', "_").parse::<ServiceTag>().ok());
            if let Some(tag) = resolved {
                return ServiceQuery::Tag(tag);
            }
        }

        match query.map(normalize_text).filter(|q| !q.is_empty()) {
            Some(text) => self
                .aliases
                .resolve(&text)
                .map_or(ServiceQuery::Text(text), ServiceQuery::Tag),
            None => category.map_or(ServiceQuery::Any, ServiceQuery::Text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vendora_core::MatchingConfig;

    fn normalizer() -> QueryNormalizer {
        QueryNormalizer::new(AliasTable::new(&MatchingConfig::default().aliases))
    }

    #[test]
    fn aliases_resolve_to_canonical_tags() {
        let n = normalizer();
        assert_eq!(n.normalize(Some("DJ"), None), ServiceQuery::Tag(ServiceTag::Dj));
        assert_eq!(
            n.normalize(Some("disc jockey"), None),
            ServiceQuery::Tag(ServiceTag::Dj)
        );
        assert_eq!(
            n.normalize(Some("Makeup Artist"), None),
            ServiceQuery::Tag(ServiceTag::Makeup)
        );
        assert_eq!(n.normalize(Some("MUA"), None), ServiceQuery::Tag(ServiceTag::Makeup));
        assert_eq!(
            n.normalize(Some("photographer"), None),
            ServiceQuery::Tag(ServiceTag::Photograph)
        );
        assert_eq!(
            n.normalize(Some("Photography"), None),
            ServiceQuery::Tag(ServiceTag::Photograph)
        );
    }

    #[test]
    fn stem_prefix_resolves_unlisted_inflections() {
        let n = normalizer();
        assert_eq!(
            n.normalize(Some("photographs"), None),
            ServiceQuery::Tag(ServiceTag::Photograph)
        );
        assert_eq!(
            n.normalize(Some("decorative lighting"), None),
            ServiceQuery::Tag(ServiceTag::Decor)
        );
    }

    #[test]
    fn alias_phrase_inside_longer_text_resolves() {
        let n = normalizer();
        assert_eq!(
            n.normalize(Some("best wedding photographer in indore"), None),
            ServiceQuery::Tag(ServiceTag::Photograph)
        );
        // Longest alias wins: "photographer" beats "food".
        assert_eq!(
            n.normalize(Some("food photographer"), None),
            ServiceQuery::Tag(ServiceTag::Photograph)
        );
        // Whole-phrase matches take priority over a stem hit on a place name.
        assert_eq!(
            n.normalize(Some("bandra photographer"), None),
            ServiceQuery::Tag(ServiceTag::Photograph)
        );
    }

    #[test]
    fn unknown_text_falls_back_to_normalized_string() {
        let n = normalizer();
        assert_eq!(
            n.normalize(Some("  Balloon-Artist! "), None),
            ServiceQuery::Text("balloon artist".to_string())
        );
    }

    #[test]
    fn empty_input_means_any() {
        let n = normalizer();
        assert_eq!(n.normalize(None, None), ServiceQuery::Any);
        assert_eq!(n.normalize(Some("   "), Some("")), ServiceQuery::Any);
    }

    #[test]
    fn category_takes_precedence_when_it_resolves() {
        let n = normalizer();
        assert_eq!(
            n.normalize(Some("dj"), Some("Wedding Planner")),
            ServiceQuery::Tag(ServiceTag::Planner)
        );
        assert_eq!(
            n.normalize(None, Some("catering")),
            ServiceQuery::Tag(ServiceTag::Catering)
        );
    }

    #[test]
    fn unresolved_category_yields_to_text() {
        let n = normalizer();
        assert_eq!(
            n.normalize(Some("mehendi"), Some("misc")),
            ServiceQuery::Tag(ServiceTag::Mehndi)
        );
        assert_eq!(
            n.normalize(None, Some("Misc")),
            ServiceQuery::Text("misc".to_string())
        );
    }

    #[test]
    fn normalization_is_deterministic() {
        let n = normalizer();
        let first = n.normalize(Some("Candid Photographer, Indore"), None);
        for _ in 0..10 {
            assert_eq!(n.normalize(Some("Candid Photographer, Indore"), None), first);
        }
    }

    #[test]
    fn injected_aliases_replace_vocabulary() {
        let n = QueryNormalizer::new(AliasTable::new(&[(
            "sound guy".to_string(),
            ServiceTag::Dj,
        )]));
        assert_eq!(n.normalize(Some("Sound Guy"), None), ServiceQuery::Tag(ServiceTag::Dj));
        // Stems still apply without any aliases.
        assert_eq!(
            n.normalize(Some("photographer"), None),
            ServiceQuery::Tag(ServiceTag::Photograph)
        );
    }

    #[test]
    fn tag_match_scores_follow_containment_ladder() {
        let q = ServiceQuery::Tag(ServiceTag::Photograph);
        assert_eq!(q.match_score("photograph", None), Some(1.0));
        assert_eq!(q.match_score("photographer", None), Some(0.9));
        assert_eq!(q.match_score("wedding_photography", None), Some(0.8));
        assert_eq!(q.match_score("dj", Some("photograph anything")), None);

        let planner = ServiceQuery::Text("wedding planner services".to_string());
        assert_eq!(planner.match_score("wedding_planner", None), Some(0.6));
    }

    #[test]
    fn text_query_falls_back_to_description() {
        let q = ServiceQuery::Text("balloon".to_string());
        assert_eq!(q.match_score("decor", Some("Balloon arches & props")), Some(0.3));
        assert_eq!(q.match_score("decor", Some("Floral arches")), None);
        assert_eq!(q.match_score("decor", None), None);
    }

    #[test]
    fn any_matches_everything() {
        assert_eq!(ServiceQuery::Any.match_score("venue", None), Some(0.5));
        assert_eq!(ServiceQuery::Any.catalog_hint(), None);
    }
}
