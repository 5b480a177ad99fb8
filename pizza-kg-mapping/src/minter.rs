//! URI minting strategies
//!
//! - [`LocalMinter`]: namespace + sanitized name, pure and deterministic
//! - [`ExternalMinter`]: reuse the identifier of the lexically closest
//!   entity from an external knowledge graph, falling back to the local
//!   identifier when the service fails or has nothing to offer

use std::cell::Cell;

use percent_encoding::{percent_encode, utf8_percent_encode, AsciiSet, CONTROLS, NON_ALPHANUMERIC};
use pizza_kg_lookup::{isub, EntitySearch, KgEntity, DEFAULT_LIMIT};
use tracing::{debug, warn};

/// ASCII characters an IRI fragment cannot hold literally
///
/// ```text
/// ifragment ::= ( ipchar | "/" | "?" )*
/// ipchar    ::= iunreserved | pct-encoded | sub-delims | ":" | "@"
/// ```
const FRAGMENT_UNSAFE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Produces an identifier for an entity name
pub trait UriMinter {
    fn mint(&self, name: &str) -> String;
}

impl<T: UriMinter + ?Sized> UriMinter for Box<T> {
    fn mint(&self, name: &str) -> String {
        (**self).mint(name)
    }
}

impl<T: UriMinter + ?Sized> UriMinter for &T {
    fn mint(&self, name: &str) -> String {
        (**self).mint(name)
    }
}

/// Sanitize an entity name before it becomes an IRI local part.
///
/// Spaces become underscores and parenthesis characters are deleted; no
/// other character is touched.
///
/// ```
/// use pizza_kg_mapping::process_lexical_name;
///
/// assert_eq!(process_lexical_name("New York (NY)"), "New_York_NY");
/// ```
pub fn process_lexical_name(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '(' | ')'))
        .map(|c| if c == ' ' { '_' } else { c })
        .collect()
}

/// Fresh identifiers in a fixed namespace
#[derive(Debug, Clone)]
pub struct LocalMinter {
    namespace: String,
}

impl LocalMinter {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }
}

impl UriMinter for LocalMinter {
    fn mint(&self, name: &str) -> String {
        format!(
            "{}{}",
            self.namespace,
            encode_local_part(&process_lexical_name(name))
        )
    }
}

/// `ucschar` from RFC 3987
fn is_ucschar(c: char) -> bool {
    let cp = c as u32;
    matches!(cp,
        0xA0..=0xD7FF
        | 0xF900..=0xFDCF
        | 0xFDF0..=0xFFEF
        | 0x1_0000..=0xE_FFFD)
        && (cp & 0xFFFE) != 0xFFFE
}

/// Percent-encode the characters that would make `namespace + local` an
/// invalid IRI. Everything else, non-ASCII letters included, is kept.
fn encode_local_part(local: &str) -> String {
    let mut out = String::with_capacity(local.len());
    let mut buf = [0u8; 4];
    for c in local.chars() {
        let utf8 = c.encode_utf8(&mut buf);
        if c.is_ascii() {
            out.extend(percent_encode(utf8.as_bytes(), FRAGMENT_UNSAFE));
        } else if is_ucschar(c) {
            out.push(c);
        } else {
            out.extend(utf8_percent_encode(utf8, NON_ALPHANUMERIC));
        }
    }
    out
}

/// Pick the candidate whose label is most similar to `name`.
///
/// A candidate only replaces the current best when it scores strictly
/// higher, so ties go to the earliest candidate. Candidates without an
/// identifier are ignored.
pub fn best_candidate<'a>(name: &str, candidates: &'a [KgEntity]) -> Option<&'a KgEntity> {
    let mut best = None;
    let mut best_score = -1.0;
    for candidate in candidates.iter().filter(|c| !c.ident.is_empty()) {
        let score = isub(name, &candidate.label);
        if best_score < score {
            best_score = score;
            best = Some(candidate);
        }
    }
    best
}

/// Identifiers reused from an external knowledge graph
///
/// Each uncached name costs one search of up to `limit` candidates. A failed
/// search is retried `retries` more times; after that, or when no candidate
/// is usable, the local identifier is returned. Minting never fails.
pub struct ExternalMinter<S> {
    search: S,
    local: LocalMinter,
    limit: usize,
    retries: u32,
    reused: Cell<usize>,
    fallbacks: Cell<usize>,
}

impl<S: EntitySearch> ExternalMinter<S> {
    pub fn new(search: S, local: LocalMinter) -> Self {
        Self {
            search,
            local,
            limit: DEFAULT_LIMIT,
            retries: 1,
            reused: Cell::new(0),
            fallbacks: Cell::new(0),
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    /// Names resolved to an external identifier so far
    pub fn reused(&self) -> usize {
        self.reused.get()
    }

    /// Names that fell back to a local identifier so far
    pub fn fallbacks(&self) -> usize {
        self.fallbacks.get()
    }

    fn search_with_retry(&self, name: &str) -> Option<Vec<KgEntity>> {
        let attempts = self.retries.saturating_add(1);
        for attempt in 1..=attempts {
            match self.search.search(name, self.limit) {
                Ok(candidates) => return Some(candidates),
                Err(err) => warn!(
                    backend = self.search.name(),
                    name,
                    attempt,
                    attempts,
                    error = %err,
                    "entity search failed"
                ),
            }
        }
        None
    }

    fn fallback(&self, name: &str) -> String {
        self.fallbacks.set(self.fallbacks.get() + 1);
        self.local.mint(name)
    }
}

impl<S: EntitySearch> UriMinter for ExternalMinter<S> {
    fn mint(&self, name: &str) -> String {
        let Some(candidates) = self.search_with_retry(name) else {
            warn!(
                backend = self.search.name(),
                name, "entity search unavailable, using local identifier"
            );
            return self.fallback(name);
        };

        match best_candidate(name, &candidates) {
            Some(best) => {
                debug!(
                    backend = self.search.name(),
                    name,
                    iri = %best.ident,
                    label = %best.label,
                    "reusing external identifier"
                );
                self.reused.set(self.reused.get() + 1);
                best.ident.clone()
            }
            None => {
                debug!(
                    backend = self.search.name(),
                    name, "no external candidate, using local identifier"
                );
                self.fallback(name)
            }
        }
    }
}

impl<S: EntitySearch> std::fmt::Debug for ExternalMinter<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExternalMinter")
            .field("backend", &self.search.name())
            .field("namespace", &self.local.namespace())
            .field("limit", &self.limit)
            .field("retries", &self.retries)
            .finish()
    }
}
