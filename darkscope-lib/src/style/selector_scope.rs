use crate::style::scope_class::ScopeClass;

/// The document body element. Selectors starting with it are folded into the scope class.
pub const BODY_ELEMENT: &str = "body";

/// How a single selector gets rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorKind {
    /// Starts with the scope class already.
    AlreadyScoped,
    /// `::selection`, `::-webkit-scrollbar`, ...
    PseudoElement,
    /// `body`, `body.loaded`, ...
    Body,
    /// Anything else.
    Plain,
}

/// Classify one trimmed selector. Checks run in priority order.
pub fn classify_selector(selector: &str, scope: &ScopeClass) -> SelectorKind {
    if selector.starts_with(scope.as_str()) {
        SelectorKind::AlreadyScoped
    } else if selector.starts_with("::") {
        SelectorKind::PseudoElement
    } else if selector.starts_with(BODY_ELEMENT) {
        SelectorKind::Body
    } else {
        SelectorKind::Plain
    }
}

/// Rewrite a single trimmed selector so it only matches under `scope`.
///
/// Pseudo-elements keep a descendant combinator (`.dark-theme ::selection`), the body
/// element becomes the scope class itself (`body.loaded` -> `.dark-theme.loaded`).
pub fn scope_selector(selector: &str, scope: &ScopeClass) -> (SelectorKind, String) {
    let kind = classify_selector(selector, scope);
    let rewritten = match kind {
        SelectorKind::AlreadyScoped => selector.to_string(),
        SelectorKind::Body => selector.replacen(BODY_ELEMENT, scope.as_str(), 1),
        SelectorKind::PseudoElement | SelectorKind::Plain => {
            format!("{} {}", scope, selector)
        }
    };
    (kind, rewritten)
}

/// Rewrite every comma separated selector in `head` (the text before `{`).
///
/// Empty entries are dropped. Returns the kinds seen alongside the joined selector list.
pub fn scope_selector_list(head: &str, scope: &ScopeClass) -> (Vec<SelectorKind>, String) {
    let mut kinds = Vec::new();
    let mut scoped = Vec::new();

    for selector in head.split(',') {
        let selector = selector.trim();
        if selector.is_empty() {
            continue;
        }
        let (kind, rewritten) = scope_selector(selector, scope);
        kinds.push(kind);
        scoped.push(rewritten);
    }

    (kinds, scoped.join(", "))
}
