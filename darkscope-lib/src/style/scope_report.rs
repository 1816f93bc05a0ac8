use crate::style::selector_scope::SelectorKind;
use std::fmt;

/// Counters collected during one scoping pass.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScopeReport {
    pub lines: usize,
    /// Selector lines that were rebuilt.
    pub rewritten_lines: usize,
    /// Selectors given a descendant prefix (plain and pseudo-element).
    pub prefixed_selectors: usize,
    pub pseudo_element_selectors: usize,
    /// `body...` selectors folded into the scope class.
    pub body_selectors: usize,
    pub already_scoped_selectors: usize,
    pub media_blocks: usize,
    pub keyframes_blocks: usize,
}

impl ScopeReport {
    pub(crate) fn record(&mut self, kind: SelectorKind) {
        match kind {
            SelectorKind::AlreadyScoped => self.already_scoped_selectors += 1,
            SelectorKind::Body => self.body_selectors += 1,
            SelectorKind::PseudoElement => {
                self.pseudo_element_selectors += 1;
                self.prefixed_selectors += 1;
            }
            SelectorKind::Plain => self.prefixed_selectors += 1,
        }
    }

    pub fn scoped_selectors(&self) -> usize {
        self.prefixed_selectors + self.body_selectors
    }
}

impl fmt::Display for ScopeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Lines: {} ({} selector lines rewritten)",
            self.lines, self.rewritten_lines
        )?;
        writeln!(
            f,
            "  scoped: {} (prefixed {}, pseudo-elements {}, body {})",
            self.scoped_selectors(),
            self.prefixed_selectors,
            self.pseudo_element_selectors,
            self.body_selectors
        )?;
        writeln!(f, "  already scoped: {}", self.already_scoped_selectors)?;
        write!(
            f,
            "  @media blocks: {}, @keyframes skipped: {}",
            self.media_blocks, self.keyframes_blocks
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pseudo_elements_count_as_prefixed() {
        let mut report = ScopeReport::default();
        report.record(SelectorKind::PseudoElement);
        report.record(SelectorKind::Plain);
        report.record(SelectorKind::Body);
        report.record(SelectorKind::AlreadyScoped);
        assert_eq!(report.prefixed_selectors, 2);
        assert_eq!(report.pseudo_element_selectors, 1);
        assert_eq!(report.scoped_selectors(), 3);
        assert_eq!(report.already_scoped_selectors, 1);
    }

    #[test]
    fn display_mentions_counts() {
        let report = ScopeReport {
            lines: 10,
            rewritten_lines: 2,
            prefixed_selectors: 3,
            ..Default::default()
        };
        let text = report.to_string();
        assert!(text.starts_with("Lines: 10 (2 selector lines rewritten)"));
        assert!(text.contains("scoped: 3"));
    }
}
