use crate::error::ScopeError;
use crate::style::scope_class::ScopeClass;
use lightningcss::error::{Error as LcssError, ParserError};
use lightningcss::rules::{style::StyleRule, CssRule};
use lightningcss::stylesheet::{ParserOptions, StyleSheet as LightningStyleSheet};
use lightningcss::traits::ToCss;
use log::{debug, warn};

/// A style rule selector that still applies outside the scope class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnscopedSelector {
    pub selector: String,
    /// Found inside an `@media` block.
    pub in_media: bool,
}

/// Parse an already scoped stylesheet with LightningCSS and list the selectors that
/// escaped scoping.
///
/// Only style rules at the top level and directly inside `@media` are inspected, the
/// same depth the line scanner rewrites. Keyframes, font faces and the like are ignored.
pub fn audit(css: &str, scope: &ScopeClass) -> Result<Vec<UnscopedSelector>, ScopeError> {
    let sheet = LightningStyleSheet::parse(css, ParserOptions::default())
        .map_err(|e: LcssError<ParserError<'_>>| ScopeError::Audit(e.kind.to_string()))?;

    let mut unscoped = Vec::new();
    for rule in &sheet.rules.0 {
        match rule {
            CssRule::Style(style_rule) => {
                collect_unscoped(style_rule, scope, false, &mut unscoped);
            }
            CssRule::Media(media_rule) => {
                for inner_rule in &media_rule.rules.0 {
                    if let CssRule::Style(sr) = inner_rule {
                        collect_unscoped(sr, scope, true, &mut unscoped);
                    }
                }
            }
            _ => {}
        }
    }

    for found in &unscoped {
        warn!(
            "selector `{}`{} is not scoped under {}",
            found.selector,
            if found.in_media { " (in @media)" } else { "" },
            scope
        );
    }
    debug!("audit found {} unscoped selectors", unscoped.len());

    Ok(unscoped)
}

fn collect_unscoped<'a>(
    style_rule: &StyleRule<'a>,
    scope: &ScopeClass,
    in_media: bool,
    unscoped: &mut Vec<UnscopedSelector>,
) {
    for selector in &style_rule.selectors.0 {
        if let Ok(sel_str) = selector.to_css_string(Default::default()) {
            if !sel_str.starts_with(scope.as_str()) {
                unscoped.push(UnscopedSelector {
                    selector: sel_str,
                    in_media,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::dark_css::scope;
    use pretty_assertions::assert_eq;

    #[test]
    fn scoped_output_has_no_findings() {
        let css = ":root {\n  --bg: #111;\n}\n.card, .panel {\n  color: red;\n}\n@media (max-width: 600px) {\n  h1 {\n    margin: 0;\n  }\n}\n";
        let class = ScopeClass::default();
        let scoped = scope(css, &class);
        assert_eq!(audit(&scoped, &class).unwrap(), Vec::new());
    }

    #[test]
    fn reports_unscoped_rules() {
        let css = ".dark-theme .a { color: red; }\n.b { color: blue; }\n@media print {\n  .c { color: black; }\n}\n";
        let found = audit(css, &ScopeClass::default()).unwrap();
        assert_eq!(
            found,
            vec![
                UnscopedSelector {
                    selector: ".b".to_string(),
                    in_media: false,
                },
                UnscopedSelector {
                    selector: ".c".to_string(),
                    in_media: true,
                },
            ]
        );
    }

    #[test]
    fn keyframes_are_not_findings() {
        let css = "@keyframes spin {\n  from { opacity: 0; }\n  to { opacity: 1; }\n}\n";
        assert!(audit(css, &ScopeClass::default()).unwrap().is_empty());
    }

    #[test]
    fn invalid_selector_is_an_audit_error() {
        let result = audit("..a { color: red; }", &ScopeClass::default());
        assert!(matches!(result, Err(ScopeError::Audit(_))));
    }
}
