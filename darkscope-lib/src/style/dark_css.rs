use crate::style::line_state::LineState;
use crate::style::scope_class::ScopeClass;
use crate::style::scope_report::ScopeReport;
use crate::style::selector_scope::scope_selector_list;
use log::{debug, info};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// A bare `body {` rule opener. The leading group keeps `.body`, `#body` and `my-body` out.
static BODY_RULE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(^|[^\w.#-])body\s*\{").unwrap());

const ROOT_RULE: &str = ":root {";

/// Scope every selector in `css` under `scope`. See [`scope_with_report`].
pub fn scope(css: &str, scope: &ScopeClass) -> String {
    scope_with_report(css, scope).0
}

/// Rewrite a stylesheet so its rules only apply below `scope`, and count what changed.
///
/// Works line by line and assumes at most one selector opener per line. `:root {` and
/// `body {` become the scope rule itself, selector lines outside a rule body are
/// prefixed, everything else (comments, at-rules, declarations, keyframe stops) is
/// copied verbatim. Never fails: unknown constructs pass through unchanged.
pub fn scope_with_report(css: &str, scope: &ScopeClass) -> (String, ScopeReport) {
    let content = fold_root_rules(css, scope);

    let mut report = ScopeReport::default();
    let mut state = LineState::Top;
    let mut out_lines: Vec<String> = Vec::new();

    for line in content.split('\n') {
        report.lines += 1;

        if state.is_in_keyframes() {
            state = state.on_keyframes_line(line);
            out_lines.push(line.to_string());
            continue;
        }

        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with("/*") {
            out_lines.push(line.to_string());
            continue;
        }

        if trimmed.starts_with('@') {
            let next = state.on_at_rule(trimmed);
            if trimmed.starts_with("@media") {
                report.media_blocks += 1;
            }
            if next.is_in_keyframes() {
                report.keyframes_blocks += 1;
            }
            state = next;
            out_lines.push(line.to_string());
            continue;
        }

        if trimmed == "}" {
            state = state.on_close();
            out_lines.push(line.to_string());
            continue;
        }

        if trimmed.contains('{') && !state.is_in_block() {
            state = state.open_block();

            if trimmed.starts_with(scope.as_str()) || trimmed.contains("keyframes") {
                out_lines.push(line.to_string());
                continue;
            }

            let head = trimmed.split('{').next().unwrap_or_default();
            let (kinds, selectors) = scope_selector_list(head, scope);
            if kinds.is_empty() {
                out_lines.push(line.to_string());
                continue;
            }
            for kind in kinds {
                report.record(kind);
            }

            let indent = &line[..line.len() - line.trim_start().len()];
            let rewritten = format!("{}{} {{", indent, selectors);
            debug!("scoped `{}` -> `{}`", trimmed, rewritten.trim_start());
            report.rewritten_lines += 1;
            out_lines.push(rewritten);
            continue;
        }

        out_lines.push(line.to_string());
    }

    info!(
        "scoped {} selectors on {} of {} lines under {}",
        report.scoped_selectors(),
        report.rewritten_lines,
        report.lines,
        scope
    );

    (out_lines.join("\n"), report)
}

/// Turn `:root {` and bare `body {` openers into `<scope> {`.
fn fold_root_rules(css: &str, scope: &ScopeClass) -> String {
    let opener = format!("{} {{", scope);
    let content = css.replace(ROOT_RULE, &opener);
    BODY_RULE
        .replace_all(&content, |caps: &Captures| format!("{}{}", &caps[1], opener))
        .into_owned()
}
