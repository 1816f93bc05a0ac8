/// Where the line scanner is, one level deep at most.
///
/// A rule body inside `@media` remembers the media block so the closing brace of the body
/// returns to it. Keyframes bodies are tracked separately because their stops (`0%`, `from`)
/// look like selectors but must never be scoped. A keyframes header whose `{` sits on a
/// later line waits in `KeyframesHeader` until the body opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineState {
    #[default]
    Top,
    InMedia,
    InBlock {
        within_media: bool,
    },
    KeyframesHeader {
        within_media: bool,
    },
    InKeyframes {
        depth: usize,
        within_media: bool,
    },
}

/// Opening braces minus closing braces on a line.
pub fn brace_balance(line: &str) -> isize {
    line.chars().fold(0, |acc, ch| match ch {
        '{' => acc + 1,
        '}' => acc - 1,
        _ => acc,
    })
}

impl LineState {
    pub fn is_in_block(self) -> bool {
        matches!(self, LineState::InBlock { .. })
    }

    pub fn is_in_keyframes(self) -> bool {
        matches!(
            self,
            LineState::InKeyframes { .. } | LineState::KeyframesHeader { .. }
        )
    }

    fn within_media(self) -> bool {
        match self {
            LineState::Top => false,
            LineState::InMedia => true,
            LineState::InBlock { within_media }
            | LineState::KeyframesHeader { within_media }
            | LineState::InKeyframes { within_media, .. } => within_media,
        }
    }

    fn leave_nested(within_media: bool) -> LineState {
        if within_media {
            LineState::InMedia
        } else {
            LineState::Top
        }
    }

    /// Transition for a line whose trimmed text starts with `@`.
    pub fn on_at_rule(self, trimmed: &str) -> LineState {
        if trimmed.starts_with("@media") {
            return match self {
                LineState::InBlock { .. } => LineState::InBlock { within_media: true },
                _ => LineState::InMedia,
            };
        }

        if trimmed.contains("keyframes") && !self.is_in_block() {
            let balance = brace_balance(trimmed);
            if balance > 0 {
                return LineState::InKeyframes {
                    depth: balance as usize,
                    within_media: self.within_media(),
                };
            }
            if !trimmed.contains('{') && !trimmed.ends_with(';') {
                return LineState::KeyframesHeader {
                    within_media: self.within_media(),
                };
            }
        }

        self
    }

    /// Transition for a line that is exactly `}`.
    pub fn on_close(self) -> LineState {
        match self {
            LineState::InBlock { within_media } => Self::leave_nested(within_media),
            LineState::InMedia => LineState::Top,
            other => other,
        }
    }

    /// Transition for a selector line that opens a rule body.
    pub fn open_block(self) -> LineState {
        LineState::InBlock {
            within_media: self.within_media(),
        }
    }

    /// Transition for any line read after a keyframes header, body included.
    pub fn on_keyframes_line(self, line: &str) -> LineState {
        match self {
            LineState::KeyframesHeader { within_media } => {
                let balance = brace_balance(line);
                if balance > 0 {
                    LineState::InKeyframes {
                        depth: balance as usize,
                        within_media,
                    }
                } else if line.contains('{') {
                    Self::leave_nested(within_media)
                } else {
                    self
                }
            }
            LineState::InKeyframes {
                depth,
                within_media,
            } => {
                let depth = depth as isize + brace_balance(line);
                if depth <= 0 {
                    Self::leave_nested(within_media)
                } else {
                    LineState::InKeyframes {
                        depth: depth as usize,
                        within_media,
                    }
                }
            }
            other => other,
        }
    }
}
