use serde::Serialize;

/// Which check `validate_directive` applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectiveRule {
    AbsolutePath,
    Numeric,
    NotLiteralInvalid,
    AcceptAll,
}

impl DirectiveRule {
    pub fn for_directive(directive: &str) -> DirectiveRule {
        match directive {
            "ExecStart" => DirectiveRule::AbsolutePath,
            "ListenStream" => DirectiveRule::Numeric,
            "Restart" => DirectiveRule::NotLiteralInvalid,
            _ => DirectiveRule::AcceptAll,
        }
    }

    pub fn check(self, value: &str) -> bool {
        match self {
            DirectiveRule::AbsolutePath => value.starts_with('/'),
            DirectiveRule::Numeric => is_number(value),
            DirectiveRule::NotLiteralInvalid => value != "invalid",
            DirectiveRule::AcceptAll => true,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DirectiveRule::AbsolutePath => "absolute_path",
            DirectiveRule::Numeric => "numeric",
            DirectiveRule::NotLiteralInvalid => "not_literal_invalid",
            DirectiveRule::AcceptAll => "accept_all",
        }
    }
}

fn is_number(value: &str) -> bool {
    let v = value.trim();
    !v.is_empty() && v.parse::<f64>().map(|n| n.is_finite()).unwrap_or(false)
}

/// Spot-checks a directive value. Directives without a rule are accepted.
pub fn validate_directive(directive: &str, value: &str) -> bool {
    DirectiveRule::for_directive(directive).check(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exec_start_requires_absolute_path() {
        assert!(validate_directive("ExecStart", "/usr/bin/app"));
        assert!(!validate_directive("ExecStart", "usr/bin/app"));
        assert!(!validate_directive("ExecStart", ""));
    }

    #[test]
    fn listen_stream_requires_number() {
        assert!(validate_directive("ListenStream", "80"));
        assert!(validate_directive("ListenStream", " 8080 "));
        assert!(!validate_directive("ListenStream", "abc"));
        assert!(!validate_directive("ListenStream", ""));
        assert!(!validate_directive("ListenStream", "inf"));
    }

    #[test]
    fn restart_rejects_only_literal_invalid() {
        assert!(!validate_directive("Restart", "invalid"));
        assert!(validate_directive("Restart", "on-failure"));
        assert!(validate_directive("Restart", "INVALID"));
    }

    #[test]
    fn unknown_directives_are_accepted() {
        assert!(validate_directive("SomeUnknownDirective", "anything"));
        assert_eq!(
            DirectiveRule::for_directive("execstart"),
            DirectiveRule::AcceptAll
        );
    }
}
