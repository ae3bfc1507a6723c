//! Role and tag rules.
//!
//! A rule is a role or tag name, optionally prefixed with `!`. A plain rule
//! requires the name to be present, a negated rule requires it to be absent.

/// One parsed rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rule<'a> {
    pub negate: bool,
    pub name: &'a str,
}

impl<'a> Rule<'a> {
    pub fn parse(raw: &'a str) -> Self {
        match raw.strip_prefix('!') {
            Some(name) => Rule { negate: true, name },
            None => Rule {
                negate: false,
                name: raw,
            },
        }
    }

    /// Whether the rule fails given the presence of its name.
    pub fn fails(&self, present: bool) -> bool {
        present == self.negate
    }
}

/// True if any rule in the list fails. Stops at the first failing rule.
pub fn any_fails<'a, S, F>(rules: &'a [S], mut present: F) -> bool
where
    S: AsRef<str> + 'a,
    F: FnMut(&str) -> bool,
{
    rules.iter().any(|raw| {
        let rule = Rule::parse(raw.as_ref());
        rule.fails(present(rule.name))
    })
}
