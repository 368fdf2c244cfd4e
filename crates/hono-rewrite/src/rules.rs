use regex::{Captures, Regex};

/// One pattern-to-replacement mapping, applied over the whole document.
#[derive(Debug)]
pub struct Rule {
    pub name: &'static str,
    pattern: Regex,
    replacement: &'static str,
    /// Maximum number of replacements. `None` replaces every match.
    limit: Option<usize>,
}

impl Rule {
    pub fn new(
        name: &'static str,
        pattern: &str,
        replacement: &'static str,
        limit: Option<usize>,
    ) -> Result<Self, regex::Error> {
        Ok(Self {
            name,
            pattern: Regex::new(pattern)?,
            replacement,
            limit,
        })
    }

    /// Applies the rule, returning the new text and how many matches were replaced.
    pub fn apply(&self, text: &str) -> (String, usize) {
        let mut count = 0;
        let rewritten = self
            .pattern
            .replacen(text, self.limit.unwrap_or(0), |caps: &Captures| {
                count += 1;
                let mut dst = String::new();
                caps.expand(self.replacement, &mut dst);
                dst
            })
            .into_owned();
        (rewritten, count)
    }
}

/// The supertest to Hono rules, in the order they must run.
///
/// The argument captures stop at the first `)`, so an argument holding its
/// own parentheses either fails to match or is cut short.
pub fn supertest_rules() -> Result<Vec<Rule>, regex::Error> {
    Ok(vec![
        Rule::new(
            "remove_supertest_import",
            r"import request from 'supertest';\n",
            "",
            Some(1),
        )?,
        Rule::new(
            "get_with_headers",
            r"await request\(app\.fetch as any\)\s*\.get\(([^\)]+)\)\s*\.set\(([^\)]+)\);",
            r#"await app.request(${1}, { method: "GET", headers: ${2} });"#,
            None,
        )?,
        // Unlike the other chains, no line break is allowed before `.get`.
        Rule::new(
            "get_without_headers",
            r"await request\(app\.fetch as any\)\.get\(([^\)]+)\);",
            r#"await app.request(${1}, { method: "GET" });"#,
            None,
        )?,
        Rule::new(
            "post_with_headers_and_body",
            r"await request\(app\.fetch as any\)\s*\.post\(([^\)]+)\)\s*\.set\(([^\)]+)\)\s*\.send\(([^\)]+)\);",
            r#"await app.request(${1}, { method: "POST", headers: ${2}, body: JSON.stringify(${3}) });"#,
            None,
        )?,
    ])
}
