//! `{{name}}` substitution for the fixed follow-up templates.

use std::fmt;

/// Result alias for template operations.
pub type TemplateResult<T> = Result<T, TemplateError>;

/// Template declaration and rendering failures.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    /// A required placeholder had no binding at render time.
    #[error("missing required variable: {name}")]
    MissingVariable {
        /// Placeholder name.
        name: String,
    },

    /// A placeholder was declared required but the text never uses it.
    #[error("template does not reference required variable: {name}")]
    UnusedVariable {
        /// Placeholder name.
        name: String,
    },
}

/// Fixed prompt text with `{{name}}` placeholders.
///
/// Rendering is one left-to-right pass. Bound values are copied as-is and
/// never rescanned, so an answer that happens to contain `{{critique}}` is
/// not expanded. Placeholders without a binding stay in the output.
///
/// ```
/// use framework_prompts::template::PromptTemplate;
///
/// let template = PromptTemplate::builder("Task: {{task}}\n\nSolution:")
///     .require("task")
///     .build()
///     .unwrap();
///
/// let prompt = template.render(&[("task", "Add 2 and 2.")]).unwrap();
/// assert_eq!(prompt, "Task: Add 2 and 2.\n\nSolution:");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PromptTemplate {
    text: &'static str,
    required: Vec<&'static str>,
}

impl PromptTemplate {
    /// Starts declaring a template over `text`.
    #[must_use]
    pub fn builder(text: &'static str) -> TemplateBuilder {
        TemplateBuilder {
            text,
            required: Vec::new(),
        }
    }

    /// Substitutes `bindings` into the text.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::MissingVariable`] for the first required
    /// placeholder without a binding.
    pub fn render(&self, bindings: &[(&str, &str)]) -> TemplateResult<String> {
        let lookup = |name: &str| {
            bindings
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| *value)
        };

        if let Some(missing) = self.required.iter().find(|name| lookup(name).is_none()) {
            return Err(TemplateError::MissingVariable {
                name: (*missing).to_owned(),
            });
        }

        let mut output = String::with_capacity(self.text.len());
        let mut rest = self.text;
        while let Some((before, name, after)) = next_placeholder(rest) {
            output.push_str(before);
            match lookup(name.trim()) {
                Some(value) => output.push_str(value),
                None => {
                    output.push_str("{{");
                    output.push_str(name);
                    output.push_str("}}");
                }
            }
            rest = after;
        }
        output.push_str(rest);
        Ok(output)
    }

    /// Placeholder names in order of appearance.
    #[must_use]
    pub fn placeholders(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        let mut rest = self.text;
        while let Some((_, name, after)) = next_placeholder(rest) {
            let name = name.trim();
            if !name.is_empty() {
                names.push(name);
            }
            rest = after;
        }
        names
    }
}

impl fmt::Display for PromptTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)
    }
}

/// Declares the placeholders a [`PromptTemplate`] must be rendered with.
#[derive(Debug)]
pub struct TemplateBuilder {
    text: &'static str,
    required: Vec<&'static str>,
}

impl TemplateBuilder {
    /// Marks `name` as required at render time.
    #[must_use]
    pub fn require(mut self, name: &'static str) -> Self {
        self.required.push(name);
        self
    }

    /// Checks the declaration against the text.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::UnusedVariable`] if a required name never
    /// appears as a placeholder.
    pub fn build(self) -> TemplateResult<PromptTemplate> {
        let template = PromptTemplate {
            text: self.text,
            required: self.required,
        };
        let used = template.placeholders();
        if let Some(unused) = template.required.iter().find(|name| !used.contains(name)) {
            return Err(TemplateError::UnusedVariable {
                name: (*unused).to_owned(),
            });
        }
        Ok(template)
    }
}

/// Splits `text` around its first complete `{{...}}`.
fn next_placeholder(text: &str) -> Option<(&str, &str, &str)> {
    let start = text.find("{{")?;
    let inner = &text[start + 2..];
    let end = inner.find("}}")?;
    Some((&text[..start], &inner[..end], &inner[end + 2..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binds_every_placeholder() {
        let template = PromptTemplate::builder("{{task}}\n\nAnswer:\n{{ answer }}")
            .require("task")
            .require("answer")
            .build()
            .unwrap();

        let rendered = template
            .render(&[("answer", "Ship it."), ("task", "Decide.")])
            .unwrap();
        assert_eq!(rendered, "Decide.\n\nAnswer:\nShip it.");
    }

    #[test]
    fn missing_binding_is_reported_by_name() {
        let template = PromptTemplate::builder("Task: {{task}}")
            .require("task")
            .build()
            .unwrap();

        let err = template.render(&[]).expect_err("unbound");
        assert_eq!(err.to_string(), "missing required variable: task");
    }

    #[test]
    fn required_name_must_appear_in_text() {
        let err = PromptTemplate::builder("no placeholders")
            .require("task")
            .build()
            .expect_err("unused");
        assert!(matches!(err, TemplateError::UnusedVariable { .. }));
    }

    #[test]
    fn bound_values_are_not_rescanned() {
        let template = PromptTemplate::builder("A: {{a}} / B: {{b}}")
            .require("a")
            .require("b")
            .build()
            .unwrap();

        let rendered = template
            .render(&[("a", "literal {{b}}"), ("b", "second")])
            .unwrap();
        assert_eq!(rendered, "A: literal {{b}} / B: second");
    }

    #[test]
    fn unbound_and_unterminated_placeholders_survive() {
        let template = PromptTemplate::builder("{{ optional }} cost {{ unclosed")
            .build()
            .unwrap();
        assert_eq!(template.render(&[]).unwrap(), "{{ optional }} cost {{ unclosed");
    }

    #[test]
    fn lists_placeholders_in_order() {
        let template =
            PromptTemplate::builder("{{task}} then {{ initial_answer }} then {{critique}}")
                .build()
                .unwrap();
        assert_eq!(template.placeholders(), ["task", "initial_answer", "critique"]);
    }
}
