//! Indentation-aware text accumulator.
//!
//! Every opened scope pushes its closing token; [`CodeBuilder::build`] emits
//! all pending closers in reverse order, so nesting is well-formed no matter
//! which optional sections were written.

const INDENT: &str = "    ";

/// Accumulates generated source text
#[derive(Debug, Default)]
pub struct CodeBuilder {
    code: String,
    indent: usize,
    dedents: Vec<&'static str>,
}

impl CodeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write one line at the current indentation. An empty line carries no
    /// trailing whitespace.
    pub fn line(&mut self, text: impl AsRef<str>) -> &mut Self {
        let text = text.as_ref();
        if !text.is_empty() {
            for _ in 0..self.indent {
                self.code.push_str(INDENT);
            }
            self.code.push_str(text);
        }
        self.code.push('\n');
        self
    }

    /// Write `header` followed by an opening brace.
    pub fn open(&mut self, header: impl AsRef<str>) -> &mut Self {
        self.line(header);
        self.scope()
    }

    /// Open a brace scope.
    pub fn scope(&mut self) -> &mut Self {
        self.line("{");
        self.indent += 1;
        self.dedents.push("}");
        self
    }

    /// Close the innermost scope; no-op when nothing is open.
    pub fn end_scope(&mut self) -> &mut Self {
        if let Some(close) = self.dedents.pop() {
            self.indent = self.indent.saturating_sub(1);
            self.line(close);
        }
        self
    }

    /// Close every pending scope, innermost first.
    pub fn close_all(&mut self) -> &mut Self {
        while !self.dedents.is_empty() {
            self.end_scope();
        }
        self
    }

    /// Number of open scopes
    pub fn depth(&self) -> usize {
        self.dedents.len()
    }

    /// Close all pending scopes and return the text.
    pub fn build(mut self) -> String {
        self.close_all();
        self.code
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    #[test]
    fn CodeBuilder___nested_scopes___closed_in_reverse_with_indentation() {
        let mut code = CodeBuilder::new();
        code.open("namespace Test");
        code.open("struct A");
        code.line("int x;");

        let text = code.build();

        assert_eq!(
            text,
            "namespace Test\n{\n    struct A\n    {\n        int x;\n    }\n}\n"
        );
    }

    #[test]
    fn CodeBuilder___end_scope___dedents_following_lines() {
        let mut code = CodeBuilder::new();
        code.open("if (x)").line("y();").end_scope().line("z();");

        assert_eq!(code.build(), "if (x)\n{\n    y();\n}\nz();\n");
    }

    #[test]
    fn CodeBuilder___end_scope_without_open___no_op() {
        let mut code = CodeBuilder::new();
        code.end_scope().line("a");

        assert_eq!(code.depth(), 0);
        assert_eq!(code.build(), "a\n");
    }

    #[test]
    fn CodeBuilder___empty_line___no_trailing_whitespace() {
        let mut code = CodeBuilder::new();
        code.scope().line("").line("x");

        assert_eq!(code.build(), "{\n\n    x\n}\n");
    }

    #[test]
    fn CodeBuilder___close_all___leaves_builder_usable() {
        let mut code = CodeBuilder::new();
        code.scope().scope();
        assert_eq!(code.depth(), 2);

        code.close_all().line("after");

        assert_eq!(code.depth(), 0);
        assert!(code.build().ends_with("}\n}\nafter\n"));
    }
}
