//! Lexer for PHP using Logos
//!
//! Tokenizes source code into tokens including whitespace and comments,
//! so the token sequence can be written back without loss.

use logos::Logos;

use super::syntax_kind::SyntaxKind;
use super::token::Token;

/// Logos-based token types
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum LogosToken {
    // === Trivia ===
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    #[regex(r"//[^\n]*", priority = 2, allow_greedy = true)]
    #[regex(r"#[^\n]*", allow_greedy = true)]
    LineComment,

    #[regex(r"/\*([^*]|\*+[^*/])*\*+/")]
    BlockComment,

    // === Tags ===
    #[token("<?php", ignore(case))]
    OpenTag,
    #[token("<?=")]
    OpenTagWithEcho,
    #[token("?>")]
    CloseTag,

    // === Keywords (PHP keywords are case-insensitive) ===
    #[token("abstract", ignore(case))]
    AbstractKw,
    #[token("array", ignore(case))]
    ArrayKw,
    #[token("as", ignore(case))]
    AsKw,
    #[token("break", ignore(case))]
    BreakKw,
    #[token("callable", ignore(case))]
    CallableKw,
    #[token("case", ignore(case))]
    CaseKw,
    #[token("catch", ignore(case))]
    CatchKw,
    #[token("class", ignore(case))]
    ClassKw,
    #[token("clone", ignore(case))]
    CloneKw,
    #[token("const", ignore(case))]
    ConstKw,
    #[token("continue", ignore(case))]
    ContinueKw,
    #[token("declare", ignore(case))]
    DeclareKw,
    #[token("default", ignore(case))]
    DefaultKw,
    #[token("do", ignore(case))]
    DoKw,
    #[token("echo", ignore(case))]
    EchoKw,
    #[token("else", ignore(case))]
    ElseKw,
    #[token("elseif", ignore(case))]
    ElseifKw,
    #[token("extends", ignore(case))]
    ExtendsKw,
    #[token("final", ignore(case))]
    FinalKw,
    #[token("finally", ignore(case))]
    FinallyKw,
    #[token("fn", ignore(case))]
    FnKw,
    #[token("for", ignore(case))]
    ForKw,
    #[token("foreach", ignore(case))]
    ForeachKw,
    #[token("function", ignore(case))]
    FunctionKw,
    #[token("global", ignore(case))]
    GlobalKw,
    #[token("if", ignore(case))]
    IfKw,
    #[token("implements", ignore(case))]
    ImplementsKw,
    #[token("instanceof", ignore(case))]
    InstanceofKw,
    #[token("insteadof", ignore(case))]
    InsteadofKw,
    #[token("interface", ignore(case))]
    InterfaceKw,
    #[token("namespace", ignore(case))]
    NamespaceKw,
    #[token("new", ignore(case))]
    NewKw,
    #[token("private", ignore(case))]
    PrivateKw,
    #[token("protected", ignore(case))]
    ProtectedKw,
    #[token("public", ignore(case))]
    PublicKw,
    #[token("return", ignore(case))]
    ReturnKw,
    #[token("static", ignore(case))]
    StaticKw,
    #[token("switch", ignore(case))]
    SwitchKw,
    #[token("throw", ignore(case))]
    ThrowKw,
    #[token("trait", ignore(case))]
    TraitKw,
    #[token("try", ignore(case))]
    TryKw,
    #[token("use", ignore(case))]
    UseKw,
    #[token("var", ignore(case))]
    VarKw,
    #[token("while", ignore(case))]
    WhileKw,
    #[token("yield", ignore(case))]
    YieldKw,

    // === Punctuation ===
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token("::")]
    DoubleColon,
    #[token("\\")]
    NsSeparator,
    #[token(",")]
    Comma,
    #[token("?")]
    Question,
    #[token("|")]
    Pipe,
    #[token("&")]
    Ampersand,
    #[token("...")]
    Ellipsis,
    #[token("->")]
    ObjectOperator,
    #[token("?->")]
    NullsafeObjectOperator,
    #[token("=>")]
    DoubleArrow,
    #[token("=")]
    Eq,
    #[token("$")]
    Dollar,

    #[token("===")]
    #[token("!==")]
    #[token("==")]
    #[token("!=")]
    #[token("<>")]
    #[token("<=>")]
    #[token("<=")]
    #[token(">=")]
    #[token("&&")]
    #[token("||")]
    #[token("??=")]
    #[token("??")]
    #[token("++")]
    #[token("--")]
    #[token("+=")]
    #[token("-=")]
    #[token("*=")]
    #[token("/=")]
    #[token(".=")]
    #[token("%=")]
    #[token("**=")]
    #[token("**")]
    #[token("<<=")]
    #[token(">>=")]
    #[token("<<")]
    #[token(">>")]
    #[token("&=")]
    #[token("|=")]
    #[token("^=")]
    #[token("+")]
    #[token("-")]
    #[token("*")]
    #[token("/")]
    #[token("%")]
    #[token(".")]
    #[token("<")]
    #[token(">")]
    #[token("!")]
    #[token("~")]
    #[token("^")]
    #[token("@")]
    Operator,

    // === Literals ===
    #[regex(r"\$[a-zA-Z_][a-zA-Z0-9_]*")]
    Variable,

    #[regex(r"[0-9]+")]
    #[regex(r"0[xX][0-9a-fA-F]+")]
    #[regex(r"0[bB][01]+")]
    LNumber,

    #[regex(r"[0-9]*\.[0-9]+([eE][+-]?[0-9]+)?")]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+")]
    DNumber,

    #[regex(r#""([^"\\]|\\(.|\n))*""#)]
    #[regex(r#"'([^'\\]|\\(.|\n))*'"#)]
    #[regex(r"`([^`\\]|\\(.|\n))*`")]
    ConstantString,

    /// `<<<LABEL`, `<<<"LABEL"` or `<<<'LABEL'` through the closing label
    #[regex(r#"<<<[ \t]*([A-Za-z_][A-Za-z0-9_]*|"[A-Za-z_][A-Za-z0-9_]*"|'[A-Za-z_][A-Za-z0-9_]*')\r?\n"#, heredoc_body)]
    Heredoc,

    // === Identifiers (must come after keywords) ===
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,
}

/// Convert Logos token to SyntaxKind
fn to_syntax_kind(token: LogosToken, text: &str) -> SyntaxKind {
    match token {
        LogosToken::Whitespace => SyntaxKind::Whitespace,
        LogosToken::LineComment => SyntaxKind::LineComment,
        LogosToken::BlockComment if text.starts_with("/**") && text.len() > 4 => {
            SyntaxKind::DocComment
        }
        LogosToken::BlockComment => SyntaxKind::BlockComment,
        LogosToken::OpenTag => SyntaxKind::OpenTag,
        LogosToken::OpenTagWithEcho => SyntaxKind::OpenTagWithEcho,
        LogosToken::CloseTag => SyntaxKind::CloseTag,
        LogosToken::AbstractKw => SyntaxKind::AbstractKw,
        LogosToken::ArrayKw => SyntaxKind::ArrayKw,
        LogosToken::AsKw => SyntaxKind::AsKw,
        LogosToken::BreakKw => SyntaxKind::BreakKw,
        LogosToken::CallableKw => SyntaxKind::CallableKw,
        LogosToken::CaseKw => SyntaxKind::CaseKw,
        LogosToken::CatchKw => SyntaxKind::CatchKw,
        LogosToken::ClassKw => SyntaxKind::ClassKw,
        LogosToken::CloneKw => SyntaxKind::CloneKw,
        LogosToken::ConstKw => SyntaxKind::ConstKw,
        LogosToken::ContinueKw => SyntaxKind::ContinueKw,
        LogosToken::DeclareKw => SyntaxKind::DeclareKw,
        LogosToken::DefaultKw => SyntaxKind::DefaultKw,
        LogosToken::DoKw => SyntaxKind::DoKw,
        LogosToken::EchoKw => SyntaxKind::EchoKw,
        LogosToken::ElseKw => SyntaxKind::ElseKw,
        LogosToken::ElseifKw => SyntaxKind::ElseifKw,
        LogosToken::ExtendsKw => SyntaxKind::ExtendsKw,
        LogosToken::FinalKw => SyntaxKind::FinalKw,
        LogosToken::FinallyKw => SyntaxKind::FinallyKw,
        LogosToken::FnKw => SyntaxKind::FnKw,
        LogosToken::ForKw => SyntaxKind::ForKw,
        LogosToken::ForeachKw => SyntaxKind::ForeachKw,
        LogosToken::FunctionKw => SyntaxKind::FunctionKw,
        LogosToken::GlobalKw => SyntaxKind::GlobalKw,
        LogosToken::IfKw => SyntaxKind::IfKw,
        LogosToken::ImplementsKw => SyntaxKind::ImplementsKw,
        LogosToken::InstanceofKw => SyntaxKind::InstanceofKw,
        LogosToken::InsteadofKw => SyntaxKind::InsteadofKw,
        LogosToken::InterfaceKw => SyntaxKind::InterfaceKw,
        LogosToken::NamespaceKw => SyntaxKind::NamespaceKw,
        LogosToken::NewKw => SyntaxKind::NewKw,
        LogosToken::PrivateKw => SyntaxKind::PrivateKw,
        LogosToken::ProtectedKw => SyntaxKind::ProtectedKw,
        LogosToken::PublicKw => SyntaxKind::PublicKw,
        LogosToken::ReturnKw => SyntaxKind::ReturnKw,
        LogosToken::StaticKw => SyntaxKind::StaticKw,
        LogosToken::SwitchKw => SyntaxKind::SwitchKw,
        LogosToken::ThrowKw => SyntaxKind::ThrowKw,
        LogosToken::TraitKw => SyntaxKind::TraitKw,
        LogosToken::TryKw => SyntaxKind::TryKw,
        LogosToken::UseKw => SyntaxKind::UseKw,
        LogosToken::VarKw => SyntaxKind::VarKw,
        LogosToken::WhileKw => SyntaxKind::WhileKw,
        LogosToken::YieldKw => SyntaxKind::YieldKw,
        LogosToken::LParen => SyntaxKind::LParen,
        LogosToken::RParen => SyntaxKind::RParen,
        LogosToken::LBrace => SyntaxKind::LBrace,
        LogosToken::RBrace => SyntaxKind::RBrace,
        LogosToken::LBracket => SyntaxKind::LBracket,
        LogosToken::RBracket => SyntaxKind::RBracket,
        LogosToken::Semicolon => SyntaxKind::Semicolon,
        LogosToken::Colon => SyntaxKind::Colon,
        LogosToken::DoubleColon => SyntaxKind::DoubleColon,
        LogosToken::NsSeparator => SyntaxKind::NsSeparator,
        LogosToken::Comma => SyntaxKind::Comma,
        LogosToken::Question => SyntaxKind::Question,
        LogosToken::Pipe => SyntaxKind::Pipe,
        LogosToken::Ampersand => SyntaxKind::Ampersand,
        LogosToken::Ellipsis => SyntaxKind::Ellipsis,
        LogosToken::ObjectOperator => SyntaxKind::ObjectOperator,
        LogosToken::NullsafeObjectOperator => SyntaxKind::NullsafeObjectOperator,
        LogosToken::DoubleArrow => SyntaxKind::DoubleArrow,
        LogosToken::Eq => SyntaxKind::Eq,
        LogosToken::Dollar => SyntaxKind::Dollar,
        LogosToken::Operator => SyntaxKind::Operator,
        LogosToken::Variable => SyntaxKind::Variable,
        LogosToken::LNumber => SyntaxKind::LNumber,
        LogosToken::DNumber => SyntaxKind::DNumber,
        LogosToken::ConstantString | LogosToken::Heredoc => SyntaxKind::ConstantString,
        LogosToken::Identifier => SyntaxKind::Identifier,
    }
}

/// Extend a heredoc or nowdoc opener over its body and closing label.
///
/// An unterminated heredoc runs to the end of the source, like the PHP
/// tokenizer's trailing string content.
fn heredoc_body(lex: &mut logos::Lexer<'_, LogosToken>) {
    let label = heredoc_label(lex.slice());
    let body = lex.remainder();
    let end = closing_label_end(body, label).unwrap_or(body.len());
    lex.bump(end);
}

fn heredoc_label(opener: &str) -> &str {
    opener
        .trim_start_matches("<<<")
        .trim()
        .trim_matches(|c| c == '"' || c == '\'')
}

/// End of the first line of `body` holding only `label` after indentation
fn closing_label_end(body: &str, label: &str) -> Option<usize> {
    let mut line_start = 0;
    loop {
        let line = &body[line_start..];
        let content = line.trim_start_matches([' ', '\t']);
        if content.starts_with(label) && !content[label.len()..].starts_with(is_label_char) {
            return Some(line_start + (line.len() - content.len()) + label.len());
        }
        line_start += line.find('\n')? + 1;
    }
}

fn is_label_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || !c.is_ascii()
}

/// Length of the inline HTML before the next `<?php` or `<?=` tag
fn inline_html_len(source: &str) -> usize {
    let mut from = 0;
    while let Some(found) = source[from..].find("<?") {
        let at = from + found;
        let tail = &source[at + 2..];
        let php_tag = tail.get(..3).is_some_and(|t| t.eq_ignore_ascii_case("php"))
            && tail[3..].chars().next().is_none_or(char::is_whitespace);
        if php_tag || tail.starts_with('=') {
            return at;
        }
        from = at + 2;
    }
    source.len()
}

/// Bytes of the single line break PHP folds into a `?>` tag
fn close_tag_newline_len(rest: &str) -> usize {
    if rest.starts_with("\r\n") {
        2
    } else if rest.starts_with('\n') {
        1
    } else {
        0
    }
}

/// Tracks where a keyword is really a name
#[derive(Debug, Default)]
struct NameContext {
    prev_meaningful: Option<SyntaxKind>,
    after_function: bool,
}

impl NameContext {
    /// Demote `kind` to an identifier in name position, then record it
    fn resolve(&mut self, kind: SyntaxKind) -> SyntaxKind {
        let kind = if kind.is_keyword() && self.is_name_position(kind) {
            SyntaxKind::Identifier
        } else {
            kind
        };

        if kind.is_meaningful() {
            self.after_function = match kind {
                SyntaxKind::FunctionKw => true,
                SyntaxKind::Ampersand => self.after_function,
                _ => false,
            };
            self.prev_meaningful = Some(kind);
        }
        kind
    }

    fn is_name_position(&self, kind: SyntaxKind) -> bool {
        match self.prev_meaningful {
            Some(SyntaxKind::DoubleColon) => kind != SyntaxKind::ClassKw,
            Some(SyntaxKind::ObjectOperator | SyntaxKind::NullsafeObjectOperator) => true,
            _ => self.after_function,
        }
    }
}

/// Tokenize source code into a vector of tokens.
///
/// Text outside `<?php ... ?>` becomes [`SyntaxKind::InlineHtml`]. Heredoc,
/// nowdoc and backtick strings are single [`SyntaxKind::ConstantString`]
/// tokens.
///
/// A keyword used as a name becomes an [`SyntaxKind::Identifier`]: after
/// `->`, `?->` or `::` (except `Foo::class`), and as the name of a function
/// (`function list(`, `function &new(`).
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut context = NameContext::default();
    let mut offset = 0;

    while offset < source.len() {
        let rest = &source[offset..];
        let html = inline_html_len(rest);
        if html > 0 {
            let kind = context.resolve(SyntaxKind::InlineHtml);
            tokens.push(Token::new(kind, &rest[..html]));
            offset += html;
            continue;
        }
        offset += lex_code(rest, &mut context, &mut tokens);
    }

    tokens
}

/// Lex from an open tag through the next `?>`, returning the bytes consumed
fn lex_code(code: &str, context: &mut NameContext, tokens: &mut Vec<Token>) -> usize {
    let mut lexer = LogosToken::lexer(code);

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let kind = match result {
            Ok(token) => to_syntax_kind(token, lexer.slice()),
            Err(()) => SyntaxKind::Error,
        };

        if kind == SyntaxKind::CloseTag {
            let end = span.end + close_tag_newline_len(&code[span.end..]);
            tokens.push(Token::new(context.resolve(kind), &code[span.start..end]));
            return end;
        }
        tokens.push(Token::new(context.resolve(kind), lexer.slice()));
    }

    code.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<SyntaxKind> {
        tokenize(source)
            .iter()
            .map(Token::kind)
            .filter(|k| k.is_meaningful())
            .collect()
    }

    /// Kinds of a code fragment, without the open tag
    fn code_kinds(fragment: &str) -> Vec<SyntaxKind> {
        kinds(&format!("<?php {fragment}"))[1..].to_vec()
    }

    fn texts(source: &str) -> Vec<String> {
        tokenize(source)
            .iter()
            .filter(|t| !t.is_trivia())
            .map(|t| t.text().to_string())
            .collect()
    }

    #[test]
    fn test_tokenize_namespace_declaration() {
        assert_eq!(
            kinds("<?php namespace Tests\\Unit;"),
            vec![
                SyntaxKind::OpenTag,
                SyntaxKind::NamespaceKw,
                SyntaxKind::Identifier,
                SyntaxKind::NsSeparator,
                SyntaxKind::Identifier,
                SyntaxKind::Semicolon,
            ]
        );
    }

    #[test]
    fn test_keywords_are_case_insensitive() {
        assert_eq!(
            code_kinds("NEW Foo; Namespace X; CATCH"),
            vec![
                SyntaxKind::NewKw,
                SyntaxKind::Identifier,
                SyntaxKind::Semicolon,
                SyntaxKind::NamespaceKw,
                SyntaxKind::Identifier,
                SyntaxKind::Semicolon,
                SyntaxKind::CatchKw,
            ]
        );
    }

    #[test]
    fn test_pseudo_types_are_identifiers() {
        for source in ["self", "parent", "true", "null", "int", "string"] {
            assert_eq!(code_kinds(source), vec![SyntaxKind::Identifier], "{source}");
        }
        assert_eq!(code_kinds("static"), vec![SyntaxKind::StaticKw]);
        assert_eq!(code_kinds("array"), vec![SyntaxKind::ArrayKw]);
    }

    #[test]
    fn test_class_constant_keeps_class_keyword() {
        assert_eq!(
            code_kinds("Foo::class"),
            vec![
                SyntaxKind::Identifier,
                SyntaxKind::DoubleColon,
                SyntaxKind::ClassKw
            ]
        );
    }

    #[test]
    fn test_member_names_are_demoted_to_identifiers() {
        assert_eq!(
            code_kinds("$a->new()"),
            vec![
                SyntaxKind::Variable,
                SyntaxKind::ObjectOperator,
                SyntaxKind::Identifier,
                SyntaxKind::LParen,
                SyntaxKind::RParen,
            ]
        );
        assert_eq!(code_kinds("Foo::list")[2], SyntaxKind::Identifier);
        assert_eq!(code_kinds("$a?->class")[2], SyntaxKind::Identifier);
    }

    #[test]
    fn test_comments() {
        let tokens = tokenize("<?php // line\n# hash\n/* block */ /** doc */");
        let kinds: Vec<_> = tokens.iter().map(Token::kind).collect();
        assert!(kinds.contains(&SyntaxKind::LineComment));
        assert!(kinds.contains(&SyntaxKind::BlockComment));
        assert!(kinds.contains(&SyntaxKind::DocComment));
    }

    #[test]
    fn test_strings_are_opaque() {
        assert_eq!(
            code_kinds(r#"'new Foo()' "catch (Bar $e)""#),
            vec![SyntaxKind::ConstantString, SyntaxKind::ConstantString]
        );
    }

    #[test]
    fn test_tokenize_is_lossless() {
        let source = "<?php\nnamespace A;\n\nuse B\\C;\n\n$x = new C(1.5, 'a'); § // end\n";
        let rebuilt: String = tokenize(source).iter().map(Token::text).collect();
        assert_eq!(rebuilt, source);
    }

    #[test]
    fn test_heredoc_is_one_string() {
        let source = "<?php\n$a = <<<EOT\nit's new Ghost(); {\nEOT;\n$b = new Foo();\n";
        assert_eq!(
            texts(source),
            vec![
                "<?php",
                "$a",
                "=",
                "<<<EOT\nit's new Ghost(); {\nEOT",
                ";",
                "$b",
                "=",
                "new",
                "Foo",
                "(",
                ")",
                ";",
            ]
        );
    }

    #[test]
    fn test_quoted_heredoc_and_nowdoc_labels() {
        let source = "<?php\n$a = <<<\"JSON\"\n{\"a\": 1\nJSON;\n$b = <<<'RAW'\n} $x\nRAW;\n";
        let strings: Vec<_> = tokenize(source)
            .into_iter()
            .filter(|t| t.kind() == SyntaxKind::ConstantString)
            .map(|t| t.content())
            .collect();
        assert_eq!(strings, vec!["<<<\"JSON\"\n{\"a\": 1\nJSON", "<<<'RAW'\n} $x\nRAW"]);
    }

    #[test]
    fn test_heredoc_closing_label() {
        // the closing label may be indented; a longer word does not close it
        let source = "<?php f(<<<EOT\n  EOTX EOT\n    EOT, <<<E\nE);";
        let strings: Vec<_> = tokenize(source)
            .into_iter()
            .filter(|t| t.kind() == SyntaxKind::ConstantString)
            .map(|t| t.content())
            .collect();
        assert_eq!(strings, vec!["<<<EOT\n  EOTX EOT\n    EOT", "<<<E\nE"]);
    }

    #[test]
    fn test_unterminated_heredoc_runs_to_end() {
        let source = "<?php $a = <<<EOT\nnew Foo();\n";
        assert_eq!(kinds(source).last(), Some(&SyntaxKind::ConstantString));
        let rebuilt: String = tokenize(source).iter().map(Token::text).collect();
        assert_eq!(rebuilt, source);
    }

    #[test]
    fn test_backtick_string_is_opaque() {
        assert_eq!(
            code_kinds("$out = `ls new Foo()`;"),
            vec![
                SyntaxKind::Variable,
                SyntaxKind::Eq,
                SyntaxKind::ConstantString,
                SyntaxKind::Semicolon,
            ]
        );
    }

    #[test]
    fn test_inline_html_outside_php_tags() {
        let source = "<p>new Ghost();</p>\n<?php $a = 1; ?>\n<b>{</b><?= $a ?>";
        let tokens = tokenize(source);
        let html: Vec<_> = tokens
            .iter()
            .filter(|t| t.kind() == SyntaxKind::InlineHtml)
            .map(Token::text)
            .collect();
        assert_eq!(html, vec!["<p>new Ghost();</p>\n", "<b>{</b>"]);
        assert!(tokens.iter().any(|t| t.kind() == SyntaxKind::CloseTag && t.text() == "?>\n"));
        assert!(tokens.iter().all(|t| t.kind() != SyntaxKind::NewKw));
        assert!(tokens.iter().all(|t| t.kind() != SyntaxKind::LBrace));
    }

    #[test]
    fn test_source_without_open_tag_is_html() {
        assert_eq!(kinds("new Foo();"), vec![SyntaxKind::InlineHtml]);
        assert_eq!(kinds("<?phpx new Foo();"), vec![SyntaxKind::InlineHtml]);
    }

    #[test]
    fn test_shebang_before_open_tag() {
        assert_eq!(
            kinds("#!/usr/bin/env php\n<?php new Foo;"),
            vec![
                SyntaxKind::InlineHtml,
                SyntaxKind::OpenTag,
                SyntaxKind::NewKw,
                SyntaxKind::Identifier,
                SyntaxKind::Semicolon,
            ]
        );
    }

    #[test]
    fn test_reserved_word_function_names_are_identifiers() {
        assert_eq!(
            code_kinds("function default(Foo $x) {} function &new() {} function list() {}")
                .into_iter()
                .filter(|k| *k == SyntaxKind::Identifier)
                .count(),
            4
        );
        assert_eq!(
            code_kinds("function &list()")[..3],
            [SyntaxKind::FunctionKw, SyntaxKind::Ampersand, SyntaxKind::Identifier]
        );
        // only the name is demoted
        assert_eq!(code_kinds("function () use ($x)")[3], SyntaxKind::UseKw);
    }
}
