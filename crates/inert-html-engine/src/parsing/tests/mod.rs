//! End-to-end tests for the converter.
//!
//! Every document is also run through the output invariants in
//! [`invariants::check`].


use pretty_assertions::assert_eq;

use crate::html::Node;
use crate::parsing::{Diagnostic, ParseError, Rendered, markdown_to_html, parse_document};

fn convert(md: &str) -> Rendered {
    let doc = parse_document(md);
    invariants::check(md, &doc.nodes);
    markdown_to_html(md)
}

fn html(md: &str) -> String {
    convert(md).body
}

#[test]
fn heading_and_paragraph() {
    let doc = parse_document("# Title\n\nSome *italic* and **bold** text.");
    assert_eq!(
        doc.nodes,
        vec![
            Node::leaf("h1", "Title").with_attribute("id", "title"),
            Node::element("p").with_children(vec![
                Node::text("Some "),
                Node::leaf("em", "italic"),
                Node::text(" and "),
                Node::leaf("strong", "bold"),
                Node::text(" text."),
            ]),
        ]
    );
    assert_eq!(doc.title(), "Title");
    assert!(doc.diagnostics.is_empty());
}

#[test]
fn fenced_code_with_language() {
    insta::assert_snapshot!(
        html("```go\nfmt.Println(1)\n```"),
        @r#"<pre class="language-go">fmt.Println(1)</pre>"#
    );
}

#[test]
fn unordered_list() {
    insta::assert_snapshot!(html("* a\n* b"), @"<ul><li>a</li><li>b</li></ul>");
}

#[test]
fn ordered_list() {
    insta::assert_snapshot!(
        html("1. one\n2. two"),
        @r#"<ol start="1"><li>one</li><li>two</li></ol>"#
    );
}

#[test]
fn link_paragraph() {
    insta::assert_snapshot!(html("[text](url)"), @r#"<p><a href="url">text</a></p>"#);
}

#[test]
fn unmatched_delimiter_renders_literally() {
    let rendered = convert("**bold");
    assert_eq!(rendered.body, "<p>**bold</p>");
    assert_eq!(
        rendered.diagnostics,
        vec![Diagnostic {
            block: 0,
            error: ParseError::UnmatchedDelimiter {
                delimiter: "**",
                fragment: "**bold".to_string(),
            },
        }]
    );
}

#[test]
fn diagnostics_carry_block_index() {
    let rendered = convert("fine\n\nalso fine\n\nbroken `tick");
    assert_eq!(rendered.diagnostics.len(), 1);
    assert_eq!(rendered.diagnostics[0].block, 2);
    assert_eq!(
        rendered.diagnostics[0].to_string(),
        "block 3: unmatched delimiter ``` in \"broken `tick\""
    );
}

#[test]
fn image_paragraph() {
    insta::assert_snapshot!(
        html("![alt text](img/a.png)"),
        @r#"<p><img alt="alt text" src="img/a.png"></p>"#
    );
}

#[test]
fn escaped_leading_asterisk() {
    insta::assert_snapshot!(
        html("\\* This line starts with an escaped asterisk"),
        @"<p>* This line starts with an escaped asterisk</p>"
    );
}

#[test]
fn code_block_is_escaped_and_verbatim() {
    insta::assert_snapshot!(
        html("```\n<b>*x*</b> \\*\n```"),
        @r"<pre>&lt;b&gt;*x*&lt;/b&gt; \*</pre>"
    );
}

#[test]
fn code_span_is_verbatim() {
    insta::assert_snapshot!(
        html("use `a_b_c` and \\_d\\_"),
        @"<p>use <code>a_b_c</code> and _d_</p>"
    );
}

#[test]
fn blockquote_with_inline_markup() {
    assert_eq!(
        html("> quoted *line*\n> second"),
        "<blockquote>quoted <em>line</em>\nsecond</blockquote>"
    );
}

#[test]
fn horizontal_rule_between_paragraphs() {
    insta::assert_snapshot!(html("above\n\n---\n\nbelow"), @"<p>above</p><hr><p>below</p>");
}

#[test]
fn table_document() {
    insta::assert_snapshot!(
        html("| Fruit | Qty |\n| --- | :---: |\n| **apple** | 3 |"),
        @r#"<div style="overflow-x:auto;"><table><thead><tr><th style="text-align:left">Fruit</th><th style="text-align:center">Qty</th></tr></thead><tbody><tr><td style="text-align:left"><strong>apple</strong></td><td style="text-align:center">3</td></tr></tbody></table></div>"#
    );
}

#[test]
fn mismatched_table_is_a_paragraph() {
    let md = "| A | B |\n| --- | --- |\n| 1 |";
    let rendered = convert(md);
    assert_eq!(rendered.body, format!("<p>{md}</p>"));
    assert!(rendered.diagnostics.is_empty());
}

#[test]
fn nested_emphasis_in_list_items() {
    insta::assert_snapshot!(
        html("- **bold _and italic_**\n- [a **link**](https://example.com)"),
        @r#"<ul><li><strong>bold <em>and italic</em></strong></li><li><a href="https://example.com">a <strong>link</strong></a></li></ul>"#
    );
}

#[test]
fn escapes_inside_code_are_kept() {
    insta::assert_snapshot!(
        html("`a\\*b` \\*\n\n```\nx \\_ y\n```"),
        @r"<p><code>a\*b</code> *</p><pre>x \_ y</pre>"
    );
}

#[test]
fn title_is_first_h1_value() {
    let rendered = convert("## Sub\n\n# Main Page\n\n# Second");
    assert_eq!(rendered.title, "Main Page");
}

#[test]
fn title_skips_h1_with_markup() {
    assert_eq!(convert("# Main *Page*\n\n# Second").title, "Second");
    assert_eq!(convert("# Only *styled*").title, "");
}

#[test]
fn title_is_unescaped() {
    assert_eq!(convert("# 2 \\* 3").title, "2 * 3");
}

#[test]
fn title_is_empty_without_h1() {
    assert_eq!(convert("## Only a subheading").title, "");
    assert_eq!(convert("").title, "");
}

#[test]
fn heading_slug_ignores_markup() {
    insta::assert_snapshot!(
        html("# Hello *World*!"),
        @r#"<h1 id="hello-world">Hello <em>World</em>!</h1>"#
    );
}

#[test]
fn empty_document() {
    let rendered = convert("");
    assert_eq!(rendered, Rendered::default());
}

#[test]
fn unterminated_fence_renders_as_paragraphs() {
    let rendered = convert("```rust\nlet x = 1;\n\nafter");
    assert_eq!(rendered.body, "<p>```rust\nlet x = 1;</p><p>after</p>");
}

#[test]
fn paragraph_running_into_unterminated_fence_stays_whole() {
    let rendered = convert("intro\n```rust\nlet x = 1;");
    assert_eq!(rendered.body, "<p>intro\n```rust\nlet x = 1;</p>");
}

#[test]
fn crlf_document() {
    insta::assert_snapshot!(
        html("# Title\r\n\r\n* a\r\n* b\r\n"),
        @r#"<h1 id="title">Title</h1><ul><li>a</li><li>b</li></ul>"#
    );
}

#[test]
fn multibyte_document() {
    insta::assert_snapshot!(
        html("# Café\n\nnaïve *résumé* ✓"),
        @r#"<h1 id="café">Café</h1><p>naïve <em>résumé</em> ✓</p>"#
    );
}

#[test]
fn full_page_holds_invariants() {
    let md = "\
# Tolkien Fan Club

![JRR Tolkien sitting](/images/tolkien.png)

Here's the deal, **I like Tolkien**.

> \"I am in fact a Hobbit in all but size.\"
>
> -- J.R.R. Tolkien

## Blog posts

- [Why Glorfindel is More Impressive than Legolas](/blog/glorfindel)
- [Why Tom Bombadil Was a Mistake](/blog/tom)

## Reasons I like Tolkien

1. The *world-building* is `unmatched`
2. He invented __languages__

```python
def main():
    print(\"**not bold**\")


main()
```

***

| Book | Year |
| :--- | ---: |
| The Hobbit | 1937 |
";
    let rendered = convert(md);
    assert_eq!(rendered.title, "Tolkien Fan Club");
    assert!(rendered.diagnostics.is_empty(), "{:?}", rendered.diagnostics);
    assert!(rendered.body.contains(
        "<pre class=\"language-python\">def main():\n    print(&#34;**not bold**&#34;)\n\n\nmain()</pre>"
    ));
    assert!(rendered.body.contains("<hr>"));
    assert!(rendered.body.contains("<ol start=\"1\">"));
}
