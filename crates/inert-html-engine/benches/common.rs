// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **bold**, *italic* and `code` plus a [link](https://example.com).\n\n- Bullet point\n- Another *item*\n\n1. First\n2. Second\n\n> Quoted __text__\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n| Name | Qty |\n| :--- | ---: |\n| apple | 3 |\n\n---\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_inline_heavy(paragraphs: usize) -> String {
    let mut content = String::new();

    for n in 0..paragraphs {
        content.push_str(&format!(
            "Paragraph {n} has **bold with *nested italic* inside**, an ![image](img/{n}.png), \
             escaped \\*stars\\* and `inline code` and _more_ __text__.\n\n"
        ));
    }

    content
}
