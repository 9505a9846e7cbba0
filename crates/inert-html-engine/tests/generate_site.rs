use std::fs;
use std::path::Path;

use inert_html_engine::generator::{
    DenyOverwrite, GenerateOptions, GenerateSummary, Generator, OverwritePolicy, Target,
    Template, resolve_target,
};
use pretty_assertions::assert_eq;

fn write(root: &Path, name: &str, content: &str) {
    let path = root.join(name);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn site() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let content = dir.path().join("content");
    write(&content, "index.md", "---\nlayout: home\n---\n# Welcome\n\nSee [about](/about/).");
    write(&content, "about.md", "# About us\n\nWe like *small* sites.");
    write(&content, "blog/first.md", "# First post\n\n**hello**");
    write(&content, "static/site.css", "body { margin: 0 }");
    write(
        dir.path(),
        "template.html",
        "<!DOCTYPE html><html><head><title>{{ Title }} | Site</title></head><body><main>{{ Content }}</main></body></html>",
    );
    dir
}

#[test]
fn generates_a_whole_site() {
    let dir = site();
    let content = dir.path().join("content");
    let public = dir.path().join("public");
    let template = Template::load(&dir.path().join("template.html")).unwrap();

    let target = resolve_target(&content, Some(&public)).unwrap();
    assert_eq!(
        target,
        Target::Directory {
            src: content.clone(),
            dest: public.clone(),
        }
    );

    let options = GenerateOptions {
        recursive: true,
        pages_as_dirs: true,
        copy_assets: true,
        ..GenerateOptions::default()
    };
    let summary = Generator::new(template, options, DenyOverwrite)
        .generate(&target)
        .unwrap();

    assert_eq!(
        summary,
        GenerateSummary {
            written: 3,
            skipped: 0,
            copied: 1,
        }
    );

    let index = fs::read_to_string(public.join("index.html")).unwrap();
    insta::assert_snapshot!(
        index,
        @r#"<!DOCTYPE html><html><head><title>Welcome | Site</title></head><body><main><h1 id="welcome">Welcome</h1><p>See <a href="/about/">about</a>.</p></main></body></html>"#
    );

    let about = fs::read_to_string(public.join("about/index.html")).unwrap();
    assert!(about.contains("<title>About us | Site</title>"));
    assert!(public.join("blog/first/index.html").exists());
    assert_eq!(
        fs::read_to_string(public.join("static/site.css")).unwrap(),
        "body { margin: 0 }"
    );
}

#[test]
fn second_run_with_no_clobber_skips_everything() {
    let dir = site();
    let content = dir.path().join("content");
    let target = resolve_target(&content, None).unwrap();

    let first = Generator::new(Template::default(), GenerateOptions::default(), DenyOverwrite)
        .generate(&target)
        .unwrap();
    assert_eq!(first.written, 2);

    let options = GenerateOptions {
        overwrite: OverwritePolicy::NoClobber,
        ..GenerateOptions::default()
    };
    let second = Generator::new(Template::default(), options, DenyOverwrite)
        .generate(&target)
        .unwrap();
    assert_eq!(
        second,
        GenerateSummary {
            written: 0,
            skipped: 2,
            copied: 0,
        }
    );
}

#[test]
fn single_page_into_output_directory() {
    let dir = site();
    let src = dir.path().join("content/about.md");
    let out = dir.path().join("out");

    let target = resolve_target(&src, Some(&out)).unwrap();
    Generator::new(Template::default(), GenerateOptions::default(), DenyOverwrite)
        .generate(&target)
        .unwrap();

    let page = fs::read_to_string(out.join("about.html")).unwrap();
    assert!(page.contains("<title> About us </title>"));
    assert!(page.contains(r#"<h1 id="about-us">About us</h1><p>We like <em>small</em> sites.</p>"#));
}
