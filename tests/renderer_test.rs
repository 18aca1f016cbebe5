use stencil::error::Error;
use stencil::renderer::{MiniJinjaRenderer, TemplateRenderer};
use stencil::resolver::Bindings;

fn bindings(pairs: &[(&str, &str)]) -> Bindings {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

#[test]
fn test_substitutes_every_occurrence() {
    let engine = MiniJinjaRenderer::new();
    let rendered = engine
        .render("{{.Foo}}/{{.Foo}}/{{.Foo}}.txt", &bindings(&[("Foo", "Bar")]))
        .unwrap();
    assert_eq!(rendered, "Bar/Bar/Bar.txt");
}

#[test]
fn test_spacing_variants() {
    let engine = MiniJinjaRenderer::new();
    let vars = bindings(&[("Name", "demo")]);
    assert_eq!(engine.render("{{ .Name }}", &vars).unwrap(), "demo");
    assert_eq!(engine.render("{{.Name}}", &vars).unwrap(), "demo");
    assert_eq!(engine.render("a {{- .Name }}", &vars).unwrap(), "ademo");
}

#[test]
fn test_unbound_markers_are_preserved() {
    let engine = MiniJinjaRenderer::new();
    let rendered = engine
        .render("{{ .Foo }} and {{ .Missing }} and {{.Other | upper}}", &bindings(&[("Foo", "Bar")]))
        .unwrap();
    assert_eq!(rendered, "Bar and {{ .Missing }} and {{.Other | upper}}");
}

#[test]
fn test_empty_bindings_is_identity() {
    let engine = MiniJinjaRenderer::new();
    let template = "name: {{ .ProjectName }}\npath: {{.ProjectName}}/src\n";
    assert_eq!(engine.render(template, &Bindings::new()).unwrap(), template);
}

#[test]
fn test_plain_text_is_untouched() {
    let engine = MiniJinjaRenderer::new();
    let template = "fn main() { println!(\"{}\", 1); }\necho ${#items[@]}\n";
    assert_eq!(engine.render(template, &bindings(&[("A", "b")])).unwrap(), template);
}

#[test]
fn test_case_filters() {
    let engine = MiniJinjaRenderer::new();
    let vars = bindings(&[("Name", "HelloWorld")]);
    assert_eq!(engine.render("{{ .Name | snake_case }}", &vars).unwrap(), "hello_world");
    assert_eq!(engine.render("{{ .Name | kebab_case }}", &vars).unwrap(), "hello-world");
    assert_eq!(engine.render("{{ .Name | upper }}", &vars).unwrap(), "HELLOWORLD");
}

#[test]
fn test_block_syntax_is_plain_text() {
    let engine = MiniJinjaRenderer::new();
    for template in [
        "{% load static %}\n<p>{{ .Missing }}</p>\n",
        "{% include header.html %}\n{{ .Missing }}\n",
        "printf(\"{%d}\", n); // {{ .Missing }}\n",
        "{% if Docker %}FROM rust{% endif %}\n",
    ] {
        assert_eq!(engine.render(template, &Bindings::new()).unwrap(), template);
    }
}

#[test]
fn test_block_syntax_next_to_bound_markers() {
    let engine = MiniJinjaRenderer::new();
    let rendered = engine
        .render("{% block title %}{{ .Name }}{% endblock %}", &bindings(&[("Name", "demo")]))
        .unwrap();
    assert_eq!(rendered, "{% block title %}demo{% endblock %}");
}

#[test]
fn test_names_starting_with_digit_are_preserved() {
    let engine = MiniJinjaRenderer::new();
    let template = "{{ .1st }} and {{.2nd | upper}}\n";
    assert_eq!(engine.render(template, &Bindings::new()).unwrap(), template);
    assert_eq!(engine.render(template, &bindings(&[("1st", "first")])).unwrap(), template);
}

#[test]
fn test_keeps_trailing_newline() {
    let engine = MiniJinjaRenderer::new();
    assert_eq!(engine.render("{{ .A }}\n", &bindings(&[("A", "x")])).unwrap(), "x\n");
}

#[test]
fn test_syntax_error() {
    let engine = MiniJinjaRenderer::new();
    let result = engine.render("{{ .Name + }}", &bindings(&[("Name", "x")]));
    assert!(matches!(result, Err(Error::MinijinjaError(_))));
}

#[test]
fn test_undefined_outside_markers_is_error() {
    let engine = MiniJinjaRenderer::new();
    let result = engine.render("{{ secrets.token }}", &Bindings::new());
    assert!(matches!(result, Err(Error::MinijinjaError(_))));
}
