//! Slug Integration Tests
//!
//! Tests for title to slug conversion rules and their ordering.

use pretalx_md::slugify;

#[test]
fn test_spanish_question_title() {
    // "¿" is not stripped by any rule
    assert_eq!(
        slugify("¿Qué es Python? (parte 1/2)"),
        "¿que-es-python-parte-1-2"
    );
}

#[test]
fn test_slug_is_deterministic() {
    let title = "Tipagem estática em Python: mypy, pyright & cia.";
    assert_eq!(slugify(title), slugify(title));
}

#[test]
fn test_percent_becomes_por_cento() {
    assert_eq!(slugify("Python 100% tipado"), "python-100-por-cento-tipado");
    assert_eq!(slugify("50%"), "50-por-cento-");

    let slug = slugify("10% ou 20%?");
    assert_eq!(slug.matches("-por-cento-").count(), 2);
}

#[test]
fn test_dot_becomes_dot_token() {
    assert_eq!(slugify("Node.js e Deno"), "node-dot-js-e-deno");
    assert_eq!(slugify("Python 3.12."), "python-3-dot-12-dot-");
}

#[test]
fn test_dot_before_space_collapses_once() {
    // "a.-b" -> "a-dot--b" -> "a-dot-b"
    assert_eq!(slugify("a. b"), "a-dot-b");
}

#[test]
fn test_punctuation_is_stripped() {
    assert_eq!(slugify("Let's go: Rust!"), "lets-go-rust");
    assert_eq!(slugify("C++ & C#"), "c-c");
    assert_eq!(slugify("[WIP] {draft} = *ok* $"), "wip-draft-ok-");
}

#[test]
fn test_double_hyphen_collapse_is_single_pass() {
    // "a---b" only loses one hyphen
    assert_eq!(slugify("a/ /b"), "a--b");
}

#[test]
fn test_no_trimming() {
    assert_eq!(slugify(" Rust "), "-rust-");
}

#[test]
fn test_portuguese_accents() {
    assert_eq!(
        slugify("Programação funcional é ótima, não é?"),
        "programacao-funcional-e-otima-nao-e"
    );
}
