//! Tests for build-edge rendering and accumulation semantics.

use ninjafile::Edge;
use rstest::rstest;

#[rstest]
fn single_target_normalises_to_a_list() {
    let edge = Edge::new("all");
    assert_eq!(edge.targets(), ["all"]);
    assert_eq!(edge.to_string(), "build all: phony\n");
}

#[rstest]
fn multiple_targets_join_with_spaces() {
    let mut edge = Edge::new(["out.o", "out.d"]);
    edge.using("cc").from("in.c");
    assert_eq!(edge.to_string(), "build out.o out.d: cc in.c\n");
}

#[rstest]
fn sources_accumulate_across_mixed_call_shapes() {
    let mut edge = Edge::new("ab.o");
    edge.using("cc").from(["a.c"]).from("b.c");
    assert_eq!(edge.to_string(), "build ab.o: cc a.c b.c\n");
}

#[rstest]
fn dependency_classes_render_with_their_separators() {
    let mut edge = Edge::new("app");
    edge.using("link")
        .from(["main.o", "util.o"])
        .need("libfoo.a")
        .need(["libbar.a"])
        .after("generated_headers");
    assert_eq!(
        edge.to_string(),
        "build app: link main.o util.o | libfoo.a libbar.a || generated_headers\n",
    );
}

#[rstest]
fn unset_clauses_are_omitted_entirely() {
    let mut edge = Edge::new("stamp");
    edge.using("touch").after("app");
    assert_eq!(edge.to_string(), "build stamp: touch || app\n");
}

#[rstest]
fn variables_and_pool_render_indented_after_the_header() {
    let mut edge = Edge::new("out.o");
    edge.using("cc")
        .from("in.c")
        .assign("cflags", "-O2")
        .pool("highmem");
    let expected = concat!(
        "build out.o: cc in.c\n",
        "  cflags = -O2\n",
        "  pool = highmem\n",
    );
    assert_eq!(edge.to_string(), expected);
}

#[rstest]
fn reassigning_a_variable_keeps_only_the_last_value() {
    let mut edge = Edge::new("out.o");
    edge.using("cc").assign("cflags", "-O0").assign("cflags", "-O2");
    assert_eq!(edge.to_string(), "build out.o: cc\n  cflags = -O2\n");
}

#[rstest]
fn variable_render_order_is_insertion_order() {
    let mut edge = Edge::new("out.o");
    edge.using("cc")
        .assign("zeta", "1")
        .assign("alpha", "2")
        .assign("mid", "3");
    let expected = concat!(
        "build out.o: cc\n",
        "  zeta = 1\n",
        "  alpha = 2\n",
        "  mid = 3\n",
    );
    assert_eq!(edge.to_string(), expected);
}
