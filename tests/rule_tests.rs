//! Tests for rule rendering.

use ninjafile::Rule;
use rstest::rstest;

#[rstest]
fn depfile_emits_gcc_deps_marker() {
    let mut rule = Rule::new("cc");
    rule.run("gcc -MMD -MF $out.d -c $in -o $out")
        .depfile("$out.d");
    let expected = concat!(
        "rule cc\n",
        "  command = gcc -MMD -MF $out.d -c $in -o $out\n",
        "  depfile = $out.d\n",
        "  deps = gcc\n",
    );
    assert_eq!(rule.to_string(), expected);
}

#[rstest]
fn all_optional_lines_render_in_fixed_order() {
    let mut rule = Rule::new("regen");
    rule.depfile("build.d")
        .run("./configure.py")
        .pool("console")
        .restat(true)
        .generator(true)
        .description("REGEN $out");
    let expected = concat!(
        "rule regen\n",
        "  command = ./configure.py\n",
        "  description = REGEN $out\n",
        "  restat = 1\n",
        "  generator = 1\n",
        "  pool = console\n",
        "  depfile = build.d\n",
        "  deps = gcc\n",
    );
    assert_eq!(rule.to_string(), expected);
}

#[rstest]
fn unconfigured_rule_renders_empty_command() {
    let rule = Rule::new("noop");
    assert_eq!(rule.to_string(), "rule noop\n  command = \n");
}

#[rstest]
#[case(true, true)]
#[case(false, false)]
fn restat_tracks_the_given_flag(#[case] flag: bool, #[case] expect_line: bool) {
    let mut rule = Rule::new("r");
    rule.run("true").restat(flag);
    assert_eq!(rule.to_string().contains("  restat = 1\n"), expect_line);
}
