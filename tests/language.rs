use rpncalc::{
    error::ErrorKind,
    program::{Outcome, run_file, run_source},
};
use walkdir::WalkDir;

#[test]
fn demo_programs_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("demos").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "txt"))
    {
        count += 1;
        let path = entry.path();
        let report = run_file(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        if let Some(diagnostic) = report.diagnostics().next() {
            panic!("Demo {path:?} failed:\n{diagnostic}");
        }
    }

    assert!(count > 0, "No demo programs found in demos/");
}

fn values(src: &str) -> Vec<f64> {
    let report = run_source("test.txt", src);
    if let Some(diagnostic) = report.diagnostics().next() {
        panic!("Script failed:\n{diagnostic}");
    }
    report.values().to_vec()
}

fn failure_kinds(src: &str) -> Vec<(usize, ErrorKind)> {
    run_source("test.txt", src).diagnostics()
                               .map(|d| (d.line_number, d.kind))
                               .collect()
}

#[test]
fn basic_arithmetic() {
    assert_eq!(values("(1 2 +)\n(8 5 -)\n(7 9 *)\n(10 4 |)"),
               [3.0, 3.0, 63.0, 2.5]);
}

#[test]
fn integer_operators_and_power() {
    assert_eq!(values("(7 2 /)\n(7 2 %)\n(2 3 ^)\n(2 0 ^)\n(1.5 2 ^)"),
               [3.0, 1.0, 8.0, 1.0, 2.25]);
}

#[test]
fn numeric_operator_failures() {
    assert_eq!(failure_kinds("(1 0 |)\n(2 -1 ^)\n(7 0 /)\n(7.5 2 %)\n(2 0.5 ^)"),
               [(1, ErrorKind::DivisionByZero),
                (2, ErrorKind::TypeMismatch),
                (3, ErrorKind::DivisionByZero),
                (4, ErrorKind::TypeMismatch),
                (5, ErrorKind::TypeMismatch)]);
}

#[test]
fn nested_groups_keep_operand_order() {
    assert_eq!(values("((10 4 -) 2 -)\n(10 (4 2 -) -)\n((2 3 ^) 2 ^)\n(2 (3 2 ^) ^)"),
               [4.0, 8.0, 64.0, 512.0]);
}

#[test]
fn memory_round_trip() {
    assert_eq!(values("(5 MEM)\n(MEM)"), [5.0, 5.0]);
    assert_eq!(values("(MEM)"), [0.0]);
    assert_eq!(values("((2 3 +) MEM)\n((MEM) (MEM) *)"), [5.0, 25.0]);
}

#[test]
fn history_lookup_counts_backward() {
    assert_eq!(values("10\n20\n30\n(0 RES)\n(3 RES)"), [10.0, 20.0, 30.0, 30.0, 10.0]);
    assert_eq!(failure_kinds("10\n20\n(2 RES)\n(-1 RES)"),
               [(3, ErrorKind::HistoryUnderflow), (4, ErrorKind::NegativeIndex)]);
    assert_eq!(failure_kinds("1\n(-100000000000000000000 RES)\n(100000000000000000000 RES)\n((10 400 ^) RES)"),
               [(2, ErrorKind::NegativeIndex),
                (3, ErrorKind::HistoryUnderflow),
                (4, ErrorKind::HistoryUnderflow)]);
}

#[test]
fn failed_and_valueless_lines_are_not_recorded() {
    let report = run_source("test.txt", "1\n(1 0 |)\n(SE 0 ENTAO 5)\n2\n(1 RES)");

    assert_eq!(report.values(), [1.0, 2.0, 1.0]);
    assert_eq!(report.lines[2].outcome, Outcome::NoValue);
}

#[test]
fn conditionals() {
    assert_eq!(values("(SE 0 ENTAO 1 SENAO 2)\n(SE 1 ENTAO 1)\n(SE -0.5 ENTAO 7 SENAO 8)"),
               [2.0, 1.0, 7.0]);
    assert_eq!(values("(SE ((MEM) 0 +) ENTAO (1 RES) SENAO (SE 1 ENTAO 9))"), [9.0]);
}

#[test]
fn loops_do_not_bind_their_variable() {
    assert_eq!(values("(PARA 1 DE 1 ATE 3 PASSO 1 (1 1 +))"), [2.0]);
    assert_eq!(values("(PARA 1 DE 1 ATE 4 (((MEM) 1 +) MEM))\n(MEM)"), [4.0, 4.0]);
    assert_eq!(values("(PARA 7 DE 5 ATE 1 PASSO -2 (((MEM) 1 +) MEM))"), [3.0]);
}

#[test]
fn loop_steps_are_checked() {
    assert_eq!(failure_kinds("(PARA 1 DE 1 ATE 3 PASSO 0 1)\n(PARA 1 DE 3 ATE 1 1)\n(PARA 1 DE 1 ATE 3 PASSO -1 1)"),
               [(1, ErrorKind::InvalidStep),
                (2, ErrorKind::InvalidStep),
                (3, ErrorKind::InvalidStep)]);
}

#[test]
fn errors_do_not_stop_the_file() {
    let report = run_source("test.txt", "(1 2 .)\n(1 2 +)\n(1 2 @)\n(3 4 *)");

    assert_eq!(report.values(), [3.0, 12.0]);
    let kinds: Vec<_> = report.diagnostics().map(|d| d.kind).collect();
    assert_eq!(kinds, [ErrorKind::Syntax, ErrorKind::Lex]);
}

#[test]
fn comments_and_blank_lines_are_skipped() {
    let report = run_source("test.txt", "# header\n\n   \n(1 1 +)\n  # indented comment\n(0 RES)");

    assert_eq!(report.lines.len(), 2);
    assert_eq!(report.lines[1].line_number, 6);
    assert_eq!(report.values(), [2.0, 2.0]);
}

#[test]
fn keywords_are_case_insensitive() {
    assert_eq!(values("(4 mem)\n(Mem)\n(se 1 entao (0 res) senao 0)"), [4.0, 4.0, 4.0]);
}

#[test]
fn deeply_nested_line_fails_alone() {
    let source = format!("(1 2 +)\n{}1\n(3 4 +)\n", "(".repeat(100_000));
    let report = run_source("deep.txt", &source);

    assert_eq!(report.values(), [3.0, 7.0]);
    assert_eq!(failure_kinds(&source), [(2, ErrorKind::Syntax)]);
}

#[test]
fn nesting_at_the_limit_evaluates() {
    let source = (0..256).fold("0".to_string(), |inner, _| format!("({inner} 1 +)"));
    assert_eq!(values(&source), [256.0]);
}
