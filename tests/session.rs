use rpncalc::{
    error::{ErrorKind, LineError, RuntimeError},
    evaluate_line,
    interpreter::session::Session,
    program::{Outcome, run_source},
};

#[test]
fn new_session_is_empty() {
    let session = Session::new();
    assert_eq!(session.memory(), 0.0);
    assert!(session.history().is_empty());
    assert_eq!(session, Session::default());
}

#[test]
fn reset_clears_memory_and_history() {
    let mut session = Session::new();
    session.evaluate_line("(9 MEM)", 1).unwrap();
    session.evaluate_line("(1 2 +)", 2).unwrap();

    session.reset();
    assert_eq!(session, Session::new());
    assert_eq!(session.evaluate_line("(0 RES)", 1),
               Err(LineError::Runtime(RuntimeError::HistoryUnderflow { index: 0, available: 0 })));
}

#[test]
fn failed_line_leaves_memory_untouched() {
    let mut session = Session::new();
    session.evaluate_line("(2 MEM)", 1).unwrap();

    assert!(session.evaluate_line("((5 MEM) (1 0 |) +)", 2).is_err());
    assert_eq!(session.memory(), 2.0);
    assert_eq!(session.history(), [2.0]);

    // Stores made by a loop are discarded when a later operand fails.
    assert!(session.evaluate_line("((PARA 1 DE 1 ATE 3 (((MEM) 1 -) MEM)) (1 0 %) +)", 3)
                   .is_err());
    assert_eq!(session.memory(), 2.0);
}

#[test]
fn valueless_line_still_commits_memory() {
    let mut session = Session::new();
    session.evaluate_line("(7 MEM)", 1).unwrap();

    assert_eq!(session.evaluate_line("(SE 0 ENTAO 1)", 2).unwrap(), None);
    assert_eq!(session.history(), [7.0]);
    assert_eq!(session.memory(), 7.0);
}

#[test]
fn sessions_are_independent() {
    let first = run_source("a.txt", "(5 MEM)\n(1 2 +)\n");
    let second = run_source("b.txt", "(MEM)\n(0 RES)\n");

    assert_eq!(first.session.memory(), 5.0);
    assert_eq!(second.values(), [0.0, 0.0]);
}

#[test]
fn rerunning_a_file_repeats_its_history() {
    let source = "(3 MEM)\n(PARA 1 DE 1 ATE 4 (((MEM) 2 *) MEM))\n((0 RES) (MEM) -)\n(1 0 /)\n(1 RES)\n";
    let first = run_source("same.txt", source);
    let second = run_source("same.txt", source);

    assert_eq!(first.values(), [3.0, 48.0, 0.0, 48.0]);
    assert_eq!(first.values(), second.values());
    assert_eq!(first, second);
}

#[test]
fn diagnostics_carry_location_and_kind() {
    let report = run_source("prog.txt", "(1 2 +)\n\n   (1 0 /)  \n(1 2 ?)\n(-1 RES)\n(1 10 RES)\n");
    let found: Vec<_> = report.diagnostics()
                              .map(|d| (d.line_number, d.kind, d.source_text.as_str()))
                              .collect();

    assert_eq!(found,
               [(3, ErrorKind::DivisionByZero, "(1 0 /)"),
                (4, ErrorKind::Lex, "(1 2 ?)"),
                (5, ErrorKind::NegativeIndex, "(-1 RES)"),
                (6, ErrorKind::Syntax, "(1 10 RES)")]);
    assert!(!report.is_clean());
    assert!(report.diagnostics().all(|d| d.file == "prog.txt"));
}

#[test]
fn diagnostic_report_layout() {
    let mut session = Session::new();
    let diagnostic = evaluate_line("calc.txt", 12, "  (2 0.5 %)", &mut session).unwrap_err();

    assert_eq!(diagnostic.kind, ErrorKind::TypeMismatch);
    let text = diagnostic.to_string();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines[0], "=== Error Report ===");
    assert_eq!(lines[1], "File:  calc.txt");
    assert_eq!(lines[2], "Line:  12");
    assert_eq!(lines[3], "Code:  (2 0.5 %)");
    assert!(lines[4].starts_with("Error: "));
    assert_eq!(lines[5], "====================");
}

#[test]
fn history_underflow_reports_available_entries() {
    let mut session = Session::new();
    session.evaluate_line("1", 1).unwrap();
    session.evaluate_line("2", 2).unwrap();

    assert_eq!(session.evaluate_line("(2 RES)", 3),
               Err(LineError::Runtime(RuntimeError::HistoryUnderflow { index: 2, available: 2 })));
}

#[test]
fn outcomes_follow_file_order() {
    let report = run_source("x.txt", "# header\n(SE 0 ENTAO 1)\n(2 2 +)\n(2 2\n");
    let numbers: Vec<_> = report.lines.iter().map(|l| l.line_number).collect();

    assert_eq!(numbers, [2, 3, 4]);
    assert_eq!(report.lines[0].outcome, Outcome::NoValue);
    assert_eq!(report.lines[1].outcome, Outcome::Value(4.0));
    assert!(matches!(&report.lines[2].outcome, Outcome::Failed(d) if d.kind == ErrorKind::Syntax));
}
