// rok-core - Prelude integration tests
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Integration tests for the functions defined in the Rok prelude.

mod common;

use common::*;

#[test]
fn test_prelude_loads_cleanly() {
    let session = Session::new().expect("prelude should load");
    for name in ["nil", "fun", "map", "filter", "foldl", "select", "case"] {
        assert!(
            session.env().is_defined(&Symbol::new(name)),
            "prelude should define '{}'",
            name
        );
    }
}

#[test]
fn test_fun_defines_global_function() {
    assert_eval!("(fun {add-mul x y} {+ x (* x y)}) (add-mul 10 20)", "210");
    assert_eval!("(fun {add-mul x y} {+ x (* x y)}) ((add-mul 10) 20)", "210");
}

#[test]
fn test_unpack_and_pack() {
    assert_eval!("(unpack + {5 6 7})", "18");
    assert_eval!("(curry * {2 3 4})", "24");
    assert_eval!("(pack head 5 6 7)", "{5}");
    assert_eval!("(uncurry tail 5 6 7)", "{6 7}");
}

#[test]
fn test_do_yields_last() {
    assert_eval!("(do (def {q} 4) (+ q 1))", "5");
}

#[test]
fn test_let_opens_scope() {
    let session = Session::new().expect("prelude should load");
    assert_eq!(
        eval_all("(let {do (= {z} 100) z})", &session),
        Value::number(100)
    );
    assert_eq!(
        eval_all("z", &session),
        Value::error("Unbound Symbol 'z'")
    );
}

#[test]
fn test_logic() {
    assert_eval!("(not true)", "false");
    assert_eval!("(and true false)", "false");
    assert_eval!("(and true true)", "true");
    assert_eval!("(or false true)", "true");
    assert_eval!("(or false false)", "false");
}

#[test]
fn test_combinators() {
    assert_eval!("(flip - 1 10)", "9");
    assert_eval!("((comp (\\ {x} {* x 2}) (\\ {x} {+ x 1})) 3)", "8");
}

#[test]
fn test_list_access() {
    assert_eval!("(fst {1 2 3})", "1");
    assert_eval!("(snd {1 2 3})", "2");
    assert_eval!("(trd {1 2 3})", "3");
    assert_eval!("(nth 1 {5 6 7})", "6");
    assert_eval!("(last {5 6 7})", "7");
}

#[test]
fn test_list_slicing() {
    assert_eval!("(take 2 {1 2 3})", "{1 2}");
    assert_eval!("(drop 2 {1 2 3})", "{3}");
    assert_eval!("(split 1 {1 2 3})", "{{1} {2 3}}");
    assert_eval!("(elem 2 {1 2 3})", "true");
    assert_eval!("(elem 9 {1 2 3})", "false");
    assert_eval!("(reverse {1 2 3})", "{3 2 1}");
}

#[test]
fn test_higher_order() {
    assert_eval!("(map (\\ {x} {* x 2}) {1 2 3})", "{2 4 6}");
    assert_eval!("(map - {5 6})", "{-5 -6}");
    assert_eval!("(filter (\\ {x} {> x 1}) {5 0 2 1})", "{5 2}");
    assert_eval!("(foldl + 0 {1 2 3})", "6");
    assert_eval!("(sum {1 2 3 4})", "10");
    assert_eval!("(product {1 2 3 4})", "24");
}

#[test]
fn test_map_with_closure_over_local() {
    assert_eval!(
        "(fun {scale n l} {map (\\ {x} {* x n}) l}) (scale 3 {1 2})",
        "{3 6}"
    );
}

#[test]
fn test_select() {
    let program = "
        (fun {sign x} {
          select
            (list (< x 0) -1)
            (list (> x 0) 1)
            (list otherwise 0)
        })
    ";
    let session = Session::new().expect("prelude should load");
    eval_all(program, &session);
    assert_eq!(eval_all("(sign -5)", &session), Value::number(-1));
    assert_eq!(eval_all("(sign 5)", &session), Value::number(1));
    assert_eq!(eval_all("(sign 0)", &session), Value::number(0));
    assert_eq!(
        eval_all("(select (list false 1))", &session),
        Value::error("No Selection Found")
    );
}

#[test]
fn test_case() {
    let program = "
        (fun {day n} {
          case n
            {0 \"Monday\"}
            {1 \"Tuesday\"}
        })
    ";
    let session = Session::new().expect("prelude should load");
    eval_all(program, &session);
    assert_eq!(eval_all("(day 1)", &session), Value::string("Tuesday"));
    assert_eq!(
        eval_all("(day 5)", &session),
        Value::error("No Case Found")
    );
}

#[test]
fn test_bare_session_has_no_prelude() {
    assert_eq!(eval_str("nil"), Value::error("Unbound Symbol 'nil'"));
}
