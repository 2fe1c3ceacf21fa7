use tuplegen_core::{ArityRange, EmitOptions, GenError, SplitImpl, emit};

fn emit_default() -> String {
    let mut buf = Vec::new();
    emit(&mut buf, &ArityRange::default(), &EmitOptions::default()).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn test_full_run_emits_fifteen_blocks() {
    let text = emit_default();
    let blocks: Vec<&str> = text.split_terminator("\n\n").collect();
    assert_eq!(blocks.len(), 15);
    for (block, arity) in blocks.iter().zip(2..=16) {
        let header = block.lines().next().unwrap();
        assert!(
            header.ends_with(&format!("Split for ({}) {{", letters(arity))),
            "unexpected header for arity {arity}: {header}"
        );
    }
}

#[test]
fn test_halves_reassemble_for_every_arity() {
    for arity in 2..=16 {
        let imp = SplitImpl::new(arity).unwrap();
        assert_eq!(imp.left().len(), arity / 2);
        assert_eq!(imp.right().len(), arity - arity / 2);
        assert_eq!([imp.left(), imp.right()].concat(), imp.symbols());
    }
}

#[test]
fn test_arity_sixteen_block() {
    let rendered = SplitImpl::new(16).unwrap().render("Split");
    assert!(rendered.contains("    type Left = (A, B, C, D, E, F, G, H);\n"));
    assert!(rendered.contains("    type Right = (I, J, K, L, M, N, O, P);\n"));
    assert!(rendered.contains("                ((a, b, c, d, e, f, g, h),\n"));
    assert!(rendered.contains("                 (i, j, k, l, m, n, o, p))\n"));
}

#[test]
fn test_arity_three_single_element_left() {
    let rendered = SplitImpl::new(3).unwrap().render("Split");
    assert!(rendered.contains("    type Left = (A,);\n"));
    assert!(rendered.contains("    type Right = (B, C);\n"));
    assert!(rendered.contains("                ((a,),\n"));
}

#[test]
fn test_narrow_range() {
    let mut buf = Vec::new();
    let n = emit(
        &mut buf,
        &ArityRange::new(4, 4).unwrap(),
        &EmitOptions::default(),
    )
    .unwrap();
    assert_eq!(n, 1);
    let text = String::from_utf8(buf).unwrap();
    assert!(text.starts_with("impl<A, B, C, D> Split for (A, B, C, D) {"));
}

#[test]
fn test_full_alphabet_range() {
    let mut buf = Vec::new();
    let n = emit(
        &mut buf,
        &ArityRange::new(2, 26).unwrap(),
        &EmitOptions::default(),
    )
    .unwrap();
    assert_eq!(n, 25);
    let text = String::from_utf8(buf).unwrap();
    assert!(text.contains("type Right = (M, N, O, P, Q, R, S, T, U, V, W, X, Y, Z);"));
}

#[test]
fn test_symbol_overflow_is_an_error() {
    assert!(matches!(
        SplitImpl::new(27),
        Err(GenError::SymbolOutOfRange { offset: 26 })
    ));
}

#[test]
fn test_write_failure_surfaces_as_io_error() {
    struct Broken;
    impl std::io::Write for Broken {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("sink closed"))
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let err = emit(&mut Broken, &ArityRange::default(), &EmitOptions::default()).unwrap_err();
    assert!(matches!(err, GenError::Io(_)));
    assert!(err.to_string().contains("sink closed"));
}

fn letters(arity: usize) -> String {
    (b'A'..)
        .take(arity)
        .map(|b| char::from(b).to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
