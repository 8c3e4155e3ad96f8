use dep_compress::document::{parse_sentences, render_sentences, ConllError};

const TWO_SENTENCES: &str = "\
1\tCats\tcat\tNOUN\t_\tNumber=Plur\t2\tnsubj\t_\t_
2\tchase\tchase\tVERB\t_\t_\t0\troot\t_\t_
3\tmice\tmouse\tNOUN\t_\tNumber=Plur\t2\tdobj\t_\t_
4\t.\t.\tPUNCT\t_\t_\t2\tpunct\t_\t_

1\tDogs\tdog\tNOUN\t_\t_\t2\tnsubj\t_\t_
2\tbark\tbark\tVERB\t_\t_\t0\troot\t_\t_
";

#[test]
fn parses_fields_into_tokens() {
    let sentences = parse_sentences(TWO_SENTENCES).unwrap();
    assert_eq!(sentences.len(), 2);

    let first = &sentences[0];
    assert_eq!(first.len(), 4);
    let mice = &first.tokens()[2];
    assert_eq!(mice.idx, 3);
    assert_eq!(mice.form, "mice");
    assert_eq!(mice.lemma, "mouse");
    assert_eq!(mice.pos, "NOUN");
    assert_eq!(mice.feats, "Number=Plur");
    assert_eq!(mice.head, 2);
    assert_eq!(mice.rel, "dobj");
    assert_eq!(mice.tfidf, None);

    // No trailing blank line: the last sentence is still closed.
    assert_eq!(sentences[1].surface(), "Dogs bark");
}

#[test]
fn skips_comments_and_repeated_blank_lines() {
    let input = concat!(
        "# sent_id = 1\n###C:NEW DOCUMENT:a.txt\n",
        "1\tHi\thi\tINTJ\t_\t_\t0\troot\t_\t_\n\n\n\n",
    );
    let sentences = parse_sentences(input).unwrap();
    assert_eq!(sentences.len(), 1);
    assert_eq!(sentences[0].surface(), "Hi");
}

#[test]
fn accepts_crlf_line_endings() {
    let input = concat!(
        "1\tHi\thi\tINTJ\t_\t_\t0\troot\t_\t_\r\n\r\n",
        "1\tYo\tyo\tINTJ\t_\t_\t0\troot\t_\t_\r\n",
    );
    let sentences = parse_sentences(input).unwrap();
    assert_eq!(sentences.len(), 2);
    assert_eq!(sentences[1].tokens()[0].rel, "root");
}

#[test]
fn wrong_field_count_names_the_line() {
    let input = "1\tCats\tcat\tNOUN\t_\t_\t2\tnsubj\t_\t_\n2\tchase\tchase\tVERB\t0\troot\n";
    let err = parse_sentences(input).unwrap_err();
    assert_eq!(err, ConllError::FieldCount { line: 2, found: 6 });
    assert!(err.to_string().starts_with("line 2:"));
}

#[test]
fn non_numeric_head_is_rejected() {
    let input = "1\tCats\tcat\tNOUN\t_\t_\tx\tnsubj\t_\t_\n";
    let err = parse_sentences(input).unwrap_err();
    assert!(matches!(
        err,
        ConllError::InvalidInteger { line: 1, field: "head", .. }
    ));
}

#[test]
fn id_zero_is_reserved() {
    let input = "0\tROOT\tROOT\t_\t_\t_\t0\troot\t_\t_\n";
    assert_eq!(
        parse_sentences(input).unwrap_err(),
        ConllError::ReservedId { line: 1 }
    );
}

#[test]
fn heads_must_stay_inside_the_sentence() {
    // Head 3 exists only in the next sentence.
    let input = "\
1\tA\ta\tX\t_\t_\t0\troot\t_\t_
2\tB\tb\tX\t_\t_\t3\tdep\t_\t_

1\tC\tc\tX\t_\t_\t0\troot\t_\t_
2\tD\td\tX\t_\t_\t1\tdep\t_\t_
3\tE\te\tX\t_\t_\t1\tdep\t_\t_
";
    assert_eq!(
        parse_sentences(input).unwrap_err(),
        ConllError::DanglingHead { line: 2, head: 3 }
    );
}

#[test]
fn duplicate_ids_are_rejected() {
    let input = "1\tA\ta\tX\t_\t_\t0\troot\t_\t_\n1\tB\tb\tX\t_\t_\t1\tdep\t_\t_\n";
    assert_eq!(
        parse_sentences(input).unwrap_err(),
        ConllError::DuplicateId { line: 2, idx: 1 }
    );
}

#[test]
fn rendering_reads_back_to_the_same_sentences() {
    let sentences = parse_sentences(TWO_SENTENCES).unwrap();
    let rendered = render_sentences(&sentences);

    assert!(rendered.ends_with("\n\n"));
    assert_eq!(parse_sentences(&rendered).unwrap(), sentences);
}
