use std::fs::File;
use std::io::Write;
use std::path::Path;

use flate2::write::GzEncoder;
use jmconv::corpus::KanjiCorpus;
use jmconv::error::{Error, MalformedReason};
use jmconv::io::{Compression, Source};
use jmconv::pipelines::{KanjiSummary, Kanjidic, Options, Pipeline};
use serde_json::json;

const HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE kanjidic2 [
<!ELEMENT kanjidic2 (header,character*)>
]>
<kanjidic2>
<header><file_version>4</file_version><database_version>2024-001</database_version></header>
"#;

const NICHI: &str = r#"<character>
<literal>日</literal>
<codepoint><cp_value cp_type="ucs">65e5</cp_value></codepoint>
<radical><rad_value rad_type="classical">72</rad_value></radical>
<misc><grade>1</grade><stroke_count>4</stroke_count><freq>1</freq></misc>
<reading_meaning>
<rmgroup>
<reading r_type="pinyin">ri4</reading>
<reading r_type="ja_on">ニチ</reading>
<reading r_type="ja_kun">ひ</reading>
<meaning>day</meaning>
<meaning m_lang="fr">jour</meaning>
</rmgroup>
</reading_meaning>
</character>
"#;

const WATER_GRADE: &str = r#"<character>
<literal>水</literal>
<misc><grade>3</grade><stroke_count>4</stroke_count></misc>
<reading_meaning><rmgroup><meaning>water</meaning></rmgroup></reading_meaning>
</character>
"#;

const FIRE: &str = r#"<character>
<literal>火</literal>
<misc><grade>1</grade><stroke_count>4</stroke_count><jlpt>4</jlpt></misc>
</character>
"#;

const WATER_JLPT: &str = r#"<character>
<literal>水</literal>
<misc><stroke_count>4</stroke_count><jlpt>1</jlpt></misc>
<reading_meaning><rmgroup><meaning>water</meaning><meaning>liquid</meaning></rmgroup></reading_meaning>
</character>
"#;

fn document(characters: &[&str]) -> String {
    let mut doc = String::from(HEADER);
    for c in characters {
        doc.push_str(c);
    }
    doc.push_str("</kanjidic2>\n");
    doc
}

fn write_gz(path: &Path, content: &str) {
    let mut enc = GzEncoder::new(File::create(path).unwrap(), flate2::Compression::default());
    enc.write_all(content.as_bytes()).unwrap();
    enc.finish().unwrap();
}

fn run(doc: &str) -> (Result<KanjiSummary, Error>, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("kanjidic2.xml.gz");
    write_gz(&src, doc);
    let dst = dir.path().join("assets").join("kanji.json");
    let res = Kanjidic::new(Source::new(&src, Compression::Auto), dst, Options::kanji()).run();
    (res, dir)
}

fn output(dir: &tempfile::TempDir) -> String {
    std::fs::read_to_string(dir.path().join("assets").join("kanji.json")).unwrap()
}

#[test]
fn nichi_end_to_end() {
    let (res, dir) = run(&document(&[NICHI]));
    let summary = res.unwrap();
    assert_eq!(summary.records, 1);
    assert_eq!(summary.entries, 1);

    let written: serde_json::Value = serde_json::from_str(&output(&dir)).unwrap();
    assert_eq!(
        written,
        json!({
            "日": {
                "literal": "日",
                "meanings": ["day"],
                "readings": {"on": ["ニチ"], "kun": ["ひ"]},
                "grade": 1,
                "jlpt": null,
                "stroke_count": 4
            }
        })
    );
}

#[test]
fn duplicate_literal() {
    let (res, dir) = run(&document(&[WATER_GRADE, FIRE, WATER_JLPT]));
    let summary = res.unwrap();
    assert_eq!(summary.records, 3);
    assert_eq!(summary.entries, 2);
    assert_eq!(summary.replaced, 1);

    let text = output(&dir);
    // position of the first occurrence
    assert!(text.find("\"水\"").unwrap() < text.find("\"火\"").unwrap());

    let corpus: KanjiCorpus = serde_json::from_str(&text).unwrap();
    let literals: Vec<&str> = corpus.entries().map(|k| k.literal.as_str()).collect();
    assert_eq!(literals, vec!["水", "火"]);

    let water = corpus.get("水").unwrap();
    assert_eq!(water.grade, None);
    assert_eq!(water.jlpt_level, Some(1));
    assert_eq!(water.meanings, vec!["water", "liquid"]);
}

#[test]
fn idempotent_output() {
    let doc = document(&[NICHI, FIRE, WATER_GRADE]);
    let (first, first_dir) = run(&doc);
    let (second, second_dir) = run(&doc);
    assert_eq!(first.unwrap(), second.unwrap());
    assert_eq!(output(&first_dir), output(&second_dir));
}

#[test]
fn parallel_is_identical() {
    let mut characters = Vec::new();
    let owned: Vec<String> = (0..300u32)
        .map(|i| {
            let c = char::from_u32(0x4e00 + i).unwrap();
            format!(
                "<character><literal>{c}</literal><misc><stroke_count>{}</stroke_count></misc></character>\n",
                i % 20 + 1
            )
        })
        .collect();
    characters.extend(owned.iter().map(String::as_str));
    let doc = document(&characters);

    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("kanjidic2.xml");
    std::fs::write(&src, &doc).unwrap();

    let mut par_options = Options::kanji();
    par_options.parallel = true;
    par_options.batch_size = 16;

    let (seq, _) = Kanjidic::new(Source::new(&src, Compression::Plain), dir.path().join("a.json"), Options::kanji())
        .assemble()
        .unwrap();
    let (par, _) = Kanjidic::new(Source::new(&src, Compression::Plain), dir.path().join("b.json"), par_options)
        .assemble()
        .unwrap();

    assert_eq!(seq.len(), 300);
    assert_eq!(
        serde_json::to_string(&seq).unwrap(),
        serde_json::to_string(&par).unwrap()
    );
}

#[test]
fn missing_literal_aborts() {
    let (res, dir) = run(&document(&[
        NICHI,
        FIRE,
        "<character><misc><grade>2</grade></misc></character>\n",
    ]));

    match res {
        Err(Error::MalformedRecord(e)) => {
            assert_eq!(e.index, 2);
            assert_eq!(e.reason, MalformedReason::MissingField("literal"));
        }
        other => panic!("expected a malformed record error, got {:?}", other),
    }
    assert!(!dir.path().join("assets").join("kanji.json").exists());
    assert!(!dir.path().join("assets").join("kanji.json.partial").exists());
}

#[test]
fn first_malformed_record_is_reported_in_parallel() {
    let doc = document(&[
        FIRE,
        "<character><literal>一</literal><misc><grade>one</grade></misc></character>\n",
        "<character><misc/></character>\n",
    ]);
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("kanjidic2.xml");
    std::fs::write(&src, &doc).unwrap();

    let mut options = Options::kanji();
    options.parallel = true;
    let res = Kanjidic::new(Source::new(&src, Compression::Auto), dir.path().join("k.json"), options).assemble();

    match res {
        Err(Error::MalformedRecord(e)) => {
            assert_eq!(e.index, 1);
            assert_eq!(e.key.as_deref(), Some("一"));
        }
        other => panic!("expected a malformed record error, got {:?}", other),
    }
}

#[test]
fn corrupt_gzip() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("kanjidic2.xml.gz");
    let mut bytes = Vec::new();
    {
        let mut enc = GzEncoder::new(&mut bytes, flate2::Compression::default());
        enc.write_all(document(&[NICHI]).as_bytes()).unwrap();
        enc.finish().unwrap();
    }
    bytes.truncate(bytes.len() / 2);
    std::fs::write(&src, &bytes).unwrap();

    let dst = dir.path().join("kanji.json");
    let res = Kanjidic::new(Source::new(&src, Compression::Auto), dst.clone(), Options::kanji()).run();
    assert!(matches!(res, Err(Error::SourceRead(_))));
    assert!(!dst.exists());
}
