//! Character record extraction.
//!
//! A KANJIDIC2 `<character>` holds its `literal`, meanings and readings grouped under
//! `reading_meaning/rmgroup`, and numeric properties under `misc`.
use crate::error::{MalformedReason, MalformedRecordError};
use crate::filtering::{Filter, Language, TargetLanguage};
use crate::io::reader::Element;

use super::types::{KanjiEntry, ReadingKind, Readings};

const M_LANG: &str = "m_lang";
const R_TYPE: &str = "r_type";

/// Turns `<character>` records into [KanjiEntry].
#[derive(Debug, Clone)]
pub struct KanjiExtractor {
    target: TargetLanguage,
}

impl Default for KanjiExtractor {
    fn default() -> Self {
        Self::new(TargetLanguage::new("en"))
    }
}

impl KanjiExtractor {
    pub fn new(target: TargetLanguage) -> Self {
        Self { target }
    }

    /// Extract the character record at position `index`.
    ///
    /// Fails if the literal is missing or a `misc` property is not a number.
    pub fn extract(
        &self,
        index: usize,
        character: &Element,
    ) -> Result<KanjiEntry, MalformedRecordError> {
        let literal = character
            .child("literal")
            .and_then(Element::text)
            .ok_or_else(|| {
                MalformedRecordError::new(index, None, MalformedReason::MissingField("literal"))
            })?
            .to_string();

        let mut meanings = Vec::new();
        let mut readings = Readings::default();

        let groups = character
            .find_all("reading_meaning")
            .flat_map(|rm| rm.children_named("rmgroup"));
        for group in groups {
            for node in group.children() {
                match node.name() {
                    "meaning" if self.target.detect(Language::classify(node.attribute(M_LANG))) => {
                        if let Some(text) = node.text() {
                            meanings.push(text.to_string());
                        }
                    }
                    "reading" => {
                        if let (Some(kind), Some(text)) =
                            (ReadingKind::from_attribute(node.attribute(R_TYPE)), node.text())
                        {
                            readings.push(kind, text.to_string());
                        }
                    }
                    _ => (),
                }
            }
        }

        let misc = character.child("misc");
        let numeric = |field: &'static str| {
            parse_numeric(misc, field).map_err(|reason| {
                MalformedRecordError::new(index, Some(literal.clone()), reason)
            })
        };
        let grade = numeric("grade")?;
        let jlpt_level = numeric("jlpt")?;
        let stroke_count = numeric("stroke_count")?;

        Ok(KanjiEntry {
            literal,
            meanings,
            readings,
            grade,
            jlpt_level,
            stroke_count,
        })
    }
}

/// Parse the first `field` child of `misc`, if any.
fn parse_numeric(misc: Option<&Element>, field: &'static str) -> Result<Option<u32>, MalformedReason> {
    let node = match misc.and_then(|m| m.child(field)) {
        Some(node) => node,
        None => return Ok(None),
    };
    let value = node.text().unwrap_or_default();
    value
        .trim()
        .parse::<u32>()
        .map(Some)
        .map_err(|_| MalformedReason::NotNumeric {
            field,
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::reader::RecordReader;

    fn parse(xml: &str) -> Element {
        RecordReader::new(xml.as_bytes(), "character")
            .next()
            .unwrap()
            .unwrap()
    }

    fn extract(xml: &str) -> Result<KanjiEntry, MalformedRecordError> {
        KanjiExtractor::default().extract(7, &parse(xml))
    }

    #[test]
    fn nichi() {
        let entry = extract(
            r#"<character>
<literal>日</literal>
<codepoint><cp_value cp_type="ucs">65e5</cp_value></codepoint>
<misc><grade>1</grade><stroke_count>4</stroke_count><freq>1</freq></misc>
<reading_meaning><rmgroup>
<reading r_type="pinyin">ri4</reading>
<reading r_type="ja_on">ニチ</reading>
<reading r_type="ja_kun">ひ</reading>
<meaning>day</meaning>
<meaning m_lang="fr">jour</meaning>
<meaning m_lang="es">día</meaning>
</rmgroup><nanori>か</nanori></reading_meaning>
</character>"#,
        )
        .unwrap();

        assert_eq!(
            entry,
            KanjiEntry {
                literal: "日".to_string(),
                meanings: vec!["day".to_string()],
                readings: Readings {
                    on: vec!["ニチ".to_string()],
                    kun: vec!["ひ".to_string()],
                },
                grade: Some(1),
                jlpt_level: None,
                stroke_count: Some(4),
            }
        );
    }

    #[test]
    fn missing_literal() {
        let err = extract("<character><misc><grade>1</grade></misc></character>").unwrap_err();
        assert_eq!(err.index, 7);
        assert_eq!(err.key, None);
        assert_eq!(err.reason, MalformedReason::MissingField("literal"));
    }

    #[test]
    fn non_numeric_grade() {
        let err = extract("<character><literal>水</literal><misc><grade>three</grade></misc></character>")
            .unwrap_err();
        assert_eq!(err.key.as_deref(), Some("水"));
        assert_eq!(
            err.reason,
            MalformedReason::NotNumeric {
                field: "grade",
                value: "three".to_string()
            }
        );
    }

    #[test]
    fn empty_numeric_field() {
        let err = extract("<character><literal>水</literal><misc><jlpt/></misc></character>").unwrap_err();
        assert!(matches!(
            err.reason,
            MalformedReason::NotNumeric { field: "jlpt", .. }
        ));
    }

    #[test]
    fn no_misc() {
        let entry = extract("<character><literal>丂</literal></character>").unwrap();
        assert_eq!(entry.grade, None);
        assert_eq!(entry.jlpt_level, None);
        assert_eq!(entry.stroke_count, None);
        assert!(entry.meanings.is_empty());
        assert_eq!(entry.readings, Readings::default());
    }

    #[test]
    fn first_stroke_count() {
        let entry = extract(
            "<character><literal>水</literal><misc><stroke_count>4</stroke_count><stroke_count>5</stroke_count></misc></character>",
        )
        .unwrap();
        assert_eq!(entry.stroke_count, Some(4));
    }

    #[test]
    fn order_across_groups() {
        let entry = extract(
            r#"<character><literal>生</literal><reading_meaning>
<rmgroup><reading r_type="ja_on">セイ</reading><meaning>life</meaning><reading r_type="ja_kun">い.きる</reading></rmgroup>
<rmgroup><meaning>genuine</meaning><reading r_type="ja_on">ショウ</reading><reading>なま</reading></rmgroup>
</reading_meaning></character>"#,
        )
        .unwrap();
        assert_eq!(entry.meanings, vec!["life", "genuine"]);
        assert_eq!(entry.readings.on, vec!["セイ", "ショウ"]);
        assert_eq!(entry.readings.kun, vec!["い.きる"]);
    }

    #[test]
    fn other_target_language() {
        let fr = KanjiExtractor::new(TargetLanguage::new("fr"));
        let character = parse(
            r#"<character><literal>日</literal><reading_meaning><rmgroup>
<meaning>day</meaning><meaning m_lang="fr">jour</meaning><meaning m_lang="es">día</meaning>
</rmgroup></reading_meaning></character>"#,
        );
        let entry = fr.extract(0, &character).unwrap();
        assert_eq!(entry.meanings, vec!["day", "jour"]);
    }
}
