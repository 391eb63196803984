//! Sample strings from RFC 3492 section 7.1.

use punycode::{decode, decode_str, encode, encode_str, Error, ErrorKind};

const SAMPLES: &[(&str, &str, &str)] = &[
    ("A: Arabic (Egyptian)", "ليهمابتكلموشعربي؟", "egbpdaj6bu4bxfgehfvwxn"),
    ("B: Chinese (simplified)", "他们为什么不说中文", "ihqwcrb4cv8a8dqg056pqjye"),
    ("C: Chinese (traditional)", "他們爲什麽不說中文", "ihqwctvzc91f659drss3x8bo0yb"),
    ("D: Czech", "Pročprostěnemluvíčesky", "Proprostnemluvesky-uyb24dma41a"),
    ("E: Hebrew", "למההםפשוטלאמדבריםעברית", "4dbcagdahymbxekheh6e0a7fei0b"),
    (
        "F: Hindi (Devanagari)",
        "यहलोगहिन्दीक्योंनहींबोलसकतेहैं",
        "i1baa7eci9glrd9b2ae1bj0hfcgg6iyaf8o0a1dig0cd",
    ),
    (
        "G: Japanese (kanji and hiragana)",
        "なぜみんな日本語を話してくれないのか",
        "n8jok5ay5dzabd5bym9f0cm5685rrjetr6pdxa",
    ),
    (
        "H: Korean (Hangul syllables)",
        "세계의모든사람들이한국어를이해한다면얼마나좋을까",
        "989aomsvi5e83db1d2a355cv1e0vak1dwrv93d5xbh15a0dt30a5jpsd879ccm6fea98c",
    ),
    (
        "I: Russian (Cyrillic)",
        "почемужеонинеговорятпорусски",
        "b1abfaaepdrnnbgefbadotcwatmq2g4l",
    ),
    (
        "J: Spanish",
        "PorquénopuedensimplementehablarenEspañol",
        "PorqunopuedensimplementehablarenEspaol-fmd56a",
    ),
    (
        "K: Vietnamese",
        "TạisaohọkhôngthểchỉnóitiếngViệt",
        "TisaohkhngthchnitingVit-kjcr8268qyxafd2f1b9g",
    ),
    ("L: 3<nen>B<gumi><kinpachi><sensei>", "3年B組金八先生", "3B-ww4c5e180e575a65lsy2b"),
    (
        "M: <amuro><namie>-with-SUPER-MONKEYS",
        "安室奈美恵-with-SUPER-MONKEYS",
        "-with-SUPER-MONKEYS-pc58ag80a8qai00g7n9n",
    ),
    (
        "N: Hello-Another-Way-<sorezore><no><basho>",
        "Hello-Another-Way-それぞれの場所",
        "Hello-Another-Way--fc4qua05auwb3674vfr0b",
    ),
    ("O: <hitotsu><yane><no><shita>2", "ひとつ屋根の下2", "2-u9tlzr9756bt3uc0v"),
    ("P: Maji<de>Koi<suru>5<byou><mae>", "MajiでKoiする5秒前", "MajiKoi5-783gue6qz075azm5e"),
    ("Q: <pafii>de<runba>", "パフィーdeルンバ", "de-jg4avhby1noc0d"),
    ("R: <sono><supiido><de>", "そのスピードで", "d9juau41awczczp"),
];

fn cps(s: &str) -> Vec<u32> {
    s.chars().map(u32::from).collect()
}

#[test]
fn test_encode_samples() {
    for &(name, unicode, ascii) in SAMPLES {
        assert_eq!(encode_str(unicode), ascii, "encode failed for {}", name);
        assert_eq!(encode(&cps(unicode)), Ok(cps(ascii)), "encode failed for {}", name);
    }
}

#[test]
fn test_decode_samples() {
    for &(name, unicode, ascii) in SAMPLES {
        assert_eq!(
            decode_str(ascii).as_deref(),
            Ok(unicode),
            "decode failed for {}",
            name
        );
        assert_eq!(decode(&cps(ascii)), Ok(cps(unicode)), "decode failed for {}", name);
    }
}

#[test]
fn test_decode_samples_uppercase_digits() {
    for &(name, unicode, ascii) in SAMPLES {
        let split = ascii.rfind('-').map_or(0, |pos| pos + 1);
        let upper = format!("{}{}", &ascii[..split], ascii[split..].to_ascii_uppercase());
        assert_eq!(
            decode_str(&upper).as_deref(),
            Ok(unicode),
            "decode failed for uppercased {}",
            name
        );
    }
}

#[test]
fn test_decode_mixed_case_annotation() {
    // The RFC writes sample I with one uppercase digit; it decodes the same
    assert_eq!(
        decode_str("b1abfaaepdrnnbgefbaDotcwatmq2g4l").as_deref(),
        Ok("почемужеонинеговорятпорусски")
    );
}

#[test]
fn test_ascii_sample_passes_through() {
    // Sample S is all basic code points and needs no encoding
    assert_eq!(encode_str("-> $1.00 <-"), "-> $1.00 <-");
    assert_eq!(encode(&cps("-> $1.00 <-")), Ok(cps("-> $1.00 <-")));
}

#[test]
fn test_truncated_samples() {
    for &(name, unicode, ascii) in SAMPLES {
        let truncated = &ascii[..ascii.len() - 1];
        match name.as_bytes()[0] {
            // The last integer of these is a single digit, so the
            // truncated form is a valid encoding one code point shorter
            b'A' | b'F' => {
                let decoded = decode_str(truncated).unwrap();
                assert_eq!(decoded.chars().count(), unicode.chars().count() - 1, "{}", name);
            }
            _ => {
                let err = decode_str(truncated).unwrap_err();
                assert_eq!(err, Error::UnexpectedEnd, "{}", name);
                assert_eq!(err.kind(), ErrorKind::InvalidEncoding);
            }
        }
    }
}

#[test]
fn test_invalid_character_in_sample() {
    assert_eq!(
        decode_str("egbpdaj6bu4bx@gehfvwxn"),
        Err(Error::InvalidCharacter('@' as u32))
    );
}
