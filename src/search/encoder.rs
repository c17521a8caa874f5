//! Character folding applied to indexed words and query words alike.
//!
//! Each word is lowercased, extended Latin letters are folded to their ASCII
//! base (`é` → `e`, `ß` → `ss`, `æ` → `ae`), and runs of the same letter are
//! collapsed (`install` → `instal`). Because both sides of a lookup go through
//! the same encoder, "Café", "cafe" and "caffe" all meet on `cafe`.

/// Encodes one word into its normalized search form.
pub(crate) fn encode_word(word: &str) -> String {
    let mut encoded = String::with_capacity(word.len());
    let mut last = None;

    for c in word.chars().flat_map(char::to_lowercase) {
        match fold_latin(c) {
            Some(folded) => {
                for f in folded.chars() {
                    push_collapsed(&mut encoded, &mut last, f);
                }
            }
            None => push_collapsed(&mut encoded, &mut last, c),
        }
    }

    encoded
}

fn push_collapsed(out: &mut String, last: &mut Option<char>, c: char) {
    // Digits are kept verbatim so "100" stays distinct from "10"
    if c.is_alphabetic() && *last == Some(c) {
        return;
    }
    out.push(c);
    *last = Some(c);
}

/// Maps a lowercase extended Latin letter to its ASCII spelling.
fn fold_latin(c: char) -> Option<&'static str> {
    let folded = match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => "a",
        'æ' => "ae",
        'ç' | 'ć' | 'ĉ' | 'ċ' | 'č' => "c",
        'ď' | 'đ' | 'ð' => "d",
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => "e",
        'ĝ' | 'ğ' | 'ġ' | 'ģ' => "g",
        'ĥ' | 'ħ' => "h",
        'ì' | 'í' | 'î' | 'ï' | 'ĩ' | 'ī' | 'ĭ' | 'į' | 'ı' => "i",
        'ĳ' => "ij",
        'ĵ' => "j",
        'ķ' => "k",
        'ĺ' | 'ļ' | 'ľ' | 'ŀ' | 'ł' => "l",
        'ñ' | 'ń' | 'ņ' | 'ň' | 'ŉ' => "n",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ŏ' | 'ő' => "o",
        'œ' => "oe",
        'ŕ' | 'ŗ' | 'ř' => "r",
        'ś' | 'ŝ' | 'ş' | 'š' | 'ſ' => "s",
        'ß' => "ss",
        'ţ' | 'ť' | 'ŧ' => "t",
        'þ' => "th",
        'ù' | 'ú' | 'û' | 'ü' | 'ũ' | 'ū' | 'ŭ' | 'ů' | 'ű' | 'ų' => "u",
        'ŵ' => "w",
        'ý' | 'ÿ' | 'ŷ' => "y",
        'ź' | 'ż' | 'ž' => "z",
        _ => return None,
    };
    Some(folded)
}
