//! Text tokenization for search indexing and querying.

use super::encoder::encode_word;

/// An encoded term together with the position of the word it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Token {
    pub(crate) term: String,
    /// Zero-based index of the source word within the tokenized text
    pub(crate) position: u32,
}

/// Tokenizes text into encoded terms with case-aware splitting.
///
/// Words are runs of alphanumeric characters, optionally joined by `-` or `_`.
/// Every word is additionally split on its internal boundaries:
/// - **camelCase**: "useState" → ["use", "State", "useState"]
/// - **snake_case**: "render_loop" → ["render", "loop", "render_loop"]
/// - **kebab-case**: "ratatui-kit" → ["ratatui", "kit", "ratatui-kit"]
///
/// Subwords share the position of the word that contains them. All terms are
/// passed through [`encode_word`] before they are returned.
pub(crate) fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = vec![];
    let mut position = 0;

    let mut in_word = false;
    let mut last_case = None; // Track case transitions (None/Some(false)/Some(true))
    let mut word_start = 0; // Start of full word (e.g., "useState")
    let mut subword_start = 0; // Start of subword (e.g., "State")
    let mut subword_start_next_char = false;

    for (i, c) in text.char_indices() {
        let is_joiner = c == '-' || c == '_';

        if !(c.is_alphanumeric() || (is_joiner && in_word)) {
            if in_word {
                finish_word(
                    text,
                    word_start,
                    subword_start,
                    subword_start_next_char,
                    i,
                    position,
                    &mut tokens,
                );
                position += 1;
                in_word = false;
            }
            last_case = None;
            continue;
        }

        if !in_word {
            in_word = true;
            word_start = i;
            subword_start = i;
            subword_start_next_char = false;
        }

        if subword_start_next_char && !is_joiner {
            subword_start = i;
            subword_start_next_char = false;
        }

        // lowercase → uppercase starts a camelCase subword
        let current_case = c.is_alphabetic().then(|| c.is_uppercase());
        let case_change = last_case == Some(false) && current_case == Some(true);
        last_case = current_case;

        if is_joiner {
            if !subword_start_next_char && i > subword_start {
                push_token(&text[subword_start..i], position, &mut tokens);
            }
            subword_start_next_char = true;
        } else if case_change {
            if i > subword_start {
                push_token(&text[subword_start..i], position, &mut tokens);
            }
            subword_start = i;
        }
    }

    if in_word {
        finish_word(
            text,
            word_start,
            subword_start,
            subword_start_next_char,
            text.len(),
            position,
            &mut tokens,
        );
    }

    tokens
}

/// Emits the trailing subword and the complete word ending at `end`.
fn finish_word(
    text: &str,
    word_start: usize,
    subword_start: usize,
    pending_joiner: bool,
    end: usize,
    position: u32,
    tokens: &mut Vec<Token>,
) {
    if subword_start != word_start && !pending_joiner && end > subword_start {
        push_token(&text[subword_start..end], position, tokens);
    }

    let word = text[word_start..end].trim_end_matches(['-', '_']);
    push_token(word, position, tokens);
}

fn push_token(raw: &str, position: u32, tokens: &mut Vec<Token>) {
    let term = encode_word(raw);
    // "trailing_" yields the same term as subword and as word
    let repeated = tokens
        .last()
        .is_some_and(|t| t.position == position && t.term == term);
    if !term.is_empty() && !repeated {
        tokens.push(Token { term, position });
    }
}

/// Number of words [`tokenize`] would assign positions to.
pub(crate) fn word_count(tokens: &[Token]) -> u32 {
    tokens.last().map_or(0, |t| t.position + 1)
}

/// Yields every non-empty prefix of `term`, shortest first.
///
/// Indexing all prefixes is what lets a query for "inst" reach "installing".
pub(crate) fn forward_prefixes(term: &str) -> impl Iterator<Item = &str> {
    term.char_indices()
        .map(|(i, c)| i + c.len_utf8())
        .map(move |end| &term[..end])
}

/// Distinct query terms in order of first appearance.
pub(crate) fn query_terms(query: &str) -> Vec<String> {
    let mut terms: Vec<String> = vec![];
    for token in tokenize(query) {
        if !terms.contains(&token.term) {
            terms.push(token.term);
        }
    }
    terms
}
