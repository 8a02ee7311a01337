use std::{
    fs,
    io::{BufRead, Write},
    path::Path,
};

use tracing::{debug, warn};

use crate::{
    errors::errors::RecordError,
    lexer::{
        lexer::is_space,
        tokens::{Token, TokenKind},
    },
    parser::verdict::Verdict,
};

/// Writes one `KIND lexeme` line per token, in order.
pub fn write_records<W: Write>(tokens: &[Token], mut writer: W) -> Result<(), RecordError> {
    for token in tokens {
        writeln!(writer, "{}", token)?;
    }

    writer.flush()?;
    debug!(count = tokens.len(), "wrote token records");
    Ok(())
}

/// Reads `(kind name, lexeme)` pairs back into tokens.
///
/// Pairs are taken word by word, so line breaks carry no meaning. Words are
/// separated by the same whitespace the lexer skips, so any lexeme it emits
/// reads back whole. A kind name
/// left without a lexeme at the end of the input is dropped.
pub fn read_records<R: BufRead>(reader: R) -> Result<Vec<Token>, RecordError> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        words.extend(
            line.split(is_space)
                .filter(|word| !word.is_empty())
                .map(String::from),
        );
    }

    let mut tokens = Vec::with_capacity(words.len() / 2);
    let mut pairs = words.chunks_exact(2);

    for pair in pairs.by_ref() {
        let name = &pair[0];
        let kind: TokenKind = name.parse().map_err(|_| RecordError::UnknownTokenKind {
            record: tokens.len() + 1,
            name: name.clone(),
        })?;

        tokens.push(Token::new(kind, pair[1].clone()));
    }

    if let [dangling] = pairs.remainder() {
        warn!(word = %dangling, "ignoring incomplete trailing record");
    }

    debug!(count = tokens.len(), "read token records");
    Ok(tokens)
}

/// Writes the verdict as a single line.
pub fn write_verdict<W: Write>(verdict: &Verdict, mut writer: W) -> Result<(), RecordError> {
    writeln!(writer, "{}", verdict)?;
    writer.flush()?;
    Ok(())
}

/// Reads a source file for tokenizing.
///
/// Bytes that are not valid UTF-8 become U+FFFD, each one its own
/// single-character identifier once tokenized.
pub fn read_source(path: &Path) -> Result<String, RecordError> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
