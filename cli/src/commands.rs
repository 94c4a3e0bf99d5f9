//! Subcommand bodies, written against `io::Write` so they can be tested
//! without a terminal.

use std::io::{self, Read, Write};

use anyhow::Context;
use seedphrase_codec::{derive_seed, encode_hex, generate_mnemonic, MnemonicValidator};
use seedphrase_types::{EntropySource, WordCount};
use seedphrase_wordlists::Language;
use zeroize::{Zeroize, Zeroizing};

/// Use `arg` when given, otherwise read one value from `input`.
///
/// Only the line ending is stripped, so stray spaces still reach the
/// validator and get reported.
pub fn read_input(arg: Option<String>, input: &mut impl Read) -> anyhow::Result<Zeroizing<String>> {
    if let Some(value) = arg {
        return Ok(Zeroizing::new(value));
    }
    let mut buf = read_secret(input).context("failed to read from stdin")?;
    let trimmed = buf.trim_end_matches(['\n', '\r']).len();
    buf.truncate(trimmed);
    Ok(buf)
}

/// Read all of `input` as UTF-8.
///
/// The buffer is grown by hand: each outgrown block is wiped before it is
/// freed, which `read_to_string` does not do.
fn read_secret(input: &mut impl Read) -> io::Result<Zeroizing<String>> {
    let mut buf = Zeroizing::new(Vec::with_capacity(1024));
    let mut chunk = Zeroizing::new([0u8; 256]);
    loop {
        let n = match input.read(&mut chunk[..]) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if buf.len() + n > buf.capacity() {
            let capacity = (buf.len() + n).max(buf.capacity() * 2);
            let mut bigger = Zeroizing::new(Vec::with_capacity(capacity));
            bigger.extend_from_slice(&buf);
            buf = bigger;
        }
        buf.extend_from_slice(&chunk[..n]);
    }
    match String::from_utf8(std::mem::take(&mut *buf)) {
        Ok(text) => Ok(Zeroizing::new(text)),
        Err(e) => {
            e.into_bytes().zeroize();
            Err(io::Error::new(io::ErrorKind::InvalidData, "input is not valid UTF-8"))
        }
    }
}

pub fn generate(
    source: &dyn EntropySource,
    word_count: WordCount,
    language: Language,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let phrase = generate_mnemonic(source, word_count, &language)?;
    writeln!(out, "{}", phrase.as_str())?;
    Ok(())
}

pub fn from_entropy(hex: &str, language: Language, out: &mut impl Write) -> anyhow::Result<()> {
    let phrase = encode_hex(hex, &language).context("cannot encode entropy")?;
    writeln!(out, "{}", phrase.as_str())?;
    Ok(())
}

/// Print the verdict for `mnemonic`; returns whether it is valid.
pub fn validate(mnemonic: &str, language: Language, out: &mut impl Write) -> anyhow::Result<bool> {
    let validator = MnemonicValidator::new(&language);
    match validator.validate(mnemonic) {
        Ok(()) => {
            writeln!(out, "valid")?;
            Ok(true)
        }
        Err(e) => {
            writeln!(out, "invalid: {e}")?;
            Ok(false)
        }
    }
}

pub fn entropy(mnemonic: &str, language: Language, out: &mut impl Write) -> anyhow::Result<()> {
    let validator = MnemonicValidator::new(&language);
    let entropy = validator.to_entropy(mnemonic).context("invalid mnemonic")?;
    writeln!(out, "{}", entropy.to_hex().as_str())?;
    Ok(())
}

/// Print the seed as lowercase hex.
///
/// With `check` set the phrase must first pass validation against
/// `language`; otherwise any text is accepted.
pub fn seed(
    mnemonic: &str,
    passphrase: &str,
    language: Language,
    check: bool,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    if check {
        MnemonicValidator::new(&language)
            .validate(mnemonic)
            .context("invalid mnemonic (pass --unchecked to derive anyway)")?;
    }
    let seed = derive_seed(mnemonic, passphrase);
    writeln!(out, "{}", seed.to_hex().as_str())?;
    Ok(())
}
