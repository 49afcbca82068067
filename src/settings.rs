use std::str::FromStr;

use derive_more::{Display, Error};
use encoding_rs::{Encoding, ISO_8859_2, ISO_8859_5, UTF_8, WINDOWS_1250, WINDOWS_1251, WINDOWS_1252};

#[derive(Debug, Display, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[display("indent type `{_0}` not supported, expected `SPACES` or `TABS`")]
    UnknownIndentStyle(#[error(not(source))] String),
    #[display("code page {_0} not supported")]
    UnsupportedCodePage(#[error(not(source))] u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentStyle {
    Spaces,
    Tabs,
}

impl IndentStyle {
    fn character(&self) -> char {
        match self {
            IndentStyle::Spaces => ' ',
            IndentStyle::Tabs => '\t',
        }
    }
}

impl FromStr for IndentStyle {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SPACES" => Ok(IndentStyle::Spaces),
            "TABS" => Ok(IndentStyle::Tabs),
            other => Err(SettingsError::UnknownIndentStyle(other.to_string())),
        }
    }
}

/// One indentation configuration: the character to repeat and how many times
/// per level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent {
    pub style: IndentStyle,
    pub size: usize,
}

impl Indent {
    pub fn new(style: IndentStyle, size: usize) -> Self {
        Self { style, size }
    }

    /// Builds an indent from raw configuration values, e.g. `("SPACES", 4)`.
    pub fn parse(style: &str, size: usize) -> Result<Self, SettingsError> {
        Ok(Self::new(style.parse()?, size))
    }

    /// Text of one indentation level.
    pub fn unit(&self) -> String {
        self.style.character().to_string().repeat(self.size)
    }
}

/// Indentation and encoding configuration for the emitter, validated at
/// construction so the emitter can assume it is well formed.
#[derive(Debug, Clone)]
pub struct CodeGenerationSettings {
    code_page: u32,
    encoding: &'static Encoding,
    pub csharp_indent: Indent,
    pub sql_indent: Indent,
}

impl CodeGenerationSettings {
    pub fn new(
        csharp_files_code_page: u32,
        csharp_indent: Indent,
        sql_indent: Indent,
    ) -> Result<Self, SettingsError> {
        let encoding = encoding_for_code_page(csharp_files_code_page)
            .ok_or(SettingsError::UnsupportedCodePage(csharp_files_code_page))?;

        Ok(Self {
            code_page: csharp_files_code_page,
            encoding,
            csharp_indent,
            sql_indent,
        })
    }

    pub fn code_page(&self) -> u32 {
        self.code_page
    }

    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }
}

// WHATWG folds ISO-8859-1 into windows-1252, so code page 28591 maps there.
fn encoding_for_code_page(code_page: u32) -> Option<&'static Encoding> {
    match code_page {
        65001 => Some(UTF_8),
        1250 => Some(WINDOWS_1250),
        1251 => Some(WINDOWS_1251),
        1252 | 28591 => Some(WINDOWS_1252),
        28592 => Some(ISO_8859_2),
        28595 => Some(ISO_8859_5),
        _ => None,
    }
}
