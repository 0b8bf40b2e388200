// pinyin/src/converter.rs
//
// Public conversion surface.
//
// Every call runs the same pipeline:
//   validate options -> segment -> resolve readings -> render -> assemble
// and either returns the whole result or an error, never partial output.

use std::sync::Arc;

use hanzi_core::{segment, Config, Dictionary, Token};

use crate::assemble;
use crate::error::ConvertError;
use crate::options::Options;
use crate::render::{render, Field};
use crate::resolver::resolve;
use crate::style::Style;

/// Chinese to pinyin converter.
///
/// Holds a shared, immutable dictionary; cloning is cheap and every method
/// takes `&self`, so one converter can serve many threads.
///
/// # Example
/// ```
/// use hanzi_pinyin::{Converter, Options};
///
/// let conv = Converter::embedded().unwrap();
/// let opts = Options::default();
/// assert_eq!(conv.plain("中国人", &opts).unwrap(), "zhong guo ren");
/// assert_eq!(conv.tone("中国人", &opts).unwrap(), "zhōng guó rén");
/// assert_eq!(conv.slug("中国人", '-').unwrap(), "zhong-guo-ren");
/// ```
#[derive(Debug, Clone)]
pub struct Converter {
    dict: Arc<Dictionary>,
}

impl Converter {
    pub fn new(dict: Arc<Dictionary>) -> Self {
        Self { dict }
    }

    /// Converter over the dictionary compiled into the crate.
    pub fn embedded() -> Result<Self, ConvertError> {
        Ok(Self::new(Dictionary::embedded()?))
    }

    /// Converter over the dictionary described by `config`.
    ///
    /// The default configuration reuses the shared embedded dictionary
    /// instead of building a private copy.
    pub fn from_config(config: &Config) -> Result<Self, ConvertError> {
        if *config == Config::default() {
            return Self::embedded();
        }
        Ok(Self::new(Arc::new(Dictionary::from_config(config)?)))
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dict
    }

    /// Tokens of `text`, for callers that want the segmentation itself.
    pub fn segment<'t>(&self, text: &'t str) -> Vec<Token<'t, '_>> {
        segment(&self.dict, text)
    }

    /// Rendered fields with their kinds, after literal merging.
    pub fn convert_fields(&self, text: &str, options: &Options) -> Result<Vec<Field>, ConvertError> {
        options.validate()?;
        if text.is_empty() {
            return Ok(Vec::new());
        }

        let tokens = segment(&self.dict, text);
        let mut fields = Vec::with_capacity(tokens.len());
        for token in &tokens {
            let readings = resolve(token, options.multi_pronunciation);
            fields.extend(render(token, readings, options));
        }
        tracing::trace!(tokens = tokens.len(), fields = fields.len(), style = %options.style, "converted");
        Ok(assemble::merge_unknown(fields, options))
    }

    /// Convert in `options.style`, joined into one string.
    pub fn convert(&self, text: &str, options: &Options) -> Result<String, ConvertError> {
        let fields = self.convert_fields(text, options)?;
        Ok(assemble::join(fields, options))
    }

    /// Convert in `options.style`, one element per field.
    pub fn convert_array(&self, text: &str, options: &Options) -> Result<Vec<String>, ConvertError> {
        let fields = self.convert_fields(text, options)?;
        Ok(assemble::to_array(fields, options))
    }

    pub fn plain(&self, text: &str, options: &Options) -> Result<String, ConvertError> {
        self.convert(text, &restyle(options, Style::Plain))
    }

    pub fn plain_array(&self, text: &str, options: &Options) -> Result<Vec<String>, ConvertError> {
        self.convert_array(text, &restyle(options, Style::Plain))
    }

    pub fn tone(&self, text: &str, options: &Options) -> Result<String, ConvertError> {
        self.convert(text, &restyle(options, Style::Tone))
    }

    pub fn tone_array(&self, text: &str, options: &Options) -> Result<Vec<String>, ConvertError> {
        self.convert_array(text, &restyle(options, Style::Tone))
    }

    pub fn tone_num(&self, text: &str, options: &Options) -> Result<String, ConvertError> {
        self.convert(text, &restyle(options, Style::ToneNum))
    }

    pub fn tone_num_array(&self, text: &str, options: &Options) -> Result<Vec<String>, ConvertError> {
        self.convert_array(text, &restyle(options, Style::ToneNum))
    }

    pub fn tone_num_end(&self, text: &str, options: &Options) -> Result<String, ConvertError> {
        self.convert(text, &restyle(options, Style::ToneNumEnd))
    }

    pub fn tone_num_end_array(
        &self,
        text: &str,
        options: &Options,
    ) -> Result<Vec<String>, ConvertError> {
        self.convert_array(text, &restyle(options, Style::ToneNumEnd))
    }

    pub fn letter(&self, text: &str, options: &Options) -> Result<String, ConvertError> {
        self.convert(text, &restyle(options, Style::Letter))
    }

    pub fn letter_array(&self, text: &str, options: &Options) -> Result<Vec<String>, ConvertError> {
        self.convert_array(text, &restyle(options, Style::Letter))
    }

    /// URL-friendly slug: plain syllables joined by `separator`, with
    /// everything that is not convertible dropped.
    pub fn slug(&self, text: &str, separator: char) -> Result<String, ConvertError> {
        self.convert(text, &Options::slug(separator))
    }
}

fn restyle(options: &Options, style: Style) -> Options {
    Options {
        style,
        ..options.clone()
    }
}
